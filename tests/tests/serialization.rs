use smf::{Config, Configuration, Info, Pfcp, RoutingConfig, Sbi, Tls};
use smf_tests::framework::*;

fn round_trip<T>(value: &T) -> T
where
    T: serde::Serialize + serde::de::DeserializeOwned,
{
    let yaml = serde_yaml::to_string(value).unwrap();
    serde_yaml::from_str(&yaml).unwrap()
}

#[test]
fn full_configuration_round_trip() {
    let config = sample_config();
    assert_eq!(round_trip(&config), config);

    let routing = sample_routing();
    assert_eq!(round_trip(&routing), routing);
}

#[test]
fn absent_and_empty_sections_stay_distinct() {
    let mut configuration = Configuration::default();
    assert_eq!(round_trip(&configuration), configuration);

    configuration.sbi = Some(Sbi {
        tls: Some(Tls::default()),
        ..Default::default()
    });
    configuration.pfcp = Some(Pfcp::default());
    let decoded = round_trip(&configuration);
    assert_eq!(decoded.sbi.as_ref().unwrap().tls, Some(Tls::default()));
    assert_eq!(decoded.pfcp, Some(Pfcp::default()));

    let config = Config {
        info: Some(Info::default()),
        configuration: None,
        logger: None,
    };
    let decoded = round_trip(&config);
    assert_eq!(decoded.info, Some(Info::default()));
    assert_eq!(decoded.configuration, None);
    assert_eq!(decoded.version(), "");

    let routing = RoutingConfig::default();
    assert_eq!(round_trip(&routing), routing);
}

#[test]
fn wire_keys_match_deployed_files() {
    let yaml = serde_yaml::to_string(&sample_config()).unwrap();
    for key in [
        "smfName:",
        "registerIPv4:",
        "bindingIPv4:",
        "nrfUri:",
        "userplane_information:",
        "up_nodes:",
        "node_id:",
        "an_ip:",
        "sNssaiUpfInfos:",
        "dnnUpfInfoList:",
        "interfaceType: N9",
        "networkInstance:",
        "serviceNameList:",
        "snssaiInfos:",
        "sNssai:",
        "dnnInfos:",
        "ueSubnet:",
        "type: AN",
        "type: UPF",
        "scheme: https",
        "- A: gNB1",
        "debugLevel: debug",
        "ReportCaller: true",
    ] {
        assert!(yaml.contains(key), "{key} missing from\n{yaml}");
    }

    let yaml = serde_yaml::to_string(&sample_routing()).unwrap();
    for key in [
        "ueRoutingInfo:",
        "SUPI:",
        "AN:",
        "PathList:",
        "DestinationIP:",
        "DestinationPort:",
        "UPF:",
        "routeProfile:",
        "forwardingPolicyID:",
        "pfdDataForApp:",
        "applicationId:",
        "pfdID:",
        "flowDescriptions:",
        "domainNames:",
        "cachingTime:",
    ] {
        assert!(yaml.contains(key), "{key} missing from\n{yaml}");
    }
}

#[test]
fn deployed_files_parse() {
    let config = smf::read_config(&data_file("smfcfg.yaml")).unwrap();
    assert_eq!(config.version(), "1.0.0");
    let configuration = config.configuration.unwrap();
    assert!(configuration.ulcl);
    assert_eq!(configuration.userplane_information.up_nodes.len(), 4);
    assert_eq!(configuration.userplane_information.links.len(), 3);
    assert_eq!(configuration.sbi_port(), 8000);
    assert_eq!(configuration.pfcp.unwrap().port, 8805);

    let routing = smf::read_routing_config(&data_file("uerouting.yaml")).unwrap();
    assert_eq!(routing.version(), "1.0.0");
    assert_eq!(routing.ue_routing_info[0].path_list.len(), 2);
    assert!(routing.pfd_data("edge").unwrap().caching_time.is_some());
}
