use anyhow::Result;
use chrono::{TimeZone, Utc};
use models::{DnnUpfInfoItem, PduSessionType, Snssai, SnssaiUpfInfoItem, UpInterfaceType, UriScheme};
use serde::Serialize;
use slog::{Drain, Logger, o};
use smf::{
    Config, Configuration, Dns, Info, InterfaceUpfInfoItem, LogSetting, LoggerConfig, Path,
    PfdContent, PfdDataForApp, Pfcp, RouteProfId, RouteProfile, RoutingConfig, Sbi,
    SnssaiDnnInfoItem, SnssaiInfoItem, Tls, UeRoutingInfo, UpLink, UpNode, UpNodeType,
    UserPlaneInformation,
};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

pub fn init_logging() -> Logger {
    let decorator = slog_term::TermDecorator::new().build();
    let drain = slog_term::CompactFormat::new(decorator).build();
    let drain = std::sync::Mutex::new(drain).fuse();
    let drain = slog_envlogger::new(drain);
    slog::Logger::root(drain, o!())
}

/// A file from the checked in test data directory.
pub fn data_file(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
}

pub fn write_file(contents: &str, suffix: &str) -> Result<NamedTempFile> {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile()?;
    file.write_all(contents.as_bytes())?;
    Ok(file)
}

pub fn write_yaml<T: Serialize>(document: &T) -> Result<NamedTempFile> {
    write_file(&serde_yaml::to_string(document)?, ".yaml")
}

pub fn info(version: &str) -> Option<Info> {
    Some(Info {
        version: version.to_string(),
        description: String::new(),
    })
}

/// A topology with the given nodes and links and nothing else configured.
pub fn topology(nodes: &[(&str, UpNodeType)], links: &[(&str, &str)]) -> UserPlaneInformation {
    let up_nodes = nodes
        .iter()
        .map(|(name, node_type)| {
            let node = UpNode {
                node_type: *node_type,
                an_ip: match node_type {
                    UpNodeType::An => "192.188.2.3".to_string(),
                    UpNodeType::Upf => String::new(),
                },
                ..Default::default()
            };
            (name.to_string(), node)
        })
        .collect();
    UserPlaneInformation {
        up_nodes,
        links: links.iter().map(|(a, b)| UpLink::new(a, b)).collect(),
    }
}

/// Routing document with one UE that has one path through `upfs`.
pub fn routing_via(supi: &str, upfs: &[&str]) -> RoutingConfig {
    RoutingConfig {
        info: info("1.0.0"),
        ue_routing_info: vec![UeRoutingInfo {
            supi: supi.to_string(),
            an: "10.200.200.101".to_string(),
            path_list: vec![Path {
                destination_ip: "60.60.0.101".to_string(),
                destination_port: "8888".to_string(),
                upf: upfs.iter().map(|s| s.to_string()).collect(),
            }],
        }],
        ..Default::default()
    }
}

fn dnn_info(dnn: &str, ue_subnet: &str) -> SnssaiDnnInfoItem {
    SnssaiDnnInfoItem {
        dnn: dnn.to_string(),
        dns: Dns {
            ipv4: "8.8.8.8".to_string(),
            ipv6: "2001:4860:4860::8888".to_string(),
        },
        ue_subnet: ue_subnet.to_string(),
    }
}

/// A configuration section with every field set.
pub fn sample_configuration() -> Configuration {
    let slice = Snssai::new(1, "000001");
    let mut userplane_information = topology(
        &[("gNB1", UpNodeType::An), ("UPF1", UpNodeType::Upf), ("UPF2", UpNodeType::Upf)],
        &[("gNB1", "UPF1"), ("UPF1", "UPF2")],
    );
    for (name, address) in [("UPF1", "10.200.200.101"), ("UPF2", "10.200.200.102")] {
        let node = userplane_information.up_nodes.get_mut(name).unwrap();
        node.node_id = address.to_string();
        node.dnn = "internet".to_string();
        node.snssai_upf_infos = vec![SnssaiUpfInfoItem {
            s_nssai: Some(slice.clone()),
            dnn_upf_info_list: vec![DnnUpfInfoItem {
                dnn: "internet".to_string(),
                dnai_list: vec!["mec".to_string()],
                pdu_session_types: vec![PduSessionType::Ipv4],
            }],
        }];
        node.interfaces = vec![InterfaceUpfInfoItem {
            interface_type: UpInterfaceType::N9,
            endpoints: vec![address.to_string()],
            network_instance: "internet".to_string(),
        }];
    }
    userplane_information
        .up_nodes
        .get_mut("UPF1")
        .unwrap()
        .interfaces
        .push(InterfaceUpfInfoItem {
            interface_type: UpInterfaceType::N3,
            endpoints: vec!["10.200.200.101".to_string()],
            network_instance: "internet".to_string(),
        });

    Configuration {
        smf_name: "SMF".to_string(),
        sbi: Some(Sbi {
            scheme: UriScheme::Https,
            tls: Some(Tls {
                pem: "config/TLS/smf.pem".to_string(),
                key: "config/TLS/smf.key".to_string(),
            }),
            register_ipv4: "127.0.0.2".to_string(),
            binding_ipv4: "0.0.0.0".to_string(),
            port: 8000,
        }),
        pfcp: Some(Pfcp {
            addr: "10.200.200.1".to_string(),
            port: 8805,
        }),
        nrf_uri: "http://127.0.0.10:8000".to_string(),
        userplane_information,
        service_name_list: vec!["nsmf-pdusession".to_string(), "nsmf-oam".to_string()],
        snssai_infos: vec![
            SnssaiInfoItem {
                s_nssai: Some(slice),
                dnn_infos: vec![dnn_info("internet", "60.60.0.0/16")],
            },
            SnssaiInfoItem {
                s_nssai: Some(Snssai::new(2, "000002")),
                dnn_infos: vec![
                    dnn_info("internet", "60.61.0.0/16"),
                    dnn_info("ims", "60.62.0.0/16"),
                ],
            },
        ],
        ulcl: true,
    }
}

pub fn sample_config() -> Config {
    let mut logger = BTreeMap::new();
    logger.insert(
        "SMF".to_string(),
        LogSetting {
            debug_level: "debug".to_string(),
            report_caller: true,
        },
    );
    Config {
        info: Some(Info {
            version: "1.0.0".to_string(),
            description: "SMF initial local configuration".to_string(),
        }),
        configuration: Some(sample_configuration()),
        logger: Some(LoggerConfig::new(logger)),
    }
}

/// A routing document with every field set, consistent with sample_configuration().
pub fn sample_routing() -> RoutingConfig {
    let mut routing = routing_via("imsi-208930000000003", &["UPF1", "UPF2"]);
    routing.route_prof.insert(
        RouteProfId("MEC1".to_string()),
        RouteProfile {
            forwarding_policy_id: "10".to_string(),
        },
    );
    routing.pfd_datas = vec![PfdDataForApp {
        app_id: "edge".to_string(),
        pfds: vec![PfdContent {
            pfd_id: "pfd1".to_string(),
            flow_descriptions: vec!["permit out ip from 60.60.0.1 8080 to any".to_string()],
            urls: vec!["^http://test.example.com(/\\S*)?$".to_string()],
            domain_names: vec!["edge.example.com".to_string()],
        }],
        caching_time: Some(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()),
    }];
    routing
}
