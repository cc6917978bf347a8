use super::{LoggerConfig, SnssaiDnnInfoItem, SnssaiInfoItem, UserPlaneInformation};
use models::{Snssai, UriScheme};
use serde::{Deserialize, Serialize};

pub const SMF_EXPECTED_CONFIG_VERSION: &str = "1.0.0";
pub const UE_ROUTING_EXPECTED_CONFIG_VERSION: &str = "1.0.0";

pub const SMF_DEFAULT_IPV4: &str = "127.0.0.2";
pub const SMF_DEFAULT_PORT: u16 = 8000;

/// Root of the SMF configuration document (smfcfg.yaml).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub info: Option<Info>,
    #[serde(default)]
    pub configuration: Option<Configuration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logger: Option<LoggerConfig>,
}

impl Config {
    /// The configured schema version, or "" if there is none.
    pub fn version(&self) -> &str {
        version_of(self.info.as_ref())
    }
}

pub(crate) fn version_of(info: Option<&Info>) -> &str {
    match info {
        Some(info) if !info.version.is_empty() => &info.version,
        _ => "",
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Info {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(rename = "smfName", default, skip_serializing_if = "String::is_empty")]
    pub smf_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sbi: Option<Sbi>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pfcp: Option<Pfcp>,

    // NRF used for registration and discovery
    #[serde(rename = "nrfUri", default, skip_serializing_if = "String::is_empty")]
    pub nrf_uri: String,

    #[serde(rename = "userplane_information", default)]
    pub userplane_information: UserPlaneInformation,

    #[serde(rename = "serviceNameList", default, skip_serializing_if = "Vec::is_empty")]
    pub service_name_list: Vec<String>,

    #[serde(rename = "snssaiInfos", default, skip_serializing_if = "Vec::is_empty")]
    pub snssai_infos: Vec<SnssaiInfoItem>,

    // Uplink classifier enabled
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub ulcl: bool,
}

impl Configuration {
    pub fn sbi_scheme(&self) -> UriScheme {
        self.sbi.as_ref().map(|s| s.scheme).unwrap_or_default()
    }

    /// Address registered at the NRF.
    pub fn sbi_register_ipv4(&self) -> &str {
        match &self.sbi {
            Some(sbi) if !sbi.register_ipv4.is_empty() => &sbi.register_ipv4,
            _ => SMF_DEFAULT_IPV4,
        }
    }

    /// Address the SBI server binds to.
    pub fn sbi_binding_ipv4(&self) -> &str {
        match &self.sbi {
            Some(sbi) if !sbi.binding_ipv4.is_empty() => &sbi.binding_ipv4,
            _ => SMF_DEFAULT_IPV4,
        }
    }

    pub fn sbi_port(&self) -> u16 {
        match &self.sbi {
            Some(sbi) if sbi.port != 0 => sbi.port,
            _ => SMF_DEFAULT_PORT,
        }
    }

    /// DNN entries of the first slice entry matching `snssai`.  None means the slice
    /// is not configured at all, which is different from a slice with no DNNs.
    pub fn find_dnn_infos(&self, snssai: &Snssai) -> Option<&[SnssaiDnnInfoItem]> {
        self.snssai_infos
            .iter()
            .find(|item| item.s_nssai.as_ref().is_some_and(|s| s.matches(snssai)))
            .map(|item| item.dnn_infos.as_slice())
    }

    pub fn find_dnn_info(&self, snssai: &Snssai, dnn: &str) -> Option<&SnssaiDnnInfoItem> {
        self.find_dnn_infos(snssai)?.iter().find(|d| d.dnn == dnn)
    }
}

/// Service based interface binding.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Sbi {
    #[serde(default)]
    pub scheme: UriScheme,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls: Option<Tls>,
    #[serde(rename = "registerIPv4", default, skip_serializing_if = "String::is_empty")]
    pub register_ipv4: String,
    #[serde(rename = "bindingIPv4", default, skip_serializing_if = "String::is_empty")]
    pub binding_ipv4: String,
    #[serde(default)]
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Tls {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub pem: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub key: String,
}

impl Tls {
    pub fn is_complete(&self) -> bool {
        !self.pem.is_empty() && !self.key.is_empty()
    }
}

/// N4 endpoint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Pfcp {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub addr: String,
    #[serde(default)]
    pub port: u16,
}
