use models::Snssai;
use serde::{Deserialize, Serialize};

/// The DNNs the SMF offers on one slice.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SnssaiInfoItem {
    #[serde(rename = "sNssai")]
    pub s_nssai: Option<Snssai>,
    #[serde(rename = "dnnInfos", default)]
    pub dnn_infos: Vec<SnssaiDnnInfoItem>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SnssaiDnnInfoItem {
    #[serde(default)]
    pub dnn: String,
    #[serde(default)]
    pub dns: Dns,
    // CIDR from which UE addresses are allocated
    #[serde(rename = "ueSubnet", default)]
    pub ue_subnet: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dns {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ipv4: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ipv6: String,
}
