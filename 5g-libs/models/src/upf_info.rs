use crate::Snssai;
use serde::{Deserialize, Serialize};

/// User plane reference point of a UPF interface - TS29.510, 6.1.6.3.11.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpInterfaceType {
    N3,
    N6,
    N9,
    #[serde(rename = "DATA_FORWARDING")]
    DataForwarding,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PduSessionType {
    Ipv4,
    Ipv6,
    Ipv4v6,
    Unstructured,
    Ethernet,
}

/// Per-slice capability of a UPF - TS29.510, 6.1.6.2.12.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SnssaiUpfInfoItem {
    #[serde(rename = "sNssai")]
    pub s_nssai: Option<Snssai>,
    #[serde(rename = "dnnUpfInfoList", default)]
    pub dnn_upf_info_list: Vec<DnnUpfInfoItem>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DnnUpfInfoItem {
    #[serde(default)]
    pub dnn: String,
    #[serde(rename = "dnaiList", default, skip_serializing_if = "Vec::is_empty")]
    pub dnai_list: Vec<String>,
    #[serde(rename = "pduSessionTypes", default, skip_serializing_if = "Vec::is_empty")]
    pub pdu_session_types: Vec<PduSessionType>,
}

impl SnssaiUpfInfoItem {
    pub fn serves(&self, snssai: &Snssai, dnn: &str) -> bool {
        self.s_nssai.as_ref().is_some_and(|s| s.matches(snssai))
            && self.dnn_upf_info_list.iter().any(|d| d.dnn == dnn)
    }
}
