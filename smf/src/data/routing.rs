use super::{Info, config::version_of};
use chrono::{DateTime, Utc};
use derive_deref::Deref;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root of the UE routing document (uerouting.yaml).  Versioned independently of
/// the main SMF configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RoutingConfig {
    #[serde(default)]
    pub info: Option<Info>,
    #[serde(rename = "ueRoutingInfo", default)]
    pub ue_routing_info: Vec<UeRoutingInfo>,
    #[serde(rename = "routeProfile", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub route_prof: BTreeMap<RouteProfId, RouteProfile>,
    #[serde(rename = "pfdDataForApp", default, skip_serializing_if = "Vec::is_empty")]
    pub pfd_datas: Vec<PfdDataForApp>,
}

impl RoutingConfig {
    /// The configured schema version, or "" if there is none.
    pub fn version(&self) -> &str {
        version_of(self.info.as_ref())
    }

    pub fn routing_for(&self, supi: &str) -> Option<&UeRoutingInfo> {
        self.ue_routing_info.iter().find(|r| r.supi == supi)
    }

    pub fn route_profile(&self, id: &RouteProfId) -> Option<&RouteProfile> {
        self.route_prof.get(id)
    }

    pub fn pfd_data(&self, app_id: &str) -> Option<&PfdDataForApp> {
        self.pfd_datas.iter().find(|p| p.app_id == app_id)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UeRoutingInfo {
    #[serde(rename = "SUPI", default, skip_serializing_if = "String::is_empty")]
    pub supi: String,
    // Access network the paths apply to
    #[serde(rename = "AN", default, skip_serializing_if = "String::is_empty")]
    pub an: String,
    #[serde(rename = "PathList", default, skip_serializing_if = "Vec::is_empty")]
    pub path_list: Vec<Path>,
}

/// An explicit path through the user plane for traffic to one destination.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Path {
    #[serde(rename = "DestinationIP", default, skip_serializing_if = "String::is_empty")]
    pub destination_ip: String,
    #[serde(rename = "DestinationPort", default, skip_serializing_if = "String::is_empty")]
    pub destination_port: String,
    // UPF hops, in order, by node name
    #[serde(rename = "UPF", default, skip_serializing_if = "Vec::is_empty")]
    pub upf: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Deref)]
#[serde(transparent)]
pub struct RouteProfId(pub String);

impl std::fmt::Display for RouteProfId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Maps a route profile to a forwarding policy that the UPF already knows about.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RouteProfile {
    #[serde(rename = "forwardingPolicyID", default, skip_serializing_if = "String::is_empty")]
    pub forwarding_policy_id: String,
}

/// PFDs for one application identifier.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PfdDataForApp {
    #[serde(rename = "applicationId")]
    pub app_id: String,
    #[serde(default)]
    pub pfds: Vec<PfdContent>,
    #[serde(rename = "cachingTime", default, skip_serializing_if = "Option::is_none")]
    pub caching_time: Option<DateTime<Utc>>,
}

/// Alternative ways of recognising an application's traffic.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PfdContent {
    #[serde(rename = "pfdID", default, skip_serializing_if = "String::is_empty")]
    pub pfd_id: String,
    // 3-tuples of protocol, server IP and server port
    #[serde(rename = "flowDescriptions", default, skip_serializing_if = "Vec::is_empty")]
    pub flow_descriptions: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub urls: Vec<String>,
    #[serde(rename = "domainNames", default, skip_serializing_if = "Vec::is_empty")]
    pub domain_names: Vec<String>,
}

impl PfdContent {
    /// True if there is nothing to match traffic against.
    pub fn is_empty(&self) -> bool {
        self.flow_descriptions.is_empty() && self.urls.is_empty() && self.domain_names.is_empty()
    }
}
