//! userplane - the user plane topology that paths are computed over
//!
//! Nodes are addressed by the names operators give them in the configuration file,
//! and links are unordered pairs of those names.  Nothing here walks the graph; it is
//! a declarative description that a path selection component builds on.

use models::{Snssai, SnssaiUpfInfoItem, UpInterfaceType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserPlaneInformation {
    #[serde(rename = "up_nodes", default)]
    pub up_nodes: BTreeMap<String, UpNode>,
    #[serde(default)]
    pub links: Vec<UpLink>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UpNodeType {
    /// Access network anchor, e.g. a gNB.
    #[serde(rename = "AN")]
    An,
    #[default]
    #[serde(rename = "UPF")]
    Upf,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpNode {
    #[serde(rename = "type")]
    pub node_type: UpNodeType,

    // PFCP node ID of a UPF
    #[serde(rename = "node_id", default)]
    pub node_id: String,

    // Only meaningful for AN nodes
    #[serde(rename = "an_ip", default)]
    pub an_ip: String,

    #[serde(default)]
    pub dnn: String,

    #[serde(rename = "sNssaiUpfInfos", default, skip_serializing_if = "Vec::is_empty")]
    pub snssai_upf_infos: Vec<SnssaiUpfInfoItem>,

    #[serde(rename = "interfaces", default, skip_serializing_if = "Vec::is_empty")]
    pub interfaces: Vec<InterfaceUpfInfoItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterfaceUpfInfoItem {
    #[serde(rename = "interfaceType")]
    pub interface_type: UpInterfaceType,
    #[serde(default)]
    pub endpoints: Vec<String>,
    #[serde(rename = "networkInstance", default)]
    pub network_instance: String,
}

/// Undirected edge between two nodes, by name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpLink {
    #[serde(rename = "A")]
    pub a: String,
    #[serde(rename = "B")]
    pub b: String,
}

impl UpLink {
    pub fn new(a: &str, b: &str) -> Self {
        UpLink {
            a: a.to_string(),
            b: b.to_string(),
        }
    }

    pub fn touches(&self, name: &str) -> bool {
        self.a == name || self.b == name
    }

    /// The far end of the link as seen from `name`, or None if the link doesn't touch it.
    pub fn other_end(&self, name: &str) -> Option<&str> {
        if self.a == name {
            Some(&self.b)
        } else if self.b == name {
            Some(&self.a)
        } else {
            None
        }
    }

    fn joins(&self, x: &str, y: &str) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }
}

impl UpNode {
    pub fn serves(&self, snssai: &Snssai, dnn: &str) -> bool {
        self.snssai_upf_infos.iter().any(|i| i.serves(snssai, dnn))
    }

    pub fn interfaces_of(
        &self,
        interface_type: UpInterfaceType,
    ) -> impl Iterator<Item = &InterfaceUpfInfoItem> {
        self.interfaces
            .iter()
            .filter(move |i| i.interface_type == interface_type)
    }
}

impl UserPlaneInformation {
    pub fn node(&self, name: &str) -> Option<&UpNode> {
        self.up_nodes.get(name)
    }

    pub fn contains_node(&self, name: &str) -> bool {
        self.up_nodes.contains_key(name)
    }

    pub fn nodes_of_type(&self, node_type: UpNodeType) -> impl Iterator<Item = (&str, &UpNode)> {
        self.up_nodes
            .iter()
            .filter(move |(_, node)| node.node_type == node_type)
            .map(|(name, node)| (name.as_str(), node))
    }

    /// Names of the nodes linked to `name`.  A node linked twice to the same peer is
    /// reported twice.
    pub fn neighbours<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> {
        self.links.iter().filter_map(move |link| link.other_end(name))
    }

    pub fn are_linked(&self, x: &str, y: &str) -> bool {
        self.links.iter().any(|link| link.joins(x, y))
    }

    /// Links with an endpoint that is not a node, as (link index, missing endpoint).
    /// A link with two missing endpoints is reported twice.
    pub fn dangling_links(&self) -> impl Iterator<Item = (usize, &str)> {
        self.links.iter().enumerate().flat_map(move |(index, link)| {
            [&link.a, &link.b]
                .into_iter()
                .filter(move |endpoint| !self.contains_node(endpoint))
                .map(move |endpoint| (index, endpoint.as_str()))
        })
    }

    /// Entries of a UPF chain that don't name a node.
    pub fn missing_nodes<'a, S: AsRef<str>>(&self, chain: &'a [S]) -> Vec<&'a str> {
        chain
            .iter()
            .map(|name| name.as_ref())
            .filter(|name| !self.contains_node(name))
            .collect()
    }

    /// UPFs that declare support for `dnn` on `snssai`.
    pub fn upfs_serving<'a>(
        &'a self,
        snssai: &'a Snssai,
        dnn: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a UpNode)> {
        self.nodes_of_type(UpNodeType::Upf)
            .filter(move |(_, node)| node.serves(snssai, dnn))
    }
}
