//! models - 5G core vocabulary shared between network functions

mod snssai;
mod upf_info;

pub use snssai::Snssai;
pub use upf_info::{DnnUpfInfoItem, PduSessionType, SnssaiUpfInfoItem, UpInterfaceType};

use serde::{Deserialize, Serialize};

/// URI scheme of a service-based interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UriScheme {
    Http,
    #[default]
    Https,
}

impl std::fmt::Display for UriScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UriScheme::Http => write!(f, "http"),
            UriScheme::Https => write!(f, "https"),
        }
    }
}
