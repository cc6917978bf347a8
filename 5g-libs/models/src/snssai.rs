use serde::{Deserialize, Serialize};

/// S-NSSAI - TS23.003, 28.4.2.  The SD is carried as six hex digits and
/// is absent (empty) when the slice has no differentiator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Snssai {
    pub sst: u8,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sd: String,
}

impl Snssai {
    pub fn new(sst: u8, sd: &str) -> Self {
        Snssai {
            sst,
            sd: sd.to_string(),
        }
    }

    /// Compare ignoring case of the SD hex digits, which is how operators tend to write them.
    pub fn matches(&self, other: &Snssai) -> bool {
        self.sst == other.sst && self.sd.eq_ignore_ascii_case(&other.sd)
    }
}

impl std::fmt::Display for Snssai {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.sd.is_empty() {
            write!(f, "({})", self.sst)
        } else {
            write!(f, "({},{})", self.sst, self.sd)
        }
    }
}
