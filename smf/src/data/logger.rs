use derive_deref::Deref;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per network function log settings, keyed by NF name ("SMF", "PFCP", ...).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Deref)]
#[serde(transparent)]
pub struct LoggerConfig(BTreeMap<String, LogSetting>);

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LogSetting {
    #[serde(rename = "debugLevel", default)]
    pub debug_level: String,
    #[serde(rename = "ReportCaller", default)]
    pub report_caller: bool,
}

impl LoggerConfig {
    pub fn new(settings: BTreeMap<String, LogSetting>) -> Self {
        LoggerConfig(settings)
    }

    /// slog-envlogger directive for the configured level of `nf`, if one is set.
    pub fn env_filter(&self, nf: &str) -> Option<&'static str> {
        let level = self.get(nf)?.debug_level.to_ascii_lowercase();
        Some(match level.as_str() {
            "trace" => "trace",
            "debug" => "debug",
            "info" => "info",
            "warn" | "warning" => "warn",
            "error" => "error",
            "fatal" | "panic" => "critical",
            _ => return None,
        })
    }
}
