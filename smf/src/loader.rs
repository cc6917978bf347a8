use crate::data::{Config, Configuration, RoutingConfig, UserPlaneInformation};
use crate::validation::{ValidationPolicy, ValidationReport, Validator};
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use slog::{Logger, error, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Where the configuration documents live.
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub smfcfg: PathBuf,
    pub uerouting: Option<PathBuf>,
}

/// One complete, validated generation of configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    pub config: Config,
    pub routing: Option<RoutingConfig>,
}

impl LoadedConfig {
    pub fn configuration(&self) -> Option<&Configuration> {
        self.config.configuration.as_ref()
    }

    /// Run the validator over both documents.  Routing paths are checked against the
    /// topology of the main configuration.
    pub fn validate(&self, validator: &Validator) -> ValidationReport {
        let mut report = validator.validate_config(&self.config);
        if let Some(routing) = &self.routing {
            let empty = UserPlaneInformation::default();
            let topology = self
                .configuration()
                .map(|c| &c.userplane_information)
                .unwrap_or(&empty);
            report.merge(validator.validate_routing(routing, topology));
        }
        report
    }
}

pub fn read_config(path: &Path) -> Result<Config> {
    read_yaml(path)
}

pub fn read_routing_config(path: &Path) -> Result<RoutingConfig> {
    read_yaml(path)
}

/// Load validation severities from a TOML file.
pub fn read_policy(path: &Path) -> Result<ValidationPolicy> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read validation policy {}", path.display()))?;
    let policy = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse validation policy {}", path.display()))?;
    Ok(policy)
}

fn read_yaml<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let document = serde_yaml::from_str(&contents)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(document)
}

/// Read and validate both documents.  Warnings are logged; rejected violations are
/// logged and returned together as a single ValidationErrors.
pub fn load(paths: &ConfigPaths, validator: &Validator, logger: &Logger) -> Result<LoadedConfig> {
    let config = read_config(&paths.smfcfg)
        .inspect_err(|e| error!(logger, "Failed to load SMF configuration - {e:#}"))?;
    let routing = match &paths.uerouting {
        Some(path) => Some(read_routing_config(path).inspect_err(|e| {
            error!(logger, "Failed to load UE routing configuration - {e:#}")
        })?),
        None => None,
    };

    let loaded = LoadedConfig { config, routing };
    let report = loaded.validate(validator);
    for violation in &report.warnings {
        warn!(logger, "{violation}");
    }
    for violation in &report.errors {
        error!(logger, "{violation}");
    }
    report.into_result()?;
    Ok(loaded)
}
