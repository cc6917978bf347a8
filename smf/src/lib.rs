mod data;
mod loader;
mod store;
mod validation;

pub use data::*;
pub use loader::{ConfigPaths, LoadedConfig, load, read_config, read_policy, read_routing_config};
pub use store::ConfigStore;
pub use validation::{
    Document, ExpectedVersions, Severity, ValidationErrors, ValidationPolicy, ValidationReport,
    Validator, Violation,
};
