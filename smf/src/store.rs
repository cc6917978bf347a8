use crate::loader::{self, ConfigPaths, LoadedConfig};
use crate::validation::Validator;
use anyhow::Result;
use arc_swap::ArcSwap;
use slog::{Logger, error, info};
use std::sync::Arc;

/// Process-wide configuration.  Readers get an immutable snapshot.  A reload builds and
/// validates a whole new generation before swapping it in, and a failed reload leaves
/// the live generation in place.
#[derive(Clone)]
pub struct ConfigStore {
    current: Arc<ArcSwap<LoadedConfig>>,
    paths: ConfigPaths,
    validator: Validator,
    logger: Logger,
}

impl ConfigStore {
    pub fn load(paths: ConfigPaths, validator: Validator, logger: Logger) -> Result<Self> {
        let loaded = loader::load(&paths, &validator, &logger)?;
        log_summary(&loaded, &logger);
        Ok(ConfigStore {
            current: Arc::new(ArcSwap::from_pointee(loaded)),
            paths,
            validator,
            logger,
        })
    }

    pub fn current(&self) -> Arc<LoadedConfig> {
        self.current.load_full()
    }

    pub fn paths(&self) -> &ConfigPaths {
        &self.paths
    }

    /// Re-read the documents.  On failure the live configuration is left as it was.
    pub fn reload(&self) -> Result<()> {
        match loader::load(&self.paths, &self.validator, &self.logger) {
            Ok(loaded) => {
                log_summary(&loaded, &self.logger);
                self.current.store(Arc::new(loaded));
                info!(&self.logger, "Configuration reloaded");
                Ok(())
            }
            Err(e) => {
                error!(
                    &self.logger,
                    "Keeping previous configuration after failed reload - {e:#}"
                );
                Err(e)
            }
        }
    }
}

fn log_summary(loaded: &LoadedConfig, logger: &Logger) {
    let version = loaded.config.version();
    match loaded.configuration() {
        Some(c) => info!(
            logger,
            "SMF {} configuration version [{version}] - {} UP nodes, {} links, {} slices, SBI {}://{}:{}",
            c.smf_name,
            c.userplane_information.up_nodes.len(),
            c.userplane_information.links.len(),
            c.snssai_infos.len(),
            c.sbi_scheme(),
            c.sbi_binding_ipv4(),
            c.sbi_port()
        ),
        None => info!(logger, "SMF configuration version [{version}] has no configuration section"),
    }
    if let Some(routing) = &loaded.routing {
        info!(
            logger,
            "UE routing configuration version [{}] - {} UEs, {} route profiles, {} applications",
            routing.version(),
            routing.ue_routing_info.len(),
            routing.route_prof.len(),
            routing.pfd_datas.len()
        );
    }
}
