//! main - loads and validates the SMF configuration, then holds it until told to stop

use anyhow::{Context, Result};
use async_std::channel::Sender;
use async_std::prelude::*;
use clap::Parser;
use signal_hook::consts::signal::*;
use signal_hook_async_std::Signals;
use slog::{Drain, Logger, info, o};
use smf::{ConfigPaths, ConfigStore, ExpectedVersions, ValidationPolicy, Validator};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// SMF configuration file.
    #[arg(long, default_value = "config/smfcfg.yaml")]
    smfcfg: PathBuf,

    /// UE routing configuration file.  Without it no UE specific paths are configured.
    #[arg(long)]
    uerouting: Option<PathBuf>,

    /// TOML file setting the severity (ignore, warn or reject) of each validation check.
    /// Checks not mentioned keep their default severity.
    #[arg(long)]
    policy: Option<PathBuf>,

    /// Validate the configuration and exit.
    #[arg(long)]
    check: bool,
}

#[async_std::main]
async fn main() -> Result<()> {
    exit_on_panic();
    let args = Args::parse();

    // Read before the logger exists so that its log settings can be honored.
    let config = smf::read_config(&args.smfcfg)?;
    let default_level = config
        .logger
        .as_ref()
        .and_then(|l| l.env_filter("SMF"))
        .unwrap_or("info");
    let logger = init_logging(default_level);

    let policy = match &args.policy {
        Some(path) => smf::read_policy(path)?,
        None => ValidationPolicy::default(),
    };
    let validator = Validator::new(policy, ExpectedVersions::default());
    let paths = ConfigPaths {
        smfcfg: args.smfcfg,
        uerouting: args.uerouting,
    };
    let store = ConfigStore::load(paths, validator, logger.clone())
        .context("Configuration rejected")?;

    if args.check {
        info!(&logger, "Configuration OK");
        return Ok(());
    }

    wait_for_signal(&store, &logger).await?;
    info!(&logger, "Exiting");
    Ok(())
}

fn init_logging(default_level: &str) -> Logger {
    if std::env::var("RUST_LOG").is_err() {
        unsafe { std::env::set_var("RUST_LOG", default_level) }
    }
    let decorator = slog_term::TermDecorator::new().build();
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let drain = slog_async::Async::new(drain).build().fuse();
    let drain = slog_envlogger::new(drain);
    slog::Logger::root(drain, o!())
}

fn exit_on_panic() {
    let orig_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        orig_hook(panic_info);
        std::process::exit(1);
    }));
}

async fn wait_for_signal(store: &ConfigStore, logger: &Logger) -> Result<i32> {
    let signals = Signals::new([SIGHUP, SIGTERM, SIGINT, SIGQUIT])?;
    let handle = signals.handle();
    let (sig_sender, sig_receiver) = async_std::channel::unbounded();
    let signals_task = async_std::task::spawn(handle_signals(
        signals,
        sig_sender,
        store.clone(),
        logger.clone(),
    ));
    let signal = sig_receiver.recv().await;
    handle.close();
    signals_task.await;
    Ok(signal?)
}

async fn handle_signals(
    signals: Signals,
    sig_sender: Sender<i32>,
    store: ConfigStore,
    logger: Logger,
) {
    let mut signals = signals.fuse();
    while let Some(signal) = signals.next().await {
        match signal {
            SIGHUP => {
                let paths = store.paths();
                info!(
                    &logger,
                    "SIGHUP - reloading configuration from {}", paths.smfcfg.display()
                );
                if let Some(uerouting) = &paths.uerouting {
                    info!(&logger, "UE routing from {}", uerouting.display());
                }
                // Failure is logged by the store, and the old configuration stays live.
                let _ = store.reload();
            }
            SIGTERM | SIGINT | SIGQUIT => {
                let _ = sig_sender.send(signal).await;
            }
            _ => unreachable!(),
        }
    }
}
