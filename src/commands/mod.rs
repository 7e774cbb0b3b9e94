//! Subcommand implementations of the `daylog` binary.
//!
//! Every command receives the [`Logger`] started by `main` and talks to it
//! only through the public library API.
pub mod burst;
pub mod demo;
pub mod files;
pub mod heartbeat;
pub mod log;
pub mod version;

use anyhow::{Context as _, Result};

use crate::cli::GlobalOpts;
use crate::config::LoggerConfig;
use crate::logging::Logger;

/// Load the config file named on the command line (or the default one) and
/// apply command-line overrides on top of it.
///
/// # Errors
///
/// Returns an error if the config file exists but cannot be read or parsed.
pub fn resolve_config(global: &GlobalOpts) -> Result<LoggerConfig> {
    let path = global
        .config
        .clone()
        .unwrap_or_else(LoggerConfig::default_path);
    let mut config = LoggerConfig::load(&path)
        .with_context(|| format!("loading config {}", path.display()))?;

    if let Some(dir) = &global.dir {
        config.directory = Some(dir.clone());
    }
    if let Some(level) = global.level {
        config.level = level;
    }
    if let Some(backups) = global.backups {
        config.backup_depth = backups;
    }
    if global.quiet {
        config.console = false;
    }
    Ok(config)
}

/// Resolve configuration and start the logger.
///
/// # Errors
///
/// Returns an error if configuration cannot be loaded or the writer thread
/// cannot be started.
pub fn start_logger(global: &GlobalOpts) -> Result<Logger> {
    let config = resolve_config(global)?;
    tracing::debug!(?config, "starting logger");
    Logger::new(&config).context("starting logger")
}
