//! Logger configuration loaded from TOML.
//!
//! ```toml
//! level = "info"        # none | error | warning | info | debug | verbose
//! backup_depth = 1      # clamped to 1..=5
//! directory = "/var/log/myapp"
//! console = true
//! ```
pub mod toml_loader;

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::logging::rotation::clamp_backup_depth;
use crate::logging::{LogLevel, documents_dir};

/// Default config file name, looked up in the log directory.
pub const CONFIG_FILE_NAME: &str = "daylog.toml";

/// Settings used to start a [`Logger`](crate::Logger).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    /// Minimum level written.
    pub level: LogLevel,
    /// Number of `PreviousLog<n>.txt` files kept; clamped to `1..=5`.
    pub backup_depth: usize,
    /// Directory for the log files; the documents directory when unset.
    pub directory: Option<PathBuf>,
    /// Echo each line to stdout.
    pub console: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            backup_depth: 1,
            directory: None,
            console: true,
        }
    }
}

impl LoggerConfig {
    /// Load configuration from `path`; a missing file yields the defaults.
    ///
    /// The backup depth is clamped rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML,
    /// contains unknown keys, or names an unknown level.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config: Self = toml_loader::load_config(path)?;
        config.backup_depth = clamp_backup_depth(config.backup_depth);
        Ok(config)
    }

    /// Directory the log files are written to.
    #[must_use]
    pub fn log_dir(&self) -> PathBuf {
        self.directory.clone().unwrap_or_else(documents_dir)
    }

    /// Default config file location: `daylog.toml` in the documents directory.
    #[must_use]
    pub fn default_path() -> PathBuf {
        documents_dir().join(CONFIG_FILE_NAME)
    }
}
