//! Error types for the daylog library.
//!
//! Internal modules return typed errors built with [`thiserror`].  Only
//! configuration loading and logger construction surface them to callers;
//! failures on the write path are reported through `tracing` and swallowed
//! so that logging never fails the caller.  The binary converts them to
//! [`anyhow::Error`] at its command boundary.
//!
//! # Error hierarchy
//!
//! ```text
//! DaylogError
//! ├── Config(ConfigError) # config file and level parsing
//! └── Worker(WorkerError) # the background writer thread
//!
//! RotationError           # creating, moving, and removing log files
//! ```
//!
//! [`RotationError`] stays inside the writer thread, where it is logged and
//! the line dropped, so it has no `DaylogError` variant.  Callers driving a
//! [`RotationManager`](crate::logging::rotation::RotationManager) directly
//! receive it as is.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the daylog library.
#[derive(Error, Debug)]
pub enum DaylogError {
    /// Configuration-related error (file I/O, TOML syntax, level names).
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The background writer could not be started or has stopped.
    #[error("Writer error: {0}")]
    Worker(#[from] WorkerError),
}

/// Errors that arise from loading logger configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A level name did not match any known level.
    #[error("Invalid log level '{0}': must be one of none, error, warning, info, debug, verbose")]
    InvalidLevel(String),

    /// The config file is not valid TOML or has unexpected keys.
    #[error("Invalid config in {path}: {source}")]
    Parse {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying TOML error.
        source: toml::de::Error,
    },

    /// An I/O error occurred while reading a config file.
    #[error("IO error reading config file {path}: {source}")]
    Io {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Errors that arise while maintaining the log files on disk.
#[derive(Error, Debug)]
pub enum RotationError {
    /// The log directory could not be created.
    #[error("cannot create log directory {path}: {source}")]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The current log file could not be opened for appending.
    #[error("cannot open log file {path}: {source}")]
    Open {
        /// File that could not be opened.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A stale backup could not be removed.
    #[error("cannot remove {path}: {source}")]
    Remove {
        /// File that could not be removed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A log file could not be moved to the next backup rank.
    #[error("cannot move {from} to {to}: {source}")]
    Rename {
        /// Source path.
        from: PathBuf,
        /// Destination path.
        to: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Errors that arise from the background writer thread.
#[derive(Error, Debug)]
pub enum WorkerError {
    /// The writer thread could not be spawned.
    #[error("cannot start writer thread: {0}")]
    Spawn(#[source] std::io::Error),

    /// The writer thread has exited and no longer accepts jobs.
    #[error("writer thread has stopped")]
    Stopped,
}
