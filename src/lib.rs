//! Leveled, asynchronous logging to a day-rotated file with console echo.
//!
//! Messages pass a cheap level check on the caller's thread, are stamped
//! with their call site and time, and are queued for a single writer thread
//! that appends them to `CurrentLog.txt` and echoes them to stdout.  When a
//! message belongs to a later calendar day than the current file, the file
//! is moved into a bounded chain of `PreviousLog<n>.txt` backups.
//!
//! The public API is organised into three layers:
//!
//! - **[`logging`]**: the [`Logger`] facade, rotation, formatting, and clock
//! - **[`config`]**: [`LoggerConfig`] loaded from TOML
//! - **[`error`]**: typed errors for configuration and start-up
//!
//! ```no_run
//! use daylog::{LogLevel, Logger, log_error, log_info};
//!
//! let logger = Logger::builder("/tmp/daylog").level(LogLevel::Warning).build()?;
//! log_info!(logger, "not written at warning level");
//! log_error!(logger, "disk {} is full", "/dev/sda1");
//! logger.flush_and_wait()?;
//! # Ok::<(), daylog::error::DaylogError>(())
//! ```
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;

pub use config::LoggerConfig;
pub use logging::{CallSite, Clock, LogLevel, LogPaths, Logger, LoggerBuilder, SystemClock};

#[doc(hidden)]
pub use logging::format::function_name as __function_name;
