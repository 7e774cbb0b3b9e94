//! Command: one message per level, as a quick check of the level filter.
use anyhow::Result;

use crate::logging::{LogLevel, Logger};

/// Write `"<Level> message"` once for every message level, most severe
/// first.  Only levels at or above the configured minimum reach the file.
///
/// # Errors
///
/// This command does not fail; the signature matches the other commands.
pub fn run(log: &Logger) -> Result<()> {
    for level in LogLevel::MESSAGE_LEVELS {
        match level {
            LogLevel::Error => crate::log_error!(log, "Error message"),
            LogLevel::Warning => crate::log_warning!(log, "Warning message"),
            LogLevel::Info => crate::log_info!(log, "Info message"),
            LogLevel::Debug => crate::log_debug!(log, "Debug message"),
            LogLevel::Verbose => crate::log_verbose!(log, "Verbose message"),
            LogLevel::None => {}
        }
    }
    Ok(())
}
