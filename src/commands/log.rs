//! Command: write a single message.
use anyhow::Result;

use crate::cli::LogOpts;
use crate::logging::Logger;

/// Queue the joined message words at the requested level.
///
/// Messages below the configured level are silently dropped, exactly as a
/// library caller would see.
///
/// # Errors
///
/// This command does not fail; the signature matches the other commands.
pub fn run(opts: &LogOpts, log: &Logger) -> Result<()> {
    let message = opts.message.join(" ");
    crate::log_at!(log, opts.severity, "{message}");
    Ok(())
}
