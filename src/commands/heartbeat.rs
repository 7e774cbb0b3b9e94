//! Command: periodic heartbeat lines until Ctrl-C.
//!
//! Useful for watching a long-running process cross midnight and rotate.
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use anyhow::{Context as _, Result};

use crate::cli::HeartbeatOpts;
use crate::logging::Logger;

/// Install a Ctrl-C handler and beat until it fires or the limit is hit.
///
/// # Errors
///
/// Returns an error if the Ctrl-C handler cannot be installed or the final
/// flush fails.
pub fn run(opts: &HeartbeatOpts, log: &Logger) -> Result<()> {
    let stop = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&stop);
    ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst))
        .context("installing Ctrl-C handler")?;

    let beats = beat(opts, log, &stop);
    crate::log_info!(log, "heartbeat stopped after {beats} beats");
    log.flush_and_wait().context("flushing heartbeat log")?;
    Ok(())
}

/// Write one info line per interval until `stop` is set or `opts.limit`
/// beats have been written.  Returns the number of beats.
pub fn beat(opts: &HeartbeatOpts, log: &Logger, stop: &AtomicBool) -> u64 {
    let interval = Duration::from_millis(opts.interval_ms);
    let mut beats = 0;
    while !stop.load(Ordering::SeqCst) && opts.limit.is_none_or(|limit| beats < limit) {
        beats += 1;
        crate::log_info!(log, "heartbeat {beats}");
        std::thread::sleep(interval);
    }
    beats
}
