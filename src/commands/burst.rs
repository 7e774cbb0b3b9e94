//! Command: concurrent writers sharing one logger.
use anyhow::{Context as _, Result};
use rayon::prelude::*;

use crate::cli::BurstOpts;
use crate::logging::Logger;

/// Write `count` messages from each of `threads` rayon workers, then wait
/// until the writer has drained the queue.
///
/// Messages from one writer keep their relative order in the file; how the
/// writers interleave depends on the order in which their calls reach the
/// queue.
///
/// # Errors
///
/// Returns an error if the thread pool cannot be built or the writer has
/// stopped.
pub fn run(opts: &BurstOpts, log: &Logger) -> Result<()> {
    let threads = opts.threads.max(1);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("burst-{i}"))
        .build()
        .context("building burst thread pool")?;

    pool.install(|| {
        (0..threads).into_par_iter().for_each(|writer| {
            for seq in 0..opts.count {
                crate::log_info!(log, "writer {writer} message {seq}");
            }
        });
    });

    log.flush_and_wait().context("waiting for burst to be written")?;
    tracing::debug!(threads, count = opts.count, "burst written");
    Ok(())
}
