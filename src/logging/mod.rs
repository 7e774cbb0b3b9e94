//! Leveled logging to a day-rotated file with console echo.
//!
//! The pieces, leaves first:
//!
//! - [`clock`]: current time and calendar-day numbers
//! - [`format`]: `E[file.function:line] message` lines and timestamps
//! - [`rotation`]: `CurrentLog.txt` and the `PreviousLog<n>.txt` chain
//! - `worker`: the single writer thread owning all file state
//! - [`logger`]: the level-gated [`Logger`] facade

pub mod clock;
pub mod format;
pub mod logger;
mod macros;
pub mod rotation;
pub mod subscriber;
mod types;
mod utils;
mod worker;

pub use clock::{Clock, SystemClock, day_number};
pub use logger::{Logger, LoggerBuilder};
pub use rotation::{LogPaths, MAX_BACKUP_DEPTH};
pub use subscriber::init_subscriber;
pub use types::{CallSite, LogLevel, LogTask};
pub use utils::documents_dir;

/// Serializes environment variable manipulation across parallel test threads.
#[cfg(test)]
pub(crate) static TEST_ENV_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// In-memory console that tests can read back after the writer is done.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub(crate) struct SharedBuffer(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

#[cfg(test)]
impl SharedBuffer {
    /// Everything written so far, as UTF-8.
    pub(crate) fn contents(&self) -> String {
        let bytes = self
            .0
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

#[cfg(test)]
impl std::io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
