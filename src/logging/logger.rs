//! Level-gated logging facade in front of the background writer.
use std::fmt;
use std::path::PathBuf;
use std::sync::{Arc, mpsc};

use super::clock::{Clock, SystemClock};
use super::format::format_message;
use super::rotation::{LogPaths, RotationManager};
use super::types::{CallSite, LogLevel, LogTask};
use super::worker::{Console, Job, Settings, Worker};
use crate::config::LoggerConfig;
use crate::error::{DaylogError, WorkerError};

/// Generate one leveled entry point per level, each forwarding to
/// [`Logger::log`].
macro_rules! level_methods {
    ($($(#[$doc:meta])* $method:ident => $level:ident),+ $(,)?) => {
        $(
            $(#[$doc])*
            pub fn $method(&self, site: &CallSite<'_>, message: fmt::Arguments<'_>) {
                self.log(LogLevel::$level, site, message);
            }
        )+
    };
}

/// Asynchronous leveled logger writing to a day-rotated file and the console.
///
/// Construct one instance at program start and share it by reference or
/// [`Arc`]; every method takes `&self` and the type is `Send + Sync`.
/// Entry points return as soon as the message is queued.  Dropping the
/// logger waits for the writer thread to finish every queued message.
pub struct Logger {
    settings: Arc<Settings>,
    clock: Arc<dyn Clock>,
    paths: LogPaths,
    worker: Worker,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level())
            .field("backup_depth", &self.backup_depth())
            .field("paths", &self.paths)
            .finish_non_exhaustive()
    }
}

impl Logger {
    /// Start a logger from a loaded configuration, using the system clock
    /// and stdout for console echo.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer thread cannot be started.
    pub fn new(config: &LoggerConfig) -> Result<Self, DaylogError> {
        Self::builder(config.log_dir())
            .level(config.level)
            .backup_depth(config.backup_depth)
            .console(config.console)
            .build()
    }

    /// Begin configuring a logger that writes into `dir`.
    #[must_use]
    pub fn builder(dir: impl Into<PathBuf>) -> LoggerBuilder {
        LoggerBuilder::new(dir)
    }

    /// Set the minimum level; messages less severe than `level` are dropped.
    pub fn set_level(&self, level: LogLevel) {
        self.settings.set_level(level);
    }

    /// Current minimum level.
    #[must_use]
    pub fn level(&self) -> LogLevel {
        self.settings.level()
    }

    /// Whether a message at `level` would be written.
    #[must_use]
    pub fn enabled(&self, level: LogLevel) -> bool {
        level.passes(self.settings.level())
    }

    /// Set how many backups rotations keep, clamped to `1..=5`.
    ///
    /// Applies from the next rotation on; returns the stored value.
    pub fn set_backup_depth(&self, depth: usize) -> usize {
        self.settings.set_backup_depth(depth)
    }

    /// Number of backups the next rotation keeps.
    #[must_use]
    pub fn backup_depth(&self) -> usize {
        self.settings.backup_depth()
    }

    /// File names this logger writes.
    #[must_use]
    pub const fn paths(&self) -> &LogPaths {
        &self.paths
    }

    /// Queue `message` at `level` if the level is enabled.
    ///
    /// The time and call site are captured here, on the caller's thread.
    /// A disabled level costs one atomic load.
    pub fn log(&self, level: LogLevel, site: &CallSite<'_>, message: fmt::Arguments<'_>) {
        let Some(tag) = level.tag().filter(|_| self.enabled(level)) else {
            return;
        };
        let task = LogTask {
            text: format_message(tag, site, message),
            captured_at: self.clock.now(),
        };
        if let Err(e) = self.worker.submit(Job::Write(task)) {
            tracing::warn!(error = %e, "dropping log line");
        }
    }

    level_methods! {
        /// Log at [`LogLevel::Error`].
        error => Error,
        /// Log at [`LogLevel::Warning`].
        warning => Warning,
        /// Log at [`LogLevel::Info`].
        info => Info,
        /// Log at [`LogLevel::Debug`].
        debug => Debug,
        /// Log at [`LogLevel::Verbose`].
        verbose => Verbose,
    }

    /// Ask the writer to sync and close the current file once every
    /// earlier message is written.  Returns without waiting; the next
    /// message reopens the file.
    pub fn flush(&self) {
        if let Err(e) = self.worker.submit(Job::Close(None)) {
            tracing::warn!(error = %e, "flush ignored");
        }
    }

    /// Like [`flush`](Self::flush), but block until the writer has
    /// processed everything queued before this call.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer thread has stopped.
    pub fn flush_and_wait(&self) -> Result<(), DaylogError> {
        let (tx, rx) = mpsc::channel();
        self.worker.submit(Job::Close(Some(tx)))?;
        rx.recv().map_err(|_| WorkerError::Stopped)?;
        Ok(())
    }
}

/// Builder for [`Logger`].
pub struct LoggerBuilder {
    dir: PathBuf,
    level: LogLevel,
    backup_depth: usize,
    console: Option<Console>,
    clock: Arc<dyn Clock>,
}

impl fmt::Debug for LoggerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerBuilder")
            .field("dir", &self.dir)
            .field("level", &self.level)
            .field("backup_depth", &self.backup_depth)
            .field("console", &self.console.is_some())
            .finish_non_exhaustive()
    }
}

impl LoggerBuilder {
    fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            level: LogLevel::default(),
            backup_depth: 1,
            console: Some(Box::new(std::io::stdout())),
            clock: Arc::new(SystemClock),
        }
    }

    /// Initial minimum level (default [`LogLevel::Info`]).
    #[must_use]
    pub const fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Initial backup depth (default 1, clamped to `1..=5`).
    #[must_use]
    pub const fn backup_depth(mut self, depth: usize) -> Self {
        self.backup_depth = depth;
        self
    }

    /// Echo lines to stdout (`true`, the default) or not at all.
    #[must_use]
    pub fn console(mut self, enabled: bool) -> Self {
        self.console = enabled.then(|| Box::new(std::io::stdout()) as Console);
        self
    }

    /// Echo lines to `writer` instead of stdout.
    #[must_use]
    pub fn console_writer(mut self, writer: impl std::io::Write + Send + 'static) -> Self {
        self.console = Some(Box::new(writer));
        self
    }

    /// Take timestamps from `clock` instead of the system clock.
    #[must_use]
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Start the writer thread and return the logger.
    ///
    /// Nothing touches the filesystem until the first message is written.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer thread cannot be started.
    pub fn build(self) -> Result<Logger, DaylogError> {
        let paths = LogPaths::new(self.dir);
        let settings = Arc::new(Settings::new(self.level, self.backup_depth));
        let rotation = RotationManager::new(paths.clone(), settings.backup_depth());
        let worker = Worker::spawn(rotation, self.console, Arc::clone(&settings))?;
        Ok(Logger {
            settings,
            clock: self.clock,
            paths,
            worker,
        })
    }
}
