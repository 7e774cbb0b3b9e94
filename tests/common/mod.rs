// Shared helpers for integration tests.
//
// Provides a temporary log directory, a hand-driven clock and a capturing
// console so each integration test can run a logger in isolation.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Local};
use daylog::{Clock, LogLevel, LogPaths, Logger};

/// Clock frozen at a base instant that tests move forward by whole days.
///
/// Clones share the same offset, so a test can keep one handle while the
/// logger owns another.
#[derive(Clone)]
pub struct ManualClock {
    base: DateTime<Local>,
    days: Arc<AtomicI64>,
}

impl ManualClock {
    /// Clock reading the current wall time, not yet advanced.
    pub fn starting_now() -> Self {
        Self {
            base: Local::now(),
            days: Arc::new(AtomicI64::new(0)),
        }
    }

    /// Move every clone of this clock forward by `days`.
    pub fn advance_days(&self, days: i64) {
        self.days.fetch_add(days, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Local> {
        self.base + Duration::days(self.days.load(Ordering::SeqCst))
    }
}

/// Console sink whose contents stay readable after the logger takes it.
#[derive(Clone, Default)]
pub struct CapturedConsole(Arc<Mutex<Vec<u8>>>);

impl CapturedConsole {
    /// Everything written so far.
    pub fn contents(&self) -> String {
        let bytes = self.0.lock().expect("console lock").clone();
        String::from_utf8(bytes).expect("console is utf-8")
    }
}

impl Write for CapturedConsole {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().expect("console lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// An isolated log directory backed by a [`tempfile::TempDir`].
///
/// The directory is automatically deleted when dropped.
pub struct IntegrationTestContext {
    /// Temporary directory the logger writes into.
    pub root: tempfile::TempDir,
    /// Clock shared with every logger built from this context.
    pub clock: ManualClock,
    /// Console shared with every logger built from this context.
    pub console: CapturedConsole,
}

impl IntegrationTestContext {
    /// Create a new context with an empty log directory.
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().expect("create temp dir"),
            clock: ManualClock::starting_now(),
            console: CapturedConsole::default(),
        }
    }

    /// Path to the log directory.
    pub fn root_path(&self) -> &Path {
        self.root.path()
    }

    /// File names inside the log directory.
    pub fn paths(&self) -> LogPaths {
        LogPaths::new(self.root.path())
    }

    /// Start a logger at `level` keeping `depth` backups.
    pub fn logger(&self, level: LogLevel, depth: usize) -> Logger {
        Logger::builder(self.root.path())
            .level(level)
            .backup_depth(depth)
            .clock(self.clock.clone())
            .console_writer(self.console.clone())
            .build()
            .expect("start logger")
    }

    /// Lines of the current log, empty when it does not exist.
    pub fn current_lines(&self) -> Vec<String> {
        read_lines(&self.paths().current())
    }

    /// Lines of backup `rank`, empty when it does not exist.
    pub fn backup_lines(&self, rank: usize) -> Vec<String> {
        read_lines(&self.paths().backup(rank))
    }
}

/// Fluent builder for [`IntegrationTestContext`].
///
/// Allows individual tests to seed the log directory before a logger is
/// started.
pub struct TestContextBuilder {
    ctx: IntegrationTestContext,
}

impl TestContextBuilder {
    /// Begin building a new context with an empty directory.
    pub fn new() -> Self {
        Self {
            ctx: IntegrationTestContext::new(),
        }
    }

    /// Write `content` to `name` inside the log directory.
    pub fn with_file(self, name: &str, content: &str) -> Self {
        std::fs::write(self.ctx.root.path().join(name), content).expect("seed log file");
        self
    }

    /// Finish building and return the configured context.
    pub fn build(self) -> IntegrationTestContext {
        self.ctx
    }
}

/// Message text of a log line with the timestamp prefix removed.
pub fn message_of(line: &str) -> &str {
    line.split_once(": ").map_or(line, |(_, text)| text)
}

fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}
