//! Background writer thread that serializes every file operation.
//!
//! Callers hand [`Job`]s to a [`Worker`] through an unbounded channel; a
//! single named thread drains the channel in submission order.  The
//! rotation state lives on that thread only, so no lock guards the file.
use std::io::Write;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, AtomicUsize, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

use super::clock::day_number;
use super::format::with_timestamp;
use super::rotation::{RotationManager, clamp_backup_depth};
use super::types::{LogLevel, LogTask};
use crate::error::WorkerError;

/// Name given to the writer thread.
pub const WORKER_THREAD_NAME: &str = "daylog-writer";

/// Console destination for echoed lines.
pub type Console = Box<dyn Write + Send>;

/// Settings shared between the facade and the writer thread.
///
/// Plain atomics: a concurrent change affects at most the decision being
/// made at that moment.
#[derive(Debug)]
pub(super) struct Settings {
    level: AtomicU8,
    backup_depth: AtomicUsize,
}

impl Settings {
    pub(super) fn new(level: LogLevel, backup_depth: usize) -> Self {
        Self {
            level: AtomicU8::new(level as u8),
            backup_depth: AtomicUsize::new(clamp_backup_depth(backup_depth)),
        }
    }

    pub(super) fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.level.load(Ordering::Relaxed))
    }

    pub(super) fn set_level(&self, level: LogLevel) {
        self.level.store(level as u8, Ordering::Relaxed);
    }

    pub(super) fn backup_depth(&self) -> usize {
        self.backup_depth.load(Ordering::Relaxed)
    }

    pub(super) fn set_backup_depth(&self, depth: usize) -> usize {
        let depth = clamp_backup_depth(depth);
        self.backup_depth.store(depth, Ordering::Relaxed);
        depth
    }
}

/// Unit of work for the writer thread.
#[derive(Debug)]
pub enum Job {
    /// Timestamp, echo, and append one message.
    Write(LogTask),
    /// Sync and release the current file, then signal the sender if any.
    Close(Option<Sender<()>>),
}

/// State owned by the writer thread.
struct WriterState {
    rotation: RotationManager,
    console: Option<Console>,
    settings: Arc<Settings>,
}

impl WriterState {
    fn run(mut self, jobs: &Receiver<Job>) {
        tracing::debug!(dir = %self.rotation.paths().dir().display(), "log writer started");
        while let Ok(job) = jobs.recv() {
            match job {
                Job::Write(task) => self.write(&task),
                Job::Close(done) => {
                    self.rotation.close();
                    if let Some(done) = done {
                        done.send(()).ok();
                    }
                }
            }
        }
        self.rotation.close();
        tracing::debug!("log writer stopped");
    }

    fn write(&mut self, task: &LogTask) {
        let line = with_timestamp(&task.text, &task.captured_at);

        if let Some(console) = self.console.as_mut()
            && let Err(e) = writeln!(console, "{line}").and_then(|()| console.flush())
        {
            tracing::warn!(error = %e, "failed to echo log line to console");
        }

        self.rotation.set_backup_depth(self.settings.backup_depth());
        let today = day_number(&task.captured_at);
        match self.rotation.writable(today) {
            Ok(file) => {
                if let Err(e) = writeln!(file, "{line}") {
                    tracing::warn!(error = %e, "dropping log line: write failed");
                }
            }
            Err(e) => tracing::warn!(error = %e, "dropping log line: no writable log file"),
        }
    }
}

/// Handle to the writer thread.
///
/// Dropping the handle closes the channel and joins the thread, so every
/// job submitted before the drop is written.
#[derive(Debug)]
pub struct Worker {
    jobs: Option<Sender<Job>>,
    thread: Option<JoinHandle<()>>,
}

impl Worker {
    /// Spawn the writer thread.
    pub(super) fn spawn(
        rotation: RotationManager,
        console: Option<Console>,
        settings: Arc<Settings>,
    ) -> Result<Self, WorkerError> {
        let (tx, rx) = mpsc::channel();
        let state = WriterState {
            rotation,
            console,
            settings,
        };
        let thread = thread::Builder::new()
            .name(WORKER_THREAD_NAME.to_string())
            .spawn(move || state.run(&rx))
            .map_err(WorkerError::Spawn)?;
        Ok(Self {
            jobs: Some(tx),
            thread: Some(thread),
        })
    }

    /// Queue a job behind everything submitted so far.
    ///
    /// # Errors
    ///
    /// Returns [`WorkerError::Stopped`] if the writer thread has exited.
    pub fn submit(&self, job: Job) -> Result<(), WorkerError> {
        self.jobs
            .as_ref()
            .ok_or(WorkerError::Stopped)?
            .send(job)
            .map_err(|_| WorkerError::Stopped)
    }

    /// Close the channel and wait for the thread to drain it.
    pub fn shutdown(&mut self) {
        drop(self.jobs.take());
        if let Some(thread) = self.thread.take()
            && thread.join().is_err()
        {
            tracing::error!("log writer thread panicked");
        }
    }
}

impl Drop for Worker {
    fn drop(&mut self) {
        self.shutdown();
    }
}
