//! Day-based rotation of the current log file through a bounded backup chain.
//!
//! The writer thread owns a single [`RotationManager`].  Whenever a message
//! belongs to a different calendar day than the open file, the manager
//! closes the handle and re-evaluates the file on disk: a current log
//! created on an earlier day is shifted into the backup chain
//! (`PreviousLog1.txt` newest) and a fresh `CurrentLog.txt` is started.
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use super::clock::file_day;
use crate::error::RotationError;

/// Largest number of backups the chain keeps.
pub const MAX_BACKUP_DEPTH: usize = 5;

/// Name of the actively written file.
pub const CURRENT_LOG_NAME: &str = "CurrentLog.txt";

/// Clamp a requested backup depth into `1..=MAX_BACKUP_DEPTH`.
#[must_use]
pub fn clamp_backup_depth(depth: usize) -> usize {
    depth.clamp(1, MAX_BACKUP_DEPTH)
}

/// File names of the log set inside one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogPaths {
    dir: PathBuf,
}

impl LogPaths {
    /// Log set rooted at `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the log files.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of `CurrentLog.txt`.
    #[must_use]
    pub fn current(&self) -> PathBuf {
        self.dir.join(CURRENT_LOG_NAME)
    }

    /// Path of the backup with age `rank` (1 = most recent).
    #[must_use]
    pub fn backup(&self, rank: usize) -> PathBuf {
        self.dir.join(format!("PreviousLog{rank}.txt"))
    }

    /// Backups that currently exist on disk, ordered by rank.
    #[must_use]
    pub fn existing_backups(&self) -> Vec<(usize, PathBuf)> {
        (1..=MAX_BACKUP_DEPTH)
            .map(|rank| (rank, self.backup(rank)))
            .filter(|(_, path)| path.exists())
            .collect()
    }
}

/// The open current log and the calendar day it was opened for.
#[derive(Debug)]
struct OpenLog {
    day: i64,
    file: File,
}

impl OpenLog {
    fn finish(self) {
        if let Err(e) = self.file.sync_all() {
            tracing::warn!(error = %e, "failed to sync log file on close");
        }
    }
}

/// Owns the current log file handle and the backup chain around it.
#[derive(Debug)]
pub struct RotationManager {
    paths: LogPaths,
    backup_depth: usize,
    open: Option<OpenLog>,
}

impl RotationManager {
    /// Create a manager with nothing open.  `backup_depth` is clamped.
    #[must_use]
    pub fn new(paths: LogPaths, backup_depth: usize) -> Self {
        Self {
            paths,
            backup_depth: clamp_backup_depth(backup_depth),
            open: None,
        }
    }

    /// File names this manager writes.
    #[must_use]
    pub const fn paths(&self) -> &LogPaths {
        &self.paths
    }

    /// Number of backups kept by the next rotation.
    #[must_use]
    pub const fn backup_depth(&self) -> usize {
        self.backup_depth
    }

    /// Change the depth used by subsequent rotations.  Existing backups are
    /// left alone until the next rotation.
    pub fn set_backup_depth(&mut self, depth: usize) {
        self.backup_depth = clamp_backup_depth(depth);
    }

    /// Day the open handle belongs to, or `None` when nothing is open.
    #[must_use]
    pub fn open_day(&self) -> Option<i64> {
        self.open.as_ref().map(|o| o.day)
    }

    /// Return a handle valid for `today`, rotating first if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the log directory or the current file cannot be
    /// created or opened.  Failures while shifting backups are logged and
    /// do not prevent the current file from being opened.
    pub fn writable(&mut self, today: i64) -> Result<&mut File, RotationError> {
        let open = match self.open.take() {
            Some(open) if open.day == today => open,
            stale => {
                if let Some(stale) = stale {
                    tracing::debug!(day = stale.day, today, "day changed, reopening log");
                    stale.finish();
                }
                OpenLog {
                    day: today,
                    file: self.prepare(today)?,
                }
            }
        };
        Ok(&mut self.open.insert(open).file)
    }

    /// Rotate if the file on disk predates `today`, then open it for append.
    fn prepare(&self, today: i64) -> Result<File, RotationError> {
        let dir = self.paths.dir();
        fs::create_dir_all(dir).map_err(|source| RotationError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;

        let current = self.paths.current();
        match file_day(&current) {
            Ok(Some(created)) if created < today => {
                tracing::debug!(created, today, "rotating current log");
                self.shift_backups();
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(path = %current.display(), error = %e, "cannot read log file date; appending");
            }
        }

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&current)
            .map_err(|source| RotationError::Open {
                path: current,
                source,
            })
    }

    /// Move every backup one rank older and the current log to rank 1.
    ///
    /// Ranks are walked from the oldest down so nothing is overwritten
    /// before it has been moved.  Backups beyond the configured depth are
    /// discarded.  Every failure is logged and skipped.
    pub fn shift_backups(&self) {
        for rank in (self.backup_depth + 1..=MAX_BACKUP_DEPTH).rev() {
            report(remove_if_present(&self.paths.backup(rank)));
        }
        for rank in (2..=self.backup_depth).rev() {
            let older = self.paths.backup(rank);
            report(remove_if_present(&older));
            report(rename_if_present(&self.paths.backup(rank - 1), &older));
        }
        let newest = self.paths.backup(1);
        report(remove_if_present(&newest));
        report(rename_if_present(&self.paths.current(), &newest));
    }

    /// Sync and release the open handle.  Does nothing if none is open.
    pub fn close(&mut self) {
        if let Some(open) = self.open.take() {
            open.finish();
        }
    }
}

impl Drop for RotationManager {
    fn drop(&mut self) {
        self.close();
    }
}

fn report(result: Result<(), RotationError>) {
    if let Err(e) = result {
        tracing::warn!(error = %e, "log rotation step failed");
    }
}

fn remove_if_present(path: &Path) -> Result<(), RotationError> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(RotationError::Remove {
            path: path.to_path_buf(),
            source: e,
        }),
        _ => Ok(()),
    }
}

fn rename_if_present(from: &Path, to: &Path) -> Result<(), RotationError> {
    match fs::rename(from, to) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(RotationError::Rename {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            source: e,
        }),
        _ => Ok(()),
    }
}
