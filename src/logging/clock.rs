//! Wall-clock access and calendar-day arithmetic for rotation decisions.
use std::io;
use std::path::Path;

use chrono::{DateTime, Local, Offset as _, TimeZone};

const SECONDS_PER_DAY: i64 = 86_400;

/// Source of the current local time.
///
/// The logger captures every message's time through this trait, so tests
/// can move the clock across day boundaries without waiting.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    /// Return the current local time.
    fn now(&self) -> DateTime<Local>;
}

/// [`Clock`] backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Local calendar day of `at`, counted in days since the Unix epoch.
///
/// Uses the UTC offset carried by `at` itself, so a timestamp taken on
/// either side of a daylight-saving change lands on its own local day.
#[must_use]
pub fn day_number<Tz: TimeZone>(at: &DateTime<Tz>) -> i64 {
    let offset = i64::from(at.offset().fix().local_minus_utc());
    (at.timestamp() + offset).div_euclid(SECONDS_PER_DAY)
}

/// Local calendar day on which the file at `path` was created.
///
/// Falls back to the modification time on filesystems that do not record
/// creation time.  Returns `Ok(None)` when the file does not exist.
///
/// # Errors
///
/// Returns an error if the file exists but its metadata cannot be read.
pub fn file_day(path: &Path) -> io::Result<Option<i64>> {
    let metadata = match std::fs::metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e),
    };
    let created = metadata.created().or_else(|_| metadata.modified())?;
    Ok(Some(day_number(&DateTime::<Local>::from(created))))
}
