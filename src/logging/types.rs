//! Core logging types: levels, call sites, and queued write tasks.
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local};
use serde::Deserialize;

use crate::error::ConfigError;

/// Severity threshold for log messages.
///
/// Lower values are more severe.  A message at level `L` is emitted when
/// `L <= minimum` and `L` is not [`LogLevel::None`]; a minimum of
/// [`LogLevel::None`] disables all output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum LogLevel {
    /// Nothing is logged.
    None = 0,
    /// Failures that need attention.
    Error = 1,
    /// Unexpected but recoverable conditions.
    #[serde(alias = "warn")]
    Warning = 2,
    /// Normal operational messages.
    #[default]
    Info = 3,
    /// Developer detail.
    Debug = 4,
    /// Everything.
    Verbose = 5,
}

impl LogLevel {
    /// All levels that can carry a message, most severe first.
    pub const MESSAGE_LEVELS: [Self; 5] = [
        Self::Error,
        Self::Warning,
        Self::Info,
        Self::Debug,
        Self::Verbose,
    ];

    /// Single-character tag written in front of each line, or `None` for
    /// [`LogLevel::None`], which never carries a message.
    #[must_use]
    pub const fn tag(self) -> Option<char> {
        match self {
            Self::None => None,
            Self::Error => Some('E'),
            Self::Warning => Some('W'),
            Self::Info => Some('I'),
            Self::Debug => Some('D'),
            Self::Verbose => Some('V'),
        }
    }

    /// Lowercase name, as accepted by [`FromStr`] and config files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Verbose => "verbose",
        }
    }

    /// Whether a message at `self` passes a configured `minimum`.
    #[must_use]
    pub fn passes(self, minimum: Self) -> bool {
        self != Self::None && self <= minimum
    }

    /// Convert the raw `repr(u8)` value back to a level.
    ///
    /// Values above [`LogLevel::Verbose`] saturate to `Verbose`.
    #[must_use]
    pub const fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::None,
            1 => Self::Error,
            2 => Self::Warning,
            3 => Self::Info,
            4 => Self::Debug,
            _ => Self::Verbose,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "off" => Ok(Self::None),
            "error" | "e" => Ok(Self::Error),
            "warning" | "warn" | "w" => Ok(Self::Warning),
            "info" | "i" => Ok(Self::Info),
            "debug" | "d" => Ok(Self::Debug),
            "verbose" | "v" => Ok(Self::Verbose),
            _ => Err(ConfigError::InvalidLevel(s.to_string())),
        }
    }
}

/// Source location of a logging call.
///
/// Usually built by [`call_site!`](crate::call_site), which captures the
/// file, enclosing function, and line where the macro is expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite<'a> {
    /// Source file path as reported by `file!()` or the caller.
    pub file: &'a str,
    /// Name of the enclosing function.
    pub function: &'a str,
    /// Line number of the call.
    pub line: u32,
}

impl<'a> CallSite<'a> {
    /// Create a call site from explicit parts.
    #[must_use]
    pub const fn new(file: &'a str, function: &'a str, line: u32) -> Self {
        Self {
            file,
            function,
            line,
        }
    }
}

/// A message accepted by the facade and waiting for the writer thread.
///
/// `text` already carries the level tag, call site, and message; only the
/// timestamp is rendered on the writer thread, from `captured_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogTask {
    /// Prefixed message text, without timestamp.
    pub text: String,
    /// Time the logging call was made.
    pub captured_at: DateTime<Local>,
}
