//! Line formatting: call-site prefix and timestamp.
use std::fmt;

use chrono::{DateTime, TimeZone};

use super::types::CallSite;

/// Timestamp layout: year-month-day (month and day not zero-padded),
/// 24-hour time with milliseconds.
const TIMESTAMP_FORMAT: &str = "%Y-%-m-%-d %H:%M:%S%.3f";

/// File name of `path` without directories and without any extension.
///
/// Takes the text after the last `/` or `\`, then the text before the first
/// `.`, so `src/net/conn.rs` becomes `conn` and `a/b.tar.gz` becomes `b`.
#[must_use]
pub fn source_base(path: &str) -> &str {
    let name = path.rsplit(['/', '\\']).next().unwrap_or(path);
    name.split('.').next().unwrap_or(name)
}

/// Render `"<tag>[<source_base>.<function>:<line>] <message>"`.
#[must_use]
pub fn format_message(tag: char, site: &CallSite<'_>, message: fmt::Arguments<'_>) -> String {
    format!(
        "{tag}[{}.{}:{}] {message}",
        source_base(site.file),
        site.function,
        site.line
    )
}

/// Prefix `text` with the rendered `time`: `"<timestamp>: <text>"`.
#[must_use]
pub fn with_timestamp<Tz>(text: &str, time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    format!("{}: {text}", time.format(TIMESTAMP_FORMAT))
}

/// Reduce a `type_name` path of a marker item nested in a function to the
/// function's own name.
///
/// `call_site!` declares a local `fn here() {}` and passes
/// `type_name_of_val(&here)`, e.g. `my_app::net::connect::here` or
/// `my_app::run::{{closure}}::here`.  The marker and any closure segments
/// are dropped and the last remaining segment is returned.
#[doc(hidden)]
#[must_use]
pub fn function_name(type_path: &str) -> &str {
    let mut path = type_path.strip_suffix("::here").unwrap_or(type_path);
    while let Some(outer) = path.strip_suffix("::{{closure}}") {
        path = outer;
    }
    path.rsplit("::").next().unwrap_or(path)
}
