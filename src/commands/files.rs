//! Command: list the log set on disk.
use std::io::Write;
use std::path::Path;

use anyhow::Result;

use crate::logging::LogPaths;

/// Print the current log and every existing backup with its size.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn run(paths: &LogPaths, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", paths.dir().display())?;
    let current = paths.current();
    if current.exists() {
        write_entry(out, "current", &current)?;
    } else {
        writeln!(out, "  current  (none)")?;
    }
    for (rank, path) in paths.existing_backups() {
        write_entry(out, &format!("backup {rank}"), &path)?;
    }
    Ok(())
}

fn write_entry(out: &mut impl Write, label: &str, path: &Path) -> Result<()> {
    let size = std::fs::metadata(path).map_or(0, |m| m.len());
    let name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
    writeln!(out, "  {label:<9} {name} ({size} bytes)")?;
    Ok(())
}
