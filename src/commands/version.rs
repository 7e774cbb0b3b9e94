//! Command: print version information.
use std::io::Write;

use anyhow::Result;

/// Version string: `DAYLOG_VERSION` from the build, else the crate version.
#[must_use]
pub fn version() -> &'static str {
    option_env!("DAYLOG_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
}

/// Print the daylog version to `out`.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn run(out: &mut impl Write) -> Result<()> {
    writeln!(out, "daylog {}", version())?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn prints_name_and_version() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("daylog "));
        assert!(text.trim_end().len() > "daylog ".len());
    }
}
