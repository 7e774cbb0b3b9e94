//! Path helpers for the default log location.
use std::path::PathBuf;

/// Return the user's documents directory, the default home of the log files.
///
/// Resolves to `$HOME/Documents` (or `%USERPROFILE%\Documents`), falling
/// back to `./Documents` when neither variable is set.  The directory is not
/// created here; the writer creates it on first use.
#[must_use]
pub fn documents_dir() -> PathBuf {
    std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map_or_else(|_| PathBuf::from("."), PathBuf::from)
        .join("Documents")
}

#[cfg(test)]
#[allow(unsafe_code)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn documents_dir_ends_with_documents() {
        assert!(documents_dir().ends_with("Documents"));
    }

    #[test]
    fn documents_dir_follows_home() {
        let _lock = crate::logging::TEST_ENV_MUTEX
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let previous = std::env::var_os("HOME");
        // SAFETY: TEST_ENV_MUTEX serializes every test that touches the environment.
        unsafe {
            std::env::set_var("HOME", "/home/tester");
        }
        let dir = documents_dir();
        // SAFETY: still holding TEST_ENV_MUTEX.
        unsafe {
            match previous {
                Some(home) => std::env::set_var("HOME", home),
                None => std::env::remove_var("HOME"),
            }
        }
        assert_eq!(dir, PathBuf::from("/home/tester/Documents"));
    }
}
