//! Error types for EdgeNode primitives.
//!
//! Range matching never fails: malformed ranges simply do not match. The only
//! fallible operation is the capacity probe, whose OS error is carried through
//! unchanged so callers can inspect the original `errno`.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using `EdgeError`.
pub type Result<T> = std::result::Result<T, EdgeError>;

/// Main error type for all EdgeNode primitives.
#[derive(Debug, Error)]
pub enum EdgeError {
    // ═══════════════════════════════════════════════════════════════════════════
    // PROBE ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// The filesystem capacity probe failed at the OS level.
    #[error("Capacity probe failed for '{}': {source}", .path.display())]
    ProbeFailed {
        /// Path that was probed
        path: PathBuf,
        /// OS error, unchanged
        #[source]
        source: io::Error,
    },

    /// A custom probe failed without an OS error to report.
    #[error("Capacity probe failed: {0}")]
    Probe(String),

    // ═══════════════════════════════════════════════════════════════════════════
    // VALIDATION ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl EdgeError {
    /// Wraps an OS error raised while probing `path`.
    pub fn probe_failed(path: impl Into<PathBuf>, source: impl Into<io::Error>) -> Self {
        EdgeError::ProbeFailed {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Returns the underlying OS error kind, if this is an OS-level probe failure.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            EdgeError::ProbeFailed { source, .. } => Some(source.kind()),
            _ => None,
        }
    }

    /// Returns true if this error is transient (caller may retry).
    ///
    /// Nothing in this workspace retries on its own.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self.io_kind(),
            Some(io::ErrorKind::Interrupted | io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EdgeError::probe_failed(
            "/data/cache",
            io::Error::new(io::ErrorKind::NotFound, "no such file or directory"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/data/cache"));
        assert!(msg.contains("no such file or directory"));
    }

    #[test]
    fn test_io_kind_preserved() {
        let err = EdgeError::probe_failed("/root", io::Error::from(io::ErrorKind::PermissionDenied));
        assert_eq!(err.io_kind(), Some(io::ErrorKind::PermissionDenied));
        assert_eq!(EdgeError::Probe("fake".into()).io_kind(), None);
    }

    #[test]
    fn test_error_classification() {
        assert!(EdgeError::probe_failed("/", io::Error::from(io::ErrorKind::Interrupted)).is_recoverable());
        assert!(!EdgeError::probe_failed("/", io::Error::from(io::ErrorKind::NotFound)).is_recoverable());
        assert!(!EdgeError::ConfigError("max_entries".into()).is_recoverable());
    }

    #[test]
    fn test_source_chain() {
        use std::error::Error as _;

        let err = EdgeError::probe_failed("/mnt", io::Error::from(io::ErrorKind::Unsupported));
        assert!(err.source().is_some());
        assert!(EdgeError::Probe("x".into()).source().is_none());
    }
}
