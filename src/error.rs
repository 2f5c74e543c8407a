//! Error types for the editor glue
//!
//! The outline core (extraction, slugs, active-heading tracking) is total and
//! never fails. Everything that touches the outside world (storage, files,
//! configuration, export requests) reports through [`EditorError`].

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for session, storage and configuration failures
#[derive(Debug, Error)]
pub enum EditorError {
    /// Browser storage is unavailable or a get/set call was rejected
    #[error("storage error: {0}")]
    Storage(String),

    /// File-backed store could not read or write its document
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration YAML is malformed
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_yaml::Error),

    /// Configuration parsed but holds out-of-range values
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Export requested in a format we don't produce
    #[error("unknown export format: {0}")]
    UnknownExportFormat(String),
}

pub type Result<T> = std::result::Result<T, EditorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = EditorError::Storage("localStorage unavailable".to_string());
        assert_eq!(err.to_string(), "storage error: localStorage unavailable");

        let err = EditorError::UnknownExportFormat("pdf".to_string());
        assert_eq!(err.to_string(), "unknown export format: pdf");
    }

    #[test]
    fn test_io_error_keeps_source() {
        use std::error::Error as _;

        let err = EditorError::Io {
            path: PathBuf::from("/tmp/doc.md"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().starts_with("i/o error on /tmp/doc.md"));
        assert!(err.source().is_some());
    }
}
