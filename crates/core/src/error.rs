//! Error types for kvtable
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use std::io;
use thiserror::Error;

/// Result type alias for kvtable operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for kvtable
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error (loading or persisting the backing file)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Edit mode keyword other than `key`, `value` or `both`
    #[error("Invalid edit mode: {0:?}")]
    InvalidEditMode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_io() {
        let err = Error::Io(io::Error::new(io::ErrorKind::NotFound, "file not found"));
        let msg = err.to_string();
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn test_error_display_invalid_edit_mode() {
        let err = Error::InvalidEditMode("neither".to_string());
        let msg = err.to_string();
        assert!(msg.contains("Invalid edit mode"));
        assert!(msg.contains("neither"));
    }

    #[test]
    fn test_io_error_converts() {
        fn failing() -> Result<()> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "nope"))?;
            Ok(())
        }
        assert!(matches!(failing(), Err(Error::Io(_))));
    }
}
