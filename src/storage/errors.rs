//! Storage error types
//!
//! Error codes:
//! - LIBRIS_STORAGE_READ_FAILED
//! - LIBRIS_STORAGE_WRITE_FAILED
//! - LIBRIS_STORAGE_INVALID_ENCODING
//!
//! Whether a storage error ends the process is decided by the caller.

use std::fmt;
use std::io;

/// Storage-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageErrorCode {
    /// Catalog file could not be opened or read
    ReadFailed,
    /// Catalog file could not be created, truncated, or written
    WriteFailed,
    /// Catalog file is not valid UTF-8
    InvalidEncoding,
}

impl StorageErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            StorageErrorCode::ReadFailed => "LIBRIS_STORAGE_READ_FAILED",
            StorageErrorCode::WriteFailed => "LIBRIS_STORAGE_WRITE_FAILED",
            StorageErrorCode::InvalidEncoding => "LIBRIS_STORAGE_INVALID_ENCODING",
        }
    }
}

impl fmt::Display for StorageErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Storage error with code, message, and optional I/O source
#[derive(Debug)]
pub struct StorageError {
    code: StorageErrorCode,
    message: String,
    source: Option<io::Error>,
}

impl StorageError {
    /// Create a read failure
    pub fn read_failed(message: impl Into<String>, source: io::Error) -> Self {
        Self {
            code: StorageErrorCode::ReadFailed,
            message: message.into(),
            source: Some(source),
        }
    }

    /// Create a write failure
    pub fn write_failed(message: impl Into<String>, source: io::Error) -> Self {
        Self {
            code: StorageErrorCode::WriteFailed,
            message: message.into(),
            source: Some(source),
        }
    }

    /// Create a write failure without an I/O source
    pub fn write_failed_no_source(message: impl Into<String>) -> Self {
        Self {
            code: StorageErrorCode::WriteFailed,
            message: message.into(),
            source: None,
        }
    }

    /// Create an encoding error
    pub fn invalid_encoding(message: impl Into<String>) -> Self {
        Self {
            code: StorageErrorCode::InvalidEncoding,
            message: message.into(),
            source: None,
        }
    }

    /// Returns the error code
    pub fn code(&self) -> StorageErrorCode {
        self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)?;
        if let Some(ref source) = self.source {
            write!(f, " (caused by: {})", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_codes() {
        assert_eq!(StorageErrorCode::ReadFailed.code(), "LIBRIS_STORAGE_READ_FAILED");
        assert_eq!(StorageErrorCode::WriteFailed.code(), "LIBRIS_STORAGE_WRITE_FAILED");
        assert_eq!(
            StorageErrorCode::InvalidEncoding.code(),
            "LIBRIS_STORAGE_INVALID_ENCODING"
        );
    }

    #[test]
    fn test_display_includes_code_and_cause() {
        let err = StorageError::write_failed(
            "Failed to write catalog",
            io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
        );
        let display = err.to_string();
        assert!(display.starts_with("LIBRIS_STORAGE_WRITE_FAILED: "));
        assert!(display.contains("Failed to write catalog"));
        assert!(display.contains("read-only"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_encoding_error_has_no_source() {
        let err = StorageError::invalid_encoding("bad bytes");
        assert_eq!(err.code(), StorageErrorCode::InvalidEncoding);
        assert_eq!(err.message(), "bad bytes");
        assert!(err.source().is_none());
    }
}
