//! # Catalog Errors
//!
//! Every catalog error except `Storage` is a recoverable outcome: the
//! operation is refused and the catalog is left exactly as it was.

use thiserror::Error;

use crate::storage::StorageError;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog operation errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A record with the same identifier (ignoring case) exists
    #[error("A book with identifier '{0}' already exists")]
    DuplicateKey(String),

    /// No record has this identifier
    #[error("No book with identifier '{0}'")]
    NotFound(String),

    /// Checkout of a record that is not available
    #[error("Book '{0}' is already checked out")]
    AlreadyCheckedOut(String),

    /// Return of a record that is already available
    #[error("Book '{0}' is already in the library")]
    AlreadyAvailable(String),

    /// A field cannot be stored in the catalog file
    #[error("Invalid {field}: {reason}")]
    InvalidField {
        /// Field name
        field: &'static str,
        /// Why it was rejected
        reason: String,
    },

    /// The catalog could not be persisted
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl CatalogError {
    /// Stable error code string
    pub fn code(&self) -> &'static str {
        match self {
            CatalogError::DuplicateKey(_) => "LIBRIS_CATALOG_DUPLICATE_KEY",
            CatalogError::NotFound(_) => "LIBRIS_CATALOG_NOT_FOUND",
            CatalogError::AlreadyCheckedOut(_) => "LIBRIS_CATALOG_ALREADY_CHECKED_OUT",
            CatalogError::AlreadyAvailable(_) => "LIBRIS_CATALOG_ALREADY_AVAILABLE",
            CatalogError::InvalidField { .. } => "LIBRIS_CATALOG_INVALID_FIELD",
            CatalogError::Storage(e) => e.code().code(),
        }
    }

    /// True for outcomes the caller reports and moves past.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, CatalogError::Storage(_))
    }
}
