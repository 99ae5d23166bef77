//! Catalog persistence for libris
//!
//! The catalog lives in a plain text file, four lines per record. The whole
//! file is read once when the store opens and rewritten after every
//! mutation.
//!
//! # Design Principles
//!
//! - Full rewrite on save (no append, no in-place update)
//! - Missing file is an empty catalog
//! - Incomplete trailing groups are dropped on load and logged
//! - File handles never outlive a single load or save

mod backend;
pub mod codec;
mod errors;
mod file;

pub use backend::{CatalogBackend, MemoryBackend};
pub use codec::DecodedCatalog;
pub use errors::{StorageError, StorageErrorCode, StorageResult};
pub use file::{CatalogFile, DEFAULT_CATALOG_FILE};
