//! Book catalog
//!
//! The catalog is an ordered sequence of [`BookRecord`]s keyed by a
//! case-insensitive identifier. [`CatalogStore`] owns the sequence and
//! persists it through a [`crate::storage::CatalogBackend`].
//!
//! # Invariants
//!
//! - Identifiers are unique, ignoring case
//! - Insertion order is preserved for listing and search
//! - A failed operation leaves the catalog unchanged
//! - Only mutations rewrite the backend

mod errors;
mod record;
mod stats;
mod store;

pub use errors::{CatalogError, CatalogResult};
pub use record::BookRecord;
pub use stats::CatalogStats;
pub use store::CatalogStore;
