//! Persistence seam between the catalog store and where records live

use crate::catalog::BookRecord;

use super::errors::{StorageError, StorageResult};

/// Loads and saves the full catalog.
///
/// `save` always receives the complete catalog in order and replaces
/// whatever was persisted before.
pub trait CatalogBackend {
    /// Reads every persisted record, in order.
    fn load(&mut self) -> StorageResult<Vec<BookRecord>>;

    /// Replaces the persisted catalog with `records`.
    fn save(&mut self, records: &[BookRecord]) -> StorageResult<()>;
}

/// In-memory backend for tests and embedding.
#[derive(Debug, Default, Clone)]
pub struct MemoryBackend {
    records: Vec<BookRecord>,
    saves: usize,
    fail_saves: bool,
}

impl MemoryBackend {
    /// Create an empty backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend pre-populated with `records`
    pub fn with_records(records: Vec<BookRecord>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    /// Make every subsequent save fail (or succeed again)
    pub fn set_fail_saves(&mut self, fail: bool) {
        self.fail_saves = fail;
    }

    /// Records as of the last successful save
    pub fn records(&self) -> &[BookRecord] {
        &self.records
    }

    /// Number of successful saves
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl CatalogBackend for MemoryBackend {
    fn load(&mut self) -> StorageResult<Vec<BookRecord>> {
        Ok(self.records.clone())
    }

    fn save(&mut self, records: &[BookRecord]) -> StorageResult<()> {
        if self.fail_saves {
            return Err(StorageError::write_failed_no_source(
                "In-memory backend configured to fail saves",
            ));
        }
        self.records = records.to_vec();
        self.saves += 1;
        Ok(())
    }
}
