use serde::Serialize;

use super::record::BookRecord;

/// Catalog-wide availability counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CatalogStats {
    /// Number of records
    pub total: usize,
    /// Records currently in the library
    pub available: usize,
    /// `total - available`
    pub checked_out: usize,
}

impl CatalogStats {
    /// Count availability over `records`.
    pub fn from_records(records: &[BookRecord]) -> Self {
        let total = records.len();
        let available = records.iter().filter(|r| r.available).count();
        Self {
            total,
            available,
            checked_out: total - available,
        }
    }
}
