//! Catalog store
//!
//! Holds the ordered catalog in memory and rewrites the backend after every
//! successful mutation. A mutation whose save fails is rolled back, so any
//! error leaves the in-memory catalog unchanged.

use std::path::{Path, PathBuf};

use crate::observability::{log_event_with_fields, Event};
use crate::storage::{CatalogBackend, CatalogFile};

use super::errors::{CatalogError, CatalogResult};
use super::record::BookRecord;
use super::stats::CatalogStats;

/// Ordered, persisted collection of book records.
pub struct CatalogStore<B: CatalogBackend = CatalogFile> {
    records: Vec<BookRecord>,
    backend: B,
}

impl CatalogStore<CatalogFile> {
    /// Opens the catalog stored at `path`, creating nothing until the first
    /// mutation.
    pub fn open(path: impl Into<PathBuf>) -> CatalogResult<Self> {
        Self::with_backend(CatalogFile::new(path))
    }

    /// Returns the catalog file path.
    pub fn path(&self) -> &Path {
        self.backend.path()
    }
}

impl<B: CatalogBackend> CatalogStore<B> {
    /// Loads the full catalog from `backend`.
    pub fn with_backend(mut backend: B) -> CatalogResult<Self> {
        let records = backend.load()?;
        Ok(Self { records, backend })
    }

    /// Returns the persistence backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the catalog holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Appends a new available record.
    ///
    /// # Errors
    ///
    /// - `InvalidField` if a field contains a line break
    /// - `DuplicateKey` if the identifier exists, ignoring case
    /// - `Storage` if the catalog cannot be saved
    pub fn add(
        &mut self,
        title: &str,
        author: &str,
        identifier: &str,
    ) -> CatalogResult<&BookRecord> {
        let checked = validate_field("title", title)
            .and_then(|_| validate_field("author", author))
            .and_then(|_| validate_field("identifier", identifier));
        if let Err(e) = checked {
            return Err(rejected("add", identifier, e));
        }

        if self.position(identifier).is_some() {
            return Err(rejected(
                "add",
                identifier,
                CatalogError::DuplicateKey(identifier.to_string()),
            ));
        }

        self.records.push(BookRecord::new(title, author, identifier));
        if let Err(e) = self.persist() {
            self.records.pop();
            return Err(e);
        }

        log_event_with_fields(Event::RecordAdded, &[("identifier", identifier)]);
        Ok(&self.records[self.records.len() - 1])
    }

    /// Records whose title, author, or identifier contain `query`, ignoring
    /// case, in catalog order.
    pub fn search(&self, query: &str) -> Vec<&BookRecord> {
        let lowered = query.to_lowercase();
        self.records
            .iter()
            .filter(|record| record.matches_lowered(&lowered))
            .collect()
    }

    /// First record with `identifier`, ignoring case.
    pub fn get(&self, identifier: &str) -> Option<&BookRecord> {
        self.position(identifier).map(|index| &self.records[index])
    }

    /// Marks an available record as checked out.
    ///
    /// # Errors
    ///
    /// `NotFound`, `AlreadyCheckedOut`, or `Storage`.
    pub fn checkout(&mut self, identifier: &str) -> CatalogResult<&BookRecord> {
        let index = self.find("checkout", identifier)?;
        if !self.records[index].available {
            return Err(rejected(
                "checkout",
                identifier,
                CatalogError::AlreadyCheckedOut(self.records[index].identifier.clone()),
            ));
        }

        self.set_available(index, false)?;
        log_event_with_fields(Event::RecordCheckedOut, &[("identifier", identifier)]);
        Ok(&self.records[index])
    }

    /// Marks a checked-out record as available again.
    ///
    /// # Errors
    ///
    /// `NotFound`, `AlreadyAvailable`, or `Storage`.
    pub fn return_book(&mut self, identifier: &str) -> CatalogResult<&BookRecord> {
        let index = self.find("return", identifier)?;
        if self.records[index].available {
            return Err(rejected(
                "return",
                identifier,
                CatalogError::AlreadyAvailable(self.records[index].identifier.clone()),
            ));
        }

        self.set_available(index, true)?;
        log_event_with_fields(Event::RecordReturned, &[("identifier", identifier)]);
        Ok(&self.records[index])
    }

    /// Removes a record and returns it.
    ///
    /// # Errors
    ///
    /// `NotFound` or `Storage`.
    pub fn delete(&mut self, identifier: &str) -> CatalogResult<BookRecord> {
        let index = self.find("delete", identifier)?;

        let removed = self.records.remove(index);
        if let Err(e) = self.persist() {
            self.records.insert(index, removed);
            return Err(e);
        }

        log_event_with_fields(Event::RecordDeleted, &[("identifier", identifier)]);
        Ok(removed)
    }

    /// Every record, in insertion order.
    pub fn list_all(&self) -> &[BookRecord] {
        &self.records
    }

    /// Availability counts.
    pub fn stats(&self) -> CatalogStats {
        CatalogStats::from_records(&self.records)
    }

    fn position(&self, identifier: &str) -> Option<usize> {
        let lowered = identifier.to_lowercase();
        self.records
            .iter()
            .position(|record| record.identifier.to_lowercase() == lowered)
    }

    fn find(&self, operation: &str, identifier: &str) -> CatalogResult<usize> {
        self.position(identifier).ok_or_else(|| {
            rejected(
                operation,
                identifier,
                CatalogError::NotFound(identifier.to_string()),
            )
        })
    }

    fn set_available(&mut self, index: usize, available: bool) -> CatalogResult<()> {
        self.records[index].available = available;
        if let Err(e) = self.persist() {
            self.records[index].available = !available;
            return Err(e);
        }
        Ok(())
    }

    fn persist(&mut self) -> CatalogResult<()> {
        self.backend.save(&self.records)?;
        Ok(())
    }
}

fn validate_field(field: &'static str, value: &str) -> CatalogResult<()> {
    if value.contains(|c: char| c == '\n' || c == '\r') {
        return Err(CatalogError::InvalidField {
            field,
            reason: "must not contain line breaks".to_string(),
        });
    }
    Ok(())
}

fn rejected(operation: &str, identifier: &str, error: CatalogError) -> CatalogError {
    log_event_with_fields(
        Event::OperationRejected,
        &[
            ("code", error.code()),
            ("identifier", identifier),
            ("operation", operation),
        ],
    );
    error
}
