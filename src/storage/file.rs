//! File-backed catalog persistence
//!
//! - Load is open-read-close; a missing file is an empty catalog
//! - Save is open-truncate-write-fsync-close on every call
//! - No handle is held between operations

use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::catalog::BookRecord;
use crate::observability::{log_event_with_fields, Event};

use super::backend::CatalogBackend;
use super::codec;
use super::errors::{StorageError, StorageResult};

/// Default catalog file name
pub const DEFAULT_CATALOG_FILE: &str = "library.txt";

/// Catalog persisted to a plain text file.
#[derive(Debug, Clone)]
pub struct CatalogFile {
    path: PathBuf,
}

impl CatalogFile {
    /// Creates a backend for `path`. Nothing is opened until load or save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the catalog file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and decodes the file, returning the dropped-line count too.
    ///
    /// # Errors
    ///
    /// Returns `LIBRIS_STORAGE_READ_FAILED` if the file exists but cannot be
    /// read, and `LIBRIS_STORAGE_INVALID_ENCODING` if it is not UTF-8.
    pub fn read_decoded(&self) -> StorageResult<codec::DecodedCatalog> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Ok(codec::DecodedCatalog::default())
            }
            Err(e) => {
                return Err(StorageError::read_failed(
                    format!("Failed to read catalog file: {}", self.path.display()),
                    e,
                ))
            }
        };

        let content = String::from_utf8(bytes).map_err(|e| {
            StorageError::invalid_encoding(format!(
                "Catalog file {} is not valid UTF-8: {}",
                self.path.display(),
                e.utf8_error()
            ))
        })?;

        Ok(codec::decode(&content))
    }

    fn write_all(&self, records: &[BookRecord]) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    StorageError::write_failed(
                        format!("Failed to create directory: {}", parent.display()),
                        e,
                    )
                })?;
            }
        }

        let file = File::create(&self.path).map_err(|e| {
            StorageError::write_failed(
                format!("Failed to open catalog file: {}", self.path.display()),
                e,
            )
        })?;

        let mut writer = BufWriter::new(file);
        writer
            .write_all(codec::encode(records).as_bytes())
            .and_then(|_| writer.flush())
            .map_err(|e| {
                StorageError::write_failed(
                    format!("Failed to write catalog file: {}", self.path.display()),
                    e,
                )
            })?;

        writer.get_ref().sync_all().map_err(|e| {
            StorageError::write_failed(
                format!("fsync failed for catalog file: {}", self.path.display()),
                e,
            )
        })
    }
}

impl Default for CatalogFile {
    fn default() -> Self {
        Self::new(DEFAULT_CATALOG_FILE)
    }
}

impl CatalogBackend for CatalogFile {
    fn load(&mut self) -> StorageResult<Vec<BookRecord>> {
        let decoded = self.read_decoded()?;
        let path = self.path.display().to_string();

        // Partial trailing groups are dropped; kept visible until the
        // intended behavior for truncated files is settled.
        if decoded.is_truncated() {
            let dropped = decoded.dropped_lines.to_string();
            log_event_with_fields(
                Event::CatalogTrailingDataDropped,
                &[("dropped_lines", dropped.as_str()), ("path", path.as_str())],
            );
        }

        let count = decoded.records.len().to_string();
        log_event_with_fields(
            Event::CatalogLoaded,
            &[("path", path.as_str()), ("records", count.as_str())],
        );

        Ok(decoded.records)
    }

    fn save(&mut self, records: &[BookRecord]) -> StorageResult<()> {
        self.write_all(records)?;

        let path = self.path.display().to_string();
        let count = records.len().to_string();
        log_event_with_fields(
            Event::CatalogSaved,
            &[("path", path.as_str()), ("records", count.as_str())],
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observability::capture_logs;
    use crate::storage::StorageErrorCode;
    use serde_json::Value;
    use tempfile::TempDir;

    fn events(logs: &str) -> Vec<Value> {
        logs.lines().map(|line| serde_json::from_str(line).unwrap()).collect()
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let mut file = CatalogFile::new(temp_dir.path().join("library.txt"));

        assert!(file.load().unwrap().is_empty());
        assert!(!file.path().exists());
    }

    #[test]
    fn test_save_truncates_previous_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("library.txt");
        let mut file = CatalogFile::new(&path);

        file.save(&[
            BookRecord::new("Dune", "Herbert", "111"),
            BookRecord::new("Emma", "Austen", "222"),
        ])
        .unwrap();
        file.save(&[BookRecord::new("Emma", "Austen", "222")]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Emma\nAusten\n222\n1\n");
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("library.txt");
        let mut file = CatalogFile::new(&path);

        file.save(&[BookRecord::new("A", "B", "1")]).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_read_decoded_reports_dropped_lines() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("library.txt");
        fs::write(&path, "A\nB\n1\n1\nC\n").unwrap();

        let decoded = CatalogFile::new(&path).read_decoded().unwrap();
        assert_eq!(decoded.records.len(), 1);
        assert_eq!(decoded.dropped_lines, 1);
    }

    #[test]
    fn test_truncated_load_logs_warning() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("library.txt");
        fs::write(&path, "A\nB\n1\n1\nC\nD\n").unwrap();
        let mut file = CatalogFile::new(&path);

        let mut records = Vec::new();
        let logs = capture_logs(|| records = file.load().unwrap());
        assert_eq!(records.len(), 1);

        let events = events(&logs);
        let warning = events
            .iter()
            .find(|e| e["event"] == "CATALOG_TRAILING_DATA_DROPPED")
            .expect("dropped trailing data must be logged");
        assert_eq!(warning["severity"], "WARN");
        assert_eq!(warning["dropped_lines"], "2");
        assert_eq!(warning["path"], path.display().to_string());
    }

    #[test]
    fn test_complete_load_logs_no_warning() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("library.txt");
        fs::write(&path, "A\nB\n1\n1\n").unwrap();
        let mut file = CatalogFile::new(&path);

        let logs = capture_logs(|| {
            file.load().unwrap();
        });

        let events = events(&logs);
        assert!(events.iter().all(|e| e["event"] != "CATALOG_TRAILING_DATA_DROPPED"));
        assert!(events.iter().any(|e| e["event"] == "CATALOG_LOADED"));
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("library.txt");
        fs::write(&path, [0xff, 0xfe, b'\n']).unwrap();

        let err = CatalogFile::new(&path).load().unwrap_err();
        assert_eq!(err.code(), StorageErrorCode::InvalidEncoding);
    }

    #[test]
    fn test_directory_path_fails_to_save() {
        let temp_dir = TempDir::new().unwrap();
        let mut file = CatalogFile::new(temp_dir.path());

        let err = file.save(&[]).unwrap_err();
        assert_eq!(err.code(), StorageErrorCode::WriteFailed);
    }
}
