//! Book record type

use serde::{Deserialize, Serialize};

/// A single catalog entry.
///
/// The identifier is the record's key and is compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    /// Book title
    pub title: String,
    /// Book author
    pub author: String,
    /// Unique key (usually an ISBN)
    pub identifier: String,
    /// True while the book is in the library
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

impl BookRecord {
    /// Create a new, available record
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        identifier: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            identifier: identifier.into(),
            available: true,
        }
    }

    /// Case-insensitive identifier comparison.
    pub fn has_identifier(&self, identifier: &str) -> bool {
        self.identifier.to_lowercase() == identifier.to_lowercase()
    }

    /// Case-insensitive substring match against title, author, and identifier.
    ///
    /// `lowered_query` must already be lowercased.
    pub fn matches_lowered(&self, lowered_query: &str) -> bool {
        self.title.to_lowercase().contains(lowered_query)
            || self.author.to_lowercase().contains(lowered_query)
            || self.identifier.to_lowercase().contains(lowered_query)
    }

    /// Case-insensitive substring match against title, author, and identifier.
    pub fn matches_query(&self, query: &str) -> bool {
        self.matches_lowered(&query.to_lowercase())
    }

    /// Human-readable availability
    pub fn status_label(&self) -> &'static str {
        if self.available {
            "Available"
        } else {
            "Checked Out"
        }
    }
}
