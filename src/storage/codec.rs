//! Line-oriented catalog file format
//!
//! Each record occupies four lines, in order:
//!
//! ```text
//! <title>
//! <author>
//! <identifier>
//! <1 | 0>
//! ```
//!
//! There is no header, no escaping, and no trailing metadata. A flag of `0`
//! marks the record checked out; any other flag loads as available.

use crate::catalog::BookRecord;

/// Number of lines that make up one record
pub const LINES_PER_RECORD: usize = 4;

/// Flag written for an available record
pub const FLAG_AVAILABLE: &str = "1";

/// Flag written for a checked-out record
pub const FLAG_CHECKED_OUT: &str = "0";

/// Result of decoding a catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DecodedCatalog {
    /// Complete records, in file order
    pub records: Vec<BookRecord>,
    /// Lines after the last complete group that were discarded
    pub dropped_lines: usize,
}

impl DecodedCatalog {
    /// Returns true if the file ended in an incomplete group.
    pub fn is_truncated(&self) -> bool {
        self.dropped_lines > 0
    }
}

/// Encodes records into the four-line format.
///
/// Every line is newline-terminated, including the last one.
pub fn encode(records: &[BookRecord]) -> String {
    let mut output = String::with_capacity(records.len() * 64);
    for record in records {
        output.push_str(&record.title);
        output.push('\n');
        output.push_str(&record.author);
        output.push('\n');
        output.push_str(&record.identifier);
        output.push('\n');
        output.push_str(if record.available {
            FLAG_AVAILABLE
        } else {
            FLAG_CHECKED_OUT
        });
        output.push('\n');
    }
    output
}

/// Decodes the four-line format.
///
/// Decoding stops at the first incomplete group; its lines are counted in
/// `dropped_lines` rather than reported as an error.
pub fn decode(content: &str) -> DecodedCatalog {
    let lines: Vec<&str> = content.lines().collect();
    let groups = lines.chunks_exact(LINES_PER_RECORD);
    let dropped_lines = groups.remainder().len();

    let records = groups
        .map(|group| {
            let mut record = BookRecord::new(group[0], group[1], group[2]);
            record.available = group[3] != FLAG_CHECKED_OUT;
            record
        })
        .collect();

    DecodedCatalog {
        records,
        dropped_lines,
    }
}
