//! Observable events
//!
//! Events are explicit and typed; each one carries its own severity.

use std::fmt;

use super::logger::Severity;

/// Observable events in libris
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Configuration
    /// Configuration resolved (file or defaults)
    ConfigLoaded,

    // Persistence
    /// Catalog file read into memory
    CatalogLoaded,
    /// Catalog file rewritten
    CatalogSaved,
    /// Incomplete trailing record group discarded on load
    CatalogTrailingDataDropped,

    // Mutations
    /// Record appended
    RecordAdded,
    /// Record marked checked out
    RecordCheckedOut,
    /// Record marked available
    RecordReturned,
    /// Record removed
    RecordDeleted,
    /// Operation refused with a catalog error
    OperationRejected,

    // Shell
    /// Interactive shell started
    ShellStart,
    /// Interactive shell exited
    ShellExit,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",

            Event::CatalogLoaded => "CATALOG_LOADED",
            Event::CatalogSaved => "CATALOG_SAVED",
            Event::CatalogTrailingDataDropped => "CATALOG_TRAILING_DATA_DROPPED",

            Event::RecordAdded => "RECORD_ADDED",
            Event::RecordCheckedOut => "RECORD_CHECKED_OUT",
            Event::RecordReturned => "RECORD_RETURNED",
            Event::RecordDeleted => "RECORD_DELETED",
            Event::OperationRejected => "OPERATION_REJECTED",

            Event::ShellStart => "SHELL_START",
            Event::ShellExit => "SHELL_EXIT",
        }
    }

    /// Returns the severity this event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::CatalogTrailingDataDropped => Severity::Warn,
            Event::CatalogSaved | Event::OperationRejected => Severity::Trace,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(Event::CatalogLoaded.as_str(), "CATALOG_LOADED");
        assert_eq!(
            Event::CatalogTrailingDataDropped.to_string(),
            "CATALOG_TRAILING_DATA_DROPPED"
        );
        assert_eq!(Event::RecordCheckedOut.as_str(), "RECORD_CHECKED_OUT");
    }

    #[test]
    fn test_trailing_data_is_a_warning() {
        assert_eq!(Event::CatalogTrailingDataDropped.severity(), Severity::Warn);
        assert_eq!(Event::RecordAdded.severity(), Severity::Info);
        assert_eq!(Event::CatalogSaved.severity(), Severity::Trace);
    }
}
