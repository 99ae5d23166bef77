//! Observability for libris
//!
//! Structured JSON logging with typed lifecycle events.
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on catalog operations
//! 3. Logs go to stderr, stdout belongs to the shell
//!
//! # Usage
//!
//! ```ignore
//! use libris::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::RecordAdded, &[("identifier", "111")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

#[cfg(test)]
pub(crate) use logger::capture_logs;

/// Log a lifecycle event
pub fn log_event(event: Event) {
    Logger::log(event.severity(), event.as_str(), &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
