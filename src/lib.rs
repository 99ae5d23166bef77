//! libris - a single-user, file-backed library catalog
//!
//! Book records live in memory in insertion order and are rewritten to a
//! plain text file after every mutation.
//!
//! - [`catalog`]: records, the store, and its errors
//! - [`storage`]: the four-line file format and persistence backends
//! - [`observability`]: structured JSON logging
//! - [`cli`]: configuration, one-shot commands, and the interactive shell

pub mod catalog;
pub mod cli;
pub mod observability;
pub mod storage;
