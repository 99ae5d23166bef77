//! CLI command implementations
//!
//! Startup sequence:
//! 1. Resolve configuration (file, defaults, `--file` override)
//! 2. Apply the log level
//! 3. Load the catalog
//! 4. Run one command, or the interactive shell
//!
//! Recoverable catalog errors are printed as results and the command still
//! succeeds. Configuration, storage, and I/O failures are returned.

use std::io::{self, Write};

use serde_json::json;

use crate::catalog::{BookRecord, CatalogError, CatalogResult, CatalogStore};
use crate::observability::{log_event_with_fields, Event, Logger};
use crate::storage::CatalogBackend;

use super::args::{Cli, Command};
use super::config::Config;
use super::errors::CliResult;
use super::io::{write_error, write_record, write_response, write_stats};
use super::shell::run_shell;

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_cli(cli)
}

/// Boot from parsed arguments and run the selected command on stdin/stdout.
pub fn run_cli(cli: Cli) -> CliResult<()> {
    let config = Config::resolve(cli.config.as_deref())?.with_catalog_override(cli.file);
    Logger::set_min_severity(config.severity());
    let catalog_path = config.catalog_path.display().to_string();
    log_event_with_fields(
        Event::ConfigLoaded,
        &[
            ("catalog_path", catalog_path.as_str()),
            ("log_level", config.log_level.as_str()),
        ],
    );

    let mut store = CatalogStore::open(config.catalog_path())?;
    let command = cli.command.unwrap_or(Command::Shell);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if command == Command::Shell {
        let stdin = io::stdin();
        return run_shell(&mut store, stdin.lock(), &mut out);
    }
    run_command(&mut store, command, &mut out)
}

/// Run a single command against `store`, writing results to `out`.
///
/// `Command::Shell` is not handled here; it needs an input stream.
pub fn run_command<B, W>(
    store: &mut CatalogStore<B>,
    command: Command,
    out: &mut W,
) -> CliResult<()>
where
    B: CatalogBackend,
    W: Write,
{
    match command {
        Command::Shell => Ok(()),
        Command::Add {
            title,
            author,
            identifier,
            json,
        } => {
            let result = store.add(&title, &author, &identifier).cloned();
            report_record(out, result, "Book added successfully!", json)
        }
        Command::Search { query, json } => search(store, &query, json, out),
        Command::Checkout { identifier, json } => {
            let result = store.checkout(&identifier).cloned();
            report_record(out, result, "Book checked out successfully!", json)
        }
        Command::Return { identifier, json } => {
            let result = store.return_book(&identifier).cloned();
            report_record(out, result, "Book returned successfully!", json)
        }
        Command::Delete { identifier, json } => {
            let result = store.delete(&identifier);
            report_record(out, result, "Book deleted successfully!", json)
        }
        Command::List { json } => list(store, json, out),
        Command::Stats { json } => {
            let stats = store.stats();
            if json {
                write_response(out, serde_json::to_value(stats)?)
            } else {
                write_stats(out, &stats)
            }
        }
    }
}

fn search<B: CatalogBackend, W: Write>(
    store: &CatalogStore<B>,
    query: &str,
    json: bool,
    out: &mut W,
) -> CliResult<()> {
    let matches = store.search(query);
    if json {
        return write_response(out, serde_json::to_value(&matches)?);
    }

    writeln!(out, "Search Results for '{}':", query)?;
    if matches.is_empty() {
        writeln!(out, "\nNo books found matching your query.")?;
    }
    for record in matches {
        write_record(out, record)?;
    }
    Ok(())
}

fn list<B: CatalogBackend, W: Write>(
    store: &CatalogStore<B>,
    json: bool,
    out: &mut W,
) -> CliResult<()> {
    let records = store.list_all();
    if json {
        return write_response(out, serde_json::to_value(records)?);
    }

    if records.is_empty() {
        writeln!(out, "No books in the library.")?;
        return Ok(());
    }
    writeln!(out, "=== All Books in Library ===")?;
    for record in records {
        write_record(out, record)?;
    }
    Ok(())
}

fn report_record<W: Write>(
    out: &mut W,
    result: CatalogResult<BookRecord>,
    success: &str,
    json: bool,
) -> CliResult<()> {
    match result {
        Ok(record) if json => write_response(out, json!({ "book": record })),
        Ok(record) => {
            writeln!(out, "{}", success)?;
            write_record(out, &record)
        }
        Err(e) if e.is_recoverable() => report_rejection(out, &e, json),
        Err(e) => Err(e.into()),
    }
}

fn report_rejection<W: Write>(out: &mut W, error: &CatalogError, json: bool) -> CliResult<()> {
    if json {
        write_error(out, error.code(), &error.to_string())
    } else {
        writeln!(out, "Error: {}", error)?;
        Ok(())
    }
}
