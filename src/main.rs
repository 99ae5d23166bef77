//! libris CLI entry point
//!
//! Delegates everything to the CLI module and only reports fatal errors:
//! 1. Parses arguments and dispatches (via cli::run)
//! 2. Prints errors to stderr
//! 3. Exits with non-zero on failure

use libris::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
