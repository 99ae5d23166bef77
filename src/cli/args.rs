//! CLI argument definitions using clap
//!
//! Commands:
//! - libris [shell]
//! - libris add --title <t> --author <a> --id <id>
//! - libris search <query>
//! - libris checkout <id>
//! - libris return <id>
//! - libris delete <id>
//! - libris list
//! - libris stats

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Libris - a file-backed library catalog
#[derive(Parser, Debug)]
#[command(name = "libris")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Catalog file, overriding the configured one
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    /// Command to run; the interactive shell when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start the interactive menu
    Shell,

    /// Add a book
    Add {
        /// Book title
        #[arg(long)]
        title: String,
        /// Book author
        #[arg(long)]
        author: String,
        /// Unique identifier (ISBN)
        #[arg(long = "id")]
        identifier: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Search titles, authors, and identifiers
    Search {
        /// Case-insensitive search term
        query: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Check a book out
    Checkout {
        /// Book identifier
        identifier: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Return a checked-out book
    Return {
        /// Book identifier
        identifier: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Delete a book
    Delete {
        /// Book identifier
        identifier: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List every book
    List {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show catalog statistics
    Stats {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
