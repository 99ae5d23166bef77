//! CLI module for libris
//!
//! Provides the command-line interface:
//! - shell: interactive numbered menu (default)
//! - add / search / checkout / return / delete / list / stats: one-shot
//!   commands with optional JSON output

mod args;
mod commands;
mod config;
mod errors;
mod io;
mod shell;

pub use args::{Cli, Command};
pub use commands::{run, run_cli, run_command};
pub use config::{Config, DEFAULT_CONFIG_FILE};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use shell::{run_shell, MenuChoice, Shell};
