//! Configuration file handling
//!
//! The config file is optional JSON:
//!
//! ```json
//! { "catalog_path": "library.txt", "log_level": "warn" }
//! ```
//!
//! Both fields have defaults. When no `--config` is given and the default
//! config file is absent, the defaults are used as-is.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::observability::Severity;
use crate::storage::DEFAULT_CATALOG_FILE;

use super::errors::{CliError, CliResult};

/// Config file looked up when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "./libris.json";

/// Resolved configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Catalog file (optional, default "library.txt")
    #[serde(default = "default_catalog_path")]
    pub catalog_path: PathBuf,

    /// Minimum log severity (optional, default "warn")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from(DEFAULT_CATALOG_FILE)
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::config_error(format!(
                "Failed to read config {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Resolve configuration from an explicit path, the default file, or
    /// built-in defaults, in that order.
    ///
    /// An explicit path must exist; the default file may be absent.
    pub fn resolve(explicit: Option<&Path>) -> CliResult<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Replace the catalog path when `--file` was given.
    pub fn with_catalog_override(mut self, catalog_path: Option<PathBuf>) -> Self {
        if let Some(path) = catalog_path {
            self.catalog_path = path;
        }
        self
    }

    fn validate(&self) -> CliResult<()> {
        let blank = self
            .catalog_path
            .to_str()
            .map_or(false, |path| path.trim().is_empty());
        if blank {
            return Err(CliError::config_error("catalog_path must not be empty"));
        }

        self.log_level
            .parse::<Severity>()
            .map_err(|e| CliError::config_error(format!("Invalid log_level: {}", e)))?;

        Ok(())
    }

    /// Catalog file as a path
    pub fn catalog_path(&self) -> &Path {
        &self.catalog_path
    }

    /// Parsed minimum log severity
    pub fn severity(&self) -> Severity {
        self.log_level.parse().unwrap_or(Severity::Warn)
    }
}
