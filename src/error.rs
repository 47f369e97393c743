//! Error types for zabbix-cli configuration loading.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to consume a configuration file that was found on disk.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ini::ParseError,
    },
}

impl LoadError {
    /// Path of the file that could not be loaded.
    pub fn path(&self) -> &std::path::Path {
        match self {
            LoadError::Read { path, .. } | LoadError::Parse { path, .. } => path,
        }
    }
}

/// Configuration errors surfaced to the entry point.
///
/// `NotFound` and `Load` are never conflated: the first means the search path is wrong, the
/// second means the contents of an existing file are.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No config file found (searched: {})", display_paths(.searched))]
    NotFound { searched: Vec<PathBuf> },

    #[error(transparent)]
    Load(#[from] LoadError),
}

impl ConfigError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConfigError::NotFound { .. })
    }
}

/// Failure to set up the tracing subscriber from the `[logging]` section.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to open log file {path:?}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid log directive: {0}")]
    InvalidDirective(String),

    #[error("Logging already initialized: {0}")]
    AlreadyInitialized(String),
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
