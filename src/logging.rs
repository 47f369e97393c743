//! Logging System
//!
//! Structured logging using the `tracing` crate, driven by the `[logging]` section of the loaded
//! configuration. This is where the raw `logging` / `log_level` strings get interpreted.

use crate::config::{switch_enabled, ZabbixConfig};
use crate::error::LoggingError;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Environment variable that overrides the computed filter (`EnvFilter` syntax).
pub const LOG_ENV_VAR: &str = "ZABBIX_CLI_LOG";

/// Logging settings derived from a loaded configuration plus CLI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    /// Write to `file` (`logging = ON`)
    pub file_enabled: bool,

    /// tracing level name: trace, debug, info, warn, error
    pub level: String,

    pub file: PathBuf,

    /// Mirror debug output to stderr
    pub verbose: bool,

    /// Colored stderr output (`use_colors = ON`)
    pub color: bool,
}

impl LoggingSettings {
    pub fn from_config(config: &ZabbixConfig, verbose: bool) -> Self {
        Self {
            file_enabled: switch_enabled(config.logging_enabled()),
            level: tracing_level(config.log_level()).to_string(),
            file: PathBuf::from(config.log_file()),
            verbose,
            color: switch_enabled(config.use_colors()),
        }
    }

    /// Nothing would be emitted anywhere.
    pub fn is_silent(&self) -> bool {
        !self.file_enabled && !self.verbose
    }
}

/// Map a zabbix-cli log level name onto a tracing level.
///
/// Accepts the Python-style names used in existing config files. Unknown names fall back to
/// `error`, the tool's default level.
pub fn tracing_level(level: &str) -> &'static str {
    match level.trim().to_ascii_uppercase().as_str() {
        "NOTSET" | "TRACE" => "trace",
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARN" | "WARNING" => "warn",
        // ERROR, CRITICAL, FATAL and unrecognized names
        _ => "error",
    }
}

/// Initialize the global subscriber.
///
/// Priority order (highest to lowest):
/// 1. `ZABBIX_CLI_LOG` environment variable
/// 2. `--verbose` (debug)
/// 3. `[logging] log_level` when `logging = ON`
/// 4. Off
pub fn init_logging(settings: &LoggingSettings) -> Result<(), LoggingError> {
    let filter = build_env_filter(settings)?;

    let file_layer = if settings.file_enabled {
        let file = open_log_file(settings)?;
        Some(
            fmt::layer()
                .with_target(true)
                .with_timer(ChronoUtc::rfc_3339())
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
    } else {
        None
    };

    let stderr_layer = if settings.verbose {
        Some(
            fmt::layer()
                .with_target(true)
                .with_timer(ChronoUtc::rfc_3339())
                .with_ansi(settings.color)
                .with_writer(std::io::stderr),
        )
    } else {
        None
    };

    Registry::default()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))
}

/// Build environment filter from `ZABBIX_CLI_LOG` or the settings.
fn build_env_filter(settings: &LoggingSettings) -> Result<EnvFilter, LoggingError> {
    if let Ok(directives) = std::env::var(LOG_ENV_VAR) {
        return EnvFilter::try_new(&directives)
            .map_err(|e| LoggingError::InvalidDirective(format!("{}: {}", directives, e)));
    }

    Ok(EnvFilter::new(filter_directive(settings)))
}

fn filter_directive(settings: &LoggingSettings) -> &str {
    if settings.verbose {
        "debug"
    } else if settings.file_enabled {
        &settings.level
    } else {
        "off"
    }
}

fn open_log_file(settings: &LoggingSettings) -> Result<std::fs::File, LoggingError> {
    let to_error = |source: std::io::Error| LoggingError::LogFile {
        path: settings.file.clone(),
        source,
    };

    if let Some(parent) = settings.file.parent() {
        std::fs::create_dir_all(parent).map_err(to_error)?;
    }
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&settings.file)
        .map_err(to_error)
}
