//! CLI route: run context and command dispatch.

use crate::cli::parse::Commands;
use crate::cli::presentation::{
    format_candidates_text, format_config_json, format_config_path, format_config_text,
};
use crate::config::{switch_enabled, CandidatePaths, ZabbixConfig};
use crate::error::ConfigError;
use crate::logging::LoggingSettings;
use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use tracing::debug;

/// Runtime context for CLI execution: the explicit config path and, for commands that need it,
/// the loaded configuration.
pub struct RunContext {
    config_path: Option<PathBuf>,
    config: Option<ZabbixConfig>,
}

impl RunContext {
    /// Resolve and load the configuration if `command` needs it.
    pub fn new(config_path: Option<PathBuf>, command: &Commands) -> Result<Self, ConfigError> {
        let config = if command.requires_config() {
            Some(ZabbixConfig::load(config_path.as_deref())?)
        } else {
            None
        };
        Ok(Self {
            config_path,
            config,
        })
    }

    /// Context around an already loaded configuration.
    pub fn with_config(config: ZabbixConfig) -> Self {
        Self {
            config_path: config.config_file().map(|p| p.to_path_buf()),
            config: Some(config),
        }
    }

    pub fn config(&self) -> Option<&ZabbixConfig> {
        self.config.as_ref()
    }

    /// Logging settings from the loaded `[logging]` section, or built-in defaults.
    pub fn logging_settings(&self, verbose: bool) -> LoggingSettings {
        match self.config {
            Some(ref config) => LoggingSettings::from_config(config, verbose),
            None => LoggingSettings::from_config(&ZabbixConfig::default(), verbose),
        }
    }

    fn use_colors(&self) -> bool {
        self.config
            .as_ref()
            .map(|c| switch_enabled(c.use_colors()))
            .unwrap_or(false)
    }

    pub fn execute(&self, command: &Commands) -> Result<String> {
        debug!(command = command_name(command), "Executing command");
        match command {
            Commands::ShowConfig { format } => {
                let config = self.loaded()?;
                match format.as_str() {
                    "text" => Ok(format_config_text(config, self.use_colors())),
                    "json" => format_config_json(config).context("Failed to serialize config"),
                    other => bail!("Invalid format: {} (must be 'text' or 'json')", other),
                }
            }
            Commands::ConfigPath => Ok(format_config_path(self.loaded()?)),
            Commands::Candidates => {
                let paths = CandidatePaths::discover(self.config_path.as_deref());
                Ok(format_candidates_text(&paths, self.use_colors()))
            }
        }
    }

    fn loaded(&self) -> Result<&ZabbixConfig> {
        self.config
            .as_ref()
            .context("Configuration was not loaded for this command")
    }
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::ShowConfig { .. } => "show-config",
        Commands::ConfigPath => "config-path",
        Commands::Candidates => "candidates",
    }
}
