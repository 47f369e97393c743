//! CLI parse: clap types for zabbix-cli. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// zabbix-cli - command-line client for the Zabbix API
#[derive(Parser)]
#[command(name = "zabbix-cli")]
#[command(about = "Inspect the zabbix-cli configuration")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (checked before the standard locations)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Mirror debug logging to stderr
    #[arg(long, default_value = "false")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show every recognized option with its effective value
    ShowConfig {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Print the configuration file in use
    ConfigPath,
    /// List candidate configuration files in search order
    Candidates,
}

impl Commands {
    /// Whether the command needs a loaded configuration.
    pub fn requires_config(&self) -> bool {
        !matches!(self, Commands::Candidates)
    }
}
