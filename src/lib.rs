//! zabbix-cli: configuration resolution for the zabbix-cli command-line tool.
//!
//! Finds the configuration file in a fixed search order, fills every unset option with its
//! built-in default, and hands back an immutable [`ZabbixConfig`].

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;

pub use config::{ConfigLoader, ConfigOption, ConfigSource, ZabbixConfig};
pub use error::{ConfigError, LoadError};
