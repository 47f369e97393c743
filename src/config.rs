//! Configuration System
//!
//! Resolves the zabbix-cli configuration file from an ordered list of candidate locations,
//! seeds every option with its built-in default, and overlays the values found in the file.
//! The resulting [`ZabbixConfig`] is read-only: fields are private and there are no setters.
//!
//! ```text
//! [zabbix_api]
//! zabbix_api_url = https://zabbix.example.net/api_jsonrpc.php
//!
//! [zabbix_config]
//! system_id = zabbix-ID
//!
//! [logging]
//! logging = ON
//! log_level = INFO
//! ```

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::path::{Path, PathBuf};

mod defaults;
mod loader;
mod resolve;

pub use defaults::*;
pub use loader::ConfigLoader;
pub use resolve::{
    user_config_path, Candidate, CandidatePaths, SYSTEM_CONFIG_PATH, SYSTEM_LEGACY_CONFIG_PATH,
};

/// File section holding the API endpoint.
pub const SECTION_API: &str = "zabbix_api";
/// File section holding general tool settings.
pub const SECTION_CORE: &str = "zabbix_config";
/// File section holding logging settings.
pub const SECTION_LOGGING: &str = "logging";

/// Sections in the order they appear in a config file.
pub const SECTIONS: [&str; 3] = [SECTION_API, SECTION_CORE, SECTION_LOGGING];

/// One of the recognized (section, key) pairs. Anything else in a file is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigOption {
    ApiUrl,
    SystemId,
    DefaultHostgroup,
    DefaultAdminUsergroup,
    DefaultCreateUserUsergroup,
    DefaultNotificationUsersUsergroup,
    DefaultDirectoryExports,
    DefaultExportFormat,
    IncludeTimestampExportFilename,
    UseColors,
    UseAuthTokenFile,
    LoggingEnabled,
    LogLevel,
    LogFile,
}

impl ConfigOption {
    /// Every recognized option, in file order.
    pub const ALL: [ConfigOption; 14] = [
        ConfigOption::ApiUrl,
        ConfigOption::SystemId,
        ConfigOption::DefaultHostgroup,
        ConfigOption::DefaultAdminUsergroup,
        ConfigOption::DefaultCreateUserUsergroup,
        ConfigOption::DefaultNotificationUsersUsergroup,
        ConfigOption::DefaultDirectoryExports,
        ConfigOption::DefaultExportFormat,
        ConfigOption::IncludeTimestampExportFilename,
        ConfigOption::UseColors,
        ConfigOption::UseAuthTokenFile,
        ConfigOption::LoggingEnabled,
        ConfigOption::LogLevel,
        ConfigOption::LogFile,
    ];

    pub fn section(self) -> &'static str {
        match self {
            ConfigOption::ApiUrl => SECTION_API,
            ConfigOption::LoggingEnabled | ConfigOption::LogLevel | ConfigOption::LogFile => {
                SECTION_LOGGING
            }
            _ => SECTION_CORE,
        }
    }

    /// Key as written in the config file.
    pub fn key(self) -> &'static str {
        match self {
            ConfigOption::ApiUrl => "zabbix_api_url",
            ConfigOption::SystemId => "system_id",
            ConfigOption::DefaultHostgroup => "default_hostgroup",
            ConfigOption::DefaultAdminUsergroup => "default_admin_usergroup",
            ConfigOption::DefaultCreateUserUsergroup => "default_create_user_usergroup",
            ConfigOption::DefaultNotificationUsersUsergroup => {
                "default_notification_users_usergroup"
            }
            ConfigOption::DefaultDirectoryExports => "default_directory_exports",
            ConfigOption::DefaultExportFormat => "default_export_format",
            ConfigOption::IncludeTimestampExportFilename => "include_timestamp_export_filename",
            ConfigOption::UseColors => "use_colors",
            ConfigOption::UseAuthTokenFile => "use_auth_token_file",
            ConfigOption::LoggingEnabled => "logging",
            ConfigOption::LogLevel => "log_level",
            ConfigOption::LogFile => "log_file",
        }
    }

    /// Dotted `section.key` path used to look the option up in a parsed file.
    pub fn path(self) -> String {
        format!("{}.{}", self.section(), self.key())
    }
}

/// Interpret an ON/OFF option value. The record itself never does this; it is offered to
/// consumers such as the logging setup and the CLI renderer.
pub fn switch_enabled(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("on")
}

/// Which candidate location supplied the configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// Path passed explicitly by the caller.
    Explicit,
    /// `${HOME}/.zabbix-cli/zabbix-cli.conf`
    User,
    /// `/etc/zabbix-cli/zabbix-cli.conf`
    System,
    /// `/etc/zabbix-cli.conf`
    SystemLegacy,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Explicit => write!(f, "explicit path"),
            ConfigSource::User => write!(f, "user config"),
            ConfigSource::System => write!(f, "system config"),
            ConfigSource::SystemLegacy => write!(f, "legacy system config"),
        }
    }
}

/// Fully-defaulted, read-only zabbix-cli configuration.
///
/// ON/OFF options are kept as the strings found in the file; interpreting them is up to the
/// caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZabbixConfig {
    config_file: Option<PathBuf>,
    source: Option<ConfigSource>,

    api_url: String,

    system_id: String,
    default_hostgroup: String,
    default_admin_usergroup: String,
    default_create_user_usergroup: String,
    default_notification_users_usergroup: String,
    default_directory_exports: String,
    default_export_format: String,
    include_timestamp_export_filename: String,
    use_colors: String,
    use_auth_token_file: String,

    logging_enabled: String,
    log_level: String,
    log_file: String,
}

impl ZabbixConfig {
    /// Resolve the config file (explicit path first) and load it.
    pub fn load(explicit: Option<&Path>) -> Result<Self, crate::error::ConfigError> {
        ConfigLoader::resolve(explicit)?.load()
    }

    /// Value of a recognized option.
    pub fn get(&self, option: ConfigOption) -> &str {
        match option {
            ConfigOption::ApiUrl => &self.api_url,
            ConfigOption::SystemId => &self.system_id,
            ConfigOption::DefaultHostgroup => &self.default_hostgroup,
            ConfigOption::DefaultAdminUsergroup => &self.default_admin_usergroup,
            ConfigOption::DefaultCreateUserUsergroup => &self.default_create_user_usergroup,
            ConfigOption::DefaultNotificationUsersUsergroup => {
                &self.default_notification_users_usergroup
            }
            ConfigOption::DefaultDirectoryExports => &self.default_directory_exports,
            ConfigOption::DefaultExportFormat => &self.default_export_format,
            ConfigOption::IncludeTimestampExportFilename => {
                &self.include_timestamp_export_filename
            }
            ConfigOption::UseColors => &self.use_colors,
            ConfigOption::UseAuthTokenFile => &self.use_auth_token_file,
            ConfigOption::LoggingEnabled => &self.logging_enabled,
            ConfigOption::LogLevel => &self.log_level,
            ConfigOption::LogFile => &self.log_file,
        }
    }

    // Only the loader writes through this, before the record is handed out.
    fn slot_mut(&mut self, option: ConfigOption) -> &mut String {
        match option {
            ConfigOption::ApiUrl => &mut self.api_url,
            ConfigOption::SystemId => &mut self.system_id,
            ConfigOption::DefaultHostgroup => &mut self.default_hostgroup,
            ConfigOption::DefaultAdminUsergroup => &mut self.default_admin_usergroup,
            ConfigOption::DefaultCreateUserUsergroup => &mut self.default_create_user_usergroup,
            ConfigOption::DefaultNotificationUsersUsergroup => {
                &mut self.default_notification_users_usergroup
            }
            ConfigOption::DefaultDirectoryExports => &mut self.default_directory_exports,
            ConfigOption::DefaultExportFormat => &mut self.default_export_format,
            ConfigOption::IncludeTimestampExportFilename => {
                &mut self.include_timestamp_export_filename
            }
            ConfigOption::UseColors => &mut self.use_colors,
            ConfigOption::UseAuthTokenFile => &mut self.use_auth_token_file,
            ConfigOption::LoggingEnabled => &mut self.logging_enabled,
            ConfigOption::LogLevel => &mut self.log_level,
            ConfigOption::LogFile => &mut self.log_file,
        }
    }

    /// Iterate `(option, value)` for every recognized option, in file order.
    pub fn options(&self) -> impl Iterator<Item = (ConfigOption, &str)> + '_ {
        ConfigOption::ALL.into_iter().map(move |o| (o, self.get(o)))
    }

    /// File the configuration was loaded from (None for a defaults-only record).
    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    pub fn source(&self) -> Option<ConfigSource> {
        self.source
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn system_id(&self) -> &str {
        &self.system_id
    }

    pub fn default_hostgroup(&self) -> &str {
        &self.default_hostgroup
    }

    pub fn default_admin_usergroup(&self) -> &str {
        &self.default_admin_usergroup
    }

    pub fn default_create_user_usergroup(&self) -> &str {
        &self.default_create_user_usergroup
    }

    pub fn default_notification_users_usergroup(&self) -> &str {
        &self.default_notification_users_usergroup
    }

    pub fn default_directory_exports(&self) -> &str {
        &self.default_directory_exports
    }

    pub fn default_export_format(&self) -> &str {
        &self.default_export_format
    }

    pub fn include_timestamp_export_filename(&self) -> &str {
        &self.include_timestamp_export_filename
    }

    pub fn use_colors(&self) -> &str {
        &self.use_colors
    }

    pub fn use_auth_token_file(&self) -> &str {
        &self.use_auth_token_file
    }

    /// Raw value of `[logging] logging`.
    pub fn logging_enabled(&self) -> &str {
        &self.logging_enabled
    }

    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    pub fn log_file(&self) -> &str {
        &self.log_file
    }
}

/// Serializes as `{ section: { key: value } }`, mirroring the file layout.
impl Serialize for ZabbixConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(SECTIONS.len()))?;
        for section in SECTIONS {
            map.serialize_entry(section, &SectionView { config: self, section })?;
        }
        map.end()
    }
}

struct SectionView<'a> {
    config: &'a ZabbixConfig,
    section: &'static str,
}

impl Serialize for SectionView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (option, value) in self.config.options() {
            if option.section() == self.section {
                map.serialize_entry(option.key(), value)?;
            }
        }
        map.end()
    }
}
