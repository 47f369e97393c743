//! Built-in option defaults.

use super::ZabbixConfig;
use tracing::warn;

pub const DEFAULT_API_URL: &str = "";
pub const DEFAULT_SYSTEM_ID: &str = "zabbix-ID";
pub const DEFAULT_HOSTGROUP: &str = "All-hosts";
pub const DEFAULT_ADMIN_USERGROUP: &str = "Zabbix-root";
pub const DEFAULT_CREATE_USER_USERGROUP: &str = "All-users";
pub const DEFAULT_NOTIFICATION_USERS_USERGROUP: &str = "All-notification-users";
/// Joined onto `$HOME`.
pub const DEFAULT_EXPORTS_DIR_NAME: &str = "zabbix_exports";
pub const DEFAULT_EXPORT_FORMAT: &str = "JSON";
pub const DEFAULT_INCLUDE_TIMESTAMP_EXPORT_FILENAME: &str = "ON";
pub const DEFAULT_USE_COLORS: &str = "ON";
pub const DEFAULT_USE_AUTH_TOKEN_FILE: &str = "OFF";
pub const DEFAULT_LOGGING: &str = "OFF";
pub const DEFAULT_LOG_LEVEL: &str = "ERROR";
pub const DEFAULT_LOG_FILE: &str = "/var/log/zabbix-cli/zabbix-cli.log";

/// Home directory as used for path defaults.
///
/// An unset `HOME` expands to the empty string, the same way `${HOME}` does in a shell. Paths
/// built from it are then rooted at `/` and fail the existence probe instead of being guessed.
pub fn home_dir() -> String {
    match std::env::var("HOME") {
        Ok(home) => home,
        Err(_) => {
            warn!("HOME is not set; home-relative config paths will not resolve");
            String::new()
        }
    }
}

impl ZabbixConfig {
    /// Defaults-only record for the given home directory. Touches neither the environment nor
    /// the filesystem.
    pub fn defaults(home: &str) -> Self {
        Self {
            config_file: None,
            source: None,
            api_url: DEFAULT_API_URL.to_string(),
            system_id: DEFAULT_SYSTEM_ID.to_string(),
            default_hostgroup: DEFAULT_HOSTGROUP.to_string(),
            default_admin_usergroup: DEFAULT_ADMIN_USERGROUP.to_string(),
            default_create_user_usergroup: DEFAULT_CREATE_USER_USERGROUP.to_string(),
            default_notification_users_usergroup: DEFAULT_NOTIFICATION_USERS_USERGROUP
                .to_string(),
            default_directory_exports: format!("{}/{}", home, DEFAULT_EXPORTS_DIR_NAME),
            default_export_format: DEFAULT_EXPORT_FORMAT.to_string(),
            include_timestamp_export_filename: DEFAULT_INCLUDE_TIMESTAMP_EXPORT_FILENAME
                .to_string(),
            use_colors: DEFAULT_USE_COLORS.to_string(),
            use_auth_token_file: DEFAULT_USE_AUTH_TOKEN_FILE.to_string(),
            logging_enabled: DEFAULT_LOGGING.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_file: DEFAULT_LOG_FILE.to_string(),
        }
    }
}

impl Default for ZabbixConfig {
    fn default() -> Self {
        Self::defaults(&home_dir())
    }
}
