//! CLI output: error mapping from configuration errors to stable CLI messages.

use crate::error::ConfigError;

/// Diagnostic printed before exiting on a configuration error.
pub fn map_error(e: &ConfigError) -> String {
    match e {
        ConfigError::NotFound { searched } => {
            let mut msg = String::from("[ERROR]: No config file found. Exiting.");
            for path in searched {
                msg.push_str(&format!("\n  searched: {}", path.display()));
            }
            msg
        }
        ConfigError::Load(load) => format!("[ERROR]: {}", load),
    }
}
