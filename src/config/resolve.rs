//! Candidate config file locations and first-match resolution.
//!
//! Resolution order: explicit path → `~/.zabbix-cli/zabbix-cli.conf` →
//! `/etc/zabbix-cli/zabbix-cli.conf` → `/etc/zabbix-cli.conf`.

use super::defaults::home_dir;
use super::ConfigSource;
use crate::error::ConfigError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Config file name shared by every candidate location except the legacy one.
pub const CONFIG_FILENAME: &str = "zabbix-cli.conf";

/// Per-user config directory, relative to `$HOME`.
pub const USER_CONFIG_DIR: &str = ".zabbix-cli";

pub const SYSTEM_CONFIG_PATH: &str = "/etc/zabbix-cli/zabbix-cli.conf";
pub const SYSTEM_LEGACY_CONFIG_PATH: &str = "/etc/zabbix-cli.conf";

/// One location to probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub path: PathBuf,
    pub source: ConfigSource,
}

impl Candidate {
    pub fn new(path: impl Into<PathBuf>, source: ConfigSource) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }

    /// Only regular files count; a directory at a candidate path is skipped.
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }
}

/// Ordered candidate list. The first existing entry wins; later ones are never probed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatePaths {
    candidates: Vec<Candidate>,
}

impl CandidatePaths {
    /// Standard search order, with `$HOME` read from the environment.
    pub fn discover(explicit: Option<&Path>) -> Self {
        Self::standard(explicit, &home_dir())
    }

    /// Standard search order for the given home directory.
    ///
    /// An empty `explicit` path is treated as not supplied.
    pub fn standard(explicit: Option<&Path>, home: &str) -> Self {
        let mut candidates = Vec::with_capacity(4);
        if let Some(path) = explicit.filter(|p| !p.as_os_str().is_empty()) {
            candidates.push(Candidate::new(path, ConfigSource::Explicit));
        }
        candidates.push(Candidate::new(user_config_path(home), ConfigSource::User));
        candidates.push(Candidate::new(SYSTEM_CONFIG_PATH, ConfigSource::System));
        candidates.push(Candidate::new(
            SYSTEM_LEGACY_CONFIG_PATH,
            ConfigSource::SystemLegacy,
        ));
        Self { candidates }
    }

    /// Arbitrary candidate list, probed in the given order.
    pub fn from_candidates(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// First candidate that exists as a regular file.
    pub fn resolve(&self) -> Result<&Candidate, ConfigError> {
        for candidate in &self.candidates {
            if candidate.exists() {
                debug!(
                    path = %candidate.path.display(),
                    source = %candidate.source,
                    "Config file candidate found"
                );
                return Ok(candidate);
            }
            debug!(
                path = %candidate.path.display(),
                source = %candidate.source,
                "Config file candidate not present"
            );
        }

        Err(ConfigError::NotFound {
            searched: self.candidates.iter().map(|c| c.path.clone()).collect(),
        })
    }
}

/// `${HOME}/.zabbix-cli/zabbix-cli.conf`, built by string concatenation so an empty home
/// yields `/.zabbix-cli/zabbix-cli.conf`.
pub fn user_config_path(home: &str) -> PathBuf {
    PathBuf::from(format!("{}/{}/{}", home, USER_CONFIG_DIR, CONFIG_FILENAME))
}
