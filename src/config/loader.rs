//! Configuration loader: defaults first, then values from the resolved INI file.

use super::defaults::home_dir;
use super::resolve::CandidatePaths;
use super::{ConfigOption, ConfigSource, ZabbixConfig};
use crate::error::{ConfigError, LoadError};
use ini::{Ini, ParseError, ParseOption};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// A resolved but not yet loaded configuration file.
///
/// [`ConfigLoader::load`] consumes the loader, so a file is read at most once and the
/// returned [`ZabbixConfig`] is never written to again.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    path: PathBuf,
    source: ConfigSource,
    home: String,
}

impl ConfigLoader {
    /// Resolve the config file using the standard search order and `$HOME`.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let home = home_dir();
        let paths = CandidatePaths::standard(explicit, &home);
        Self::resolve_with(&paths, &home)
    }

    /// Resolve against an explicit candidate list. `home` is used for path defaults.
    pub fn resolve_with(paths: &CandidatePaths, home: &str) -> Result<Self, ConfigError> {
        let candidate = paths.resolve()?;
        Ok(Self::new(&candidate.path, candidate.source, home))
    }

    /// Loader for a known file, skipping resolution.
    pub fn new(path: impl Into<PathBuf>, source: ConfigSource, home: &str) -> Self {
        Self {
            path: path.into(),
            source,
            home: home.to_string(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn source(&self) -> ConfigSource {
        self.source
    }

    /// Read and parse the file, overlaying recognized options onto the defaults.
    ///
    /// Values are taken verbatim: quotes and backslashes are not interpreted. Section names
    /// match exactly, option names case-insensitively. Unknown sections and keys are ignored.
    pub fn load(self) -> Result<ZabbixConfig, ConfigError> {
        info!(
            path = %self.path.display(),
            source = %self.source,
            "Loading configuration file"
        );

        let text = std::fs::read_to_string(&self.path).map_err(|source| LoadError::Read {
            path: self.path.clone(),
            source,
        })?;
        let parsed = parse_ini(&text).map_err(|source| LoadError::Parse {
            path: self.path.clone(),
            source,
        })?;

        let mut config = ZabbixConfig::defaults(&self.home);
        let mut overridden = 0usize;
        for option in ConfigOption::ALL {
            if let Some(value) = lookup(&parsed, option) {
                debug!(option = %option.path(), value = %value, "Option set by config file");
                *config.slot_mut(option) = value.to_string();
                overridden += 1;
            }
        }
        debug!(
            overridden,
            defaulted = ConfigOption::ALL.len() - overridden,
            "Configuration loaded"
        );

        config.config_file = Some(self.path);
        config.source = Some(self.source);
        Ok(config)
    }
}

fn parse_ini(text: &str) -> Result<Ini, ParseError> {
    let options = ParseOption {
        enabled_quote: false,
        enabled_escape: false,
    };
    let parsed = Ini::load_from_str_opt(text, options)?;

    let general = parsed.section(None::<String>);
    if let Some((key, _)) = general.and_then(|properties| properties.iter().next()) {
        return Err(syntax_error(text, key, "option outside of any [section]"));
    }

    for (section, properties) in parsed.iter() {
        if let Some(name) = section.filter(|name| has_line_break(name)) {
            return Err(syntax_error(text, name, "section header is missing ']'"));
        }
        // A line without a delimiter is folded into the following key.
        if let Some((key, _)) = properties.iter().find(|(key, _)| has_line_break(key)) {
            return Err(syntax_error(
                text,
                key,
                "line without '=' or ':' (continuation lines are not supported)",
            ));
        }
    }

    Ok(parsed)
}

/// Last value of `option` across every section whose name matches exactly.
fn lookup(parsed: &Ini, option: ConfigOption) -> Option<&str> {
    parsed
        .iter()
        .filter(|(section, _)| *section == Some(option.section()))
        .flat_map(|(_, properties)| properties.iter())
        .filter(|(key, _)| key.to_lowercase() == option.key())
        .map(|(_, value)| value)
        .last()
}

fn has_line_break(s: &str) -> bool {
    s.contains(|c: char| c == '\n' || c == '\r')
}

/// Error pointing at the first line of `fragment` in `text`.
fn syntax_error(text: &str, fragment: &str, msg: &str) -> ParseError {
    let first = fragment
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or(fragment);
    let line = text
        .lines()
        .position(|line| line.contains(first))
        .map_or(0, |index| index + 1);
    ParseError {
        line,
        col: 1,
        msg: msg.to_string(),
    }
}
