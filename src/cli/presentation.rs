//! CLI presentation: text and json formatters.

use crate::config::{CandidatePaths, ZabbixConfig};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

/// Format a section heading, bold/underlined when `color` is set.
pub fn format_section_heading(title: &str, color: bool) -> String {
    if color {
        format!("{}", title.bold().underline())
    } else {
        title.to_string()
    }
}

/// "path (source)" line for the file in use; "(defaults only)" when nothing was loaded.
pub fn format_config_path(config: &ZabbixConfig) -> String {
    match (config.config_file(), config.source()) {
        (Some(path), Some(source)) => format!("{} ({})", path.display(), source),
        (Some(path), None) => path.display().to_string(),
        _ => "(defaults only)".to_string(),
    }
}

/// Every recognized option as a table, headed by the file in use.
pub fn format_config_text(config: &ZabbixConfig, color: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n\n",
        format_section_heading("Configuration", color)
    ));
    out.push_str(&format!("  File: {}\n\n", format_config_path(config)));

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Section", "Option", "Value"]);
    for (option, value) in config.options() {
        table.add_row(vec![option.section(), option.key(), value]);
    }
    out.push_str(&format!("{}\n", table));
    out
}

pub fn format_config_json(config: &ZabbixConfig) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(config)
}

/// Candidate files in search order, marking which exist.
pub fn format_candidates_text(paths: &CandidatePaths, color: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n\n",
        format_section_heading("Config file candidates", color)
    ));

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["#", "Path", "Source", "Exists"]);
    for (i, candidate) in paths.candidates().iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            candidate.path.display().to_string(),
            candidate.source.to_string(),
            if candidate.exists() { "yes" } else { "no" }.to_string(),
        ]);
    }
    out.push_str(&format!("{}\n", table));
    out
}
