//! CLI domain: parse, route, output, and presentation only.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{
    format_candidates_text, format_config_json, format_config_path, format_config_text,
    format_section_heading,
};
pub use route::RunContext;
