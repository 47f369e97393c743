//! Properties of loading: overrides are verbatim, absent options keep defaults, and unknown
//! keys never leak into the record.

use proptest::prelude::*;
use std::fmt::Write as _;
use tempfile::TempDir;
use zabbix_cli::config::{ConfigLoader, ConfigOption, ConfigSource, ZabbixConfig, SECTIONS};

const HOME: &str = "/home/prop";

/// Printable values without surrounding whitespace, including quotes, backslashes and the
/// `#`/`;` comment characters.
fn value_strategy() -> impl Strategy<Value = String> {
    "[!-~]([ -~]{0,22}[!-~])?"
}

/// Render an INI file with the given option values (None = omitted) plus extra unknown keys.
fn render_ini(values: &[Option<String>], unknown: &[(usize, String, String)]) -> String {
    let mut text = String::new();
    for (section_index, section) in SECTIONS.iter().enumerate() {
        writeln!(text, "[{}]", section).unwrap();
        for (option, value) in ConfigOption::ALL.iter().zip(values) {
            if option.section() == *section {
                if let Some(value) = value {
                    writeln!(text, "{} = {}", option.key(), value).unwrap();
                }
            }
        }
        for (index, key, value) in unknown {
            if index % SECTIONS.len() == section_index {
                writeln!(text, "unknown_{} = {}", key, value).unwrap();
            }
        }
        text.push('\n');
    }
    for (_, key, value) in unknown {
        writeln!(text, "[extra_{}]\n{} = {}\n", key, key, value).unwrap();
    }
    text
}

fn load(text: &str) -> ZabbixConfig {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("zabbix-cli.conf");
    std::fs::write(&path, text).unwrap();
    ConfigLoader::new(&path, ConfigSource::Explicit, HOME)
        .load()
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn present_options_override_and_absent_keep_defaults(
        values in proptest::collection::vec(proptest::option::of(value_strategy()), 14)
    ) {
        let config = load(&render_ini(&values, &[]));
        let defaults = ZabbixConfig::defaults(HOME);

        for (option, value) in ConfigOption::ALL.iter().zip(&values) {
            match value {
                Some(v) => prop_assert_eq!(config.get(*option), v.as_str()),
                None => prop_assert_eq!(config.get(*option), defaults.get(*option)),
            }
        }
    }

    #[test]
    fn unknown_keys_are_ignored(
        unknown in proptest::collection::vec(
            (0usize..3, "[a-z]{1,8}", value_strategy()),
            1..6,
        )
    ) {
        let none: Vec<Option<String>> = vec![None; ConfigOption::ALL.len()];
        let config = load(&render_ini(&none, &unknown));

        let defaults = ZabbixConfig::defaults(HOME);
        prop_assert!(config.options().eq(defaults.options()));
        let json = serde_json::to_string(&config).unwrap();
        prop_assert!(!json.contains("unknown_"));
        prop_assert!(!json.contains("extra_"));
    }
}
