//! Integration tests for the zabbix-cli binary: exit status and output.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

use crate::integration::test_utils::{system_config_present, write_file};

fn run(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_zabbix-cli"))
        .env("HOME", home)
        .env_remove("ZABBIX_CLI_LOG")
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_show_config_json_with_explicit_file() {
    let temp = TempDir::new().unwrap();
    let home = temp.path().join("home");
    std::fs::create_dir_all(&home).unwrap();
    let config = write_file(
        temp.path(),
        "zabbix-cli.conf",
        "[zabbix_api]\nzabbix_api_url = https://zbx.example.com/api_jsonrpc.php\n\n[extra]\nfoo = bar\n",
    );

    let output = run(
        &home,
        &["--config", config.to_str().unwrap(), "show-config", "--format", "json"],
    );
    assert!(
        output.status.success(),
        "show-config should succeed: stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json["zabbix_api"]["zabbix_api_url"],
        "https://zbx.example.com/api_jsonrpc.php"
    );
    assert_eq!(
        json["zabbix_config"]["default_directory_exports"],
        format!("{}/zabbix_exports", home.to_str().unwrap())
    );
    assert!(json.get("extra").is_none());
}

#[test]
fn test_config_path_uses_home_config() {
    let temp = TempDir::new().unwrap();
    let home = temp.path().join("home");
    let user = write_file(&home, ".zabbix-cli/zabbix-cli.conf", "");

    let output = run(&home, &["config-path"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(user.to_str().unwrap()));
    assert!(stdout.contains("user config"));
}

#[test]
fn test_missing_config_exits_with_error() {
    if system_config_present() {
        return;
    }
    let temp = TempDir::new().unwrap();
    let home = temp.path().join("home");
    std::fs::create_dir_all(&home).unwrap();
    let missing = temp.path().join("missing.conf");

    let output = run(&home, &["--config", missing.to_str().unwrap(), "show-config"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No config file found. Exiting."), "stderr={}", stderr);
    assert!(stderr.contains(missing.to_str().unwrap()));
}

#[test]
fn test_malformed_config_exits_with_load_error() {
    let temp = TempDir::new().unwrap();
    let home = temp.path().join("home");
    std::fs::create_dir_all(&home).unwrap();
    let broken = write_file(temp.path(), "broken.conf", "[zabbix_api\n");

    let output = run(&home, &["--config", broken.to_str().unwrap(), "show-config"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid config file"), "stderr={}", stderr);
    assert!(!stderr.contains("No config file found"));
}

#[test]
fn test_candidates_lists_search_order_without_loading() {
    let temp = TempDir::new().unwrap();
    let home = temp.path().join("home");
    std::fs::create_dir_all(&home).unwrap();

    let output = run(&home, &["--config", "/nonexistent/explicit.conf", "candidates"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    let explicit = stdout.find("/nonexistent/explicit.conf").unwrap();
    let user = stdout.find(".zabbix-cli/zabbix-cli.conf").unwrap();
    let system = stdout.find("/etc/zabbix-cli/zabbix-cli.conf").unwrap();
    assert!(explicit < user && user < system);
}

#[test]
fn test_logging_on_writes_log_file() {
    let temp = TempDir::new().unwrap();
    let home = temp.path().join("home");
    std::fs::create_dir_all(&home).unwrap();
    let log_file = temp.path().join("logs").join("zabbix-cli.log");
    let config = write_file(
        temp.path(),
        "zabbix-cli.conf",
        &format!(
            "[logging]\nlogging = ON\nlog_level = INFO\nlog_file = {}\n",
            log_file.display()
        ),
    );

    let output = run(&home, &["--config", config.to_str().unwrap(), "config-path"]);
    assert!(
        output.status.success(),
        "stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );
    let content = std::fs::read_to_string(&log_file).unwrap();
    assert!(content.contains("zabbix-cli starting"), "log={}", content);
}
