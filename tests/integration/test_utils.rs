//! Shared test utilities for integration tests
//!
//! Centralizes `HOME` isolation so tests that touch the user config location do not race when
//! run in parallel.

use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::TempDir;

/// Global mutex to serialize HOME access across all tests
static HOME_ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Run `f` with `HOME` pointed at `test_dir/home`, restoring the original value afterwards.
///
/// The home directory is created but left empty; the closure receives its path.
pub fn with_home_env<F, R>(test_dir: &TempDir, f: F) -> R
where
    F: FnOnce(&Path) -> R,
{
    let _guard = HOME_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let original_home = std::env::var("HOME").ok();

    let test_home = test_dir.path().join("home");
    std::fs::create_dir_all(&test_home).unwrap();
    std::env::set_var("HOME", test_home.to_str().unwrap());

    let result = f(&test_home);

    if let Some(orig) = original_home {
        std::env::set_var("HOME", orig);
    } else {
        std::env::remove_var("HOME");
    }

    result
}

/// Write `contents` to `dir/relative`, creating parent directories.
pub fn write_file(dir: &Path, relative: &str, contents: &str) -> PathBuf {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, contents).unwrap();
    path
}

/// Whether a real system-wide config file exists on this machine. Tests that expect the whole
/// search to miss are skipped when it does.
pub fn system_config_present() -> bool {
    Path::new(zabbix_cli::config::SYSTEM_CONFIG_PATH).is_file()
        || Path::new(zabbix_cli::config::SYSTEM_LEGACY_CONFIG_PATH).is_file()
}
