// SPDX-License-Identifier: MPL-2.0
//! Location of the config directory holding `settings.toml` and, optionally,
//! `directory.toml`.
//!
//! # Resolution Order
//!
//! 1. Explicit override passed to [`get_app_config_dir_with_override`] (tests)
//! 2. `--config-dir`, recorded once at startup by [`init_cli_overrides`]
//! 3. The `BULK_NOTIFY_CONFIG_DIR` environment variable, when non-empty
//! 4. `<platform config dir>/BulkNotify`
//!
//! ```ignore
//! paths::init_cli_overrides(flags.config_dir.clone());
//! ```

use std::path::PathBuf;
use std::sync::OnceLock;

/// Directory name under the platform config dir.
const APP_NAME: &str = "BulkNotify";

/// Environment variable naming the config directory.
pub const ENV_CONFIG_DIR: &str = "BULK_NOTIFY_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` argument.
///
/// Only the first call has an effect.
pub fn init_cli_overrides(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::debug!("CLI config dir override already initialized");
    }
}

fn env_config_dir() -> Option<PathBuf> {
    std::env::var_os(ENV_CONFIG_DIR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn platform_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME))
}

/// Returns the config directory.
///
/// Platform defaults:
/// - Linux: `~/.config/BulkNotify/`
/// - macOS: `~/Library/Application Support/BulkNotify/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\BulkNotify\`
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns `override_path` when given, otherwise the resolved config
/// directory.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    override_path
        .or_else(|| CLI_CONFIG_DIR.get().cloned().flatten())
        .or_else(env_config_dir)
        .or_else(platform_config_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Tests below mutate the process environment.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn with_env<F: FnOnce()>(value: Option<&str>, test: F) {
        let _guard = ENV_LOCK.lock().unwrap();
        match value {
            Some(v) => std::env::set_var(ENV_CONFIG_DIR, v),
            None => std::env::remove_var(ENV_CONFIG_DIR),
        }
        test();
        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn explicit_override_wins() {
        with_env(Some("/from/env"), || {
            let dir = PathBuf::from("/tmp/bulk-notify-test");
            assert_eq!(
                get_app_config_dir_with_override(Some(dir.clone())),
                Some(dir)
            );
        });
    }

    #[test]
    fn env_var_names_the_config_dir() {
        with_env(Some("/srv/bulk-notify"), || {
            assert_eq!(get_app_config_dir(), Some(PathBuf::from("/srv/bulk-notify")));
        });
    }

    #[test]
    fn empty_env_var_falls_through_to_platform_dir() {
        with_env(Some(""), || {
            if let Some(dir) = get_app_config_dir() {
                assert!(dir.ends_with(APP_NAME));
            }
        });
    }

    #[test]
    fn platform_dir_ends_with_app_name() {
        with_env(None, || {
            if let Some(dir) = platform_config_dir() {
                assert!(dir.ends_with(APP_NAME));
            }
        });
    }
}
