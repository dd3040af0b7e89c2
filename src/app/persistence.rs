// SPDX-License-Identifier: MPL-2.0
//! Preference persistence.
//!
//! Settings changes update the in-memory [`Config`] and are written to
//! `settings.toml` right away. A failed write is reported with a warning toast
//! and never rolls back the change on screen.

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use std::path::Path;
use unic_langid::LanguageIdentifier;

/// Writes `config` into `config_dir`.
///
/// Without a config directory (headless or default-constructed app) nothing
/// is written.
pub fn persist_preferences(
    config: &Config,
    config_dir: Option<&Path>,
    notifications: &mut notifications::Manager,
) {
    let Some(dir) = config_dir else {
        return;
    };

    if let Err(error) = config::save_with_override(config, Some(dir.to_path_buf())) {
        tracing::error!(%error, "failed to save settings");
        notifications.push(Notification::warning("notification-config-save-error"));
    }
}

/// Switches the interface language and records it in `config`.
pub fn apply_language_change(
    i18n: &mut I18n,
    config: &mut Config,
    locale: LanguageIdentifier,
) {
    config.general.language = Some(locale.to_string());
    i18n.set_locale(locale);
}

/// Records the theme mode in `config`.
pub fn apply_theme_change(theme_mode: &mut ThemeMode, config: &mut Config, mode: ThemeMode) {
    *theme_mode = mode;
    config.general.theme_mode = mode;
}
