// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::composer;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::settings;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Composer(composer::Message),
    Settings(settings::Message),
    Navbar(navbar::Message),
    Notification(notifications::NotificationMessage),
    /// Periodic tick driving toast auto-dismissal.
    Tick(Instant),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Directory with extra or overriding `.ftl` files.
    pub i18n_dir: Option<String>,
    /// Config directory override (`--config-dir`).
    pub config_dir: Option<String>,
    /// Audience directory file (`--directory`), takes precedence over settings.
    pub directory_file: Option<String>,
}
