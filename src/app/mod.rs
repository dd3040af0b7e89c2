// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the composer and settings
//! screens.
//!
//! The `App` struct wires together localization, the composer, the dispatcher
//! and the audience directory, and translates messages into side effects like
//! config persistence and toasts.

pub mod config;
mod message;
pub mod paths;
mod persistence;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::application::compose::{Dispatcher, DEFAULT_TIMEZONE};
use crate::application::port::AudienceDirectory;
use crate::i18n::fluent::I18n;
use crate::infrastructure::{StaticDirectory, SystemClock};
use crate::ui::composer;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::{Path, PathBuf};

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    composer: composer::State,
    dispatcher: Dispatcher<SystemClock>,
    /// Target groups, statistics and send history shown by the composer.
    directory: Box<dyn AudienceDirectory>,
    theme_mode: ThemeMode,
    /// In-memory copy of `settings.toml`, written back on every change.
    config: Config,
    /// Where settings are persisted; `None` disables persistence.
    config_dir: Option<PathBuf>,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("draft", self.composer.draft())
            .field("timezone", &self.dispatcher.timezone())
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 760;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced 0.14 requires a `Fn` boot closure.
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::Composer,
            composer: composer::State::new(),
            dispatcher: Dispatcher::new(SystemClock),
            directory: Box::new(StaticDirectory::builtin()),
            theme_mode: ThemeMode::System,
            config: Config::default(),
            config_dir: None,
            notifications: notifications::Manager::new(),
        }
    }
}

/// Loads the audience directory named by the command line or the settings,
/// falling back to the built-in data set.
fn load_directory(
    flags: &Flags,
    config: &Config,
    config_dir: Option<&Path>,
    notifications: &mut notifications::Manager,
) -> Box<dyn AudienceDirectory> {
    let path = flags
        .directory_file
        .as_ref()
        .map(PathBuf::from)
        .or_else(|| config::resolve_directory_file(config, config_dir));

    let Some(path) = path else {
        return Box::new(StaticDirectory::builtin());
    };

    match StaticDirectory::load_from_path(&path) {
        Ok(directory) => {
            tracing::info!(
                path = %path.display(),
                groups = directory.target_groups().len(),
                "audience directory loaded"
            );
            Box::new(directory)
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "using built-in audience directory");
            notifications.push(Notification::warning("notification-directory-load-error"));
            Box::new(StaticDirectory::builtin())
        }
    }
}

impl App {
    /// Initializes application state from the user's config directory.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        Self::boot(flags, paths::get_app_config_dir())
    }

    /// Initializes application state, reading and persisting settings in
    /// `config_dir`.
    fn boot(flags: Flags, config_dir: Option<PathBuf>) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load_with_override(config_dir.clone());
        let i18n = I18n::new(flags.lang.clone(), flags.i18n_dir.clone(), &config);
        let mut notifications = notifications::Manager::new();

        if let Some(key) = config_warning {
            notifications.push(Notification::warning(&key));
        }

        let timezone = config.composer.parsed_timezone().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "falling back to default time zone");
            notifications.push(Notification::warning("notification-timezone-invalid"));
            DEFAULT_TIMEZONE
        });

        let directory = load_directory(&flags, &config, config_dir.as_deref(), &mut notifications);

        let app = App {
            i18n,
            dispatcher: Dispatcher::with_timezone(SystemClock, timezone),
            directory,
            theme_mode: config.general.theme_mode,
            config,
            config_dir,
            notifications,
            ..Self::default()
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.has_notifications())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            screen: &mut self.screen,
            composer: &mut self.composer,
            dispatcher: &self.dispatcher,
            theme_mode: &mut self.theme_mode,
            config: &mut self.config,
            config_dir: self.config_dir.as_deref(),
            notifications: &mut self.notifications,
        };

        match message {
            Message::Composer(composer_message) => {
                update::handle_composer_message(&mut ctx, composer_message)
            }
            Message::Settings(settings_message) => {
                update::handle_settings_message(&mut ctx, settings_message)
            }
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Notification(notification_message) => {
                update::handle_notification_message(&mut ctx, &notification_message)
            }
            Message::Tick(_) => update::handle_tick(&mut ctx),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            composer: &self.composer,
            directory: self.directory.as_ref(),
            theme_mode: self.theme_mode,
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::notification::Channel;
    use crate::ui::navbar;
    use crate::ui::notifications::Severity;
    use crate::ui::settings;
    use tempfile::tempdir;

    fn composer(message: composer::Message) -> Message {
        Message::Composer(message)
    }

    fn type_draft(app: &mut App, title: &str, body: &str) {
        let _ = app.update(composer(composer::Message::TitleChanged(title.into())));
        let _ = app.update(composer(composer::typed_message(body)));
    }

    fn toast_keys(app: &App) -> Vec<(Severity, String)> {
        app.notifications
            .visible()
            .map(|n| (n.severity(), n.title_key().unwrap_or_default().to_string()))
            .collect()
    }

    #[test]
    fn default_app_starts_on_composer() {
        let app = App::default();
        assert_eq!(app.screen, Screen::Composer);
        assert_eq!(app.composer.draft().title(), "");
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn boot_with_empty_config_dir_uses_defaults() {
        let dir = tempdir().expect("temp dir");
        let (app, _task) = App::boot(Flags::default(), Some(dir.path().to_path_buf()));

        assert_eq!(app.dispatcher.timezone(), DEFAULT_TIMEZONE);
        assert_eq!(app.directory.target_groups().len(), 7);
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn boot_warns_on_invalid_timezone() {
        let dir = tempdir().expect("temp dir");
        std::fs::write(
            dir.path().join("settings.toml"),
            "[composer]\ntimezone = \"Mars/Olympus\"\n",
        )
        .expect("write settings");

        let (app, _task) = App::boot(Flags::default(), Some(dir.path().to_path_buf()));

        assert_eq!(app.dispatcher.timezone(), DEFAULT_TIMEZONE);
        let warning = app.notifications.visible().next().expect("warning");
        assert_eq!(warning.message_key(), "notification-timezone-invalid");
    }

    #[test]
    fn boot_loads_directory_file_from_config_dir() {
        let dir = tempdir().expect("temp dir");
        std::fs::write(
            dir.path().join(config::DIRECTORY_FILE_NAME),
            "[[target_groups]]\nid = \"pilots\"\nlabel = \"Pilot Users\"\nmember_count = 12\n",
        )
        .expect("write directory");

        let (app, _task) = App::boot(Flags::default(), Some(dir.path().to_path_buf()));

        let groups = app.directory.target_groups();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].id.as_str(), "pilots");
    }

    #[test]
    fn boot_falls_back_when_directory_flag_is_missing() {
        let dir = tempdir().expect("temp dir");
        let flags = Flags {
            directory_file: Some(dir.path().join("absent.toml").display().to_string()),
            ..Flags::default()
        };

        let (app, _task) = App::boot(flags, Some(dir.path().to_path_buf()));

        assert_eq!(app.directory.target_groups().len(), 7);
        let warning = app.notifications.visible().next().expect("warning");
        assert_eq!(warning.message_key(), "notification-directory-load-error");
    }

    #[test]
    fn failed_send_keeps_draft_and_shows_error() {
        let mut app = App::default();
        let _ = app.update(composer(composer::typed_message("Body")));
        let before = app.composer.draft().clone();

        let _ = app.update(composer(composer::Message::SendPressed));

        assert_eq!(app.composer.draft(), &before);
        assert_eq!(
            toast_keys(&app),
            vec![(Severity::Error, "toast-error-required-title".to_string())]
        );
    }

    #[test]
    fn scheduled_send_without_date_reports_schedule_error() {
        let mut app = App::default();
        type_draft(&mut app, "Exam", "Tomorrow at 9");
        let _ = app.update(composer(composer::Message::ScheduledToggled(true)));

        let _ = app.update(composer(composer::Message::SendPressed));

        assert_eq!(app.composer.draft().title(), "Exam");
        assert_eq!(
            toast_keys(&app),
            vec![(Severity::Error, "toast-error-schedule-title".to_string())]
        );
    }

    #[test]
    fn successful_send_resets_text_and_clears_errors() {
        let mut app = App::default();
        let _ = app.update(composer(composer::Message::SendPressed));
        type_draft(&mut app, "Maintenance", "Back at 10:00");
        let _ = app.update(composer(composer::Message::ChannelToggled(Channel::Sms, true)));
        let _ = app.update(composer(composer::Message::UrgentToggled(true)));

        let _ = app.update(composer(composer::Message::SendPressed));

        let draft = app.composer.draft();
        assert_eq!(draft.title(), "");
        assert_eq!(draft.message(), "");
        assert!(draft.channels().sms);
        assert!(draft.urgent());

        let toast = app.notifications.visible().next().expect("confirmation");
        assert_eq!(toast.severity(), Severity::Success);
        assert_eq!(toast.title_key(), Some("toast-sent-title"));
        assert_eq!(toast.arg("title"), Some("Maintenance"));
        assert_eq!(app.notifications.visible_count(), 1);
    }

    #[test]
    fn typing_after_send_starts_a_fresh_message() {
        let mut app = App::default();
        type_draft(&mut app, "Maintenance", "Back at 10:00");
        let _ = app.update(composer(composer::Message::SendPressed));

        let _ = app.update(composer(composer::typed_message("Next")));

        assert_eq!(app.composer.draft().message(), "Next");
    }

    #[test]
    fn preview_does_not_touch_the_draft() {
        let mut app = App::default();
        let _ = app.update(composer(composer::Message::TitleChanged("Draft".into())));
        let before = app.composer.draft().clone();

        let _ = app.update(composer(composer::Message::PreviewPressed));

        assert_eq!(app.composer.draft(), &before);
        let toast = app.notifications.visible().next().expect("preview toast");
        assert_eq!(toast.title_key(), Some("toast-preview-title"));
        assert_eq!(toast.arg("title"), Some("Draft"));
    }

    #[test]
    fn navbar_switches_screens() {
        let mut app = App::default();
        let _ = app.update(Message::Navbar(navbar::Message::OpenSettings));
        assert_eq!(app.screen, Screen::Settings);
        let _ = app.update(Message::Navbar(navbar::Message::OpenComposer));
        assert_eq!(app.screen, Screen::Composer);
    }

    #[test]
    fn settings_changes_are_persisted() {
        let dir = tempdir().expect("temp dir");
        let (mut app, _task) = App::boot(
            Flags {
                lang: Some("en-US".into()),
                ..Flags::default()
            },
            Some(dir.path().to_path_buf()),
        );

        let _ = app.update(Message::Settings(settings::Message::ThemeModeSelected(
            ThemeMode::Dark,
        )));
        let _ = app.update(Message::Settings(settings::Message::LanguageSelected(
            "fr".parse().expect("locale"),
        )));

        assert_eq!(app.theme_mode, ThemeMode::Dark);
        assert_eq!(app.title(), "BulkNotify");
        let (saved, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(saved.general.theme_mode, ThemeMode::Dark);
        assert_eq!(saved.general.language.as_deref(), Some("fr"));
    }

    #[test]
    fn dismiss_message_removes_toast() {
        let mut app = App::default();
        let _ = app.update(composer(composer::Message::PreviewPressed));
        let id = app.notifications.visible().next().expect("toast").id();

        let _ = app.update(Message::Notification(
            notifications::NotificationMessage::Dismiss(id),
        ));

        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn view_renders_both_screens() {
        let mut app = App::default();
        let _ = app.update(composer(composer::Message::PreviewPressed));
        {
            let _element = app.view();
        }
        let _ = app.update(Message::Navbar(navbar::Message::OpenSettings));
        assert_eq!(app.screen, Screen::Settings);
        {
            let _element = app.view();
        }
    }
}
