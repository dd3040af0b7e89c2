// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Every handler works on an [`UpdateContext`] borrowing the parts of `App`
//! it needs, so the handlers stay free functions that can be tested in
//! isolation.

use super::{persistence, Message, Screen};
use crate::application::compose::Dispatcher;
use crate::config::Config;
use crate::i18n::fluent::I18n;
use crate::infrastructure::SystemClock;
use crate::ui::composer::{self, Event as ComposerEvent};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications;
use crate::ui::settings::{self, Event as SettingsEvent};
use crate::ui::theming::ThemeMode;
use iced::Task;
use std::path::Path;

/// Mutable view of the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub screen: &'a mut Screen,
    pub composer: &'a mut composer::State,
    pub dispatcher: &'a Dispatcher<SystemClock>,
    pub theme_mode: &'a mut ThemeMode,
    pub config: &'a mut Config,
    pub config_dir: Option<&'a Path>,
    pub notifications: &'a mut notifications::Manager,
}

pub fn handle_composer_message(
    ctx: &mut UpdateContext<'_>,
    message: composer::Message,
) -> Task<Message> {
    match ctx.composer.update(message) {
        ComposerEvent::None => {}
        ComposerEvent::Send => {
            let dispatcher = ctx.dispatcher;
            let notifications = &mut *ctx.notifications;
            if ctx
                .composer
                .send(|store| dispatcher.submit(store, notifications))
                .is_ok()
            {
                ctx.notifications.clear_validation_errors();
            }
        }
        ComposerEvent::Preview => {
            ctx.dispatcher.preview(ctx.composer.draft(), ctx.notifications);
        }
    }
    Task::none()
}

pub fn handle_settings_message(
    ctx: &mut UpdateContext<'_>,
    message: settings::Message,
) -> Task<Message> {
    match settings::update(message) {
        SettingsEvent::LanguageChanged(locale) => {
            persistence::apply_language_change(ctx.i18n, ctx.config, locale);
        }
        SettingsEvent::ThemeModeChanged(mode) => {
            persistence::apply_theme_change(ctx.theme_mode, ctx.config, mode);
        }
    }
    persistence::persist_preferences(ctx.config, ctx.config_dir, ctx.notifications);
    Task::none()
}

pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message) {
        NavbarEvent::Navigate(screen) => *ctx.screen = screen,
    }
    Task::none()
}

pub fn handle_notification_message(
    ctx: &mut UpdateContext<'_>,
    message: &notifications::NotificationMessage,
) -> Task<Message> {
    ctx.notifications.handle_message(message);
    Task::none()
}

/// Expires auto-dismissing toasts.
pub fn handle_tick(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.notifications.tick();
    Task::none()
}
