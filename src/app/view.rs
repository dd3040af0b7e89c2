// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The active screen sits below the navbar; toasts are layered on top of
//! both.

use super::{Message, Screen};
use crate::application::port::AudienceDirectory;
use crate::i18n::fluent::I18n;
use crate::ui::composer;
use crate::ui::navbar;
use crate::ui::notifications::{self, Toast};
use crate::ui::settings;
use crate::ui::theming::ThemeMode;
use iced::{
    widget::{Column, Container, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub composer: &'a composer::State,
    pub directory: &'a dyn AudienceDirectory,
    pub theme_mode: ThemeMode,
    pub notifications: &'a notifications::Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Composer => composer::view(
            ctx.composer,
            composer::ViewContext {
                i18n: ctx.i18n,
                directory: ctx.directory,
            },
        )
        .map(Message::Composer),
        Screen::Settings => settings::view(settings::ViewContext {
            i18n: ctx.i18n,
            theme_mode: ctx.theme_mode,
        })
        .map(Message::Settings),
    };

    let navbar = navbar::view(navbar::ViewContext {
        i18n: ctx.i18n,
        screen: ctx.screen,
    })
    .map(Message::Navbar);

    let page = Column::new()
        .push(navbar)
        .push(
            Container::new(current_view)
                .width(Length::Fill)
                .height(Length::Fill),
        );

    if ctx.notifications.has_notifications() {
        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(page)
            .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
            .into()
    } else {
        page.into()
    }
}
