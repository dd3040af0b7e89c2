// SPDX-License-Identifier: MPL-2.0
//! Navigation bar with one tab per screen.

use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
}

#[derive(Debug, Clone)]
pub enum Message {
    OpenComposer,
    OpenSettings,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Navigate(Screen),
}

pub fn update(message: Message) -> Event {
    match message {
        Message::OpenComposer => Event::Navigate(Screen::Composer),
        Message::OpenSettings => Event::Navigate(Screen::Settings),
    }
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let tab = |label: String, target: Screen, message: Message| {
        let style = if ctx.screen == target {
            styles::button::selected
        } else {
            styles::button::secondary
        };
        button(Text::new(label).size(typography::BODY))
            .on_press(message)
            .padding([spacing::XXS, spacing::SM])
            .style(style)
    };

    let row = Row::new()
        .spacing(spacing::XS)
        .padding([0.0, spacing::MD])
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .align_y(Vertical::Center)
        .push(Text::new(ctx.i18n.tr("navbar-app-name")).size(typography::TITLE_SM))
        .push(Space::new().width(Length::Fill))
        .push(tab(
            ctx.i18n.tr("navbar-composer"),
            Screen::Composer,
            Message::OpenComposer,
        ))
        .push(tab(
            ctx.i18n.tr("navbar-settings"),
            Screen::Settings,
            Message::OpenSettings,
        ));

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::navbar)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabs_navigate_to_their_screen() {
        assert_eq!(update(Message::OpenComposer), Event::Navigate(Screen::Composer));
        assert_eq!(update(Message::OpenSettings), Event::Navigate(Screen::Settings));
    }

    #[test]
    fn view_renders_for_each_screen() {
        let i18n = I18n::default();
        for screen in [Screen::Composer, Screen::Settings] {
            let _element = view(ViewContext { i18n: &i18n, screen });
        }
    }
}
