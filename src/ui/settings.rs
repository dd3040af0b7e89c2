// SPDX-License-Identifier: MPL-2.0
//! Settings screen: interface language and theme mode.
//!
//! Both choices are persisted by the application shell when they change.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::Horizontal,
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};
use unic_langid::LanguageIdentifier;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
}

#[derive(Debug, Clone)]
pub enum Message {
    LanguageSelected(LanguageIdentifier),
    ThemeModeSelected(ThemeMode),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    LanguageChanged(LanguageIdentifier),
    ThemeModeChanged(ThemeMode),
}

pub fn update(message: Message) -> Event {
    match message {
        Message::LanguageSelected(locale) => Event::LanguageChanged(locale),
        Message::ThemeModeSelected(mode) => Event::ThemeModeChanged(mode),
    }
}

/// Label shown for a locale, e.g. "Français (fr)".
fn language_label(i18n: &I18n, locale: &LanguageIdentifier) -> String {
    let code = locale.to_string();
    let name = i18n.tr(&format!("language-name-{code}"));
    if name.starts_with("MISSING:") {
        code
    } else {
        format!("{name} ({code})")
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let mut languages = Column::new().spacing(spacing::XS);
    for locale in &i18n.available_locales {
        let style = if i18n.current_locale() == locale {
            styles::button::selected
        } else {
            styles::button::secondary
        };
        languages = languages.push(
            button(Text::new(language_label(i18n, locale)))
                .width(Length::Fill)
                .on_press(Message::LanguageSelected(locale.clone()))
                .style(style),
        );
    }

    let themes = ThemeMode::ALL
        .into_iter()
        .fold(Row::new().spacing(spacing::XS), |row, mode| {
            let style = if ctx.theme_mode == mode {
                styles::button::selected
            } else {
                styles::button::secondary
            };
            row.push(
                button(Text::new(i18n.tr(mode.i18n_key())))
                    .on_press(Message::ThemeModeSelected(mode))
                    .style(style),
            )
        });

    let section = |title: String, body: Element<'a, Message>| {
        Container::new(
            Column::new()
                .spacing(spacing::SM)
                .push(Text::new(title).size(typography::TITLE_SM))
                .push(body),
        )
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::card)
    };

    let content = Column::new()
        .spacing(spacing::LG)
        .max_width(sizing::FORM_WIDTH)
        .push(Text::new(i18n.tr("settings-title")).size(typography::TITLE_LG))
        .push(section(i18n.tr("settings-language-label"), languages.into()))
        .push(section(i18n.tr("settings-theme-label"), themes.into()));

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::LG)
        .align_x(Horizontal::Center)
        .into()
}
