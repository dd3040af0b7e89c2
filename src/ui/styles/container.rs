// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Card surface used for stats, the form and the recent list.
///
/// Derived from the active theme so cards read well in light and dark mode.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        text_color: Some(palette.background.base.text),
        ..Default::default()
    }
}

/// Pill-shaped badge tinted with `accent`.
pub fn badge(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BADGE,
            ..accent
        })),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        text_color: Some(accent),
        ..Default::default()
    }
}

/// Top navigation bar.
pub fn navbar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

/// Accent color for a stat trend.
#[must_use]
pub fn trend_color(positive: bool) -> Color {
    if positive {
        palette::SUCCESS_500
    } else {
        palette::GRAY_500
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_is_tinted_with_accent() {
        let style = badge(palette::PRIMARY_500)(&Theme::Light);
        assert_eq!(style.text_color, Some(palette::PRIMARY_500));
        match style.background {
            Some(Background::Color(color)) => assert!(color.a < 1.0),
            other => panic!("expected color background, got {other:?}"),
        }
    }

    #[test]
    fn card_has_border() {
        assert!(card(&Theme::Dark).border.width > 0.0);
    }
}
