// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Theme};

/// Main call to action ("Send Now", "Schedule Notification").
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, border_color) = match status {
        button::Status::Hovered => (palette::PRIMARY_400, palette::PRIMARY_500),
        button::Status::Disabled => (palette::GRAY_100, palette::GRAY_400),
        button::Status::Active | button::Status::Pressed => {
            (palette::PRIMARY_500, palette::PRIMARY_600)
        }
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: if status == button::Status::Disabled {
            palette::GRAY_400
        } else {
            WHITE
        },
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Outlined button for secondary actions ("Preview") and inactive nav tabs.
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background;
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => base.weak.color,
        button::Status::Active | button::Status::Disabled => base.base.color,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: base.base.text,
        border: Border {
            color: if status == button::Status::Hovered {
                palette::PRIMARY_500
            } else {
                palette::GRAY_400
            },
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Active navigation tab.
pub fn selected(theme: &Theme, status: button::Status) -> button::Style {
    primary(theme, status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let style = primary(&Theme::Dark, button::Status::Active);
        assert_eq!(style.background, Some(Background::Color(palette::PRIMARY_500)));
        assert_eq!(style.text_color, WHITE);
    }

    #[test]
    fn secondary_button_highlights_border_on_hover() {
        let active = secondary(&Theme::Light, button::Status::Active);
        let hovered = secondary(&Theme::Light, button::Status::Hovered);
        assert_ne!(active.border.color, hovered.border.color);
    }
}
