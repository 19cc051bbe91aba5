// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{palette, radius, sizing};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Black pill used for the Submit action.
pub fn submit(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => Color {
            a: 0.85,
            ..palette::BLACK
        },
        _ => palette::BLACK,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: Border {
            radius: radius::PILL.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}

/// Circular light-gray button used for the header icons.
pub fn icon(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Color {
            a: 0.8,
            ..palette::LIGHT_GRAY
        },
        _ => palette::LIGHT_GRAY,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::BLACK,
        border: Border {
            radius: (sizing::ICON_BUTTON / 2.0).into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}

/// Invisible button wrapping the collapsed feedback placeholder; the
/// surrounding container draws the pill.
pub fn bare(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: Color {
            a: 0.45,
            ..palette::BLACK
        },
        border: Border::default(),
        ..button::Style::default()
    }
}
