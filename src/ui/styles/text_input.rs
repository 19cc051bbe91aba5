// SPDX-License-Identifier: MPL-2.0
//! Text-input styling.

use crate::ui::design_tokens::palette;
use iced::widget::text_input::{Status, Style};
use iced::{Border, Color, Theme};

/// Borderless input living inside the white feedback pill.
pub fn feedback(_theme: &Theme, status: Status) -> Style {
    let placeholder = Color {
        a: 0.45,
        ..palette::BLACK
    };

    match status {
        Status::Disabled => Style {
            background: palette::WHITE.into(),
            border: Border::default(),
            icon: placeholder,
            placeholder,
            value: placeholder,
            selection: palette::LIGHT_GRAY,
        },
        _ => Style {
            background: palette::WHITE.into(),
            border: Border::default(),
            icon: palette::BLACK,
            placeholder,
            value: palette::BLACK,
            selection: palette::LIGHT_GRAY,
        },
    }
}
