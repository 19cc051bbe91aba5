// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Full-screen background tinted by the interpolated category color.
pub fn screen(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        ..container::Style::default()
    }
}

/// White pill that frames the feedback text field and the submit button.
pub fn feedback_bar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::WHITE)),
        border: Border {
            radius: radius::PILL.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}
