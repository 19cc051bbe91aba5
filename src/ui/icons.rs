// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are embedded at compile time via `include_bytes!` and handles are
//! cached using `OnceLock`. Names describe the glyph, not the action.

use crate::ui::design_tokens::sizing;
use iced::widget::svg::{Handle, Svg};
use iced::Length;
use std::sync::OnceLock;

macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!("../../assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(cross, "close.svg", "Diagonal cross (close).");
define_icon!(info, "info.svg", "Circled letter i.");
define_icon!(arrow_right, "arrow-right.svg", "Right-pointing arrow (white).");

/// Sizes an icon to a square edge length.
pub fn sized(icon: Svg<'static>, edge: f32) -> Svg<'static> {
    icon.width(Length::Fixed(edge)).height(Length::Fixed(edge))
}

/// Standard header icon size.
pub fn header(icon: Svg<'static>) -> Svg<'static> {
    sized(icon, sizing::ICON)
}
