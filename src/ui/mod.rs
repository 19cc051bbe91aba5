// SPDX-License-Identifier: MPL-2.0
//! User interface components for the survey screen.
//!
//! The screen is one view; the pieces here follow the Elm-style "state
//! down, messages up" pattern:
//!
//! - [`smiley`] - face renderer (eyes + mouth arch)
//! - [`track`] - progress-bar renderer and gesture surface
//! - [`pager`] - paged title strip renderer and swipe surface
//! - [`arch`] - the arch curve shared by the mouth and the handle glyph
//! - [`fonts`] - Roboto loading and load-status tracking
//! - [`icons`] - embedded SVG icons
//! - [`styles`] - centralized widget styles
//! - [`design_tokens`] - design system constants

pub mod arch;
pub mod design_tokens;
pub mod fonts;
pub mod icons;
pub mod pager;
pub mod smiley;
pub mod styles;
pub mod track;
