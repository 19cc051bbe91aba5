// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the survey screen.
//!
//! - **Palette**: base colors
//! - **Spacing**: spacing scale
//! - **Sizing**: component sizes (track, handle, eyes, pager)
//! - **Typography**: font size scale
//! - **Radius**: border radii

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    /// Dot/track fill and the resting label color.
    pub const LIGHT_GRAY: Color = Color::from_rgb(0.961, 0.961, 0.961); // #f5f5f5
    /// Handle fill and the active label color.
    pub const DARK_GRAY: Color = Color::from_rgb(0.2, 0.2, 0.2); // #333333

    /// Large pager titles (#333333 at 80% opacity).
    pub const TITLE: Color = Color {
        r: 0.2,
        g: 0.2,
        b: 0.2,
        a: 0.8,
    };
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    /// Horizontal screen padding around the content column.
    pub const SCREEN_H: f32 = crate::survey::track::SCREEN_PADDING_HORIZONTAL;
    /// Vertical screen padding around the content column.
    pub const SCREEN_V: f32 = crate::survey::track::SCREEN_PADDING_VERTICAL;
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    /// Diameter of the circular header icon buttons.
    pub const ICON_BUTTON: f32 = 40.0;
    /// Edge length of a header icon glyph.
    pub const ICON: f32 = 24.0;
    /// Edge length of the submit-arrow glyph.
    pub const ICON_SM: f32 = 20.0;

    /// Height of the smiley-face canvas.
    pub const SMILEY_AREA_HEIGHT: f32 = 275.0;
    /// Resting eye diameter; width/height/scale interpolate from here.
    pub const EYE: f32 = 50.0;
    /// Edge length of the large mouth arch viewbox.
    pub const MOUTH_ARCH: f32 = 100.0;
    /// Stroke width of the large mouth arch.
    pub const MOUTH_STROKE: f32 = 4.0;

    /// Height of the progress-line capsule.
    pub const TRACK_LINE_HEIGHT: f32 = 8.0;
    /// Diameter of a zone dot on the track.
    pub const TRACK_DOT: f32 = 16.0;
    /// Diameter of the draggable handle.
    pub const HANDLE: f32 = crate::survey::track::HANDLE_SIZE;
    /// Stroke width of the miniature arch on the handle.
    pub const HANDLE_ARCH_STROKE: f32 = 2.0;
    /// Height of the whole track canvas (line, handle, dots, labels).
    pub const TRACK_AREA_HEIGHT: f32 = 72.0;

    /// Height of the pager canvas.
    pub const PAGER_HEIGHT: f32 = 56.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Large pager titles.
    pub const TITLE_XL: f32 = 40.0;
    /// Screen heading.
    pub const HEADING: f32 = 20.0;
    /// Body copy and the text input.
    pub const BODY: f32 = 16.0;
    /// Small labels under the track dots.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Radii
// ============================================================================

pub mod radius {
    /// Feedback bar and submit button pill.
    pub const PILL: f32 = 30.0;
    /// Progress line capsule.
    pub const TRACK: f32 = 10.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grays_match_the_screen_palette() {
        // #f5f5f5 and #333333, within 8-bit rounding.
        assert!((palette::LIGHT_GRAY.r - 245.0 / 255.0).abs() < 0.005);
        assert!((palette::DARK_GRAY.r - 51.0 / 255.0).abs() < 0.005);
    }

    #[test]
    fn handle_sizing_is_consistent_with_the_track_module() {
        assert_eq!(sizing::HANDLE, 32.0);
        assert_eq!(spacing::SCREEN_H, 36.0);
    }
}
