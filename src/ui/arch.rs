// SPDX-License-Identifier: MPL-2.0
//! The arch curve shared by the smiley mouth and the handle glyph.
//!
//! A single quadratic curve in a 32-unit viewbox: endpoints at (5,16) and
//! (27,16), control point at (16, cy) with cy sweeping from 6 (frown) through
//! 16 (flat) to 26 (smile) as the drag progress goes 0 -> 0.5 -> 1.

use crate::animation::interpolate::Interpolation3;
use iced::widget::canvas::{path, Path};
use iced::Point;

/// Viewbox edge length the curve constants are expressed in.
pub const VIEWBOX: f32 = 32.0;

const START_X: f32 = 5.0;
const END_X: f32 = 27.0;
const MID_X: f32 = (START_X + END_X) / 2.0;
const BASE_Y: f32 = 16.0;

/// Control-point height for a normalized drag progress in [0, 1].
#[must_use]
pub fn control_y(progress: f32) -> f32 {
    Interpolation3::new([0.0, 0.5, 1.0], [6.0, 16.0, 26.0]).sample(progress)
}

/// Builds the arch path for the given progress, scaled from the viewbox to
/// `size` and positioned with its viewbox origin at `origin`.
#[must_use]
pub fn build(origin: Point, size: f32, progress: f32) -> Path {
    let scale = size / VIEWBOX;
    let at = |x: f32, y: f32| Point::new(origin.x + x * scale, origin.y + y * scale);

    let mut builder = path::Builder::new();
    builder.move_to(at(START_X, BASE_Y));
    builder.quadratic_curve_to(at(MID_X, control_y(progress)), at(END_X, BASE_Y));
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_point_sweeps_frown_to_smile() {
        assert_eq!(control_y(0.0), 6.0);
        assert_eq!(control_y(0.5), 16.0);
        assert_eq!(control_y(1.0), 26.0);
    }

    #[test]
    fn quarter_progress_is_halfway_up_the_first_segment() {
        assert!((control_y(0.25) - 11.0).abs() < 1e-5);
    }

    #[test]
    fn control_point_saturates_outside_the_progress_range() {
        assert_eq!(control_y(-3.0), 6.0);
        assert_eq!(control_y(42.0), 26.0);
    }
}
