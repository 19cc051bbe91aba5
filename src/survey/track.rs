// SPDX-License-Identifier: MPL-2.0
//! Track geometry and drag-to-selection state.
//!
//! The draggable handle lives on a horizontal track split into three zones.
//! A single continuous coordinate (`translate_x`, the handle's left edge
//! relative to the track's left edge) is shared by every animated property
//! on the screen; this module owns the math that derives a discrete
//! [`Rating`] from it and the snap target it settles on.

use super::Rating;

/// Horizontal screen padding around the content column, in logical pixels.
pub const SCREEN_PADDING_HORIZONTAL: f32 = 36.0;
/// Vertical screen padding around the content column.
pub const SCREEN_PADDING_VERTICAL: f32 = 24.0;
/// Diameter of the draggable handle.
pub const HANDLE_SIZE: f32 = 32.0;

/// Fixed geometry of the track, derived once from the window width.
///
/// The zone boundaries are intentionally *not* corrected by the label-width
/// offsets that the snap targets carry; releases compare the raw coordinate
/// against `width/6` and `2*width/3`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackLayout {
    width: f32,
    snap: [f32; 3],
    first_boundary: f32,
    second_boundary: f32,
}

impl TrackLayout {
    /// Derives the track geometry from the window width.
    #[must_use]
    pub fn from_window_width(window_width: f32) -> Self {
        let width = (window_width - SCREEN_PADDING_HORIZONTAL * 2.0) * 0.9;
        Self::from_track_width(width)
    }

    /// Derives the geometry from the track line width itself.
    #[must_use]
    pub fn from_track_width(width: f32) -> Self {
        let section = width / 3.0;
        Self {
            width,
            snap: [-14.0, width / 2.0 - 21.0, width - 20.0],
            first_boundary: section / 2.0,
            second_boundary: section * 2.0,
        }
    }

    /// Width of the track line.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Lower clamp bound for the shared coordinate.
    #[must_use]
    pub fn min_x(&self) -> f32 {
        -12.0
    }

    /// Upper clamp bound for the shared coordinate.
    #[must_use]
    pub fn max_x(&self) -> f32 {
        self.width - 20.0
    }

    /// Initial handle position when the screen mounts.
    #[must_use]
    pub fn initial_x(&self) -> f32 {
        self.min_x()
    }

    /// The three snap positions, in track order. They double as the input
    /// domain of every interpolated visual property.
    #[must_use]
    pub fn snap_positions(&self) -> [f32; 3] {
        self.snap
    }

    /// Snap target for a rating.
    #[must_use]
    pub fn snap_x(&self, rating: Rating) -> f32 {
        self.snap[rating.index()]
    }

    /// Clamps a candidate coordinate to the draggable range.
    #[must_use]
    pub fn clamp(&self, x: f32) -> f32 {
        x.clamp(self.min_x(), self.max_x())
    }

    /// Zone lookup for a coordinate. Boundary values belong to the zone on
    /// their left (`<=` comparisons), so the three zones partition the range
    /// with no gap or overlap and every zone is reachable.
    #[must_use]
    pub fn zone_for(&self, x: f32) -> Rating {
        if x <= self.first_boundary {
            Rating::Bad
        } else if x <= self.second_boundary {
            Rating::NotBad
        } else {
            Rating::Good
        }
    }
}

/// Gesture state for the drag-to-selection controller.
///
/// The drag origin is an explicit record rather than closure state: it is
/// captured at gesture start and read on every move, so a move is always
/// `clamp(origin + translation)` no matter how the events interleave.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragController {
    origin: Option<f32>,
}

impl DragController {
    /// Begins a gesture, capturing the current shared coordinate.
    pub fn start(&mut self, current_x: f32) {
        self.origin = Some(current_x);
    }

    /// Applies the cumulative horizontal translation of the active gesture.
    /// Returns the new clamped coordinate, or `None` when no gesture is
    /// active (stale move events are ignored).
    #[must_use]
    pub fn translate(&self, layout: &TrackLayout, translation_x: f32) -> Option<f32> {
        self.origin
            .map(|origin| layout.clamp(origin + translation_x))
    }

    /// Ends the gesture and resolves the zone the handle was released in.
    /// Returns `None` when no gesture was active.
    pub fn release(&mut self, layout: &TrackLayout, current_x: f32) -> Option<Rating> {
        self.origin.take().map(|_| layout.zone_for(current_x))
    }

    /// Whether a gesture currently owns the shared coordinate.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.origin.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> TrackLayout {
        // 420px window: track width (420 - 72) * 0.9 = 313.2
        TrackLayout::from_window_width(420.0)
    }

    #[test]
    fn geometry_is_derived_from_window_width() {
        let l = layout();
        assert!((l.width() - 313.2).abs() < 1e-3);
        assert_eq!(l.min_x(), -12.0);
        assert!((l.max_x() - 293.2).abs() < 1e-3);
        let snap = l.snap_positions();
        assert_eq!(snap[0], -14.0);
        assert!((snap[1] - (313.2 / 2.0 - 21.0)).abs() < 1e-3);
        assert!((snap[2] - 293.2).abs() < 1e-3);
    }

    #[test]
    fn zones_partition_the_whole_range() {
        let l = layout();
        let mut x = l.min_x();
        let mut last = l.zone_for(x);
        assert_eq!(last, Rating::Bad);
        // Sweep the range; the zone must be defined everywhere and only ever
        // advance forward (no gaps, no overlaps, no back-tracking).
        while x <= l.max_x() {
            let zone = l.zone_for(x);
            assert!(zone.index() >= last.index());
            assert!(zone.index() - last.index() <= 1);
            last = zone;
            x += 0.25;
        }
        assert_eq!(l.zone_for(l.max_x()), Rating::Good);
    }

    #[test]
    fn boundary_values_belong_to_the_left_zone() {
        let l = layout();
        let first = l.width() / 6.0;
        let second = l.width() * 2.0 / 3.0;
        assert_eq!(l.zone_for(first), Rating::Bad);
        assert_eq!(l.zone_for(first + 0.001), Rating::NotBad);
        assert_eq!(l.zone_for(second), Rating::NotBad);
        assert_eq!(l.zone_for(second + 0.001), Rating::Good);
    }

    #[test]
    fn release_extremes_and_midpoint_pick_the_expected_zones() {
        let l = layout();
        assert_eq!(l.zone_for(l.min_x()), Rating::Bad);
        assert_eq!(l.zone_for((l.min_x() + l.max_x()) / 2.0), Rating::NotBad);
        assert_eq!(l.zone_for(l.max_x()), Rating::Good);
    }

    #[test]
    fn each_snap_position_lies_in_its_own_zone() {
        let l = layout();
        for rating in crate::survey::RATINGS {
            assert_eq!(l.zone_for(l.snap_x(rating)), rating);
        }
    }

    #[test]
    fn clamp_saturates_out_of_range_drags() {
        let l = layout();
        assert_eq!(l.clamp(-10_000.0), l.min_x());
        assert_eq!(l.clamp(10_000.0), l.max_x());
        assert_eq!(l.clamp(50.0), 50.0);
    }

    #[test]
    fn drag_adds_translation_to_the_captured_origin() {
        let l = layout();
        let mut drag = DragController::default();
        drag.start(40.0);
        assert_eq!(drag.translate(&l, 10.0), Some(50.0));
        assert_eq!(drag.translate(&l, -10.0), Some(30.0));
        // Clamped at both ends.
        assert_eq!(drag.translate(&l, -10_000.0), Some(l.min_x()));
        assert_eq!(drag.translate(&l, 10_000.0), Some(l.max_x()));
    }

    #[test]
    fn moves_without_an_active_gesture_are_ignored() {
        let l = layout();
        let mut drag = DragController::default();
        assert_eq!(drag.translate(&l, 25.0), None);
        assert_eq!(drag.release(&l, 25.0), None);
    }

    #[test]
    fn release_resolves_the_zone_and_clears_the_origin() {
        let l = layout();
        let mut drag = DragController::default();
        drag.start(0.0);
        assert!(drag.is_dragging());
        let rating = drag.release(&l, l.max_x());
        assert_eq!(rating, Some(Rating::Good));
        assert!(!drag.is_dragging());
    }
}
