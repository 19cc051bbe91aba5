// SPDX-License-Identifier: MPL-2.0
//! Smiley-face renderer: two animated eyes plus the mouth arch.
//!
//! Every shape parameter is a clamped 3-point interpolation over the shared
//! drag coordinate, so the face morphs continuously while the handle moves
//! and settles together with it when the spring runs.

use crate::animation::interpolate::Interpolation3;
use crate::ui::arch;
use crate::ui::design_tokens::{palette, sizing};
use iced::widget::canvas::{self, path, Canvas, Frame, Geometry, Stroke};
use iced::{mouse, Length, Point, Radians, Rectangle, Renderer, Theme, Vector};
use std::f32::consts::PI;

/// Canvas program drawing the face for the current drag coordinate.
#[derive(Debug, Clone, Copy)]
pub struct SmileyFace {
    position: f32,
    snap: [f32; 3],
}

/// Interpolated eye geometry for one drag coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EyeShape {
    /// Uniform scale applied on top of width/height.
    pub scale: f32,
    /// Horizontal offset of the outer eye, mirrored for the inner one.
    pub offset_x: f32,
    pub width: f32,
    pub height: f32,
}

impl EyeShape {
    /// Samples the four eye interpolations at `position`.
    #[must_use]
    pub fn at(position: f32, snap: [f32; 3]) -> Self {
        Self {
            scale: Interpolation3::new(snap, [1.0, 1.5, 2.5]).sample(position),
            offset_x: Interpolation3::new(snap, [10.0, 15.0, 20.0]).sample(position),
            width: Interpolation3::new(snap, [50.0, 60.0, 50.0]).sample(position),
            height: Interpolation3::new(snap, [50.0, 30.0, 50.0]).sample(position),
        }
    }

    /// Visual semi-axes after applying the scale.
    #[must_use]
    pub fn radii(&self) -> Vector {
        Vector::new(
            self.width * self.scale / 2.0,
            self.height * self.scale / 2.0,
        )
    }
}

impl SmileyFace {
    #[must_use]
    pub fn new(position: f32, snap: [f32; 3]) -> Self {
        Self { position, snap }
    }

    /// Wraps the program in a canvas widget sized for the face area.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::SMILEY_AREA_HEIGHT))
            .into()
    }

    /// Normalized drag progress in [0, 1] for the mouth arch.
    fn progress(&self) -> f32 {
        Interpolation3::new(self.snap, [0.0, 0.5, 1.0]).sample(self.position)
    }
}

impl<Message> canvas::Program<Message> for SmileyFace {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center_x = frame.width() / 2.0;

        let eye = EyeShape::at(self.position, self.snap);
        let radii = eye.radii();
        let eyes_y = sizing::SMILEY_AREA_HEIGHT * 0.35;

        // The eyes sit shoulder to shoulder around the center line and drift
        // apart as the mood improves.
        let base = sizing::EYE / 2.0;
        for side in [-1.0_f32, 1.0] {
            let eye_center = Point::new(center_x + side * (base + eye.offset_x), eyes_y);
            let mut builder = path::Builder::new();
            builder.ellipse(path::arc::Elliptical {
                center: eye_center,
                radii,
                rotation: Radians(0.0),
                start_angle: Radians(0.0),
                end_angle: Radians(2.0 * PI),
            });
            frame.fill(&builder.build(), palette::BLACK);
        }

        // Mouth arch below the eyes.
        let mouth_origin = Point::new(
            center_x - sizing::MOUTH_ARCH / 2.0,
            sizing::SMILEY_AREA_HEIGHT * 0.55,
        );
        let mouth = arch::build(mouth_origin, sizing::MOUTH_ARCH, self.progress());
        frame.stroke(
            &mouth,
            Stroke::default()
                .with_width(sizing::MOUTH_STROKE)
                .with_color(palette::BLACK)
                .with_line_cap(canvas::LineCap::Round),
        );

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNAP: [f32; 3] = [-14.0, 135.6, 293.2];

    #[test]
    fn eyes_rest_round_at_the_first_snap() {
        let eye = EyeShape::at(SNAP[0], SNAP);
        assert_eq!(eye.scale, 1.0);
        assert_eq!(eye.width, 50.0);
        assert_eq!(eye.height, 50.0);
        assert_eq!(eye.offset_x, 10.0);
    }

    #[test]
    fn eyes_squint_at_the_middle_snap() {
        let eye = EyeShape::at(SNAP[1], SNAP);
        assert_eq!(eye.scale, 1.5);
        assert_eq!(eye.width, 60.0);
        assert_eq!(eye.height, 30.0);
    }

    #[test]
    fn eyes_grow_wide_at_the_last_snap() {
        let eye = EyeShape::at(SNAP[2], SNAP);
        assert_eq!(eye.scale, 2.5);
        assert_eq!(eye.offset_x, 20.0);
        let radii = eye.radii();
        assert_eq!(radii.x, 62.5);
        assert_eq!(radii.y, 62.5);
    }

    #[test]
    fn eye_shape_saturates_beyond_the_track() {
        let before = EyeShape::at(-10_000.0, SNAP);
        let after = EyeShape::at(10_000.0, SNAP);
        assert_eq!(before, EyeShape::at(SNAP[0], SNAP));
        assert_eq!(after, EyeShape::at(SNAP[2], SNAP));
    }

    #[test]
    fn progress_follows_the_snap_domain() {
        let face = SmileyFace::new(SNAP[1], SNAP);
        assert!((face.progress() - 0.5).abs() < 1e-5);
    }
}
