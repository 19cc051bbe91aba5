// SPDX-License-Identifier: MPL-2.0
//! Progress-bar renderer and gesture surface.
//!
//! One canvas draws the track line, the three zone dots with their labels,
//! and the draggable handle carrying a miniature arch. The canvas owns only
//! the transient press state; it publishes semantic gesture events and the
//! application's update loop owns the shared coordinate.

use crate::animation::interpolate::ColorRamp3;
use crate::app::Message;
use crate::survey::track::TrackLayout;
use crate::survey::{Rating, RATINGS};
use crate::ui::arch;
use crate::ui::design_tokens::{palette, radius, sizing, typography};
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::widget::text as text_widget;
use iced::widget::Action;
use iced::{alignment, mouse, Font, Length, Point, Rectangle, Renderer, Size, Theme};

/// Gesture events published by the track canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Pointer went down on the handle.
    DragStarted,
    /// Cumulative horizontal translation since the drag started.
    DragMoved { translation_x: f32 },
    /// Pointer released (or left the window) while dragging.
    DragEnded,
    /// One of the zone dots was tapped.
    DotPressed(Rating),
}

/// Transient per-canvas pointer state: the press origin in window
/// coordinates while the handle is grabbed.
#[derive(Debug, Clone, Copy, Default)]
pub struct Interaction {
    press_origin: Option<Point>,
}

/// Canvas program for the track area.
#[derive(Debug, Clone, Copy)]
pub struct TrackBar {
    layout: TrackLayout,
    position: f32,
    font: Font,
}

/// Hit radius around the handle center.
const HANDLE_GRAB_RADIUS: f32 = sizing::HANDLE / 2.0 + 4.0;
/// Hit radius around a dot center (covers the label under it).
const DOT_TAP_RADIUS: f32 = 24.0;
/// Vertical center of the line and the handle inside the canvas.
const CENTERLINE_Y: f32 = sizing::HANDLE / 2.0;
/// Vertical center of the dot labels.
const LABEL_Y: f32 = CENTERLINE_Y + 24.0;

impl TrackBar {
    #[must_use]
    pub fn new(layout: TrackLayout, position: f32, font: Font) -> Self {
        Self {
            layout,
            position,
            font,
        }
    }

    /// Wraps the program in a canvas widget spanning the content column.
    pub fn into_element(self) -> iced::Element<'static, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::TRACK_AREA_HEIGHT))
            .into()
    }

    /// Left edge of the track line inside the canvas.
    fn origin_x(&self, bounds: &Rectangle) -> f32 {
        (bounds.width - self.layout.width()) / 2.0
    }

    /// Handle center for the current coordinate.
    fn handle_center(&self, bounds: &Rectangle) -> Point {
        Point::new(
            self.origin_x(bounds) + self.position + sizing::HANDLE / 2.0,
            CENTERLINE_Y,
        )
    }

    /// Dot center for a zone. The outer dots sit nudged slightly past the
    /// line ends so they read as endpoints rather than stops on the line.
    fn dot_center(&self, bounds: &Rectangle, rating: Rating) -> Point {
        let ox = self.origin_x(bounds);
        let w = self.layout.width();
        let x = match rating {
            Rating::Bad => ox - 2.0,
            Rating::NotBad => ox + w / 2.0,
            Rating::Good => ox + w + 2.0,
        };
        Point::new(x, CENTERLINE_Y)
    }

    /// Label color ramp for one zone dot: dark on its own snap position,
    /// light elsewhere.
    fn label_ramp(&self, rating: Rating) -> ColorRamp3 {
        let mut stops = [palette::LIGHT_GRAY; 3];
        stops[rating.index()] = palette::DARK_GRAY;
        ColorRamp3::new(self.layout.snap_positions(), stops)
    }

    fn dot_hit(&self, bounds: &Rectangle, cursor: Point) -> Option<Rating> {
        RATINGS.into_iter().find(|rating| {
            let center = self.dot_center(bounds, *rating);
            let label = Point::new(center.x, LABEL_Y);
            distance(cursor, center) <= DOT_TAP_RADIUS || distance(cursor, label) <= DOT_TAP_RADIUS
        })
    }
}

fn distance(a: Point, b: Point) -> f32 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

impl canvas::Program<Message> for TrackBar {
    type State = Interaction;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let in_canvas = cursor.position_in(bounds)?;
                if distance(in_canvas, self.handle_center(&bounds)) <= HANDLE_GRAB_RADIUS {
                    state.press_origin = cursor.position();
                    return Some(Action::publish(Message::Track(Event::DragStarted)).and_capture());
                }
                if let Some(rating) = self.dot_hit(&bounds, in_canvas) {
                    return Some(
                        Action::publish(Message::Track(Event::DotPressed(rating))).and_capture(),
                    );
                }
                None
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                let origin = state.press_origin?;
                // Window coordinates, so the drag keeps following the
                // pointer outside the canvas bounds.
                let current = cursor.position()?;
                Some(
                    Action::publish(Message::Track(Event::DragMoved {
                        translation_x: current.x - origin.x,
                    }))
                    .and_capture(),
                )
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                state.press_origin.take()?;
                Some(Action::publish(Message::Track(Event::DragEnded)).and_capture())
            }
            iced::Event::Mouse(mouse::Event::CursorLeft) => {
                state.press_origin.take()?;
                Some(Action::publish(Message::Track(Event::DragEnded)).and_capture())
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let ox = self.origin_x(&bounds);

        // Track line.
        let line = Path::rounded_rectangle(
            Point::new(ox, CENTERLINE_Y - sizing::TRACK_LINE_HEIGHT / 2.0),
            Size::new(self.layout.width(), sizing::TRACK_LINE_HEIGHT),
            radius::TRACK.into(),
        );
        frame.fill(&line, palette::LIGHT_GRAY);

        // Zone dots with their labels.
        for rating in RATINGS {
            let center = self.dot_center(&bounds, rating);
            frame.fill(
                &Path::circle(center, sizing::TRACK_DOT / 2.0),
                palette::LIGHT_GRAY,
            );
            frame.fill_text(canvas::Text {
                content: rating.progress_title().to_owned(),
                position: Point::new(center.x, LABEL_Y),
                color: self.label_ramp(rating).sample(self.position),
                size: typography::CAPTION.into(),
                font: self.font,
                align_x: text_widget::Alignment::Center,
                align_y: alignment::Vertical::Center,
                ..canvas::Text::default()
            });
        }

        // Handle with its miniature arch.
        let handle_center = self.handle_center(&bounds);
        frame.fill(
            &Path::circle(handle_center, sizing::HANDLE / 2.0),
            palette::DARK_GRAY,
        );
        let progress = crate::animation::interpolate::Interpolation3::new(
            self.layout.snap_positions(),
            [0.0, 0.5, 1.0],
        )
        .sample(self.position);
        let glyph_origin = Point::new(
            handle_center.x - sizing::HANDLE / 2.0,
            handle_center.y - sizing::HANDLE / 2.0,
        );
        frame.stroke(
            &arch::build(glyph_origin, sizing::HANDLE, progress),
            Stroke::default()
                .with_width(sizing::HANDLE_ARCH_STROKE)
                .with_color(palette::WHITE)
                .with_line_cap(canvas::LineCap::Round),
        );

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if state.press_origin.is_some() {
            return mouse::Interaction::Grabbing;
        }
        if let Some(position) = cursor.position_in(bounds) {
            if distance(position, self.handle_center(&bounds)) <= HANDLE_GRAB_RADIUS {
                return mouse::Interaction::Grab;
            }
            if self.dot_hit(&bounds, position).is_some() {
                return mouse::Interaction::Pointer;
            }
        }
        mouse::Interaction::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar() -> TrackBar {
        TrackBar::new(
            TrackLayout::from_window_width(420.0),
            -12.0,
            Font::default(),
        )
    }

    fn bounds() -> Rectangle {
        Rectangle::new(Point::ORIGIN, Size::new(348.0, sizing::TRACK_AREA_HEIGHT))
    }

    #[test]
    fn handle_center_follows_the_coordinate() {
        let bar = bar();
        let bounds = bounds();
        let center = bar.handle_center(&bounds);
        let ox = bar.origin_x(&bounds);
        assert!((center.x - (ox - 12.0 + 16.0)).abs() < 1e-4);
        assert_eq!(center.y, CENTERLINE_Y);
    }

    #[test]
    fn dots_cover_both_ends_and_the_middle() {
        let bar = bar();
        let bounds = bounds();
        let left = bar.dot_center(&bounds, Rating::Bad).x;
        let mid = bar.dot_center(&bounds, Rating::NotBad).x;
        let right = bar.dot_center(&bounds, Rating::Good).x;
        assert!(left < mid && mid < right);
        assert!((mid - bounds.width / 2.0).abs() < 1e-3);
    }

    #[test]
    fn dot_hit_maps_to_the_nearest_zone() {
        let bar = bar();
        let bounds = bounds();
        let mid = bar.dot_center(&bounds, Rating::NotBad);
        assert_eq!(bar.dot_hit(&bounds, mid), Some(Rating::NotBad));
        let nowhere = Point::new(mid.x - 80.0, mid.y);
        assert_eq!(bar.dot_hit(&bounds, nowhere), None);
    }

    #[test]
    fn label_ramp_darkens_only_its_own_snap() {
        let bar = bar();
        let snap = bar.layout.snap_positions();
        let ramp = bar.label_ramp(Rating::NotBad);
        assert_eq!(ramp.sample(snap[1]), palette::DARK_GRAY);
        assert_eq!(ramp.sample(snap[0]), palette::LIGHT_GRAY);
        assert_eq!(ramp.sample(snap[2]), palette::LIGHT_GRAY);
    }
}
