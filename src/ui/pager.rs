// SPDX-License-Identifier: MPL-2.0
//! Paged title renderer and swipe surface.
//!
//! Draws the three category titles side by side, one page each, shifted by
//! the pager offset so programmatic snaps and manual swipes both slide the
//! strip continuously. The canvas clips to its bounds, so only the current
//! page (and its neighbors mid-slide) is visible.

use crate::app::Message;
use crate::survey::RATINGS;
use crate::ui::design_tokens::{palette, sizing, typography};
use iced::widget::canvas::{self, Canvas, Frame, Geometry};
use iced::widget::text as text_widget;
use iced::widget::Action;
use iced::{alignment, mouse, Font, Length, Point, Rectangle, Renderer, Theme};

/// Swipe events published by the pager canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    SwipeStarted,
    /// Cumulative horizontal translation since the swipe started.
    SwipeMoved { translation_x: f32 },
    SwipeEnded,
}

/// Transient pointer state: the press origin in window coordinates while a
/// swipe is active.
#[derive(Debug, Clone, Copy, Default)]
pub struct Interaction {
    press_origin: Option<Point>,
}

/// Canvas program for the paged title strip.
#[derive(Debug, Clone, Copy)]
pub struct PagerStrip {
    offset: f32,
    page_width: f32,
    font: Font,
}

impl PagerStrip {
    #[must_use]
    pub fn new(offset: f32, page_width: f32, font: Font) -> Self {
        Self {
            offset,
            page_width,
            font,
        }
    }

    /// Wraps the program in a canvas widget spanning the content column.
    pub fn into_element(self) -> iced::Element<'static, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::PAGER_HEIGHT))
            .into()
    }
}

impl canvas::Program<Message> for PagerStrip {
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
                cursor.position_in(bounds)?;
                state.press_origin = cursor.position();
                Some(Action::publish(Message::Pager(Event::SwipeStarted)).and_capture())
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                let origin = state.press_origin?;
                let current = cursor.position()?;
                Some(
                    Action::publish(Message::Pager(Event::SwipeMoved {
                        translation_x: current.x - origin.x,
                    }))
                    .and_capture(),
                )
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
            | iced::Event::Mouse(mouse::Event::CursorLeft) => {
                state.press_origin.take()?;
                Some(Action::publish(Message::Pager(Event::SwipeEnded)).and_capture())
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
        let center_y = frame.height() / 2.0;

        for (index, rating) in RATINGS.iter().enumerate() {
            let center_x = bounds.width / 2.0 + index as f32 * self.page_width - self.offset;
            // Skip pages fully outside the strip.
            if center_x + self.page_width / 2.0 < 0.0
                || center_x - self.page_width / 2.0 > bounds.width
            {
                continue;
            }
            frame.fill_text(canvas::Text {
                content: rating.main_title().to_owned(),
                position: Point::new(center_x, center_y),
                color: palette::TITLE,
                size: typography::TITLE_XL.into(),
                font: self.font,
                align_x: text_widget::Alignment::Center,
                align_y: alignment::Vertical::Center,
                ..canvas::Text::default()
            });
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if state.press_origin.is_some() {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}
