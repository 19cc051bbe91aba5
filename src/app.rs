// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the survey screen.
//!
//! The `App` struct owns the one piece of state everything hangs off: the
//! shared drag coordinate. Gestures, taps, the snap spring, the pager and
//! every interpolated visual all read or write it through the single update
//! loop, so same-frame races cannot happen and last-write-wins ordering is
//! structural rather than accidental.

use crate::animation::interpolate::ColorRamp3;
use crate::animation::spring::Spring;
use crate::config::Config;
use crate::submission::{Feedback, FeedbackSink, LogSink};
use crate::survey::pager::PagerState;
use crate::survey::track::{DragController, TrackLayout};
use crate::survey::Rating;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::pager::PagerStrip;
use crate::ui::smiley::SmileyFace;
use crate::ui::track::TrackBar;
use crate::ui::{fonts, icons, styles};
use iced::event;
use iced::keyboard;
use iced::time::{self, Instant};
use iced::widget::{button, container, operation, text, text_input, Column, Id, Row, Space, Text};
use iced::{alignment, window, Element, Length, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Id of the feedback text input, used to request OS focus when the
/// compose mode opens.
const FEEDBACK_INPUT_ID: &str = "feedback-input";

const TITLE: &str = "How was your shopping\nexperience?";

/// Root application state.
pub struct App {
    layout: TrackLayout,
    /// The shared drag coordinate every renderer interpolates over.
    translate_x: f32,
    drag: DragController,
    /// In-flight snap spring, if any. A new gesture drops it mid-flight.
    snap: Option<Spring>,
    pager: PagerState,
    /// Last snapped selection; what Submit reports.
    selected: Rating,
    /// Desktop analog of the platform keyboard-visibility flag.
    keyboard_visible: bool,
    feedback_text: String,
    fonts: fonts::Status,
    sink: Box<dyn FeedbackSink>,
    last_tick: Option<Instant>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("translate_x", &self.translate_x)
            .field("selected", &self.selected)
            .field("keyboard_visible", &self.keyboard_visible)
            .finish()
    }
}

/// Top-level messages consumed by [`App::update`].
#[derive(Debug, Clone)]
pub enum Message {
    /// One font registration task finished.
    FontLoaded(Result<(), String>),
    /// Gesture event from the track canvas.
    Track(crate::ui::track::Event),
    /// Swipe event from the pager canvas.
    Pager(crate::ui::pager::Event),
    /// Animation frame while a spring is in flight.
    Tick(Instant),
    /// The collapsed feedback bar was pressed; open compose mode.
    FeedbackFocusRequested,
    FeedbackChanged(String),
    /// Escape (or submit) closed compose mode.
    FeedbackDismissed,
    SubmitPressed,
    ClosePressed,
    InfoPressed,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Alternate `settings.toml` path.
    pub config: Option<PathBuf>,
    /// Alternate directory containing the Roboto font files.
    pub font_dir: Option<PathBuf>,
}

/// Builds the window settings. The window is phone-shaped and fixed-size:
/// the track geometry is derived once from this width.
pub fn window_settings(config: &Config) -> window::Settings {
    window::Settings {
        size: Size::new(config.window_width(), config.window_height()),
        resizable: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    let config = match &flags.config {
        Some(path) => crate::config::load_from_path(path),
        None => crate::config::load(),
    }
    .unwrap_or_else(|err| {
        log::warn!("using default config: {err}");
        Config::default()
    });

    let font_dir = flags.font_dir.unwrap_or_else(|| config.font_dir());
    let settings = window_settings(&config);

    // Wrap the startup state in RefCell<Option<_>> to satisfy the Fn trait
    // requirement while only consuming it once (iced 0.14 requires Fn,
    // not FnOnce)
    let boot_state = RefCell::new(Some((config, font_dir)));
    let boot = move || {
        let (config, font_dir) = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(&config, &font_dir)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(settings)
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let config = Config::default();
        let layout = TrackLayout::from_window_width(config.window_width());
        Self {
            layout,
            translate_x: layout.initial_x(),
            drag: DragController::default(),
            snap: None,
            pager: PagerState::new(Self::page_width(&config)),
            selected: Rating::Bad,
            keyboard_visible: false,
            feedback_text: String::new(),
            fonts: fonts::Status::Degraded,
            sink: Box::new(LogSink),
            last_tick: None,
        }
    }
}

impl App {
    /// Width of one pager page: the content column inside the screen padding.
    fn page_width(config: &Config) -> f32 {
        config.window_width() - spacing::SCREEN_H * 2.0
    }

    fn new(config: &Config, font_dir: &std::path::Path) -> (Self, Task<Message>) {
        let (font_status, font_task) = fonts::load_all(font_dir);
        let layout = TrackLayout::from_window_width(config.window_width());
        let app = Self {
            layout,
            translate_x: layout.initial_x(),
            pager: PagerState::new(Self::page_width(config)),
            fonts: font_status,
            ..Self::default()
        };
        (app, font_task.map(Message::FontLoaded))
    }

    fn title(&self) -> String {
        String::from("Moodslide")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    /// Replaces the form-submission collaborator.
    pub fn set_sink(&mut self, sink: Box<dyn FeedbackSink>) {
        self.sink = sink;
    }

    /// The shared drag coordinate.
    #[must_use]
    pub fn position(&self) -> f32 {
        self.translate_x
    }

    /// Last snapped selection.
    #[must_use]
    pub fn selected(&self) -> Rating {
        self.selected
    }

    /// Page the pager is on (or animating toward).
    #[must_use]
    pub fn pager_index(&self) -> usize {
        self.pager.current_index()
    }

    /// Whether compose mode is hiding the pager and the track.
    #[must_use]
    pub fn keyboard_visible(&self) -> bool {
        self.keyboard_visible
    }

    /// Whether any spring (snap or pager) is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.snap.is_some() || self.pager.is_animating()
    }

    /// Drives every spring to rest, as the tick subscription would.
    pub fn settle_animations(&mut self) {
        let frame = std::time::Duration::from_micros(16_667);
        let mut now = Instant::now();
        for _ in 0..1_000 {
            if !self.is_animating() {
                return;
            }
            now += frame;
            let _ = self.update(Message::Tick(now));
        }
    }

    fn background_ramp(&self) -> ColorRamp3 {
        ColorRamp3::new(
            self.layout.snap_positions(),
            [
                Rating::Bad.color(),
                Rating::NotBad.color(),
                Rating::Good.color(),
            ],
        )
    }

    /// Snap decision shared by drag release and dot taps: spring the
    /// coordinate toward the zone's target and scroll the pager along.
    fn select(&mut self, rating: Rating) {
        self.selected = rating;
        let target = self.layout.snap_x(rating);
        log::debug!("selected {:?}, snapping to {target}", rating);
        match &mut self.snap {
            Some(spring) => spring.retarget(target),
            None => {
                if (self.translate_x - target).abs() > f32::EPSILON {
                    self.snap = Some(Spring::to(target));
                }
            }
        }
        self.pager.scroll_to_index(rating.index());
    }

    fn subscription(&self) -> Subscription<Message> {
        // The frame tick runs only while a spring is in flight; the
        // subscription disappears as soon as everything is settled.
        let tick = if self.is_animating() {
            time::every(std::time::Duration::from_millis(16)).map(Message::Tick)
        } else {
            Subscription::none()
        };

        // Escape dismisses compose mode, like the platform back/hide
        // keyboard gesture. Installed only while the editor is open.
        let escape = if self.keyboard_visible {
            event::listen_with(|event, _status, _window| match event {
                iced::Event::Keyboard(keyboard::Event::KeyPressed {
                    key: keyboard::Key::Named(keyboard::key::Named::Escape),
                    ..
                }) => Some(Message::FeedbackDismissed),
                _ => None,
            })
        } else {
            Subscription::none()
        };

        Subscription::batch([tick, escape])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::FontLoaded(result) => {
                self.fonts.register(result);
                Task::none()
            }
            Message::Track(event) => self.update_track(event),
            Message::Pager(event) => {
                self.update_pager(event);
                Task::none()
            }
            Message::Tick(now) => {
                self.tick(now);
                Task::none()
            }
            Message::FeedbackFocusRequested => {
                self.keyboard_visible = true;
                operation::focus(Id::new(FEEDBACK_INPUT_ID))
            }
            Message::FeedbackChanged(value) => {
                self.feedback_text = value;
                Task::none()
            }
            Message::FeedbackDismissed => {
                self.keyboard_visible = false;
                Task::none()
            }
            Message::SubmitPressed => {
                self.sink.submit(Feedback {
                    category_id: self.selected.id().to_owned(),
                    text: std::mem::take(&mut self.feedback_text),
                });
                self.keyboard_visible = false;
                Task::none()
            }
            Message::ClosePressed => iced::exit(),
            Message::InfoPressed => Task::none(),
        }
    }

    fn update_track(&mut self, event: crate::ui::track::Event) -> Task<Message> {
        use crate::ui::track::Event;
        match event {
            Event::DragStarted => {
                // The gesture takes ownership of the coordinate at its
                // current animated value; the spring is dropped, not queued.
                self.snap = None;
                self.drag.start(self.translate_x);
            }
            Event::DragMoved { translation_x } => {
                if let Some(x) = self.drag.translate(&self.layout, translation_x) {
                    self.translate_x = x;
                }
            }
            Event::DragEnded => {
                if let Some(rating) = self.drag.release(&self.layout, self.translate_x) {
                    self.select(rating);
                }
            }
            Event::DotPressed(rating) => self.select(rating),
        }
        Task::none()
    }

    fn update_pager(&mut self, event: crate::ui::pager::Event) {
        use crate::ui::pager::Event;
        match event {
            Event::SwipeStarted => self.pager.swipe_start(),
            Event::SwipeMoved { translation_x } => self.pager.swipe_move(translation_x),
            Event::SwipeEnded => self.pager.swipe_end(),
        }
    }

    fn tick(&mut self, now: Instant) {
        let dt = match self.last_tick {
            Some(previous) => (now - previous).as_secs_f32(),
            None => 1.0 / 60.0,
        };

        if let Some(spring) = &mut self.snap {
            if spring.step(&mut self.translate_x, dt) {
                self.snap = None;
            }
        }
        self.pager.tick(dt);

        self.last_tick = self.is_animating().then_some(now);
    }

    fn view(&self) -> Element<'_, Message> {
        // The screen stays blank until the fonts resolved one way or the
        // other; a load failure falls back to the platform font.
        if self.fonts.blocks_rendering() {
            return Space::new().width(Length::Fill).height(Length::Fill).into();
        }

        let header = Row::new()
            .push(
                button(icons::header(icons::cross()))
                    .padding((sizing::ICON_BUTTON - sizing::ICON) / 2.0)
                    .style(styles::button::icon)
                    .on_press(Message::ClosePressed),
            )
            .push(Space::new().width(Length::Fill))
            .push(
                button(icons::header(icons::info()))
                    .padding((sizing::ICON_BUTTON - sizing::ICON) / 2.0)
                    .style(styles::button::icon)
                    .on_press(Message::InfoPressed),
            );

        let heading = Text::new(TITLE)
            .size(typography::HEADING)
            .font(self.fonts.heading())
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center);

        let smiley =
            SmileyFace::new(self.translate_x, self.layout.snap_positions()).into_element();

        let mut content = Column::new()
            .spacing(spacing::LG)
            .push(header)
            .push(heading)
            .push(smiley);

        if self.keyboard_visible {
            // The pager and the track disappear while composing; the
            // coordinate is untouched so they come back where they were.
            content = content.push(
                Space::new().width(Length::Fill).height(Length::Fixed(
                    sizing::PAGER_HEIGHT + sizing::TRACK_AREA_HEIGHT + spacing::LG,
                )),
            );
        } else {
            let pager = PagerStrip::new(
                self.pager.offset(),
                self.pager.page_width(),
                self.fonts.heading(),
            )
            .into_element();
            let track =
                TrackBar::new(self.layout, self.translate_x, self.fonts.label()).into_element();
            content = content.push(pager).push(track);
        }

        content = content
            .push(Space::new().width(Length::Fill).height(Length::Fill))
            .push(self.feedback_bar());

        let background = self.background_ramp().sample(self.translate_x);
        container(content)
            .padding([spacing::SCREEN_V, spacing::SCREEN_H])
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::screen(background))
            .into()
    }

    fn feedback_bar(&self) -> Element<'_, Message> {
        let input: Element<'_, Message> = if self.keyboard_visible {
            text_input("Type your feedback", &self.feedback_text)
                .id(Id::new(FEEDBACK_INPUT_ID))
                .on_input(Message::FeedbackChanged)
                .on_submit(Message::SubmitPressed)
                .size(typography::BODY)
                .font(self.fonts.body())
                .padding(spacing::MD)
                .style(styles::text_input::feedback)
                .into()
        } else {
            button(
                Text::new(if self.feedback_text.is_empty() {
                    "Type your feedback"
                } else {
                    self.feedback_text.as_str()
                })
                .size(typography::BODY)
                .font(self.fonts.body()),
            )
            .width(Length::Fill)
            .padding(spacing::MD)
            .style(styles::button::bare)
            .on_press(Message::FeedbackFocusRequested)
            .into()
        };

        let submit = button(
            Row::new()
                .spacing(spacing::XS)
                .align_y(alignment::Vertical::Center)
                .push(
                    text("Submit")
                        .size(typography::BODY)
                        .font(self.fonts.heading()),
                )
                .push(icons::sized(icons::arrow_right(), sizing::ICON_SM)),
        )
        .padding(spacing::MD)
        .style(styles::button::submit)
        .on_press(Message::SubmitPressed);

        container(
            Row::new()
                .align_y(alignment::Vertical::Center)
                .push(input)
                .push(submit),
        )
        .width(Length::Fill)
        .style(styles::container::feedback_bar)
        .into()
    }
}
