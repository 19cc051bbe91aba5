// SPDX-License-Identifier: MPL-2.0
//! Roboto font loading and load-status tracking.
//!
//! The screen renders nothing until every font file either registered with
//! the renderer or failed to load; after a failure it degrades to the
//! platform default font instead of staying blank. Failures are logged,
//! never surfaced in the UI.

use crate::error::{Error, Result};
use iced::font::{self, Weight};
use iced::{Font, Task};
use std::fs;
use std::path::Path;

/// Family name shared by the three font files.
pub const FAMILY: &str = "Roboto";

/// Files expected inside the font directory.
pub const FILES: [&str; 3] = ["Roboto-Regular.ttf", "Roboto-Medium.ttf", "Roboto-Bold.ttf"];

#[must_use]
pub fn regular() -> Font {
    Font::with_name(FAMILY)
}

#[must_use]
pub fn medium() -> Font {
    Font {
        weight: Weight::Medium,
        ..Font::with_name(FAMILY)
    }
}

#[must_use]
pub fn bold() -> Font {
    Font {
        weight: Weight::Bold,
        ..Font::with_name(FAMILY)
    }
}

/// Font readiness of the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// Registration tasks are in flight; the screen stays blank.
    Loading { pending: usize },
    /// All fonts registered; render with Roboto.
    Ready,
    /// At least one font could not be read or registered; render with the
    /// platform default font.
    Degraded,
}

impl Status {
    /// Whether the view should render an empty screen.
    #[must_use]
    pub fn blocks_rendering(&self) -> bool {
        matches!(self, Status::Loading { .. })
    }

    /// Body font honoring the fallback behavior.
    #[must_use]
    pub fn body(&self) -> Font {
        match self {
            Status::Ready => regular(),
            _ => Font::default(),
        }
    }

    /// Label font (medium weight) honoring the fallback behavior.
    #[must_use]
    pub fn label(&self) -> Font {
        match self {
            Status::Ready => medium(),
            _ => Font {
                weight: Weight::Medium,
                ..Font::default()
            },
        }
    }

    /// Bold font honoring the fallback behavior.
    #[must_use]
    pub fn heading(&self) -> Font {
        match self {
            Status::Ready => bold(),
            _ => Font {
                weight: Weight::Bold,
                ..Font::default()
            },
        }
    }

    /// Records the completion of one registration task.
    pub fn register(&mut self, result: std::result::Result<(), String>) {
        if let Err(err) = &result {
            log::warn!("font registration failed: {err}");
            *self = Status::Degraded;
            return;
        }
        if let Status::Loading { pending } = self {
            *pending = pending.saturating_sub(1);
            if *pending == 0 {
                *self = Status::Ready;
            }
        }
    }
}

fn read_all(dir: &Path) -> Result<Vec<Vec<u8>>> {
    FILES
        .iter()
        .map(|name| {
            let path = dir.join(name);
            fs::read(&path).map_err(|err| Error::Font(format!("{}: {err}", path.display())))
        })
        .collect()
}

/// Reads the three Roboto files from `dir` and starts their registration
/// tasks. When any file cannot be read the status degrades immediately and
/// no task is produced.
pub fn load_all(dir: &Path) -> (Status, Task<std::result::Result<(), String>>) {
    match read_all(dir) {
        Ok(files) => {
            let pending = files.len();
            let tasks = files
                .into_iter()
                .map(|bytes| font::load(bytes).map(|r| r.map_err(|e| format!("{e:?}"))));
            (Status::Loading { pending }, Task::batch(tasks))
        }
        Err(err) => {
            log::warn!("fonts unavailable, using platform defaults: {err}");
            (Status::Degraded, Task::none())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_blocks_rendering_until_all_fonts_register() {
        let mut status = Status::Loading { pending: 3 };
        assert!(status.blocks_rendering());
        status.register(Ok(()));
        status.register(Ok(()));
        assert!(status.blocks_rendering());
        status.register(Ok(()));
        assert_eq!(status, Status::Ready);
        assert!(!status.blocks_rendering());
    }

    #[test]
    fn a_failed_registration_degrades_instead_of_blocking() {
        let mut status = Status::Loading { pending: 3 };
        status.register(Err("bad font table".into()));
        assert_eq!(status, Status::Degraded);
        assert!(!status.blocks_rendering());
        // Late successes stay degraded.
        status.register(Ok(()));
        assert_eq!(status, Status::Degraded);
    }

    #[test]
    fn degraded_status_uses_the_default_family() {
        assert_eq!(Status::Degraded.body(), Font::default());
        assert_eq!(Status::Ready.body(), regular());
    }

    #[test]
    fn missing_directory_degrades_without_tasks() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (status, _task) = load_all(&dir.path().join("nope"));
        assert_eq!(status, Status::Degraded);
    }

    #[test]
    fn partial_font_set_degrades() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("Roboto-Regular.ttf"), b"stub").expect("write");
        let (status, _task) = load_all(dir.path());
        assert_eq!(status, Status::Degraded);
    }
}
