// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! Only ambient preferences live here (window dimensions, font directory).
//! Survey answers are never persisted.
//!
//! # Examples
//!
//! ```no_run
//! use moodslide::config::{self, Config};
//!
//! let mut config = config::load().unwrap_or_default();
//! config.window_width = Some(480.0);
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Moodslide";

/// Default window dimensions. The screen is phone-shaped and the window is
/// not resizable, because the track geometry is derived once from the width.
pub const DEFAULT_WINDOW_WIDTH: f32 = 420.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 760.0;

/// Default directory scanned for the Roboto font files.
pub const DEFAULT_FONT_DIR: &str = "assets/fonts";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub window_width: Option<f32>,
    #[serde(default)]
    pub window_height: Option<f32>,
    /// Directory containing `Roboto-{Regular,Medium,Bold}.ttf`.
    #[serde(default)]
    pub font_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: Some(DEFAULT_WINDOW_WIDTH),
            window_height: Some(DEFAULT_WINDOW_HEIGHT),
            font_dir: None,
        }
    }
}

impl Config {
    /// Effective window width, falling back to the default when unset or
    /// nonsensical. The track math needs a usable width.
    #[must_use]
    pub fn window_width(&self) -> f32 {
        match self.window_width {
            Some(w) if w.is_finite() && w >= 240.0 => w,
            _ => DEFAULT_WINDOW_WIDTH,
        }
    }

    /// Effective window height, falling back to the default when unset.
    #[must_use]
    pub fn window_height(&self) -> f32 {
        match self.window_height {
            Some(h) if h.is_finite() && h >= 400.0 => h,
            _ => DEFAULT_WINDOW_HEIGHT,
        }
    }

    /// Effective font directory.
    #[must_use]
    pub fn font_dir(&self) -> PathBuf {
        self.font_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FONT_DIR))
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        save_to_path(config, &path)?;
    }
    Ok(())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_has_phone_shaped_window() {
        let config = Config::default();
        assert_eq!(config.window_width(), DEFAULT_WINDOW_WIDTH);
        assert_eq!(config.window_height(), DEFAULT_WINDOW_HEIGHT);
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let path = dir.path().join(CONFIG_FILE);

        let config = Config {
            window_width: Some(480.0),
            window_height: Some(800.0),
            font_dir: Some(PathBuf::from("/tmp/fonts")),
        };
        save_to_path(&config, &path).expect("Failed to save config");

        let loaded = load_from_path(&path).expect("Failed to load config");
        assert_eq!(loaded.window_width(), 480.0);
        assert_eq!(loaded.window_height(), 800.0);
        assert_eq!(loaded.font_dir(), PathBuf::from("/tmp/fonts"));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "window_width = 500.0\n").expect("Failed to write config");

        let loaded = load_from_path(&path).expect("Failed to load config");
        assert_eq!(loaded.window_width(), 500.0);
        assert_eq!(loaded.window_height(), DEFAULT_WINDOW_HEIGHT);
        assert_eq!(loaded.font_dir(), PathBuf::from(DEFAULT_FONT_DIR));
    }

    #[test]
    fn unusable_width_is_rejected() {
        let config = Config {
            window_width: Some(12.0),
            ..Config::default()
        };
        assert_eq!(config.window_width(), DEFAULT_WINDOW_WIDTH);
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "window_width = [not a number").expect("Failed to write config");

        let err = load_from_path(&path).expect_err("expected parse failure");
        assert!(matches!(err, crate::error::Error::Config(_)));
    }
}
