// SPDX-License-Identifier: MPL-2.0
//! `moodslide` is a single-screen feedback survey built with the Iced GUI
//! framework.
//!
//! A handle dragged along a three-zone track drives every visual on the
//! screen: the background color, the smiley face, the zone labels and the
//! paged title list all interpolate over one shared coordinate, and a spring
//! settles the handle onto the nearest zone when the gesture ends. Optional
//! free-text feedback is handed to a pluggable submission sink; nothing is
//! persisted and nothing touches the network.

#![doc(html_root_url = "https://docs.rs/moodslide/0.1.0")]

pub mod animation;
pub mod app;
pub mod config;
pub mod error;
pub mod submission;
pub mod survey;
pub mod ui;
