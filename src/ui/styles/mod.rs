// SPDX-License-Identifier: MPL-2.0
//! Centralized widget styles for the survey screen.

pub mod button;
pub mod container;
pub mod text_input;
