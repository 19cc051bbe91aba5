// SPDX-License-Identifier: MPL-2.0
//! Frame-driven animation primitives.
//!
//! - [`interpolate`] - clamped 3-point piecewise-linear mappings; every
//!   animated visual property is one of these over the shared coordinate
//! - [`spring`] - the interruptible spring that settles the handle and the
//!   pager after a gesture ends

pub mod interpolate;
pub mod spring;
