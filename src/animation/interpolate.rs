// SPDX-License-Identifier: MPL-2.0
//! Clamped 3-point piecewise-linear interpolation.
//!
//! Every animated property on the survey screen (background color, label
//! colors, eye scale/offset/width/height, arch control point) is the same
//! mapping: a 3-point input domain (the snap positions) to a 3-point output
//! range, linear between breakpoints and saturating at both ends. Inputs
//! outside the domain never extrapolate.

use iced::Color;

/// Piecewise-linear mapping over three breakpoints, clamped at both ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interpolation3 {
    domain: [f32; 3],
    range: [f32; 3],
}

impl Interpolation3 {
    /// Creates a mapping. The domain must be strictly increasing.
    #[must_use]
    pub fn new(domain: [f32; 3], range: [f32; 3]) -> Self {
        debug_assert!(domain[0] < domain[1] && domain[1] < domain[2]);
        Self { domain, range }
    }

    /// Samples the mapping at `x`, saturating outside the domain. Each
    /// breakpoint maps to its range value exactly, never through the lerp.
    #[must_use]
    pub fn sample(&self, x: f32) -> f32 {
        let [d0, d1, d2] = self.domain;
        let [r0, r1, r2] = self.range;
        if x <= d0 {
            r0
        } else if x == d1 {
            r1
        } else if x < d1 {
            lerp(r0, r1, (x - d0) / (d1 - d0))
        } else if x < d2 {
            lerp(r1, r2, (x - d1) / (d2 - d1))
        } else {
            r2
        }
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Three-stop color ramp sharing the interpolation domain, blended
/// componentwise in RGB space (alpha included).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorRamp3 {
    domain: [f32; 3],
    stops: [Color; 3],
}

impl ColorRamp3 {
    /// Creates a ramp. The domain must be strictly increasing.
    #[must_use]
    pub fn new(domain: [f32; 3], stops: [Color; 3]) -> Self {
        debug_assert!(domain[0] < domain[1] && domain[1] < domain[2]);
        Self { domain, stops }
    }

    /// Samples the ramp at `x`, saturating outside the domain.
    #[must_use]
    pub fn sample(&self, x: f32) -> Color {
        let channel = |select: fn(&Color) -> f32| {
            Interpolation3::new(
                self.domain,
                [
                    select(&self.stops[0]),
                    select(&self.stops[1]),
                    select(&self.stops[2]),
                ],
            )
            .sample(x)
        };

        Color {
            r: channel(|c| c.r),
            g: channel(|c| c.g),
            b: channel(|c| c.b),
            a: channel(|c| c.a),
        }
    }
}
