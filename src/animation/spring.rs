// SPDX-License-Identifier: MPL-2.0
//! Interruptible spring used for snap transitions.
//!
//! After a gesture ends, the shared coordinate (and, independently, the
//! pager offset) settles on its target through a damped spring rather than a
//! linear tween, so re-entering the same zone never jumps: the spring always
//! starts from the current value and velocity. A new gesture may take the
//! value over at any time by dropping the spring mid-flight.
//!
//! The animation is frame-driven: the application subscribes to a periodic
//! tick only while a spring is active and advances it by the elapsed time.

/// Spring stiffness (the restoring force per unit of displacement).
const STIFFNESS: f32 = 100.0;
/// Damping coefficient.
const DAMPING: f32 = 10.0;
/// Oscillating mass.
const MASS: f32 = 1.0;

/// The spring is considered settled once both the displacement and the
/// velocity fall under these thresholds.
const REST_DISPLACEMENT: f32 = 0.01;
const REST_VELOCITY: f32 = 2.0;

/// Largest step the integrator will take in one tick. Longer frames are
/// clamped so a stalled event loop cannot destabilize the integration.
pub const MAX_STEP_SECS: f32 = 1.0 / 30.0;

/// A spring animating one value toward a fixed target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    target: f32,
    velocity: f32,
}

impl Spring {
    /// Starts a spring toward `target` from rest.
    #[must_use]
    pub fn to(target: f32) -> Self {
        Self {
            target,
            velocity: 0.0,
        }
    }

    /// Retargets the spring, keeping the current velocity so a second snap
    /// request mid-flight stays continuous.
    pub fn retarget(&mut self, target: f32) {
        self.target = target;
    }

    /// The value the spring is settling toward.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Advances the spring by `dt` seconds using semi-implicit Euler,
    /// mutating `value` in place. Returns `true` once the spring has
    /// settled (the value is then pinned exactly on the target).
    pub fn step(&mut self, value: &mut f32, dt: f32) -> bool {
        let dt = dt.clamp(0.0, MAX_STEP_SECS);
        let displacement = *value - self.target;
        let acceleration = (-STIFFNESS * displacement - DAMPING * self.velocity) / MASS;
        self.velocity += acceleration * dt;
        *value += self.velocity * dt;

        let settled =
            (*value - self.target).abs() < REST_DISPLACEMENT && self.velocity.abs() < REST_VELOCITY;
        if settled {
            *value = self.target;
        }
        settled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f32 = 1.0 / 60.0;

    fn settle(spring: &mut Spring, value: &mut f32, max_frames: usize) -> usize {
        for frame in 0..max_frames {
            if spring.step(value, FRAME) {
                return frame + 1;
            }
        }
        panic!("spring did not settle within {max_frames} frames");
    }

    #[test]
    fn converges_onto_the_target() {
        let mut value = -14.0;
        let mut spring = Spring::to(293.2);
        settle(&mut spring, &mut value, 600);
        assert_eq!(value, 293.2);
    }

    #[test]
    fn settles_within_a_couple_of_seconds() {
        let mut value = 0.0;
        let mut spring = Spring::to(150.0);
        let frames = settle(&mut spring, &mut value, 600);
        assert!(frames < 180, "took {frames} frames");
    }

    #[test]
    fn motion_is_continuous_frame_to_frame() {
        let mut value = 0.0;
        let mut spring = Spring::to(300.0);
        let mut previous = value;
        for _ in 0..120 {
            let done = spring.step(&mut value, FRAME);
            // No single frame teleports the value across the range.
            assert!((value - previous).abs() < 40.0);
            previous = value;
            if done {
                break;
            }
        }
    }

    #[test]
    fn zero_displacement_settles_immediately() {
        let mut value = 42.0;
        let mut spring = Spring::to(42.0);
        assert!(spring.step(&mut value, FRAME));
        assert_eq!(value, 42.0);
    }

    #[test]
    fn retarget_keeps_momentum() {
        let mut value = 0.0;
        let mut spring = Spring::to(100.0);
        for _ in 0..10 {
            let _ = spring.step(&mut value, FRAME);
        }
        let moving_value = value;
        spring.retarget(0.0);
        let _ = spring.step(&mut value, FRAME);
        // The first frame after retargeting continues from the in-flight
        // position instead of restarting.
        assert!((value - moving_value).abs() < 40.0);
        assert_eq!(spring.target(), 0.0);
    }

    #[test]
    fn oversized_frames_are_clamped() {
        let mut value = 0.0;
        let mut spring = Spring::to(10.0);
        // A 5 second frame must not explode the integration.
        let _ = spring.step(&mut value, 5.0);
        assert!(value.is_finite());
        assert!(value.abs() < 100.0);
    }
}
