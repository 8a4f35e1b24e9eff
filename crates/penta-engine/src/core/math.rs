// core/math.rs
//
// Pure interpolation and vector helpers — just math, no engine state.

use glam::Vec2;
use std::f32::consts::TAU;

/// Linearly interpolate between two values.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Linearly interpolate between two Vec2 values.
#[inline]
pub fn lerp_vec2(a: Vec2, b: Vec2, t: f32) -> Vec2 {
    a + (b - a) * t
}

/// Rescale `v` to length `max` if it is longer; shorter vectors pass
/// through unchanged.
#[inline]
pub fn cap_magnitude(v: Vec2, max: f32) -> Vec2 {
    let mag = v.length();
    if mag > max {
        v * (max / mag)
    } else {
        v
    }
}

/// Wrap an angle into [0, 2π) by repeated ±2π adjustment.
/// Angle deltas per leg are small, so at most a couple of iterations
/// ever run; stepwise adjustment instead of a modulo keeps the float
/// rounding identical to the stepwise wrap the animation expects.
#[inline]
pub fn wrap_angle(mut angle: f32) -> f32 {
    while angle < 0.0 {
        angle += TAU;
    }
    while angle >= TAU {
        angle -= TAU;
    }
    angle
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(2.0, 5.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 5.0, 1.0), 5.0);
        assert!((lerp(2.0, 5.0, 0.5) - 3.5).abs() < 1e-6);
    }

    #[test]
    fn lerp_vec2_midpoint() {
        let mid = lerp_vec2(Vec2::ZERO, Vec2::new(1.0, 2.0), 0.5);
        assert!((mid - Vec2::new(0.5, 1.0)).length() < 1e-6);
    }

    #[test]
    fn cap_magnitude_shrinks_long_vectors() {
        let v = cap_magnitude(Vec2::new(3.0, 4.0), 1.0);
        assert!((v.length() - 1.0).abs() < 1e-5);
        // Direction is preserved
        assert!((v.x / v.y - 0.75).abs() < 1e-5);
    }

    #[test]
    fn cap_magnitude_leaves_short_vectors() {
        let v = Vec2::new(0.1, 0.2);
        assert_eq!(cap_magnitude(v, 1.0), v);
    }

    #[test]
    fn wrap_angle_into_range() {
        assert!((wrap_angle(-PI) - PI).abs() < 1e-5);
        assert!((wrap_angle(TAU + 0.5) - 0.5).abs() < 1e-5);
        assert_eq!(wrap_angle(0.0), 0.0);
        assert_eq!(wrap_angle(TAU), 0.0);
    }

    #[test]
    fn wrap_angle_handles_multiple_turns() {
        let a = wrap_angle(-3.0 * TAU - 1.0);
        assert!(a >= 0.0 && a < TAU);
        assert!((a - (TAU - 1.0)).abs() < 1e-4);
    }
}
