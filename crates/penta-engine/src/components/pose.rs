//! The pose of one pentagon at an instant, plus the repulsion model
//! that keeps the field visually spread out.

use glam::Vec2;

use crate::core::math::{lerp, lerp_vec2, wrap_angle};

/// Below this separation a pairwise force is dropped entirely; an
/// inverse-square term would blow up or go NaN.
const MIN_SEPARATION: f32 = 0.001;

/// Soft margin that keeps the edge force finite on the boundary itself.
const EDGE_MARGIN: f32 = 0.01;

/// Snapshot of one particle's pose. Plain value type — copied freely,
/// never shared mutably between animators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleState {
    /// Center in unit-square coordinates, soft-clamped to [0,1]².
    pub position: Vec2,
    /// Rotation in radians. Target angles accumulate unwrapped;
    /// interpolated results are wrapped into [0, 2π).
    pub angle: f32,
    /// Size as a fraction of the short screen dimension.
    pub radius: f32,
    /// Alpha, normally within [0, 0.25].
    pub opacity: f32,
}

impl ParticleState {
    pub fn new(position: Vec2, angle: f32, radius: f32, opacity: f32) -> Self {
        ParticleState {
            position,
            angle,
            radius,
            opacity,
        }
    }

    /// Inverse-square repulsion exerted on `self` by `other`, pointing
    /// away from `other`. Returns zero inside the degenerate-proximity
    /// guard so near-coincident particles never produce NaN or a huge
    /// kick.
    pub fn force_from(&self, other: &ParticleState) -> Vec2 {
        let delta = self.position - other.position;
        let d2 = delta.length_squared();
        let distance = d2.sqrt();
        if distance < MIN_SEPARATION {
            return Vec2::ZERO;
        }
        delta / distance * (1.0 / d2)
    }

    /// Repulsion away from the four unit-square walls: two opposing
    /// inverse-square terms per axis, offset by a soft margin.
    pub fn force_from_edges(&self) -> Vec2 {
        let p = self.position;
        Vec2::new(
            1.0 / (EDGE_MARGIN + p.x).powi(2) - 1.0 / (1.0 + EDGE_MARGIN - p.x).powi(2),
            1.0 / (EDGE_MARGIN + p.y).powi(2) - 1.0 / (1.0 + EDGE_MARGIN - p.y).powi(2),
        )
    }

    /// The pose `t` of the way from `self` to `other`, `t` in [0, 1].
    /// Position, radius and opacity interpolate componentwise; the
    /// angle interpolates over the unwrapped endpoints and only the
    /// result is wrapped.
    pub fn lerp(&self, other: &ParticleState, t: f32) -> ParticleState {
        ParticleState {
            position: lerp_vec2(self.position, other.position, t),
            angle: wrap_angle(lerp(self.angle, other.angle, t)),
            radius: lerp(self.radius, other.radius, t),
            opacity: lerp(self.opacity, other.opacity, t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::TAU;

    fn pose_at(x: f32, y: f32) -> ParticleState {
        ParticleState::new(Vec2::new(x, y), 0.0, 0.17, 0.1)
    }

    #[test]
    fn force_is_zero_for_coincident_particles() {
        let a = pose_at(0.4, 0.4);
        let b = pose_at(0.4, 0.4);
        assert_eq!(a.force_from(&b), Vec2::ZERO);

        // Just inside the guard distance as well
        let c = pose_at(0.4 + 0.0005, 0.4);
        assert_eq!(c.force_from(&b), Vec2::ZERO);
    }

    #[test]
    fn force_never_produces_nan() {
        let a = pose_at(0.0, 0.0);
        let b = pose_at(0.0, 0.0);
        let f = a.force_from(&b) + a.force_from_edges();
        assert!(f.x.is_finite() && f.y.is_finite());
    }

    #[test]
    fn force_repels_along_the_separating_axis() {
        let left = pose_at(0.1, 0.5);
        let right = pose_at(0.9, 0.5);

        // Distance 0.8 → magnitude 1/0.64 = 1.5625, x-axis only.
        let on_left = left.force_from(&right);
        assert!((on_left.x + 1.5625).abs() < 1e-3, "got {}", on_left.x);
        assert!(on_left.y.abs() < 1e-6);

        let on_right = right.force_from(&left);
        assert!((on_right.x - 1.5625).abs() < 1e-3);
        assert!(on_right.y.abs() < 1e-6);
    }

    #[test]
    fn edge_force_cancels_at_the_center() {
        let f = pose_at(0.5, 0.5).force_from_edges();
        assert!(f.length() < 1e-4, "got {:?}", f);
    }

    #[test]
    fn edge_force_grows_toward_a_wall() {
        let far = pose_at(0.1, 0.5).force_from_edges();
        let near = pose_at(0.01, 0.5).force_from_edges();
        assert!(far.x > 0.0);
        assert!(near.x > far.x);
        assert!(near.x > 100.0, "got {}", near.x);
        // On the wall itself the margin keeps it finite.
        let on_wall = pose_at(0.0, 0.5).force_from_edges();
        assert!(on_wall.x.is_finite());
    }

    #[test]
    fn lerp_hits_both_endpoints() {
        let a = ParticleState::new(Vec2::new(0.2, 0.3), 1.0, 0.15, 0.05);
        let b = ParticleState::new(Vec2::new(0.8, 0.6), 2.5, 0.20, 0.25);

        let start = a.lerp(&b, 0.0);
        assert!((start.position - a.position).length() < 1e-6);
        assert!((start.angle - a.angle).abs() < 1e-6);
        assert!((start.radius - a.radius).abs() < 1e-6);
        assert!((start.opacity - a.opacity).abs() < 1e-6);

        let end = a.lerp(&b, 1.0);
        assert!((end.position - b.position).length() < 1e-6);
        assert!((end.angle - b.angle).abs() < 1e-6);
        assert!((end.radius - b.radius).abs() < 1e-6);
        assert!((end.opacity - b.opacity).abs() < 1e-6);
    }

    #[test]
    fn lerp_wraps_only_the_result_angle() {
        // The target angle is allowed to sit past 2π; interpolation runs
        // on the raw endpoints and the output comes back wrapped.
        let a = ParticleState::new(Vec2::ZERO, 6.0, 0.15, 0.1);
        let b = ParticleState::new(Vec2::ZERO, 7.0, 0.15, 0.1);

        let end = a.lerp(&b, 1.0);
        assert!((end.angle - (7.0 - TAU)).abs() < 1e-5, "got {}", end.angle);

        let mid = a.lerp(&b, 0.5);
        assert!((mid.angle - (6.5 - TAU)).abs() < 1e-5, "got {}", mid.angle);
        assert!(mid.angle >= 0.0 && mid.angle < TAU);
    }
}
