//! Field orchestrator: owns the animators, recomputes repulsion when a
//! leg completes, and derives each particle's next target pose.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use crate::components::pose::ParticleState;
use crate::core::math::cap_magnitude;
use crate::core::rng::Rng;
use crate::systems::animator::Animator;

/// Tuning constants for a field. The defaults reproduce the classic
/// ambient pentagon background.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Number of particles. Fixed at construction; index-stable for
    /// the field's lifetime.
    pub particle_count: usize,
    /// Converts the raw net force into a per-leg displacement.
    pub force_scale: f32,
    /// Largest displacement a single leg may cover, applied after
    /// scaling. Bounds the kick when two particles nearly coincide.
    pub max_step: f32,
    /// Uniform per-component jitter added to the displacement, so the
    /// motion never locks into a deterministic equilibrium.
    pub position_jitter: f32,
    /// Largest angle change per leg, radians.
    pub angle_jitter: f32,
    /// Valid radius interval.
    pub radius_range: (f32, f32),
    /// Largest radius change per leg.
    pub radius_jitter: f32,
    /// Valid opacity interval.
    pub opacity_range: (f32, f32),
    /// Largest opacity change per leg.
    pub opacity_jitter: f32,
    /// Leg duration interval, seconds.
    pub duration_range: (f32, f32),
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: 10,
            force_scale: 0.05,
            max_step: 0.3,
            position_jitter: 0.2,
            angle_jitter: 1.0,
            radius_range: (0.15, 0.20),
            radius_jitter: 0.1,
            opacity_range: (0.0, 0.25),
            opacity_jitter: 0.05,
            duration_range: (60.0, 90.0),
        }
    }
}

impl FieldConfig {
    /// Parse a config from a JSON string. Missing fields keep their
    /// defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// A fixed-size collection of independently animated particles that
/// repel one another and the frame edges. All cross-particle reads go
/// through pose snapshots; animators never alias each other.
pub struct Field {
    animators: Vec<Animator>,
    config: FieldConfig,
    rng: Rng,
    /// Scratch poses reused across advance passes.
    snapshot: Vec<ParticleState>,
}

impl Field {
    /// Build a field of `config.particle_count` scattered particles.
    /// Every animator starts on a zero-duration leg, so the first
    /// `advance` call hands out the first real legs.
    pub fn new(config: FieldConfig, seed: u64) -> Self {
        let mut rng = Rng::new(seed);
        let animators: Vec<Animator> = (0..config.particle_count)
            .map(|_| Animator::new(scatter(&config, &mut rng)))
            .collect();
        log::debug!(
            "field: {} particles, seed {}",
            config.particle_count,
            seed
        );
        Field {
            snapshot: Vec::with_capacity(animators.len()),
            animators,
            config,
            rng,
        }
    }

    /// Interpolated pose of every particle at `now`, in stable index
    /// order. Read-only; animator state is untouched.
    pub fn tick(&self, now: f64) -> Vec<ParticleState> {
        self.animators.iter().map(|a| a.frame(now)).collect()
    }

    /// `tick` into a caller-owned buffer, for hosts that sample every
    /// rendered frame and care about allocations.
    pub fn tick_into(&self, now: f64, out: &mut Vec<ParticleState>) {
        out.clear();
        out.extend(self.animators.iter().map(|a| a.frame(now)));
    }

    /// Hand a fresh leg to every animator whose leg has completed.
    ///
    /// All forces in one pass are computed from a single snapshot taken
    /// before any leg is replaced, so processing order cannot leak one
    /// particle's new target into another's force sum.
    pub fn advance(&mut self, now: f64) {
        if self.animators.is_empty() {
            return;
        }

        let mut snapshot = std::mem::take(&mut self.snapshot);
        snapshot.clear();
        snapshot.extend(self.animators.iter().map(|a| a.frame(now)));

        for i in 0..self.animators.len() {
            if !self.animators[i].done(now) {
                continue;
            }
            let next = self.next_target(i, &snapshot);
            let (d_min, d_max) = self.config.duration_range;
            let duration = self.rng.range(d_min, d_max);
            self.animators[i].begin(now, next, duration);
            log::trace!("particle {}: new leg over {:.1}s", i, duration);
        }

        self.snapshot = snapshot;
    }

    /// Derive particle `i`'s next pose from the pass snapshot: the net
    /// repulsion becomes a bounded displacement, and angle, radius and
    /// opacity drift by a small random delta, clamped back into range.
    fn next_target(&mut self, i: usize, snapshot: &[ParticleState]) -> ParticleState {
        let current = snapshot[i];

        let mut f = current.force_from_edges();
        for (j, other) in snapshot.iter().enumerate() {
            if j != i {
                f += current.force_from(other);
            }
        }
        f *= self.config.force_scale;
        f = cap_magnitude(f, self.config.max_step);
        f += self.rng.jitter_vec2(self.config.position_jitter);

        let (r_min, r_max) = self.config.radius_range;
        let (o_min, o_max) = self.config.opacity_range;
        ParticleState {
            position: (current.position + f).clamp(Vec2::ZERO, Vec2::ONE),
            // Deliberately left unwrapped; the interpolated result wraps.
            angle: current.angle + self.rng.symmetric(self.config.angle_jitter),
            radius: (current.radius + self.rng.symmetric(self.config.radius_jitter))
                .clamp(r_min, r_max),
            opacity: (current.opacity + self.rng.symmetric(self.config.opacity_jitter))
                .clamp(o_min, o_max),
        }
    }

    /// Number of particles.
    pub fn len(&self) -> usize {
        self.animators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animators.is_empty()
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// The animator for particle `i`, for host or test inspection.
    pub fn animator(&self, i: usize) -> Option<&Animator> {
        self.animators.get(i)
    }
}

/// Random initial pose: anywhere in the unit square, any rotation,
/// any valid size, faint but never fully transparent.
fn scatter(config: &FieldConfig, rng: &mut Rng) -> ParticleState {
    let (r_min, r_max) = config.radius_range;
    let (o_min, o_max) = config.opacity_range;
    ParticleState {
        position: Vec2::new(rng.next_f32(), rng.next_f32()),
        angle: rng.next_f32() * TAU,
        radius: rng.range(r_min, r_max),
        opacity: rng.range((o_min + 0.05).min(o_max), o_max),
    }
}
