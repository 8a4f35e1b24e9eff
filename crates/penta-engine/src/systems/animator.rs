//! Per-particle leg state machine: one start→end transition at a time,
//! interpolated against an injected timestamp.

use crate::components::pose::ParticleState;

/// Runs one animation leg at a time. The leg is replaced wholesale by
/// `begin`, never mutated; "done" is a derived predicate, not a state.
#[derive(Debug, Clone)]
pub struct Animator {
    start: ParticleState,
    end: ParticleState,
    /// Timestamp the current leg started at, seconds.
    start_time: f64,
    /// Leg duration, seconds.
    duration: f32,
}

impl Animator {
    /// Start with a zero-duration leg pinned at `initial`, so `done()`
    /// holds immediately and the field hands out a real leg on its
    /// first advance pass.
    pub fn new(initial: ParticleState) -> Self {
        Animator {
            start: initial,
            end: initial,
            start_time: 0.0,
            duration: 0.0,
        }
    }

    /// Retire the current leg and animate toward `next` over `seconds`.
    /// The new leg departs from the pose currently on screen — not the
    /// old literal start — so beginning early never pops visually.
    pub fn begin(&mut self, now: f64, next: ParticleState, seconds: f32) {
        self.start = self.frame(now);
        self.end = next;
        self.start_time = now;
        self.duration = seconds;
    }

    /// Whether the current leg has run its full duration.
    pub fn done(&self, now: f64) -> bool {
        (now - self.start_time) as f32 >= self.duration
    }

    /// Interpolated pose at `now`. Pure in `now` and the leg endpoints;
    /// past the duration it keeps returning the end pose, and a
    /// zero-duration leg reports its end pose right away.
    pub fn frame(&self, now: f64) -> ParticleState {
        let ratio = if self.duration <= 0.0 {
            1.0
        } else {
            ((now - self.start_time) as f32 / self.duration).clamp(0.0, 1.0)
        };
        self.start.lerp(&self.end, ratio)
    }

    /// The pose the current leg is animating toward.
    pub fn target(&self) -> &ParticleState {
        &self.end
    }
}
