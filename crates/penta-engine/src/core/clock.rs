//! Monotonic time sources. The engine never reads platform timers
//! itself; hosts inject whichever clock fits (real time for rendering,
//! a hand-stepped one for tests and headless runs).

use std::time::Instant;

/// Monotonic time in seconds since some fixed origin.
pub trait Clock {
    fn now(&self) -> f64;
}

/// Real monotonic clock; origin is construction time.
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        MonotonicClock {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Hand-stepped clock for tests and headless hosts.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: f64,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(now: f64) -> Self {
        ManualClock { now }
    }

    /// Move time forward by `dt` seconds.
    pub fn step(&mut self, dt: f64) {
        self.now += dt;
    }

    pub fn set(&mut self, now: f64) {
        self.now = now;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.now
    }
}
