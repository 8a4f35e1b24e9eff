//! Seedable pseudo-random number generator (xorshift64).
//! Deterministic, fast, no platform entropy — the field owns one of
//! these so every run is reproducible from its seed.

use glam::Vec2;

/// Seedable pseudo-random number generator (xorshift64).
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Uniform f32 in [0, 1).
    pub fn next_f32(&mut self) -> f32 {
        // Top 24 bits keep the full f32 mantissa precision.
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }

    /// Uniform f32 in [lo, hi).
    pub fn range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + (hi - lo) * self.next_f32()
    }

    /// Uniform f32 in [-max, max).
    pub fn symmetric(&mut self, max: f32) -> f32 {
        self.range(-max, max)
    }

    /// Vector whose components are drawn independently from [-max, max).
    pub fn jitter_vec2(&mut self, max: f32) -> Vec2 {
        Vec2::new(self.symmetric(max), self.symmetric(max))
    }
}
