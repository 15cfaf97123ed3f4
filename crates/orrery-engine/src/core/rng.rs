//! Seedable pseudo-random number generator (xorshift64).
//! Deterministic for a given seed.

use std::f64::consts::TAU;

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

    /// Uniform f64 in [0, 1). Uses the top 53 bits.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform f32 in [lo, hi].
    pub fn range(&mut self, lo: f32, hi: f32) -> f32 {
        let v = lo as f64 + self.next_f64() * (hi as f64 - lo as f64);
        (v as f32).clamp(lo, hi)
    }

    /// Uniform f32 in [-range / 2, range / 2].
    pub fn spread(&mut self, range: f32) -> f32 {
        self.range(-range / 2.0, range / 2.0)
    }

    /// Uniform angle in [0, 2π).
    pub fn angle(&mut self) -> f64 {
        self.next_f64() * TAU
    }
}
