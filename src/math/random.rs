//! Seeded random number generator handle.
//!
//! There is no process-wide generator: callers own a
//! [`RandomNumberGenerator`] and pass it to whatever needs random rolls.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Deterministic random rolls from an explicit seed.
#[derive(Debug, Clone)]
pub struct RandomNumberGenerator {
    rng: StdRng,
}

impl RandomNumberGenerator {
    /// Create a generator whose sequence is fully determined by `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform integer in `[0, max_exclusive)`. Returns 0 when `max_exclusive <= 0`.
    pub fn roll_int_less_than(&mut self, max_exclusive: i32) -> i32 {
        if max_exclusive <= 0 {
            return 0;
        }
        self.rng.gen_range(0..max_exclusive)
    }

    /// Uniform integer in `[min, max]`. Bounds may be given in either order.
    pub fn roll_int_in_range(&mut self, min: i32, max: i32) -> i32 {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        self.rng.gen_range(lo..=hi)
    }

    /// Uniform float in `[0, 1]`.
    pub fn roll_float_zero_to_one(&mut self) -> f32 {
        self.rng.gen_range(0.0..=1.0)
    }

    /// Uniform float between `min` and `max` inclusive.
    ///
    /// Reversed bounds are not rejected; the roll lands between them either way.
    pub fn roll_float_in_range(&mut self, min: f32, max: f32) -> f32 {
        min + (max - min) * self.roll_float_zero_to_one()
    }
}
