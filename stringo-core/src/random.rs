// stringo-core/src/random.rs
//! A caller-owned random integer generator.
//!
//! There is no process-wide seed: every [`RandomGenerator`] owns its state,
//! so two generators built from the same seed produce the same sequence.
//!
//! License: MIT OR APACHE 2.0

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone)]
pub struct RandomGenerator {
    rng: StdRng,
}

impl RandomGenerator {
    /// Deterministic generator.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generator seeded from the operating system.
    pub fn from_os_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Returns an integer in `[min, max]`. The bounds are swapped if given in
    /// the wrong order; equal bounds return that value.
    pub fn int_in_range(&mut self, min: i64, max: i64) -> i64 {
        let (low, high) = if min <= max { (min, max) } else { (max, min) };
        if low == high {
            return low;
        }
        self.rng.random_range(low..=high)
    }

    /// Restarts the sequence from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self::from_os_entropy()
    }
}
