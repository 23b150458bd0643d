//! Seeded random source for spawning.
//!
//! Seeded so a given settings block always produces the same population.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

pub struct SimRng {
    inner: SmallRng,
}

impl SimRng {
    pub fn new(seed: u64) -> Self {
        Self { inner: SmallRng::seed_from_u64(seed) }
    }

    /// Uniform float in `[low, high)`; returns `low` for an empty range.
    pub fn uniform(&mut self, low: f32, high: f32) -> f32 {
        if high <= low {
            return low;
        }
        self.inner.gen_range(low..high)
    }

    /// Uniform integer in `[low, high]`; returns `low` for an empty range.
    pub fn int_inclusive(&mut self, low: i32, high: i32) -> i32 {
        if high <= low {
            return low;
        }
        self.inner.gen_range(low..=high)
    }

    /// Normal sample (Box-Muller).
    pub fn gauss(&mut self, mean: f32, std_dev: f32) -> f32 {
        if std_dev <= 0.0 {
            return mean;
        }
        // u1 in (0, 1] keeps ln() finite
        let u1: f32 = 1.0 - self.inner.gen::<f32>();
        let u2: f32 = self.inner.gen::<f32>();
        let z = (-2.0 * u1.ln()).sqrt() * (std::f32::consts::TAU * u2).cos();
        mean + z * std_dev
    }
}
