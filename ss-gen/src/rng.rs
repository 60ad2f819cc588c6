//! The single seeded source of randomness for a generation run.
use std::ops::RangeInclusive;

use rand::distributions::Distribution;
use rand::{
    Rng,
    SeedableRng,
};
use rand_chacha::ChaCha8Rng;

/// Deterministic random stream shared, in sequence, by every pipeline stage.
///
/// The stream is never forked or snapshotted: stages take `&mut RandomSource` and draw in a fixed
/// order, so the same seed and configuration always reproduce the same dataset.  `ChaCha8Rng` is
/// used rather than `StdRng` because its output is stable across platforms and `rand` releases.
#[derive(Clone, Debug)]
pub struct RandomSource {
    /// The underlying generator.
    rng: ChaCha8Rng,
    /// Number of values drawn so far.
    draws: u64,
}

impl RandomSource {
    /// Create a stream from a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed), draws: 0 }
    }

    /// Draw one value from `dist`.
    pub fn pick<T, D: Distribution<T>>(&mut self, dist: &D) -> T {
        self.draws += 1;
        dist.sample(&mut self.rng)
    }

    /// Draw an integer uniformly from `range`.
    ///
    /// # Panics
    ///
    /// Panics if `range` is empty.
    pub fn int_in(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.draws += 1;
        self.rng.gen_range(range)
    }

    /// Draw a float uniformly from `[0, 1)`.
    pub fn unit(&mut self) -> f64 {
        self.draws += 1;
        self.rng.gen()
    }

    /// Total number of values drawn from this stream.
    #[must_use]
    pub const fn draws(&self) -> u64 {
        self.draws
    }
}
