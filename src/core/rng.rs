//! Deterministic random number generation for board setup.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical boards
//! - **Uniform shuffles**: In-place Fisher-Yates via `rand::seq::SliceRandom`
//! - **Entropy-seeded option** for embedders that don't care about replay
//!
//! ## Usage
//!
//! ```
//! use pairmatch::core::RoundRng;
//!
//! let mut rng = RoundRng::new(42);
//! let mut tiles = vec![1, 2, 3, 4, 5, 6];
//! rng.shuffle(&mut tiles);
//!
//! // Same seed, same shuffle.
//! let mut rng2 = RoundRng::new(42);
//! let mut tiles2 = vec![1, 2, 3, 4, 5, 6];
//! rng2.shuffle(&mut tiles2);
//! assert_eq!(tiles, tiles2);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG used for symbol selection and tile shuffling.
///
/// Uses ChaCha8 for speed while maintaining high quality randomness.
#[derive(Clone, Debug)]
pub struct RoundRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl RoundRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from OS entropy.
    ///
    /// Use when round layouts don't need to be reproducible.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random::<u64>())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place.
    ///
    /// This is the uniform, linear-time shuffle the board generator relies on.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn pick<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}
