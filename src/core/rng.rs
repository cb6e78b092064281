//! Deterministic randomness for board generation and deck shuffling.
//!
//! The rule pipelines never touch randomness. Only the setup helpers
//! (`Board::generate`, `Deck::shuffled`) draw from a `GameRng`, and they
//! take it explicitly so a seed fully determines a match.
//!
//! ```
//! use unit_constellations::core::GameRng;
//!
//! let rng = GameRng::new(42);
//! let mut terrain = rng.for_context("terrain");
//! let mut terrain_again = GameRng::new(42).for_context("terrain");
//! assert_eq!(terrain.gen_range_usize(0..100), terrain_again.gen_range_usize(0..100));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};

/// Seeded ChaCha8 generator with named sub-streams.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed this generator was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derive an independent stream for a named purpose.
    ///
    /// Board terrain and deck order use separate streams so that changing
    /// the board size never reorders the deck.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hasher = FxHasher::default();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Random usize in `range`.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Random boolean that is true with `probability`.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}
