//! Randomness source shared by the game engines.
//!
//! Every engine owns an [`ArenaRng`]: the opponent gesture in
//! rock-paper-scissors, the deck shuffle in memory, and the computer move
//! in tic-tac-toe all draw from it. The default constructor seeds from OS
//! entropy and makes no reproducibility promise; [`ArenaRng::seeded`]
//! produces a deterministic stream for tests.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Pseudo-random source for game decisions.
#[derive(Debug, Clone)]
pub struct ArenaRng {
    inner: ChaCha8Rng,
}

impl ArenaRng {
    /// Creates an RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }

    /// Creates a deterministic RNG from the given seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Picks a uniform index in `0..len`.
    ///
    /// `len` must be non-zero; callers select from closed, non-empty
    /// domains (three gestures, at least one open cell).
    pub fn pick_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    /// Shuffles a slice in place (Fisher–Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}

impl Default for ArenaRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
