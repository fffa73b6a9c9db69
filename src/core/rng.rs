//! Deterministic random number generation for dealing and word selection.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical deals
//! - **Context streams**: Independent sequences for words, roles and turn order
//! - **Serializable**: O(1) state capture and restore
//!
//! ## Usage
//!
//! ```
//! use undercover_engine::core::GameRng;
//!
//! let rng = GameRng::new(42);
//!
//! // Context streams are reproducible from the seed
//! let mut words = rng.for_context("words");
//! let mut again = GameRng::new(42).for_context("words");
//! assert_eq!(words.gen_index(1000), again.gen_index(1000));
//!
//! // Shuffling returns a new permutation and leaves the input alone
//! let ids = [0, 1, 2, 3];
//! let shuffled = words.shuffled(&ids);
//! assert_eq!(ids, [0, 1, 2, 3]);
//! assert_eq!(shuffled.len(), 4);
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Multiplier used to spread context hashes over the seed space.
const CONTEXT_MIX: u64 = 0x9E3779B97F4A7C15;

/// Deterministic RNG backing every randomized assignment in a session.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
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

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// Used to separate randomness domains (word draws vs role shuffles).
    /// The sub-seed is a fixed FNV-1a hash of `context` mixed into the
    /// seed, so streams are stable across toolchains and platforms.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let context_hash = context
            .bytes()
            .fold(0xcbf29ce484222325u64, |h, b| (h ^ u64::from(b)).wrapping_mul(0x100000001b3));
        Self::new(self.seed ^ context_hash.wrapping_mul(CONTEXT_MIX))
    }

    /// Draw an index uniformly from `0..len`.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero.
    pub fn gen_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }

    /// Return a uniformly random permutation of `items`.
    ///
    /// Fisher–Yates via `SliceRandom::shuffle` on a copy. The input is
    /// never mutated; empty and singleton inputs come back unchanged.
    #[must_use]
    pub fn shuffled<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut out = items.to_vec();
        out.shuffle(&mut self.inner);
        out
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
