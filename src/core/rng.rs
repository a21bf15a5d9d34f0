//! Deterministic random number generation for resource placement.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the identical placement sequence,
//!   so whole games replay exactly and tests can assert concrete positions.
//! - **Serializable**: O(1) state capture and restore via the ChaCha8 word
//!   position, regardless of how many draws have happened.
//!
//! Placement is the engine's only randomness; everything else is a pure
//! function of state and input.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG backing resource placement.
///
/// Uses ChaCha8 for speed while keeping a high-quality stream.
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

    /// Uniform axis component in `[0, grid_size)`.
    pub fn gen_axis(&mut self, grid_size: u8) -> u8 {
        self.inner.gen_range(0..grid_size)
    }

    /// Uniform index in `[0, len)`.
    pub fn gen_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
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

/// Serializable RNG state for checkpointing a game mid-stream.
///
/// Uses the ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed.
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter).
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_axis(8), rng2.gen_axis(8));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..20).map(|_| rng1.gen_axis(8)).collect();
        let seq2: Vec<_> = (0..20).map(|_| rng2.gen_axis(8)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_axis_in_range() {
        let mut rng = GameRng::new(7);

        for _ in 0..1000 {
            assert!(rng.gen_axis(8) < 8);
        }
    }

    #[test]
    fn test_state_round_trip() {
        let mut rng = GameRng::new(42);

        // Advance the stream.
        for _ in 0..100 {
            rng.gen_axis(8);
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.gen_axis(8)).collect();

        let mut restored = GameRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.gen_axis(8)).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let back: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, back);
    }
}
