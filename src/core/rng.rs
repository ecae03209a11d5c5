//! Seeded randomness for playouts.
//!
//! Search never draws random numbers. `GameRng` only drives random playouts
//! in tests and benchmarks, where a fixed seed must replay the same games.
//!
//! ```
//! use kalah::core::GameRng;
//!
//! let mut a = GameRng::new(42).game(3);
//! let mut b = GameRng::new(42).game(3);
//! assert_eq!(a.pick(&[1, 2, 5, 6]), b.pick(&[1, 2, 5, 6]));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// ChaCha8 stream plus the seed it was built from.
#[derive(Clone, Debug)]
pub struct GameRng {
    stream: ChaCha8Rng,
    seed: u64,
    games: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            stream: ChaCha8Rng::seed_from_u64(seed),
            seed,
            games: 0,
        }
    }

    /// Seed this generator was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generator for the `index`-th game of a series.
    ///
    /// Depends only on the base seed and `index`, not on how much of this
    /// stream was consumed.
    #[must_use]
    pub fn game(&self, index: u64) -> Self {
        let mut stream = ChaCha8Rng::seed_from_u64(self.seed);
        stream.set_stream(index.wrapping_add(1));
        Self::new(stream.gen())
    }

    /// Generator for the next game of the series.
    #[must_use]
    pub fn next_game(&mut self) -> Self {
        self.games += 1;
        self.game(self.games)
    }

    /// Uniformly chosen pit, `None` if there is nothing to choose from.
    pub fn pick(&mut self, pits: &[usize]) -> Option<usize> {
        if pits.is_empty() {
            return None;
        }
        Some(pits[self.stream.gen_range(0..pits.len())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_picks() {
        let pits = [1, 2, 3, 4, 5, 6];
        let mut a = GameRng::new(7);
        let mut b = GameRng::new(7);
        for _ in 0..20 {
            assert_eq!(a.pick(&pits), b.pick(&pits));
        }
    }

    #[test]
    fn test_games_of_a_series_differ() {
        let pits: Vec<usize> = (1..=1000).collect();
        let mut rng = GameRng::new(7);
        let mut first = rng.next_game();
        let mut second = rng.next_game();

        let a: Vec<_> = (0..8).map(|_| first.pick(&pits)).collect();
        let b: Vec<_> = (0..8).map(|_| second.pick(&pits)).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn test_game_ignores_consumed_stream() {
        let pits = [3, 4];
        let fresh = GameRng::new(9);
        let mut used = GameRng::new(9);
        used.pick(&pits);

        let mut a = fresh.game(2);
        let mut b = used.game(2);
        assert_eq!(a.seed(), b.seed());
        assert_eq!(a.pick(&pits), b.pick(&pits));
    }

    #[test]
    fn test_pick_from_empty_and_single() {
        let mut rng = GameRng::new(1);
        assert_eq!(rng.pick(&[]), None);
        assert_eq!(rng.pick(&[5]), Some(5));
    }
}
