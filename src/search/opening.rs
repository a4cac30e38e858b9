//! Opening-move selection on the empty board

use rand::{Rng, SeedableRng, prelude::IndexedRandom, rngs::StdRng};

use crate::tictactoe::Move;

/// Source of the move played on the empty board.
///
/// The search itself is deterministic; this is the only place randomness
/// enters. Closures `FnMut(&[Move]) -> Option<Move>` implement it too.
pub trait OpeningChooser {
    /// Pick one of `candidates`. Returning `None`, or a move outside
    /// `candidates`, makes the searcher fall back to a full search.
    fn choose(&mut self, candidates: &[Move]) -> Option<Move>;
}

impl<F> OpeningChooser for F
where
    F: FnMut(&[Move]) -> Option<Move>,
{
    fn choose(&mut self, candidates: &[Move]) -> Option<Move> {
        self(candidates)
    }
}

/// Uniform random choice over the candidate cells
#[derive(Debug, Clone)]
pub struct RandomOpening<R = StdRng> {
    rng: R,
}

impl RandomOpening<StdRng> {
    /// Unseeded chooser; each instance draws its own seed.
    pub fn new() -> Self {
        Self::seeded(rand::random::<u64>())
    }

    pub fn seeded(seed: u64) -> Self {
        RandomOpening {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded when `seed` is given, otherwise fresh
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::new(),
        }
    }
}

impl Default for RandomOpening<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomOpening<R> {
    pub fn from_rng(rng: R) -> Self {
        RandomOpening { rng }
    }
}

impl<R: Rng> OpeningChooser for RandomOpening<R> {
    fn choose(&mut self, candidates: &[Move]) -> Option<Move> {
        candidates.choose(&mut self.rng).copied()
    }
}

/// Always plays the same opening move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedOpening(pub Move);

impl OpeningChooser for FixedOpening {
    fn choose(&mut self, candidates: &[Move]) -> Option<Move> {
        candidates.contains(&self.0).then_some(self.0)
    }
}

/// Never picks; the empty board is searched like any other position
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoOpening;

impl OpeningChooser for NoOpening {
    fn choose(&mut self, _candidates: &[Move]) -> Option<Move> {
        None
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn all_cells() -> Vec<Move> {
        Move::all().collect()
    }

    #[test]
    fn test_random_opening_is_reproducible() {
        let candidates = all_cells();
        let mut a = RandomOpening::seeded(7);
        let mut b = RandomOpening::seeded(7);
        for _ in 0..20 {
            assert_eq!(a.choose(&candidates), b.choose(&candidates));
        }
    }

    #[test]
    fn test_random_opening_covers_board() {
        let candidates = all_cells();
        let mut chooser = RandomOpening::seeded(12345);
        let picked: HashSet<Move> = (0..500)
            .filter_map(|_| chooser.choose(&candidates))
            .collect();
        assert_eq!(picked.len(), 9, "uniform draw should reach every cell");
    }

    #[test]
    fn test_random_opening_from_injected_rng() {
        let candidates = all_cells();
        let mut injected = RandomOpening::from_rng(StdRng::seed_from_u64(7));
        let mut seeded = RandomOpening::seeded(7);
        for _ in 0..20 {
            assert_eq!(injected.choose(&candidates), seeded.choose(&candidates));
        }
    }

    #[test]
    fn test_random_opening_empty_candidates() {
        let mut chooser = RandomOpening::seeded(1);
        assert_eq!(chooser.choose(&[]), None);
    }

    #[test]
    fn test_fixed_opening() {
        let candidates = all_cells();
        let mut chooser = FixedOpening(Move::new(1, 1));
        assert_eq!(chooser.choose(&candidates), Some(Move::new(1, 1)));

        let mut off_board = FixedOpening(Move::new(4, 4));
        assert_eq!(off_board.choose(&candidates), None);
    }

    #[test]
    fn test_closure_chooser() {
        let mut calls = 0;
        let mut chooser = |candidates: &[Move]| {
            calls += 1;
            candidates.last().copied()
        };
        assert_eq!(chooser.choose(&all_cells()), Some(Move::new(2, 2)));
        drop(chooser);
        assert_eq!(calls, 1);
    }
}
