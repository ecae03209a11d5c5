//! Board snapshot: pit and store seed counts for both players.
//!
//! Rows are `im::Vector`s, so cloning a board is O(1) and a move only copies
//! the chunks it touches. Search relies on this to keep every expanded
//! position alive without deep copies.
//!
//! ## Layout
//!
//! Sowing runs counter-clockwise: human pits `1..n`, human store, computer
//! pits `1..n`, computer store, back to human pit `1`. Human pit `i` faces
//! computer pit `n + 1 - i`.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::BoardPos;
use super::player::{Player, PlayerMap};

/// Seeds on a starting board, `None` if the count does not fit a `u32`.
pub(crate) fn starting_total(pits_per_player: usize, seeds_per_pit: u32) -> Option<u32> {
    u32::try_from(pits_per_player)
        .ok()?
        .checked_mul(2)?
        .checked_mul(seeds_per_pit)
}

/// Immutable snapshot of every seed on the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pits: PlayerMap<Vector<u32>>,
    stores: PlayerMap<u32>,
}

impl Board {
    /// Starting board: every pit holds `seeds_per_pit`, stores are empty.
    ///
    /// # Panics
    ///
    /// If `pits_per_player` is 0 or the seed total does not fit a `u32`.
    /// `GameConfig::validate` rejects both.
    #[must_use]
    pub fn new(pits_per_player: usize, seeds_per_pit: u32) -> Self {
        assert!(pits_per_player > 0, "Must have at least 1 pit per player");
        assert!(
            starting_total(pits_per_player, seeds_per_pit).is_some(),
            "Seed total of {pits_per_player} x {seeds_per_pit} does not fit a u32"
        );

        Self {
            pits: PlayerMap::new(|_| std::iter::repeat(seeds_per_pit).take(pits_per_player).collect()),
            stores: PlayerMap::with_value(0),
        }
    }

    /// Build an arbitrary position. Rows are given in own numbering order.
    ///
    /// ```
    /// use kalah::core::{Board, Player};
    ///
    /// let board = Board::from_parts(&[0, 1, 2], &[3, 0, 0], [5, 1]);
    /// assert_eq!(board.seeds(Player::Human, 3), 2);
    /// assert_eq!(board.store(Player::Computer), 1);
    /// assert_eq!(board.total_seeds(), 12);
    /// ```
    ///
    /// # Panics
    ///
    /// If the rows are empty or of different length, or the seed total does
    /// not fit a `u32`.
    #[must_use]
    pub fn from_parts(human: &[u32], computer: &[u32], stores: [u32; 2]) -> Self {
        assert!(!human.is_empty(), "Must have at least 1 pit per player");
        assert_eq!(human.len(), computer.len(), "Rows must have equal length");
        let total = human
            .iter()
            .chain(computer)
            .chain(&stores)
            .try_fold(0u32, |sum, &seeds| sum.checked_add(seeds));
        assert!(total.is_some(), "Seed total does not fit a u32");

        Self {
            pits: PlayerMap::new(|p| match p {
                Player::Human => human.iter().copied().collect(),
                Player::Computer => computer.iter().copied().collect(),
            }),
            stores: PlayerMap::new(|p| stores[p.index()]),
        }
    }

    /// Number of playing pits on each side.
    #[must_use]
    pub fn pits_per_player(&self) -> usize {
        self.pits[Player::Human].len()
    }

    /// Seeds in a player's pit, `index` in own numbering (1-based).
    ///
    /// # Panics
    ///
    /// If `index` is 0 or greater than `pits_per_player`.
    #[must_use]
    pub fn seeds(&self, player: Player, index: usize) -> u32 {
        self.pits[player][index - 1]
    }

    /// A player's row in own numbering order.
    #[must_use]
    pub fn row(&self, player: Player) -> &Vector<u32> {
        &self.pits[player]
    }

    /// Seeds in a player's store.
    #[must_use]
    pub fn store(&self, player: Player) -> u32 {
        self.stores[player]
    }

    /// Seeds still in play on a player's side.
    #[must_use]
    pub fn row_total(&self, player: Player) -> u32 {
        self.pits[player].iter().sum()
    }

    /// Whether every pit on a player's side is empty.
    #[must_use]
    pub fn row_is_empty(&self, player: Player) -> bool {
        self.pits[player].iter().all(|&s| s == 0)
    }

    /// A board is terminal once either row is empty.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        Player::ALL.into_iter().any(|p| self.row_is_empty(p))
    }

    /// Every seed on the board, pits and stores.
    #[must_use]
    pub fn total_seeds(&self) -> u32 {
        Player::ALL
            .into_iter()
            .map(|p| self.row_total(p) + self.stores[p])
            .sum()
    }

    /// Store difference from the computer's point of view.
    #[must_use]
    pub fn store_difference(&self) -> i64 {
        i64::from(self.stores[Player::Computer]) - i64::from(self.stores[Player::Human])
    }

    /// Own-numbered pit directly across from `index`.
    #[must_use]
    pub fn opposite_index(&self, index: usize) -> usize {
        self.pits_per_player() + 1 - index
    }

    // === Mutation (rules engine only) ===

    /// Slot following `pos` in sowing order, skipping `mover`'s opponent's store.
    pub(crate) fn next_slot(&self, pos: BoardPos, mover: Player) -> BoardPos {
        let n = self.pits_per_player();
        let next = match pos {
            BoardPos::Pit { owner, index } if index < n => BoardPos::Pit { owner, index: index + 1 },
            BoardPos::Pit { owner, .. } => BoardPos::Store(owner),
            BoardPos::Store(owner) => BoardPos::Pit { owner: owner.opposite(), index: 1 },
        };
        match next {
            BoardPos::Store(owner) if owner != mover => self.next_slot(next, mover),
            _ => next,
        }
    }

    /// Seeds at a slot.
    pub(crate) fn at(&self, pos: BoardPos) -> u32 {
        match pos {
            BoardPos::Pit { owner, index } => self.seeds(owner, index),
            BoardPos::Store(owner) => self.stores[owner],
        }
    }

    /// Add seeds to a slot.
    pub(crate) fn add(&mut self, pos: BoardPos, seeds: u32) {
        match pos {
            BoardPos::Pit { owner, index } => {
                let current = self.pits[owner][index - 1];
                self.pits[owner].set(index - 1, current + seeds);
            }
            BoardPos::Store(owner) => self.stores[owner] += seeds,
        }
    }

    /// Drop `laps` seeds into every slot `mover` sows into, that is all pits
    /// except `source` plus the mover's own store.
    pub(crate) fn add_laps(&mut self, mover: Player, source: usize, laps: u32) {
        for owner in Player::ALL {
            self.pits[owner] = self.pits[owner]
                .iter()
                .enumerate()
                .map(|(i, &seeds)| {
                    if owner == mover && i + 1 == source {
                        seeds
                    } else {
                        seeds + laps
                    }
                })
                .collect();
        }
        self.stores[mover] += laps;
    }

    /// Empty a pit and return what it held.
    pub(crate) fn take(&mut self, owner: Player, index: usize) -> u32 {
        self.pits[owner].set(index - 1, 0)
    }

    /// Move every seed left in a player's row into that player's store.
    pub(crate) fn sweep(&mut self, player: Player) -> u32 {
        let swept = self.row_total(player);
        if swept > 0 {
            self.pits[player] = std::iter::repeat(0).take(self.pits_per_player()).collect();
            self.stores[player] += swept;
        }
        swept
    }
}

impl std::fmt::Display for Board {
    /// Two rows: the computer's (store, then pits `n..1`) above the human's
    /// (pits `1..n`, then store). Facing pits share a column.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let widest = Player::ALL
            .into_iter()
            .flat_map(|p| self.pits[p].iter().copied().chain(std::iter::once(self.stores[p])))
            .max()
            .unwrap_or(0);
        let width = widest.to_string().len();

        let computer: Vec<String> = std::iter::once(self.stores[Player::Computer])
            .chain(self.pits[Player::Computer].iter().rev().copied())
            .map(|s| format!("{s:>width$}"))
            .collect();
        let human: Vec<String> = std::iter::once(" ".repeat(width))
            .chain(
                self.pits[Player::Human]
                    .iter()
                    .copied()
                    .chain(std::iter::once(self.stores[Player::Human]))
                    .map(|s| format!("{s:>width$}")),
            )
            .collect();

        writeln!(f, "{}", computer.join(" "))?;
        write!(f, "{}", human.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = Board::new(6, 4);

        assert_eq!(board.pits_per_player(), 6);
        assert_eq!(board.total_seeds(), 48);
        assert_eq!(board.store(Player::Human), 0);
        assert_eq!(board.row_total(Player::Computer), 24);
        assert!(!board.is_terminal());
    }

    #[test]
    fn test_zero_seed_board_is_terminal() {
        let board = Board::new(3, 0);
        assert!(board.is_terminal());
        assert_eq!(board.total_seeds(), 0);
    }

    #[test]
    fn test_opposite_index() {
        let board = Board::new(6, 4);
        assert_eq!(board.opposite_index(1), 6);
        assert_eq!(board.opposite_index(6), 1);
        assert_eq!(board.opposite_index(3), 4);
    }

    #[test]
    fn test_next_slot_skips_opponent_store() {
        let board = Board::new(2, 1);
        let human_last = BoardPos::Pit { owner: Player::Human, index: 2 };
        let computer_last = BoardPos::Pit { owner: Player::Computer, index: 2 };

        assert_eq!(board.next_slot(human_last, Player::Human), BoardPos::Store(Player::Human));
        assert_eq!(
            board.next_slot(human_last, Player::Computer),
            BoardPos::Pit { owner: Player::Computer, index: 1 }
        );
        assert_eq!(
            board.next_slot(computer_last, Player::Human),
            BoardPos::Pit { owner: Player::Human, index: 1 }
        );
        assert_eq!(
            board.next_slot(computer_last, Player::Computer),
            BoardPos::Store(Player::Computer)
        );
    }

    #[test]
    fn test_take_and_add_leave_original_untouched() {
        let original = Board::new(3, 2);
        let mut board = original.clone();

        let taken = board.take(Player::Human, 2);
        board.add(BoardPos::Store(Player::Human), taken);

        assert_eq!(taken, 2);
        assert_eq!(board.seeds(Player::Human, 2), 0);
        assert_eq!(board.store(Player::Human), 2);
        assert_eq!(original.seeds(Player::Human, 2), 2);
        assert_eq!(original.store(Player::Human), 0);
    }

    #[test]
    fn test_add_laps_skips_source_and_opponent_store() {
        let mut board = Board::from_parts(&[1, 0, 2], &[3, 0, 1], [4, 5]);
        board.add_laps(Player::Computer, 1, 2);

        assert_eq!(board.row(Player::Human).iter().copied().collect::<Vec<_>>(), vec![3, 2, 4]);
        assert_eq!(board.row(Player::Computer).iter().copied().collect::<Vec<_>>(), vec![3, 2, 3]);
        assert_eq!(board.store(Player::Computer), 7);
        assert_eq!(board.store(Player::Human), 4);
    }

    #[test]
    #[should_panic]
    fn test_seeds_rejects_pit_zero() {
        let _ = Board::new(3, 1).seeds(Player::Human, 0);
    }

    #[test]
    #[should_panic]
    fn test_seeds_rejects_pit_past_row() {
        let _ = Board::new(3, 1).seeds(Player::Computer, 4);
    }

    #[test]
    #[should_panic(expected = "does not fit a u32")]
    fn test_new_rejects_overflowing_total() {
        let _ = Board::new(6, 400_000_000);
    }

    #[test]
    fn test_starting_total() {
        assert_eq!(starting_total(6, 4), Some(48));
        assert_eq!(starting_total(6, 400_000_000), None);
        assert_eq!(starting_total(usize::MAX, 0), None);
    }

    #[test]
    fn test_sweep() {
        let mut board = Board::from_parts(&[0, 0], &[3, 4], [5, 1]);
        assert_eq!(board.sweep(Player::Computer), 7);
        assert_eq!(board.store(Player::Computer), 8);
        assert!(board.row_is_empty(Player::Computer));
        assert_eq!(board.total_seeds(), 13);
    }

    #[test]
    fn test_display() {
        let board = Board::from_parts(&[1, 2, 3], &[4, 5, 6], [0, 10]);
        assert_eq!(board.to_string(), "10  6  5  4\n    1  2  3  0");
    }

    #[test]
    fn test_serialization() {
        let board = Board::from_parts(&[1, 0, 3], &[0, 2, 0], [4, 5]);
        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);
    }
}
