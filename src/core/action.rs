//! Move representation and history records.
//!
//! Pits are addressed two ways:
//! - **Own numbering**: `1..=n` from the mover's perspective, used by the
//!   rules engine.
//! - **Board numbering**: the human's pits are `1..=n`, the computer's pits
//!   are `n+1..=2n`. Used by the session API and for display.
//!
//! Stores have no board number.

use serde::{Deserialize, Serialize};

use super::player::Player;

/// A slot on the board: a playing pit or a store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardPos {
    /// Pit `index` (own numbering, 1-based) of `owner`.
    Pit { owner: Player, index: usize },
    /// The store of the given player.
    Store(Player),
}

impl BoardPos {
    /// Board number of this slot, `None` for stores.
    ///
    /// ```
    /// use kalah::core::{BoardPos, Player};
    ///
    /// let pit = BoardPos::Pit { owner: Player::Computer, index: 2 };
    /// assert_eq!(pit.number(6), Some(8));
    /// assert_eq!(BoardPos::Store(Player::Human).number(6), None);
    /// ```
    #[must_use]
    pub fn number(self, pits_per_player: usize) -> Option<usize> {
        match self {
            BoardPos::Pit { owner, index } => Some(board_number(owner, index, pits_per_player)),
            BoardPos::Store(_) => None,
        }
    }
}

/// Convert an own-numbered pit to its board number.
#[must_use]
pub fn board_number(owner: Player, index: usize, pits_per_player: usize) -> usize {
    match owner {
        Player::Human => index,
        Player::Computer => pits_per_player + index,
    }
}

/// Split a board number into owner and own-numbered pit.
///
/// Returns `None` when the number is outside `1..=2n`.
#[must_use]
pub fn split_board_number(number: usize, pits_per_player: usize) -> Option<(Player, usize)> {
    if number == 0 || number > 2 * pits_per_player {
        None
    } else if number <= pits_per_player {
        Some((Player::Human, number))
    } else {
        Some((Player::Computer, number - pits_per_player))
    }
}

/// A completed move with metadata for history and display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who moved.
    pub player: Player,

    /// Chosen pit in the mover's own numbering.
    pub pit: usize,

    /// Where the last seed landed.
    pub target: BoardPos,

    /// Whether the mover goes again.
    pub extra_turn: bool,

    /// Seeds moved into the mover's store by a capture (0 if none).
    pub captured: u32,
}

impl MoveRecord {
    /// Board number of the chosen pit.
    #[must_use]
    pub fn source_number(&self, pits_per_player: usize) -> usize {
        board_number(self.player, self.pit, pits_per_player)
    }
}
