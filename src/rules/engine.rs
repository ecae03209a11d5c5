//! Kalah rules: sowing, capture, extra turns and termination.
//!
//! `apply_move` is a pure function. It validates before touching anything
//! and returns a fresh `Board`; the input board is never modified.

use log::trace;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Board, BoardPos, IllegalMove, MoveRecord, Player};

/// Pits a player may choose from, in increasing order.
pub type LegalPits = SmallVec<[usize; 8]>;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Strictly more seeds in this player's store.
    Winner(Player),
    /// Equal stores.
    Tie,
}

impl GameResult {
    /// Compare the stores of a finished board.
    #[must_use]
    pub fn from_stores(board: &Board) -> Self {
        let human = board.store(Player::Human);
        let computer = board.store(Player::Computer);
        match human.cmp(&computer) {
            std::cmp::Ordering::Greater => GameResult::Winner(Player::Human),
            std::cmp::Ordering::Less => GameResult::Winner(Player::Computer),
            std::cmp::Ordering::Equal => GameResult::Tie,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// Everything a successful move produces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Board after sowing, capture and (if the game ended) the final sweep.
    pub board: Board,

    /// What happened, for history and display.
    pub record: MoveRecord,

    /// `Some` once the move ended the game.
    pub result: Option<GameResult>,
}

impl MoveOutcome {
    /// Player to move next, `None` when the game is over.
    #[must_use]
    pub fn next_player(&self) -> Option<Player> {
        match (self.result, self.record.extra_turn) {
            (Some(_), _) => None,
            (None, true) => Some(self.record.player),
            (None, false) => Some(self.record.player.opposite()),
        }
    }
}

/// Non-empty pits of `player`, empty once the board is terminal.
#[must_use]
pub fn legal_pits(board: &Board, player: Player) -> LegalPits {
    if board.is_terminal() {
        return LegalPits::new();
    }
    board
        .row(player)
        .iter()
        .enumerate()
        .filter(|(_, seeds)| **seeds > 0)
        .map(|(i, _)| i + 1)
        .collect()
}

/// Check a move without applying it.
pub fn validate_move(board: &Board, player: Player, pit: usize) -> Result<(), IllegalMove> {
    let n = board.pits_per_player();
    if board.is_terminal() {
        return Err(IllegalMove::GameOver);
    }
    if pit == n + 1 {
        return Err(IllegalMove::Store);
    }
    if pit == 0 || pit > n {
        return Err(IllegalMove::OutOfRange { pit, max: n });
    }
    if board.seeds(player, pit) == 0 {
        return Err(IllegalMove::EmptyPit(pit));
    }
    Ok(())
}

/// Play `pit` (own numbering) for `player`.
///
/// Seeds are sown counter-clockwise one per slot, skipping the opponent's
/// store and the emptied source pit. The last seed decides:
/// - own store: extra turn;
/// - own pit that was empty: it and the facing pit go to the store.
///
/// When either row is empty afterwards the game ends and each side's
/// remaining seeds go to that side's store.
pub fn apply_move(board: &Board, player: Player, pit: usize) -> Result<MoveOutcome, IllegalMove> {
    validate_move(board, player, pit)?;

    let source = BoardPos::Pit { owner: player, index: pit };
    let mut next = board.clone();
    let mut remaining = next.take(player, pit);

    // One lap feeds every pit but the source, plus the mover's store. Whole
    // laps are added at once; at least one seed is left for the walk below.
    let lap = u32::try_from(2 * board.pits_per_player()).unwrap_or(u32::MAX);
    if remaining > lap {
        let laps = (remaining - 1) / lap;
        next.add_laps(player, pit, laps);
        remaining -= laps * lap;
        trace!("{player} sowed {laps} full laps from pit {pit}");
    }

    let mut pos = source;
    while remaining > 0 {
        pos = next.next_slot(pos, player);
        if pos == source {
            continue;
        }
        next.add(pos, 1);
        remaining -= 1;
    }

    let mut captured = 0;
    if let BoardPos::Pit { owner, index } = pos {
        if owner == player && next.at(pos) == 1 {
            let facing = next.opposite_index(index);
            captured = next.take(player, index) + next.take(player.opposite(), facing);
            next.add(BoardPos::Store(player), captured);
            trace!("{player} captured {captured} seeds at pit {index}");
        }
    }

    let result = if next.is_terminal() {
        for side in Player::ALL {
            let swept = next.sweep(side);
            if swept > 0 {
                trace!("swept {swept} seeds into the {side}'s store");
            }
        }
        Some(GameResult::from_stores(&next))
    } else {
        None
    };

    debug_assert_eq!(
        next.total_seeds(),
        board.total_seeds(),
        "seed count changed while sowing"
    );

    let extra_turn = result.is_none() && pos == BoardPos::Store(player);
    Ok(MoveOutcome {
        board: next,
        record: MoveRecord {
            player,
            pit,
            target: pos,
            extra_turn,
            captured,
        },
        result,
    })
}
