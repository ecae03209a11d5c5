//! Tree walks over the rules engine: move-path counting and random games.
//!
//! Neither is used by the computer opponent. They exercise `apply_move` over
//! many reachable positions for tests and benchmarks.

use crate::core::{Board, GameRng, MoveRecord, Player};

use super::engine::{apply_move, legal_pits, GameResult};

/// Count move sequences of exactly `depth` plies from `board`, with games
/// that end earlier counted once. Extra turns keep the same player.
#[must_use]
pub fn perft(board: &Board, player: Player, depth: u32) -> u64 {
    if depth == 0 || board.is_terminal() {
        return 1;
    }
    legal_pits(board, player)
        .into_iter()
        .filter_map(|pit| apply_move(board, player, pit).ok())
        .map(|outcome| match outcome.next_player() {
            Some(next) => perft(&outcome.board, next, depth - 1),
            None => 1,
        })
        .sum()
}

/// A finished random game.
#[derive(Clone, Debug)]
pub struct Playout {
    /// Final board after the sweep.
    pub board: Board,

    /// Outcome of the game.
    pub result: GameResult,

    /// Every move in order.
    pub moves: Vec<MoveRecord>,
}

/// Play uniformly random legal moves until the game ends.
pub fn random_playout(board: &Board, to_move: Player, rng: &mut GameRng) -> Playout {
    let mut board = board.clone();
    let mut player = to_move;
    let mut moves = Vec::new();

    loop {
        let pits = legal_pits(&board, player);
        let Some(pit) = rng.pick(&pits) else {
            return Playout {
                result: GameResult::from_stores(&board),
                board,
                moves,
            };
        };
        let Ok(outcome) = apply_move(&board, player, pit) else {
            unreachable!("legal pit {pit} rejected");
        };
        moves.push(outcome.record.clone());
        let next = outcome.next_player();
        board = outcome.board;
        match (outcome.result, next) {
            (Some(result), _) => return Playout { board, result, moves },
            (None, Some(next)) => player = next,
            (None, None) => unreachable!("running game without a player to move"),
        }
    }
}
