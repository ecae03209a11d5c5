//! Depth-limited minimax with alpha-beta pruning.
//!
//! Values are always seen from the computer's side: the computer maximizes
//! `computer store - human store`, the human minimizes it. An extra turn
//! keeps the same side to move but still uses up one ply.

use std::time::Instant;

use log::debug;

use crate::core::{Board, Player};
use crate::rules::{apply_move, legal_pits, MoveOutcome};

use super::config::SearchConfig;
use super::stats::SearchStats;

/// Chosen pit and its minimax value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Pit in the mover's own numbering.
    pub pit: usize,

    /// Store difference (computer minus human) expected with best play.
    pub value: i64,
}

/// Minimax searcher. Owns its configuration and the statistics of the last
/// search.
#[derive(Clone, Debug)]
pub struct Minimax {
    config: SearchConfig,
    stats: SearchStats,
}

impl Minimax {
    /// Create a new searcher.
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    /// Configuration in use.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Statistics of the most recent search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Best pit for `player`, `None` if the player cannot move.
    ///
    /// Among equally valued pits the lowest one wins.
    pub fn best_pit(&mut self, board: &Board, player: Player) -> Option<SearchOutcome> {
        let start = Instant::now();
        self.stats.reset();
        self.stats.depth = self.config.depth.max(1);

        let maximizing = player == Player::Computer;
        let mut alpha = i64::MIN;
        let mut beta = i64::MAX;
        let mut best: Option<SearchOutcome> = None;

        for pit in legal_pits(board, player) {
            let Ok(outcome) = apply_move(board, player, pit) else {
                continue;
            };
            let value = self.child_value(&outcome, self.stats.depth - 1, alpha, beta);
            let improves = match best {
                None => true,
                Some(b) if maximizing => value > b.value,
                Some(b) => value < b.value,
            };
            if improves {
                best = Some(SearchOutcome { pit, value });
                if maximizing {
                    alpha = value;
                } else {
                    beta = value;
                }
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        if let Some(b) = best {
            debug!("{player} plays pit {} (value {}): {}", b.pit, b.value, self.stats);
        }
        best
    }

    fn child_value(&mut self, outcome: &MoveOutcome, depth: u32, alpha: i64, beta: i64) -> i64 {
        match outcome.next_player() {
            Some(next) => self.alpha_beta(&outcome.board, next, depth, alpha, beta),
            None => {
                self.stats.nodes += 1;
                self.stats.leaves += 1;
                outcome.board.store_difference()
            }
        }
    }

    fn alpha_beta(
        &mut self,
        board: &Board,
        player: Player,
        depth: u32,
        mut alpha: i64,
        mut beta: i64,
    ) -> i64 {
        self.stats.nodes += 1;

        let over_budget = self
            .config
            .node_limit
            .is_some_and(|limit| self.stats.nodes > limit);
        if depth == 0 || over_budget || board.is_terminal() {
            self.stats.leaves += 1;
            return board.store_difference();
        }

        let maximizing = player == Player::Computer;
        let mut best = if maximizing { i64::MIN } else { i64::MAX };

        for pit in legal_pits(board, player) {
            let Ok(outcome) = apply_move(board, player, pit) else {
                continue;
            };
            let value = self.child_value(&outcome, depth - 1, alpha, beta);
            if maximizing {
                best = best.max(value);
                alpha = alpha.max(best);
            } else {
                best = best.min(value);
                beta = beta.min(best);
            }
            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best
    }
}

/// One-shot search with a fresh `Minimax`.
#[must_use]
pub fn best_pit(board: &Board, player: Player, config: &SearchConfig) -> Option<SearchOutcome> {
    Minimax::new(config.clone()).best_pit(board, player)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Plain minimax without pruning, used to check the pruned search.
    fn reference_value(board: &Board, player: Player, depth: u32) -> i64 {
        if depth == 0 || board.is_terminal() {
            return board.store_difference();
        }
        let values = legal_pits(board, player).into_iter().map(|pit| {
            let outcome = apply_move(board, player, pit).unwrap();
            match outcome.next_player() {
                Some(next) => reference_value(&outcome.board, next, depth - 1),
                None => outcome.board.store_difference(),
            }
        });
        match player {
            Player::Computer => values.max().unwrap(),
            Player::Human => values.min().unwrap(),
        }
    }

    fn reference_pit(board: &Board, player: Player, depth: u32) -> SearchOutcome {
        let mut best: Option<SearchOutcome> = None;
        for pit in legal_pits(board, player) {
            let outcome = apply_move(board, player, pit).unwrap();
            let value = match outcome.next_player() {
                Some(next) => reference_value(&outcome.board, next, depth - 1),
                None => outcome.board.store_difference(),
            };
            let improves = match (best, player) {
                (None, _) => true,
                (Some(b), Player::Computer) => value > b.value,
                (Some(b), Player::Human) => value < b.value,
            };
            if improves {
                best = Some(SearchOutcome { pit, value });
            }
        }
        best.unwrap()
    }

    #[test]
    fn test_pruning_matches_plain_minimax() {
        let boards = [
            Board::new(6, 4),
            Board::new(4, 3),
            Board::from_parts(&[0, 3, 1, 0, 2, 5], &[4, 0, 0, 2, 1, 1], [10, 8]),
        ];
        for board in &boards {
            for player in Player::ALL {
                for depth in 1..=4 {
                    let config = SearchConfig::default().with_depth(depth);
                    let found = best_pit(board, player, &config).unwrap();
                    assert_eq!(found, reference_pit(board, player, depth), "depth {depth}");
                }
            }
        }
    }

    #[test]
    fn test_takes_winning_capture() {
        // Computer pit 1 has one seed and lands in empty pit 2, facing 9 seeds.
        let board = Board::from_parts(&[1, 1, 1, 1, 9, 1], &[1, 0, 0, 0, 0, 2], [0, 0]);
        let found = best_pit(&board, Player::Computer, &SearchConfig::for_level(1)).unwrap();
        assert_eq!(found.pit, 1);
        assert_eq!(found.value, 10);
    }

    #[test]
    fn test_ties_go_to_lowest_pit() {
        // Pits 3 and 4 both put one seed in the store at depth 1.
        let board = Board::from_parts(&[1, 1, 1, 1], &[0, 0, 2, 1], [0, 0]);
        let found = best_pit(&board, Player::Computer, &SearchConfig::for_level(1)).unwrap();
        assert_eq!(found, SearchOutcome { pit: 3, value: 1 });
    }

    #[test]
    fn test_no_move_on_terminal_board() {
        let board = Board::from_parts(&[0, 0], &[1, 2], [4, 1]);
        assert!(best_pit(&board, Player::Computer, &SearchConfig::default()).is_none());
    }

    #[test]
    fn test_stats_are_collected() {
        let mut search = Minimax::new(SearchConfig::for_level(4));
        search.best_pit(&Board::new(6, 4), Player::Computer).unwrap();

        let stats = search.stats();
        assert_eq!(stats.depth, 4);
        assert!(stats.nodes > 6);
        assert!(stats.leaves > 0);
    }

    #[test]
    fn test_node_limit_bounds_work() {
        let limited = SearchConfig::for_level(8).with_node_limit(50);
        let mut search = Minimax::new(limited);
        assert!(search.best_pit(&Board::new(6, 4), Player::Computer).is_some());
        // Past the budget every level on the current path still touches its
        // remaining siblings once.
        assert!(search.stats().nodes <= 50 + 8 * 6);
    }
}
