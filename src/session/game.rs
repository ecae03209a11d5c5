//! The game in progress: board, turn and configuration.

use im::Vector;
use log::debug;

use crate::core::{
    split_board_number, validate_level, Board, BoardPos, ConfigError, GameConfig, IllegalMove,
    KalahError, MoveRecord, Player,
};
use crate::rules::{apply_move, GameResult, MoveOutcome};
use crate::search::{Minimax, SearchConfig};

/// Where the game stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for this player to choose a pit.
    AwaitingMove(Player),
    /// Finished with this result.
    GameOver(GameResult),
}

/// One game of Kalah.
///
/// Every accepted move yields a new `Session`; the old one is left as it
/// was. Boards and history are persistent, so this is cheap.
///
/// Pits are addressed by board number: the human's pits are `1..=n`, the
/// computer's `n+1..=2n`.
///
/// ```
/// use kalah::core::{GameConfig, Player};
/// use kalah::session::Session;
///
/// let game = Session::new(GameConfig::new(6, 4)).unwrap();
/// let game = game.play(3).unwrap();
///
/// // The last seed landed in the human's store: extra turn.
/// assert_eq!(game.next(), Player::Human);
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    config: GameConfig,
    board: Board,
    phase: Phase,
    last_move: Option<MoveRecord>,
    history: Vector<MoveRecord>,
}

impl Session {
    /// Start a game. Fails if the configuration cannot be played.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::start(config))
    }

    /// Start a game from an already validated configuration.
    fn start(config: GameConfig) -> Self {
        let board = Board::new(config.pits_per_player, config.seeds_per_pit);
        let phase = if board.is_terminal() {
            Phase::GameOver(GameResult::from_stores(&board))
        } else {
            Phase::AwaitingMove(config.opening_player)
        };
        Self {
            config,
            board,
            phase,
            last_move: None,
            history: Vector::new(),
        }
    }

    /// A fresh game of the same size and level, opened by the other player.
    #[must_use]
    pub fn switched(&self) -> Self {
        let opening = self.config.opening_player.opposite();
        Self::start(self.config.clone().with_opening_player(opening))
    }

    /// A fresh game with a new board size, keeping opening player and level.
    pub fn renewed(&self, pits_per_player: usize, seeds_per_pit: u32) -> Result<Self, ConfigError> {
        Self::new(
            self.config
                .clone()
                .with_pits(pits_per_player)
                .with_seeds(seeds_per_pit),
        )
    }

    // === Moves ===

    /// Play a pit (board number) for the player whose turn it is.
    ///
    /// On failure nothing changes and the reason is returned.
    pub fn play(&self, pit: usize) -> Result<Self, KalahError> {
        let Phase::AwaitingMove(mover) = self.phase else {
            return Err(IllegalMove::GameOver.into());
        };
        let n = self.config.pits_per_player;
        let (owner, index) = split_board_number(pit, n)
            .ok_or(IllegalMove::OutOfRange { pit, max: 2 * n })?;
        if owner != mover {
            return Err(IllegalMove::NotOwned { pit, owner }.into());
        }
        let outcome = apply_move(&self.board, mover, index)?;
        Ok(self.advance(outcome))
    }

    /// Let the computer choose and play its move.
    ///
    /// Only valid while the computer is to move.
    ///
    /// # Panics
    ///
    /// If search finds no legal pit on a running game. The rules end the
    /// game as soon as a row is empty, so this cannot happen.
    pub fn machine_move(&self) -> Result<Self, KalahError> {
        match self.phase {
            Phase::GameOver(_) => return Err(IllegalMove::GameOver.into()),
            Phase::AwaitingMove(Player::Human) => {
                return Err(KalahError::WrongTurn {
                    expected: Player::Computer,
                    actual: Player::Human,
                })
            }
            Phase::AwaitingMove(Player::Computer) => {}
        }

        let mut search = Minimax::new(SearchConfig::for_level(self.config.level));
        let Some(choice) = search.best_pit(&self.board, Player::Computer) else {
            panic!("computer has no legal move on a running game:\n{}", self.board);
        };
        match apply_move(&self.board, Player::Computer, choice.pit) {
            Ok(outcome) => Ok(self.advance(outcome)),
            Err(err) => panic!("search chose pit {} which the rules reject: {err}", choice.pit),
        }
    }

    fn advance(&self, outcome: MoveOutcome) -> Self {
        let record = outcome.record;
        let phase = match (outcome.result, record.extra_turn) {
            (Some(result), _) => Phase::GameOver(result),
            (None, true) => Phase::AwaitingMove(record.player),
            (None, false) => Phase::AwaitingMove(record.player.opposite()),
        };
        debug!(
            "{} played pit {}, now {:?}",
            record.player,
            record.source_number(self.config.pits_per_player),
            phase
        );

        let mut history = self.history.clone();
        history.push_back(record.clone());
        Self {
            config: self.config.clone(),
            board: outcome.board,
            phase,
            last_move: Some(record),
            history,
        }
    }

    // === Configuration ===

    /// Change the computer's strength. Applies from its next move.
    pub fn set_level(&mut self, level: u32) -> Result<(), ConfigError> {
        validate_level(level)?;
        self.config.level = level;
        Ok(())
    }

    // === Queries ===

    /// Player to move. After the game ended, the player who moved last.
    #[must_use]
    pub fn next(&self) -> Player {
        match self.phase {
            Phase::AwaitingMove(player) => player,
            Phase::GameOver(_) => self
                .last_move
                .as_ref()
                .map_or(self.config.opening_player, |m| m.player),
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }

    /// Result of a finished game, `None` while it is running.
    #[must_use]
    pub fn winner(&self) -> Option<GameResult> {
        match self.phase {
            Phase::GameOver(result) => Some(result),
            Phase::AwaitingMove(_) => None,
        }
    }

    /// Seeds in a player's store. Final score once the game is over.
    #[must_use]
    pub fn seeds_of_player(&self, player: Player) -> u32 {
        self.board.store(player)
    }

    #[must_use]
    pub fn pits_per_player(&self) -> usize {
        self.config.pits_per_player
    }

    #[must_use]
    pub fn seeds_per_pit(&self) -> u32 {
        self.config.seeds_per_pit
    }

    #[must_use]
    pub fn opening_player(&self) -> Player {
        self.config.opening_player
    }

    #[must_use]
    pub fn level(&self) -> u32 {
        self.config.level
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Every move of this game in order.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Board number of the pit the last move started from.
    #[must_use]
    pub fn source_pit_of_last_move(&self) -> Option<usize> {
        self.last_move
            .as_ref()
            .map(|m| m.source_number(self.config.pits_per_player))
    }

    /// Slot where the last seed of the last move landed.
    #[must_use]
    pub fn target_pit_of_last_move(&self) -> Option<BoardPos> {
        self.last_move.as_ref().map(|m| m.target)
    }
}

impl std::fmt::Display for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.board)
    }
}
