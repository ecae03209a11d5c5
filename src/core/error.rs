//! Error types surfaced to front ends.
//!
//! Every recoverable failure leaves the game untouched and carries a
//! human-readable reason through `Display`.

use super::player::Player;

/// A move the rules do not allow.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMove {
    #[error("pit {pit} does not exist, choose a pit between 1 and {max}")]
    OutOfRange { pit: usize, max: usize },

    #[error("seeds cannot be taken out of a store")]
    Store,

    #[error("pit {0} is empty")]
    EmptyPit(usize),

    #[error("pit {pit} belongs to the {owner}")]
    NotOwned { pit: usize, owner: Player },

    #[error("the game is already over")]
    GameOver,
}

/// A game configuration that cannot be played.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("a game needs at least one pit per player")]
    NoPits,

    #[error("level must be greater than 0, got {0}")]
    Level(u32),

    #[error("{pits} pits per player with {seeds} seeds each exceed the largest seed total of 4294967295")]
    TooManySeeds { pits: usize, seeds: u64 },
}

/// Any recoverable engine failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum KalahError {
    #[error(transparent)]
    IllegalMove(#[from] IllegalMove),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("it is the {actual}'s turn, not the {expected}'s")]
    WrongTurn { expected: Player, actual: Player },
}
