//! Core engine types: players, boards, moves, configuration, errors, RNG.
//!
//! These are plain values. The rules that transform them live in `rules`.

pub mod player;
pub mod board;
pub mod config;
pub mod action;
pub mod error;
pub mod rng;

pub use player::{Player, PlayerMap};
pub use board::Board;
pub use config::{validate_level, GameConfig, DEFAULT_LEVEL};
pub use action::{board_number, split_board_number, BoardPos, MoveRecord};
pub use error::{ConfigError, IllegalMove, KalahError};
pub use rng::GameRng;
