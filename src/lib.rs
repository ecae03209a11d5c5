//! # kalah
//!
//! A Mancala/Kalah engine with a computer opponent of adjustable strength.
//!
//! ## Design Principles
//!
//! 1. **Immutable Boards**: A move never changes a board; it returns a new
//!    one. Rows are `im` persistent vectors, so this costs O(1) clones.
//!
//! 2. **Validation Before Mutation**: Illegal moves and configurations are
//!    rejected with a reason before anything changes.
//!
//! 3. **Deterministic Opponent**: The same board and level always produce
//!    the same computer move.
//!
//! ## Modules
//!
//! - `core`: Players, boards, move records, configuration, errors, RNG
//! - `rules`: Sowing, capture, extra turns, termination; playouts
//! - `session`: Turn-tracking game state machine used by front ends
//! - `search`: Alpha-beta minimax for the computer's moves
//! - `shell`: Textual command interface
//!
//! ## Example
//!
//! ```
//! use kalah::{GameConfig, Player, Session};
//!
//! let game = Session::new(GameConfig::new(6, 4)).unwrap();
//! let game = game.play(1).unwrap();
//! assert_eq!(game.next(), Player::Computer);
//!
//! let game = game.machine_move().unwrap();
//! assert!(game.source_pit_of_last_move().unwrap() > 6);
//! ```

pub mod core;
pub mod rules;
pub mod session;
pub mod search;
pub mod shell;

// Re-export commonly used types
pub use crate::core::{
    Board, BoardPos, ConfigError, GameConfig, IllegalMove, KalahError, MoveRecord, Player,
    PlayerMap,
};

pub use crate::rules::{apply_move, legal_pits, GameResult, MoveOutcome};

pub use crate::session::{Phase, Session};

pub use crate::search::{Minimax, SearchConfig, SearchOutcome, SearchStats};
