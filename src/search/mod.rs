//! Computer opponent.
//!
//! ## Overview
//!
//! A depth-limited minimax search with alpha-beta pruning over boards
//! produced by the rules engine:
//!
//! - **Depth**: one ply per difficulty level, extra turns included
//! - **Evaluation**: computer store minus human store
//! - **Deterministic**: the lowest pit wins among equal values, so a
//!   board and depth always yield the same move
//!
//! ## Usage
//!
//! ```rust
//! use kalah::core::{Board, Player};
//! use kalah::search::{Minimax, SearchConfig};
//!
//! let mut search = Minimax::new(SearchConfig::for_level(3));
//! let choice = search.best_pit(&Board::new(6, 4), Player::Computer).unwrap();
//! assert!((1..=6).contains(&choice.pit));
//! println!("{}", search.stats());
//! ```

pub mod config;
pub mod minimax;
pub mod stats;

pub use config::SearchConfig;
pub use minimax::{best_pit, Minimax, SearchOutcome};
pub use stats::SearchStats;
