//! Kalah rules engine.
//!
//! - Legal moves for a board
//! - How a move transforms a board
//! - When the game ends and who won
//!
//! Everything here is a pure function of its inputs.

pub mod engine;
pub mod playout;

pub use engine::{apply_move, legal_pits, validate_move, GameResult, LegalPits, MoveOutcome};
pub use playout::{perft, random_playout, Playout};
