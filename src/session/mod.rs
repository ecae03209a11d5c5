//! Turn-tracking game session.
//!
//! `Session` is the API front ends use: it owns the configuration, tracks
//! whose turn it is and delegates moves to the rules engine and the
//! computer opponent.

mod game;

pub use game::{Phase, Session};
