//! Game configuration.
//!
//! A `GameConfig` fixes the board size, the starting seeds, who opens and
//! how strong the computer plays. Negative sizes are unrepresentable; the
//! remaining constraints are checked by `validate`.

use serde::{Deserialize, Serialize};

use super::board::starting_total;
use super::error::ConfigError;
use super::player::Player;

/// Level used when no previous game provides one.
pub const DEFAULT_LEVEL: u32 = 3;

/// Configuration of a single game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Playing pits on each side (at least 1).
    pub pits_per_player: usize,

    /// Seeds initially placed in every pit. Zero is accepted and yields a
    /// game that is over before it starts.
    pub seeds_per_pit: u32,

    /// Player making the first move.
    pub opening_player: Player,

    /// Difficulty of the computer opponent (at least 1).
    pub level: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pits_per_player: 6,
            seeds_per_pit: 4,
            opening_player: Player::Human,
            level: DEFAULT_LEVEL,
        }
    }
}

impl GameConfig {
    /// Create a configuration with the given board size and default
    /// opening player and level.
    #[must_use]
    pub fn new(pits_per_player: usize, seeds_per_pit: u32) -> Self {
        Self {
            pits_per_player,
            seeds_per_pit,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_pits(mut self, pits_per_player: usize) -> Self {
        self.pits_per_player = pits_per_player;
        self
    }

    #[must_use]
    pub fn with_seeds(mut self, seeds_per_pit: u32) -> Self {
        self.seeds_per_pit = seeds_per_pit;
        self
    }

    #[must_use]
    pub fn with_opening_player(mut self, player: Player) -> Self {
        self.opening_player = player;
        self
    }

    #[must_use]
    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    /// Check that a game can be built from this configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pits_per_player == 0 {
            return Err(ConfigError::NoPits);
        }
        if self.total_seeds().is_none() {
            return Err(ConfigError::TooManySeeds {
                pits: self.pits_per_player,
                seeds: u64::from(self.seeds_per_pit),
            });
        }
        validate_level(self.level)
    }

    /// Total seeds on the board for the whole game, `None` if the count
    /// does not fit a `u32`.
    #[must_use]
    pub fn total_seeds(&self) -> Option<u32> {
        starting_total(self.pits_per_player, self.seeds_per_pit)
    }
}

/// Check a difficulty level on its own, e.g. before `Session::set_level`.
pub fn validate_level(level: u32) -> Result<(), ConfigError> {
    if level == 0 {
        Err(ConfigError::Level(level))
    } else {
        Ok(())
    }
}
