//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! Kalah is strictly two-player: the human and the computer.
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `Player`, used for rows and stores.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Human,
    Computer,
}

impl Player {
    /// Both players, human first.
    pub const ALL: [Player; 2] = [Player::Human, Player::Computer];

    /// The other player.
    ///
    /// ```
    /// use kalah::core::Player;
    ///
    /// assert_eq!(Player::Human.opposite(), Player::Computer);
    /// assert_eq!(Player::Human.opposite().opposite(), Player::Human);
    /// ```
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }

    /// Slot index inside a `PlayerMap`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::Human => 0,
            Player::Computer => 1,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Human => write!(f, "human"),
            Player::Computer => write!(f, "computer"),
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use kalah::core::{Player, PlayerMap};
///
/// let mut stores: PlayerMap<u32> = PlayerMap::with_value(0);
/// stores[Player::Computer] += 3;
///
/// assert_eq!(stores[Player::Human], 0);
/// assert_eq!(stores[Player::Computer], 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(Player) -> T) -> Self {
        Self {
            data: [factory(Player::Human), factory(Player::Computer)],
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (Player, &T) pairs, human first.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}
