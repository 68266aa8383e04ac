//! Player identification and fixed two-player data storage.
//!
//! Every supported game has exactly two players, so per-player data lives in
//! a fixed-size [`PlayerPair`] rather than a growable map. Indexing is by
//! [`PlayerId`] for type safety.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of players in every supported game.
pub const NUM_PLAYERS: usize = 2;

/// Player identifier for a two-player game.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The opponent's ID.
    #[must_use]
    pub const fn other(self) -> PlayerId {
        PlayerId(1 - self.0)
    }

    /// Iterate over both player IDs in order.
    ///
    /// ```
    /// use equilearn::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::both().collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1)]);
    /// ```
    pub fn both() -> impl Iterator<Item = PlayerId> {
        (0..NUM_PLAYERS as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access, one entry per player.
///
/// ## Example
///
/// ```
/// use equilearn::core::{PlayerId, PlayerPair};
///
/// let mut rewards = PlayerPair::new(1.0, -2.0);
/// assert_eq!(rewards[PlayerId::new(1)], -2.0);
///
/// rewards[PlayerId::new(0)] = 0.5;
/// assert_eq!(rewards[PlayerId::new(0)], 0.5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerPair<T>([T; 2]);

impl<T> PlayerPair<T> {
    /// Create a pair from per-player values.
    #[must_use]
    pub const fn new(first: T, second: T) -> Self {
        Self([first, second])
    }

    /// Create a pair with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self([value.clone(), value])
    }

    /// Create a pair from a factory function.
    ///
    /// The factory is invoked for player 0 first, then player 1.
    pub fn from_fn(mut factory: impl FnMut(PlayerId) -> T) -> Self {
        Self([factory(PlayerId::new(0)), factory(PlayerId::new(1))])
    }

    /// Get a reference to one player's entry.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.0[player.index()]
    }

    /// Iterate over both entries in player order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }

    /// Map both entries to a new pair.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> PlayerPair<U> {
        PlayerPair([f(&self.0[0]), f(&self.0[1])])
    }
}

impl<T> Index<PlayerId> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &T {
        &self.0[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerPair<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.0[player.index()]
    }
}
