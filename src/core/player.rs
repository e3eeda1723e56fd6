//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Closed identifier for the two sides of a duel, reported externally
//! as player numbers 1 and 2.
//!
//! ## PlayerPair
//!
//! Per-player data storage backed by a fixed two-slot array for O(1)
//! access. Supports iteration and indexing by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Identifier for one of the two players in a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    /// Player 1, spawned on the left half of the board.
    One,
    /// Player 2, spawned on the right half of the board.
    Two,
}

impl PlayerId {
    /// Both players in turn order (player 1 acts first each turn).
    pub const BOTH: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    /// Get the other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Get the storage index (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    /// Get the external player number (1 or 2).
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Per-player data storage with O(1) access.
///
/// Backed by a two-element array with one entry per player.
/// Use `PlayerPair::new()` to create with a factory function,
/// `PlayerPair::with_value()` to initialize both entries to the same
/// value, or `PlayerPair::from_pair()` with explicit values.
///
/// ## Example
///
/// ```
/// use grid_duel::core::{PlayerId, PlayerPair};
///
/// let mut turns: PlayerPair<u32> = PlayerPair::with_value(100);
///
/// assert_eq!(turns[PlayerId::One], 100);
///
/// turns[PlayerId::Two] -= 1;
/// assert_eq!(turns[PlayerId::Two], 99);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    data: [T; 2],
}

impl<T> PlayerPair<T> {
    /// Create a new PlayerPair with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each slot.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::One), factory(PlayerId::Two)],
        }
    }

    /// Create a new PlayerPair from explicit values.
    #[must_use]
    pub fn from_pair(one: T, two: T) -> Self {
        Self { data: [one, two] }
    }

    /// Create a new PlayerPair with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a new PlayerPair with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Borrow one player's data mutably and the opponent's immutably.
    pub fn split_mut(&mut self, player: PlayerId) -> (&mut T, &T) {
        let [one, two] = &mut self.data;
        match player {
            PlayerId::One => (one, two),
            PlayerId::Two => (two, one),
        }
    }

    /// Iterate over (PlayerId, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::BOTH.iter().map(|&p| (p, self.get(p)))
    }
}

impl<T> Index<PlayerId> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerPair<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
