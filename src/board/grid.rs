//! The two-layer ownership grid.
//!
//! ## Layers
//!
//! - **Territory**: cells permanently owned by a player; only grows.
//! - **Trail**: cells temporarily marked by a player's current
//!   excursion outside territory; cleared when converted to territory.
//!
//! By rule construction a cell is never marked in both layers at once.
//! All accessors take positions already validated by the step
//! resolver's wall check; indexing out of bounds is an invariant
//! violation, not a runtime error.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerPair, Position};

/// Fixed-size, mutable two-layer ownership store over a W x H board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: i32,
    height: i32,
    territory: Vec<Option<PlayerId>>,
    trail: Vec<Option<PlayerId>>,
}

impl Grid {
    /// Create an empty grid.
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width > 0, "Grid width must be positive");
        assert!(height > 0, "Grid height must be positive");

        let cells = (width * height) as usize;
        Self {
            width,
            height,
            territory: vec![None; cells],
            trail: vec![None; cells],
        }
    }

    /// Board width in cells.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Board height in cells.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Whether `position` lies on the board.
    #[must_use]
    pub const fn in_bounds(&self, position: Position) -> bool {
        position.x >= 0 && position.x < self.width && position.y >= 0 && position.y < self.height
    }

    fn slot(&self, position: Position) -> usize {
        assert!(
            self.in_bounds(position),
            "Grid access out of bounds at {position}"
        );
        (position.x * self.height + position.y) as usize
    }

    /// Read territory ownership at a cell.
    #[must_use]
    pub fn territory_at(&self, position: Position) -> Option<PlayerId> {
        self.territory[self.slot(position)]
    }

    /// Mark a cell as `owner`'s territory.
    pub fn set_territory(&mut self, position: Position, owner: PlayerId) {
        let slot = self.slot(position);
        self.territory[slot] = Some(owner);
    }

    /// Read trail ownership at a cell.
    #[must_use]
    pub fn trail_at(&self, position: Position) -> Option<PlayerId> {
        self.trail[self.slot(position)]
    }

    /// Mark a cell as carrying `owner`'s trail.
    pub fn set_trail(&mut self, position: Position, owner: PlayerId) {
        let slot = self.slot(position);
        self.trail[slot] = Some(owner);
    }

    /// Clear any trail marking at a cell.
    pub fn clear_trail(&mut self, position: Position) {
        let slot = self.slot(position);
        self.trail[slot] = None;
    }

    /// Count territory cells owned by each player.
    ///
    /// Used for the area tie-break on head-on collisions and turn
    /// exhaustion.
    #[must_use]
    pub fn territory_counts(&self) -> PlayerPair<u32> {
        let mut counts = PlayerPair::with_value(0u32);
        for owner in self.territory.iter().flatten() {
            counts[*owner] += 1;
        }
        counts
    }

    /// Iterate every cell position on the board, column by column.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.width).flat_map(move |x| (0..self.height).map(move |y| Position::new(x, y)))
    }
}
