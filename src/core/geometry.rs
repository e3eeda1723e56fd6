//! Board geometry: cell positions and bounding rectangles.
//!
//! Coordinates are signed so that a step off the board edge is
//! representable; the step resolver rejects such a position with a wall
//! collision before any grid access happens.

use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// A cell position on (or one step beyond) the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Create a position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The position one step forward in `direction`.
    #[must_use]
    pub const fn stepped(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The position one step backward against `direction`.
    ///
    /// Used to retrace a trail from the directions that laid it.
    #[must_use]
    pub const fn backed(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self {
            x: self.x - dx,
            y: self.y - dy,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An axis-aligned rectangle of cells, inclusive on all four sides.
///
/// Tracks a player's out-of-territory excursion: initialized to the
/// clamped 3x3 spawn box and only ever widened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl Bounds {
    /// Create a rectangle from inclusive extents.
    #[must_use]
    pub const fn new(min_x: i32, max_x: i32, min_y: i32, max_y: i32) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// The box of cells within `radius` of `center`, clamped to a
    /// `width` x `height` board.
    #[must_use]
    pub fn around(center: Position, radius: i32, width: i32, height: i32) -> Self {
        Self {
            min_x: (center.x - radius).max(0),
            max_x: (center.x + radius).min(width - 1),
            min_y: (center.y - radius).max(0),
            max_y: (center.y + radius).min(height - 1),
        }
    }

    /// Widen the rectangle to include `position`.
    pub fn widen(&mut self, position: Position) {
        self.min_x = self.min_x.min(position.x);
        self.max_x = self.max_x.max(position.x);
        self.min_y = self.min_y.min(position.y);
        self.max_y = self.max_y.max(position.y);
    }

    /// Whether `position` lies inside the rectangle.
    #[must_use]
    pub const fn contains(&self, position: Position) -> bool {
        position.x >= self.min_x
            && position.x <= self.max_x
            && position.y >= self.min_y
            && position.y <= self.max_y
    }

    /// Whether `position` touches any of the four rectangle edges.
    ///
    /// An enclosure component containing such a cell is open: it
    /// connects to the region outside the excursion.
    #[must_use]
    pub const fn on_edge(&self, position: Position) -> bool {
        position.x == self.min_x
            || position.x == self.max_x
            || position.y == self.min_y
            || position.y == self.max_y
    }

    /// Iterate every cell of the rectangle, column by column.
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (self.min_x..=self.max_x)
            .flat_map(move |x| (self.min_y..=self.max_y).map(move |y| Position::new(x, y)))
    }
}
