//! Per-player kinematic and trail-accounting state.
//!
//! A player has a position, a facing direction, the bounding rectangle
//! of its current excursion, and the trail-direction stack: the ordered
//! directions taken since it last left owned territory. The stack is
//! non-empty exactly while the player stands on a cell it does not own,
//! and it is what the step resolver retraces to convert a closed trail
//! into territory.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::Grid;
use crate::core::{Bounds, Direction, PlayerId, Position};

/// Inline capacity covers short excursions; long loops spill to heap.
type TrailStack = SmallVec<[Direction; 16]>;

/// One player's public, observable information.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInfo {
    pub id: PlayerId,
    pub position: Position,
    pub direction: Direction,
}

/// One player's full kinematic state.
#[derive(Clone, Debug)]
pub struct PlayerState {
    id: PlayerId,
    position: Position,
    direction: Direction,
    bounds: Bounds,
    trail: TrailStack,
}

impl PlayerState {
    /// Spawn a player facing up, claiming the 3x3 starting territory
    /// centered on `position` (clamped to the board).
    pub fn spawn(id: PlayerId, position: Position, grid: &mut Grid) -> Self {
        let bounds = Bounds::around(position, 1, grid.width(), grid.height());
        for cell in bounds.cells() {
            grid.set_territory(cell, id);
        }

        Self {
            id,
            position,
            direction: Direction::Up,
            bounds,
            trail: TrailStack::new(),
        }
    }

    /// This player's id.
    #[must_use]
    pub const fn id(&self) -> PlayerId {
        self.id
    }

    /// Current position.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Current facing direction.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// The excursion bounding rectangle.
    #[must_use]
    pub const fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Whether the player is currently laying trail.
    #[must_use]
    pub fn on_excursion(&self) -> bool {
        !self.trail.is_empty()
    }

    /// Number of trail cells laid in the current excursion.
    #[must_use]
    pub fn trail_len(&self) -> usize {
        self.trail.len()
    }

    /// The directions taken since leaving owned territory, oldest first.
    #[must_use]
    pub fn trail_route(&self) -> Vec<Direction> {
        self.trail.to_vec()
    }

    /// Rotate one step counter-clockwise.
    pub fn turn_left(&mut self) {
        self.direction = self.direction.turned_left();
    }

    /// Rotate one step clockwise.
    pub fn turn_right(&mut self) {
        self.direction = self.direction.turned_right();
    }

    /// Public-info projection for snapshots.
    #[must_use]
    pub fn info(&self) -> PlayerInfo {
        PlayerInfo {
            id: self.id,
            position: self.position,
            direction: self.direction,
        }
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub(crate) fn widen_bounds(&mut self, position: Position) {
        self.bounds.widen(position);
    }

    pub(crate) fn push_trail(&mut self, direction: Direction) {
        self.trail.push(direction);
    }

    pub(crate) fn pop_trail(&mut self) -> Option<Direction> {
        self.trail.pop()
    }
}
