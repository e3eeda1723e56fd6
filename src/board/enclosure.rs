//! Enclosure detection over an excursion's bounding rectangle.
//!
//! When a player closes a trail loop, every cell inside the bounding
//! rectangle that the player does not own is assigned to exactly one
//! 4-connected component. A component touching the rectangle edge is
//! "open" (it connects to the region outside the excursion); the rest
//! are "enclosed" and get claimed.
//!
//! The rectangle-edge test is a sound stand-in for reaching the
//! unbounded exterior: the rectangle tightly bounds the excursion, and
//! the wall check ends the match before a trail could leave the board.

use std::collections::VecDeque;

use log::trace;
use rustc_hash::FxHashSet;

use crate::core::{Bounds, Direction, PlayerId, Position};

use super::grid::Grid;

/// Collect every cell of every enclosed component inside `bounds`.
///
/// Pure with respect to the grid: classification over a frozen snapshot
/// yields the same partition every time. Cells are returned in
/// discovery order; callers convert them to `owner`'s territory.
#[must_use]
pub fn enclosed_cells(grid: &Grid, bounds: &Bounds, owner: PlayerId) -> Vec<Position> {
    let mut visited: FxHashSet<Position> = FxHashSet::default();
    let mut claimed = Vec::new();

    for start in bounds.cells() {
        if visited.contains(&start) || grid.territory_at(start) == Some(owner) {
            continue;
        }

        // Flood one component from an explicit worklist.
        let mut queue = VecDeque::from([start]);
        visited.insert(start);
        let mut component = Vec::new();
        let mut open = false;

        while let Some(cell) = queue.pop_front() {
            if bounds.on_edge(cell) {
                open = true;
            }
            component.push(cell);

            for dir in Direction::ALL {
                let next = cell.stepped(dir);
                if bounds.contains(next)
                    && grid.territory_at(next) != Some(owner)
                    && visited.insert(next)
                {
                    queue.push_back(next);
                }
            }
        }

        if !open {
            claimed.extend(component);
        }
    }

    if !claimed.is_empty() {
        trace!("{} cells enclosed for {}", claimed.len(), owner);
    }
    claimed
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Board with a ring of One's territory around a single hole at
    /// (2, 2), inside a [1, 3] x [1, 3] rectangle.
    fn ring_grid() -> (Grid, Bounds) {
        let mut grid = Grid::new(6, 6);
        let bounds = Bounds::new(1, 3, 1, 3);
        for cell in bounds.cells() {
            if cell != Position::new(2, 2) {
                grid.set_territory(cell, PlayerId::One);
            }
        }
        (grid, bounds)
    }

    #[test]
    fn test_hole_inside_ring_is_enclosed() {
        let (grid, bounds) = ring_grid();

        let claimed = enclosed_cells(&grid, &bounds, PlayerId::One);
        assert_eq!(claimed, vec![Position::new(2, 2)]);
    }

    #[test]
    fn test_edge_component_is_open() {
        let mut grid = Grid::new(6, 6);
        let bounds = Bounds::new(0, 3, 0, 3);

        // Only the interior 2x2 is owned; the unowned border cells all
        // touch the rectangle edge and form one open component.
        for cell in Bounds::new(1, 2, 1, 2).cells() {
            grid.set_territory(cell, PlayerId::One);
        }

        assert!(enclosed_cells(&grid, &bounds, PlayerId::One).is_empty());
    }

    #[test]
    fn test_opponent_cells_count_as_unowned() {
        let (mut grid, bounds) = ring_grid();
        grid.set_territory(Position::new(2, 2), PlayerId::Two);

        // The hole now belongs to Two, but it is still "not One's" and
        // still enclosed from One's point of view.
        let claimed = enclosed_cells(&grid, &bounds, PlayerId::One);
        assert_eq!(claimed, vec![Position::new(2, 2)]);
    }

    #[test]
    fn test_multiple_components_classified_independently() {
        let mut grid = Grid::new(8, 5);
        let bounds = Bounds::new(0, 6, 0, 4);

        // Own everything except two separate holes and one edge notch.
        for cell in bounds.cells() {
            grid.set_territory(cell, PlayerId::One);
        }
        let hole_a = Position::new(2, 2);
        let hole_b = Position::new(4, 1);
        let notch = Position::new(6, 2);
        for p in [hole_a, hole_b, notch] {
            grid.set_territory(p, PlayerId::Two);
        }

        let claimed = enclosed_cells(&grid, &bounds, PlayerId::One);
        assert_eq!(claimed.len(), 2);
        assert!(claimed.contains(&hole_a));
        assert!(claimed.contains(&hole_b));
        assert!(!claimed.contains(&notch));
    }

    #[test]
    fn test_classification_is_idempotent() {
        let (grid, bounds) = ring_grid();

        let first = enclosed_cells(&grid, &bounds, PlayerId::One);
        let second = enclosed_cells(&grid, &bounds, PlayerId::One);
        assert_eq!(first, second);
    }

    #[test]
    fn test_fully_owned_rectangle_claims_nothing() {
        let mut grid = Grid::new(4, 4);
        let bounds = Bounds::new(0, 3, 0, 3);
        for cell in bounds.cells() {
            grid.set_territory(cell, PlayerId::Two);
        }

        assert!(enclosed_cells(&grid, &bounds, PlayerId::Two).is_empty());
    }
}
