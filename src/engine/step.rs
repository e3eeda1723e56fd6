//! The step resolver: one forward move and its consequences.
//!
//! `advance` applies a single forward move for one player and reports
//! whether the match ended. Checks run in a strict order; the first
//! match wins:
//!
//! 1. move one cell forward
//! 2. wall collision (mover loses)
//! 3. widen the mover's excursion rectangle
//! 4. trail collision (trail owner loses)
//! 5. player collision (perpendicular: mover wins; aligned: deferred)
//! 6. territory re-entry (retract trail, claim enclosures) or trail
//!    extension

use log::debug;

use crate::board::{enclosed_cells, Grid};

use super::outcome::{Cause, Terminal};
use super::player::PlayerState;

/// Apply one forward move for `mover`. Returns the terminal condition
/// if the step ended the match.
pub fn advance(grid: &mut Grid, mover: &mut PlayerState, other: &PlayerState) -> Option<Terminal> {
    let next = mover.position().stepped(mover.direction());
    mover.set_position(next);

    if !grid.in_bounds(next) {
        debug!("{} hit the wall at {next}", mover.id());
        return Some(Terminal::won_by(
            mover.id().opponent(),
            Cause::WallCollision,
        ));
    }

    mover.widen_bounds(next);

    if let Some(owner) = grid.trail_at(next) {
        debug!("{} ran into {owner}'s trail at {next}", mover.id());
        return Some(Terminal::won_by(owner.opponent(), Cause::TrailCollision).with_detail(owner));
    }

    if other.position() == next {
        return if mover.direction().crosses(other.direction()) {
            debug!("{} rammed {} from the side at {next}", mover.id(), other.id());
            Some(Terminal::won_by(mover.id(), Cause::SideCollision).with_detail(other.id()))
        } else {
            debug!("head-on collision at {next}");
            Some(Terminal::deferred(Cause::HeadOnCollision))
        };
    }

    if grid.territory_at(next) == Some(mover.id()) {
        if mover.on_excursion() {
            retract_trail(grid, mover);
            claim_enclosures(grid, mover);
        }
    } else {
        mover.push_trail(mover.direction());
        grid.set_trail(next, mover.id());
    }

    None
}

/// Convert the just-closed trail back into territory.
///
/// Walks backward from the cell before the re-entry point, popping one
/// recorded direction per trail cell until the stack is empty.
fn retract_trail(grid: &mut Grid, mover: &mut PlayerState) {
    let owner = mover.id();
    let mut cursor = mover.position().backed(mover.direction());

    while let Some(direction) = mover.pop_trail() {
        grid.clear_trail(cursor);
        grid.set_territory(cursor, owner);
        cursor = cursor.backed(direction);
    }
}

/// Claim every enclosed component inside the mover's rectangle.
///
/// Conversion also clears any trail marking on a claimed cell, so no
/// cell is ever owned in both layers at once.
fn claim_enclosures(grid: &mut Grid, mover: &PlayerState) {
    let bounds = mover.bounds();
    for cell in enclosed_cells(grid, &bounds, mover.id()) {
        grid.clear_trail(cell);
        grid.set_territory(cell, mover.id());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PlayerId, Position};

    /// Fresh 18x15 board with the default spawns: One at (4, 7), Two
    /// at (13, 7), both facing up.
    fn setup() -> (Grid, PlayerState, PlayerState) {
        let mut grid = Grid::new(18, 15);
        let one = PlayerState::spawn(PlayerId::One, Position::new(4, 7), &mut grid);
        let two = PlayerState::spawn(PlayerId::Two, Position::new(13, 7), &mut grid);
        (grid, one, two)
    }

    fn step_n(grid: &mut Grid, mover: &mut PlayerState, other: &PlayerState, n: usize) {
        for _ in 0..n {
            assert_eq!(advance(grid, mover, other), None);
        }
    }

    #[test]
    fn test_moves_inside_home_lay_no_trail() {
        let (mut grid, mut one, two) = setup();

        assert_eq!(advance(&mut grid, &mut one, &two), None);
        assert_eq!(one.position(), Position::new(4, 6));
        assert!(!one.on_excursion());
        assert_eq!(grid.territory_counts()[PlayerId::One], 9);
    }

    #[test]
    fn test_leaving_home_starts_trail() {
        let (mut grid, mut one, two) = setup();

        step_n(&mut grid, &mut one, &two, 2);

        assert_eq!(one.position(), Position::new(4, 5));
        assert!(one.on_excursion());
        assert_eq!(one.trail_len(), 1);
        assert_eq!(grid.trail_at(Position::new(4, 5)), Some(PlayerId::One));
        // Territory unchanged while the trail is open.
        assert_eq!(grid.territory_counts()[PlayerId::One], 9);
    }

    #[test]
    fn test_wall_collision_loses_for_mover() {
        let (mut grid, mut one, two) = setup();

        // Face left and march off the x = 0 edge.
        one.turn_left();
        step_n(&mut grid, &mut one, &two, 4);

        let terminal = advance(&mut grid, &mut one, &two);
        assert_eq!(
            terminal,
            Some(Terminal::won_by(PlayerId::Two, Cause::WallCollision))
        );
        assert_eq!(one.position(), Position::new(-1, 7));
    }

    #[test]
    fn test_wall_collision_on_every_edge() {
        for (facing_turns, steps) in [
            (0usize, 8usize), // up: y 7 -> -1
            (2, 8),           // down: y 7 -> 15
            (1, 5),           // left: x 4 -> -1
        ] {
            let (mut grid, mut one, two) = setup();
            for _ in 0..facing_turns {
                one.turn_left();
            }
            step_n(&mut grid, &mut one, &two, steps - 1);
            let terminal = advance(&mut grid, &mut one, &two);
            assert_eq!(
                terminal,
                Some(Terminal::won_by(PlayerId::Two, Cause::WallCollision))
            );
        }

        // Right edge, from Two's side so the run is short.
        let (mut grid, one, mut two) = setup();
        two.turn_right();
        step_n(&mut grid, &mut two, &one, 4);
        let terminal = advance(&mut grid, &mut two, &one);
        assert_eq!(
            terminal,
            Some(Terminal::won_by(PlayerId::One, Cause::WallCollision))
        );
    }

    #[test]
    fn test_own_trail_collision_loses_for_owner() {
        let (mut grid, mut one, two) = setup();

        // Up twice onto (4, 5), then a tight clockwise curl back into
        // the cell just laid.
        step_n(&mut grid, &mut one, &two, 3); // (4,6) (4,5) (4,4)
        one.turn_right();
        step_n(&mut grid, &mut one, &two, 1); // (5,4)
        one.turn_right();
        step_n(&mut grid, &mut one, &two, 1); // (5,5)
        one.turn_right();

        // Moving left onto (4,5), which carries One's own trail.
        let terminal = advance(&mut grid, &mut one, &two);
        assert_eq!(
            terminal,
            Some(
                Terminal::won_by(PlayerId::Two, Cause::TrailCollision)
                    .with_detail(PlayerId::One)
            )
        );
    }

    #[test]
    fn test_retraction_converts_trail_cells() {
        let (mut grid, mut one, two) = setup();

        // Out two cells, sidestep, and straight back home:
        // (4,6) (4,5) -> right (5,5) -> down (5,6).
        step_n(&mut grid, &mut one, &two, 2);
        one.turn_right();
        step_n(&mut grid, &mut one, &two, 1);
        one.turn_right();
        assert_eq!(advance(&mut grid, &mut one, &two), None);

        assert!(!one.on_excursion());
        assert_eq!(grid.territory_at(Position::new(4, 5)), Some(PlayerId::One));
        assert_eq!(grid.territory_at(Position::new(5, 5)), Some(PlayerId::One));
        assert_eq!(grid.trail_at(Position::new(4, 5)), None);
        assert_eq!(grid.trail_at(Position::new(5, 5)), None);
        assert_eq!(grid.territory_counts()[PlayerId::One], 11);
    }

    #[test]
    fn test_closed_loop_claims_interior() {
        let (mut grid, mut one, two) = setup();

        // A rectangular loop around (5, 5): up to (4,4), right to
        // (6,4), down to (6,6), left back into home at (5,6).
        step_n(&mut grid, &mut one, &two, 3); // (4,6) (4,5) (4,4)
        one.turn_right();
        step_n(&mut grid, &mut one, &two, 2); // (5,4) (6,4)
        one.turn_right();
        step_n(&mut grid, &mut one, &two, 2); // (6,5) (6,6)
        one.turn_right();
        assert_eq!(advance(&mut grid, &mut one, &two), None); // (5,6)

        assert!(!one.on_excursion());
        // Interior cell claimed by the flood-fill.
        assert_eq!(grid.territory_at(Position::new(5, 5)), Some(PlayerId::One));
        assert_eq!(grid.trail_at(Position::new(5, 5)), None);
        // 9 spawn + 6 trail cells + 1 interior.
        assert_eq!(grid.territory_counts()[PlayerId::One], 16);
        // Cells outside the loop stay unowned.
        assert_eq!(grid.territory_at(Position::new(6, 3)), None);
    }

    #[test]
    fn test_side_collision_mover_wins() {
        let (mut grid, mut one, mut two) = setup();

        // One steps to (4,6) facing up, inside home, trail-free. Two
        // approaches that cell along row 6 moving left: perpendicular
        // axes, so the mover wins the exchange.
        assert_eq!(advance(&mut grid, &mut one, &two), None);
        two.turn_left();
        two.set_position(Position::new(5, 6));

        let terminal = advance(&mut grid, &mut two, &one);
        assert_eq!(
            terminal,
            Some(Terminal::won_by(PlayerId::Two, Cause::SideCollision).with_detail(PlayerId::One))
        );
    }

    #[test]
    fn test_head_on_collision_is_deferred() {
        let (mut grid, mut one, mut two) = setup();

        // One parks at (4,6) facing up; Two drops onto (4,5) facing
        // down and steps into One's cell head-on.
        assert_eq!(advance(&mut grid, &mut one, &two), None);
        two.turn_left();
        two.turn_left(); // facing down
        two.set_position(Position::new(4, 5));

        let terminal = advance(&mut grid, &mut two, &one);
        assert_eq!(terminal, Some(Terminal::deferred(Cause::HeadOnCollision)));
    }

    #[test]
    fn test_opponent_territory_extends_trail() {
        let (mut grid, mut one, two) = setup();

        // March right across the board into Two's home: trail is laid
        // on Two's territory like anywhere else outside One's own.
        one.turn_right();
        step_n(&mut grid, &mut one, &two, 8); // (5,7)..(12,7)

        assert_eq!(one.position(), Position::new(12, 7));
        assert_eq!(grid.trail_at(Position::new(12, 7)), Some(PlayerId::One));
        assert_eq!(grid.territory_at(Position::new(12, 7)), Some(PlayerId::Two));
        assert_eq!(one.trail_len(), 7);
    }
}
