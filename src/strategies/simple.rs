//! Deterministic baseline strategies.

use crate::core::PlayerId;
use crate::engine::Snapshot;
use crate::strategy::{Decision, Strategy, StrategyError};

/// Never turns. Ends every match on the wall unless something else
/// happens first; useful as the simplest possible opponent.
#[derive(Clone, Copy, Debug, Default)]
pub struct StraightAhead;

impl Strategy for StraightAhead {
    fn decide(&mut self, _view: &Snapshot, _me: PlayerId) -> Result<Decision, StrategyError> {
        Ok(Decision::Straight)
    }
}

/// Steers away from walls and trails.
///
/// Prefers straight, then a left turn, then a right turn, taking the
/// first option whose next cell is on the board and trail-free. Blind
/// to the opponent's position, so it can still lose every way except
/// by wall.
#[derive(Clone, Copy, Debug, Default)]
pub struct WallDodger;

impl Strategy for WallDodger {
    fn decide(&mut self, view: &Snapshot, me: PlayerId) -> Result<Decision, StrategyError> {
        let info = view.me(me);

        let options = [
            (Decision::Straight, info.direction),
            (Decision::TurnLeft, info.direction.turned_left()),
            (Decision::TurnRight, info.direction.turned_right()),
        ];

        for (decision, direction) in options {
            let next = info.position.stepped(direction);
            if view.board.in_bounds(next) && view.board.trail_at(next).is_none() {
                return Ok(decision);
            }
        }

        // Boxed in; any move loses.
        Ok(Decision::Straight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Match, MatchConfig};

    #[test]
    fn test_straight_ahead_never_turns() {
        let game = Match::new(MatchConfig::default());
        let view = game.snapshot();

        let mut strategy = StraightAhead;
        assert_eq!(
            strategy.decide(&view, PlayerId::One),
            Ok(Decision::Straight)
        );
    }

    #[test]
    fn test_dodger_goes_straight_in_the_open() {
        let game = Match::new(MatchConfig::default());
        let view = game.snapshot();

        let mut dodger = WallDodger;
        assert_eq!(dodger.decide(&view, PlayerId::One), Ok(Decision::Straight));
    }

    #[test]
    fn test_dodger_turns_at_the_wall() {
        let mut game = Match::new(MatchConfig::default());
        let mut dodger = WallDodger;

        // Drive One up to the top edge; the dodger must never die on
        // the wall, so the match outlives the straight-line distance.
        for _ in 0..7 {
            assert_eq!(game.step(PlayerId::One, &mut dodger), None);
        }
        let pos = game.player(PlayerId::One).position();
        assert_eq!(pos.y, 0);

        assert_eq!(game.step(PlayerId::One, &mut dodger), None);
        let pos = game.player(PlayerId::One).position();
        assert!(pos.y >= 0, "dodger stayed on the board");
    }
}
