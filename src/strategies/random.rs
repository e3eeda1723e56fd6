//! Seeded random-walk strategy.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::core::PlayerId;
use crate::engine::Snapshot;
use crate::strategy::{Decision, Strategy, StrategyError};

/// Turns at random, biased toward going straight.
///
/// Deterministic for a given seed, so matches against it replay
/// exactly.
#[derive(Clone, Debug)]
pub struct RandomWalk {
    rng: ChaCha8Rng,
    turn_chance: f64,
}

impl RandomWalk {
    /// Create a walker from a seed, turning 30% of the time.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            turn_chance: 0.3,
        }
    }

    /// Set the probability of turning on a given half-turn.
    #[must_use]
    pub fn with_turn_chance(mut self, chance: f64) -> Self {
        self.turn_chance = chance;
        self
    }
}

impl Strategy for RandomWalk {
    fn decide(&mut self, _view: &Snapshot, _me: PlayerId) -> Result<Decision, StrategyError> {
        if self.rng.gen_bool(self.turn_chance) {
            if self.rng.gen_bool(0.5) {
                Ok(Decision::TurnLeft)
            } else {
                Ok(Decision::TurnRight)
            }
        } else {
            Ok(Decision::Straight)
        }
    }
}
