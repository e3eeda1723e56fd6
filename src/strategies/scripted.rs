//! Fixed-script strategy.

use crate::core::PlayerId;
use crate::engine::Snapshot;
use crate::strategy::{Decision, Strategy, StrategyError};

/// Plays a fixed sequence of decisions, then goes straight forever.
///
/// The workhorse for choreographed scenarios: the script pins every
/// half-turn, so board states are exactly reproducible.
#[derive(Clone, Debug)]
pub struct Scripted {
    script: Vec<Decision>,
    cursor: usize,
}

impl Scripted {
    /// Create a strategy from a decision sequence.
    pub fn new(script: impl Into<Vec<Decision>>) -> Self {
        Self {
            script: script.into(),
            cursor: 0,
        }
    }

    /// How many scripted decisions have been consumed.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl Strategy for Scripted {
    fn decide(&mut self, _view: &Snapshot, _me: PlayerId) -> Result<Decision, StrategyError> {
        let decision = self
            .script
            .get(self.cursor)
            .copied()
            .unwrap_or(Decision::Straight);
        self.cursor += 1;
        Ok(decision)
    }
}
