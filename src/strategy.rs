//! The external strategy contract.
//!
//! A strategy is called once per half-turn with a read-only snapshot of
//! the match and must return a steering decision. The strategy value
//! itself is its private, per-match scratch storage: one instance is
//! created per match, `decide` takes `&mut self`, and the engine never
//! inspects its contents.
//!
//! A failed call, or a textual command that does not decode to a
//! decision, forfeits the match for the caller.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::engine::Snapshot;

/// Steering decision returned by a strategy each half-turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    /// Rotate one step counter-clockwise before moving.
    TurnLeft,
    /// Rotate one step clockwise before moving.
    TurnRight,
    /// Keep the current facing.
    Straight,
}

impl Decision {
    /// Decode a textual steering command.
    ///
    /// The empty string means "no turn"; otherwise the leading
    /// character selects the turn: `l`/`L` for left, `r`/`R` for
    /// right. Anything else is an invalid command, which forfeits the
    /// match exactly like a failed call.
    pub fn parse(command: &str) -> Result<Decision, StrategyError> {
        let Some(first) = command.chars().next() else {
            return Ok(Decision::Straight);
        };
        match first.to_ascii_uppercase() {
            'L' => Ok(Decision::TurnLeft),
            'R' => Ok(Decision::TurnRight),
            _ => Err(StrategyError::new(format!(
                "invalid steering command {command:?}"
            ))),
        }
    }
}

/// Failure raised by a strategy call.
///
/// Any error forfeits the match for the strategy that produced it; the
/// message is carried into the match outcome for diagnostics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StrategyError {
    message: String,
}

impl StrategyError {
    /// Create an error with the given diagnostic message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The diagnostic message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for StrategyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "strategy failed: {}", self.message)
    }
}

impl std::error::Error for StrategyError {}

/// A pluggable match strategy.
///
/// `view` is a read-only snapshot of the whole match; `me` identifies
/// the side this call decides for (the opponent is `me.opponent()`).
pub trait Strategy {
    /// Choose a steering decision for the upcoming forward move.
    fn decide(&mut self, view: &Snapshot, me: PlayerId) -> Result<Decision, StrategyError>;
}

/// Plain closures work as strategies; captured state is the scratch
/// storage.
impl<F> Strategy for F
where
    F: FnMut(&Snapshot, PlayerId) -> Result<Decision, StrategyError>,
{
    fn decide(&mut self, view: &Snapshot, me: PlayerId) -> Result<Decision, StrategyError> {
        self(view, me)
    }
}
