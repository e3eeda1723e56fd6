//! Terminal causes, match outcomes, and the result composer.
//!
//! The step resolver and scheduler produce a `Terminal` naming the
//! cause and, where one is already decided, the winner. `settle` turns
//! that into the final `MatchOutcome`, applying the territory-area
//! tie-break for the two causes that do not decide a winner on their
//! own. `MatchRecord` is the complete externally persisted artifact.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::board::Grid;
use crate::core::{PlayerId, PlayerPair};
use crate::strategy::StrategyError;

use super::snapshot::Snapshot;

/// Why a match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cause {
    /// The mover stepped off the board; the opponent wins.
    WallCollision,
    /// The mover stepped onto a trail cell; the trail owner loses.
    TrailCollision,
    /// The players met moving along perpendicular axes; the mover wins.
    SideCollision,
    /// The players met moving along the same axis; settled by area.
    HeadOnCollision,
    /// A strategy call failed or returned an invalid command.
    StrategyError,
    /// A player's thinking-time budget ran out.
    Timeout,
    /// The turn budget ran out with no collision; settled by area.
    TurnsExhausted,
}

impl Cause {
    /// The external cause code carried in persisted records.
    #[must_use]
    pub const fn code(self) -> i8 {
        match self {
            Cause::WallCollision => 0,
            Cause::TrailCollision => 1,
            Cause::SideCollision => 2,
            Cause::HeadOnCollision => 3,
            Cause::StrategyError => -1,
            Cause::Timeout => -2,
            Cause::TurnsExhausted => -3,
        }
    }

    /// Whether this cause defers the winner to the area tie-break.
    #[must_use]
    pub const fn settled_by_area(self) -> bool {
        matches!(self, Cause::HeadOnCollision | Cause::TurnsExhausted)
    }
}

/// A terminal condition as first detected, before settling.
///
/// `winner` is `None` for the causes settled later by area. `detail`
/// carries the extra participant some causes name: the trail owner for
/// a trail collision, the rammed player for a side collision.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Terminal {
    pub winner: Option<PlayerId>,
    pub cause: Cause,
    pub detail: Option<PlayerId>,
    pub error: Option<StrategyError>,
}

impl Terminal {
    /// A terminal with a decided winner and no extras.
    #[must_use]
    pub fn won_by(winner: PlayerId, cause: Cause) -> Self {
        Self {
            winner: Some(winner),
            cause,
            detail: None,
            error: None,
        }
    }

    /// A terminal that defers its winner to the area tie-break.
    #[must_use]
    pub fn deferred(cause: Cause) -> Self {
        Self {
            winner: None,
            cause,
            detail: None,
            error: None,
        }
    }

    /// Forfeit by `loser` with an attached error payload.
    #[must_use]
    pub fn forfeit(loser: PlayerId, cause: Cause, error: StrategyError) -> Self {
        Self {
            winner: Some(loser.opponent()),
            cause,
            detail: None,
            error: Some(error),
        }
    }

    /// Attach the extra participant this cause names.
    #[must_use]
    pub fn with_detail(mut self, player: PlayerId) -> Self {
        self.detail = Some(player);
        self
    }
}

/// The final result of a match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchOutcome {
    /// The winning player, or `None` for a draw.
    pub winner: Option<PlayerId>,
    /// Why the match ended.
    pub cause: Cause,
    /// Territory counts, present when the area tie-break ran.
    pub areas: Option<PlayerPair<u32>>,
    /// Diagnostic payload for strategy failures.
    pub error: Option<String>,
}

impl MatchOutcome {
    /// Whether the match ended with no winner.
    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.winner.is_none()
    }
}

/// Compose the final outcome from a terminal condition and the board.
///
/// Head-on collisions and turn exhaustion carry no winner of their own:
/// the player with strictly more territory wins, equal counts draw.
/// Every other cause passes its winner through unchanged.
#[must_use]
pub fn settle(terminal: Terminal, grid: &Grid) -> MatchOutcome {
    let error = terminal.error.map(|e| e.message().to_string());

    if terminal.cause.settled_by_area() {
        let areas = grid.territory_counts();
        let winner = match areas[PlayerId::One].cmp(&areas[PlayerId::Two]) {
            std::cmp::Ordering::Greater => Some(PlayerId::One),
            std::cmp::Ordering::Less => Some(PlayerId::Two),
            std::cmp::Ordering::Equal => None,
        };
        MatchOutcome {
            winner,
            cause: terminal.cause,
            areas: Some(areas),
            error,
        }
    } else {
        MatchOutcome {
            winner: terminal.winner,
            cause: terminal.cause,
            areas: None,
            error,
        }
    }
}

/// The externally persisted record of one complete match.
///
/// Storage format is the consumer's concern; `to_bytes`/`from_bytes`
/// provide a compact encoding for persistence collaborators that want
/// one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Participant names, in player order.
    pub players: PlayerPair<String>,
    /// Board width in cells.
    pub width: i32,
    /// Board height in cells.
    pub height: i32,
    /// The public move log: one snapshot per half-turn plus the final
    /// board.
    pub log: Vector<Snapshot>,
    /// The terminal result.
    pub outcome: MatchOutcome,
}

impl MatchRecord {
    /// Encode the record to bytes.
    pub fn to_bytes(&self) -> bincode::Result<Vec<u8>> {
        bincode::serialize(self)
    }

    /// Decode a record from bytes.
    pub fn from_bytes(bytes: &[u8]) -> bincode::Result<Self> {
        bincode::deserialize(bytes)
    }
}
