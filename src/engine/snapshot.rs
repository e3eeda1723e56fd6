//! Read-only match snapshots.
//!
//! A snapshot is handed to strategies on every call and appended to
//! the match logs after every step. It copies the full board state, so
//! a strategy (or a replay consumer) can inspect it freely without any
//! access to live engine state.

use serde::{Deserialize, Serialize};

use crate::board::Grid;
use crate::core::{Direction, PlayerId, PlayerPair};

use super::player::PlayerInfo;

/// An immutable view of the match at one instant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Remaining turns per player.
    pub turns_left: PlayerPair<u32>,
    /// Remaining thinking time per player, in seconds.
    pub time_left: PlayerPair<f64>,
    /// A copy of both ownership layers.
    pub board: Grid,
    /// Both players' public info, in player order.
    pub players: PlayerPair<PlayerInfo>,
    /// Both players' trail routes: the directions taken since each
    /// last left owned territory, oldest first.
    pub trail_routes: PlayerPair<Vec<Direction>>,
}

impl Snapshot {
    /// The viewing player's own info.
    #[must_use]
    pub fn me(&self, me: PlayerId) -> &PlayerInfo {
        &self.players[me]
    }

    /// The viewing player's opponent info.
    #[must_use]
    pub fn enemy(&self, me: PlayerId) -> &PlayerInfo {
        &self.players[me.opponent()]
    }
}
