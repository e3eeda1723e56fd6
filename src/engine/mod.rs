//! The match engine: player kinematics, the step resolver, the
//! scheduler, and result composition.

pub mod outcome;
pub mod player;
pub mod scheduler;
pub mod snapshot;
pub mod step;

pub use outcome::{settle, Cause, MatchOutcome, MatchRecord, Terminal};
pub use player::{PlayerInfo, PlayerState};
pub use scheduler::{run_match, Match, MatchConfig};
pub use snapshot::Snapshot;
pub use step::advance;
