//! Reference strategies.
//!
//! Small, self-contained strategies used as tournament baselines and
//! as choreography in tests. None of them model the opponent; they
//! exist to exercise the engine, not to win.

pub mod random;
pub mod scripted;
pub mod simple;

pub use random::RandomWalk;
pub use scripted::Scripted;
pub use simple::{StraightAhead, WallDodger};
