//! # grid-duel
//!
//! A two-player territory-capture match engine for strategy
//! tournaments.
//!
//! Two players extend trails outward from owned territory on a
//! rectangular grid; returning a trail home converts it, and anything
//! it enclosed, into new territory. The engine simulates one match at a
//! time: movement, collision resolution, trail-to-territory conversion
//! with enclosure flood-fill, and a turn- and time-budgeted scheduler
//! that drives two pluggable strategies to a terminal result.
//!
//! ## Design Principles
//!
//! 1. **Explicit context**: a [`Match`] owns the grid, both players,
//!    and the budgets; there is no global state.
//!
//! 2. **Explicit outcomes**: every operation that can end the match
//!    returns a terminal-or-continue value. Strategy failures forfeit;
//!    nothing inside the engine is recoverable, by design of the game.
//!
//! 3. **Strategies are opaque**: a [`Strategy`] is called with a
//!    read-only [`Snapshot`] and owns its scratch state; the engine
//!    only measures how long the call took.
//!
//! ## Modules
//!
//! - `core`: player ids, directions, positions, bounding boxes
//! - `board`: the two-layer ownership grid and enclosure detection
//! - `engine`: player kinematics, step resolution, scheduling, results
//! - `strategy`: the external strategy contract
//! - `strategies`: reference strategies for baselines and tests

pub mod board;
pub mod core;
pub mod engine;
pub mod strategies;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{Bounds, Direction, PlayerId, PlayerPair, Position};

pub use crate::board::{enclosed_cells, Grid};

pub use crate::engine::{
    run_match, Cause, Match, MatchConfig, MatchOutcome, MatchRecord, PlayerInfo, PlayerState,
    Snapshot,
};

pub use crate::strategy::{Decision, Strategy, StrategyError};

pub use crate::strategies::{RandomWalk, Scripted, StraightAhead, WallDodger};
