//! The match scheduler: turn alternation, budgets, and logging.
//!
//! `Match` is the explicit context object owning the grid, both
//! players, the turn and time budgets, and the match logs; nothing in
//! the engine is global. `Match::step` runs one player's atomic
//! half-turn: snapshot, timed strategy call, forfeit checks, steering,
//! and the forward move. `Match::run` alternates the players until a
//! terminal condition or turn exhaustion.
//!
//! Timing is cooperative: the strategy call is never interrupted, it
//! is only charged for its wall-clock duration afterward, and a
//! negative remaining budget forfeits the caller on that same check.

use std::time::Instant;

use im::Vector;
use log::{debug, info};

use crate::board::Grid;
use crate::core::{PlayerId, PlayerPair, Position};
use crate::strategy::{Decision, Strategy};

use super::outcome::{settle, Cause, MatchOutcome, MatchRecord, Terminal};
use super::player::PlayerState;
use super::snapshot::Snapshot;
use super::step::advance;

/// Match configuration: board size and budgets.
///
/// The board is `2 * half_width` cells wide. Defaults match the
/// standard tournament setup: an 18x15 board, 100 turns, 10 seconds of
/// total thinking time per player.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MatchConfig {
    /// Half the board width, in cells.
    pub half_width: i32,
    /// Board height, in cells.
    pub height: i32,
    /// Maximum number of full turns (both players acting once).
    pub max_turns: u32,
    /// Total thinking time per player, in seconds.
    pub time_budget: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            half_width: 9,
            height: 15,
            max_turns: 100,
            time_budget: 10.0,
        }
    }
}

impl MatchConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board half-width.
    #[must_use]
    pub fn with_half_width(mut self, half_width: i32) -> Self {
        assert!(half_width >= 3, "Half-width must keep the spawn boxes apart");
        self.half_width = half_width;
        self
    }

    /// Set the board height.
    #[must_use]
    pub fn with_height(mut self, height: i32) -> Self {
        assert!(height >= 3, "Height must fit a spawn box");
        self.height = height;
        self
    }

    /// Set the turn budget.
    #[must_use]
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Set the per-player thinking-time budget in seconds.
    #[must_use]
    pub fn with_time_budget(mut self, seconds: f64) -> Self {
        self.time_budget = seconds;
        self
    }

    /// Board width in cells.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.half_width * 2
    }

    /// Spawn position for a player: centered on its horizontal half.
    #[must_use]
    pub const fn spawn(&self, player: PlayerId) -> Position {
        let x = match player {
            PlayerId::One => self.half_width / 2,
            PlayerId::Two => self.half_width + self.half_width / 2,
        };
        Position::new(x, self.height / 2)
    }
}

/// One match in progress: grid, players, budgets, and logs.
pub struct Match {
    config: MatchConfig,
    grid: Grid,
    players: PlayerPair<PlayerState>,
    turns_left: PlayerPair<u32>,
    time_left: PlayerPair<f64>,
    log: Vector<Snapshot>,
    private_logs: PlayerPair<Vector<Snapshot>>,
}

impl Match {
    /// Initialize a match: empty board, both players spawned on their
    /// halves, full budgets, empty logs.
    #[must_use]
    pub fn new(config: MatchConfig) -> Self {
        let mut grid = Grid::new(config.width(), config.height);
        let one = PlayerState::spawn(PlayerId::One, config.spawn(PlayerId::One), &mut grid);
        let two = PlayerState::spawn(PlayerId::Two, config.spawn(PlayerId::Two), &mut grid);
        debug!(
            "match initialized on a {}x{} board",
            config.width(),
            config.height
        );

        Self {
            config,
            grid,
            players: PlayerPair::from_pair(one, two),
            turns_left: PlayerPair::with_value(config.max_turns),
            time_left: PlayerPair::with_value(config.time_budget),
            log: Vector::new(),
            private_logs: PlayerPair::new(|_| Vector::new()),
        }
    }

    /// The configuration this match runs under.
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// The board.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// One player's kinematic state.
    #[must_use]
    pub fn player(&self, player: PlayerId) -> &PlayerState {
        &self.players[player]
    }

    /// Remaining turns for a player.
    #[must_use]
    pub fn turns_left(&self, player: PlayerId) -> u32 {
        self.turns_left[player]
    }

    /// Remaining thinking time for a player, in seconds.
    ///
    /// May be negative after a timeout forfeit; it is never restored.
    #[must_use]
    pub fn time_left(&self, player: PlayerId) -> f64 {
        self.time_left[player]
    }

    /// The public move log.
    #[must_use]
    pub fn log(&self) -> &Vector<Snapshot> {
        &self.log
    }

    /// A player's private move log.
    #[must_use]
    pub fn private_log(&self, player: PlayerId) -> &Vector<Snapshot> {
        &self.private_logs[player]
    }

    /// Build a read-only snapshot of the current state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            turns_left: self.turns_left.clone(),
            time_left: self.time_left.clone(),
            board: self.grid.clone(),
            players: PlayerPair::new(|p| self.players[p].info()),
            trail_routes: PlayerPair::new(|p| self.players[p].trail_route()),
        }
    }

    /// Run one half-turn for `player`.
    ///
    /// Returns the settled outcome if this half-turn ended the match.
    pub fn step(&mut self, player: PlayerId, strategy: &mut dyn Strategy) -> Option<MatchOutcome> {
        if self.turns_left[player] == 0 {
            return Some(settle(Terminal::deferred(Cause::TurnsExhausted), &self.grid));
        }

        self.tick(player, strategy).map(|terminal| {
            debug!("{:?} ends the match", terminal.cause);
            self.log.push_back(self.snapshot());
            settle(terminal, &self.grid)
        })
    }

    fn tick(&mut self, player: PlayerId, strategy: &mut dyn Strategy) -> Option<Terminal> {
        let view = self.snapshot();

        let started = Instant::now();
        let decision = strategy.decide(&view, player);
        let elapsed = started.elapsed().as_secs_f64();

        let decision = match decision {
            Ok(decision) => decision,
            Err(error) => {
                debug!("{player} forfeits: {error}");
                return Some(Terminal::forfeit(player, Cause::StrategyError, error));
            }
        };

        self.turns_left[player] -= 1;
        self.time_left[player] -= elapsed;
        if self.time_left[player] < 0.0 {
            debug!("{player} forfeits on time ({elapsed:.3}s over budget)");
            return Some(Terminal::won_by(player.opponent(), Cause::Timeout));
        }

        {
            let mover = &mut self.players[player];
            match decision {
                Decision::TurnLeft => mover.turn_left(),
                Decision::TurnRight => mover.turn_right(),
                Decision::Straight => {}
            }
        }

        let (mover, other) = self.players.split_mut(player);
        if let Some(terminal) = advance(&mut self.grid, mover, other) {
            return Some(terminal);
        }

        let snapshot = self.snapshot();
        self.private_logs[player].push_back(snapshot.clone());
        self.log.push_back(snapshot);
        None
    }

    /// Run the match to completion: players alternate within each
    /// turn, player 1 first, for at most the configured turn budget.
    pub fn run(&mut self, one: &mut dyn Strategy, two: &mut dyn Strategy) -> MatchOutcome {
        for _ in 0..self.config.max_turns {
            for player in PlayerId::BOTH {
                let strategy: &mut dyn Strategy = match player {
                    PlayerId::One => &mut *one,
                    PlayerId::Two => &mut *two,
                };
                if let Some(outcome) = self.step(player, strategy) {
                    info!(
                        "match over: {:?}, winner {:?}",
                        outcome.cause, outcome.winner
                    );
                    return outcome;
                }
            }
        }

        self.log.push_back(self.snapshot());
        let outcome = settle(Terminal::deferred(Cause::TurnsExhausted), &self.grid);
        info!(
            "match over: turn budget spent, winner {:?}",
            outcome.winner
        );
        outcome
    }
}

/// Run a complete match and produce its persisted record.
pub fn run_match(
    name_one: &str,
    one: &mut dyn Strategy,
    name_two: &str,
    two: &mut dyn Strategy,
    config: MatchConfig,
) -> MatchRecord {
    let mut game = Match::new(config);
    let outcome = game.run(one, two);

    MatchRecord {
        players: PlayerPair::from_pair(name_one.to_string(), name_two.to_string()),
        width: game.grid.width(),
        height: game.grid.height(),
        log: game.log.clone(),
        outcome,
    }
}
