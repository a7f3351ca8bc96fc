//! Flappy - a single-screen gate runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bird physics, pipe stream, collisions, score)
//! - `game`: Start / Playing / GameOver state machine and render snapshot
//! - `driver`: Fixed-tick command queue that feeds the state machine
//! - `autopilot`: Headless bot used by the demo binary
//! - `tuning`: Data-driven game balance
//! - `highscores`: Per-process best score and recent runs

pub mod autopilot;
pub mod driver;
pub mod game;
pub mod highscores;
pub mod sim;
pub mod tuning;

pub use autopilot::Autopilot;
pub use driver::FrameDriver;
pub use game::{Command, Game, GamePhase, Key, Snapshot, TickOutcome};
pub use highscores::HighScores;
pub use tuning::{Tuning, TuningError};

/// Game configuration constants (source units: pixels and ticks)
pub mod consts {
    use std::time::Duration;

    /// Fixed logical tick rate
    pub const TICK_RATE: u32 = 32;
    /// Wall-clock length of one tick when paced in real time
    pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

    /// Viewport dimensions
    pub const VIEWPORT_WIDTH: f32 = 600.0;
    pub const VIEWPORT_HEIGHT: f32 = 700.0;
    /// Height of the ground strip at the bottom of the viewport
    pub const GROUND_HEIGHT: f32 = 100.0;

    /// Bird box
    pub const BIRD_WIDTH: f32 = 40.0;
    pub const BIRD_HEIGHT: f32 = 30.0;

    /// Downward acceleration per tick
    pub const GRAVITY: f32 = 0.5;
    /// Maximum downward velocity per tick
    pub const TERMINAL_VELOCITY: f32 = 10.0;
    /// Velocity set by a flap (negative = up)
    pub const FLAP_VELOCITY: f32 = -8.0;

    /// Pipe defaults
    pub const PIPE_WIDTH: f32 = 60.0;
    pub const PIPE_GAP: f32 = 200.0;
    pub const PIPE_VELOCITY: f32 = -4.0;
    pub const PIPE_SPACING: f32 = 300.0;
    /// Number of pipes kept alive at all times
    pub const PIPE_COUNT: usize = 3;
    /// Lower bound for a pipe's top height, and the margin above the ground for new pipes
    pub const MIN_PIPE_HEIGHT: f32 = 100.0;
    /// Margin below the viewport used when seeding the first pipes of a run
    pub const INITIAL_HEIGHT_MARGIN: f32 = 200.0;
}
