//! Game phase controller
//!
//! Sequences runs of the simulation: when it ticks, when it is reset, and what
//! each inbound command means in the current phase. Renderers only ever see a
//! [`Snapshot`].

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::highscores::HighScores;
use crate::sim::{Bird, Pipe, World, apply_impulse, check_collision, step};
use crate::tuning::Tuning;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for a start command
    #[default]
    Start,
    /// Active run
    Playing,
    /// Run ended, waiting for restart or return to menu
    GameOver,
}

/// Inbound commands from the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Start a run from the title screen
    Begin,
    /// Flap
    Impulse,
    /// Start a new run from the game over screen
    Restart,
    /// Go back to the title screen from the game over screen
    ReturnToMenu,
    /// Stop the game loop
    Quit,
}

/// Raw keys the input layer can forward without knowing the phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    /// Space or up arrow
    Action,
    /// Escape
    Escape,
}

impl Command {
    /// What a key press means in the given phase
    pub fn from_key(key: Key, phase: GamePhase) -> Self {
        match (key, phase) {
            (Key::Escape, _) => Command::Quit,
            (Key::Action, GamePhase::Start) => Command::Begin,
            (Key::Action, GamePhase::Playing) => Command::Impulse,
            (Key::Action, GamePhase::GameOver) => Command::Restart,
        }
    }
}

/// What happened during one controller tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not playing; the simulation did not advance
    Idle,
    /// Simulation advanced and the bird is still flying
    Advanced { cleared: u32 },
    /// The bird crashed and the run is over
    Crashed { score: u32, new_best: bool },
}

/// Read-only view of the game handed to the renderer each frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Current phase (decides which screen to draw)
    pub phase: GamePhase,
    /// Bird position, velocity and box
    pub bird: Bird,
    /// Active pipes in creation order
    pub pipes: Vec<Pipe>,
    /// Width shared by every pipe
    pub pipe_width: f32,
    /// Viewport width and height
    pub viewport: Vec2,
    /// Top edge of the ground strip
    pub ground_y: f32,
    /// Score of the current (or last) run
    pub score: u32,
    /// Best score this process has seen
    pub best_score: u32,
    /// Finished runs this process
    pub runs_played: u32,
    /// Ticks elapsed in the current run
    pub time_ticks: u64,
}

/// Owns the world, the phase and the session scores
#[derive(Debug, Clone)]
pub struct Game<R = Pcg32> {
    world: World<R>,
    phase: GamePhase,
    scores: HighScores,
    quit: bool,
}

impl Game<Pcg32> {
    /// Default tuning, pipes drawn from a seeded PCG stream
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(Tuning::default(), seed)
    }

    pub fn with_tuning(tuning: Tuning, seed: u64) -> Self {
        Self::with_world(World::new(tuning, seed))
    }
}

impl<R: Rng> Game<R> {
    /// Wrap an existing world; the game starts on the title screen
    pub fn with_world(world: World<R>) -> Self {
        Self {
            world,
            phase: GamePhase::Start,
            scores: HighScores::new(),
            quit: false,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Score of the current (or last) run
    pub fn score(&self) -> u32 {
        self.world.score
    }

    /// Best score this process has seen
    pub fn best_score(&self) -> u32 {
        self.scores.best()
    }

    pub fn scores(&self) -> &HighScores {
        &self.scores
    }

    pub fn world(&self) -> &World<R> {
        &self.world
    }

    /// True once a quit command has been handled
    pub fn is_quit(&self) -> bool {
        self.quit
    }

    /// Apply one inbound command. Commands that mean nothing in the current phase are ignored.
    pub fn handle_command(&mut self, command: Command) {
        if self.quit {
            return;
        }

        match (self.phase, command) {
            (_, Command::Quit) => {
                log::info!("Quit requested ({:?})", self.phase);
                self.quit = true;
            }
            // The action key on the title screen doubles as the start button
            (GamePhase::Start, Command::Begin | Command::Impulse) => self.start_run(),
            (GamePhase::Playing, Command::Impulse) => apply_impulse(&mut self.world),
            (GamePhase::GameOver, Command::Restart) => self.start_run(),
            (GamePhase::GameOver, Command::ReturnToMenu) => {
                // World stays stale until the next run resets it
                self.phase = GamePhase::Start;
            }
            (phase, command) => {
                log::debug!("Ignoring {:?} in {:?}", command, phase);
            }
        }
    }

    /// Advance one fixed tick. Only `Playing` moves the simulation.
    pub fn tick(&mut self) -> TickOutcome {
        if self.quit || self.phase != GamePhase::Playing {
            return TickOutcome::Idle;
        }

        let cleared = step(&mut self.world);
        if !check_collision(&self.world) {
            return TickOutcome::Advanced { cleared };
        }

        let score = self.world.score;
        let new_best = self.scores.record_run(score, self.world.time_ticks);
        self.phase = GamePhase::GameOver;
        log::info!(
            "Run {} over: score {} after {} ticks (best {})",
            self.scores.runs_played(),
            score,
            self.world.time_ticks,
            self.scores.best()
        );
        TickOutcome::Crashed { score, new_best }
    }

    /// Owned copy of everything a renderer needs
    pub fn snapshot(&self) -> Snapshot {
        let tuning = &self.world.tuning;
        Snapshot {
            phase: self.phase,
            bird: self.world.bird.clone(),
            pipes: self.world.pipes.clone(),
            pipe_width: tuning.pipe_width,
            viewport: Vec2::new(tuning.viewport_width, tuning.viewport_height),
            ground_y: tuning.ground_y(),
            score: self.world.score,
            best_score: self.scores.best(),
            runs_played: self.scores.runs_played(),
            time_ticks: self.world.time_ticks,
        }
    }

    fn start_run(&mut self) {
        self.world.reset();
        self.phase = GamePhase::Playing;
        log::info!("Run {} started", self.scores.runs_played() + 1);
    }
}
