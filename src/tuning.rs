//! Data-driven game balance
//!
//! Every field defaults to the matching value in [`crate::consts`], so a JSON
//! file only needs the values it wants to change.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Rejected tuning values
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("invalid tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be positive (got {value})")]
    NotPositive { field: &'static str, value: f32 },
    #[error("flap_velocity must point upward (got {0})")]
    FlapNotUpward(f32),
    #[error("pipe_velocity must move pipes left (got {0})")]
    PipesNotScrolling(f32),
    #[error("pipe_count must be at least 3 (got {0})")]
    TooFewPipes(usize),
    #[error("ground_height {ground} leaves no room in a viewport {viewport} tall")]
    GroundTooTall { ground: f32, viewport: f32 },
    #[error("{which} pipe heights have an empty range [{low}, {high}]")]
    EmptyHeightRange {
        which: &'static str,
        low: f32,
        high: f32,
    },
}

/// Physics and geometry for one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub ground_height: f32,

    pub bird_width: f32,
    pub bird_height: f32,

    pub gravity: f32,
    pub terminal_velocity: f32,
    pub flap_velocity: f32,

    pub pipe_width: f32,
    pub pipe_gap: f32,
    pub pipe_velocity: f32,
    pub pipe_spacing: f32,
    pub pipe_count: usize,
    pub min_pipe_height: f32,
    pub initial_height_margin: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            ground_height: GROUND_HEIGHT,

            bird_width: BIRD_WIDTH,
            bird_height: BIRD_HEIGHT,

            gravity: GRAVITY,
            terminal_velocity: TERMINAL_VELOCITY,
            flap_velocity: FLAP_VELOCITY,

            pipe_width: PIPE_WIDTH,
            pipe_gap: PIPE_GAP,
            pipe_velocity: PIPE_VELOCITY,
            pipe_spacing: PIPE_SPACING,
            pipe_count: PIPE_COUNT,
            min_pipe_height: MIN_PIPE_HEIGHT,
            initial_height_margin: INITIAL_HEIGHT_MARGIN,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Serialize to pretty JSON (handy as a template for custom files)
    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Top edge of the ground strip
    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.viewport_height - self.ground_height
    }

    /// Fixed horizontal position of the bird (one fifth across, whole pixels)
    #[inline]
    pub fn bird_x(&self) -> f32 {
        (self.viewport_width / 5.0).floor()
    }

    /// Vertical position the bird starts each run at
    #[inline]
    pub fn bird_start_y(&self) -> f32 {
        (self.viewport_height / 2.0).floor()
    }

    /// Inclusive top-height range for the pipes seeded at the start of a run
    pub fn initial_height_range(&self) -> (i32, i32) {
        let low = self.min_pipe_height as i32;
        let high = (self.viewport_height - self.pipe_gap - self.initial_height_margin) as i32;
        (low, high)
    }

    /// Inclusive top-height range for pipes spawned while playing
    pub fn spawn_height_range(&self) -> (i32, i32) {
        let low = self.min_pipe_height as i32;
        let high = (self.ground_y() - self.pipe_gap - self.min_pipe_height) as i32;
        (low, high)
    }

    /// Check that the values describe a playable game
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("viewport_width", self.viewport_width),
            ("viewport_height", self.viewport_height),
            ("bird_width", self.bird_width),
            ("bird_height", self.bird_height),
            ("gravity", self.gravity),
            ("terminal_velocity", self.terminal_velocity),
            ("pipe_width", self.pipe_width),
            ("pipe_gap", self.pipe_gap),
            ("pipe_spacing", self.pipe_spacing),
            ("min_pipe_height", self.min_pipe_height),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(TuningError::NotPositive { field, value });
            }
        }

        if !(self.flap_velocity < 0.0) {
            return Err(TuningError::FlapNotUpward(self.flap_velocity));
        }
        if !(self.pipe_velocity < 0.0) {
            return Err(TuningError::PipesNotScrolling(self.pipe_velocity));
        }
        if self.pipe_count < PIPE_COUNT {
            return Err(TuningError::TooFewPipes(self.pipe_count));
        }
        if self.ground_height < 0.0 || self.ground_height >= self.viewport_height {
            return Err(TuningError::GroundTooTall {
                ground: self.ground_height,
                viewport: self.viewport_height,
            });
        }

        for (which, (low, high)) in [
            ("initial", self.initial_height_range()),
            ("spawned", self.spawn_height_range()),
        ] {
            if high < low {
                return Err(TuningError::EmptyHeightRange {
                    which,
                    low: low as f32,
                    high: high as f32,
                });
            }
        }

        Ok(())
    }
}
