//! Headless autopilot
//!
//! Plays from snapshots only, the same view a renderer gets. Used for the demo
//! binary and for soak-testing the simulation.

use crate::game::{Command, GamePhase, Snapshot};

/// How far above the bottom pipe the bird's belly should stay
pub const DEFAULT_FLOOR_MARGIN: f32 = 30.0;

/// Simple gap-following bot
#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Restart automatically after a crash
    pub auto_restart: bool,
    /// Clearance kept above the lower edge of the gap
    pub floor_margin: f32,
    flaps: u64,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            auto_restart: true,
            floor_margin: DEFAULT_FLOOR_MARGIN,
            flaps: 0,
        }
    }
}

impl Autopilot {
    pub fn new(auto_restart: bool) -> Self {
        Self {
            auto_restart,
            ..Default::default()
        }
    }

    /// Flaps issued so far
    pub fn flaps(&self) -> u64 {
        self.flaps
    }

    /// Pick the command for the coming tick, if any
    pub fn next_command(&mut self, snap: &Snapshot) -> Option<Command> {
        match snap.phase {
            GamePhase::Start => Some(Command::Begin),
            GamePhase::GameOver => self.auto_restart.then_some(Command::Restart),
            GamePhase::Playing => {
                if self.should_flap(snap) {
                    self.flaps += 1;
                    Some(Command::Impulse)
                } else {
                    None
                }
            }
        }
    }

    /// Flap whenever the bird's belly would drop below the target line next tick
    fn should_flap(&self, snap: &Snapshot) -> bool {
        let floor = match next_gap_floor(snap) {
            Some(bottom_y) => bottom_y,
            None => snap.ground_y,
        };
        let target = floor - self.floor_margin;
        snap.bird.pos.y + snap.bird.size.y + snap.bird.vel > target
    }
}

/// Lower edge of the gap the bird has to get through next
fn next_gap_floor(snap: &Snapshot) -> Option<f32> {
    let bird_x = snap.bird.pos.x;
    snap.pipes
        .iter()
        .find(|p| p.trailing_edge(snap.pipe_width) >= bird_x)
        .map(|p| p.bottom_y)
}
