//! World state and core simulation types
//!
//! Everything the simulation needs between ticks lives in [`World`]. The RNG is
//! owned by the world so a seed fully determines the pipe stream.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::tuning::Tuning;

/// The player's bird
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    /// Top-left corner. `x` never changes during a run.
    pub pos: Vec2,
    /// Vertical velocity (positive = down)
    pub vel: f32,
    /// Box width and height
    pub size: Vec2,
}

impl Bird {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.bird_x(), tuning.bird_start_y()),
            vel: 0.0,
            size: Vec2::new(tuning.bird_width, tuning.bird_height),
        }
    }

    /// Bounding box for collision tests
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Bottom edge of the box
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// A pipe pair with a gap between `top_height` and `bottom_y`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pipe {
    /// Left edge
    pub x: f32,
    /// Bottom edge of the top pipe
    pub top_height: f32,
    /// Top edge of the bottom pipe (always `top_height + gap`)
    pub bottom_y: f32,
    /// Set once the bird has cleared this pipe and scored it
    pub passed: bool,
}

impl Pipe {
    pub fn new(x: f32, top_height: f32, gap: f32) -> Self {
        Self {
            x,
            top_height,
            bottom_y: top_height + gap,
            passed: false,
        }
    }

    /// Right edge for a pipe of the given width
    #[inline]
    pub fn trailing_edge(&self, width: f32) -> f32 {
        self.x + width
    }

    /// Upper pipe, from the top of the viewport down to the gap
    pub fn top_rect(&self, width: f32) -> Rect {
        Rect::new(Vec2::new(self.x, 0.0), Vec2::new(width, self.top_height))
    }

    /// Lower pipe, from the gap down to the bottom of the viewport
    pub fn bottom_rect(&self, width: f32, viewport_height: f32) -> Rect {
        Rect::new(
            Vec2::new(self.x, self.bottom_y),
            Vec2::new(width, viewport_height - self.bottom_y),
        )
    }
}

/// Complete simulation state for one run
#[derive(Debug, Clone)]
pub struct World<R = Pcg32> {
    pub tuning: Tuning,
    pub bird: Bird,
    /// Active pipes in creation order (ascending x)
    pub pipes: Vec<Pipe>,
    /// Pipes cleared this run
    pub score: u32,
    /// Steps taken this run
    pub time_ticks: u64,
    rng: R,
}

impl World<Pcg32> {
    /// Create a world whose pipe heights are drawn from a seeded PCG stream
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        Self::with_rng(tuning, Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> World<R> {
    /// Create a world that draws pipe heights from `rng`
    pub fn with_rng(tuning: Tuning, rng: R) -> Self {
        let mut world = Self {
            bird: Bird::new(&tuning),
            pipes: Vec::with_capacity(tuning.pipe_count + 1),
            score: 0,
            time_ticks: 0,
            tuning,
            rng,
        };
        world.seed_initial_pipes();
        world
    }

    /// Restore the bird, clear the score and lay out a fresh set of pipes
    pub fn reset(&mut self) {
        self.bird = Bird::new(&self.tuning);
        self.score = 0;
        self.time_ticks = 0;
        self.seed_initial_pipes();
    }

    /// First pipes of a run, spaced evenly from the right edge of the viewport.
    ///
    /// Heights use the viewport-based bound, which differs from the ground-based
    /// bound used by [`World::spawn_pipe`].
    fn seed_initial_pipes(&mut self) {
        self.pipes.clear();
        let (low, high) = self.tuning.initial_height_range();
        for i in 0..self.tuning.pipe_count {
            let top_height = self.roll_height(low, high);
            let x = self.tuning.viewport_width + i as f32 * self.tuning.pipe_spacing;
            self.pipes.push(Pipe::new(x, top_height, self.tuning.pipe_gap));
        }
    }

    /// Append one pipe a spacing beyond the rightmost pipe
    pub(crate) fn spawn_pipe(&mut self) {
        let last_x = self
            .pipes
            .iter()
            .map(|p| p.x)
            .reduce(f32::max)
            .unwrap_or(self.tuning.viewport_width);
        let (low, high) = self.tuning.spawn_height_range();
        let top_height = self.roll_height(low, high);
        self.pipes.push(Pipe::new(
            last_x + self.tuning.pipe_spacing,
            top_height,
            self.tuning.pipe_gap,
        ));
    }

    /// Uniform whole-pixel height in `[low, high]`; collapses to `low` if the range is empty
    fn roll_height(&mut self, low: i32, high: i32) -> f32 {
        self.rng.random_range(low..=high.max(low)) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_new_world_layout() {
        let world = World::new(Tuning::default(), 7);
        assert_eq!(world.bird.pos, Vec2::new(120.0, 350.0));
        assert_eq!(world.bird.vel, 0.0);
        assert_eq!(world.score, 0);
        assert_eq!(world.pipes.len(), PIPE_COUNT);

        let xs: Vec<f32> = world.pipes.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![600.0, 900.0, 1200.0]);

        for pipe in &world.pipes {
            assert!(pipe.top_height >= 100.0 && pipe.top_height <= 300.0);
            assert_eq!(pipe.bottom_y - pipe.top_height, PIPE_GAP);
            assert!(!pipe.passed);
            assert_eq!(pipe.top_height.fract(), 0.0);
        }
    }

    #[test]
    fn test_same_seed_same_pipes() {
        let a = World::new(Tuning::default(), 42);
        let b = World::new(Tuning::default(), 42);
        assert_eq!(a.pipes, b.pipes);
    }

    #[test]
    fn test_reset_restores_run_state() {
        let mut world = World::new(Tuning::default(), 3);
        world.bird.pos.y = 12.0;
        world.bird.vel = 9.0;
        world.score = 17;
        world.time_ticks = 400;
        world.pipes.truncate(1);
        world.pipes[0].passed = true;

        world.reset();
        assert_eq!(world.bird, Bird::new(&world.tuning));
        assert_eq!(world.score, 0);
        assert_eq!(world.time_ticks, 0);
        assert_eq!(world.pipes.len(), PIPE_COUNT);
        assert!(world.pipes.iter().all(|p| !p.passed));
    }

    #[test]
    fn test_reset_twice_matches_once() {
        let mut world = World::new(Tuning::default(), 11);
        world.reset();
        let once_bird = world.bird.clone();
        let once_xs: Vec<f32> = world.pipes.iter().map(|p| p.x).collect();

        world.reset();
        let twice_xs: Vec<f32> = world.pipes.iter().map(|p| p.x).collect();
        assert_eq!(world.bird, once_bird);
        assert_eq!(world.score, 0);
        assert_eq!(once_xs, twice_xs);
    }

    #[test]
    fn test_spawn_after_rightmost() {
        let mut world = World::new(Tuning::default(), 5);
        world.pipes.remove(0);
        world.spawn_pipe();
        assert_eq!(world.pipes.len(), PIPE_COUNT);
        assert_eq!(world.pipes.last().map(|p| p.x), Some(1500.0));
    }

    #[test]
    fn test_spawn_with_no_pipes_uses_viewport_edge() {
        let mut world = World::new(Tuning::default(), 5);
        world.pipes.clear();
        world.spawn_pipe();
        assert_eq!(world.pipes[0].x, VIEWPORT_WIDTH + PIPE_SPACING);
    }

    #[test]
    fn test_spawned_heights_use_ground_bound() {
        let tuning = Tuning {
            ground_height: 180.0,
            ..Default::default()
        };
        let mut world = World::new(tuning, 9);
        for _ in 0..200 {
            world.pipes.clear();
            world.spawn_pipe();
            let h = world.pipes[0].top_height;
            // 520 - 200 - 100
            assert!((100.0..=220.0).contains(&h), "height {h} out of range");
        }
    }

    #[test]
    fn test_pipe_rects() {
        let pipe = Pipe::new(50.0, 120.0, 200.0);
        let top = pipe.top_rect(60.0);
        let bottom = pipe.bottom_rect(60.0, 700.0);
        assert_eq!(top.min, Vec2::new(50.0, 0.0));
        assert_eq!(top.size, Vec2::new(60.0, 120.0));
        assert_eq!(bottom.min, Vec2::new(50.0, 320.0));
        assert_eq!(bottom.size, Vec2::new(60.0, 380.0));
        assert_eq!(pipe.trailing_edge(60.0), 110.0);
    }
}
