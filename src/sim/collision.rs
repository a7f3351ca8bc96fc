//! Collision detection
//!
//! Everything in this game is an axis-aligned box, so a hit is a plain AABB
//! overlap test plus the ceiling and ground checks.

use glam::Vec2;

use super::state::World;

/// Axis-aligned rectangle (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// True if the rectangles share an area greater than zero.
    ///
    /// Rectangles that only touch along an edge, or that have no area, never overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        if self.size.x <= 0.0 || self.size.y <= 0.0 || other.size.x <= 0.0 || other.size.y <= 0.0
        {
            return false;
        }
        let (a_max, b_max) = (self.max(), other.max());
        self.min.x < b_max.x
            && other.min.x < a_max.x
            && self.min.y < b_max.y
            && other.min.y < a_max.y
    }
}

/// True if the bird hits the ground, the ceiling, or any pipe
pub fn check_collision<R>(world: &World<R>) -> bool {
    let bird = &world.bird;
    let tuning = &world.tuning;

    if bird.bottom() >= tuning.ground_y() || bird.pos.y <= 0.0 {
        return true;
    }

    let bird_rect = bird.rect();
    world.pipes.iter().any(|pipe| {
        bird_rect.overlaps(&pipe.top_rect(tuning.pipe_width))
            || bird_rect.overlaps(&pipe.bottom_rect(tuning.pipe_width, tuning.viewport_height))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Pipe;
    use crate::tuning::Tuning;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    /// World with a single pipe whose gap spans 200..400
    fn world_with_pipe(pipe_x: f32) -> World {
        let mut world = World::new(Tuning::default(), 1);
        world.pipes = vec![Pipe::new(pipe_x, 200.0, 200.0)];
        world
    }

    #[test]
    fn test_rect_overlap() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&rect(5.0, 5.0, 10.0, 10.0)));
        assert!(a.overlaps(&rect(2.0, 2.0, 2.0, 2.0)));
        assert!(!a.overlaps(&rect(20.0, 0.0, 5.0, 5.0)));
    }

    #[test]
    fn test_rect_touching_edges_do_not_overlap() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&rect(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps(&rect(0.0, 10.0, 10.0, 10.0)));
    }

    #[test]
    fn test_rect_without_area_never_overlaps() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&rect(5.0, 5.0, 0.0, 3.0)));
        assert!(!a.overlaps(&rect(5.0, 5.0, 3.0, -1.0)));
    }

    #[test]
    fn test_clear_flight_no_collision() {
        let mut world = world_with_pipe(400.0);
        world.bird.pos.y = 250.0;
        assert!(!check_collision(&world));
    }

    #[test]
    fn test_inside_gap_no_collision() {
        let mut world = world_with_pipe(100.0);
        // Bird spans 120..160 horizontally, inside the pipe column
        world.bird.pos.y = 250.0;
        assert!(!check_collision(&world));
    }

    #[test]
    fn test_top_pipe_collision() {
        let mut world = world_with_pipe(100.0);
        world.bird.pos.y = 190.0;
        assert!(check_collision(&world));
    }

    #[test]
    fn test_bottom_pipe_collision() {
        let mut world = world_with_pipe(100.0);
        world.bird.pos.y = 380.0;
        assert!(check_collision(&world));
    }

    #[test]
    fn test_pipe_edge_contact_is_not_collision() {
        let mut world = world_with_pipe(160.0);
        // Bird right edge at 160 touches the pipe's left edge
        world.bird.pos.y = 100.0;
        assert!(!check_collision(&world));
    }

    #[test]
    fn test_ground_collision() {
        let mut world = world_with_pipe(500.0);
        world.bird.pos.y = 570.0;
        assert!(check_collision(&world));
        world.bird.pos.y = 569.0;
        assert!(!check_collision(&world));
    }

    #[test]
    fn test_ceiling_collision() {
        let mut world = world_with_pipe(500.0);
        world.bird.pos.y = 0.0;
        assert!(check_collision(&world));
        world.bird.pos.y = -3.0;
        assert!(check_collision(&world));
        world.bird.pos.y = 0.5;
        assert!(!check_collision(&world));
    }
}
