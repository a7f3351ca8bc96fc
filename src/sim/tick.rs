//! Fixed timestep simulation tick
//!
//! Advances the bird and the pipe stream by one tick. Callers decide when a
//! tick should run; this module never looks at the game phase.

use rand::Rng;

use super::state::World;

/// Advance the world by one tick. Returns the number of pipes cleared this tick.
pub fn step<R: Rng>(world: &mut World<R>) -> u32 {
    world.time_ticks += 1;
    update_bird(world);
    update_pipes(world)
}

/// Flap: override the bird's vertical velocity with the fixed upward value
pub fn apply_impulse<R>(world: &mut World<R>) {
    world.bird.vel = world.tuning.flap_velocity;
}

/// Gravity, capped at terminal velocity, then integrate
fn update_bird<R>(world: &mut World<R>) {
    let bird = &mut world.bird;
    bird.vel = (bird.vel + world.tuning.gravity).min(world.tuning.terminal_velocity);
    bird.pos.y += bird.vel;
}

/// Scroll, score, cull and refill the pipe stream
fn update_pipes<R: Rng>(world: &mut World<R>) -> u32 {
    let width = world.tuning.pipe_width;
    let velocity = world.tuning.pipe_velocity;
    let bird_x = world.bird.pos.x;

    let mut cleared = 0;
    for pipe in &mut world.pipes {
        pipe.x += velocity;

        if !pipe.passed && pipe.trailing_edge(width) < bird_x {
            pipe.passed = true;
            cleared += 1;
        }
    }
    world.score += cleared;

    // Off screen once the right edge reaches the left edge of the viewport
    world.pipes.retain(|p| p.trailing_edge(width) > 0.0);

    while world.pipes.len() < world.tuning.pipe_count {
        world.spawn_pipe();
    }

    cleared
}
