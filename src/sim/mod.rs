//! Deterministic simulation module
//!
//! All gameplay physics lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Pipes kept in creation order
//! - No rendering, input or phase handling

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Rect, check_collision};
pub use state::{Bird, Pipe, World};
pub use tick::{apply_impulse, step};
