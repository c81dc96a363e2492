#![warn(missing_docs)]
//! Player movement against the voxel grid: per-axis swept AABB collision
//! resolution and the kinematic controller that drives it each tick.

mod collide;
mod player;

pub use collide::{resolve_movement, AxisContacts, MoveResult};
pub use player::{InputSnapshot, MoveTuning, PlayerBody, PlayerController};
