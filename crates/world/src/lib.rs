#![warn(missing_docs)]
//! World state for the voxel prototype: the sparse block grid, the seeded
//! generator that populates it, and the targeting/editing surface used by
//! click events.

mod editor;
mod generate;
mod grid;
mod raycast;

pub use editor::{place_block, remove_block};
pub use generate::{GeneratedWorld, WorldGenerator, PLATFORM_SIZE};
pub use grid::VoxelGrid;
pub use raycast::{raycast, RayHit};
