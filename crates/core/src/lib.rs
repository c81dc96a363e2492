#![warn(missing_docs)]
//! Shared leaf types for the voxel prototype: block kinds, AABBs, and the
//! contact epsilon every geometric test agrees on.

mod aabb;
mod block;

pub use aabb::Aabb;
pub use block::{BlockKind, UnknownBlockKind};

/// Margin used for both contact-overlap tests and snap-flush offsets.
///
/// Large enough to absorb f32 rounding after a snap, small enough that a
/// resting body never visibly floats above its support.
pub const CONTACT_EPSILON: f32 = 1e-4;

/// Player bounding-box width and depth.
pub const PLAYER_WIDTH: f32 = 0.6;
/// Player bounding-box height.
pub const PLAYER_HEIGHT: f32 = 1.8;

/// The player's bounding box for a given feet-center position.
pub fn player_box(feet: glam::Vec3) -> Aabb {
    let half = PLAYER_WIDTH * 0.5;
    Aabb::new(
        glam::Vec3::new(feet.x - half, feet.y, feet.z - half),
        glam::Vec3::new(feet.x + half, feet.y + PLAYER_HEIGHT, feet.z + half),
    )
}
