//! Block placement and removal driven by click-event ray hits.

use crate::grid::VoxelGrid;
use crate::raycast::RayHit;
use blockgame_core::{Aabb, BlockKind};
use tracing::trace;

/// Place `kind` into the empty cell adjacent to the struck face.
///
/// Skips the edit (returning `false`) when there is no hit, when the target
/// cell is already occupied, when the hit has no entry face (ray started
/// inside a block), or when the new block would overlap the player's own
/// bounding box. A no-op on `None` keeps click handling idempotent.
pub fn place_block(
    grid: &mut VoxelGrid,
    hit: Option<RayHit>,
    kind: BlockKind,
    player: &Aabb,
) -> bool {
    let Some(hit) = hit else {
        return false;
    };
    if hit.face_normal == glam::IVec3::ZERO {
        return false;
    }

    let target = hit.adjacent();
    if grid.solid(target) {
        return false;
    }
    if Aabb::unit_cell(target).intersects(player) {
        trace!(?target, "refusing to place a block inside the player");
        return false;
    }

    grid.set(target, kind);
    true
}

/// Remove the struck block, returning its kind. A no-op on `None`.
pub fn remove_block(grid: &mut VoxelGrid, hit: Option<RayHit>) -> Option<BlockKind> {
    grid.remove(hit?.block)
}
