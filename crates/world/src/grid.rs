use blockgame_core::BlockKind;
use glam::IVec3;
use std::collections::HashMap;

/// Sparse voxel storage: block coordinate to kind.
///
/// The map is the sole source of truth for solidity. Air is the absence of
/// an entry, so any coordinate outside the generated footprint is simply
/// empty and every lookup is O(1) expected.
#[derive(Debug, Clone, Default)]
pub struct VoxelGrid {
    blocks: HashMap<IVec3, BlockKind>,
}

impl VoxelGrid {
    /// Create an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a solid block occupies `pos`.
    #[inline]
    pub fn solid(&self, pos: IVec3) -> bool {
        self.blocks.contains_key(&pos)
    }

    /// Kind of the block at `pos`, or `None` for air.
    #[inline]
    pub fn kind_at(&self, pos: IVec3) -> Option<BlockKind> {
        self.blocks.get(&pos).copied()
    }

    /// Store a block, replacing whatever was there.
    pub fn set(&mut self, pos: IVec3, kind: BlockKind) {
        self.blocks.insert(pos, kind);
    }

    /// Delete the block at `pos`, returning its kind if one was stored.
    pub fn remove(&mut self, pos: IVec3) -> Option<BlockKind> {
        self.blocks.remove(&pos)
    }

    /// Number of stored blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the grid holds no blocks at all.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterate over every stored block (for the mesh-building collaborator).
    pub fn iter(&self) -> impl Iterator<Item = (IVec3, BlockKind)> + '_ {
        self.blocks.iter().map(|(pos, kind)| (*pos, *kind))
    }

    /// Solidity query as a closure, the shape the physics and raycast
    /// routines take.
    pub fn solid_fn(&self) -> impl Fn(IVec3) -> bool + '_ {
        move |pos| self.solid(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_query_round_trip() {
        let mut grid = VoxelGrid::new();
        let pos = IVec3::new(3, -2, 7);
        assert!(!grid.solid(pos));
        grid.set(pos, BlockKind::Stone);
        assert!(grid.solid(pos));
        assert_eq!(grid.kind_at(pos), Some(BlockKind::Stone));
        assert_eq!(grid.len(), 1);
    }

    #[test]
    fn remove_returns_previous_kind() {
        let mut grid = VoxelGrid::new();
        let pos = IVec3::new(0, 0, 0);
        grid.set(pos, BlockKind::Dirt);
        assert_eq!(grid.remove(pos), Some(BlockKind::Dirt));
        assert_eq!(grid.remove(pos), None);
        assert!(grid.is_empty());
    }

    #[test]
    fn out_of_range_coordinates_are_empty() {
        let grid = VoxelGrid::new();
        assert!(!grid.solid(IVec3::new(1_000_000, -1_000_000, 42)));
        assert_eq!(grid.kind_at(IVec3::new(i32::MIN, 0, i32::MAX)), None);
    }

    #[test]
    fn set_overwrites_existing_block() {
        let mut grid = VoxelGrid::new();
        let pos = IVec3::new(1, 1, 1);
        grid.set(pos, BlockKind::Grass);
        grid.set(pos, BlockKind::Log);
        assert_eq!(grid.kind_at(pos), Some(BlockKind::Log));
        assert_eq!(grid.len(), 1);
    }
}
