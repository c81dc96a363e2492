//! Seeded world generation: a bounded platform of layered terrain with a
//! single tree, plus a spawn point that is deliberately different each run.

use crate::grid::VoxelGrid;
use blockgame_core::{player_box, BlockKind};
use glam::{IVec3, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Side length of the square platform footprint, in blocks.
pub const PLATFORM_SIZE: i32 = 32;

/// Baseline column height.
const BASE_HEIGHT: i32 = 3;
/// Wave amplitude added to the baseline.
const HEIGHT_VARIATION: f32 = 2.0;
/// Columns never exceed this height.
const MAX_HEIGHT: i32 = 7;
/// Keep the tree (and its canopy) away from the platform edge.
const TREE_MARGIN: i32 = 3;

/// Output of [`WorldGenerator::generate`].
pub struct GeneratedWorld {
    /// The populated block grid.
    pub grid: VoxelGrid,
    /// Feet-center spawn position, guaranteed free of solid blocks.
    pub spawn: Vec3,
    /// Base of the tree trunk (the lowest log block).
    pub tree_base: IVec3,
}

/// Deterministic terrain generator.
///
/// The same seed always produces the identical block set and tree position.
/// The spawn point is drawn from a separate entropy-seeded source on every
/// call and is intentionally not reproducible.
pub struct WorldGenerator {
    seed: u64,
}

impl WorldGenerator {
    /// Create a generator for the given world seed.
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// The seed this generator was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Populate a fresh grid and pick a spawn point.
    pub fn generate(&self) -> GeneratedWorld {
        let mut rng = StdRng::seed_from_u64(self.seed);

        // Two seeded waves shape the platform surface.
        let freq_x = rng.gen_range(0.2..0.4);
        let freq_z = rng.gen_range(0.2..0.4);
        let phase_x = rng.gen_range(0.0..std::f32::consts::TAU);
        let phase_z = rng.gen_range(0.0..std::f32::consts::TAU);

        let mut grid = VoxelGrid::new();
        for x in 0..PLATFORM_SIZE {
            for z in 0..PLATFORM_SIZE {
                let wave = (x as f32 * freq_x + phase_x).sin() + (z as f32 * freq_z + phase_z).cos();
                let top = (BASE_HEIGHT as f32 + wave * HEIGHT_VARIATION) as i32;
                let top = top.clamp(1, MAX_HEIGHT);
                for y in 0..top {
                    grid.set(IVec3::new(x, y, z), layer_kind(y, top));
                }
            }
        }

        let tree_base = self.plant_tree(&mut grid, &mut rng);
        let spawn = pick_spawn(&grid);

        debug!(
            seed = self.seed,
            blocks = grid.len(),
            tree_base = ?tree_base,
            "world generation complete"
        );

        GeneratedWorld {
            grid,
            spawn,
            tree_base,
        }
    }

    /// Place one tree at a seed-derived spot on the platform.
    fn plant_tree(&self, grid: &mut VoxelGrid, rng: &mut StdRng) -> IVec3 {
        let tx = rng.gen_range(TREE_MARGIN..PLATFORM_SIZE - TREE_MARGIN);
        let tz = rng.gen_range(TREE_MARGIN..PLATFORM_SIZE - TREE_MARGIN);
        let base_y = surface_height(grid, tx, tz);
        let trunk_height = rng.gen_range(4..=6);

        for dy in 0..trunk_height {
            grid.set(IVec3::new(tx, base_y + dy, tz), BlockKind::Log);
        }

        // Canopy: a 3x3 shell over the top two trunk blocks plus a cap.
        let canopy_top = base_y + trunk_height;
        for y in (canopy_top - 2)..canopy_top {
            for dx in -1..=1 {
                for dz in -1..=1 {
                    let pos = IVec3::new(tx + dx, y, tz + dz);
                    if !grid.solid(pos) {
                        grid.set(pos, BlockKind::Leaves);
                    }
                }
            }
        }
        grid.set(IVec3::new(tx, canopy_top, tz), BlockKind::Leaves);

        IVec3::new(tx, base_y, tz)
    }
}

/// Block kind for a given layer within a column of height `top`.
fn layer_kind(y: i32, top: i32) -> BlockKind {
    if y == top - 1 {
        BlockKind::Grass
    } else if y >= top - 3 {
        BlockKind::Dirt
    } else {
        BlockKind::Stone
    }
}

/// Height of the first empty cell above the terrain column at (x, z).
fn surface_height(grid: &VoxelGrid, x: i32, z: i32) -> i32 {
    let mut y = 0;
    while grid.solid(IVec3::new(x, y, z)) {
        y += 1;
    }
    y
}

/// Draw a spawn point from a non-seeded source, then search upward until
/// the player's box is free of solid blocks.
fn pick_spawn(grid: &VoxelGrid) -> Vec3 {
    let mut rng = StdRng::from_entropy();
    let x = rng.gen_range(1..PLATFORM_SIZE - 1);
    let z = rng.gen_range(1..PLATFORM_SIZE - 1);

    let mut feet = Vec3::new(x as f32 + 0.5, surface_height(grid, x, z) as f32, z as f32 + 0.5);
    while player_box(feet).overlapped_cells().any(|c| grid.solid(c)) {
        feet.y += 1.0;
    }
    feet
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block_set(world: &GeneratedWorld) -> Vec<(IVec3, BlockKind)> {
        let mut blocks: Vec<_> = world.grid.iter().collect();
        blocks.sort_by_key(|(pos, _)| (pos.x, pos.y, pos.z));
        blocks
    }

    #[test]
    fn same_seed_same_blocks_and_tree() {
        let a = WorldGenerator::new(12345).generate();
        let b = WorldGenerator::new(12345).generate();
        assert_eq!(block_set(&a), block_set(&b));
        assert_eq!(a.tree_base, b.tree_base);
    }

    #[test]
    fn different_seeds_differ() {
        let a = WorldGenerator::new(111).generate();
        let b = WorldGenerator::new(222).generate();
        assert_ne!(block_set(&a), block_set(&b));
    }

    #[test]
    fn tree_has_trunk_and_canopy() {
        let world = WorldGenerator::new(42).generate();
        assert_eq!(world.grid.kind_at(world.tree_base), Some(BlockKind::Log));

        let logs = world.grid.iter().filter(|(_, k)| *k == BlockKind::Log).count();
        let leaves = world
            .grid
            .iter()
            .filter(|(_, k)| *k == BlockKind::Leaves)
            .count();
        assert!((4..=6).contains(&logs), "trunk height out of range: {logs}");
        assert!(leaves > 8, "canopy too sparse: {leaves}");
    }

    #[test]
    fn spawn_is_never_embedded() {
        // Spawn is random per call, so check a batch of invocations.
        let generator = WorldGenerator::new(7);
        for _ in 0..16 {
            let world = generator.generate();
            let embedded = player_box(world.spawn)
                .overlapped_cells()
                .any(|c| world.grid.solid(c));
            assert!(!embedded, "spawn {:?} overlaps terrain", world.spawn);
        }
    }

    #[test]
    fn platform_stays_within_footprint_and_height() {
        let world = WorldGenerator::new(99).generate();
        for (pos, kind) in world.grid.iter() {
            assert!((0..PLATFORM_SIZE).contains(&pos.x), "{pos} outside footprint");
            assert!((0..PLATFORM_SIZE).contains(&pos.z), "{pos} outside footprint");
            if kind != BlockKind::Log && kind != BlockKind::Leaves {
                assert!((0..MAX_HEIGHT).contains(&pos.y), "terrain too tall at {pos}");
            }
        }
    }
}
