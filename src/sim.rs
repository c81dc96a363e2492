//! The frame-stepped simulation loop: one controller tick per frame, with
//! click edits buffered and applied only at tick boundaries.

use blockgame_core::BlockKind;
use blockgame_physics::{InputSnapshot, MoveTuning, PlayerBody, PlayerController};
use blockgame_world::{place_block, raycast, remove_block, GeneratedWorld, VoxelGrid};
use glam::IVec3;
use tracing::debug;

/// A buffered click edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    /// Place a block of this kind against the targeted face.
    Place(BlockKind),
    /// Remove the targeted block.
    Remove,
}

/// World plus player, advanced tick by tick.
pub struct Simulation {
    grid: VoxelGrid,
    controller: PlayerController,
    pending_edits: Vec<EditAction>,
    reach: f32,
    ticks: u64,
}

impl Simulation {
    /// Build a simulation from a generated world.
    pub fn new(world: GeneratedWorld, tuning: MoveTuning, reach: f32) -> Self {
        Self {
            grid: world.grid,
            controller: PlayerController::with_tuning(world.spawn, tuning),
            pending_edits: Vec::new(),
            reach,
            ticks: 0,
        }
    }

    /// Buffer a click edit; it is applied at the next tick boundary, never
    /// while a tick is resolving against the grid.
    pub fn queue_edit(&mut self, action: EditAction) {
        self.pending_edits.push(action);
    }

    /// Advance one tick: apply buffered edits, then move the player.
    pub fn tick(&mut self, input: &InputSnapshot, dt: f32) {
        let edits = std::mem::take(&mut self.pending_edits);
        for action in edits {
            self.apply_edit(action);
        }

        self.controller.tick(input, dt, self.grid.solid_fn());
        self.ticks += 1;
    }

    fn apply_edit(&mut self, action: EditAction) {
        let hit = raycast(
            self.controller.eye_position(),
            self.controller.look_dir(),
            self.reach,
            self.grid.solid_fn(),
        );
        match action {
            EditAction::Place(kind) => {
                let placed = place_block(&mut self.grid, hit, kind, &self.controller.body().aabb());
                debug!(?kind, placed, "place edit");
            }
            EditAction::Remove => {
                let removed = remove_block(&mut self.grid, hit);
                debug!(?removed, "remove edit");
            }
        }
    }

    /// Current player state.
    pub fn body(&self) -> &PlayerBody {
        self.controller.body()
    }

    /// The block the player is currently targeting, if any.
    pub fn targeted_block(&self) -> Option<IVec3> {
        raycast(
            self.controller.eye_position(),
            self.controller.look_dir(),
            self.reach,
            self.grid.solid_fn(),
        )
        .map(|hit| hit.block)
    }

    /// The block grid (for the render collaborator and tests).
    pub fn grid(&self) -> &VoxelGrid {
        &self.grid
    }

    /// Ticks advanced so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
