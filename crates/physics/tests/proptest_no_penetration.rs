//! Property-based tests for the collision core.
//!
//! Critical invariants:
//! - After any tick the player box never overlaps a solid cell by more than
//!   the contact epsilon.
//! - A box driven at a wall never ends up on the far side of it.

use blockgame_core::{player_box, Aabb, CONTACT_EPSILON};
use blockgame_physics::{resolve_movement, InputSnapshot, PlayerController};
use glam::{IVec3, Vec3};
use proptest::prelude::*;

/// Deterministic rugged terrain: column height derived from (x, z).
fn column_height(x: i32, z: i32) -> i32 {
    let h = (x.wrapping_mul(374_761_393) ^ z.wrapping_mul(668_265_263)) >> 8;
    (h.rem_euclid(5)) + 1
}

fn terrain(pos: IVec3) -> bool {
    pos.y < column_height(pos.x, pos.z)
}

/// Worst overlap between the box and any solid cell, measured as the
/// smallest axis penetration against each overlapped cell.
fn max_penetration<F: Fn(IVec3) -> bool>(aabb: &Aabb, is_solid: F) -> f32 {
    let mut worst: f32 = 0.0;
    for cell in aabb.overlapped_cells() {
        if !is_solid(cell) {
            continue;
        }
        let cell_box = Aabb::unit_cell(cell);
        let depth = (aabb.max - cell_box.min)
            .min(cell_box.max - aabb.min)
            .min_element();
        worst = worst.max(depth);
    }
    worst
}

proptest! {
    /// Property: random walks over rugged terrain never leave the player
    /// box penetrating a solid cell beyond the contact epsilon.
    #[test]
    fn random_walk_never_penetrates(
        start_x in 0.0f32..16.0,
        start_z in 0.0f32..16.0,
        moves in prop::collection::vec(
            (-1.0f32..1.0, -1.0f32..1.0, any::<bool>(), any::<bool>(), -0.3f32..0.3),
            1..120,
        ),
    ) {
        let spawn = Vec3::new(start_x, 8.0, start_z);
        let mut controller = PlayerController::new(spawn);

        for (forward, right, sprint, jump, look_yaw) in moves {
            let input = InputSnapshot {
                move_forward: forward,
                move_right: right,
                sprint,
                jump_pressed: jump,
                look_delta_yaw: look_yaw,
                ..Default::default()
            };
            controller.tick(&input, 1.0 / 60.0, terrain);

            let depth = max_penetration(&controller.body().aabb(), terrain);
            prop_assert!(
                depth <= CONTACT_EPSILON,
                "penetration {} at {:?}",
                depth,
                controller.body().position
            );
        }
    }

    /// Property: no single-axis displacement, however large, carries the box
    /// through a one-block-thick wall.
    #[test]
    fn wall_is_never_tunneled(
        start_x in -8.0f32..4.0,
        start_z in 0.2f32..0.8,
        speed in 0.01f32..200.0,
    ) {
        // Wall plane at x = 5, one block thick, tall and wide enough that
        // the box cannot route around it.
        let wall = |pos: IVec3| pos.x == 5 && (-4..8).contains(&pos.y);

        let start = player_box(Vec3::new(start_x, 0.0, start_z));
        let result = resolve_movement(start, Vec3::new(speed, 0.0, 0.0), wall);

        prop_assert!(result.moved.max.x <= 5.0, "ended at {:?}", result.moved);
        prop_assert!(result.contacts.pos_x);
    }

    /// Property: resolving a zero delta is always a no-op with no contacts.
    #[test]
    fn zero_delta_is_identity(
        x in -16.0f32..16.0,
        y in -4.0f32..12.0,
        z in -16.0f32..16.0,
    ) {
        let start = player_box(Vec3::new(x, y, z));
        let result = resolve_movement(start, Vec3::ZERO, terrain);
        prop_assert_eq!(result.moved, start);
        prop_assert_eq!(result.applied, Vec3::ZERO);
    }
}
