//! Voxel ray traversal using incremental DDA grid stepping.

use glam::{IVec3, Vec3};

/// Result of a ray walk through the block grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// The solid block that was struck.
    pub block: IVec3,
    /// Normal of the face the ray entered through.
    pub face_normal: IVec3,
    /// Distance from the ray origin to the struck face.
    pub distance: f32,
}

impl RayHit {
    /// The empty cell adjacent to the struck face, where a new block would
    /// be placed.
    pub fn adjacent(&self) -> IVec3 {
        self.block + self.face_normal
    }
}

/// Walk the grid from `origin` along `direction`, visiting cells in strictly
/// increasing distance order, and stop at the first solid cell or at
/// `max_distance`.
///
/// `direction` need not be normalized but must be non-zero; `max_distance`
/// is measured in multiples of its length. A ray that starts inside a solid
/// cell reports that cell with a zero face normal.
pub fn raycast<F>(origin: Vec3, direction: Vec3, max_distance: f32, mut is_solid: F) -> Option<RayHit>
where
    F: FnMut(IVec3) -> bool,
{
    let mut cell = origin.floor().as_ivec3();
    if is_solid(cell) {
        return Some(RayHit {
            block: cell,
            face_normal: IVec3::ZERO,
            distance: 0.0,
        });
    }

    // Per-axis step direction and the ray parameter cost of crossing one
    // cell along that axis.
    let step = IVec3::new(axis_step(direction.x), axis_step(direction.y), axis_step(direction.z));
    let t_delta = Vec3::new(
        cross_cost(direction.x),
        cross_cost(direction.y),
        cross_cost(direction.z),
    );
    // Ray parameter at which the first boundary of each axis is crossed.
    let mut t_next = Vec3::new(
        first_crossing(origin.x, direction.x, cell.x),
        first_crossing(origin.y, direction.y, cell.y),
        first_crossing(origin.z, direction.z, cell.z),
    );

    loop {
        // Advance across the nearest boundary.
        let (axis, t) = nearest_axis(t_next);
        if t > max_distance {
            return None;
        }

        let mut normal = IVec3::ZERO;
        match axis {
            0 => {
                cell.x += step.x;
                t_next.x += t_delta.x;
                normal.x = -step.x;
            }
            1 => {
                cell.y += step.y;
                t_next.y += t_delta.y;
                normal.y = -step.y;
            }
            _ => {
                cell.z += step.z;
                t_next.z += t_delta.z;
                normal.z = -step.z;
            }
        }

        if is_solid(cell) {
            return Some(RayHit {
                block: cell,
                face_normal: normal,
                distance: t,
            });
        }
    }
}

fn axis_step(component: f32) -> i32 {
    if component > 0.0 {
        1
    } else {
        -1
    }
}

fn cross_cost(component: f32) -> f32 {
    if component != 0.0 {
        (1.0 / component).abs()
    } else {
        f32::INFINITY
    }
}

fn first_crossing(origin: f32, component: f32, cell: i32) -> f32 {
    if component > 0.0 {
        ((cell + 1) as f32 - origin) / component
    } else if component < 0.0 {
        (cell as f32 - origin) / component
    } else {
        f32::INFINITY
    }
}

fn nearest_axis(t_next: Vec3) -> (usize, f32) {
    if t_next.x <= t_next.y && t_next.x <= t_next.z {
        (0, t_next.x)
    } else if t_next.y <= t_next.z {
        (1, t_next.y)
    } else {
        (2, t_next.z)
    }
}
