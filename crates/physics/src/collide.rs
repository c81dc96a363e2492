//! Per-axis swept collision of an AABB against the block grid.
//!
//! Movement is resolved one axis at a time, in the fixed order Y, X, Z.
//! Resolving the vertical axis first settles floor and ceiling contact
//! before the horizontal axes slide, which keeps grounded state stable while
//! pushing along walls. For each axis the box is swept through every grid
//! cell the moved volume covers; the first blocking face clamps the
//! movement, the box snaps flush (offset by the contact epsilon), and the
//! contact is recorded per axis and per sign so callers can tell a floor
//! from a ceiling. A cell only blocks when the box truly overlaps it on the
//! two fixed axes: the candidate-cell scan shrinks the box by the contact
//! epsilon, so a sweep that grazes a block edge-on is not decelerated.

use blockgame_core::{Aabb, CONTACT_EPSILON};
use glam::{IVec3, Vec3};

/// Which block faces the last resolution pressed against, by axis and sign.
///
/// Floor and ceiling are distinct on purpose: a jump arrested by a low
/// ceiling must not read as a landing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AxisContacts {
    /// Blocked while moving toward -X.
    pub neg_x: bool,
    /// Blocked while moving toward +X.
    pub pos_x: bool,
    /// Blocked while moving down (a floor).
    pub neg_y: bool,
    /// Blocked while moving up (a ceiling).
    pub pos_y: bool,
    /// Blocked while moving toward -Z.
    pub neg_z: bool,
    /// Blocked while moving toward +Z.
    pub pos_z: bool,
}

impl AxisContacts {
    /// Downward motion was arrested this resolution.
    pub fn floor(&self) -> bool {
        self.neg_y
    }

    /// Upward motion was arrested this resolution.
    pub fn ceiling(&self) -> bool {
        self.pos_y
    }

    /// Any horizontal X face was hit.
    pub fn wall_x(&self) -> bool {
        self.neg_x || self.pos_x
    }

    /// Any horizontal Z face was hit.
    pub fn wall_z(&self) -> bool {
        self.neg_z || self.pos_z
    }

    fn record(&mut self, axis: usize, positive: bool) {
        match (axis, positive) {
            (0, false) => self.neg_x = true,
            (0, true) => self.pos_x = true,
            (1, false) => self.neg_y = true,
            (1, true) => self.pos_y = true,
            (2, false) => self.neg_z = true,
            (2, true) => self.pos_z = true,
            _ => unreachable!("axis out of range"),
        }
    }
}

/// Outcome of one resolution pass.
#[derive(Debug, Clone, Copy)]
pub struct MoveResult {
    /// The box after all three axes were resolved.
    pub moved: Aabb,
    /// Displacement actually applied (the clamped `delta`).
    pub applied: Vec3,
    /// Faces pressed against during the pass.
    pub contacts: AxisContacts,
}

/// Resolution order: vertical contact first, then the horizontal axes.
const AXIS_ORDER: [usize; 3] = [1, 0, 2];

/// How far behind the leading face a blocking face may sit and still clip
/// the sweep. Covers float rounding without letting a deeply overlapped
/// cell fling the box backward.
const DEPENETRATION_SLOP: f32 = 1e-3;

/// Sweep `start` by `delta` against the grid, one axis at a time.
///
/// `is_solid` answers whether a block occupies a cell. The sweep scans the
/// whole volume the box passes through, so a fast box stops at the first
/// wall instead of tunneling regardless of how large `delta` is. A box that
/// begins the pass slightly inside a block (within a few epsilons, as left
/// by float rounding) is pushed back out to the flush position.
pub fn resolve_movement<F>(start: Aabb, delta: Vec3, mut is_solid: F) -> MoveResult
where
    F: FnMut(IVec3) -> bool,
{
    let mut moved = start;
    let mut applied = Vec3::ZERO;
    let mut contacts = AxisContacts::default();

    for axis in AXIS_ORDER {
        let wanted = delta[axis];
        let (step, hit) = sweep_axis(&moved, axis, wanted, &mut is_solid);
        let mut axis_delta = Vec3::ZERO;
        axis_delta[axis] = step;
        moved = moved.translated(axis_delta);
        applied[axis] = step;
        if hit {
            contacts.record(axis, wanted > 0.0);
        }
    }

    MoveResult {
        moved,
        applied,
        contacts,
    }
}

/// Clamp a single-axis movement to the nearest blocking face.
///
/// Returns the permitted movement and whether anything blocked it.
fn sweep_axis<F>(aabb: &Aabb, axis: usize, wanted: f32, is_solid: &mut F) -> (f32, bool)
where
    F: FnMut(IVec3) -> bool,
{
    if wanted == 0.0 {
        return (0.0, false);
    }

    let mut axis_delta = Vec3::ZERO;
    axis_delta[axis] = wanted;
    let swept = aabb.union(&aabb.translated(axis_delta));

    let mut allowed = wanted;
    let mut hit = false;
    for cell in swept.overlapped_cells() {
        if !is_solid(cell) {
            continue;
        }
        // Near face of the cell along the moving axis, and the movement that
        // leaves the box flush against it (offset by the contact epsilon).
        let (face, clipped) = if wanted > 0.0 {
            let face = cell[axis] as f32;
            (face, face - CONTACT_EPSILON - aabb.max[axis])
        } else {
            let face = (cell[axis] + 1) as f32;
            (face, face + CONTACT_EPSILON - aabb.min[axis])
        };
        // Only faces ahead of the leading face block the sweep. A face
        // slightly behind it (float rounding left the box a hair inside)
        // still counts and pushes the box back out; a face deeper than the
        // slop belongs to a cell the box already occupies on this axis and
        // is this pass's concern only on the other axes.
        let behind = if wanted > 0.0 {
            face < aabb.max[axis] - DEPENETRATION_SLOP
        } else {
            face > aabb.min[axis] + DEPENETRATION_SLOP
        };
        if behind {
            continue;
        }
        let closer = if wanted > 0.0 {
            clipped < allowed
        } else {
            clipped > allowed
        };
        if closer {
            allowed = clipped;
            hit = true;
        }
    }

    (allowed, hit)
}
