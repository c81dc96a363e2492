use crate::CONTACT_EPSILON;
use glam::{IVec3, Vec3};

/// Axis-aligned bounding box used for collisions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner (x, y, z).
    pub min: Vec3,
    /// Maximum corner (x, y, z).
    pub max: Vec3,
}

impl Aabb {
    /// Create a new AABB ensuring min <= max per axis.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        debug_assert!(min.x <= max.x && min.y <= max.y && min.z <= max.z);
        Self { min, max }
    }

    /// Create an AABB from a center position and full size.
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half_size = size * 0.5;
        Self {
            min: center - half_size,
            max: center + half_size,
        }
    }

    /// The unit cell occupied by the block at `pos`.
    pub fn unit_cell(pos: IVec3) -> Self {
        let min = pos.as_vec3();
        Self {
            min,
            max: min + Vec3::ONE,
        }
    }

    /// This box moved by `delta`.
    pub fn translated(&self, delta: Vec3) -> Self {
        Self {
            min: self.min + delta,
            max: self.max + delta,
        }
    }

    /// Smallest box covering both `self` and `other`.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Tests open-interval intersection with another AABB.
    ///
    /// Boxes that merely share a face or an edge do not intersect.
    pub fn intersects(&self, other: &Self) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
            && self.min.z < other.max.z
            && self.max.z > other.min.z
    }

    /// Grid cells this box truly overlaps, shrunk by the contact epsilon so
    /// a box resting flush against a cell face is not counted as inside it.
    pub fn overlapped_cells(&self) -> impl Iterator<Item = IVec3> {
        let lo = (self.min + CONTACT_EPSILON).floor().as_ivec3();
        let hi = (self.max - CONTACT_EPSILON).floor().as_ivec3();
        (lo.x..=hi.x).flat_map(move |x| {
            (lo.y..=hi.y).flat_map(move |y| (lo.z..=hi.z).map(move |z| IVec3::new(x, y, z)))
        })
    }
}
