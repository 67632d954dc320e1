//! Box-versus-box contact response
//!
//! Picks the axis of least overlap between two intersecting boxes and turns
//! it into a `±1` multiplier vector. This is a cheap stand-in for a real
//! minimum translation vector: it only says which velocity component to
//! flip, never by how much to separate the boxes.

use crate::foundation::math::Vec3;
use crate::physics::collision::BoundingBox;

/// Axis chosen to receive the velocity inversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactAxis {
    /// Face hit on the X axis
    X,
    /// Face hit on the Y axis
    Y,
    /// Face hit on the Z axis
    Z,
}

impl ContactAxis {
    /// Choose the axis of strictly smallest overlap
    ///
    /// X wins only when strictly below both Y and Z, Y only when strictly
    /// below both X and Z. Every other case, including any tie, falls to Z.
    pub fn from_overlap(overlap: Vec3) -> Self {
        if overlap.x < overlap.y && overlap.x < overlap.z {
            Self::X
        } else if overlap.y < overlap.x && overlap.y < overlap.z {
            Self::Y
        } else {
            Self::Z
        }
    }

    /// Multiplier vector: `-1` on this axis, `+1` on the other two
    pub fn signs(self) -> Vec3 {
        match self {
            Self::X => Vec3::new(-1.0, 1.0, 1.0),
            Self::Y => Vec3::new(1.0, -1.0, 1.0),
            Self::Z => Vec3::new(1.0, 1.0, -1.0),
        }
    }
}

/// Axis to invert for a contact between `a` and `b`, if they intersect
pub fn contact_axis(a: &BoundingBox, b: &BoundingBox) -> Option<ContactAxis> {
    a.intersects_box(b).then(|| ContactAxis::from_overlap(a.overlap(b)))
}

/// Per-axis `±1` vector for a contact between `a` and `b`
///
/// Separated boxes yield `(1, 1, 1)`, so applying the result to a velocity
/// is always safe.
pub fn box_contact_axis_signs(a: &BoundingBox, b: &BoundingBox) -> Vec3 {
    contact_axis(a, b).map_or_else(|| Vec3::new(1.0, 1.0, 1.0), ContactAxis::signs)
}
