//! Stateless pairwise predicates
//!
//! Free functions over two explicit volumes, for hosts that want to test an
//! arbitrary pair without either side owning the test. Semantics match the
//! methods on [`BoundingBox`] and [`BoundingSphere`] exactly.

use crate::foundation::math::Vec3;
use super::primitives::{BoundingBox, BoundingSphere};

/// Inclusive point-in-box test
pub fn point_in_box(point: Vec3, aabb: &BoundingBox) -> bool {
    aabb.contains_point(point)
}

/// Point strictly closer to the center than the radius
pub fn point_in_sphere(point: Vec3, sphere: &BoundingSphere) -> bool {
    sphere.contains_point(point)
}

/// Box-versus-box overlap, touching faces included
pub fn box_intersects_box(a: &BoundingBox, b: &BoundingBox) -> bool {
    a.intersects_box(b)
}

/// Center distance strictly less than the sum of radii
pub fn sphere_intersects_sphere(a: &BoundingSphere, b: &BoundingSphere) -> bool {
    a.intersects_sphere(b)
}

/// Sphere-versus-box, via the box point closest to the sphere center
pub fn sphere_intersects_box(sphere: &BoundingSphere, aabb: &BoundingBox) -> bool {
    aabb.intersects_sphere(sphere)
}

/// Any volume the pair predicates understand
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Volume {
    /// A single point
    Point(Vec3),
    /// Axis-aligned box
    Box(BoundingBox),
    /// Sphere
    Sphere(BoundingSphere),
}

impl Volume {
    /// Test if this volume intersects another
    ///
    /// Symmetric: `a.intersects(&b) == b.intersects(&a)` for every pair.
    /// Two points intersect only when they are equal.
    pub fn intersects(&self, other: &Volume) -> bool {
        match (self, other) {
            (Self::Point(a), Self::Point(b)) => a == b,

            (Self::Point(point), Self::Box(aabb)) |
            (Self::Box(aabb), Self::Point(point)) => point_in_box(*point, aabb),

            (Self::Point(point), Self::Sphere(sphere)) |
            (Self::Sphere(sphere), Self::Point(point)) => point_in_sphere(*point, sphere),

            (Self::Box(a), Self::Box(b)) => box_intersects_box(a, b),

            (Self::Sphere(a), Self::Sphere(b)) => sphere_intersects_sphere(a, b),

            (Self::Sphere(sphere), Self::Box(aabb)) |
            (Self::Box(aabb), Self::Sphere(sphere)) => sphere_intersects_box(sphere, aabb),
        }
    }
}

impl From<BoundingBox> for Volume {
    fn from(aabb: BoundingBox) -> Self {
        Self::Box(aabb)
    }
}

impl From<BoundingSphere> for Volume {
    fn from(sphere: BoundingSphere) -> Self {
        Self::Sphere(sphere)
    }
}

impl From<Vec3> for Volume {
    fn from(point: Vec3) -> Self {
        Self::Point(point)
    }
}
