//! Primitive bounding volumes and their intersection queries
//!
//! Both volumes are plain `Copy` values. Nothing here validates its input:
//! an inverted box (`min > max` on some axis) or a non-positive radius
//! produces wrong answers, never an error.

use crate::foundation::math::{utils, Vec3};
use crate::physics::response;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    /// Minimum corner (`min_x`, `min_y`, `min_z`)
    pub min: Vec3,
    /// Maximum corner (`max_x`, `max_y`, `max_z`)
    pub max: Vec3,
}

impl BoundingBox {
    /// Create a box from explicit corners, taken as given
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create a box from two arbitrary corner points
    ///
    /// Each axis is sorted, so the result is valid whatever the input order.
    pub fn from_points(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.inf(&b),
            max: a.sup(&b),
        }
    }

    /// Create a box from six scalars, without sorting
    ///
    /// Keeping `min <= max` on every axis is the caller's job.
    pub fn from_bounds(
        min_x: f32,
        max_x: f32,
        min_y: f32,
        max_y: f32,
        min_z: f32,
        max_z: f32,
    ) -> Self {
        Self {
            min: Vec3::new(min_x, min_y, min_z),
            max: Vec3::new(max_x, max_y, max_z),
        }
    }

    /// Create a box centered on `center` with full side lengths `size`
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size * 0.5;
        Self::from_points(center - half, center + half)
    }

    /// Overwrite both corners from two arbitrary points, re-sorting each axis
    pub fn set_from_points(&mut self, a: Vec3, b: Vec3) {
        *self = Self::from_points(a, b);
    }

    /// Center of the box
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Half-size of the box along each axis
    pub fn extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Inclusive point containment on all three axes
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.x >= self.min.x && point.x <= self.max.x &&
        point.y >= self.min.y && point.y <= self.max.y &&
        point.z >= self.min.z && point.z <= self.max.z
    }

    /// Separating-axis test against another box
    ///
    /// Touching faces count as intersecting.
    pub fn intersects_box(&self, other: &BoundingBox) -> bool {
        other.min.x <= self.max.x && other.max.x >= self.min.x &&
        other.min.y <= self.max.y && other.max.y >= self.min.y &&
        other.min.z <= self.max.z && other.max.z >= self.min.z
    }

    /// Point on or inside the box closest to `point`
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        utils::clamp_vec3(point, self.min, self.max)
    }

    /// Test against a sphere
    ///
    /// True when the distance from the sphere center to the closest point of
    /// the box is strictly less than the radius. A center inside the box is
    /// at distance zero.
    pub fn intersects_sphere(&self, sphere: &BoundingSphere) -> bool {
        let closest = self.closest_point(sphere.center);
        (closest - sphere.center).magnitude() < sphere.radius
    }

    /// Direction pushing the sphere center away from the box
    ///
    /// Normalized `center - closest_point`. When the center lies on or inside
    /// the box that difference is zero and there is no direction to report,
    /// so the zero vector is returned.
    pub fn sphere_contact_normal(&self, sphere: &BoundingSphere) -> Vec3 {
        let closest = self.closest_point(sphere.center);
        (sphere.center - closest)
            .try_normalize(f32::EPSILON)
            .unwrap_or_else(Vec3::zeros)
    }

    /// Shared interval length on each axis
    ///
    /// Negative components mean the boxes are separated on that axis.
    pub fn overlap(&self, other: &BoundingBox) -> Vec3 {
        self.max.inf(&other.max) - self.min.sup(&other.min)
    }

    /// Per-axis `±1` multipliers that invert velocity on the axis of least overlap
    ///
    /// See [`response::box_contact_axis_signs`].
    pub fn contact_axis_signs(&self, other: &BoundingBox) -> Vec3 {
        response::box_contact_axis_signs(self, other)
    }
}

/// A bounding sphere for collision detection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    /// The center position of the sphere in world space
    pub center: Vec3,
    /// The radius of the sphere
    pub radius: f32,
}

impl Default for BoundingSphere {
    fn default() -> Self {
        Self { center: Vec3::zeros(), radius: 1.0 }
    }
}

impl BoundingSphere {
    /// Creates a new bounding sphere with the given center and radius
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Distance from `point` to the center is strictly less than the radius
    pub fn contains_point(&self, point: Vec3) -> bool {
        (point - self.center).magnitude() < self.radius
    }

    /// Center distance is strictly less than the sum of both radii
    pub fn intersects_sphere(&self, other: &BoundingSphere) -> bool {
        (self.center - other.center).magnitude() < self.radius + other.radius
    }

    /// Same test as [`BoundingBox::intersects_sphere`], seen from the sphere
    pub fn intersects_box(&self, aabb: &BoundingBox) -> bool {
        aabb.intersects_sphere(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_cube() -> BoundingBox {
        BoundingBox::from_bounds(-1.0, 1.0, -1.0, 1.0, -1.0, 1.0)
    }

    #[test]
    fn test_from_points_sorts_each_axis() {
        let aabb = BoundingBox::from_points(Vec3::new(2.0, -1.0, 5.0), Vec3::new(-3.0, 4.0, 1.0));

        assert_eq!(aabb.min, Vec3::new(-3.0, -1.0, 1.0));
        assert_eq!(aabb.max, Vec3::new(2.0, 4.0, 5.0));
    }

    #[test]
    fn test_from_bounds_keeps_order_as_given() {
        let inverted = BoundingBox::from_bounds(1.0, -1.0, 0.0, 1.0, 0.0, 1.0);

        assert_eq!(inverted.min.x, 1.0);
        assert_eq!(inverted.max.x, -1.0);
        // Nothing fits between an inverted pair of bounds
        assert!(!inverted.contains_point(Vec3::new(0.0, 0.5, 0.5)));
    }

    #[test]
    fn test_set_from_points_resorts() {
        let mut aabb = unit_cube();
        aabb.set_from_points(Vec3::new(3.0, 3.0, 3.0), Vec3::new(2.0, 2.0, 2.0));

        assert_eq!(aabb, BoundingBox::new(Vec3::new(2.0, 2.0, 2.0), Vec3::new(3.0, 3.0, 3.0)));
    }

    #[test]
    fn test_contains_point_is_inclusive() {
        let aabb = unit_cube();

        assert!(aabb.contains_point(aabb.min));
        assert!(aabb.contains_point(aabb.max));
        assert!(aabb.contains_point(aabb.center()));
        assert!(!aabb.contains_point(Vec3::new(1.0 + 1e-4, 0.0, 0.0)));
        assert!(!aabb.contains_point(Vec3::new(0.0, -1.0 - 1e-4, 0.0)));
        assert!(!aabb.contains_point(Vec3::new(0.0, 0.0, 1.0 + 1e-4)));
    }

    #[test]
    fn test_box_box_touching_faces_intersect() {
        let a = BoundingBox::new(Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0));
        let b = BoundingBox::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(2.0, 1.0, 1.0));
        let c = BoundingBox::new(Vec3::new(1.01, 0.0, 0.0), Vec3::new(2.0, 1.0, 1.0));

        assert!(a.intersects_box(&b));
        assert!(!a.intersects_box(&c));
    }

    #[test]
    fn test_box_box_symmetry_and_reflexivity() {
        let boxes = [
            unit_cube(),
            BoundingBox::new(Vec3::new(0.5, 0.5, 0.5), Vec3::new(1.5, 1.5, 1.5)),
            BoundingBox::new(Vec3::new(3.0, -1.0, 0.0), Vec3::new(4.0, 0.0, 1.0)),
            BoundingBox::new(Vec3::new(-0.2, -5.0, -0.2), Vec3::new(0.2, 5.0, 0.2)),
        ];

        for a in &boxes {
            assert!(a.intersects_box(a));
            for b in &boxes {
                assert_eq!(a.intersects_box(b), b.intersects_box(a));
            }
        }
    }

    #[test]
    fn test_sphere_outside_box() {
        let sphere = BoundingSphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0);
        let aabb = unit_cube();

        assert_eq!(aabb.closest_point(sphere.center), Vec3::new(0.0, 0.0, 1.0));
        assert!(!aabb.intersects_sphere(&sphere));
        assert!(!sphere.intersects_box(&aabb));
    }

    #[test]
    fn test_sphere_box_distance_is_strict() {
        let aabb = unit_cube();
        let touching = BoundingSphere::new(Vec3::new(0.0, 0.0, 2.0), 1.0);
        let overlapping = BoundingSphere::new(Vec3::new(0.0, 0.0, 1.9), 1.0);

        assert!(!aabb.intersects_sphere(&touching));
        assert!(aabb.intersects_sphere(&overlapping));
    }

    #[test]
    fn test_sphere_inside_box_intersects() {
        let aabb = unit_cube();
        let tiny = BoundingSphere::new(Vec3::new(0.1, 0.2, 0.3), 1e-3);

        assert!(aabb.intersects_sphere(&tiny));
    }

    #[test]
    fn test_sphere_contact_normal_points_outward() {
        let aabb = unit_cube();
        let sphere = BoundingSphere::new(Vec3::new(3.0, 0.0, 0.0), 2.5);
        let normal = aabb.sphere_contact_normal(&sphere);
        assert_relative_eq!(normal, Vec3::new(1.0, 0.0, 0.0), epsilon = 1e-6);

        let corner = BoundingSphere::new(Vec3::new(2.0, 2.0, 1.0), 2.0);
        let expected = Vec3::new(1.0, 1.0, 0.0).normalize();
        assert_relative_eq!(aabb.sphere_contact_normal(&corner), expected, epsilon = 1e-6);
    }

    #[test]
    fn test_sphere_contact_normal_zero_when_center_inside() {
        let aabb = unit_cube();
        let inside = BoundingSphere::new(Vec3::new(0.5, 0.0, 0.0), 0.25);
        let on_face = BoundingSphere::new(Vec3::new(1.0, 0.0, 0.0), 0.25);

        assert_eq!(aabb.sphere_contact_normal(&inside), Vec3::zeros());
        assert_eq!(aabb.sphere_contact_normal(&on_face), Vec3::zeros());
    }

    #[test]
    fn test_sphere_sphere() {
        let a = BoundingSphere::new(Vec3::zeros(), 1.0);
        let b = BoundingSphere::new(Vec3::new(1.5, 0.0, 0.0), 1.0);
        let touching = BoundingSphere::new(Vec3::new(2.0, 0.0, 0.0), 1.0);

        assert!(a.intersects_sphere(&b));
        assert!(b.intersects_sphere(&a));
        assert!(a.intersects_sphere(&a));
        assert!(!a.intersects_sphere(&touching));
    }

    #[test]
    fn test_sphere_contains_point_is_strict() {
        let sphere = BoundingSphere::new(Vec3::new(1.0, 1.0, 1.0), 1.0);

        assert!(sphere.contains_point(Vec3::new(1.5, 1.0, 1.0)));
        assert!(!sphere.contains_point(Vec3::new(2.0, 1.0, 1.0)));
    }

    #[test]
    fn test_overlap_per_axis() {
        let a = BoundingBox::new(Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0));
        let b = BoundingBox::new(Vec3::new(0.75, 0.5, -1.0), Vec3::new(2.0, 2.0, 0.25));

        assert_relative_eq!(a.overlap(&b), Vec3::new(0.25, 0.5, 0.25), epsilon = 1e-6);
    }
}
