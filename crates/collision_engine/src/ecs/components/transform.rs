//! Transform component and per-tick motion integration
//!
//! Holds an entity's pose, its linear motion state and the axis-aligned box
//! derived from the pose. Translation and scale are private so the box can
//! only change together with them: every pose mutator recomputes it before
//! returning.
//!
//! The box is `translation ± scale / 2` and ignores rotation.

use crate::foundation::math::{rotation_yxz, Mat3, Mat4, Vec3};
use crate::physics::collision::BoundingBox;

/// Velocity components smaller than this (in magnitude) are snapped to zero
/// by [`TransformComponent::apply_friction_decay`].
pub const FRICTION_DEADBAND: f32 = 0.001;

/// Pose, linear motion and derived bounding box of one entity
#[derive(Debug, Clone, PartialEq)]
pub struct TransformComponent {
    translation: Vec3,
    scale: Vec3,

    /// Euler angles in radians, applied in Y(1), X(2), Z(3) order
    pub rotation: Vec3,

    /// Displacement added to the translation every tick
    pub velocity: Vec3,

    /// Added to the velocity every tick
    pub acceleration: Vec3,

    /// Per-axis velocity multiplier used by friction decay, usually in `[0, 1]`
    pub friction: f32,

    bounding_box: BoundingBox,
}

impl Default for TransformComponent {
    fn default() -> Self {
        Self::new(Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0))
    }
}

impl TransformComponent {
    /// Create a transform at rest with the given pose
    pub fn new(translation: Vec3, scale: Vec3) -> Self {
        Self {
            translation,
            scale,
            rotation: Vec3::zeros(),
            velocity: Vec3::zeros(),
            acceleration: Vec3::zeros(),
            friction: 1.0,
            bounding_box: Self::box_for(translation, scale),
        }
    }

    /// Builder pattern: Set velocity
    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    /// Builder pattern: Set acceleration
    pub fn with_acceleration(mut self, acceleration: Vec3) -> Self {
        self.acceleration = acceleration;
        self
    }

    /// Builder pattern: Set friction
    pub fn with_friction(mut self, friction: f32) -> Self {
        self.friction = friction;
        self
    }

    /// Builder pattern: Set rotation (Euler angles, radians)
    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    /// World-space position
    pub fn translation(&self) -> Vec3 {
        self.translation
    }

    /// Per-axis scale, also the full side length of the bounding box
    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    /// Bounding box derived from the current translation and scale
    pub fn bounding_box(&self) -> BoundingBox {
        self.bounding_box
    }

    /// Replace translation and scale, then resync the box
    pub fn set_transform(&mut self, translation: Vec3, scale: Vec3) {
        self.translation = translation;
        self.scale = scale;
        self.sync_bounding_box();
    }

    /// Replace the translation, then resync the box with the current scale
    pub fn set_translation(&mut self, translation: Vec3) {
        self.set_transform(translation, self.scale);
    }

    /// Replace the scale, then resync the box with the current translation
    pub fn set_scale(&mut self, scale: Vec3) {
        self.set_transform(self.translation, scale);
    }

    /// Advance one fixed step (semi-implicit Euler)
    ///
    /// `velocity += acceleration`, then `translation += velocity`, then the
    /// box is resynced. Rotation is left alone and friction is not applied.
    pub fn update(&mut self) {
        self.velocity += self.acceleration;
        self.set_translation(self.translation + self.velocity);
    }

    /// Scale velocity by `friction`, snapping tiny components to exactly zero
    ///
    /// Each axis is checked on its own against [`FRICTION_DEADBAND`].
    pub fn apply_friction_decay(&mut self) {
        self.velocity *= self.friction;
        for component in self.velocity.iter_mut() {
            if component.abs() < FRICTION_DEADBAND {
                *component = 0.0;
            }
        }
    }

    /// Invert velocity along the axis of least overlap with `other`
    ///
    /// The two remaining axes keep their sign and magnitude. Nothing happens
    /// when the boxes do not intersect.
    pub fn bounce(&mut self, other: &BoundingBox) {
        let signs = self.bounding_box.contact_axis_signs(other);
        self.velocity.component_mul_assign(&signs);
    }

    /// Model matrix: `translation * Ry * Rx * Rz * scale`
    pub fn to_matrix(&self) -> Mat4 {
        let linear = rotation_yxz(self.rotation) * Mat3::from_diagonal(&self.scale);
        let mut matrix = linear.to_homogeneous();
        matrix.fixed_view_mut::<3, 1>(0, 3).copy_from(&self.translation);
        matrix
    }

    /// Rotation with inverse scale, for transforming normals
    pub fn normal_matrix(&self) -> Mat3 {
        let inverse_scale = self.scale.map(|s| 1.0 / s);
        rotation_yxz(self.rotation) * Mat3::from_diagonal(&inverse_scale)
    }

    fn sync_bounding_box(&mut self) {
        self.bounding_box = Self::box_for(self.translation, self.scale);
    }

    fn box_for(translation: Vec3, scale: Vec3) -> BoundingBox {
        let half = scale / 2.0;
        BoundingBox::from_points(translation - half, translation + half)
    }
}
