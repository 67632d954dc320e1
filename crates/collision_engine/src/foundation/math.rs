//! Math utilities and types
//!
//! Provides the vector and matrix aliases used by the collision and
//! integration code, plus the Euler-angle matrix helpers used by transforms.

pub use nalgebra::{Matrix3, Matrix4, Vector3};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 3x3 matrix type
pub type Mat3 = Matrix3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// 2 * Pi
    pub const TAU: f32 = 2.0 * PI;
}

/// Math utility functions
pub mod utils {
    use super::Vec3;

    /// Clamp a value between min and max
    ///
    /// Evaluated as `max(min, min(value, max))`, so inverted bounds
    /// (`min > max`) yield `min` rather than panicking like `f32::clamp`.
    pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
        let upper = if value > max { max } else { value };
        if min >= upper { min } else { upper }
    }

    /// Clamp each component of `point` into `[min, max]`
    pub fn clamp_vec3(point: Vec3, min: Vec3, max: Vec3) -> Vec3 {
        Vec3::new(
            clamp(point.x, min.x, max.x),
            clamp(point.y, min.y, max.y),
            clamp(point.z, min.z, max.z),
        )
    }
}

/// Rotation matrix for Tait-Bryan angles applied in Y(1), X(2), Z(3) order
///
/// `rotation.x`, `rotation.y` and `rotation.z` are radians about each axis.
pub fn rotation_yxz(rotation: Vec3) -> Mat3 {
    let (s3, c3) = rotation.z.sin_cos();
    let (s2, c2) = rotation.x.sin_cos();
    let (s1, c1) = rotation.y.sin_cos();

    // Columns of Ry * Rx * Rz
    Mat3::from_columns(&[
        Vec3::new(c1 * c3 + s1 * s2 * s3, c2 * s3, c1 * s2 * s3 - c3 * s1),
        Vec3::new(c3 * s1 * s2 - c1 * s3, c2 * c3, c1 * c3 * s2 + s1 * s3),
        Vec3::new(c2 * s1, -s2, c1 * c2),
    ])
}
