//! Point light payload carried by some scene objects
//!
//! Pure data. The collision core never reads it; it only rides along on the
//! objects the host registers.

/// Light emitted from an object's translation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLightComponent {
    /// Light intensity multiplier
    pub intensity: f32,
}

impl PointLightComponent {
    /// Default intensity for lights created without one
    pub const DEFAULT_INTENSITY: f32 = 10.0;

    /// Default radius (stored in the owner's `scale.x`)
    pub const DEFAULT_RADIUS: f32 = 0.1;

    /// Create a light with the given intensity
    pub const fn new(intensity: f32) -> Self {
        Self { intensity }
    }
}

impl Default for PointLightComponent {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INTENSITY)
    }
}
