//! ECS Components module
//!
//! Per-object data attached to every entity in the [`World`](crate::ecs::World).

pub mod transform;
pub mod point_light;

pub use transform::TransformComponent;
pub use point_light::PointLightComponent;
