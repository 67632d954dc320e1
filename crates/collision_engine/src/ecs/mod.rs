//! Entity registry and per-object components
//!
//! A deliberately small take on ECS: every object carries the same fixed set
//! of components, stored together in the [`World`].

pub mod world;
pub mod entity;
pub mod components;

pub use world::{World, GameObject, WorldError};
pub use entity::{Entity, EntityIdAllocator};
pub use components::{TransformComponent, PointLightComponent};
