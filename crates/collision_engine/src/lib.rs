//! # Collision Engine
//!
//! Bounding-volume collision tests and fixed-step motion for a small 3D scene.
//!
//! ## Features
//!
//! - **Bounding Volumes**: Axis-aligned boxes, spheres and points with
//!   symmetric pairwise intersection tests
//! - **Contact Response**: Axis-of-least-penetration bounce with friction decay
//! - **Entity Registry**: Id-ordered objects with transform and light components
//! - **Fixed Timestep**: Accumulator-driven stepping with a per-frame cap
//! - **Configuration**: TOML and RON simulation settings
//!
//! ## Quick Start
//!
//! ```rust
//! use collision_engine::prelude::*;
//!
//! let config = SimulationConfig::default();
//! let mut world = World::new();
//! let scene = ReferenceScene::build(&mut world, &config).unwrap();
//! let mut driver = scene.driver(&config);
//!
//! let report = driver.step(&mut world).unwrap();
//! assert_eq!(report.contacts, vec![scene.obstacles[3]]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod foundation;
pub mod ecs;
pub mod physics;
pub mod simulation;
pub mod config;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, SimulationConfig},
        ecs::{
            Entity, EntityIdAllocator, GameObject, PointLightComponent, TransformComponent, World,
            WorldError,
        },
        foundation::{
            math::{Mat3, Mat4, Vec3},
            time::{Stopwatch, Timer},
        },
        physics::{BoundingBox, BoundingSphere, ContactAxis, Volume},
        simulation::{FixedTimestep, ReferenceScene, SimulationError, TickDriver, TickReport},
    };
}
