//! Fixed-step simulation driving
//!
//! - [`fixed_timestep`] - accumulator turning frame time into whole steps
//! - [`tick`] - per-step contact, decay and integration order for one mover
//! - [`scene`] - the reference demo scene

pub mod fixed_timestep;
pub mod tick;
pub mod scene;

pub use fixed_timestep::FixedTimestep;
pub use tick::{AdvanceSummary, SimulationError, TickDriver, TickReport};
pub use scene::ReferenceScene;

#[cfg(test)]
mod scenario_tests;
