//! Reference tick driver
//!
//! Plays the host's part for one moving object: each fixed step it tests the
//! mover's box against a list of obstacles, bounces and decays on contact,
//! applies the timed friction decay, then integrates.

use thiserror::Error;

use super::fixed_timestep::FixedTimestep;
use crate::config::SimulationConfig;
use crate::ecs::{Entity, World, WorldError};
use crate::foundation::math::Vec3;
use crate::physics::collision::BoundingBox;

/// Errors raised while driving the simulation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// The driver refers to an entity the world does not hold
    #[error("Unknown entity: {0}")]
    UnknownEntity(Entity),

    /// The world refused to create an object
    #[error("World error: {0}")]
    World(#[from] WorldError),
}

/// What happened during one fixed step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Obstacles the mover touched, in the order they were tested
    pub contacts: Vec<Entity>,
    /// Whether the timed friction decay fired
    pub decayed: bool,
}

/// Totals over every step run by one [`TickDriver::advance`] call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdvanceSummary {
    /// Steps run
    pub steps: u32,
    /// Contacts resolved across those steps
    pub contacts: usize,
    /// Timed decays applied across those steps
    pub decays: usize,
}

/// Fixed-step driver for one moving object among static obstacles
#[derive(Debug, Clone)]
pub struct TickDriver {
    mover: Entity,
    obstacles: Vec<Entity>,
    timestep: FixedTimestep,
    ticks_per_decay: Option<u32>,
    ticks_since_decay: u32,
    ticks: u64,
}

impl TickDriver {
    /// Drive `mover` against `obstacles` with the default 1/60 step and a
    /// one-second decay timer
    ///
    /// Obstacles are tested in the order given; the mover itself is skipped
    /// if listed.
    pub fn new(mover: Entity, obstacles: impl IntoIterator<Item = Entity>) -> Self {
        let obstacles = obstacles.into_iter().filter(|&entity| entity != mover).collect();
        let timestep = FixedTimestep::default();
        Self {
            mover,
            obstacles,
            ticks_per_decay: Self::ticks_for(1.0, timestep.step()),
            timestep,
            ticks_since_decay: 0,
            ticks: 0,
        }
    }

    /// Drive `mover` against every other object in the world, in id order
    pub fn against_all(world: &World, mover: Entity) -> Self {
        Self::new(mover, world.entities())
    }

    /// Apply the step length, step cap and decay interval from `config`
    pub fn with_config(mut self, config: &SimulationConfig) -> Self {
        self.timestep = FixedTimestep::new(config.fixed_step, config.max_steps_per_frame);
        self.ticks_per_decay = Self::ticks_for(config.decay_interval, config.fixed_step);
        self
    }

    /// Apply the timed decay every `interval` seconds (0 disables it)
    pub fn with_decay_interval(mut self, interval: f64) -> Self {
        self.ticks_per_decay = Self::ticks_for(interval, self.timestep.step());
        self
    }

    /// The moving object
    pub fn mover(&self) -> Entity {
        self.mover
    }

    /// Obstacles tested each step, in test order
    pub fn obstacles(&self) -> &[Entity] {
        &self.obstacles
    }

    /// Steps run so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// The accumulator feeding [`advance`](Self::advance)
    pub fn timestep(&self) -> &FixedTimestep {
        &self.timestep
    }

    /// Run one fixed step
    ///
    /// Order within the step: contact tests (bounce, then decay, per hit),
    /// timed decay, integration.
    pub fn step(&mut self, world: &mut World) -> Result<TickReport, SimulationError> {
        let obstacle_boxes = self.obstacle_boxes(world)?;
        let mover = world
            .get_mut(self.mover)
            .ok_or(SimulationError::UnknownEntity(self.mover))?;
        let transform = &mut mover.transform;

        let mut report = TickReport::default();
        for (entity, obstacle) in obstacle_boxes {
            if transform.bounding_box().intersects_box(&obstacle) {
                transform.bounce(&obstacle);
                transform.apply_friction_decay();
                log::debug!(
                    "TickDriver: {} hit {} at tick {}, velocity now {:?}",
                    self.mover,
                    entity,
                    self.ticks,
                    transform.velocity
                );
                report.contacts.push(entity);
            }
        }

        if let Some(period) = self.ticks_per_decay {
            self.ticks_since_decay += 1;
            if self.ticks_since_decay >= period {
                transform.apply_friction_decay();
                self.ticks_since_decay = 0;
                report.decayed = true;
            }
        }

        transform.update();
        self.ticks += 1;

        log::trace!(
            "TickDriver: tick {} translation {:?} velocity {:?}",
            self.ticks,
            transform.translation(),
            transform.velocity
        );
        Ok(report)
    }

    /// Bank `delta_time` seconds and run every step that is now due
    pub fn advance(
        &mut self,
        world: &mut World,
        delta_time: f64,
    ) -> Result<AdvanceSummary, SimulationError> {
        self.timestep.accumulate(delta_time);
        let steps = self.timestep.drain();

        let mut summary = AdvanceSummary { steps, ..AdvanceSummary::default() };
        for _ in 0..steps {
            let report = self.step(world)?;
            summary.contacts += report.contacts.len();
            summary.decays += usize::from(report.decayed);
        }
        Ok(summary)
    }

    /// Put the mover back at `translation` with `velocity`
    pub fn relaunch(
        &self,
        world: &mut World,
        translation: Vec3,
        velocity: Vec3,
    ) -> Result<(), SimulationError> {
        let mover = world
            .get_mut(self.mover)
            .ok_or(SimulationError::UnknownEntity(self.mover))?;
        mover.transform.set_translation(translation);
        mover.transform.velocity = velocity;
        log::info!(
            "TickDriver: relaunched {} from {:?} with velocity {:?}",
            self.mover,
            translation,
            velocity
        );
        Ok(())
    }

    fn obstacle_boxes(&self, world: &World) -> Result<Vec<(Entity, BoundingBox)>, SimulationError> {
        self.obstacles
            .iter()
            .map(|&entity| {
                world
                    .get(entity)
                    .map(|object| (entity, object.transform.bounding_box()))
                    .ok_or(SimulationError::UnknownEntity(entity))
            })
            .collect()
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn ticks_for(interval: f64, step: f64) -> Option<u32> {
        if interval > 0.0 && step > 0.0 {
            Some(((interval / step).round() as u32).max(1))
        } else {
            None
        }
    }
}
