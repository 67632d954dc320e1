//! The reference demo scene
//!
//! Five half-unit cubes laid out as a plus sign on the `z = 2.5` plane, with
//! the center one moving. Around them sit a model placeholder, a floor and a
//! ring of six point lights. Ids are allocated in that order, so the mover is
//! always id 0 in a fresh world.

use nalgebra::Rotation3;

use super::tick::TickDriver;
use crate::config::SimulationConfig;
use crate::ecs::{Entity, World, WorldError};
use crate::foundation::math::{constants::TAU, Vec3};

/// Side length of every cube in the scene
pub const CUBE_SCALE: f32 = 0.5;

/// Depth of the plane the cubes sit on
pub const CUBE_PLANE_Z: f32 = 2.5;

/// Where the moving cube starts
pub const MOVER_START: [f32; 3] = [0.0, 0.5, CUBE_PLANE_Z];

const OBSTACLE_POSITIONS: [[f32; 3]; 4] = [
    [-1.0, 0.0, CUBE_PLANE_Z], // left
    [0.0, -1.0, CUBE_PLANE_Z], // top (y points down)
    [1.0, 0.0, CUBE_PLANE_Z],  // right
    [0.0, 1.0, CUBE_PLANE_Z],  // bottom
];

const LIGHT_COLORS: [[f32; 3]; 6] = [
    [1.0, 0.1, 0.1],
    [0.1, 0.1, 1.0],
    [0.1, 1.0, 0.1],
    [1.0, 1.0, 0.1],
    [0.1, 1.0, 1.0],
    [1.0, 1.0, 1.0],
];

/// Ids of the interesting objects in the reference scene
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceScene {
    /// The moving cube
    pub mover: Entity,
    /// The four static cubes, in creation order
    pub obstacles: Vec<Entity>,
    /// The model placeholder
    pub model: Entity,
    /// The floor quad
    pub floor: Entity,
    /// The point lights, in creation order
    pub lights: Vec<Entity>,
}

impl ReferenceScene {
    /// Populate `world` with the reference scene
    pub fn build(world: &mut World, config: &SimulationConfig) -> Result<Self, WorldError> {
        let cube_scale = Vec3::repeat(CUBE_SCALE);

        let mover = {
            let object = world.create_object()?;
            object.transform.set_transform(Vec3::from(MOVER_START), cube_scale);
            object.transform.velocity = config.mover_velocity;
            object.transform.friction = config.mover_friction;
            object.entity()
        };

        let obstacles = OBSTACLE_POSITIONS
            .iter()
            .map(|&position| {
                let object = world.create_object()?;
                object.transform.set_transform(Vec3::from(position), cube_scale);
                Ok(object.entity())
            })
            .collect::<Result<Vec<_>, WorldError>>()?;

        let model = {
            let object = world.create_object()?;
            object.transform.set_transform(Vec3::new(0.0, 1.5, 0.0), cube_scale);
            object.entity()
        };

        let floor = {
            let object = world.create_object()?;
            object.transform.set_transform(Vec3::new(0.0, 0.5, 0.0), Vec3::repeat(3.0));
            object.entity()
        };

        let lights = LIGHT_COLORS
            .iter()
            .enumerate()
            .map(|(i, &color)| {
                #[allow(clippy::cast_precision_loss)]
                let angle = i as f32 * TAU / LIGHT_COLORS.len() as f32;
                // Spun about -Y, the same as +Y by the negated angle
                let rotation = Rotation3::from_axis_angle(&Vec3::y_axis(), -angle);
                let light = world.make_point_light(0.2, 0.1, Vec3::from(color))?;
                light.transform.set_translation(rotation * Vec3::new(-1.0, -0.5, -1.0));
                Ok(light.entity())
            })
            .collect::<Result<Vec<_>, WorldError>>()?;

        log::info!("ReferenceScene: built {} objects, mover {}", world.len(), mover);
        Ok(Self { mover, obstacles, model, floor, lights })
    }

    /// Tick driver moving the mover against the four static cubes
    pub fn driver(&self, config: &SimulationConfig) -> TickDriver {
        TickDriver::new(self.mover, self.obstacles.iter().copied()).with_config(config)
    }

    /// Starting pose for a relaunch; `direction` flips the side it starts from
    pub fn relaunch_position(direction: f32) -> Vec3 {
        Vec3::new(0.01 * direction, 0.499 * direction, CUBE_PLANE_Z)
    }
}
