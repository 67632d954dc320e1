//! Ordered registry of scene objects
//!
//! Objects live in a dense slot vector indexed by their offset from the
//! first id the world's [`EntityIdAllocator`] hands out. Ids only ever grow,
//! so ascending id order is also insertion order, and iteration follows it.
//!
//! There is no removal: objects live as long as the world.

use thiserror::Error;

use super::components::{PointLightComponent, TransformComponent};
use super::entity::{Entity, EntityIdAllocator};
use crate::foundation::math::Vec3;

/// Errors raised by the registry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorldError {
    /// The allocator has handed out its last id
    #[error("Entity ids exhausted")]
    IdsExhausted,
}

/// One object in the scene
#[derive(Debug, Clone, PartialEq)]
pub struct GameObject {
    entity: Entity,

    /// Pose, motion and bounding box
    pub transform: TransformComponent,

    /// Display color, passed through to whatever draws the scene
    pub color: Vec3,

    /// Present on light-emitting objects only
    pub point_light: Option<PointLightComponent>,
}

impl GameObject {
    fn new(entity: Entity) -> Self {
        Self {
            entity,
            transform: TransformComponent::default(),
            color: Vec3::zeros(),
            point_light: None,
        }
    }

    /// Identity of this object
    pub fn entity(&self) -> Entity {
        self.entity
    }
}

/// Container for every object in the scene
#[derive(Debug, Default)]
pub struct World {
    allocator: EntityIdAllocator,
    first_id: u32,
    slots: Vec<GameObject>,
}

impl World {
    /// Create an empty world whose first id is 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty world drawing ids from `allocator`
    pub fn with_allocator(allocator: EntityIdAllocator) -> Self {
        let first_id = allocator.peek().map_or(u32::MAX, |e| e.id());
        Self {
            allocator,
            first_id,
            slots: Vec::new(),
        }
    }

    /// Allocate an id and store a default object under it
    pub fn create_object(&mut self) -> Result<&mut GameObject, WorldError> {
        let entity = self.allocator.next_entity().ok_or(WorldError::IdsExhausted)?;
        log::trace!("World: created object {entity}");
        let index = self.slots.len();
        self.slots.push(GameObject::new(entity));
        Ok(&mut self.slots[index])
    }

    /// Create a point light object
    ///
    /// The radius is stored in `transform.scale.x`, the other scale axes stay 1.
    pub fn make_point_light(
        &mut self,
        intensity: f32,
        radius: f32,
        color: Vec3,
    ) -> Result<&mut GameObject, WorldError> {
        let object = self.create_object()?;
        let mut scale = object.transform.scale();
        scale.x = radius;
        object.transform.set_scale(scale);
        object.color = color;
        object.point_light = Some(PointLightComponent::new(intensity));
        Ok(object)
    }

    /// Create a white point light with the default intensity and radius
    pub fn make_default_point_light(&mut self) -> Result<&mut GameObject, WorldError> {
        self.make_point_light(
            PointLightComponent::DEFAULT_INTENSITY,
            PointLightComponent::DEFAULT_RADIUS,
            Vec3::repeat(1.0),
        )
    }

    /// Look up an object by id
    pub fn get(&self, entity: Entity) -> Option<&GameObject> {
        self.slots.get(self.slot_index(entity)?)
    }

    /// Look up an object by id for mutation
    pub fn get_mut(&mut self, entity: Entity) -> Option<&mut GameObject> {
        let index = self.slot_index(entity)?;
        self.slots.get_mut(index)
    }

    /// Whether an object with this id exists
    pub fn contains(&self, entity: Entity) -> bool {
        self.get(entity).is_some()
    }

    /// Objects in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = &GameObject> {
        self.slots.iter()
    }

    /// Objects in ascending id order, mutably
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut GameObject> {
        self.slots.iter_mut()
    }

    /// Ids in ascending order
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.iter().map(GameObject::entity)
    }

    /// Number of objects
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the world holds no objects
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The id the next created object will get, `None` once ids run out
    pub fn next_entity(&self) -> Option<Entity> {
        self.allocator.peek()
    }

    fn slot_index(&self, entity: Entity) -> Option<usize> {
        let offset = entity.id().checked_sub(self.first_id)?;
        usize::try_from(offset).ok()
    }
}
