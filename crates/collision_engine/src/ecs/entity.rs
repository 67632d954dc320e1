//! Entity identifiers and id allocation

use std::fmt;

/// Entity identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Entity {
    id: u32,
}

impl Entity {
    /// Wrap a raw id, e.g. one the host knows by convention
    pub const fn new(id: u32) -> Self {
        Self { id }
    }

    /// Get the entity ID
    pub const fn id(&self) -> u32 {
        self.id
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.id)
    }
}

/// Hands out monotonically increasing entity ids
///
/// Owned by whoever builds entities, normally the [`World`](super::World).
/// Resetting it makes id sequences reproducible between tests. Once `u32::MAX`
/// has been handed out the allocator is exhausted and yields no more ids.
#[derive(Debug, Clone)]
pub struct EntityIdAllocator {
    next_id: Option<u32>,
}

impl Default for EntityIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityIdAllocator {
    /// Allocator whose first id is 0
    pub const fn new() -> Self {
        Self { next_id: Some(0) }
    }

    /// Allocator whose first id is `first`
    pub const fn starting_at(first: u32) -> Self {
        Self { next_id: Some(first) }
    }

    /// Consume and return the next id, or `None` once ids run out
    pub fn next_entity(&mut self) -> Option<Entity> {
        let id = self.next_id?;
        self.next_id = id.checked_add(1);
        Some(Entity::new(id))
    }

    /// The id the next call to [`next_entity`](Self::next_entity) returns
    pub fn peek(&self) -> Option<Entity> {
        self.next_id.map(Entity::new)
    }

    /// Restart at id 0
    pub fn reset(&mut self) {
        self.next_id = Some(0);
    }
}
