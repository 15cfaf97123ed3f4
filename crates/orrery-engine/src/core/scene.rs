use crate::api::types::EntityId;
use crate::components::entity::Entity;

/// Simple entity storage using a flat Vec.
/// An orrery holds tens of entities; linear lookups are fine.
pub struct Scene {
    entities: Vec<Entity>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            entities: Vec::with_capacity(32),
        }
    }

    /// Add an entity to the scene.
    pub fn spawn(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    /// Get a reference to an entity by ID.
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Get a mutable reference to an entity by ID.
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    /// Iterate over all entities in spawn order.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Iterate over all entities mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }

    /// Find the first entity with the given tag.
    pub fn find_by_tag(&self, tag: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.tag == tag)
    }

    /// Find all entities with the given tag.
    pub fn find_all_by_tag(&self, tag: &str) -> Vec<&Entity> {
        self.entities.iter().filter(|e| e.tag == tag).collect()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
