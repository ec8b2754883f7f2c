//! Correspondence between hierarchy types and the tables storing them.

mod entity;
pub use entity::{DiscriminatorValue, Entity, Field};

use super::app::EntityId;

/// Built together with the store-level schema and immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Mapping {
    /// Per-type mappings, indexed by [`EntityId`].
    pub entities: Vec<Entity>,
}

impl Mapping {
    /// Returns the mapping for the specified type.
    ///
    /// # Panics
    ///
    /// Panics if the type does not belong to the hierarchy the mapping was
    /// built for.
    pub fn entity(&self, id: EntityId) -> &Entity {
        self.entities.get(id.0).expect("invalid entity ID")
    }
}
