use super::{Name, Property, PropertyId};
use std::fmt;

/// One level of the hierarchy.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityType {
    pub id: EntityId,

    pub name: Name,

    /// Properties declared by this type, in declaration order
    pub properties: Vec<Property>,

    /// `None` for the root
    pub parent: Option<EntityId>,
}

/// Identifies a type within its hierarchy. The root is always `EntityId(0)`;
/// children follow in declaration order.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub usize);

impl EntityType {
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Only the root is abstract; every child is a concrete (leaf) type.
    pub fn is_concrete(&self) -> bool {
        !self.is_root()
    }

    pub fn property(&self, id: PropertyId) -> &Property {
        assert_eq!(self.id, id.entity);
        &self.properties[id.index]
    }

    pub fn own_property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|property| property.name == name)
    }
}

impl EntityId {
    pub const ROOT: EntityId = EntityId(0);

    pub const fn property(self, index: usize) -> PropertyId {
        PropertyId {
            entity: self,
            index,
        }
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "EntityId({})", self.0)
    }
}
