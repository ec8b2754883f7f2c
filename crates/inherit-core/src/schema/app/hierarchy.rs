use super::{Builder, EntityId, EntityType, Name, Property, KEY};
use crate::{Error, Result};

/// A root type and its direct children. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Hierarchy {
    /// The root at index 0, then children in declaration order
    types: Vec<EntityType>,
}

impl Hierarchy {
    pub fn builder(root: impl Into<String>) -> Builder {
        Builder::new(root)
    }

    pub(super) fn from_types(types: Vec<EntityType>) -> Hierarchy {
        debug_assert!(types.first().is_some_and(EntityType::is_root));
        Hierarchy { types }
    }

    pub fn root(&self) -> &EntityType {
        &self.types[0]
    }

    /// Concrete types in declaration order.
    pub fn children(&self) -> impl ExactSizeIterator<Item = &EntityType> + '_ {
        self.types[1..].iter()
    }

    pub fn entities(&self) -> impl ExactSizeIterator<Item = &EntityType> + '_ {
        self.types.iter()
    }

    pub fn entity(&self, id: EntityId) -> &EntityType {
        &self.types[id.0]
    }

    pub fn entity_by_name(&self, name: &str) -> Option<&EntityType> {
        let name = Name::new(name);
        self.types.iter().find(|entity| entity.name == name)
    }

    /// Resolves a type name, failing with an unknown type error.
    pub fn resolve(&self, name: &str) -> Result<&EntityType> {
        self.entity_by_name(name)
            .ok_or_else(|| Error::unknown_type(name))
    }

    /// Resolves a type name that must be concrete.
    pub fn resolve_concrete(&self, name: &str) -> Result<&EntityType> {
        let entity = self.resolve(name)?;
        if entity.is_root() {
            return Err(Error::not_concrete(entity.name.to_string()));
        }
        Ok(entity)
    }

    /// Every property an instance of `id` carries: the root's, then the
    /// type's own.
    pub fn properties_of(&self, id: EntityId) -> impl Iterator<Item = &Property> + '_ {
        let entity = self.entity(id);
        let inherited = entity
            .parent
            .map(|parent| self.entity(parent).properties.as_slice())
            .unwrap_or_default();

        inherited.iter().chain(entity.properties.iter())
    }

    /// Looks up a property an instance of `id` carries, own or inherited.
    pub fn property(&self, id: EntityId, name: &str) -> Option<&Property> {
        self.properties_of(id).find(|property| property.name == name)
    }

    /// Like [`Hierarchy::property`], but the identifier also resolves and a
    /// miss is an unknown property error.
    pub fn resolve_property(&self, id: EntityId, name: &str) -> Result<Option<&Property>> {
        if name == KEY {
            return Ok(None);
        }

        match self.property(id, name) {
            Some(property) => Ok(Some(property)),
            None => Err(Error::unknown_property(
                self.entity(id).name.to_string(),
                name,
            )),
        }
    }

    /// Declaration position of a concrete type; used to order polymorphic
    /// results.
    pub fn position(&self, id: EntityId) -> usize {
        id.0
    }
}
