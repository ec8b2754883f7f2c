use super::{Id, Value};
use indexmap::IndexMap;

/// A runtime entity value: its concrete type, its identifier once assigned,
/// and its property values keyed by property name.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    ty: String,
    id: Option<Id>,
    values: IndexMap<String, Value>,
}

impl Entity {
    pub fn new(ty: impl Into<String>) -> Entity {
        Entity {
            ty: ty.into(),
            id: None,
            values: IndexMap::new(),
        }
    }

    /// Name of the entity's concrete type.
    pub fn ty(&self) -> &str {
        &self.ty
    }

    pub fn id(&self) -> Option<Id> {
        self.id
    }

    pub fn with_id(mut self, id: impl Into<Id>) -> Entity {
        self.id = Some(id.into());
        self
    }

    pub fn set_id(&mut self, id: Id) {
        self.id = Some(id);
    }

    /// Builder-style [`Entity::set`].
    pub fn with(mut self, property: impl Into<String>, value: impl Into<Value>) -> Entity {
        self.set(property, value);
        self
    }

    /// Sets a property, returning the previous value.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(property.into(), value.into())
    }

    pub fn get(&self, property: &str) -> Option<&Value> {
        self.values.get(property)
    }

    /// Property values in insertion order.
    pub fn values(&self) -> impl ExactSizeIterator<Item = (&str, &Value)> + '_ {
        self.values
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }
}
