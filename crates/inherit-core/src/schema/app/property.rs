use super::EntityId;
use crate::stmt::Type;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// Uniquely identifies the property within the hierarchy
    pub id: PropertyId,

    /// Name as declared
    pub name: String,

    /// Scalar kind
    pub ty: Type,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct PropertyId {
    /// The type that declares the property
    pub entity: EntityId,
    pub index: usize,
}

impl Property {
    /// Column name for the property.
    pub fn storage_name(&self) -> String {
        std_util::str::snake_case(&self.name)
    }
}

impl fmt::Debug for PropertyId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "PropertyId({}/{})", self.entity.0, self.index)
    }
}
