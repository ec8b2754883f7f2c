//! Application-level schema: the type hierarchy as callers declare it.

mod builder;
pub use builder::{Builder, ChildBuilder};

mod entity_type;
pub use entity_type::{EntityId, EntityType};

mod hierarchy;
pub use hierarchy::Hierarchy;

mod property;
pub use property::{Property, PropertyId};

use super::Name;

/// Name of the implicit identifier property every entity carries.
pub const KEY: &str = "id";
