pub mod app;

mod builder;
pub use builder::Builder;

pub mod db;

pub mod mapping;
use mapping::Mapping;

mod name;
pub use name::Name;

mod strategy;
pub use strategy::Strategy;

mod verify;

use app::{EntityId, Hierarchy};
use db::Table;
use std::sync::Arc;

/// A hierarchy together with the store layout derived for it under one
/// strategy.
#[derive(Debug)]
pub struct Schema {
    /// The hierarchy as declared
    pub app: Hierarchy,

    /// Store-level schema
    pub db: Arc<db::Schema>,

    /// Maps the hierarchy to the store-level schema
    pub mapping: Mapping,

    pub strategy: Strategy,
}

impl Schema {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn mapping_for(&self, id: EntityId) -> &mapping::Entity {
        self.mapping.entity(id)
    }

    /// Tables storing instances of `id`, in write order.
    pub fn tables_for(&self, id: EntityId) -> impl Iterator<Item = &Table> + '_ {
        self.mapping_for(id)
            .tables
            .iter()
            .map(|table| self.db.table(*table))
    }
}
