mod concrete_table;
mod joined_table;
mod single_table;

use super::{
    app::{EntityId, Hierarchy, Property},
    db::{self, ColumnId, Table, TableId},
    mapping, Mapping, Name, Schema, Strategy,
};
use crate::{stmt::Type, Error, Result};
use std::sync::Arc;

/// Default name of the column telling apart types that share one table.
pub const DEFAULT_DISCRIMINATOR_COLUMN: &str = "discriminator";

#[derive(Debug, Clone)]
pub struct Builder {
    /// If set, prefix all table names with this string
    table_name_prefix: Option<String>,

    discriminator_column: String,
}

/// Used to track state during the build process
struct BuildSchema<'a> {
    /// Build options
    builder: &'a Builder,

    app: &'a Hierarchy,

    /// Tables as they are built
    tables: Vec<Table>,

    /// Per-type mappings, indexed by entity ID
    entities: Vec<mapping::Entity>,
}

impl Builder {
    pub fn new() -> Self {
        Self {
            table_name_prefix: None,
            discriminator_column: DEFAULT_DISCRIMINATOR_COLUMN.to_string(),
        }
    }

    pub fn table_name_prefix(&mut self, prefix: &str) -> &mut Self {
        self.table_name_prefix = Some(prefix.to_string());
        self
    }

    pub fn discriminator_column(&mut self, name: &str) -> &mut Self {
        self.discriminator_column = name.to_string();
        self
    }

    /// Derives the store layout for `app` under `strategy`.
    pub fn build(&self, app: Hierarchy, strategy: Strategy) -> Result<Schema> {
        let mut build = BuildSchema {
            builder: self,
            app: &app,
            tables: vec![],
            entities: app
                .entities()
                .map(|entity| mapping::Entity::new(entity.id))
                .collect(),
        };

        match strategy {
            Strategy::SingleTable => build.build_single_table()?,
            Strategy::JoinedTable => build.build_joined_table()?,
            Strategy::ConcreteTable => build.build_concrete_table()?,
        }

        let BuildSchema {
            tables, entities, ..
        } = build;

        let schema = Schema {
            db: Arc::new(db::Schema { tables }),
            mapping: Mapping { entities },
            app,
            strategy,
        };

        schema.verify()?;

        Ok(schema)
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildSchema<'_> {
    /// Creates an empty table for `name` with its identifier column.
    fn create_table(&mut self, name: &Name) -> TableId {
        let id = TableId(self.tables.len());
        let table_name = match &self.builder.table_name_prefix {
            Some(prefix) => format!("{prefix}{}", name.table_name()),
            None => name.table_name(),
        };

        let mut table = Table::new(id, table_name);
        table.push_column(super::app::KEY.to_string(), Type::Id, false);
        self.tables.push(table);
        id
    }

    fn table_mut(&mut self, id: TableId) -> &mut Table {
        &mut self.tables[id.0]
    }

    fn push_property_column(&mut self, table: TableId, property: &Property, nullable: bool) -> ColumnId {
        self.table_mut(table)
            .push_column(property.storage_name(), property.ty, nullable)
    }

    /// Records that instances of `entity` have a row in `table`.
    fn map_table(&mut self, entity: EntityId, table: TableId) {
        let key = self.tables[table.0].primary_key().id;
        let mapping = &mut self.entities[entity.0];
        mapping.tables.push(table);
        mapping.keys.push(key);
    }

    fn map_field(&mut self, entity: EntityId, property: &Property, column: ColumnId) {
        self.entities[entity.0].fields.push(mapping::Field {
            property: property.id,
            name: property.name.clone(),
            column,
        });
    }

    fn schema_error(&self, message: impl Into<String>) -> Error {
        Error::schema_derivation(format!(
            "cannot lay out `{}`: {}",
            self.app.root().name,
            message.into()
        ))
    }
}
