use super::{assignments, fixed_shape, key_assignment, lower::lower, Translate, Write};
use crate::engine::Step;
use inherit_core::{
    driver::operation::{Count, DeleteByKey, Insert, Query, Source, UpdateByKey},
    schema::{app::EntityType, db::TableId, Schema},
    stmt::{Expr, Id},
    Result,
};

/// Each concrete type in its own self-contained table. No table holds the
/// root alone, so polymorphic reads visit every child table.
#[derive(Debug)]
pub(super) struct ConcreteTable;

impl ConcreteTable {
    /// Concrete types `target` covers.
    fn targets<'a>(schema: &'a Schema, target: &'a EntityType) -> Vec<&'a EntityType> {
        if target.is_concrete() {
            vec![target]
        } else {
            schema.app.children().collect()
        }
    }

    fn filter(schema: &Schema, entity: &EntityType, filter: Option<&Expr>) -> Result<Option<Expr>> {
        let mapping = schema.mapping_for(entity.id);

        match filter {
            Some(filter) => Ok(Some(lower(filter, mapping, mapping.keys[0])?)),
            None => Ok(None),
        }
    }

    /// Every child table. Identifiers are unique across all of them.
    fn sibling_tables(schema: &Schema) -> Vec<TableId> {
        schema
            .app
            .children()
            .filter_map(|child| schema.mapping_for(child.id).leaf_table())
            .collect()
    }
}

impl Translate for ConcreteTable {
    fn insert(&self, schema: &Schema, write: &Write<'_>) -> Vec<Step> {
        let mapping = schema.mapping_for(write.entity.id);
        let table = mapping.tables[0];

        let mut values = vec![key_assignment(mapping.keys[0], write.id)];
        values.extend(assignments(write, table));

        vec![Step::discard(Insert {
            table,
            values,
            unique_across: Self::sibling_tables(schema),
        })]
    }

    fn update(&self, schema: &Schema, write: &Write<'_>) -> Vec<Step> {
        let table = schema.mapping_for(write.entity.id).tables[0];

        vec![Step::require_affected(UpdateByKey {
            table,
            key: write.id,
            assignments: assignments(write, table),
            filter: None,
        })]
    }

    fn delete(&self, schema: &Schema, entity: &EntityType, id: Id) -> Vec<Step> {
        vec![Step::discard(DeleteByKey {
            table: schema.mapping_for(entity.id).tables[0],
            key: id,
            filter: None,
        })]
    }

    fn query(
        &self,
        schema: &Schema,
        target: &EntityType,
        filter: Option<&Expr>,
    ) -> Result<Vec<Step>> {
        Self::targets(schema, target)
            .into_iter()
            .map(|entity| {
                let mapping = schema.mapping_for(entity.id);
                let (returning, reconstruct) = fixed_shape(schema, entity, mapping.keys[0]);

                Ok(Step::entities(
                    Query {
                        source: Source::Table(mapping.tables[0]),
                        filter: Self::filter(schema, entity, filter)?,
                        returning,
                    },
                    reconstruct,
                ))
            })
            .collect()
    }

    fn count(
        &self,
        schema: &Schema,
        target: &EntityType,
        filter: Option<&Expr>,
    ) -> Result<Vec<Step>> {
        Self::targets(schema, target)
            .into_iter()
            .map(|entity| {
                Ok(Step::count(Count {
                    source: Source::Table(schema.mapping_for(entity.id).tables[0]),
                    filter: Self::filter(schema, entity, filter)?,
                }))
            })
            .collect()
    }
}
