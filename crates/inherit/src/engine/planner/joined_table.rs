use super::{assignments, fixed_shape, key_assignment, lower, Translate, Write};
use crate::engine::Step;
use inherit_core::{
    driver::operation::{Count, DeleteByKey, Insert, Join, Query, Source, UpdateByKey},
    schema::{app::EntityType, Schema},
    stmt::{Expr, Id},
    Result,
};

/// Root columns in the root table, each child's own columns in its table.
/// A child row shares its key with the root row it extends.
#[derive(Debug)]
pub(super) struct JoinedTable;

impl JoinedTable {
    /// Root ⋈ leaf for one concrete type, with root-only conjuncts moved to
    /// the root side.
    fn join(schema: &Schema, entity: &EntityType, filter: Option<&Expr>) -> Result<(Source, Option<Expr>)> {
        let mapping = schema.mapping_for(entity.id);
        let root = mapping.tables[0];
        let leaf = mapping.tables[1];

        let (root_filter, filter) = match filter {
            Some(filter) => lower::split_root(lower::lower(filter, mapping, mapping.keys[0])?, root),
            None => (None, None),
        };

        let source = Source::Join(Join {
            root,
            leaf,
            root_filter,
        });

        Ok((source, filter))
    }

    fn query_leaf(schema: &Schema, entity: &EntityType, filter: Option<&Expr>) -> Result<Step> {
        let (source, filter) = Self::join(schema, entity, filter)?;
        let key = schema.mapping_for(entity.id).keys[0];
        let (returning, reconstruct) = fixed_shape(schema, entity, key);

        Ok(Step::entities(
            Query {
                source,
                filter,
                returning,
            },
            reconstruct,
        ))
    }
}

impl Translate for JoinedTable {
    fn insert(&self, schema: &Schema, write: &Write<'_>) -> Vec<Step> {
        let mapping = schema.mapping_for(write.entity.id);

        // Root row first; the leaf row's key references it.
        mapping
            .tables
            .iter()
            .zip(&mapping.keys)
            .map(|(table, key)| {
                let mut values = vec![key_assignment(*key, write.id)];
                values.extend(assignments(write, *table));

                Step::discard(Insert {
                    table: *table,
                    values,
                    unique_across: vec![],
                })
            })
            .collect()
    }

    fn update(&self, schema: &Schema, write: &Write<'_>) -> Vec<Step> {
        let mapping = schema.mapping_for(write.entity.id);
        let root = mapping.tables[0];
        let leaf = mapping.tables[1];
        let mut steps = vec![];

        let root_values = assignments(write, root);
        if !root_values.is_empty() {
            // The root row alone doesn't say which type it belongs to.
            steps.push(Step::require_affected(UpdateByKey {
                table: root,
                key: write.id,
                assignments: root_values,
                filter: Some(Expr::key_in(leaf)),
            }));
        }

        let leaf_values = assignments(write, leaf);
        if !leaf_values.is_empty() {
            steps.push(Step::require_affected(UpdateByKey {
                table: leaf,
                key: write.id,
                assignments: leaf_values,
                filter: None,
            }));
        }

        steps
    }

    fn delete(&self, schema: &Schema, entity: &EntityType, id: Id) -> Vec<Step> {
        let mapping = schema.mapping_for(entity.id);
        let root = mapping.tables[0];
        let leaf = mapping.tables[1];

        // The root row goes only once no child row references it, so a
        // retried or mistyped delete leaves other types' rows alone.
        let unreferenced = Expr::Or(
            schema
                .app
                .children()
                .filter_map(|child| schema.mapping_for(child.id).leaf_table())
                .map(Expr::key_in)
                .collect(),
        )
        .not();

        vec![
            Step::discard(DeleteByKey {
                table: leaf,
                key: id,
                filter: None,
            }),
            Step::discard(DeleteByKey {
                table: root,
                key: id,
                filter: Some(unreferenced),
            }),
        ]
    }

    fn query(
        &self,
        schema: &Schema,
        target: &EntityType,
        filter: Option<&Expr>,
    ) -> Result<Vec<Step>> {
        if target.is_concrete() {
            return Ok(vec![Self::query_leaf(schema, target, filter)?]);
        }

        schema
            .app
            .children()
            .map(|child| Self::query_leaf(schema, child, filter))
            .collect()
    }

    fn count(
        &self,
        schema: &Schema,
        target: &EntityType,
        filter: Option<&Expr>,
    ) -> Result<Vec<Step>> {
        let mapping = schema.mapping_for(target.id);

        if target.is_root() {
            // Root predicates only touch root columns.
            let filter = match filter {
                Some(filter) => Some(lower::lower(filter, mapping, mapping.keys[0])?),
                None => None,
            };

            return Ok(vec![Step::count(Count {
                source: Source::Table(mapping.tables[0]),
                filter,
            })]);
        }

        let (source, filter) = Self::join(schema, target, filter)?;
        Ok(vec![Step::count(Count { source, filter })])
    }
}
