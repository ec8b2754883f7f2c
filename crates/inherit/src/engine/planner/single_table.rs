use super::{and, assignments, fixed_shape, key_assignment, lower::lower, Translate, Write};
use crate::engine::{Reconstruct, Shape, Step};
use inherit_core::{
    driver::operation::{Assignment, Count, DeleteByKey, Insert, Query, Source, UpdateByKey},
    schema::{app::EntityType, mapping, Schema},
    stmt::{Expr, Id, Value},
    Result,
};

/// Every row lives in one table; the discriminator tells types apart.
#[derive(Debug)]
pub(super) struct SingleTable;

impl SingleTable {
    /// `discriminator = '<Type>'` for a concrete type.
    fn type_filter(mapping: &mapping::Entity) -> Option<Expr> {
        mapping
            .discriminator
            .as_ref()
            .map(|d| Expr::column(d.column).eq(Value::from(d.value.as_str())))
    }

    fn filter(schema: &Schema, target: &EntityType, filter: Option<&Expr>) -> Result<Option<Expr>> {
        let mapping = schema.mapping_for(target.id);

        let lowered = match filter {
            Some(filter) => Some(lower(filter, mapping, mapping.keys[0])?),
            None => None,
        };

        Ok(match Self::type_filter(mapping) {
            Some(type_filter) => Some(and(lowered, type_filter)),
            None => lowered,
        })
    }
}

impl Translate for SingleTable {
    fn insert(&self, schema: &Schema, write: &Write<'_>) -> Vec<Step> {
        let mapping = schema.mapping_for(write.entity.id);
        let table = mapping.tables[0];

        let mut values = vec![key_assignment(mapping.keys[0], write.id)];
        values.extend(assignments(write, table));

        if let Some(discriminator) = &mapping.discriminator {
            values.push(Assignment {
                column: discriminator.column,
                value: Value::from(discriminator.value.as_str()),
            });
        }

        vec![Step::discard(Insert {
            table,
            values,
            unique_across: vec![],
        })]
    }

    fn update(&self, schema: &Schema, write: &Write<'_>) -> Vec<Step> {
        let mapping = schema.mapping_for(write.entity.id);
        let table = mapping.tables[0];

        vec![Step::require_affected(UpdateByKey {
            table,
            key: write.id,
            assignments: assignments(write, table),
            filter: Self::type_filter(mapping),
        })]
    }

    fn delete(&self, schema: &Schema, entity: &EntityType, id: Id) -> Vec<Step> {
        let mapping = schema.mapping_for(entity.id);

        vec![Step::discard(DeleteByKey {
            table: mapping.tables[0],
            key: id,
            filter: Self::type_filter(mapping),
        })]
    }

    fn query(
        &self,
        schema: &Schema,
        target: &EntityType,
        filter: Option<&Expr>,
    ) -> Result<Vec<Step>> {
        let mapping = schema.mapping_for(target.id);
        let table = mapping.tables[0];
        let filter = Self::filter(schema, target, filter)?;

        if target.is_concrete() {
            let (returning, reconstruct) = fixed_shape(schema, target, mapping.keys[0]);

            return Ok(vec![Step::entities(
                Query {
                    source: Source::Table(table),
                    filter,
                    returning,
                },
                reconstruct,
            )]);
        }

        // Polymorphic: read every column, pick the shape per row.
        let columns = &schema.db.table(table).columns;
        let returning = columns.iter().map(|column| column.id).collect();

        let mut shapes = vec![];
        let mut discriminator = None;

        for child in schema.app.children() {
            let child_mapping = schema.mapping_for(child.id);
            let Some(d) = &child_mapping.discriminator else {
                continue;
            };
            discriminator = Some(d.column.index);

            shapes.push((
                d.value.clone(),
                Shape {
                    entity: child.name.to_string(),
                    position: schema.app.position(child.id),
                    key: 0,
                    fields: child_mapping
                        .fields
                        .iter()
                        .map(|field| (field.name.clone(), field.column.index))
                        .collect(),
                },
            ));
        }

        let column = discriminator.unwrap_or(columns.len() - 1);

        Ok(vec![Step::entities(
            Query {
                source: Source::Table(table),
                filter,
                returning,
            },
            Reconstruct::Discriminated { column, shapes },
        )])
    }

    fn count(
        &self,
        schema: &Schema,
        target: &EntityType,
        filter: Option<&Expr>,
    ) -> Result<Vec<Step>> {
        let mapping = schema.mapping_for(target.id);

        Ok(vec![Step::count(Count {
            source: Source::Table(mapping.tables[0]),
            filter: Self::filter(schema, target, filter)?,
        })])
    }
}
