mod concrete_table;
mod joined_table;
mod lower;
mod single_table;

use super::{Engine, Plan, Reconstruct, Shape, Step};
use inherit_core::{
    driver::operation::Assignment,
    schema::{
        app::{EntityType, KEY},
        db::{ColumnId, TableId},
        mapping, Schema, Strategy,
    },
    stmt::{self, Entity, Expr, Id, Statement, Value},
    err, Error, Result,
};
use std::{fmt, sync::Arc};

/// The per-strategy half of translation. The shared half in this module
/// resolves types, validates values and predicates, and hands the
/// translator only checked input.
pub(super) trait Translate: fmt::Debug + Send + Sync + 'static {
    fn insert(&self, schema: &Schema, write: &Write<'_>) -> Vec<Step>;

    /// `write.values` is never empty.
    fn update(&self, schema: &Schema, write: &Write<'_>) -> Vec<Step>;

    fn delete(&self, schema: &Schema, entity: &EntityType, id: Id) -> Vec<Step>;

    /// `filter` only references properties `target` carries.
    fn query(&self, schema: &Schema, target: &EntityType, filter: Option<&Expr>)
        -> Result<Vec<Step>>;

    fn count(&self, schema: &Schema, target: &EntityType, filter: Option<&Expr>)
        -> Result<Vec<Step>>;
}

/// A checked write: values are cast to their property's kind and listed in
/// mapping order.
#[derive(Debug)]
pub(super) struct Write<'a> {
    pub(super) entity: &'a EntityType,
    pub(super) id: Id,
    pub(super) values: Vec<(&'a mapping::Field, Value)>,
}

pub(super) fn translator(strategy: Strategy) -> Arc<dyn Translate> {
    match strategy {
        Strategy::SingleTable => Arc::new(single_table::SingleTable),
        Strategy::JoinedTable => Arc::new(joined_table::JoinedTable),
        Strategy::ConcreteTable => Arc::new(concrete_table::ConcreteTable),
    }
}

struct Planner<'a> {
    schema: &'a Schema,
    translate: &'a dyn Translate,
}

impl Engine {
    /// Translates `stmt` into table actions without running them. The same
    /// statement always produces the same plan.
    ///
    /// Inserts must carry an identifier; [`Db`](crate::Db) assigns one from
    /// its generator before planning.
    pub fn plan(&self, stmt: impl Into<Statement>) -> Result<Plan> {
        let stmt = stmt.into();

        let plan = Planner {
            schema: &self.schema,
            translate: &*self.translate,
        }
        .plan(stmt)?;

        log::debug!(
            "planned {} step(s); strategy={}; transaction={}",
            plan.steps.len(),
            self.schema.strategy,
            plan.transaction
        );

        Ok(plan)
    }
}

impl<'a> Planner<'a> {
    fn plan(&self, stmt: Statement) -> Result<Plan> {
        match stmt {
            Statement::Insert(stmt) => self.plan_insert(&stmt.entity),
            Statement::Update(stmt) => self.plan_update(&stmt),
            Statement::Delete(stmt) => self.plan_delete(&stmt),
            Statement::Query(stmt) => self.plan_query(&stmt),
            Statement::Count(stmt) => self.plan_count(&stmt),
        }
    }

    fn plan_insert(&self, entity: &Entity) -> Result<Plan> {
        let ty = self.schema.app.resolve_concrete(entity.ty())?;
        let id = self.require_id(ty, entity)?;

        for (name, _) in entity.values() {
            self.schema.app.resolve_property(ty.id, name)?;
        }

        let mut values = vec![];

        for field in &self.schema.mapping_for(ty.id).fields {
            let Some(value) = entity.get(&field.name) else {
                return Err(Error::missing_property(ty.name.to_string(), &field.name));
            };

            values.push((field, self.check_value(ty, field, value.clone())?));
        }

        let write = Write {
            entity: ty,
            id,
            values,
        };

        Ok(Plan::new(self.translate.insert(self.schema, &write)))
    }

    fn plan_update(&self, stmt: &stmt::Update) -> Result<Plan> {
        let ty = self.schema.app.resolve_concrete(stmt.entity.ty())?;
        let id = self.require_id(ty, &stmt.entity)?;
        let mapping = self.schema.mapping_for(ty.id);

        let mut values = vec![];

        for name in &stmt.changed {
            if self.schema.app.resolve_property(ty.id, name)?.is_none() {
                return Err(err!("`{}.{KEY}` cannot be updated", ty.name));
            }

            let Some(field) = mapping.field(name) else {
                return Err(Error::unknown_property(ty.name.to_string(), name));
            };

            let Some(value) = stmt.entity.get(name) else {
                return Err(Error::missing_property(ty.name.to_string(), name));
            };

            values.push((field, self.check_value(ty, field, value.clone())?));
        }

        if values.is_empty() {
            return Ok(Plan::default());
        }

        // Mapping order keeps root-table assignments ahead of leaf ones.
        values.sort_by_key(|(field, _)| field.column);

        let write = Write {
            entity: ty,
            id,
            values,
        };

        Ok(Plan::new(self.translate.update(self.schema, &write)))
    }

    fn plan_delete(&self, stmt: &stmt::Delete) -> Result<Plan> {
        let ty = self.schema.app.resolve_concrete(&stmt.ty)?;
        Ok(Plan::new(self.translate.delete(self.schema, ty, stmt.id)))
    }

    fn plan_query(&self, stmt: &stmt::Query) -> Result<Plan> {
        let target = self.schema.app.resolve(&stmt.target)?;
        let filter = self.check_filter(target, stmt.filter.as_ref())?;

        if let Some(order_by) = &stmt.order_by {
            self.schema
                .app
                .resolve_property(target.id, &order_by.property)?;
        }

        let mut plan = Plan::new(self.translate.query(self.schema, target, filter.as_ref())?);
        plan.order_by = stmt.order_by.clone();
        Ok(plan)
    }

    fn plan_count(&self, stmt: &stmt::Count) -> Result<Plan> {
        let target = self.schema.app.resolve(&stmt.target)?;
        let filter = self.check_filter(target, stmt.filter.as_ref())?;

        Ok(Plan::new(self.translate.count(self.schema, target, filter.as_ref())?))
    }

    fn require_id(&self, ty: &EntityType, entity: &Entity) -> Result<Id> {
        entity
            .id()
            .ok_or_else(|| Error::missing_property(ty.name.to_string(), KEY))
    }

    fn check_value(&self, ty: &EntityType, field: &mapping::Field, value: Value) -> Result<Value> {
        if value.is_null() {
            return Err(Error::null_property(ty.name.to_string(), &field.name));
        }

        let property = self.schema.app.entity(field.property.entity).property(field.property);
        value.cast(property.ty)
    }

    /// Checks that every property the filter names belongs to `target` and
    /// casts literals to the kind of the property they are compared with.
    fn check_filter(&self, target: &EntityType, filter: Option<&Expr>) -> Result<Option<Expr>> {
        let Some(filter) = filter else {
            return Ok(None);
        };

        Ok(Some(self.check_expr(target, filter)?))
    }

    fn check_expr(&self, target: &EntityType, expr: &Expr) -> Result<Expr> {
        Ok(match expr {
            Expr::And(operands) => Expr::And(
                operands
                    .iter()
                    .map(|operand| self.check_expr(target, operand))
                    .collect::<Result<_>>()?,
            ),
            Expr::Or(operands) => Expr::Or(
                operands
                    .iter()
                    .map(|operand| self.check_expr(target, operand))
                    .collect::<Result<_>>()?,
            ),
            Expr::Not(expr) => self.check_expr(target, expr)?.not(),
            Expr::BinaryOp(binary) => {
                let lhs = self.check_operand(target, &binary.lhs)?;
                let rhs = self.check_operand(target, &binary.rhs)?;

                match (lhs, rhs) {
                    (Some(ty), None) => Expr::binary_op(
                        (*binary.lhs).clone(),
                        binary.op,
                        cast_literal(&binary.rhs, ty)?,
                    ),
                    (None, Some(ty)) => Expr::binary_op(
                        cast_literal(&binary.lhs, ty)?,
                        binary.op,
                        (*binary.rhs).clone(),
                    ),
                    _ => expr.clone(),
                }
            }
            Expr::Value(Value::Bool(_)) => expr.clone(),
            Expr::Property(_) | Expr::Key | Expr::Value(_) => {
                return Err(err!("filter operand is not a condition; expr={expr:?}"))
            }
            Expr::Column(_) | Expr::KeyIn(_) => {
                return Err(err!("filters reference properties, not columns; expr={expr:?}"))
            }
        })
    }

    /// The kind of a comparison operand, if it names a property.
    fn check_operand(&self, target: &EntityType, operand: &Expr) -> Result<Option<stmt::Type>> {
        match operand {
            Expr::Property(name) => Ok(Some(
                self.schema
                    .app
                    .resolve_property(target.id, name)?
                    .map(|property| property.ty)
                    .unwrap_or(stmt::Type::Id),
            )),
            Expr::Key => Ok(Some(stmt::Type::Id)),
            Expr::Value(_) => Ok(None),
            expr => Err(err!(
                "comparison operands must be properties or literals; expr={expr:?}"
            )),
        }
    }
}

fn cast_literal(expr: &Expr, ty: stmt::Type) -> Result<Expr> {
    match expr {
        Expr::Value(Value::Null) => Ok(expr.clone()),
        Expr::Value(value) => Ok(Expr::Value(value.clone().cast(ty)?)),
        _ => Ok(expr.clone()),
    }
}

/// Values of `write` stored in `table`, as column assignments.
fn assignments(write: &Write<'_>, table: TableId) -> Vec<Assignment> {
    write
        .values
        .iter()
        .filter(|(field, _)| field.column.table == table)
        .map(|(field, value)| Assignment {
            column: field.column,
            value: value.clone(),
        })
        .collect()
}

fn key_assignment(key: ColumnId, id: Id) -> Assignment {
    Assignment {
        column: key,
        value: Value::Id(id),
    }
}

/// Conjoins `rhs` onto an optional filter.
fn and(lhs: Option<Expr>, rhs: Expr) -> Expr {
    match lhs {
        Some(lhs) => lhs.and(rhs),
        None => rhs,
    }
}

/// Returns the key column followed by every field of `entity`, and how to
/// read them back.
fn fixed_shape(schema: &Schema, entity: &EntityType, key: ColumnId) -> (Vec<ColumnId>, Reconstruct) {
    let mapping = schema.mapping_for(entity.id);
    let mut returning = vec![key];
    let mut fields = vec![];

    for field in &mapping.fields {
        fields.push((field.name.clone(), returning.len()));
        returning.push(field.column);
    }

    let shape = Shape {
        entity: entity.name.to_string(),
        position: schema.app.position(entity.id),
        key: 0,
        fields,
    };

    (returning, Reconstruct::Fixed(shape))
}
