use super::{Engine, Plan, Reconstruct, Shape, Step, StepOutput};
use inherit_core::{
    driver::{operation::Transaction, Connection, Rows},
    stmt::{Direction, Entity, Value},
    Error, Result,
};
use std::cmp::Ordering;

/// What a statement produced.
#[derive(Debug, Default)]
pub struct ExecResponse {
    /// Entities read, in result order
    pub entities: Vec<Entity>,

    /// Rows counted
    pub count: u64,
}

struct Exec<'a> {
    engine: &'a Engine,
    conn: &'a mut dyn Connection,

    /// Rows read so far, with their sort position
    rows: Vec<(usize, Entity)>,
    count: u64,
}

impl Engine {
    /// Runs a plan on `conn`. Plans marked as transactional either fully
    /// apply or, after a rollback, report the failure.
    pub async fn exec_plan(&self, conn: &mut dyn Connection, plan: &Plan) -> Result<ExecResponse> {
        let mut exec = Exec {
            engine: self,
            conn,
            rows: vec![],
            count: 0,
        };

        if plan.transaction {
            exec.exec_transaction(plan).await?;
        } else {
            for step in &plan.steps {
                exec.exec_step(step).await?;
            }
        }

        Ok(exec.finish(plan))
    }
}

impl Exec<'_> {
    async fn exec_transaction(&mut self, plan: &Plan) -> Result<()> {
        assert!(
            self.engine.capability.transactions,
            "planned a multi-table write for a store without transactions"
        );

        self.transaction(Transaction::Start).await?;

        let mut completed = 0;

        for step in &plan.steps {
            if let Err(err) = self.exec_step(step).await {
                let table = step
                    .operation
                    .write_target()
                    .map(|table| self.engine.schema.db.table(table).name.clone())
                    .unwrap_or_default();

                return Err(self.rollback(err, &table, completed).await);
            }

            if step.operation.is_write() {
                completed += 1;
            }
        }

        if let Err(err) = self.transaction(Transaction::Commit).await {
            return Err(self.rollback(err, "commit", completed).await);
        }

        Ok(())
    }

    async fn rollback(&mut self, err: Error, table: &str, completed: usize) -> Error {
        log::warn!("rolling back after {completed} completed table action(s): {err}");

        match self.transaction(Transaction::Rollback).await {
            Ok(()) if completed > 0 => err.context(Error::partial_write(table, completed)),
            Ok(()) => err,
            Err(rollback) => err.context(Error::inconsistent_state(rollback)),
        }
    }

    async fn transaction(&mut self, op: Transaction) -> Result<()> {
        self.conn.exec(&self.engine.schema.db, op.into()).await?;
        Ok(())
    }

    async fn exec_step(&mut self, step: &Step) -> Result<()> {
        log::debug!("exec {:?}", step.operation);

        let response = self
            .conn
            .exec(&self.engine.schema.db, step.operation.clone())
            .await?;

        match &step.output {
            StepOutput::Entities(reconstruct) => {
                let Rows::Values(rows) = response.rows else {
                    return Err(inherit_core::err!("expected rows from {:?}", step.operation));
                };

                for row in rows {
                    log::trace!("row {row:?}");
                    self.rows.push(reconstruct.apply(row)?);
                }
            }
            StepOutput::Count => self.count += response.rows.len(),
            StepOutput::RequireAffected => {
                if response.rows.is_empty() {
                    return Err(Error::record_not_found(format!("{:?}", step.operation)));
                }
            }
            StepOutput::Discard => {}
        }

        Ok(())
    }

    fn finish(self, plan: &Plan) -> ExecResponse {
        let mut rows = self.rows;

        rows.sort_by(|(a_pos, a), (b_pos, b)| a_pos.cmp(b_pos).then(a.id().cmp(&b.id())));

        if let Some(order_by) = &plan.order_by {
            rows.sort_by(|(_, a), (_, b)| {
                let ordering = sort_key(a, &order_by.property)
                    .compare(&sort_key(b, &order_by.property))
                    .unwrap_or(Ordering::Equal);

                match order_by.direction {
                    Direction::Asc => ordering,
                    Direction::Desc => ordering.reverse(),
                }
            });
        }

        ExecResponse {
            entities: rows.into_iter().map(|(_, entity)| entity).collect(),
            count: self.count,
        }
    }
}

fn sort_key(entity: &Entity, property: &str) -> Value {
    match entity.get(property) {
        Some(value) => value.clone(),
        None if property == inherit_core::schema::app::KEY => {
            entity.id().map(Value::Id).unwrap_or_default()
        }
        None => Value::Null,
    }
}

impl Reconstruct {
    fn apply(&self, row: Vec<Value>) -> Result<(usize, Entity)> {
        let shape = match self {
            Reconstruct::Fixed(shape) => shape,
            Reconstruct::Discriminated { column, shapes } => {
                let tag = row.get(*column).and_then(Value::as_str);

                match shapes.iter().find(|(value, _)| Some(value.as_str()) == tag) {
                    Some((_, shape)) => shape,
                    None => {
                        return Err(inherit_core::err!(
                            "row has unknown discriminator value {:?}",
                            row.get(*column)
                        ))
                    }
                }
            }
        };

        Ok((shape.position, shape.apply(&row)?))
    }
}

impl Shape {
    fn apply(&self, row: &[Value]) -> Result<Entity> {
        let Some(id) = row.get(self.key).and_then(Value::as_id) else {
            return Err(inherit_core::err!("row has no identifier; row={row:?}"));
        };

        let mut entity = Entity::new(&self.entity).with_id(id);

        for (name, index) in &self.fields {
            entity.set(name, row[*index].clone());
        }

        Ok(entity)
    }
}
