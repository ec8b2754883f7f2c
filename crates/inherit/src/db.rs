mod builder;
mod connect;

pub use builder::Builder;
pub use connect::connect;

use crate::{
    engine::{Engine, ExecResponse, Plan},
    id::IdGenerator,
    Result,
};
use inherit_core::{
    driver::{Capability, Driver},
    stmt::{Count, Delete, Entity, Expr, Id, Insert, Query, Statement, Update},
    Error, Schema,
};
use std::sync::Arc;

/// Shared state between all `Db` clones.
struct Shared {
    engine: Engine,
    driver: Box<dyn Driver>,
    ids: Arc<dyn IdGenerator>,
}

/// Handle to a hierarchy laid out in an entity store. Cheap to clone; all
/// clones share the store and the identifier generator.
///
/// Every statement runs on a connection of its own.
#[derive(Clone)]
pub struct Db {
    shared: Arc<Shared>,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Inserts an entity, assigning an identifier if it has none. Returns
    /// the entity as stored, with each value cast to its property's kind.
    pub async fn insert(&self, entity: Entity) -> Result<Entity> {
        let entity = self.assign_id(entity);
        self.exec(Insert {
            entity: entity.clone(),
        })
        .await?;
        self.as_stored(entity)
    }

    /// Writes the `changed` properties of `entity`, found by its
    /// identifier and concrete type.
    pub async fn update<I, S>(&self, entity: Entity, changed: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exec(Update::new(entity, changed)).await?;
        Ok(())
    }

    /// Deletes an entity. Deleting an entity that does not exist succeeds.
    pub async fn delete(&self, ty: &str, id: Id) -> Result<()> {
        self.exec(Delete::new(ty, id)).await?;
        Ok(())
    }

    /// Execute a query, returning all matching entities
    pub async fn all(&self, query: Query) -> Result<Vec<Entity>> {
        Ok(self.exec(query).await?.entities)
    }

    pub async fn first(&self, query: Query) -> Result<Option<Entity>> {
        Ok(self.all(query).await?.into_iter().next())
    }

    /// Reads an entity by concrete type and identifier.
    pub async fn get(&self, ty: &str, id: Id) -> Result<Entity> {
        match self.first(Query::all(ty).filter(Expr::key().eq(id))).await? {
            Some(entity) => Ok(entity),
            None => Err(Error::record_not_found(format!("{ty} #{id}"))),
        }
    }

    pub async fn count(&self, count: Count) -> Result<u64> {
        Ok(self.exec(count).await?.count)
    }

    /// Execute a statement
    pub async fn exec(&self, stmt: impl Into<Statement>) -> Result<ExecResponse> {
        let stmt = match stmt.into() {
            Statement::Insert(insert) => Statement::Insert(Insert {
                entity: self.assign_id(insert.entity),
            }),
            stmt => stmt,
        };

        log::debug!("exec {}", stmt.name());

        let plan = self.shared.engine.plan(stmt)?;
        if plan.is_empty() {
            return Ok(ExecResponse::default());
        }

        let mut conn = self.shared.driver.connect().await?;
        self.shared.engine.exec_plan(&mut *conn, &plan).await
    }

    /// Plans a statement without running it.
    pub fn plan(&self, stmt: impl Into<Statement>) -> Result<Plan> {
        self.shared.engine.plan(stmt)
    }

    /// Creates the derived tables in the store.
    pub async fn push_schema(&self) -> Result<()> {
        let mut conn = self.shared.driver.connect().await?;
        conn.push_schema(&self.shared.engine.schema.db).await
    }

    /// Drops every table and row from the store.
    pub async fn reset_db(&self) -> Result<()> {
        self.shared.driver.reset_db().await
    }

    pub fn driver(&self) -> &dyn Driver {
        &*self.shared.driver
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.shared.engine.schema
    }

    pub fn engine(&self) -> &Engine {
        &self.shared.engine
    }

    pub fn capability(&self) -> &'static Capability {
        self.shared.engine.capability()
    }

    /// Applies the casts planning applied to the written values, so the
    /// result equals what a read of the entity returns.
    fn as_stored(&self, mut entity: Entity) -> Result<Entity> {
        let app = &self.shared.engine.schema.app;
        let ty = app.resolve_concrete(entity.ty())?;

        let values: Vec<_> = entity
            .values()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect();

        for (name, value) in values {
            if let Some(property) = app.resolve_property(ty.id, &name)? {
                entity.set(name, value.cast(property.ty)?);
            }
        }

        Ok(entity)
    }

    fn assign_id(&self, mut entity: Entity) -> Entity {
        match entity.id() {
            Some(id) => self.shared.ids.observe(id),
            None => entity.set_id(self.shared.ids.next_id()),
        }
        entity
    }
}

impl std::fmt::Debug for Db {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Db")
            .field("engine", &self.shared.engine)
            .field("driver", &self.shared.driver)
            .field("ids", &self.shared.ids)
            .finish()
    }
}
