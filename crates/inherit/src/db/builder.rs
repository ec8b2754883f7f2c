use super::{Db, Shared};
use crate::{
    engine::Engine,
    id::{IdGenerator, Sequence},
    Result,
};
use inherit_core::{
    driver::Driver,
    err,
    schema::{self, app::Hierarchy, Strategy},
    Schema,
};
use std::sync::Arc;

#[derive(Debug, Default)]
pub struct Builder {
    strategy: Strategy,

    /// Defaults to a [`Sequence`]
    ids: Option<Arc<dyn IdGenerator>>,

    /// Schema builder
    core: schema::Builder,
}

impl Builder {
    pub fn strategy(&mut self, strategy: Strategy) -> &mut Self {
        self.strategy = strategy;
        self
    }

    pub fn id_generator(&mut self, ids: Arc<dyn IdGenerator>) -> &mut Self {
        self.ids = Some(ids);
        self
    }

    /// Set the table name prefix for all tables
    pub fn table_name_prefix(&mut self, prefix: &str) -> &mut Self {
        self.core.table_name_prefix(prefix);
        self
    }

    pub fn discriminator_column(&mut self, name: &str) -> &mut Self {
        self.core.discriminator_column(name);
        self
    }

    /// Derives the store layout without connecting anywhere.
    pub fn build_schema(&self, hierarchy: Hierarchy) -> Result<Schema> {
        self.core.build(hierarchy, self.strategy)
    }

    pub async fn connect(&mut self, hierarchy: Hierarchy, url: &str) -> Result<Db> {
        self.build_boxed(hierarchy, super::connect(url)?).await
    }

    pub async fn build(&mut self, hierarchy: Hierarchy, driver: impl Driver) -> Result<Db> {
        self.build_boxed(hierarchy, Box::new(driver)).await
    }

    async fn build_boxed(&mut self, hierarchy: Hierarchy, driver: Box<dyn Driver>) -> Result<Db> {
        let schema = self.build_schema(hierarchy)?;
        let capability = driver.capability();

        if schema.strategy == Strategy::JoinedTable && !capability.transactions {
            return Err(err!(
                "{} layout splits entities across tables and needs a store with transactions; url={}",
                schema.strategy,
                driver.url()
            ));
        }

        log::debug!(
            "built schema; strategy={}; tables={}",
            schema.strategy,
            schema.db.tables.len()
        );

        let ids = self
            .ids
            .clone()
            .unwrap_or_else(|| Arc::new(Sequence::new()));

        Ok(Db {
            shared: Arc::new(Shared {
                engine: Engine::new(Arc::new(schema), capability),
                driver,
                ids,
            }),
        })
    }
}
