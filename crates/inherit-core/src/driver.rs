mod capability;
pub use capability::Capability;

mod response;
pub use response::{Response, Rows};

pub mod operation;
pub use operation::Operation;

use crate::{async_trait, schema::db::Schema};

use std::{borrow::Cow, fmt::Debug, sync::Arc};

/// An entity store the engine can lay hierarchies out in.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Connection URL identifying the store.
    fn url(&self) -> Cow<'_, str>;

    /// Describes the store's capability, which informs the planner.
    fn capability(&self) -> &'static Capability;

    /// Opens a connection. Every statement runs on its own connection.
    async fn connect(&self) -> crate::Result<Box<dyn Connection>>;

    /// Drops every table and row.
    async fn reset_db(&self) -> crate::Result<()>;
}

#[async_trait]
pub trait Connection: Debug + Send + 'static {
    /// Execute one table action
    async fn exec(&mut self, schema: &Arc<Schema>, op: Operation) -> crate::Result<Response>;

    /// Creates the tables in `schema`.
    async fn push_schema(&mut self, schema: &Schema) -> crate::Result<()>;
}
