mod connection;
pub use connection::Connection;

mod store;
use store::Store;

use inherit_core::{
    async_trait,
    driver::{Capability, Driver},
    Error, Result,
};
use std::{borrow::Cow, sync::Arc};
use tokio::sync::Mutex;
use url::Url;

/// An entity store kept in process memory.
///
/// Every connection opened from the same `Memory` sees the same tables.
/// Transactions hold the store exclusively until they commit or roll back.
#[derive(Debug, Clone, Default)]
pub struct Memory {
    store: Arc<Mutex<Store>>,
}

impl Memory {
    pub fn new() -> Memory {
        Memory::default()
    }

    /// Creates a store from a `memory:` connection URL.
    pub fn from_url(url: impl Into<String>) -> Result<Memory> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(|err| Error::invalid_connection_url(&url_str, err))?;

        if url.scheme() != "memory" {
            return Err(Error::invalid_connection_url(
                &url_str,
                "expected a `memory` scheme",
            ));
        }

        Ok(Memory::new())
    }
}

#[async_trait]
impl Driver for Memory {
    fn url(&self) -> Cow<'_, str> {
        Cow::Borrowed("memory:")
    }

    fn capability(&self) -> &'static Capability {
        &Capability::MEMORY
    }

    async fn connect(&self) -> Result<Box<dyn inherit_core::Connection>> {
        Ok(Box::new(Connection::new(self.store.clone())))
    }

    async fn reset_db(&self) -> Result<()> {
        self.store.lock().await.clear();
        Ok(())
    }
}
