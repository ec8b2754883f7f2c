use crate::store::{self, Store};

use inherit_core::{
    async_trait,
    driver::{
        operation::{Operation, Transaction},
        Response,
    },
    schema::db::Schema,
    Error, Result,
};
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

#[derive(Debug)]
pub struct Connection {
    store: Arc<Mutex<Store>>,

    /// Set while a transaction is open
    tx: Option<Tx>,
}

#[derive(Debug)]
struct Tx {
    guard: OwnedMutexGuard<Store>,

    /// Store contents when the transaction started
    snapshot: Store,
}

impl Connection {
    pub(crate) fn new(store: Arc<Mutex<Store>>) -> Connection {
        Connection { store, tx: None }
    }

    async fn transaction(&mut self, op: Transaction) -> Result<Response> {
        match op {
            Transaction::Start => {
                if self.tx.is_some() {
                    return Err(Error::driver_operation_failed(
                        store::StoreError::NestedTransaction,
                    ));
                }

                let guard = self.store.clone().lock_owned().await;
                let snapshot = guard.clone();
                self.tx = Some(Tx { guard, snapshot });
            }
            Transaction::Commit => {
                if self.tx.take().is_none() {
                    return Err(Error::driver_operation_failed(
                        store::StoreError::NoTransaction,
                    ));
                }
            }
            Transaction::Rollback => {
                let Some(mut tx) = self.tx.take() else {
                    return Err(Error::driver_operation_failed(
                        store::StoreError::NoTransaction,
                    ));
                };

                *tx.guard = tx.snapshot;
            }
        }

        log::trace!("transaction {op:?}");
        Ok(Response::count(0))
    }
}

#[async_trait]
impl inherit_core::driver::Connection for Connection {
    async fn exec(&mut self, schema: &Arc<Schema>, op: Operation) -> Result<Response> {
        log::trace!("exec {op:?}");

        if let Operation::Transaction(op) = op {
            return self.transaction(op).await;
        }

        match &mut self.tx {
            Some(tx) => tx.guard.apply(schema, op),
            None => self.store.lock().await.apply(schema, op),
        }
    }

    async fn push_schema(&mut self, schema: &Schema) -> Result<()> {
        match &mut self.tx {
            Some(tx) => tx.guard.create_tables(schema),
            None => self.store.lock().await.create_tables(schema),
        }

        Ok(())
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        // An unfinished transaction never becomes visible.
        if let Some(mut tx) = self.tx.take() {
            *tx.guard = tx.snapshot;
        }
    }
}
