use inherit::driver::{
    operation::Transaction, Capability, Connection, Driver, Operation, Response,
};
use inherit_core::{async_trait, err, schema::db::Schema, Result};
use std::{
    borrow::Cow,
    sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        Arc,
    },
};

/// Wraps a driver and fails table actions on command.
#[derive(Debug)]
pub struct FaultyDriver {
    inner: Box<dyn Driver>,
    faults: Faults,
}

/// Handle for arming the faults of a [`FaultyDriver`]. Nothing fails until
/// a fault is armed.
#[derive(Debug, Clone, Default)]
pub struct Faults {
    state: Arc<FaultState>,
}

#[derive(Debug, Default)]
struct FaultState {
    /// Fail the write with this 1-based position, counted from arming. Zero
    /// disables.
    fail_write: AtomicUsize,

    /// Writes seen since arming
    writes: AtomicUsize,

    fail_rollback: AtomicBool,
}

impl FaultyDriver {
    pub fn new(driver: impl Driver) -> FaultyDriver {
        FaultyDriver {
            inner: Box::new(driver),
            faults: Faults::default(),
        }
    }

    pub fn faults(&self) -> Faults {
        self.faults.clone()
    }
}

impl Faults {
    /// Fails the `nth` write from now on.
    pub fn fail_write(&self, nth: usize) {
        self.state.writes.store(0, Ordering::SeqCst);
        self.state.fail_write.store(nth, Ordering::SeqCst);
    }

    /// Fails every rollback.
    pub fn fail_rollback(&self) {
        self.state.fail_rollback.store(true, Ordering::SeqCst);
    }

    pub fn disarm(&self) {
        self.state.fail_write.store(0, Ordering::SeqCst);
        self.state.fail_rollback.store(false, Ordering::SeqCst);
    }

    fn check(&self, operation: &Operation) -> Result<()> {
        let state = &self.state;

        if operation.is_write() {
            let nth = state.writes.fetch_add(1, Ordering::SeqCst) + 1;
            if nth == state.fail_write.load(Ordering::SeqCst) {
                return Err(err!("injected failure; write #{nth}"));
            }
        }

        if *operation == Operation::Transaction(Transaction::Rollback)
            && state.fail_rollback.load(Ordering::SeqCst)
        {
            return Err(err!("injected failure; rollback"));
        }

        Ok(())
    }
}

#[async_trait]
impl Driver for FaultyDriver {
    fn url(&self) -> Cow<'_, str> {
        self.inner.url()
    }

    fn capability(&self) -> &'static Capability {
        self.inner.capability()
    }

    async fn connect(&self) -> Result<Box<dyn Connection>> {
        Ok(Box::new(FaultyConnection {
            inner: self.inner.connect().await?,
            faults: self.faults.clone(),
        }))
    }

    async fn reset_db(&self) -> Result<()> {
        self.inner.reset_db().await
    }
}

#[derive(Debug)]
struct FaultyConnection {
    inner: Box<dyn Connection>,
    faults: Faults,
}

#[async_trait]
impl Connection for FaultyConnection {
    async fn exec(&mut self, schema: &Arc<Schema>, operation: Operation) -> Result<Response> {
        self.faults.check(&operation)?;
        self.inner.exec(schema, operation).await
    }

    async fn push_schema(&mut self, schema: &Schema) -> Result<()> {
        self.inner.push_schema(schema).await
    }
}
