use crate::{
    faulty_driver::{Faults, FaultyDriver},
    logging_driver::{DriverOp, LoggingDriver},
    ExecLog,
};
use inherit::{
    db::Builder,
    driver::{
        operation::{Query, Source},
        Driver, Memory,
    },
    Db, Expr, Hierarchy, Id, Strategy, Value,
};
use std::sync::{Arc, Mutex, Once};

/// Per-test state: the layout strategy under test and the log of table
/// actions sent to the store.
pub struct DbTest {
    strategy: Strategy,
    ops_log: Arc<Mutex<Vec<DriverOp>>>,
}

impl DbTest {
    pub fn new(strategy: Strategy) -> DbTest {
        static LOGGER: Once = Once::new();
        LOGGER.call_once(|| {
            let _ = env_logger::builder().is_test(true).try_init();
        });

        DbTest {
            strategy,
            ops_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// A builder already set to the strategy under test.
    pub fn builder(&self) -> Builder {
        let mut builder = Db::builder();
        builder.strategy(self.strategy);
        builder
    }

    /// Lays `hierarchy` out in a fresh in-memory store, always with logging
    /// enabled.
    pub async fn setup_db(&mut self, hierarchy: Hierarchy) -> Db {
        let mut builder = self.builder();
        self.try_setup_db_with(&mut builder, hierarchy, Memory::new())
            .await
            .unwrap()
    }

    /// Like [`setup_db`](Self::setup_db), but the store fails on command.
    pub async fn setup_faulty_db(&mut self, hierarchy: Hierarchy) -> (Db, Faults) {
        let driver = FaultyDriver::new(Memory::new());
        let faults = driver.faults();

        let mut builder = self.builder();
        let db = self
            .try_setup_db_with(&mut builder, hierarchy, driver)
            .await
            .unwrap();

        (db, faults)
    }

    pub async fn try_setup_db_with(
        &mut self,
        builder: &mut Builder,
        hierarchy: Hierarchy,
        driver: impl Driver,
    ) -> inherit::Result<Db> {
        let logging_driver = LoggingDriver::new(Box::new(driver));
        self.ops_log = logging_driver.ops_log_handle();

        let db = builder.build(hierarchy, logging_driver).await?;
        db.reset_db().await?;
        db.push_schema().await?;

        Ok(db)
    }

    /// Reads the stored row for `id` straight from `table`, bypassing
    /// translation. Columns come back in table order.
    pub async fn get_raw_row(&self, db: &Db, table: &str, id: Id) -> Option<Vec<Value>> {
        let table = db.schema().db.table(crate::table_id(db, table));

        let query = Query {
            source: Source::Table(table.id),
            filter: Some(Expr::column(table.primary_key().id).eq(id)),
            returning: table.columns.iter().map(|column| column.id).collect(),
        };

        let mut conn = db.driver().connect().await.unwrap();
        let response = conn.exec(&db.schema().db, query.into()).await.unwrap();
        let mut rows = response.rows.into_values().unwrap();

        assert!(rows.len() <= 1, "duplicate key {id} in `{}`", table.name);
        rows.pop()
    }

    /// Table actions logged since setup or the last `clear`.
    pub fn log(&self) -> ExecLog {
        ExecLog::new(self.ops_log.clone())
    }
}
