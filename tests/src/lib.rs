
mod db_test;
pub use db_test::DbTest;

mod exec_log;
pub use exec_log::ExecLog;

mod faulty_driver;
pub use faulty_driver::{Faults, FaultyDriver};


mod logging_driver;
pub use logging_driver::{DriverOp, LoggingDriver};

pub use std_util::*;

use inherit::Db;
use inherit_core::schema::db::TableId;

/// Looks up a derived table by name, panicking if the layout has none.
pub fn table_id(db: &Db, name: &str) -> TableId {
    match db.schema().db.table_by_name(name) {
        Some(table) => table.id,
        None => panic!("no table named `{name}`; schema={}", db.schema().db),
    }
}

/// Names of the tables written by the logged operations, in order.
pub fn table_names(db: &Db, tables: impl IntoIterator<Item = TableId>) -> Vec<String> {
    tables
        .into_iter()
        .map(|table| db.schema().db.table(table).name.clone())
        .collect()
}
