use crate::logging_driver::DriverOp;
use inherit::driver::{operation::Transaction, Operation, Response};
use inherit_core::schema::db::TableId;
use std::sync::{Arc, Mutex};

/// A wrapper around the operations log that provides a clean API for tests
pub struct ExecLog {
    ops: Arc<Mutex<Vec<DriverOp>>>,
}

impl ExecLog {
    pub(crate) fn new(ops: Arc<Mutex<Vec<DriverOp>>>) -> Self {
        Self { ops }
    }

    pub fn len(&self) -> usize {
        self.ops.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.lock().unwrap().is_empty()
    }

    /// Count operations matching the given predicate
    pub fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&Operation) -> bool,
    {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter(|op| predicate(&op.operation))
            .count()
    }

    /// Tables written to, in order
    pub fn writes(&self) -> Vec<TableId> {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter_map(|op| op.operation.write_target())
            .collect()
    }

    /// Transaction lifecycle ops, in order
    pub fn transactions(&self) -> Vec<Transaction> {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter_map(|op| match op.operation {
                Operation::Transaction(tx) => Some(tx),
                _ => None,
            })
            .collect()
    }

    /// Remove and return the most recent operation
    pub fn pop(&self) -> Option<(Operation, Option<Response>)> {
        self.ops
            .lock()
            .unwrap()
            .pop()
            .map(|op| (op.operation, op.response))
    }

    pub fn clear(&self) {
        self.ops.lock().unwrap().clear();
    }
}
