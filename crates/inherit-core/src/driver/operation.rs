mod count;
pub use count::Count;

mod delete_by_key;
pub use delete_by_key::DeleteByKey;

mod insert;
pub use insert::{Assignment, Insert};

mod query;
pub use query::{Join, Query, Source};

mod transaction;
pub use transaction::Transaction;

mod update_by_key;
pub use update_by_key::UpdateByKey;

use crate::schema::db::TableId;

/// A single table action. Every statement translates into one or more.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Count rows of a table or join
    Count(Count),

    /// Delete the row with the given key
    DeleteByKey(DeleteByKey),

    /// Insert one row
    Insert(Insert),

    /// Read rows of a table or join
    Query(Query),

    /// Execute a transaction lifecycle op
    Transaction(Transaction),

    /// Update the row with the given key
    UpdateByKey(UpdateByKey),
}

impl Operation {
    pub fn is_write(&self) -> bool {
        matches!(
            self,
            Operation::Insert(_) | Operation::UpdateByKey(_) | Operation::DeleteByKey(_)
        )
    }

    /// The table a write targets.
    pub fn write_target(&self) -> Option<TableId> {
        match self {
            Operation::Insert(op) => Some(op.table),
            Operation::UpdateByKey(op) => Some(op.table),
            Operation::DeleteByKey(op) => Some(op.table),
            _ => None,
        }
    }
}
