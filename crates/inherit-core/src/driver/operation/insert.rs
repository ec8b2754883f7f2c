use super::Operation;
use crate::{
    schema::db::{ColumnId, TableId},
    stmt::Value,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub table: TableId,

    /// One value per column; columns left out are stored as null.
    pub values: Vec<Assignment>,

    /// Tables whose keys must not already hold the new row's key. Used when
    /// sibling tables share one identifier space but no table references the
    /// others.
    pub unique_across: Vec<TableId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub column: ColumnId,
    pub value: Value,
}

impl From<Insert> for Operation {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
