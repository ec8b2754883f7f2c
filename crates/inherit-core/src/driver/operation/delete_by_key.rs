use super::Operation;
use crate::{
    schema::db::TableId,
    stmt::{Expr, Id},
};

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteByKey {
    pub table: TableId,

    pub key: Id,

    /// Only delete the row if the filter matches
    pub filter: Option<Expr>,
}

impl From<DeleteByKey> for Operation {
    fn from(value: DeleteByKey) -> Self {
        Self::DeleteByKey(value)
    }
}
