use super::{Assignment, Operation};
use crate::{
    schema::db::TableId,
    stmt::{Expr, Id},
};

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateByKey {
    pub table: TableId,

    pub key: Id,

    pub assignments: Vec<Assignment>,

    /// Only update the row if the filter matches
    pub filter: Option<Expr>,
}

impl From<UpdateByKey> for Operation {
    fn from(value: UpdateByKey) -> Self {
        Self::UpdateByKey(value)
    }
}
