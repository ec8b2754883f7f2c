use super::Operation;
use crate::{
    schema::db::{ColumnId, TableId},
    stmt::Expr,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub source: Source,

    /// Evaluated against each source row
    pub filter: Option<Expr>,

    /// Columns to return, in order
    pub returning: Vec<ColumnId>,
}

/// Rows an operation reads.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    Table(TableId),

    /// Rows of `leaf` combined with the `root` row sharing their key.
    Join(Join),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    pub root: TableId,

    pub leaf: TableId,

    /// Predicate on `root` columns only. Stores may use it to skip root rows
    /// before joining; it is also implied by the operation's filter.
    pub root_filter: Option<Expr>,
}

impl Source {
    pub fn tables(&self) -> Vec<TableId> {
        match self {
            Source::Table(table) => vec![*table],
            Source::Join(join) => vec![join.root, join.leaf],
        }
    }
}

impl From<Query> for Operation {
    fn from(value: Query) -> Self {
        Self::Query(value)
    }
}
