use super::{Count, Delete, Insert, Query, Update};

/// A logical operation on the hierarchy.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Insert(Insert),
    Update(Update),
    Delete(Delete),
    Query(Query),
    Count(Count),
}

impl Statement {
    pub fn is_write(&self) -> bool {
        matches!(
            self,
            Statement::Insert(_) | Statement::Update(_) | Statement::Delete(_)
        )
    }

    /// Short label used in logs and error context.
    pub fn name(&self) -> &'static str {
        match self {
            Statement::Insert(_) => "insert",
            Statement::Update(_) => "update",
            Statement::Delete(_) => "delete",
            Statement::Query(_) => "query",
            Statement::Count(_) => "count",
        }
    }
}
