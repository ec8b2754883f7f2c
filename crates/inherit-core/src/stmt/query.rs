use super::{Expr, OrderBy, Statement};

/// Reads entities of a type. Targeting the root returns every concrete type.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub target: String,

    pub filter: Option<Expr>,

    pub order_by: Option<OrderBy>,
}

impl Query {
    pub fn all(target: impl Into<String>) -> Query {
        Query {
            target: target.into(),
            filter: None,
            order_by: None,
        }
    }

    /// Adds a filter, conjoined with any filter already present.
    pub fn filter(mut self, expr: Expr) -> Query {
        self.filter = Some(match self.filter.take() {
            Some(filter) => filter.and(expr),
            None => expr,
        });
        self
    }

    pub fn order_by(mut self, order_by: OrderBy) -> Query {
        self.order_by = Some(order_by);
        self
    }
}

impl From<Query> for Statement {
    fn from(value: Query) -> Self {
        Statement::Query(value)
    }
}
