use super::{Expr, Statement};

#[derive(Debug, Clone, PartialEq)]
pub struct Count {
    pub target: String,

    pub filter: Option<Expr>,
}

impl Count {
    pub fn all(target: impl Into<String>) -> Count {
        Count {
            target: target.into(),
            filter: None,
        }
    }

    pub fn filter(mut self, expr: Expr) -> Count {
        self.filter = Some(match self.filter.take() {
            Some(filter) => filter.and(expr),
            None => expr,
        });
        self
    }
}

impl From<Count> for Statement {
    fn from(value: Count) -> Self {
        Statement::Count(value)
    }
}
