use super::{Operation, Source};
use crate::stmt::Expr;

#[derive(Debug, Clone, PartialEq)]
pub struct Count {
    pub source: Source,

    pub filter: Option<Expr>,
}

impl From<Count> for Operation {
    fn from(value: Count) -> Self {
        Self::Count(value)
    }
}
