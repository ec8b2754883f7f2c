use super::{Entity, Statement};

#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    /// Fully populated entity of a concrete type
    pub entity: Entity,
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Statement::Insert(value)
    }
}
