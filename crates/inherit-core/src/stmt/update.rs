use super::{Entity, Statement};
use indexmap::IndexSet;

#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    /// The entity carrying its identifier and the new property values
    pub entity: Entity,

    /// Names of the properties to write
    pub changed: IndexSet<String>,
}

impl Update {
    pub fn new<I, S>(entity: Entity, changed: I) -> Update
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Update {
            entity,
            changed: changed.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Statement::Update(value)
    }
}
