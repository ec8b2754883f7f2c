use super::{Id, Statement};

#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    /// Concrete type of the entity
    pub ty: String,

    pub id: Id,
}

impl Delete {
    pub fn new(ty: impl Into<String>, id: impl Into<Id>) -> Delete {
        Delete {
            ty: ty.into(),
            id: id.into(),
        }
    }
}

impl From<Delete> for Statement {
    fn from(value: Delete) -> Self {
        Statement::Delete(value)
    }
}
