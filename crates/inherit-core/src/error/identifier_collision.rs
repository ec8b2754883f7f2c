use super::Error;
use crate::stmt::Id;

/// Two entities were assigned the same identifier.
///
/// Only reachable when the identifier source is scoped per table or per type
/// instead of being shared by the whole hierarchy. This is a configuration
/// error, not something to retry.
#[derive(Debug)]
pub(super) struct IdentifierCollision {
    id: Id,
    table: Box<str>,
}

impl std::error::Error for IdentifierCollision {}

impl core::fmt::Display for IdentifierCollision {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "identifier collision: {} is already used in `{}`",
            self.id, self.table
        )
    }
}

impl Error {
    pub fn identifier_collision(id: Id, table: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::IdentifierCollision(IdentifierCollision {
            id,
            table: table.into().into(),
        }))
    }

    pub fn is_identifier_collision(&self) -> bool {
        self.chain()
            .any(|err| matches!(err.kind(), super::ErrorKind::IdentifierCollision(_)))
    }
}
