use super::Error;

/// Error when an operation names an entity type the hierarchy does not
/// define, or names the root where a concrete type is required.
#[derive(Debug)]
pub(super) struct UnknownType {
    name: Box<str>,
    reason: Option<&'static str>,
}

impl std::error::Error for UnknownType {}

impl core::fmt::Display for UnknownType {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unknown entity type `{}`", self.name)?;
        if let Some(reason) = self.reason {
            write!(f, " ({reason})")?;
        }
        Ok(())
    }
}

impl Error {
    /// Creates an unknown type error.
    pub fn unknown_type(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownType(UnknownType {
            name: name.into().into(),
            reason: None,
        }))
    }

    /// Creates an unknown type error for an abstract type used where a
    /// concrete one is required.
    pub fn not_concrete(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownType(UnknownType {
            name: name.into().into(),
            reason: Some("not a concrete type"),
        }))
    }

    /// Returns `true` if this error is an unknown type error.
    pub fn is_unknown_type(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownType(_))
    }
}
