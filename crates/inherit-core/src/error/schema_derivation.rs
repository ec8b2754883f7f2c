use super::Error;

/// Error when a physical schema cannot be derived from a hierarchy.
///
/// This occurs when:
/// - The hierarchy itself is malformed (duplicate type or property names,
///   reserved property names, a root without children)
/// - Two sibling types declare the same property with different kinds and
///   the strategy stores both in one table
/// - A synthetic column (the discriminator) collides with a property column
///
/// These errors surface when the schema is built and are not recoverable at
/// runtime.
#[derive(Debug)]
pub(super) struct SchemaDerivation {
    message: Box<str>,
}

impl std::error::Error for SchemaDerivation {}

impl core::fmt::Display for SchemaDerivation {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "schema derivation failed: {}", self.message)
    }
}

impl Error {
    /// Creates a schema derivation error.
    pub fn schema_derivation(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::SchemaDerivation(SchemaDerivation {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a schema derivation error.
    pub fn is_schema_derivation(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::SchemaDerivation(_))
    }
}
