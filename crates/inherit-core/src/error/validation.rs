use super::Error;

/// Error when an entity instance does not satisfy its type's shape.
#[derive(Debug)]
pub(super) struct ValidationError {
    kind: ValidationErrorKind,
}

#[derive(Debug)]
enum ValidationErrorKind {
    /// A required property has no value
    MissingProperty { entity: Box<str>, property: Box<str> },

    /// A property is set to null
    NullProperty { entity: Box<str>, property: Box<str> },
}

impl std::error::Error for ValidationError {}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match &self.kind {
            ValidationErrorKind::MissingProperty { entity, property } => {
                write!(f, "`{entity}` is missing required property `{property}`")
            }
            ValidationErrorKind::NullProperty { entity, property } => {
                write!(f, "`{entity}.{property}` must not be null")
            }
        }
    }
}

impl Error {
    pub fn missing_property(entity: impl Into<String>, property: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Validation(ValidationError {
            kind: ValidationErrorKind::MissingProperty {
                entity: entity.into().into(),
                property: property.into().into(),
            },
        }))
    }

    pub fn null_property(entity: impl Into<String>, property: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Validation(ValidationError {
            kind: ValidationErrorKind::NullProperty {
                entity: entity.into().into(),
                property: property.into().into(),
            },
        }))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Validation(_))
    }
}
