use std::fmt;

/// Scalar kind of a property or column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Type {
    /// Boolean value
    Bool,

    /// Signed 64-bit integer
    I64,

    /// Fixed-point decimal number
    Decimal,

    /// UTF-8 text
    String,

    /// Entity identifier. Only used for key columns.
    Id,
}

impl Type {
    pub const fn is_numeric(self) -> bool {
        matches!(self, Type::I64 | Type::Decimal)
    }

    /// Name used when rendering schemas.
    pub const fn name(self) -> &'static str {
        match self {
            Type::Bool => "boolean",
            Type::I64 => "integer",
            Type::Decimal => "decimal",
            Type::String => "text",
            Type::Id => "id",
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
