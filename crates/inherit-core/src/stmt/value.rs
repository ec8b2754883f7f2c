use super::{Id, Type};
use crate::{Error, Result};
use rust_decimal::Decimal;
use std::{cmp::Ordering, fmt};

#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Signed 64-bit integer
    I64(i64),

    /// Decimal number
    Decimal(Decimal),

    /// String value
    String(String),

    /// An entity identifier
    Id(Id),

    /// Null value
    #[default]
    Null,
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The value's type. `None` for null, which fits any nullable column.
    pub fn ty(&self) -> Option<Type> {
        Some(match self {
            Self::Bool(_) => Type::Bool,
            Self::I64(_) => Type::I64,
            Self::Decimal(_) => Type::Decimal,
            Self::String(_) => Type::String,
            Self::Id(_) => Type::Id,
            Self::Null => return None,
        })
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_id(&self) -> Option<Id> {
        match self {
            Self::Id(v) => Some(*v),
            _ => None,
        }
    }

    /// Converts the value to `ty`, widening integers to decimals. Any other
    /// kind mismatch is a type conversion error.
    pub fn cast(self, ty: Type) -> Result<Value> {
        match (self, ty) {
            (value, ty) if value.ty() == Some(ty) => Ok(value),
            (Self::I64(v), Type::Decimal) => Ok(Self::Decimal(Decimal::from(v))),
            (Self::I64(v), Type::Id) if v >= 0 => Ok(Self::Id(Id(v as u64))),
            (value, ty) => Err(Error::type_conversion(value, ty)),
        }
    }

    /// Orders two values of compatible kinds. Integers and decimals compare
    /// numerically, identifiers compare with non-negative integers. Null and
    /// mismatched kinds are unordered.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
            (Value::I64(a), Value::I64(b)) => Some(a.cmp(b)),
            (Value::Decimal(a), Value::Decimal(b)) => Some(a.cmp(b)),
            (Value::I64(a), Value::Decimal(b)) => Some(Decimal::from(*a).cmp(b)),
            (Value::Decimal(a), Value::I64(b)) => Some(a.cmp(&Decimal::from(*b))),
            (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
            (Value::Id(a), Value::Id(b)) => Some(a.cmp(b)),
            (Value::Id(a), Value::I64(b)) if *b >= 0 => Some(a.0.cmp(&(*b as u64))),
            (Value::I64(a), Value::Id(b)) if *a >= 0 => Some((*a as u64).cmp(&b.0)),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => fmt::Display::fmt(v, f),
            Value::I64(v) => fmt::Display::fmt(v, f),
            Value::Decimal(v) => fmt::Display::fmt(v, f),
            Value::String(v) => f.write_str(v),
            Value::Id(v) => fmt::Display::fmt(v, f),
            Value::Null => f.write_str("null"),
        }
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<i32> for Value {
    fn from(src: i32) -> Self {
        Self::I64(src.into())
    }
}

impl From<i64> for Value {
    fn from(src: i64) -> Self {
        Self::I64(src)
    }
}

impl From<Decimal> for Value {
    fn from(src: Decimal) -> Self {
        Self::Decimal(src)
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<Id> for Value {
    fn from(src: Id) -> Self {
        Self::Id(src)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(src: Option<T>) -> Self {
        src.map(Into::into).unwrap_or(Value::Null)
    }
}
