//! Language-level literal values.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use vellum_types::ObjectId;

use crate::types::TypeRef;

/// A compile-time-known value embedded in an expression tree.
///
/// Constants are *not* wire values: the serializer bound to the field a
/// constant is compared against decides how it is encoded.
#[derive(Debug, Clone, PartialEq)]
pub enum Constant {
    Null,
    Bool(bool),
    Int32(i32),
    Int64(i64),
    Double(f64),
    Decimal(Decimal),
    String(String),
    DateTime(DateTime<Utc>),
    ObjectId(ObjectId),
    Uuid([u8; 16]),
    /// A value of a caller-registered enum type: variant name plus ordinal.
    EnumVariant {
        type_name: String,
        variant: String,
        ordinal: i32,
    },
    List(Vec<Constant>),
}

impl Constant {
    /// Infers the declared type of this constant.
    ///
    /// `Null` infers as a nullable string for lack of better information;
    /// callers comparing against a typed field should build the node with an
    /// explicit type instead. An empty list infers a string element for the
    /// same reason.
    pub fn type_ref(&self) -> TypeRef {
        match self {
            Constant::Null => TypeRef::nullable(TypeRef::String),
            Constant::Bool(_) => TypeRef::Bool,
            Constant::Int32(_) => TypeRef::Int32,
            Constant::Int64(_) => TypeRef::Int64,
            Constant::Double(_) => TypeRef::Double,
            Constant::Decimal(_) => TypeRef::Decimal,
            Constant::String(_) => TypeRef::String,
            Constant::DateTime(_) => TypeRef::DateTime,
            Constant::ObjectId(_) => TypeRef::ObjectId,
            Constant::Uuid(_) => TypeRef::Uuid,
            Constant::EnumVariant { type_name, .. } => TypeRef::Enum(type_name.clone()),
            Constant::List(items) => TypeRef::list(
                items
                    .first()
                    .map(Constant::type_ref)
                    .unwrap_or(TypeRef::String),
            ),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Constant::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Constant::Int32(n) => Some(i64::from(*n)),
            Constant::Int64(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<bool> for Constant {
    fn from(v: bool) -> Self {
        Constant::Bool(v)
    }
}

impl From<i32> for Constant {
    fn from(v: i32) -> Self {
        Constant::Int32(v)
    }
}

impl From<i64> for Constant {
    fn from(v: i64) -> Self {
        Constant::Int64(v)
    }
}

impl From<f64> for Constant {
    fn from(v: f64) -> Self {
        Constant::Double(v)
    }
}

impl From<&str> for Constant {
    fn from(v: &str) -> Self {
        Constant::String(v.to_string())
    }
}

impl From<String> for Constant {
    fn from(v: String) -> Self {
        Constant::String(v)
    }
}

impl From<DateTime<Utc>> for Constant {
    fn from(v: DateTime<Utc>) -> Self {
        Constant::DateTime(v)
    }
}
