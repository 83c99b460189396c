//! Static declared types carried by expression nodes.

use std::fmt;

/// The declared type of an expression node.
///
/// `Named` and `Enum` refer to caller-registered types; the serializer
/// registry decides how those are encoded. Structural types (`List`, `Map`,
/// `Nullable`) compose recursively.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    Bool,
    Int32,
    Int64,
    Double,
    Decimal,
    String,
    DateTime,
    ObjectId,
    Uuid,
    Named(String),
    Enum(String),
    List(Box<TypeRef>),
    Map(Box<TypeRef>, Box<TypeRef>),
    Nullable(Box<TypeRef>),
}

impl TypeRef {
    pub fn list(element: TypeRef) -> TypeRef {
        TypeRef::List(Box::new(element))
    }

    pub fn map(key: TypeRef, value: TypeRef) -> TypeRef {
        TypeRef::Map(Box::new(key), Box::new(value))
    }

    pub fn nullable(inner: TypeRef) -> TypeRef {
        TypeRef::Nullable(Box::new(inner))
    }

    pub fn named(name: impl Into<String>) -> TypeRef {
        TypeRef::Named(name.into())
    }

    /// Strips `Nullable` wrappers down to the underlying type.
    pub fn unwrap_nullable(&self) -> &TypeRef {
        match self {
            TypeRef::Nullable(inner) => inner.unwrap_nullable(),
            other => other,
        }
    }

    pub fn is_bool(&self) -> bool {
        matches!(self.unwrap_nullable(), TypeRef::Bool)
    }

    pub fn is_string(&self) -> bool {
        matches!(self.unwrap_nullable(), TypeRef::String)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Bool => f.write_str("bool"),
            TypeRef::Int32 => f.write_str("i32"),
            TypeRef::Int64 => f.write_str("i64"),
            TypeRef::Double => f.write_str("f64"),
            TypeRef::Decimal => f.write_str("decimal"),
            TypeRef::String => f.write_str("string"),
            TypeRef::DateTime => f.write_str("datetime"),
            TypeRef::ObjectId => f.write_str("object_id"),
            TypeRef::Uuid => f.write_str("uuid"),
            TypeRef::Named(name) => f.write_str(name),
            TypeRef::Enum(name) => write!(f, "enum {name}"),
            TypeRef::List(element) => write!(f, "[{element}]"),
            TypeRef::Map(key, value) => write!(f, "{{{key}: {value}}}"),
            TypeRef::Nullable(inner) => write!(f, "{inner}?"),
        }
    }
}
