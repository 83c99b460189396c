//! Type-to-serializer lookup.

use std::collections::HashMap;

use vellum_expr::TypeRef;

use crate::collections::{ListSerializer, MappingSerializer, NullableSerializer};
use crate::error::SchemaError;
use crate::representation::MappingRepresentation;
use crate::scalars;
use crate::serializer::SerializerRef;

/// Maps declared types to the serializers that govern them.
///
/// Registration is a setup-phase concern: populate the registry before
/// handing it to the translator, then treat it as read-only. Lookups take
/// `&self` and are safe to run from concurrent translations.
///
/// Scalar and structural types resolve without registration; an explicit
/// registration for the same `TypeRef` overrides the composed default
/// (e.g. a mapping type stored as an array of documents). Named struct and
/// enum types must be registered.
#[derive(Default)]
pub struct SerializerRegistry {
    entries: HashMap<TypeRef, SerializerRef>,
}

impl SerializerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a serializer under its own declared type.
    pub fn register(&mut self, serializer: SerializerRef) {
        self.entries.insert(serializer.type_ref(), serializer);
    }

    /// Resolves the serializer for a declared type.
    pub fn serializer_for(&self, ty: &TypeRef) -> Result<SerializerRef, SchemaError> {
        if let Some(registered) = self.entries.get(ty) {
            return Ok(registered.clone());
        }
        match ty {
            TypeRef::Bool => Ok(scalars::boolean()),
            TypeRef::Int32 => Ok(scalars::int32()),
            TypeRef::Int64 => Ok(scalars::int64()),
            TypeRef::Double => Ok(scalars::double()),
            TypeRef::Decimal => Ok(scalars::decimal()),
            TypeRef::String => Ok(scalars::string()),
            TypeRef::DateTime => Ok(scalars::date_time()),
            TypeRef::ObjectId => Ok(scalars::object_id()),
            TypeRef::Uuid => Err(SchemaError::unknown_type(
                "uuid (register a UuidSerializer to pick a representation)",
            )),
            TypeRef::List(element) => Ok(ListSerializer::new(self.serializer_for(element)?)),
            TypeRef::Map(key, value) => Ok(MappingSerializer::new(
                self.serializer_for(key)?,
                self.serializer_for(value)?,
                MappingRepresentation::Document,
            )),
            TypeRef::Nullable(inner) => Ok(NullableSerializer::new(self.serializer_for(inner)?)),
            TypeRef::Named(name) | TypeRef::Enum(name) => {
                Err(SchemaError::unknown_type(name.clone()))
            }
        }
    }
}
