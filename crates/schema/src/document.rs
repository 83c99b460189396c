//! Field-by-field serialization of caller-defined document types.

use std::sync::Arc;

use indexmap::IndexMap;
use vellum_expr::{Constant, TypeRef};
use vellum_types::Value;

use crate::conventions::Conventions;
use crate::error::SchemaError;
use crate::serializer::{DocumentLike, MappedField, Serializer, SerializerRef, mismatch};

/// Serializer for a registered struct type.
///
/// Holds one [`MappedField`] per declared field: the wire name (derived from
/// the [`Conventions`] in force when the serializer was built, unless
/// overridden) and the serializer governing the field's value.
pub struct StructSerializer {
    type_name: String,
    fields: IndexMap<String, MappedField>,
}

impl StructSerializer {
    pub fn builder(type_name: impl Into<String>, conventions: Conventions) -> StructSerializerBuilder {
        StructSerializerBuilder {
            type_name: type_name.into(),
            conventions,
            fields: IndexMap::new(),
        }
    }
}

impl Serializer for StructSerializer {
    fn name(&self) -> String {
        format!("StructSerializer<{}>", self.type_name)
    }

    fn type_ref(&self) -> TypeRef {
        TypeRef::Named(self.type_name.clone())
    }

    fn encode(&self, constant: &Constant) -> Result<Value, SchemaError> {
        Err(mismatch(
            self,
            constant,
            "documents are addressed through their fields, not compared wholesale",
        ))
    }

    fn as_document(&self) -> Option<&dyn DocumentLike> {
        Some(self)
    }
}

impl DocumentLike for StructSerializer {
    fn field(&self, declared_name: &str) -> Option<MappedField> {
        self.fields.get(declared_name).cloned()
    }
}

pub struct StructSerializerBuilder {
    type_name: String,
    conventions: Conventions,
    fields: IndexMap<String, MappedField>,
}

impl StructSerializerBuilder {
    /// Declares a field; the wire name follows the conventions.
    pub fn field(self, declared_name: &str, serializer: SerializerRef) -> Self {
        let wire_name = self.conventions.wire_name(declared_name);
        self.field_as(declared_name, &wire_name, serializer)
    }

    /// Declares a field with an explicit wire name (reserved names like
    /// `_id`, or legacy data that predates the conventions).
    pub fn field_as(
        mut self,
        declared_name: &str,
        wire_name: &str,
        serializer: SerializerRef,
    ) -> Self {
        self.fields.insert(
            declared_name.to_string(),
            MappedField {
                wire_name: wire_name.to_string(),
                serializer,
            },
        );
        self
    }

    pub fn build(self) -> SerializerRef {
        Arc::new(StructSerializer {
            type_name: self.type_name,
            fields: self.fields,
        })
    }
}
