//! The serializer trait and its capability probes.

use std::sync::Arc;

use vellum_expr::{Constant, TypeRef};
use vellum_types::Value;

use crate::error::SchemaError;
use crate::representation::MappingRepresentation;

/// Shared handle to a serializer.
pub type SerializerRef = Arc<dyn Serializer>;

/// Knows how values of one declared type are encoded on the wire.
///
/// Capability probes return `None` unless the serializer actually supports
/// the shape in question; callers must check, never assume. Serializers are
/// immutable and safe to share across concurrent translations.
pub trait Serializer: Send + Sync {
    /// Concrete serializer identity, used in diagnostics.
    fn name(&self) -> String;

    /// The declared type this serializer governs.
    fn type_ref(&self) -> TypeRef;

    /// Wire-encodes a compile-time constant.
    fn encode(&self, constant: &Constant) -> Result<Value, SchemaError>;

    /// Named-field lookup, for document-shaped types.
    fn as_document(&self) -> Option<&dyn DocumentLike> {
        None
    }

    /// Key/value structure and representation, for mapping-shaped types.
    fn as_mapping(&self) -> Option<&dyn MappingLike> {
        None
    }

    /// Element structure, for sequence-shaped types.
    fn as_sequence(&self) -> Option<&dyn SequenceLike> {
        None
    }
}

/// A declared field bound to its wire name and serializer.
#[derive(Clone)]
pub struct MappedField {
    pub wire_name: String,
    pub serializer: SerializerRef,
}

/// Document-shaped: exposes sub-serializers by declared field name.
pub trait DocumentLike {
    fn field(&self, declared_name: &str) -> Option<MappedField>;
}

/// Mapping-shaped: a key serializer, a value serializer and a declared
/// physical representation.
pub trait MappingLike {
    fn representation(&self) -> MappingRepresentation;
    fn key_serializer(&self) -> SerializerRef;
    fn value_serializer(&self) -> SerializerRef;
}

/// Sequence-shaped: a single element serializer.
pub trait SequenceLike {
    fn element_serializer(&self) -> SerializerRef;
}

pub(crate) fn mismatch(
    serializer: &dyn Serializer,
    constant: &Constant,
    reason: &str,
) -> SchemaError {
    SchemaError::encode_mismatch(serializer.name(), constant.to_string(), reason)
}
