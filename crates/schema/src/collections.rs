//! Serializers for structural types: nullable wrappers, lists, mappings.

use std::sync::Arc;

use vellum_expr::{Constant, TypeRef};
use vellum_types::Value;

use crate::error::SchemaError;
use crate::representation::MappingRepresentation;
use crate::serializer::{
    DocumentLike, MappingLike, SequenceLike, Serializer, SerializerRef, mismatch,
};

/// Makes an inner serializer accept `Null`.
///
/// Transparent for everything else: capability probes and non-null encoding
/// delegate to the wrapped serializer, so nullable fields resolve paths the
/// same way their underlying type does.
pub struct NullableSerializer {
    inner: SerializerRef,
}

impl NullableSerializer {
    pub fn new(inner: SerializerRef) -> SerializerRef {
        Arc::new(Self { inner })
    }
}

impl Serializer for NullableSerializer {
    fn name(&self) -> String {
        format!("NullableSerializer<{}>", self.inner.name())
    }

    fn type_ref(&self) -> TypeRef {
        TypeRef::nullable(self.inner.type_ref())
    }

    fn encode(&self, constant: &Constant) -> Result<Value, SchemaError> {
        match constant {
            Constant::Null => Ok(Value::Null),
            other => self.inner.encode(other),
        }
    }

    fn as_document(&self) -> Option<&dyn DocumentLike> {
        self.inner.as_document()
    }

    fn as_mapping(&self) -> Option<&dyn MappingLike> {
        self.inner.as_mapping()
    }

    fn as_sequence(&self) -> Option<&dyn SequenceLike> {
        self.inner.as_sequence()
    }
}

/// Encodes list-typed values as wire arrays.
pub struct ListSerializer {
    element: SerializerRef,
}

impl ListSerializer {
    pub fn new(element: SerializerRef) -> SerializerRef {
        Arc::new(Self { element })
    }
}

impl Serializer for ListSerializer {
    fn name(&self) -> String {
        format!("ListSerializer<{}>", self.element.name())
    }

    fn type_ref(&self) -> TypeRef {
        TypeRef::list(self.element.type_ref())
    }

    fn encode(&self, constant: &Constant) -> Result<Value, SchemaError> {
        match constant {
            Constant::List(items) => {
                let mut encoded = Vec::with_capacity(items.len());
                for item in items {
                    encoded.push(self.element.encode(item)?);
                }
                Ok(Value::Array(encoded))
            }
            other => Err(mismatch(self, other, "expected a list constant")),
        }
    }

    fn as_sequence(&self) -> Option<&dyn SequenceLike> {
        Some(self)
    }
}

impl SequenceLike for ListSerializer {
    fn element_serializer(&self) -> SerializerRef {
        self.element.clone()
    }
}

/// Serializer for mapping-typed fields, carrying the declared physical
/// representation translators branch on.
pub struct MappingSerializer {
    key: SerializerRef,
    value: SerializerRef,
    representation: MappingRepresentation,
}

impl MappingSerializer {
    pub fn new(
        key: SerializerRef,
        value: SerializerRef,
        representation: MappingRepresentation,
    ) -> SerializerRef {
        Arc::new(Self {
            key,
            value,
            representation,
        })
    }
}

impl Serializer for MappingSerializer {
    fn name(&self) -> String {
        format!(
            "MappingSerializer<{}, {}, {}>",
            self.key.name(),
            self.value.name(),
            self.representation
        )
    }

    fn type_ref(&self) -> TypeRef {
        TypeRef::map(self.key.type_ref(), self.value.type_ref())
    }

    fn encode(&self, constant: &Constant) -> Result<Value, SchemaError> {
        // There is no constant form for whole mappings; predicates address
        // individual keys through the capability below.
        Err(mismatch(self, constant, "mapping values have no constant form"))
    }

    fn as_mapping(&self) -> Option<&dyn MappingLike> {
        Some(self)
    }
}

impl MappingLike for MappingSerializer {
    fn representation(&self) -> MappingRepresentation {
        self.representation
    }

    fn key_serializer(&self) -> SerializerRef {
        self.key.clone()
    }

    fn value_serializer(&self) -> SerializerRef {
        self.value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalars;

    #[test]
    fn test_nullable_encodes_null_and_delegates() {
        let ser = NullableSerializer::new(scalars::int32());
        assert_eq!(ser.encode(&Constant::Null).unwrap(), Value::Null);
        assert_eq!(ser.encode(&Constant::Int32(4)).unwrap(), Value::Int32(4));
    }

    #[test]
    fn test_nullable_is_transparent_for_capabilities() {
        let ser = NullableSerializer::new(ListSerializer::new(scalars::string()));
        assert!(ser.as_sequence().is_some());
    }

    #[test]
    fn test_list_encodes_elementwise() {
        let ser = ListSerializer::new(scalars::int64());
        let v = ser
            .encode(&Constant::List(vec![Constant::Int32(1), Constant::Int64(2)]))
            .unwrap();
        assert_eq!(v, Value::Array(vec![Value::Int64(1), Value::Int64(2)]));
    }

    #[test]
    fn test_mapping_exposes_representation() {
        let ser = MappingSerializer::new(
            scalars::string(),
            scalars::int32(),
            MappingRepresentation::ArrayOfDocuments,
        );
        let mapping = ser.as_mapping().unwrap();
        assert_eq!(mapping.representation(), MappingRepresentation::ArrayOfDocuments);
        assert_eq!(mapping.value_serializer().type_ref(), TypeRef::Int32);
    }

    #[test]
    fn test_mapping_has_no_constant_form() {
        let ser = MappingSerializer::new(
            scalars::string(),
            scalars::int32(),
            MappingRepresentation::Document,
        );
        assert!(ser.encode(&Constant::Int32(1)).is_err());
    }
}
