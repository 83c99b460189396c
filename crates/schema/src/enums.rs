//! Representation-aware enum serialization.

use std::sync::Arc;

use vellum_expr::{Constant, TypeRef};
use vellum_types::Value;

use crate::error::SchemaError;
use crate::representation::EnumRepresentation;
use crate::serializer::{Serializer, SerializerRef, mismatch};

/// Encodes values of a caller-registered enum type.
///
/// The representation decides whether a variant travels as its name or its
/// ordinal. Bare string/integer constants are accepted when they agree with
/// the representation, so callers can compare against raw values they read
/// back from the database.
pub struct EnumSerializer {
    type_name: String,
    representation: EnumRepresentation,
}

impl EnumSerializer {
    pub fn new(type_name: impl Into<String>, representation: EnumRepresentation) -> SerializerRef {
        Arc::new(Self {
            type_name: type_name.into(),
            representation,
        })
    }

    pub fn representation(&self) -> EnumRepresentation {
        self.representation
    }
}

impl Serializer for EnumSerializer {
    fn name(&self) -> String {
        format!("EnumSerializer<{}, {}>", self.type_name, self.representation)
    }

    fn type_ref(&self) -> TypeRef {
        TypeRef::Enum(self.type_name.clone())
    }

    fn encode(&self, constant: &Constant) -> Result<Value, SchemaError> {
        match (constant, self.representation) {
            (
                Constant::EnumVariant {
                    type_name, variant, ..
                },
                EnumRepresentation::String,
            ) if *type_name == self.type_name => Ok(Value::String(variant.clone())),
            (
                Constant::EnumVariant {
                    type_name, ordinal, ..
                },
                EnumRepresentation::Integer,
            ) if *type_name == self.type_name => Ok(Value::Int32(*ordinal)),
            (Constant::String(s), EnumRepresentation::String) => Ok(Value::String(s.clone())),
            (Constant::Int32(n), EnumRepresentation::Integer) => Ok(Value::Int32(*n)),
            (other, _) => Err(mismatch(
                self,
                other,
                "constant does not match the enum's type or representation",
            )),
        }
    }
}
