//! Serializers for scalar wire types.
//!
//! Integer serializers widen or narrow constants to the field's stored
//! width, so a literal `3` compares correctly against an `i64` field; a
//! constant that cannot fit the stored width is an encode error, not a
//! silent truncation. None of these accept `Null` — optional fields wrap
//! their serializer in [`NullableSerializer`](crate::NullableSerializer).

use std::sync::Arc;

use vellum_expr::{Constant, TypeRef};
use vellum_types::{Binary, BinarySubtype, Value};

use crate::error::SchemaError;
use crate::representation::UuidRepresentation;
use crate::serializer::{Serializer, SerializerRef, mismatch};

pub fn boolean() -> SerializerRef {
    Arc::new(BoolSerializer)
}

pub fn int32() -> SerializerRef {
    Arc::new(Int32Serializer)
}

pub fn int64() -> SerializerRef {
    Arc::new(Int64Serializer)
}

pub fn double() -> SerializerRef {
    Arc::new(DoubleSerializer)
}

pub fn decimal() -> SerializerRef {
    Arc::new(DecimalSerializer)
}

pub fn string() -> SerializerRef {
    Arc::new(StringSerializer)
}

pub fn date_time() -> SerializerRef {
    Arc::new(DateTimeSerializer)
}

pub fn object_id() -> SerializerRef {
    Arc::new(ObjectIdSerializer)
}

pub fn uuid(representation: UuidRepresentation) -> SerializerRef {
    Arc::new(UuidSerializer { representation })
}

pub struct BoolSerializer;

impl Serializer for BoolSerializer {
    fn name(&self) -> String {
        "BoolSerializer".to_string()
    }

    fn type_ref(&self) -> TypeRef {
        TypeRef::Bool
    }

    fn encode(&self, constant: &Constant) -> Result<Value, SchemaError> {
        match constant {
            Constant::Bool(b) => Ok(Value::Bool(*b)),
            other => Err(mismatch(self, other, "expected a bool constant")),
        }
    }
}

pub struct Int32Serializer;

impl Serializer for Int32Serializer {
    fn name(&self) -> String {
        "Int32Serializer".to_string()
    }

    fn type_ref(&self) -> TypeRef {
        TypeRef::Int32
    }

    fn encode(&self, constant: &Constant) -> Result<Value, SchemaError> {
        match constant {
            Constant::Int32(n) => Ok(Value::Int32(*n)),
            Constant::Int64(n) => i32::try_from(*n)
                .map(Value::Int32)
                .map_err(|_| mismatch(self, constant, "value out of range for an int32 field")),
            other => Err(mismatch(self, other, "expected an integer constant")),
        }
    }
}

pub struct Int64Serializer;

impl Serializer for Int64Serializer {
    fn name(&self) -> String {
        "Int64Serializer".to_string()
    }

    fn type_ref(&self) -> TypeRef {
        TypeRef::Int64
    }

    fn encode(&self, constant: &Constant) -> Result<Value, SchemaError> {
        match constant {
            Constant::Int32(n) => Ok(Value::Int64(i64::from(*n))),
            Constant::Int64(n) => Ok(Value::Int64(*n)),
            other => Err(mismatch(self, other, "expected an integer constant")),
        }
    }
}

pub struct DoubleSerializer;

impl Serializer for DoubleSerializer {
    fn name(&self) -> String {
        "DoubleSerializer".to_string()
    }

    fn type_ref(&self) -> TypeRef {
        TypeRef::Double
    }

    fn encode(&self, constant: &Constant) -> Result<Value, SchemaError> {
        match constant {
            Constant::Int32(n) => Ok(Value::Double(f64::from(*n))),
            Constant::Int64(n) => Ok(Value::Double(*n as f64)),
            Constant::Double(d) => Ok(Value::Double(*d)),
            other => Err(mismatch(self, other, "expected a numeric constant")),
        }
    }
}

pub struct DecimalSerializer;

impl Serializer for DecimalSerializer {
    fn name(&self) -> String {
        "DecimalSerializer".to_string()
    }

    fn type_ref(&self) -> TypeRef {
        TypeRef::Decimal
    }

    fn encode(&self, constant: &Constant) -> Result<Value, SchemaError> {
        match constant {
            Constant::Int32(n) => Ok(Value::Decimal((*n).into())),
            Constant::Int64(n) => Ok(Value::Decimal((*n).into())),
            Constant::Decimal(d) => Ok(Value::Decimal(*d)),
            other => Err(mismatch(self, other, "expected a decimal or integer constant")),
        }
    }
}

pub struct StringSerializer;

impl Serializer for StringSerializer {
    fn name(&self) -> String {
        "StringSerializer".to_string()
    }

    fn type_ref(&self) -> TypeRef {
        TypeRef::String
    }

    fn encode(&self, constant: &Constant) -> Result<Value, SchemaError> {
        match constant {
            Constant::String(s) => Ok(Value::String(s.clone())),
            other => Err(mismatch(self, other, "expected a string constant")),
        }
    }
}

pub struct DateTimeSerializer;

impl Serializer for DateTimeSerializer {
    fn name(&self) -> String {
        "DateTimeSerializer".to_string()
    }

    fn type_ref(&self) -> TypeRef {
        TypeRef::DateTime
    }

    fn encode(&self, constant: &Constant) -> Result<Value, SchemaError> {
        match constant {
            Constant::DateTime(dt) => Ok(Value::DateTime(*dt)),
            other => Err(mismatch(self, other, "expected a datetime constant")),
        }
    }
}

pub struct ObjectIdSerializer;

impl Serializer for ObjectIdSerializer {
    fn name(&self) -> String {
        "ObjectIdSerializer".to_string()
    }

    fn type_ref(&self) -> TypeRef {
        TypeRef::ObjectId
    }

    fn encode(&self, constant: &Constant) -> Result<Value, SchemaError> {
        match constant {
            Constant::ObjectId(id) => Ok(Value::ObjectId(*id)),
            other => Err(mismatch(self, other, "expected an object id constant")),
        }
    }
}

/// Encodes uuids as binary with the subtype chosen by the representation.
pub struct UuidSerializer {
    pub representation: UuidRepresentation,
}

impl Serializer for UuidSerializer {
    fn name(&self) -> String {
        format!("UuidSerializer<{}>", self.representation)
    }

    fn type_ref(&self) -> TypeRef {
        TypeRef::Uuid
    }

    fn encode(&self, constant: &Constant) -> Result<Value, SchemaError> {
        match constant {
            Constant::Uuid(bytes) => {
                let subtype = match self.representation {
                    UuidRepresentation::Standard => BinarySubtype::UuidStandard,
                    UuidRepresentation::Legacy => BinarySubtype::UuidLegacy,
                };
                Ok(Value::Binary(Binary {
                    subtype,
                    bytes: bytes.to_vec(),
                }))
            }
            other => Err(mismatch(self, other, "expected a uuid constant")),
        }
    }
}
