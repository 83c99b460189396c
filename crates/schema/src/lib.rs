//! Serializer layer: how declared types map onto the wire.
//!
//! Every field referenced by a query resolves to a [`Serializer`] that knows
//! the exact on-wire encoding of that location, including its
//! *representation* where a type has more than one possible encoding
//! (mappings, enums, uuids). Translators never assume an encoding; they ask
//! the serializer through the capability probes on the trait.
//!
//! # Key Types
//!
//! - [`Serializer`]: encoding of one declared type, with capability probes
//! - [`SerializerRegistry`]: `TypeRef` → serializer lookup
//! - [`StructSerializer`]: field-by-field document encoding, built with
//!   [`Conventions`]-aware naming
//! - [`MappingRepresentation`] / [`EnumRepresentation`] /
//!   [`UuidRepresentation`]: the encoding variants translators branch on

pub mod collections;
pub mod conventions;
pub mod document;
pub mod enums;
pub mod error;
pub mod registry;
pub mod representation;
pub mod scalars;
pub mod serializer;

pub use collections::{ListSerializer, MappingSerializer, NullableSerializer};
pub use conventions::{Conventions, FieldNaming};
pub use document::StructSerializer;
pub use enums::EnumSerializer;
pub use error::SchemaError;
pub use registry::SerializerRegistry;
pub use representation::{EnumRepresentation, MappingRepresentation, UuidRepresentation};
pub use serializer::{DocumentLike, MappedField, MappingLike, SequenceLike, Serializer, SerializerRef};
