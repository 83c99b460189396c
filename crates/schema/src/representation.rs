//! Encoding variants for types with more than one possible wire shape.
//!
//! A representation is an immutable fact about a serializer instance.
//! Translators branch on these values exhaustively; a representation with no
//! translation rule for a given construct is a loud failure, never a guess.

use std::fmt;

/// How a mapping-typed value is physically stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingRepresentation {
    /// A sub-document keyed by the original keys: `{"x": 1, "y": 2}`.
    Document,
    /// An array of `{"k": ..., "v": ...}` sub-documents.
    ArrayOfDocuments,
    /// An array of two-element `[key, value]` arrays.
    ArrayOfArrays,
}

impl fmt::Display for MappingRepresentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MappingRepresentation::Document => f.write_str("Document"),
            MappingRepresentation::ArrayOfDocuments => f.write_str("ArrayOfDocuments"),
            MappingRepresentation::ArrayOfArrays => f.write_str("ArrayOfArrays"),
        }
    }
}

/// How an enum value is physically stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumRepresentation {
    /// The variant name as a string.
    String,
    /// The variant ordinal as an `Int32`.
    Integer,
}

impl fmt::Display for EnumRepresentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnumRepresentation::String => f.write_str("String"),
            EnumRepresentation::Integer => f.write_str("Integer"),
        }
    }
}

/// Which binary sub-encoding a uuid value uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UuidRepresentation {
    /// Subtype 0x04.
    Standard,
    /// Subtype 0x03, as written by older drivers.
    Legacy,
}

impl fmt::Display for UuidRepresentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UuidRepresentation::Standard => f.write_str("Standard"),
            UuidRepresentation::Legacy => f.write_str("Legacy"),
        }
    }
}
