//! Resolved field references.

use std::fmt;

use vellum_schema::SerializerRef;

/// One step of a resolved field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// A named sub-field.
    Field(String),
    /// A position within an array-valued field.
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Field(name) => f.write_str(name),
            PathSegment::Index(i) => write!(f, "{i}"),
        }
    }
}

/// A resolved path into the stored document, bound to the serializer that
/// governs the value at exactly that location.
///
/// Field references only come out of resolution: every segment was obtained
/// from the enclosing segment's serializer, so the path is known storable.
#[derive(Clone)]
pub struct FieldRef {
    segments: Vec<PathSegment>,
    serializer: SerializerRef,
}

impl FieldRef {
    /// A reference to a top-level field of the queried document.
    pub fn root(name: impl Into<String>, serializer: SerializerRef) -> Self {
        Self {
            segments: vec![PathSegment::Field(name.into())],
            serializer,
        }
    }

    /// Extends the path with a named sub-field governed by `serializer`.
    pub fn sub_field(&self, name: impl Into<String>, serializer: SerializerRef) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Field(name.into()));
        Self {
            segments,
            serializer,
        }
    }

    /// Extends the path with an array position governed by `serializer`.
    pub fn indexed(&self, index: usize, serializer: SerializerRef) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Index(index));
        Self {
            segments,
            serializer,
        }
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// The serializer bound to the final segment.
    pub fn serializer(&self) -> &SerializerRef {
        &self.serializer
    }

    /// The dotted wire path (`"address.city"`, `"scores.0"`).
    pub fn dotted(&self) -> String {
        let mut out = String::new();
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                out.push('.');
            }
            out.push_str(&segment.to_string());
        }
        out
    }
}

// Equality is structural over the path: two references to the same wire
// location are equal even when their serializer handles are distinct
// instances resolved in separate calls.
impl PartialEq for FieldRef {
    fn eq(&self, other: &Self) -> bool {
        self.segments == other.segments
    }
}

impl fmt::Debug for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldRef({} : {})", self.dotted(), self.serializer.name())
    }
}

impl fmt::Display for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dotted())
    }
}
