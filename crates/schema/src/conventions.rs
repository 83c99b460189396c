//! Field-naming conventions applied when struct serializers are built.

use serde::{Deserialize, Serialize};

/// Policy mapping declared (Rust) field names onto wire names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldNaming {
    /// The declared name is used verbatim.
    #[default]
    AsDeclared,
    /// `snake_case` declared names become `camelCase` wire names.
    CamelCase,
}

/// Schema-construction options.
///
/// Conventions apply once, when a [`StructSerializer`](crate::StructSerializer)
/// is built; translation itself never re-derives names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conventions {
    pub field_naming: FieldNaming,
}

impl Conventions {
    pub fn camel_case() -> Self {
        Self {
            field_naming: FieldNaming::CamelCase,
        }
    }

    /// Derives the wire name for a declared field name.
    pub fn wire_name(&self, declared: &str) -> String {
        match self.field_naming {
            FieldNaming::AsDeclared => declared.to_string(),
            FieldNaming::CamelCase => camel_case(declared),
        }
    }
}

fn camel_case(declared: &str) -> String {
    let mut out = String::with_capacity(declared.len());
    let mut upper_next = false;
    for ch in declared.chars() {
        if ch == '_' {
            upper_next = !out.is_empty();
            continue;
        }
        if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}
