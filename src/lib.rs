//! Vellum: typed, representation-aware query translation for document
//! databases.
//!
//! Callers build predicates as [`Expr`](vellum_expr::Expr) trees against
//! their native types; the engine compiles them to the provider's filter
//! AST and renders the literal wire document. Correctness hinges on the
//! serializer registry: every referenced field is bound to the serializer
//! that knows exactly how that location is encoded, and constructs that
//! have no faithful query under a field's representation fail loudly
//! instead of emitting a near-miss filter.
//!
//! # Example
//!
//! ```
//! use vellum::prelude::*;
//!
//! let museum = StructSerializer::builder("Museum", Conventions::camel_case())
//!     .field("name", scalars::string())
//!     .build();
//! let mut registry = SerializerRegistry::new();
//! registry.register(museum);
//!
//! let m = Expr::parameter("m", TypeRef::named("Museum"));
//! let name = Expr::member(m, "name", TypeRef::String);
//! let predicate = Expr::eq(name, Expr::constant("Louvre"));
//!
//! let translator = Translator::new(&registry);
//! let filter_doc = translator.render(&predicate).unwrap();
//! assert_eq!(filter_doc.to_string(), r#"{ "name" : "Louvre" }"#);
//! ```

pub use vellum_ast::{CompareOp, FieldRef, Filter, PathSegment, render};
pub use vellum_expr::{BinaryOp, Constant, Expr, ExprRef, Method, TypeRef, UnaryOp};
pub use vellum_schema::{
    Conventions, EnumRepresentation, EnumSerializer, FieldNaming, ListSerializer,
    MappingRepresentation, MappingSerializer, NullableSerializer, SchemaError, Serializer,
    SerializerRef, SerializerRegistry, StructSerializer, UuidRepresentation,
};
pub use vellum_translate::{TranslateError, Translation, translate};
pub use vellum_types::{Binary, BinarySubtype, Document, ObjectId, Value};

/// Facade over the translation engine for one registry.
///
/// Thin and stateless: each call owns its context, so a `Translator` can be
/// shared freely across threads once the registry is populated.
pub struct Translator<'a> {
    registry: &'a SerializerRegistry,
}

impl<'a> Translator<'a> {
    pub fn new(registry: &'a SerializerRegistry) -> Self {
        Self { registry }
    }

    /// Compiles a predicate to the filter AST plus its touched fields.
    pub fn translate(&self, predicate: &ExprRef) -> Result<Translation, TranslateError> {
        translate(self.registry, predicate)
    }

    /// Compiles a predicate and renders the wire filter document.
    pub fn render(&self, predicate: &ExprRef) -> Result<Document, TranslateError> {
        let translation = self.translate(predicate)?;
        Ok(render(&translation.filter))
    }
}

/// Renders a wire document as JSON, for logs and test assertions.
pub fn to_json(document: &Document) -> Result<serde_json::Value, serde_json::Error> {
    serde_json::to_value(document)
}

pub mod prelude {
    //! The types a query-building caller needs.
    pub use crate::Translator;
    pub use vellum_ast::{Filter, render};
    pub use vellum_expr::{Constant, Expr, ExprRef, Method, TypeRef};
    pub use vellum_schema::{
        Conventions, EnumRepresentation, EnumSerializer, ListSerializer, MappingRepresentation,
        MappingSerializer, NullableSerializer, SerializerRegistry, StructSerializer,
        UuidRepresentation, scalars,
    };
    pub use vellum_types::{Document, Value, doc};
}
