//! Abstract wire value model shared by the query AST, the serializer layer
//! and the renderer.
//!
//! Values here describe the *shape* a query document takes on the wire; the
//! physical byte encoding is a downstream concern.

pub mod document;
pub mod macros;
pub mod value;

pub use document::Document;
pub use value::{Binary, BinarySubtype, ObjectId, Value};
