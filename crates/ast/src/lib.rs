//! The provider-native query AST and its renderer.
//!
//! Translation produces [`Filter`] trees whose operands are already
//! wire-encoded [`Value`](vellum_types::Value)s bound to resolved
//! [`FieldRef`]s; rendering needs no further type information. The renderer
//! in [`render`] turns a tree into the literal wire document shape.

pub mod field;
pub mod filter;
pub mod render;

pub use field::{FieldRef, PathSegment};
pub use filter::{CompareOp, Filter};
pub use render::render;
