//! Typed expression trees: the input language of the translation engine.
//!
//! Callers build immutable [`Expr`] trees through the constructors here and
//! hand them to the translator. Nodes are shared via [`ExprRef`] (`Arc`), and
//! every node carries its static declared [`TypeRef`].
//!
//! # Key Types
//!
//! - [`Expr`]: the closed node-kind set (constants, member access, calls, …)
//! - [`Method`]: the closed set of translatable method identities
//! - [`Constant`]: language-level literal values, prior to wire encoding
//! - [`TypeRef`]: static type attached to every node

pub mod constant;
pub mod expr;
pub mod format;
pub mod types;

pub use constant::Constant;
pub use expr::{BinaryOp, Expr, ExprRef, Method, UnaryOp};
pub use types::TypeRef;
