//! The expression-to-query translation engine.
//!
//! Walks a typed [`Expr`](vellum_expr::Expr) tree and compiles it into the
//! provider-native [`Filter`](vellum_ast::Filter) AST, binding every field
//! reference to its on-wire encoding through the caller's serializer
//! registry. Translation is all-or-nothing: the result is a complete AST or
//! a single typed [`TranslateError`], never both and never a best-effort
//! query.
//!
//! # Example
//!
//! ```ignore
//! use vellum_translate::translate;
//!
//! let predicate = Expr::eq(name_field, Expr::constant("Louvre"));
//! let translation = translate(&registry, &predicate)?;
//! let wire_doc = vellum_ast::render(&translation.filter);
//! ```

pub mod context;
pub mod dispatcher;
pub mod error;
pub mod field;
pub mod methods;
pub mod operators;

use log::debug;
use vellum_ast::{FieldRef, Filter};
use vellum_expr::{Expr, ExprRef};
use vellum_schema::SerializerRegistry;

pub use context::TranslationContext;
pub use dispatcher::{FILTER_TRANSLATORS, TranslatorEntry, translate_filter};
pub use error::TranslateError;
pub use field::resolve_field;

/// A completed translation: the filter AST plus every field reference it
/// touched (outermost first), for collaborators that validate key names
/// before rendering a command.
#[derive(Debug, Clone, PartialEq)]
pub struct Translation {
    pub filter: Filter,
    pub fields: Vec<FieldRef>,
}

/// Translates a predicate against `registry`.
///
/// The entry point owns the per-call [`TranslationContext`]; no state
/// survives the call. A top-level lambda is the usual query-API shape
/// (`|m| ...`) and is unwrapped to its body.
pub fn translate(
    registry: &SerializerRegistry,
    predicate: &ExprRef,
) -> Result<Translation, TranslateError> {
    let ctx = TranslationContext::new(registry);
    let body = match &**predicate {
        Expr::Lambda { body, .. } => body,
        _ => predicate,
    };
    let filter = translate_filter(&ctx, body)?;
    let fields = filter.fields().into_iter().cloned().collect();
    debug!("translated predicate {} -> {:?}", predicate, filter);
    Ok(Translation { filter, fields })
}
