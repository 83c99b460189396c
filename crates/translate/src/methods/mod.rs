//! Method-call translators.
//!
//! One module per construct family; every translator follows the same
//! shape: validate the call precisely, resolve the receiver to a field,
//! require the capability the construct needs, branch exhaustively on the
//! representation where one applies, then emit a node or fail.

pub mod any;
pub mod contains;
pub mod contains_key;
pub mod count;
pub mod string;

use vellum_ast::FieldRef;
use vellum_expr::Expr;
use vellum_schema::{MappingLike, SequenceLike};

use crate::error::TranslateError;

/// The mapping capability of a resolved field, or a `MissingCapability`
/// failure naming the serializer that lacks it.
pub(crate) fn require_mapping<'a>(
    expr: &Expr,
    field: &'a FieldRef,
) -> Result<&'a dyn MappingLike, TranslateError> {
    field.serializer().as_mapping().ok_or_else(|| {
        TranslateError::missing_capability(
            expr,
            field.serializer().name(),
            "mapping-shaped key lookup",
        )
    })
}

pub(crate) fn require_sequence<'a>(
    expr: &Expr,
    field: &'a FieldRef,
) -> Result<&'a dyn SequenceLike, TranslateError> {
    field.serializer().as_sequence().ok_or_else(|| {
        TranslateError::missing_capability(
            expr,
            field.serializer().name(),
            "array-shaped element access",
        )
    })
}
