//! Field resolution: binding sub-expressions to stored paths.

use log::trace;
use vellum_ast::FieldRef;
use vellum_expr::{Constant, Expr, ExprRef};
use vellum_schema::{MappingRepresentation, SerializerRef};

use crate::context::TranslationContext;
use crate::error::TranslateError;

/// Resolves an expression that denotes a field of the queried document to a
/// [`FieldRef`]: the dotted wire path plus the serializer governing exactly
/// that location.
///
/// Walks member and indexer layers outward-in, asking each enclosing
/// serializer for the sub-serializer of the next segment. Resolution is
/// all-or-nothing: any segment the enclosing serializer does not expose
/// fails the whole walk. Results are cached per node for the duration of
/// the call.
pub fn resolve_field(
    ctx: &TranslationContext<'_>,
    expr: &ExprRef,
) -> Result<FieldRef, TranslateError> {
    if let Some(cached) = ctx.cached_field(expr) {
        return Ok(cached);
    }
    let resolved = resolve_uncached(ctx, expr)?;
    trace!("resolved {} -> {}", expr, resolved.dotted());
    ctx.cache_field(expr, &resolved);
    Ok(resolved)
}

fn resolve_uncached(
    ctx: &TranslationContext<'_>,
    expr: &ExprRef,
) -> Result<FieldRef, TranslateError> {
    match &**expr {
        Expr::Member { object, name, .. } => {
            let (enclosing, base) = resolve_enclosing(ctx, object)?;
            let document = enclosing.as_document().ok_or_else(|| {
                TranslateError::missing_capability(expr, enclosing.name(), "named-field lookup")
            })?;
            let mapped = document.field(name).ok_or_else(|| {
                TranslateError::unresolvable(
                    expr,
                    format!("{} declares no field named '{name}'", enclosing.name()),
                )
            })?;
            Ok(match base {
                Some(parent) => parent.sub_field(mapped.wire_name, mapped.serializer),
                None => FieldRef::root(mapped.wire_name, mapped.serializer),
            })
        }
        Expr::Index { object, index, .. } => {
            let (enclosing, base) = resolve_enclosing(ctx, object)?;
            if let Some(mapping) = enclosing.as_mapping() {
                match mapping.representation() {
                    MappingRepresentation::Document => {
                        let key = constant_string(index).ok_or_else(|| {
                            TranslateError::non_constant(expr, "key must be a constant string")
                        })?;
                        Ok(match base {
                            Some(parent) => parent.sub_field(key, mapping.value_serializer()),
                            None => FieldRef::root(key, mapping.value_serializer()),
                        })
                    }
                    representation => Err(TranslateError::unsupported_representation(
                        expr,
                        "key-indexed access",
                        representation,
                    )),
                }
            } else if let Some(sequence) = enclosing.as_sequence() {
                let position = constant_index(index).ok_or_else(|| {
                    TranslateError::non_constant(
                        expr,
                        "index must be a constant non-negative integer",
                    )
                })?;
                Ok(match base {
                    Some(parent) => parent.indexed(position, sequence.element_serializer()),
                    None => FieldRef::root(position.to_string(), sequence.element_serializer()),
                })
            } else {
                Err(TranslateError::missing_capability(
                    expr,
                    enclosing.name(),
                    "key- or position-based lookup",
                ))
            }
        }
        Expr::Parameter { .. } => Err(TranslateError::unresolvable(
            expr,
            "a bare parameter does not denote a stored field",
        )),
        _ => Err(TranslateError::unresolvable(
            expr,
            "only member and indexer access can form a stored path",
        )),
    }
}

/// The serializer enclosing the next segment, plus the path walked so far.
///
/// A `Parameter` object is the document root: it contributes a serializer
/// (from the registry, by declared type) but no path segments.
fn resolve_enclosing(
    ctx: &TranslationContext<'_>,
    object: &ExprRef,
) -> Result<(SerializerRef, Option<FieldRef>), TranslateError> {
    match &**object {
        Expr::Parameter { ty, .. } => {
            let serializer = ctx.registry().serializer_for(ty)?;
            Ok((serializer, None))
        }
        _ => {
            let field = resolve_field(ctx, object)?;
            Ok((field.serializer().clone(), Some(field)))
        }
    }
}

pub(crate) fn constant_of(expr: &ExprRef) -> Option<&Constant> {
    match &**expr {
        Expr::Constant { value, .. } => Some(value),
        _ => None,
    }
}

pub(crate) fn constant_string(expr: &ExprRef) -> Option<&str> {
    constant_of(expr).and_then(Constant::as_str)
}

fn constant_index(expr: &ExprRef) -> Option<usize> {
    constant_of(expr)
        .and_then(Constant::as_i64)
        .and_then(|n| usize::try_from(n).ok())
}
