//! Array quantification: bare `any()` and `any(|elem| ...)`.

use vellum_ast::Filter;
use vellum_expr::{Expr, ExprRef, Method};
use vellum_types::Value;

use crate::context::TranslationContext;
use crate::dispatcher::translate_filter;
use crate::error::TranslateError;
use crate::field::resolve_field;
use crate::methods::require_sequence;

pub fn applies(expr: &Expr) -> bool {
    matches!(
        expr,
        Expr::Call {
            method: Method::Any,
            args,
            ty,
            ..
        } if args.len() <= 1 && ty.is_bool()
    )
}

/// Bare `any()` asks for a non-empty array: the field is present, not
/// null, and not `[]`. With a predicate, the lambda body translates in the
/// element's scope and wraps in `$elemMatch`; the body must address fields
/// of the element, so elements need a document shape.
pub fn translate(
    ctx: &TranslationContext<'_>,
    expr: &ExprRef,
) -> Result<Filter, TranslateError> {
    let Expr::Call { object, args, .. } = &**expr else {
        return Err(TranslateError::unsupported(expr));
    };
    let field = resolve_field(ctx, object)?;
    require_sequence(expr, &field)?;

    match args.as_slice() {
        [] => {
            let not_empty =
                Filter::Compare(field.clone(), vellum_ast::CompareOp::Ne, Value::Null);
            let has_elements = Filter::Size(field.clone(), 0).negate();
            Ok(Filter::all_of(vec![not_empty, has_elements]))
        }
        [predicate] => {
            let Expr::Lambda { body, .. } = &**predicate else {
                return Err(TranslateError::non_constant(
                    expr,
                    "any() takes a lambda predicate",
                ));
            };
            let element_filter = translate_filter(ctx, body)?;
            Ok(Filter::ElemMatch(field, Box::new(element_filter)))
        }
        _ => Err(TranslateError::unsupported(expr)),
    }
}
