//! String predicates: prefix/suffix matches, emptiness, regex.

use regex::escape;
use vellum_ast::{FieldRef, Filter};
use vellum_expr::{Constant, Expr, ExprRef, Method};
use vellum_types::Value;

use crate::context::TranslationContext;
use crate::error::TranslateError;
use crate::field::{constant_of, resolve_field};

pub fn applies_starts_or_ends_with(expr: &Expr) -> bool {
    matches!(
        expr,
        Expr::Call {
            method: Method::StartsWith | Method::EndsWith,
            args,
            ty,
            ..
        } if args.len() == 1 && ty.is_bool()
    )
}

/// `starts_with` / `ends_with` compile to anchored regexes over the escaped
/// constant fragment.
pub fn translate_starts_or_ends_with(
    ctx: &TranslationContext<'_>,
    expr: &ExprRef,
) -> Result<Filter, TranslateError> {
    let Expr::Call {
        method,
        object,
        args,
        ..
    } = &**expr
    else {
        return Err(TranslateError::unsupported(expr));
    };
    let field = resolve_string_field(ctx, expr, object)?;
    let fragment = constant_of(&args[0])
        .and_then(Constant::as_str)
        .ok_or_else(|| TranslateError::non_constant(expr, "fragment must be a constant string"))?;
    let pattern = match method {
        Method::StartsWith => format!("^{}", escape(fragment)),
        Method::EndsWith => format!("{}$", escape(fragment)),
        _ => return Err(TranslateError::unsupported(expr)),
    };
    Ok(Filter::Regex {
        field,
        pattern,
        options: String::new(),
    })
}

pub fn applies_is_null_or_empty(expr: &Expr) -> bool {
    matches!(
        expr,
        Expr::Call {
            method: Method::IsNullOrEmpty,
            args,
            ty,
            ..
        } if args.is_empty() && ty.is_bool()
    )
}

/// `is_null_or_empty` is set membership in `[null, ""]`.
pub fn translate_is_null_or_empty(
    ctx: &TranslationContext<'_>,
    expr: &ExprRef,
) -> Result<Filter, TranslateError> {
    let Expr::Call { object, .. } = &**expr else {
        return Err(TranslateError::unsupported(expr));
    };
    let field = resolve_string_field(ctx, expr, object)?;
    Ok(Filter::In(
        field,
        vec![Value::Null, Value::String(String::new())],
    ))
}

pub fn applies_is_match(expr: &Expr) -> bool {
    matches!(
        expr,
        Expr::Call {
            method: Method::IsMatch,
            args,
            ty,
            ..
        } if args.len() == 1 && ty.is_bool()
    )
}

/// `is_match` passes a constant pattern through verbatim; the server is the
/// regex engine, so no escaping applies.
pub fn translate_is_match(
    ctx: &TranslationContext<'_>,
    expr: &ExprRef,
) -> Result<Filter, TranslateError> {
    let Expr::Call { object, args, .. } = &**expr else {
        return Err(TranslateError::unsupported(expr));
    };
    let field = resolve_string_field(ctx, expr, object)?;
    let pattern = constant_of(&args[0])
        .and_then(Constant::as_str)
        .ok_or_else(|| TranslateError::non_constant(expr, "pattern must be a constant string"))?;
    Ok(Filter::Regex {
        field,
        pattern: pattern.to_string(),
        options: String::new(),
    })
}

fn resolve_string_field(
    ctx: &TranslationContext<'_>,
    expr: &ExprRef,
    object: &ExprRef,
) -> Result<FieldRef, TranslateError> {
    if !object.ty().is_string() {
        return Err(TranslateError::unresolvable(
            expr,
            "receiver must be a string-typed field",
        ));
    }
    resolve_field(ctx, object)
}
