//! Translators for binary/unary operators and operand-position predicates.

use vellum_ast::Filter;
use vellum_expr::{BinaryOp, Constant, Expr, ExprRef, UnaryOp};
use vellum_types::Value;

use crate::context::TranslationContext;
use crate::dispatcher::translate_filter;
use crate::error::TranslateError;
use crate::field::{constant_of, resolve_field};

pub fn applies_logical(expr: &Expr) -> bool {
    matches!(
        expr,
        Expr::Binary {
            op: BinaryOp::And | BinaryOp::Or,
            ..
        }
    )
}

/// `&&` / `||`: recurse into both sides and compose, flattening nested
/// clauses of the same kind.
pub fn translate_logical(
    ctx: &TranslationContext<'_>,
    expr: &ExprRef,
) -> Result<Filter, TranslateError> {
    let Expr::Binary { op, left, right, .. } = &**expr else {
        return Err(TranslateError::unsupported(expr));
    };
    let clauses = vec![translate_filter(ctx, left)?, translate_filter(ctx, right)?];
    match op {
        BinaryOp::And => Ok(Filter::all_of(clauses)),
        BinaryOp::Or => Ok(Filter::any_of(clauses)),
        _ => Err(TranslateError::unsupported(expr)),
    }
}

pub fn applies_not(expr: &Expr) -> bool {
    matches!(expr, Expr::Unary { op: UnaryOp::Not, .. })
}

pub fn translate_not(
    ctx: &TranslationContext<'_>,
    expr: &ExprRef,
) -> Result<Filter, TranslateError> {
    let Expr::Unary { operand, .. } = &**expr else {
        return Err(TranslateError::unsupported(expr));
    };
    Ok(translate_filter(ctx, operand)?.negate())
}

pub fn applies_comparison(expr: &Expr) -> bool {
    matches!(
        expr,
        Expr::Binary {
            op: BinaryOp::Eq
                | BinaryOp::Ne
                | BinaryOp::Lt
                | BinaryOp::Lte
                | BinaryOp::Gt
                | BinaryOp::Gte,
            ..
        }
    )
}

/// Field ⋈ constant comparisons.
///
/// The constant may stand on either side; a constant-on-left comparison
/// mirrors the operator. The constant is wire-encoded by the serializer
/// bound to the field, which is where representation-sensitive encodings
/// (enums, uuids, integer widths) take effect.
pub fn translate_comparison(
    ctx: &TranslationContext<'_>,
    expr: &ExprRef,
) -> Result<Filter, TranslateError> {
    let Expr::Binary { op, left, right, .. } = &**expr else {
        return Err(TranslateError::unsupported(expr));
    };
    let compare_op = comparison_op(*op).ok_or_else(|| TranslateError::unsupported(expr))?;
    let (field_expr, constant, op) = match (constant_of(left), constant_of(right)) {
        (None, Some(constant)) => (left, constant, compare_op),
        (Some(constant), None) => (right, constant, mirror(compare_op)),
        (Some(_), Some(_)) => {
            return Err(TranslateError::unsupported(expr));
        }
        (None, None) => {
            return Err(TranslateError::non_constant(
                expr,
                "one comparison operand must be a constant",
            ));
        }
    };
    let field = resolve_field(ctx, field_expr)?;
    let value = field.serializer().encode(constant)?;
    Ok(Filter::Compare(field, op, value))
}

fn comparison_op(op: BinaryOp) -> Option<vellum_ast::CompareOp> {
    use vellum_ast::CompareOp;
    match op {
        BinaryOp::Eq => Some(CompareOp::Eq),
        BinaryOp::Ne => Some(CompareOp::Ne),
        BinaryOp::Lt => Some(CompareOp::Lt),
        BinaryOp::Lte => Some(CompareOp::Lte),
        BinaryOp::Gt => Some(CompareOp::Gt),
        BinaryOp::Gte => Some(CompareOp::Gte),
        _ => None,
    }
}

/// The operator as seen with its operands swapped (`3 < f` is `f > 3`).
fn mirror(op: vellum_ast::CompareOp) -> vellum_ast::CompareOp {
    use vellum_ast::CompareOp;
    match op {
        CompareOp::Eq => CompareOp::Eq,
        CompareOp::Ne => CompareOp::Ne,
        CompareOp::Lt => CompareOp::Gt,
        CompareOp::Lte => CompareOp::Gte,
        CompareOp::Gt => CompareOp::Lt,
        CompareOp::Gte => CompareOp::Lte,
    }
}

pub fn applies_modulo_comparison(expr: &Expr) -> bool {
    let Expr::Binary {
        op: BinaryOp::Eq | BinaryOp::Ne,
        left,
        right,
        ..
    } = expr
    else {
        return false;
    };
    is_modulo(left) || is_modulo(right)
}

fn is_modulo(expr: &Expr) -> bool {
    matches!(
        expr,
        Expr::Binary {
            op: BinaryOp::Mod,
            ..
        }
    )
}

/// `(field % divisor) == remainder` and its negation.
pub fn translate_modulo_comparison(
    ctx: &TranslationContext<'_>,
    expr: &ExprRef,
) -> Result<Filter, TranslateError> {
    let Expr::Binary { op, left, right, .. } = &**expr else {
        return Err(TranslateError::unsupported(expr));
    };
    let (modulo_expr, remainder_expr) = if is_modulo(left) {
        (left, right)
    } else {
        (right, left)
    };
    let Expr::Binary {
        left: field_expr,
        right: divisor_expr,
        ..
    } = &**modulo_expr
    else {
        return Err(TranslateError::unsupported(expr));
    };
    let field = resolve_field(ctx, field_expr)?;
    let divisor = constant_i64(divisor_expr)
        .ok_or_else(|| TranslateError::non_constant(expr, "modulo divisor must be a constant integer"))?;
    let remainder = constant_i64(remainder_expr)
        .ok_or_else(|| TranslateError::non_constant(expr, "modulo remainder must be a constant integer"))?;
    let filter = Filter::Mod {
        field,
        divisor,
        remainder,
    };
    match op {
        BinaryOp::Eq => Ok(filter),
        BinaryOp::Ne => Ok(filter.negate()),
        _ => Err(TranslateError::unsupported(expr)),
    }
}

fn constant_i64(expr: &ExprRef) -> Option<i64> {
    constant_of(expr).and_then(Constant::as_i64)
}

pub fn applies_boolean_field(expr: &Expr) -> bool {
    matches!(expr, Expr::Member { ty, .. } | Expr::Index { ty, .. } if ty.is_bool())
}

/// A bare boolean field used as a predicate: `m.active` means
/// `m.active == true`.
pub fn translate_boolean_field(
    ctx: &TranslationContext<'_>,
    expr: &ExprRef,
) -> Result<Filter, TranslateError> {
    let field = resolve_field(ctx, expr)?;
    Ok(Filter::eq(field, Value::Bool(true)))
}

pub fn applies_constant_predicate(expr: &Expr) -> bool {
    matches!(
        expr,
        Expr::Constant {
            value: Constant::Bool(_),
            ..
        }
    )
}

/// A literal `true`/`false` predicate (typically left by caller-side
/// simplification) matches everything or nothing.
pub fn translate_constant_predicate(
    _ctx: &TranslationContext<'_>,
    expr: &ExprRef,
) -> Result<Filter, TranslateError> {
    match &**expr {
        Expr::Constant {
            value: Constant::Bool(true),
            ..
        } => Ok(Filter::MatchesEverything),
        Expr::Constant {
            value: Constant::Bool(false),
            ..
        } => Ok(Filter::MatchesNothing),
        _ => Err(TranslateError::unsupported(expr)),
    }
}
