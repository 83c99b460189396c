//! Element-count comparisons over array-valued fields.

use vellum_ast::{CompareOp, FieldRef, Filter};
use vellum_expr::{BinaryOp, Constant, Expr, ExprRef, Method};

use crate::context::TranslationContext;
use crate::error::TranslateError;
use crate::field::{constant_of, resolve_field};
use crate::methods::require_sequence;

pub fn applies(expr: &Expr) -> bool {
    let Expr::Binary { op, left, right, .. } = expr else {
        return false;
    };
    matches!(
        op,
        BinaryOp::Eq | BinaryOp::Ne | BinaryOp::Lt | BinaryOp::Lte | BinaryOp::Gt | BinaryOp::Gte
    ) && (is_count_call(left) || is_count_call(right))
}

fn is_count_call(expr: &Expr) -> bool {
    matches!(
        expr,
        Expr::Call {
            method: Method::Count,
            args,
            ..
        } if args.is_empty()
    )
}

/// `m.scores.count() ⋈ n`.
///
/// Only equality has a direct operator (`$size`). Ordered comparisons use
/// the element-index encoding: an array has more than `n` elements exactly
/// when the element at position `n` exists. Bounds no count can violate
/// collapse to match-everything / match-nothing.
pub fn translate(
    ctx: &TranslationContext<'_>,
    expr: &ExprRef,
) -> Result<Filter, TranslateError> {
    let Expr::Binary { op, left, right, .. } = &**expr else {
        return Err(TranslateError::unsupported(expr));
    };
    let (count_expr, bound_expr, mirrored) = if is_count_call(left) {
        (left, right, false)
    } else {
        (right, left, true)
    };
    let Expr::Call { object, .. } = &**count_expr else {
        return Err(TranslateError::unsupported(expr));
    };

    let field = resolve_field(ctx, object)?;
    require_sequence(expr, &field)?;

    let bound = constant_of(bound_expr)
        .and_then(Constant::as_i64)
        .ok_or_else(|| TranslateError::non_constant(expr, "count bound must be a constant integer"))?;

    let op = comparison(*op, mirrored).ok_or_else(|| TranslateError::unsupported(expr))?;
    Ok(count_filter(field, op, bound))
}

fn comparison(op: BinaryOp, mirrored: bool) -> Option<CompareOp> {
    let op = match op {
        BinaryOp::Eq => CompareOp::Eq,
        BinaryOp::Ne => CompareOp::Ne,
        BinaryOp::Lt => CompareOp::Lt,
        BinaryOp::Lte => CompareOp::Lte,
        BinaryOp::Gt => CompareOp::Gt,
        BinaryOp::Gte => CompareOp::Gte,
        _ => return None,
    };
    Some(if mirrored {
        match op {
            CompareOp::Lt => CompareOp::Gt,
            CompareOp::Lte => CompareOp::Gte,
            CompareOp::Gt => CompareOp::Lt,
            CompareOp::Gte => CompareOp::Lte,
            symmetric => symmetric,
        }
    } else {
        op
    })
}

fn count_filter(field: FieldRef, op: CompareOp, bound: i64) -> Filter {
    match op {
        CompareOp::Eq => {
            if bound < 0 {
                Filter::MatchesNothing
            } else {
                Filter::Size(field, bound)
            }
        }
        CompareOp::Ne => count_filter(field, CompareOp::Eq, bound).negate(),
        // count > n  ⇔  element n exists (0-based)
        CompareOp::Gt => match element_index(bound) {
            Some(index) => Filter::exists(indexed_element(&field, index)),
            // n < 0: every array satisfies the bound
            None => Filter::MatchesEverything,
        },
        CompareOp::Gte => {
            if bound <= 0 {
                Filter::MatchesEverything
            } else {
                count_filter(field, CompareOp::Gt, bound - 1)
            }
        }
        CompareOp::Lte => count_filter(field, CompareOp::Gt, bound).negate(),
        CompareOp::Lt => count_filter(field, CompareOp::Gte, bound).negate(),
    }
}

fn element_index(bound: i64) -> Option<usize> {
    usize::try_from(bound).ok()
}

fn indexed_element(field: &FieldRef, index: usize) -> FieldRef {
    let element = field
        .serializer()
        .as_sequence()
        .map(|sequence| sequence.element_serializer())
        .unwrap_or_else(|| field.serializer().clone());
    field.indexed(index, element)
}
