//! Membership predicates: sequences, constant lists and string fragments.

use regex::escape;
use vellum_ast::Filter;
use vellum_expr::{Constant, Expr, ExprRef, Method};

use crate::context::TranslationContext;
use crate::error::TranslateError;
use crate::field::{constant_of, resolve_field};
use crate::methods::require_sequence;

pub fn applies(expr: &Expr) -> bool {
    matches!(
        expr,
        Expr::Call {
            method: Method::Contains,
            args,
            ty,
            ..
        } if args.len() == 1 && ty.is_bool()
    )
}

/// `contains` has three translatable shapes, told apart by the receiver:
///
/// - constant list receiver, field argument: `[1, 2].contains(m.n)` is a
///   set-membership test (`$in`);
/// - string field receiver, constant fragment: substring match, compiled
///   to an unanchored escaped regex;
/// - sequence field receiver, constant element: array membership, which
///   the provider expresses as plain equality against the array field.
pub fn translate(
    ctx: &TranslationContext<'_>,
    expr: &ExprRef,
) -> Result<Filter, TranslateError> {
    let Expr::Call { object, args, .. } = &**expr else {
        return Err(TranslateError::unsupported(expr));
    };
    let argument = &args[0];

    if let Some(items) = constant_items(object) {
        return translate_in(ctx, &items, argument);
    }

    if object.ty().is_string() {
        let field = resolve_field(ctx, object)?;
        let fragment = constant_of(argument).and_then(Constant::as_str).ok_or_else(|| {
            TranslateError::non_constant(expr, "substring must be a constant string")
        })?;
        return Ok(Filter::Regex {
            field,
            pattern: escape(fragment),
            options: String::new(),
        });
    }

    let field = resolve_field(ctx, object)?;
    let sequence = require_sequence(expr, &field)?;
    let element = constant_of(argument).ok_or_else(|| {
        TranslateError::non_constant(expr, "element must be a constant")
    })?;
    let value = sequence.element_serializer().encode(element)?;
    Ok(Filter::eq(field, value))
}

/// The receiver's elements, when the receiver is a compile-time collection:
/// a list constant, or an array literal whose elements are all constants.
fn constant_items(expr: &ExprRef) -> Option<Vec<&Constant>> {
    match &**expr {
        Expr::Constant {
            value: Constant::List(items),
            ..
        } => Some(items.iter().collect()),
        Expr::ArrayLiteral { elements, .. } => elements.iter().map(constant_of).collect(),
        _ => None,
    }
}

/// Membership in a constant collection: encode each element with the
/// field's own serializer and emit `$in`.
fn translate_in(
    ctx: &TranslationContext<'_>,
    items: &[&Constant],
    argument: &ExprRef,
) -> Result<Filter, TranslateError> {
    let field = resolve_field(ctx, argument)?;
    let mut encoded = Vec::with_capacity(items.len());
    for item in items.iter().copied() {
        encoded.push(field.serializer().encode(item)?);
    }
    Ok(Filter::In(field, encoded))
}

#[cfg(test)]
mod tests {
    use super::*;
    use vellum_ast::CompareOp;
    use vellum_expr::TypeRef;
    use vellum_schema::{Conventions, ListSerializer, SerializerRegistry, StructSerializer, scalars};
    use vellum_types::Value;

    fn registry() -> SerializerRegistry {
        let museum = StructSerializer::builder("Museum", Conventions::default())
            .field("name", scalars::string())
            .field("visitors", scalars::int64())
            .field("scores", ListSerializer::new(scalars::int32()))
            .build();
        let mut registry = SerializerRegistry::new();
        registry.register(museum);
        registry
    }

    fn museum() -> ExprRef {
        Expr::parameter("m", TypeRef::named("Museum"))
    }

    #[test]
    fn test_constant_list_receiver_is_in() {
        let registry = registry();
        let ctx = TranslationContext::new(&registry);
        let candidates = Expr::constant(Constant::List(vec![
            Constant::Int32(10),
            Constant::Int32(20),
        ]));
        let visitors = Expr::member(museum(), "visitors", TypeRef::Int64);
        let call = Expr::call(Method::Contains, candidates, vec![visitors], TypeRef::Bool);
        let filter = translate(&ctx, &call).unwrap();
        let Filter::In(field, values) = filter else {
            panic!("expected In, got {filter:?}");
        };
        assert_eq!(field.dotted(), "visitors");
        // Encoded by the field's serializer, so the i32 literals widen.
        assert_eq!(values, vec![Value::Int64(10), Value::Int64(20)]);
    }

    #[test]
    fn test_string_receiver_is_escaped_regex() {
        let registry = registry();
        let ctx = TranslationContext::new(&registry);
        let name = Expr::member(museum(), "name", TypeRef::String);
        let call = Expr::call(
            Method::Contains,
            name,
            vec![Expr::constant("natural (history)")],
            TypeRef::Bool,
        );
        let filter = translate(&ctx, &call).unwrap();
        let Filter::Regex { field, pattern, .. } = filter else {
            panic!("expected Regex, got {filter:?}");
        };
        assert_eq!(field.dotted(), "name");
        assert_eq!(pattern, r"natural \(history\)");
    }

    #[test]
    fn test_sequence_receiver_is_element_equality() {
        let registry = registry();
        let ctx = TranslationContext::new(&registry);
        let scores = Expr::member(museum(), "scores", TypeRef::list(TypeRef::Int32));
        let call = Expr::call(
            Method::Contains,
            scores,
            vec![Expr::constant(7)],
            TypeRef::Bool,
        );
        let filter = translate(&ctx, &call).unwrap();
        let Filter::Compare(field, CompareOp::Eq, value) = filter else {
            panic!("expected Compare, got {filter:?}");
        };
        assert_eq!(field.dotted(), "scores");
        assert_eq!(value, Value::Int32(7));
    }

    #[test]
    fn test_non_constant_element_fails() {
        let registry = registry();
        let ctx = TranslationContext::new(&registry);
        let scores = Expr::member(museum(), "scores", TypeRef::list(TypeRef::Int32));
        let other = Expr::index(
            Expr::member(museum(), "scores", TypeRef::list(TypeRef::Int32)),
            Expr::constant(0),
            TypeRef::Int32,
        );
        let call = Expr::call(Method::Contains, scores, vec![other], TypeRef::Bool);
        let err = translate(&ctx, &call).unwrap_err();
        assert!(matches!(err, TranslateError::NonConstantArgument { .. }));
    }
}
