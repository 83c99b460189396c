//! Key-existence predicates over mapping-typed fields.

use vellum_ast::Filter;
use vellum_expr::{Expr, ExprRef, Method};
use vellum_schema::MappingRepresentation;

use crate::context::TranslationContext;
use crate::error::TranslateError;
use crate::field::{constant_string, resolve_field};
use crate::methods::require_mapping;

pub fn applies(expr: &Expr) -> bool {
    matches!(
        expr,
        Expr::Call {
            method: Method::ContainsKey,
            args,
            ty,
            ..
        } if args.len() == 1 && ty.is_bool()
    )
}

/// `m.tags.contains_key("x")`.
///
/// Only the `Document` representation stores keys as literal sub-field
/// names, so only there does the predicate have a field-path equivalent:
/// an existence check on `<field>.<key>`, bound to the mapping's value
/// serializer. Every other representation is a deliberate, named failure —
/// emitting a near-miss query would silently match the wrong documents.
pub fn translate(
    ctx: &TranslationContext<'_>,
    expr: &ExprRef,
) -> Result<Filter, TranslateError> {
    let Expr::Call { object, args, .. } = &**expr else {
        return Err(TranslateError::unsupported(expr));
    };
    let key_expr = &args[0];

    let mapping_field = resolve_field(ctx, object)?;
    let mapping = require_mapping(expr, &mapping_field)?;
    let value_serializer = mapping.value_serializer();

    match mapping.representation() {
        MappingRepresentation::Document => {
            let key = constant_string(key_expr).ok_or_else(|| {
                TranslateError::non_constant(expr, "key must be a constant string")
            })?;
            let key_field = mapping_field.sub_field(key, value_serializer);
            Ok(Filter::exists(key_field))
        }
        representation => Err(TranslateError::unsupported_representation(
            expr,
            "contains_key",
            representation,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vellum_expr::TypeRef;
    use vellum_schema::{
        Conventions, MappingSerializer, SerializerRegistry, StructSerializer, scalars,
    };

    fn registry(representation: MappingRepresentation) -> SerializerRegistry {
        let museum = StructSerializer::builder("Museum", Conventions::default())
            .field(
                "tags",
                MappingSerializer::new(scalars::string(), scalars::int32(), representation),
            )
            .field("name", scalars::string())
            .build();
        let mut registry = SerializerRegistry::new();
        registry.register(museum);
        registry
    }

    fn contains_key_call(key: ExprRef) -> ExprRef {
        let p = Expr::parameter("m", TypeRef::named("Museum"));
        let tags = Expr::member(p, "tags", TypeRef::map(TypeRef::String, TypeRef::Int32));
        Expr::call(Method::ContainsKey, tags, vec![key], TypeRef::Bool)
    }

    #[test]
    fn test_document_representation_emits_exists() {
        let registry = registry(MappingRepresentation::Document);
        let ctx = TranslationContext::new(&registry);
        let call = contains_key_call(Expr::constant("x"));
        let filter = translate(&ctx, &call).unwrap();
        let Filter::Exists(field, true) = filter else {
            panic!("expected Exists, got {filter:?}");
        };
        assert_eq!(field.dotted(), "tags.x");
    }

    #[test]
    fn test_other_representations_fail_loudly() {
        for representation in [
            MappingRepresentation::ArrayOfDocuments,
            MappingRepresentation::ArrayOfArrays,
        ] {
            let registry = registry(representation);
            let ctx = TranslationContext::new(&registry);
            let call = contains_key_call(Expr::constant("x"));
            let err = translate(&ctx, &call).unwrap_err();
            let TranslateError::UnsupportedRepresentation {
                representation: named,
                ..
            } = &err
            else {
                panic!("expected UnsupportedRepresentation, got {err:?}");
            };
            assert_eq!(named, &representation.to_string());
        }
    }

    #[test]
    fn test_dynamic_key_fails() {
        let registry = registry(MappingRepresentation::Document);
        let ctx = TranslationContext::new(&registry);
        let p = Expr::parameter("m", TypeRef::named("Museum"));
        let dynamic = Expr::member(p, "name", TypeRef::String);
        let call = contains_key_call(dynamic);
        let err = translate(&ctx, &call).unwrap_err();
        assert!(matches!(err, TranslateError::NonConstantArgument { .. }));
    }

    #[test]
    fn test_non_mapping_receiver_names_the_serializer() {
        let registry = registry(MappingRepresentation::Document);
        let ctx = TranslationContext::new(&registry);
        let p = Expr::parameter("m", TypeRef::named("Museum"));
        let name = Expr::member(p, "name", TypeRef::String);
        let call = Expr::call(
            Method::ContainsKey,
            name,
            vec![Expr::constant("x")],
            TypeRef::Bool,
        );
        let err = translate(&ctx, &call).unwrap_err();
        let TranslateError::MissingCapability { serializer, .. } = &err else {
            panic!("expected MissingCapability, got {err:?}");
        };
        assert_eq!(serializer, "StringSerializer");
    }
}
