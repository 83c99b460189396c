//! The failure taxonomy: every error names the offending expression and
//! translation never yields a partial result.

mod common;

use common::{attrs, member, registry, tags};
use vellum::prelude::*;
use vellum::TranslateError;

#[test]
fn unknown_construct_is_unsupported() {
    let registry = registry();
    let translator = Translator::new(&registry);

    let predicate = Expr::conditional(
        member("open", TypeRef::Bool),
        Expr::constant(true),
        Expr::constant(false),
    );

    let err = translator.translate(&predicate).unwrap_err();
    let TranslateError::UnsupportedConstruct { expression } = &err else {
        panic!("expected UnsupportedConstruct, got {err:?}");
    };
    assert!(expression.contains("m.open"), "diagnostic was: {expression}");
}

#[test]
fn undeclared_field_is_unresolvable() {
    let registry = registry();
    let translator = Translator::new(&registry);

    let predicate = Expr::eq(member("curator", TypeRef::String), Expr::constant("A"));
    let err = translator.translate(&predicate).unwrap_err();
    let TranslateError::UnresolvableField { reason, .. } = &err else {
        panic!("expected UnresolvableField, got {err:?}");
    };
    assert!(reason.contains("curator"), "diagnostic was: {reason}");
}

#[test]
fn removing_an_intermediate_mapping_breaks_the_path() {
    // Same walk as the happy-path `address.geo.lat` test, against a schema
    // whose Address no longer declares `geo`.
    let conventions = Conventions::camel_case();
    let address = StructSerializer::builder("Address", conventions)
        .field("city", scalars::string())
        .build();
    let museum = StructSerializer::builder("Museum", conventions)
        .field("address", address)
        .build();
    let mut registry = SerializerRegistry::new();
    registry.register(museum);
    let translator = Translator::new(&registry);

    let address = member("address", TypeRef::named("Address"));
    let geo = Expr::member(address, "geo", TypeRef::named("Geo"));
    let lat = Expr::member(geo, "lat", TypeRef::Double);
    let predicate = Expr::gte(lat, Expr::constant(59.9));

    let err = translator.translate(&predicate).unwrap_err();
    assert!(matches!(err, TranslateError::UnresolvableField { .. }));
}

#[test]
fn contains_key_on_non_mapping_field_names_the_serializer() {
    let registry = registry();
    let translator = Translator::new(&registry);

    let predicate = Expr::call(
        Method::ContainsKey,
        member("name", TypeRef::String),
        vec![Expr::constant("x")],
        TypeRef::Bool,
    );

    let err = translator.translate(&predicate).unwrap_err();
    let TranslateError::MissingCapability { serializer, capability, .. } = &err else {
        panic!("expected MissingCapability, got {err:?}");
    };
    assert_eq!(serializer, "StringSerializer");
    assert!(capability.contains("mapping"));
}

#[test]
fn contains_key_on_array_of_documents_mapping_names_the_representation() {
    let registry = registry();
    let translator = Translator::new(&registry);

    let predicate = Expr::call(
        Method::ContainsKey,
        attrs(),
        vec![Expr::constant("x")],
        TypeRef::Bool,
    );

    let err = translator.translate(&predicate).unwrap_err();
    let TranslateError::UnsupportedRepresentation {
        construct,
        representation,
        ..
    } = &err
    else {
        panic!("expected UnsupportedRepresentation, got {err:?}");
    };
    assert_eq!(construct, "contains_key");
    assert_eq!(representation, "ArrayOfDocuments");
}

#[test]
fn key_access_into_non_document_mapping_fails_the_same_way() {
    let registry = registry();
    let translator = Translator::new(&registry);

    let entry = Expr::index(attrs(), Expr::constant("x"), TypeRef::String);
    let predicate = Expr::eq(entry, Expr::constant("v"));

    let err = translator.translate(&predicate).unwrap_err();
    assert!(matches!(
        err,
        TranslateError::UnsupportedRepresentation { .. }
    ));
}

#[test]
fn dynamic_key_is_a_non_constant_argument() {
    let registry = registry();
    let translator = Translator::new(&registry);

    let predicate = Expr::call(
        Method::ContainsKey,
        tags(),
        vec![member("name", TypeRef::String)],
        TypeRef::Bool,
    );

    let err = translator.translate(&predicate).unwrap_err();
    let TranslateError::NonConstantArgument { reason, .. } = &err else {
        panic!("expected NonConstantArgument, got {err:?}");
    };
    assert!(reason.contains("constant string"));
}

#[test]
fn field_to_field_comparison_is_non_constant() {
    let registry = registry();
    let translator = Translator::new(&registry);

    let predicate = Expr::eq(
        member("name", TypeRef::String),
        member("opening_hours", TypeRef::String),
    );
    let err = translator.translate(&predicate).unwrap_err();
    assert!(matches!(err, TranslateError::NonConstantArgument { .. }));
}

#[test]
fn mistyped_constant_surfaces_the_encode_error() {
    let registry = registry();
    let translator = Translator::new(&registry);

    let predicate = Expr::eq(member("name", TypeRef::String), Expr::constant(5));
    let err = translator.translate(&predicate).unwrap_err();
    let TranslateError::Schema(inner) = &err else {
        panic!("expected Schema, got {err:?}");
    };
    assert!(inner.to_string().contains("StringSerializer"));
}

#[test]
fn one_bad_clause_fails_the_whole_conjunction() {
    let registry = registry();
    let translator = Translator::new(&registry);

    let good = Expr::eq(member("name", TypeRef::String), Expr::constant("Louvre"));
    let bad = Expr::call(
        Method::ContainsKey,
        attrs(),
        vec![Expr::constant("x")],
        TypeRef::Bool,
    );
    let predicate = Expr::and(good, bad);

    // All-or-nothing: no partial AST, exactly one failure.
    let err = translator.translate(&predicate).unwrap_err();
    assert!(matches!(
        err,
        TranslateError::UnsupportedRepresentation { .. }
    ));
}

#[test]
fn every_failure_prints_the_offending_expression() {
    let registry = registry();
    let translator = Translator::new(&registry);

    let predicate = Expr::call(
        Method::ContainsKey,
        attrs(),
        vec![Expr::constant("x")],
        TypeRef::Bool,
    );
    let err = translator.translate(&predicate).unwrap_err();
    assert!(err.to_string().contains("m.attrs.contains_key(\"x\")"));
}
