//! Translator selection and recursive dispatch.

use log::trace;
use vellum_ast::Filter;
use vellum_expr::{Expr, ExprRef};

use crate::context::TranslationContext;
use crate::error::TranslateError;
use crate::methods;
use crate::operators;

/// One construct translator: a cheap shape test plus the translation.
///
/// A translator that declines a node simply does not claim it; claiming a
/// node and then finding it semantically invalid is a translation failure.
pub struct TranslatorEntry {
    pub name: &'static str,
    pub applies: fn(&Expr) -> bool,
    pub translate: fn(&TranslationContext<'_>, &ExprRef) -> Result<Filter, TranslateError>,
}

/// The translator table, in precedence order.
///
/// Order is fixed at compile time, so repeated translation of the same tree
/// always selects the same translator. More specific matchers come first:
/// the count- and modulo-comparison shapes would otherwise be claimed by
/// the generic comparison translator and fail on their inner call.
pub const FILTER_TRANSLATORS: &[TranslatorEntry] = &[
    TranslatorEntry {
        name: "logical",
        applies: operators::applies_logical,
        translate: operators::translate_logical,
    },
    TranslatorEntry {
        name: "not",
        applies: operators::applies_not,
        translate: operators::translate_not,
    },
    TranslatorEntry {
        name: "count-comparison",
        applies: methods::count::applies,
        translate: methods::count::translate,
    },
    TranslatorEntry {
        name: "modulo-comparison",
        applies: operators::applies_modulo_comparison,
        translate: operators::translate_modulo_comparison,
    },
    TranslatorEntry {
        name: "comparison",
        applies: operators::applies_comparison,
        translate: operators::translate_comparison,
    },
    TranslatorEntry {
        name: "contains-key",
        applies: methods::contains_key::applies,
        translate: methods::contains_key::translate,
    },
    TranslatorEntry {
        name: "contains",
        applies: methods::contains::applies,
        translate: methods::contains::translate,
    },
    TranslatorEntry {
        name: "starts-or-ends-with",
        applies: methods::string::applies_starts_or_ends_with,
        translate: methods::string::translate_starts_or_ends_with,
    },
    TranslatorEntry {
        name: "is-null-or-empty",
        applies: methods::string::applies_is_null_or_empty,
        translate: methods::string::translate_is_null_or_empty,
    },
    TranslatorEntry {
        name: "is-match",
        applies: methods::string::applies_is_match,
        translate: methods::string::translate_is_match,
    },
    TranslatorEntry {
        name: "any",
        applies: methods::any::applies,
        translate: methods::any::translate,
    },
    TranslatorEntry {
        name: "boolean-field",
        applies: operators::applies_boolean_field,
        translate: operators::translate_boolean_field,
    },
    TranslatorEntry {
        name: "constant-predicate",
        applies: operators::applies_constant_predicate,
        translate: operators::translate_constant_predicate,
    },
];

/// Translates one predicate expression to a filter.
///
/// Tries the table in order and runs the first translator whose shape test
/// claims the node; translators recurse back into this entry point for
/// their sub-expressions. A node no translator claims is an
/// `UnsupportedConstruct` failure.
pub fn translate_filter(
    ctx: &TranslationContext<'_>,
    expr: &ExprRef,
) -> Result<Filter, TranslateError> {
    for entry in FILTER_TRANSLATORS {
        if (entry.applies)(expr) {
            trace!("translator '{}' claimed: {}", entry.name, expr);
            return (entry.translate)(ctx, expr);
        }
    }
    Err(TranslateError::unsupported(expr))
}

#[cfg(test)]
mod tests {
    use super::*;
    use vellum_expr::TypeRef;
    use vellum_schema::{Conventions, SerializerRegistry, StructSerializer, scalars};

    fn registry() -> SerializerRegistry {
        let museum = StructSerializer::builder("Museum", Conventions::default())
            .field("name", scalars::string())
            .field("open", scalars::boolean())
            .build();
        let mut registry = SerializerRegistry::new();
        registry.register(museum);
        registry
    }

    #[test]
    fn test_unclaimed_node_is_unsupported() {
        let registry = registry();
        let ctx = TranslationContext::new(&registry);
        let p = Expr::parameter("m", TypeRef::named("Museum"));
        let cond = Expr::conditional(
            Expr::member(p.clone(), "open", TypeRef::Bool),
            Expr::constant(true),
            Expr::constant(false),
        );
        let err = translate_filter(&ctx, &cond).unwrap_err();
        let TranslateError::UnsupportedConstruct { expression } = &err else {
            panic!("expected UnsupportedConstruct, got {err:?}");
        };
        assert!(expression.contains("m.open"));
    }

    #[test]
    fn test_precedence_is_stable() {
        let claimed: Vec<&str> = FILTER_TRANSLATORS
            .iter()
            .filter(|entry| {
                let p = Expr::parameter("m", TypeRef::named("Museum"));
                let open = Expr::member(p, "open", TypeRef::Bool);
                (entry.applies)(&open)
            })
            .map(|entry| entry.name)
            .collect();
        assert_eq!(claimed, vec!["boolean-field"]);
    }
}
