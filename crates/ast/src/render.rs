//! Rendering filters into the literal wire document shape.

use itertools::Itertools;
use vellum_types::{Document, Value};

use crate::filter::{CompareOp, Filter};

/// Renders a filter tree to its wire document.
///
/// Pure and deterministic: structurally equal filters render to equal
/// documents. Applies the provider's standard shape simplifications —
/// implicit equality (`{path: value}`), merging an `And` of clauses with
/// disjoint keys into one document, and operator-level `$not`.
pub fn render(filter: &Filter) -> Document {
    match filter {
        Filter::Compare(field, CompareOp::Eq, value) => {
            if needs_explicit_eq(value) {
                render_operator(field.dotted(), "$eq", value.clone())
            } else {
                let mut doc = Document::new();
                doc.insert(field.dotted(), value.clone());
                doc
            }
        }
        Filter::Compare(field, op, value) => {
            render_operator(field.dotted(), op.operator(), value.clone())
        }
        Filter::Exists(field, positive) => {
            render_operator(field.dotted(), "$exists", Value::Bool(*positive))
        }
        Filter::In(field, values) => {
            render_operator(field.dotted(), "$in", Value::Array(values.clone()))
        }
        Filter::Nin(field, values) => {
            render_operator(field.dotted(), "$nin", Value::Array(values.clone()))
        }
        Filter::And(clauses) => render_and(clauses),
        Filter::Or(clauses) => render_clause_list("$or", clauses),
        Filter::Nor(clauses) => render_clause_list("$nor", clauses),
        Filter::Not(field, inner) => {
            let mut doc = Document::new();
            let mut not_doc = Document::new();
            not_doc.insert("$not", operator_part(field.dotted(), inner));
            doc.insert(field.dotted(), not_doc);
            doc
        }
        Filter::ElemMatch(field, inner) => {
            render_operator(field.dotted(), "$elemMatch", Value::Document(render(inner)))
        }
        Filter::Size(field, n) => render_operator(field.dotted(), "$size", Value::Int64(*n)),
        Filter::Regex {
            field,
            pattern,
            options,
        } => {
            let mut op_doc = Document::new();
            op_doc.insert("$regex", pattern.as_str());
            if !options.is_empty() {
                op_doc.insert("$options", options.as_str());
            }
            let mut doc = Document::new();
            doc.insert(field.dotted(), op_doc);
            doc
        }
        Filter::Mod {
            field,
            divisor,
            remainder,
        } => render_operator(
            field.dotted(),
            "$mod",
            Value::Array(vec![Value::Int64(*divisor), Value::Int64(*remainder)]),
        ),
        Filter::MatchesEverything => Document::new(),
        Filter::MatchesNothing => {
            let mut doc = Document::new();
            doc.insert("$nor", Value::Array(vec![Value::Document(Document::new())]));
            doc
        }
    }
}

fn render_operator(path: String, operator: &str, value: Value) -> Document {
    let mut op_doc = Document::new();
    op_doc.insert(operator, value);
    let mut doc = Document::new();
    doc.insert(path, op_doc);
    doc
}

fn render_clause_list(operator: &str, clauses: &[Filter]) -> Document {
    let rendered = clauses
        .iter()
        .map(|clause| Value::Document(render(clause)))
        .collect::<Vec<_>>();
    let mut doc = Document::new();
    doc.insert(operator, Value::Array(rendered));
    doc
}

/// An `And` whose rendered clauses carry pairwise-distinct top-level keys
/// merges into a single document; any key collision falls back to `$and`.
fn render_and(clauses: &[Filter]) -> Document {
    let rendered: Vec<Document> = clauses.iter().map(render).collect();
    let all_keys_unique = rendered
        .iter()
        .flat_map(|doc| doc.keys())
        .all_unique();
    if all_keys_unique {
        let mut merged = Document::new();
        for doc in rendered {
            for (key, value) in doc {
                merged.insert(key, value);
            }
        }
        merged
    } else {
        let mut doc = Document::new();
        doc.insert(
            "$and",
            Value::Array(rendered.into_iter().map(Value::Document).collect()),
        );
        doc
    }
}

/// The operator document a single-field filter contributes under its path,
/// used when nesting inside `$not`.
fn operator_part(path: String, filter: &Filter) -> Document {
    let rendered = render(filter);
    match rendered.get(&path) {
        Some(Value::Document(op_doc)) => op_doc.clone(),
        Some(value) => {
            // Implicit equality regains its explicit form under $not.
            let mut op_doc = Document::new();
            op_doc.insert("$eq", value.clone());
            op_doc
        }
        None => rendered,
    }
}

fn needs_explicit_eq(value: &Value) -> bool {
    match value {
        Value::Document(doc) => doc.keys().next().is_some_and(|key| key.starts_with('$')),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldRef;
    use vellum_schema::scalars;
    use vellum_types::doc;

    fn f(name: &str) -> FieldRef {
        FieldRef::root(name, scalars::int32())
    }

    #[test]
    fn test_eq_renders_implicit_form() {
        let filter = Filter::eq(f("age"), Value::Int32(3));
        assert_eq!(render(&filter), doc! { "age" => 3 });
    }

    #[test]
    fn test_eq_against_operator_like_document_is_explicit() {
        let tricky = Value::Document(doc! { "$gt" => 1 });
        let filter = Filter::eq(f("payload"), tricky.clone());
        assert_eq!(
            render(&filter),
            doc! { "payload" => doc! { "$eq" => tricky } }
        );
    }

    #[test]
    fn test_and_merges_disjoint_keys() {
        let filter = Filter::And(vec![
            Filter::eq(f("a"), Value::Int32(1)),
            Filter::Compare(f("b"), CompareOp::Gt, Value::Int32(2)),
        ]);
        assert_eq!(
            render(&filter),
            doc! { "a" => 1, "b" => doc! { "$gt" => 2 } }
        );
    }

    #[test]
    fn test_and_with_colliding_keys_uses_operator_form() {
        let filter = Filter::And(vec![
            Filter::Compare(f("a"), CompareOp::Gt, Value::Int32(1)),
            Filter::Compare(f("a"), CompareOp::Lt, Value::Int32(9)),
        ]);
        assert_eq!(
            render(&filter),
            doc! { "$and" => vec![
                Value::Document(doc! { "a" => doc! { "$gt" => 1 } }),
                Value::Document(doc! { "a" => doc! { "$lt" => 9 } }),
            ] }
        );
    }

    #[test]
    fn test_not_wraps_operator_document() {
        let filter = Filter::Compare(f("a"), CompareOp::Gt, Value::Int32(1)).negate();
        assert_eq!(
            render(&filter),
            doc! { "a" => doc! { "$not" => doc! { "$gt" => 1 } } }
        );
    }

    #[test]
    fn test_matches_nothing_shape() {
        assert_eq!(
            render(&Filter::MatchesNothing),
            doc! { "$nor" => vec![Value::Document(Document::new())] }
        );
    }

    #[test]
    fn test_regex_options_omitted_when_empty() {
        let filter = Filter::Regex {
            field: f("name"),
            pattern: "^mus".into(),
            options: String::new(),
        };
        assert_eq!(
            render(&filter),
            doc! { "name" => doc! { "$regex" => "^mus" } }
        );
    }

    #[test]
    fn test_determinism() {
        let filter = Filter::And(vec![
            Filter::eq(f("a"), Value::Int32(1)),
            Filter::Exists(f("b"), true),
        ]);
        assert_eq!(render(&filter), render(&filter));
    }
}
