//! Filter AST nodes and combinators.

use vellum_types::Value;

use crate::field::FieldRef;

/// Comparison operators over a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Ne,
    Gt,
    Gte,
    Lt,
    Lte,
}

impl CompareOp {
    /// The wire operator key.
    pub fn operator(&self) -> &'static str {
        match self {
            CompareOp::Eq => "$eq",
            CompareOp::Ne => "$ne",
            CompareOp::Gt => "$gt",
            CompareOp::Gte => "$gte",
            CompareOp::Lt => "$lt",
            CompareOp::Lte => "$lte",
        }
    }

}

/// A filter over stored documents.
///
/// Every operand is an already wire-encoded [`Value`]; nodes are fully
/// self-describing and the renderer performs no further lookups.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    Compare(FieldRef, CompareOp, Value),
    Exists(FieldRef, bool),
    In(FieldRef, Vec<Value>),
    Nin(FieldRef, Vec<Value>),
    And(Vec<Filter>),
    Or(Vec<Filter>),
    Nor(Vec<Filter>),
    /// Operator-level negation of a single-field filter. The inner filter
    /// always addresses the same field as the reference.
    Not(FieldRef, Box<Filter>),
    /// Sub-predicate over elements of an array-valued field.
    ElemMatch(FieldRef, Box<Filter>),
    Size(FieldRef, i64),
    Regex {
        field: FieldRef,
        pattern: String,
        options: String,
    },
    Mod {
        field: FieldRef,
        divisor: i64,
        remainder: i64,
    },
    /// The empty filter: matches every document.
    MatchesEverything,
    /// Matches no document.
    MatchesNothing,
}

impl Filter {
    pub fn eq(field: FieldRef, value: Value) -> Filter {
        Filter::Compare(field, CompareOp::Eq, value)
    }

    pub fn exists(field: FieldRef) -> Filter {
        Filter::Exists(field, true)
    }

    /// Conjunction; flattens nested `And`s and absorbs trivial clauses.
    pub fn all_of(filters: Vec<Filter>) -> Filter {
        let mut clauses = Vec::with_capacity(filters.len());
        for filter in filters {
            match filter {
                Filter::MatchesNothing => return Filter::MatchesNothing,
                Filter::MatchesEverything => {}
                Filter::And(nested) => clauses.extend(nested),
                other => clauses.push(other),
            }
        }
        match clauses.len() {
            0 => Filter::MatchesEverything,
            1 => clauses.remove(0),
            _ => Filter::And(clauses),
        }
    }

    /// Disjunction; flattens nested `Or`s and absorbs trivial clauses.
    pub fn any_of(filters: Vec<Filter>) -> Filter {
        let mut clauses = Vec::with_capacity(filters.len());
        for filter in filters {
            match filter {
                Filter::MatchesEverything => return Filter::MatchesEverything,
                Filter::MatchesNothing => {}
                Filter::Or(nested) => clauses.extend(nested),
                other => clauses.push(other),
            }
        }
        match clauses.len() {
            0 => Filter::MatchesNothing,
            1 => clauses.remove(0),
            _ => Filter::Or(clauses),
        }
    }

    /// Joint denial: none of the clauses may hold.
    pub fn none_of(filters: Vec<Filter>) -> Filter {
        Filter::any_of(filters).negate()
    }

    /// Logical complement.
    ///
    /// Rewrites to the dual operator where the provider's semantics allow it
    /// (`$eq`/`$ne`, `$in`/`$nin`, `$exists`, De Morgan over `$or`); anything
    /// else becomes operator-level `$not` on its field, or a `$nor` wrapper
    /// when the operand spans more than one field.
    pub fn negate(self) -> Filter {
        match self {
            Filter::Compare(field, CompareOp::Eq, value) => {
                Filter::Compare(field, CompareOp::Ne, value)
            }
            Filter::Compare(field, CompareOp::Ne, value) => {
                Filter::Compare(field, CompareOp::Eq, value)
            }
            Filter::In(field, values) => Filter::Nin(field, values),
            Filter::Nin(field, values) => Filter::In(field, values),
            Filter::Exists(field, positive) => Filter::Exists(field, !positive),
            Filter::Or(clauses) => Filter::Nor(clauses),
            Filter::Nor(clauses) => Filter::Or(clauses),
            Filter::Not(_, inner) => *inner,
            Filter::MatchesEverything => Filter::MatchesNothing,
            Filter::MatchesNothing => Filter::MatchesEverything,
            other => match other.single_field().cloned() {
                Some(field) => Filter::Not(field, Box::new(other)),
                None => Filter::Nor(vec![other]),
            },
        }
    }

    /// The field this filter addresses, when it is a single-field operator
    /// node.
    pub fn single_field(&self) -> Option<&FieldRef> {
        match self {
            Filter::Compare(field, ..)
            | Filter::Exists(field, _)
            | Filter::In(field, _)
            | Filter::Nin(field, _)
            | Filter::Not(field, _)
            | Filter::ElemMatch(field, _)
            | Filter::Size(field, _)
            | Filter::Regex { field, .. }
            | Filter::Mod { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Every field reference this filter touches, outermost first.
    pub fn fields(&self) -> Vec<&FieldRef> {
        let mut out = Vec::new();
        self.collect_fields(&mut out);
        out
    }

    fn collect_fields<'a>(&'a self, out: &mut Vec<&'a FieldRef>) {
        match self {
            Filter::Compare(field, ..)
            | Filter::Exists(field, _)
            | Filter::In(field, _)
            | Filter::Nin(field, _)
            | Filter::Size(field, _)
            | Filter::Regex { field, .. }
            | Filter::Mod { field, .. } => out.push(field),
            Filter::Not(field, inner) | Filter::ElemMatch(field, inner) => {
                out.push(field);
                inner.collect_fields(out);
            }
            Filter::And(clauses) | Filter::Or(clauses) | Filter::Nor(clauses) => {
                for clause in clauses {
                    clause.collect_fields(out);
                }
            }
            Filter::MatchesEverything | Filter::MatchesNothing => {}
        }
    }
}
