//! Per-call translation state.

use std::cell::RefCell;
use std::collections::HashMap;

use vellum_ast::FieldRef;
use vellum_expr::{Expr, ExprRef};
use vellum_schema::SerializerRegistry;

/// State threaded through one top-level translation call.
///
/// Holds a borrow of the caller's registry and a resolution cache keyed by
/// expression node identity (the `Arc` allocation). A context is created at
/// call entry, dropped at call exit, and never shared between calls or
/// threads; concurrent translations each own an isolated context over the
/// same read-only registry.
pub struct TranslationContext<'a> {
    registry: &'a SerializerRegistry,
    resolved_fields: RefCell<HashMap<*const Expr, FieldRef>>,
}

impl<'a> TranslationContext<'a> {
    pub fn new(registry: &'a SerializerRegistry) -> Self {
        Self {
            registry,
            resolved_fields: RefCell::new(HashMap::new()),
        }
    }

    pub fn registry(&self) -> &SerializerRegistry {
        self.registry
    }

    /// The cached resolution for this exact node, if the call has already
    /// walked it. Caching never changes outcomes, only the work performed.
    pub(crate) fn cached_field(&self, expr: &ExprRef) -> Option<FieldRef> {
        self.resolved_fields
            .borrow()
            .get(&ExprRef::as_ptr(expr))
            .cloned()
    }

    pub(crate) fn cache_field(&self, expr: &ExprRef, field: &FieldRef) {
        self.resolved_fields
            .borrow_mut()
            .insert(ExprRef::as_ptr(expr), field.clone());
    }

    #[cfg(test)]
    pub(crate) fn cached_count(&self) -> usize {
        self.resolved_fields.borrow().len()
    }
}
