use thiserror::Error;
use vellum_expr::Expr;
use vellum_schema::SchemaError;

/// Why a predicate could not be translated.
///
/// Every variant carries the offending expression in display form; a failure
/// is terminal for the whole translation call and no partial AST escapes.
#[derive(Error, Debug, Clone)]
pub enum TranslateError {
    #[error("expression is not supported: {expression}")]
    UnsupportedConstruct { expression: String },

    #[error("expression does not denote a stored field: {expression} ({reason})")]
    UnresolvableField { expression: String, reason: String },

    #[error("{serializer} does not support {capability}, required by: {expression}")]
    MissingCapability {
        expression: String,
        serializer: String,
        capability: String,
    },

    #[error("{construct} is not supported when the representation is {representation}: {expression}")]
    UnsupportedRepresentation {
        expression: String,
        construct: String,
        representation: String,
    },

    #[error("{reason}: {expression}")]
    NonConstantArgument { expression: String, reason: String },

    #[error(transparent)]
    Schema(#[from] SchemaError),
}

impl TranslateError {
    pub fn unsupported(expression: &Expr) -> Self {
        Self::UnsupportedConstruct {
            expression: expression.to_string(),
        }
    }

    pub fn unresolvable(expression: &Expr, reason: impl Into<String>) -> Self {
        Self::UnresolvableField {
            expression: expression.to_string(),
            reason: reason.into(),
        }
    }

    pub fn missing_capability(
        expression: &Expr,
        serializer: impl Into<String>,
        capability: impl Into<String>,
    ) -> Self {
        Self::MissingCapability {
            expression: expression.to_string(),
            serializer: serializer.into(),
            capability: capability.into(),
        }
    }

    pub fn unsupported_representation(
        expression: &Expr,
        construct: impl Into<String>,
        representation: impl std::fmt::Display,
    ) -> Self {
        Self::UnsupportedRepresentation {
            expression: expression.to_string(),
            construct: construct.into(),
            representation: representation.to_string(),
        }
    }

    pub fn non_constant(expression: &Expr, reason: impl Into<String>) -> Self {
        Self::NonConstantArgument {
            expression: expression.to_string(),
            reason: reason.into(),
        }
    }
}
