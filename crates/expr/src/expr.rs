//! Expression node definitions and constructors.

use std::sync::Arc;

use crate::constant::Constant;
use crate::types::TypeRef;

/// Shared handle to an expression node.
///
/// Subtrees are shared by cloning the handle; node identity (the allocation,
/// not structural equality) is what the translator's resolution cache keys
/// on.
pub type ExprRef = Arc<Expr>;

/// The closed set of method identities the engine can translate.
///
/// Matching is an exhaustive enum dispatch; there is no name or signature
/// probing at translation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    ContainsKey,
    Contains,
    StartsWith,
    EndsWith,
    IsNullOrEmpty,
    IsMatch,
    Any,
    Count,
}

impl Method {
    /// The surface-syntax name, used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Method::ContainsKey => "contains_key",
            Method::Contains => "contains",
            Method::StartsWith => "starts_with",
            Method::EndsWith => "ends_with",
            Method::IsNullOrEmpty => "is_null_or_empty",
            Method::IsMatch => "is_match",
            Method::Any => "any",
            Method::Count => "count",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Eq,
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,
    And,
    Or,
    Mod,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Not,
}

/// A node in a caller-built predicate tree.
///
/// Trees are immutable once built; the engine never mutates input nodes.
/// Every node carries its static declared type.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A compile-time literal.
    Constant { value: Constant, ty: TypeRef },
    /// The root of the queried document (a lambda parameter).
    Parameter { name: String, ty: TypeRef },
    /// Property access: `object.name`.
    Member {
        object: ExprRef,
        name: String,
        ty: TypeRef,
    },
    /// Indexer/key access: `object[index]`.
    Index {
        object: ExprRef,
        index: ExprRef,
        ty: TypeRef,
    },
    /// An invocation of one of the known [`Method`]s.
    Call {
        method: Method,
        object: ExprRef,
        args: Vec<ExprRef>,
        ty: TypeRef,
    },
    Binary {
        op: BinaryOp,
        left: ExprRef,
        right: ExprRef,
        ty: TypeRef,
    },
    Unary {
        op: UnaryOp,
        operand: ExprRef,
        ty: TypeRef,
    },
    Conditional {
        condition: ExprRef,
        then_branch: ExprRef,
        else_branch: ExprRef,
        ty: TypeRef,
    },
    Lambda {
        parameter: String,
        body: ExprRef,
        ty: TypeRef,
    },
    ArrayLiteral { elements: Vec<ExprRef>, ty: TypeRef },
}

impl Expr {
    /// The static declared type of this node.
    pub fn ty(&self) -> &TypeRef {
        match self {
            Expr::Constant { ty, .. }
            | Expr::Parameter { ty, .. }
            | Expr::Member { ty, .. }
            | Expr::Index { ty, .. }
            | Expr::Call { ty, .. }
            | Expr::Binary { ty, .. }
            | Expr::Unary { ty, .. }
            | Expr::Conditional { ty, .. }
            | Expr::Lambda { ty, .. }
            | Expr::ArrayLiteral { ty, .. } => ty,
        }
    }

    pub fn parameter(name: impl Into<String>, ty: TypeRef) -> ExprRef {
        Arc::new(Expr::Parameter {
            name: name.into(),
            ty,
        })
    }

    /// A constant node with its type inferred from the value.
    pub fn constant(value: impl Into<Constant>) -> ExprRef {
        let value = value.into();
        let ty = value.type_ref();
        Arc::new(Expr::Constant { value, ty })
    }

    /// A constant node with an explicit declared type.
    pub fn typed_constant(value: impl Into<Constant>, ty: TypeRef) -> ExprRef {
        Arc::new(Expr::Constant {
            value: value.into(),
            ty,
        })
    }

    pub fn member(object: ExprRef, name: impl Into<String>, ty: TypeRef) -> ExprRef {
        Arc::new(Expr::Member {
            object,
            name: name.into(),
            ty,
        })
    }

    pub fn index(object: ExprRef, index: ExprRef, ty: TypeRef) -> ExprRef {
        Arc::new(Expr::Index { object, index, ty })
    }

    pub fn call(method: Method, object: ExprRef, args: Vec<ExprRef>, ty: TypeRef) -> ExprRef {
        Arc::new(Expr::Call {
            method,
            object,
            args,
            ty,
        })
    }

    pub fn binary(op: BinaryOp, left: ExprRef, right: ExprRef) -> ExprRef {
        let ty = match op {
            BinaryOp::Mod => left.ty().clone(),
            _ => TypeRef::Bool,
        };
        Arc::new(Expr::Binary { op, left, right, ty })
    }

    pub fn eq(left: ExprRef, right: ExprRef) -> ExprRef {
        Expr::binary(BinaryOp::Eq, left, right)
    }

    pub fn ne(left: ExprRef, right: ExprRef) -> ExprRef {
        Expr::binary(BinaryOp::Ne, left, right)
    }

    pub fn gt(left: ExprRef, right: ExprRef) -> ExprRef {
        Expr::binary(BinaryOp::Gt, left, right)
    }

    pub fn gte(left: ExprRef, right: ExprRef) -> ExprRef {
        Expr::binary(BinaryOp::Gte, left, right)
    }

    pub fn lt(left: ExprRef, right: ExprRef) -> ExprRef {
        Expr::binary(BinaryOp::Lt, left, right)
    }

    pub fn lte(left: ExprRef, right: ExprRef) -> ExprRef {
        Expr::binary(BinaryOp::Lte, left, right)
    }

    pub fn and(left: ExprRef, right: ExprRef) -> ExprRef {
        Expr::binary(BinaryOp::And, left, right)
    }

    pub fn or(left: ExprRef, right: ExprRef) -> ExprRef {
        Expr::binary(BinaryOp::Or, left, right)
    }

    pub fn modulo(left: ExprRef, right: ExprRef) -> ExprRef {
        Expr::binary(BinaryOp::Mod, left, right)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(operand: ExprRef) -> ExprRef {
        Arc::new(Expr::Unary {
            op: UnaryOp::Not,
            operand,
            ty: TypeRef::Bool,
        })
    }

    pub fn conditional(condition: ExprRef, then_branch: ExprRef, else_branch: ExprRef) -> ExprRef {
        let ty = then_branch.ty().clone();
        Arc::new(Expr::Conditional {
            condition,
            then_branch,
            else_branch,
            ty,
        })
    }

    pub fn lambda(parameter: impl Into<String>, body: ExprRef) -> ExprRef {
        let ty = body.ty().clone();
        Arc::new(Expr::Lambda {
            parameter: parameter.into(),
            body,
            ty,
        })
    }

    pub fn array_literal(elements: Vec<ExprRef>, element_ty: TypeRef) -> ExprRef {
        Arc::new(Expr::ArrayLiteral {
            elements,
            ty: TypeRef::list(element_ty),
        })
    }
}
