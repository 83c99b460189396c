//! Readable rendering of expression trees for diagnostics.
//!
//! Translation failures carry the offending expression; this `Display`
//! implementation is what ends up in those messages.

use std::fmt;

use crate::constant::Constant;
use crate::expr::{BinaryOp, Expr, UnaryOp};

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_inner(f)
    }
}

impl Expr {
    fn fmt_inner(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Constant { value, .. } => write!(f, "{value}"),
            Expr::Parameter { name, .. } => f.write_str(name),
            Expr::Member { object, name, .. } => {
                object.fmt_inner(f)?;
                write!(f, ".{name}")
            }
            Expr::Index { object, index, .. } => {
                object.fmt_inner(f)?;
                f.write_str("[")?;
                index.fmt_inner(f)?;
                f.write_str("]")
            }
            Expr::Call { method, object, args, .. } => {
                object.fmt_inner(f)?;
                write!(f, ".{}(", method.name())?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    arg.fmt_inner(f)?;
                }
                f.write_str(")")
            }
            Expr::Binary { op, left, right, .. } => {
                f.write_str("(")?;
                left.fmt_inner(f)?;
                write!(f, " {} ", binary_op_symbol(*op))?;
                right.fmt_inner(f)?;
                f.write_str(")")
            }
            Expr::Unary { op: UnaryOp::Not, operand, .. } => {
                f.write_str("!")?;
                operand.fmt_inner(f)
            }
            Expr::Conditional {
                condition,
                then_branch,
                else_branch,
                ..
            } => {
                f.write_str("if ")?;
                condition.fmt_inner(f)?;
                f.write_str(" { ")?;
                then_branch.fmt_inner(f)?;
                f.write_str(" } else { ")?;
                else_branch.fmt_inner(f)?;
                f.write_str(" }")
            }
            Expr::Lambda { parameter, body, .. } => {
                write!(f, "|{parameter}| ")?;
                body.fmt_inner(f)
            }
            Expr::ArrayLiteral { elements, .. } => {
                f.write_str("[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    element.fmt_inner(f)?;
                }
                f.write_str("]")
            }
        }
    }
}

fn binary_op_symbol(op: BinaryOp) -> &'static str {
    match op {
        BinaryOp::Eq => "==",
        BinaryOp::Ne => "!=",
        BinaryOp::Lt => "<",
        BinaryOp::Lte => "<=",
        BinaryOp::Gt => ">",
        BinaryOp::Gte => ">=",
        BinaryOp::And => "&&",
        BinaryOp::Or => "||",
        BinaryOp::Mod => "%",
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constant::Null => f.write_str("null"),
            Constant::Bool(b) => write!(f, "{b}"),
            Constant::Int32(n) => write!(f, "{n}"),
            Constant::Int64(n) => write!(f, "{n}"),
            Constant::Double(d) => write!(f, "{d}"),
            Constant::Decimal(d) => write!(f, "{d}"),
            Constant::String(s) => write!(f, "{s:?}"),
            Constant::DateTime(dt) => write!(f, "{}", dt.to_rfc3339()),
            Constant::ObjectId(id) => write!(f, "ObjectId({id})"),
            Constant::Uuid(bytes) => {
                for b in bytes {
                    write!(f, "{b:02x}")?;
                }
                Ok(())
            }
            Constant::EnumVariant {
                type_name, variant, ..
            } => write!(f, "{type_name}::{variant}"),
            Constant::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}
