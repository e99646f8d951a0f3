//! Operator precedence, loosest first, mirroring the expression grammar.

use pica_ir::{BinaryOp, Expr, ExprKind, Literal, UnaryOp};

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub(super) enum Prec {
    /// `var`, assignment, `fn`: extend as far right as possible.
    Lowest,
    Or,
    And,
    Not,
    Is,
    Equality,
    Comparison,
    Additive,
    Multiplicative,
    Unary,
    Call,
    Atom,
}

impl Prec {
    pub(super) fn of_binary(op: BinaryOp) -> Self {
        match op {
            BinaryOp::Or => Prec::Or,
            BinaryOp::And => Prec::And,
            BinaryOp::Eq | BinaryOp::NotEq => Prec::Equality,
            BinaryOp::Lt | BinaryOp::Gt | BinaryOp::LtEq | BinaryOp::GtEq => Prec::Comparison,
            BinaryOp::Add | BinaryOp::Sub => Prec::Additive,
            BinaryOp::Mul | BinaryOp::Div => Prec::Multiplicative,
        }
    }

    pub(super) fn of(expr: &Expr) -> Self {
        match &expr.kind {
            ExprKind::Let { .. } | ExprKind::Assign { .. } | ExprKind::Lambda { .. } => {
                Prec::Lowest
            }
            ExprKind::Binary { op, .. } => Prec::of_binary(*op),
            ExprKind::Unary {
                op: UnaryOp::Not, ..
            } => Prec::Not,
            ExprKind::Unary {
                op: UnaryOp::Neg, ..
            } => Prec::Unary,
            ExprKind::Literal(Literal::Int(n)) if *n < 0 => Prec::Unary,
            ExprKind::Is { .. } => Prec::Is,
            ExprKind::Call { .. } => Prec::Call,
            ExprKind::Literal(_)
            | ExprKind::Nothing
            | ExprKind::Ident(_)
            | ExprKind::Local(_)
            | ExprKind::Tuple(_)
            | ExprKind::If { .. }
            | ExprKind::Block(_) => Prec::Atom,
        }
    }

    /// The next tighter level; right operands of left-associative operators
    /// need it.
    pub(super) fn tighter(self) -> Self {
        match self {
            Prec::Lowest => Prec::Or,
            Prec::Or => Prec::And,
            Prec::And => Prec::Not,
            Prec::Not => Prec::Is,
            Prec::Is => Prec::Equality,
            Prec::Equality => Prec::Comparison,
            Prec::Comparison => Prec::Additive,
            Prec::Additive => Prec::Multiplicative,
            Prec::Multiplicative => Prec::Unary,
            Prec::Unary => Prec::Call,
            Prec::Call | Prec::Atom => Prec::Atom,
        }
    }
}
