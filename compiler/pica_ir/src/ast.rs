//! Expression tree.
//!
//! The parser builds this tree and the desugarer rewrites `match` into it,
//! so it only contains primitive forms: there is no `Match` variant. Every
//! consumer (evaluator, printer) matches `ExprKind` exhaustively.

use std::fmt;

use crate::{Name, Span, TypeExpr};

/// Handle for a binding the parser synthesized.
///
/// Allocated from a per-parse counter, so two hidden bindings in one tree
/// never share an id, and no user identifier can ever refer to one.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Debug)]
pub struct LocalId(u32);

impl LocalId {
    #[inline]
    pub const fn new(raw: u32) -> Self {
        LocalId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for LocalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

/// Target of a `Let`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Binder {
    /// User-written `var name = ...` or a case binding.
    Named(Name),
    /// Parser-synthesized binding, referenced by `ExprKind::Local`.
    Hidden(LocalId),
}

/// Literal values shared by expressions, literal patterns, and literal
/// singleton types.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Literal {
    Bool(bool),
    Int(i64),
    Str(Name),
}

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    /// Short-circuit `or`.
    Or,
    /// Short-circuit `and`.
    And,
    Eq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    pub fn as_symbol(self) -> &'static str {
        match self {
            BinaryOp::Or => "or",
            BinaryOp::And => "and",
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Gt => ">",
            BinaryOp::LtEq => "<=",
            BinaryOp::GtEq => ">=",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        }
    }
}

/// Unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    Not,
    Neg,
}

impl UnaryOp {
    pub fn as_symbol(self) -> &'static str {
        match self {
            UnaryOp::Not => "not",
            UnaryOp::Neg => "-",
        }
    }
}

/// Expression node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }

    /// The unit value `nothing`.
    pub fn nothing(span: Span) -> Self {
        Expr::new(ExprKind::Nothing, span)
    }

    /// Reference to a hidden binding.
    pub fn local(id: LocalId, span: Span) -> Self {
        Expr::new(ExprKind::Local(id), span)
    }

    pub fn literal(value: Literal, span: Span) -> Self {
        Expr::new(ExprKind::Literal(value), span)
    }
}

/// Expression variants.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    /// `true`, `42`, `"text"`
    Literal(Literal),

    /// `nothing`, the unit value.
    Nothing,

    /// Variable reference.
    Ident(Name),

    /// Reference to a hidden binding.
    Local(LocalId),

    /// `(a, b, c)`; always two or more elements.
    Tuple(Vec<Expr>),

    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },

    /// Runtime type test: `value is Type`.
    Is {
        value: Box<Expr>,
        ty: TypeExpr,
    },

    /// Introduce a binding in the current scope. Evaluates to the value.
    Let {
        binder: Binder,
        value: Box<Expr>,
    },

    /// Reassign an existing variable. Evaluates to the value.
    Assign {
        name: Name,
        value: Box<Expr>,
    },

    /// Conditional. A missing surface `else` is `nothing`.
    If {
        cond: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Box<Expr>,
    },

    /// Sequence evaluated in order in a fresh scope; value of the last
    /// expression, or `nothing` when empty.
    Block(Vec<Expr>),

    /// `fn (a, b) body`
    Lambda {
        params: Vec<Name>,
        body: Box<Expr>,
    },

    /// `callee(args)`
    Call {
        func: Box<Expr>,
        args: Vec<Expr>,
    },
}
