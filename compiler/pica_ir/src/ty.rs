//! Type expressions.
//!
//! Pica is dynamically typed; type expressions only appear on the right of
//! `is` and in `case` patterns, where they are tested against runtime
//! values.

use crate::{Literal, Name, Span};

/// A parsed type expression.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeExpr {
    /// `Int`, `String`, `Any`, ...
    Named { name: Name, span: Span },
    /// Singleton type: `1`, `"none"`, `true`.
    Literal { value: Literal, span: Span },
    /// `()`, the type of `nothing`.
    Unit { span: Span },
    /// `(A, B)`
    Tuple { elements: Vec<TypeExpr>, span: Span },
    /// `A | B | C`
    Union { members: Vec<TypeExpr>, span: Span },
    /// `A => B`
    Function {
        param: Box<TypeExpr>,
        ret: Box<TypeExpr>,
        span: Span,
    },
}

impl TypeExpr {
    pub fn span(&self) -> Span {
        match self {
            TypeExpr::Named { span, .. }
            | TypeExpr::Literal { span, .. }
            | TypeExpr::Unit { span }
            | TypeExpr::Tuple { span, .. }
            | TypeExpr::Union { span, .. }
            | TypeExpr::Function { span, .. } => *span,
        }
    }

    /// The same type, re-anchored at `span`.
    #[must_use]
    pub fn with_span(mut self, new_span: Span) -> Self {
        match &mut self {
            TypeExpr::Named { span, .. }
            | TypeExpr::Literal { span, .. }
            | TypeExpr::Unit { span }
            | TypeExpr::Tuple { span, .. }
            | TypeExpr::Union { span, .. }
            | TypeExpr::Function { span, .. } => *span = new_span,
        }
        self
    }

    /// Number of arguments a function accepting this parameter type takes.
    ///
    /// `()` takes none, a tuple spreads into its elements, anything else is a
    /// single argument.
    pub fn param_arity(&self) -> usize {
        match self {
            TypeExpr::Unit { .. } => 0,
            TypeExpr::Tuple { elements, .. } => elements.len(),
            TypeExpr::Named { .. }
            | TypeExpr::Literal { .. }
            | TypeExpr::Union { .. }
            | TypeExpr::Function { .. } => 1,
        }
    }
}
