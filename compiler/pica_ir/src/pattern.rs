//! `case` patterns and match arms.
//!
//! Patterns only exist between parsing a `case` and desugaring the `match`
//! that contains it. Each pattern is turned into exactly one boolean
//! predicate over the match subject by [`Pattern::create_predicate`].

use crate::{BinaryOp, Expr, ExprKind, Literal, Name, Span, TypeExpr};

/// Test applied to a match subject.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Pattern {
    /// Matches when the subject equals the literal.
    Literal { value: Literal, span: Span },
    /// Matches when the subject's runtime value inhabits the type.
    Type { ty: TypeExpr },
}

impl Pattern {
    pub fn span(&self) -> Span {
        match self {
            Pattern::Literal { span, .. } => *span,
            Pattern::Type { ty } => ty.span(),
        }
    }

    /// Build the boolean predicate testing `subject` against this pattern.
    ///
    /// `subject` is cloned into the predicate; callers pass a reference to
    /// the hidden subject binding, never the scrutinee expression itself, so
    /// the scrutinee is still evaluated once.
    pub fn create_predicate(self, subject: &Expr) -> Expr {
        match self {
            Pattern::Literal { value, span } => Expr::new(
                ExprKind::Binary {
                    op: BinaryOp::Eq,
                    left: Box::new(subject.clone()),
                    right: Box::new(Expr::literal(value, span)),
                },
                span,
            ),
            Pattern::Type { ty } => {
                let span = ty.span();
                Expr::new(
                    ExprKind::Is {
                        value: Box::new(subject.clone()),
                        ty,
                    },
                    span,
                )
            }
        }
    }
}

/// One `case` arm: optional binding, pattern, body.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct MatchCase {
    /// Name bound to the subject inside the body.
    pub binding: Option<Name>,
    pub pattern: Pattern,
    pub body: Expr,
    /// From `case` through the end of the body.
    pub span: Span,
}

impl MatchCase {
    pub fn new(binding: Option<Name>, pattern: Pattern, body: Expr, span: Span) -> Self {
        MatchCase {
            binding,
            pattern,
            body,
            span,
        }
    }
}
