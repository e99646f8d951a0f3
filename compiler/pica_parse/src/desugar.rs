//! Lowering of parsed match cases into conditionals.

use pica_ir::{Binder, Expr, ExprKind, MatchCase, Span};

/// Fold `cases` into a right-nested `If` chain.
///
/// The chain starts as `else_expr` (or `nothing` at `span` when absent) and
/// each case, last to first, wraps it as
/// `If(pattern predicate on subject, body, chain)`. The first case in source
/// order ends up outermost, so it is tested first and later predicates are
/// never evaluated once one holds. A case binding turns the body into
/// `Block[Let(binding, subject), body]`, scoping the name to that body.
///
/// `subject` must be a side-effect free reference to the already evaluated
/// subject; it is cloned into every predicate and binding.
pub fn desugar_cases(
    subject: &Expr,
    cases: Vec<MatchCase>,
    else_expr: Option<Expr>,
    span: Span,
) -> Expr {
    let otherwise = else_expr.unwrap_or_else(|| Expr::nothing(span));

    cases.into_iter().rev().fold(otherwise, |chain, case| {
        let MatchCase {
            binding,
            pattern,
            body,
            span,
        } = case;

        let cond = pattern.create_predicate(subject);
        let body = match binding {
            Some(name) => {
                let bind = Expr::new(
                    ExprKind::Let {
                        binder: Binder::Named(name),
                        value: Box::new(subject.clone()),
                    },
                    span,
                );
                let body_span = body.span;
                Expr::new(ExprKind::Block(vec![bind, body]), span.merge(body_span))
            }
            None => body,
        };

        Expr::new(
            ExprKind::If {
                cond: Box::new(cond),
                then_branch: Box::new(body),
                else_branch: Box::new(chain),
            },
            span,
        )
    })
}

#[cfg(test)]
mod tests;
