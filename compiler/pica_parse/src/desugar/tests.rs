use pica_ir::{BinaryOp, Literal, LocalId, Pattern, StringInterner, TypeExpr};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;

fn subject() -> Expr {
    Expr::local(LocalId::new(0), Span::new(6, 7))
}

fn int(n: i64, at: u32) -> Expr {
    Expr::literal(Literal::Int(n), Span::new(at, at + 1))
}

fn literal_case(value: i64, body: i64, at: u32) -> MatchCase {
    MatchCase::new(
        None,
        Pattern::Literal {
            value: Literal::Int(value),
            span: Span::new(at + 5, at + 6),
        },
        int(body, at + 12),
        Span::new(at, at + 13),
    )
}

/// Walk an `If` chain, collecting the literal each condition compares
/// against, and return the final else branch.
fn chain_literals(mut expr: &Expr) -> (Vec<i64>, &Expr) {
    let mut seen = Vec::new();
    while let ExprKind::If {
        cond, else_branch, ..
    } = &expr.kind
    {
        if let ExprKind::Binary { right, .. } = &cond.kind {
            if let ExprKind::Literal(Literal::Int(n)) = right.kind {
                seen.push(n);
            }
        }
        expr = &**else_branch;
    }
    (seen, expr)
}

#[test]
fn no_cases_yields_default_else() {
    let span = Span::new(0, 20);
    let result = desugar_cases(&subject(), Vec::new(), None, span);
    assert_eq!(result, Expr::nothing(span));
}

#[test]
fn no_cases_yields_explicit_else() {
    let result = desugar_cases(&subject(), Vec::new(), Some(int(9, 3)), Span::new(0, 20));
    assert_eq!(result, int(9, 3));
}

#[test]
fn single_case_builds_one_conditional() {
    let case = literal_case(1, 10, 8);
    let result = desugar_cases(&subject(), vec![case], None, Span::new(0, 30));

    let expected = Expr::new(
        ExprKind::If {
            cond: Box::new(Expr::new(
                ExprKind::Binary {
                    op: BinaryOp::Eq,
                    left: Box::new(subject()),
                    right: Box::new(Expr::literal(Literal::Int(1), Span::new(13, 14))),
                },
                Span::new(13, 14),
            )),
            then_branch: Box::new(int(10, 20)),
            else_branch: Box::new(Expr::nothing(Span::new(0, 30))),
        },
        Span::new(8, 21),
    );
    assert_eq!(result, expected);
}

#[test]
fn first_case_is_outermost() {
    let cases = vec![literal_case(1, 10, 8), literal_case(2, 20, 22), literal_case(3, 30, 36)];
    let result = desugar_cases(&subject(), cases, Some(int(0, 50)), Span::new(0, 55));

    let (order, otherwise) = chain_literals(&result);
    assert_eq!(order, vec![1, 2, 3]);
    assert_eq!(otherwise, &int(0, 50));
}

#[test]
fn binding_wraps_body_in_scoped_block() {
    let interner = StringInterner::new();
    let a = interner.intern("a");
    let int_ty = TypeExpr::Named {
        name: interner.intern("Int"),
        span: Span::new(15, 18),
    };
    let body = Expr::new(ExprKind::Ident(a), Span::new(24, 25));
    let case = MatchCase::new(
        Some(a),
        Pattern::Type { ty: int_ty.clone() },
        body.clone(),
        Span::new(8, 25),
    );

    let result = desugar_cases(&subject(), vec![case], None, Span::new(0, 40));

    let ExprKind::If {
        cond, then_branch, ..
    } = result.kind
    else {
        panic!("expected conditional");
    };
    assert_eq!(
        cond.kind,
        ExprKind::Is {
            value: Box::new(subject()),
            ty: int_ty,
        }
    );
    assert_eq!(
        then_branch.kind,
        ExprKind::Block(vec![
            Expr::new(
                ExprKind::Let {
                    binder: Binder::Named(a),
                    value: Box::new(subject()),
                },
                Span::new(8, 25),
            ),
            body,
        ])
    );
}

proptest! {
    #[test]
    fn desugaring_is_deterministic(values in prop::collection::vec(any::<i64>(), 0..12), with_else in any::<bool>()) {
        let build = || {
            let cases = values
                .iter()
                .enumerate()
                .map(|(i, v)| literal_case(*v, i as i64, 10 + 14 * i as u32))
                .collect::<Vec<_>>();
            let otherwise = with_else.then(|| int(-1, 500));
            desugar_cases(&subject(), cases, otherwise, Span::new(0, 600))
        };

        prop_assert_eq!(build(), build());
    }

    #[test]
    fn chain_preserves_source_order(values in prop::collection::vec(any::<i64>(), 0..12)) {
        let cases = values
            .iter()
            .enumerate()
            .map(|(i, v)| literal_case(*v, 0, 10 + 14 * i as u32))
            .collect::<Vec<_>>();
        let result = desugar_cases(&subject(), cases, None, Span::new(0, 600));

        let (order, otherwise) = chain_literals(&result);
        prop_assert_eq!(order, values);
        prop_assert_eq!(otherwise, &Expr::nothing(Span::new(0, 600)));
    }
}
