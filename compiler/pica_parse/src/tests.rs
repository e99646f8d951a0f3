use pica_diagnostic::ErrorCode;
use pica_ir::{
    BinaryOp, Binder, Expr, ExprKind, Literal, LocalId, Pattern, Span, StringInterner, TypeExpr,
};
use pica_lexer::lex;
use pretty_assertions::assert_eq;

use crate::{parse, ErrorContext, ParseError, Parser};

fn parse_source(source: &str, interner: &StringInterner) -> Result<Expr, ParseError> {
    parse(&lex(source, interner), interner)
}

/// Parse a single-expression module and return that expression.
fn parse_one(source: &str, interner: &StringInterner) -> Expr {
    let module = match parse_source(source, interner) {
        Ok(module) => module,
        Err(err) => panic!("unexpected parse error: {err}"),
    };
    match module.kind {
        ExprKind::Block(mut exprs) if exprs.len() == 1 => exprs.remove(0),
        other => panic!("expected one expression, got {other:?}"),
    }
}

fn parse_err(source: &str) -> ParseError {
    let interner = StringInterner::new();
    match parse_source(source, &interner) {
        Ok(expr) => panic!("expected parse error, got {expr:?}"),
        Err(err) => err,
    }
}

// Pattern parsing

#[test]
fn literal_pattern_has_priority_over_type() {
    let interner = StringInterner::new();
    let tokens = lex("1 then", &interner);
    let mut parser = Parser::new(&tokens, &interner);

    let pattern = parser.parse_case_pattern();
    assert_eq!(
        pattern,
        Ok(Pattern::Literal {
            value: Literal::Int(1),
            span: Span::new(0, 1),
        })
    );
    assert_eq!(parser.position(), 1);
}

#[test]
fn each_literal_kind_is_a_literal_pattern() {
    let interner = StringInterner::new();
    let tokens = lex(r#"true false "s""#, &interner);
    let mut parser = Parser::new(&tokens, &interner);

    let s = interner.intern("s");
    let values: Vec<_> = (0..3)
        .filter_map(|_| match parser.parse_case_pattern() {
            Ok(Pattern::Literal { value, .. }) => Some(value),
            _ => None,
        })
        .collect();
    assert_eq!(
        values,
        vec![Literal::Bool(true), Literal::Bool(false), Literal::Str(s)]
    );
}

#[test]
fn type_pattern_accepts_literal_members_after_a_name() {
    let interner = StringInterner::new();
    let tokens = lex("Int | 2 then", &interner);
    let mut parser = Parser::new(&tokens, &interner);

    let pattern = parser.parse_case_pattern();
    let expected_ty = TypeExpr::Union {
        members: vec![
            TypeExpr::Named {
                name: interner.intern("Int"),
                span: Span::new(0, 3),
            },
            TypeExpr::Literal {
                value: Literal::Int(2),
                span: Span::new(6, 7),
            },
        ],
        span: Span::new(0, 7),
    };
    assert_eq!(pattern, Ok(Pattern::Type { ty: expected_ty }));
}

#[test]
fn literal_followed_by_union_is_rejected() {
    let err = parse_err("match x\ncase 1 | 2 then 3\nend");
    assert_eq!(err.code, ErrorCode::E1001);
    assert_eq!(err.message, "expected `then`, found `|`");
    assert_eq!(err.span, Span::new(15, 16));
    assert_eq!(err.while_parsing, Some(ErrorContext::MatchCase));
}

#[test]
fn negative_integer_is_a_literal_pattern() {
    let interner = StringInterner::new();
    let tokens = lex("-12 then", &interner);
    let mut parser = Parser::new(&tokens, &interner);

    assert_eq!(
        parser.parse_case_pattern(),
        Ok(Pattern::Literal {
            value: Literal::Int(-12),
            span: Span::new(0, 3),
        })
    );
    assert_eq!(parser.position(), 2);
}

#[test]
fn negative_integer_is_a_singleton_type() {
    let interner = StringInterner::new();
    let tokens = lex("(-1 | 0)", &interner);
    let mut parser = Parser::new(&tokens, &interner);

    let expected = TypeExpr::Union {
        members: vec![
            TypeExpr::Literal {
                value: Literal::Int(-1),
                span: Span::new(1, 3),
            },
            TypeExpr::Literal {
                value: Literal::Int(0),
                span: Span::new(6, 7),
            },
        ],
        span: Span::new(0, 8),
    };
    assert_eq!(parser.parse_type_expr(), Ok(expected));
}

#[test]
fn minus_without_integer_is_not_a_pattern() {
    let err = parse_err("match x\ncase - Int then 1\nend");
    assert_eq!(err.code, ErrorCode::E1005);
    assert_eq!(err.message, "expected type, found `-`");
    assert_eq!(err.span, Span::new(13, 14));
}

#[test]
fn parenthesized_type_span_covers_parentheses() {
    let interner = StringInterner::new();
    let tokens = lex("(Int) => ((Bool))", &interner);
    let mut parser = Parser::new(&tokens, &interner);

    let Ok(TypeExpr::Function { param, ret, span }) = parser.parse_type_expr() else {
        panic!("expected function type");
    };
    assert_eq!(param.span(), Span::new(0, 5));
    assert_eq!(ret.span(), Span::new(9, 17));
    assert_eq!(span, Span::new(0, 17));
    assert!(matches!(*ret, TypeExpr::Named { .. }));
}

#[test]
fn type_expression_forms() {
    let interner = StringInterner::new();
    let tokens = lex("(Int, String) => () | Bool", &interner);
    let mut parser = Parser::new(&tokens, &interner);

    let ty = parser.parse_type_expr();
    let Ok(TypeExpr::Function { param, ret, span }) = ty else {
        panic!("expected function type");
    };
    assert_eq!(span, Span::new(0, 26));
    assert_eq!(param.param_arity(), 2);
    let TypeExpr::Union { members, .. } = *ret else {
        panic!("expected union return type");
    };
    assert_eq!(members[0], TypeExpr::Unit { span: Span::new(17, 19) });
}

#[test]
fn function_types_are_right_associative() {
    let interner = StringInterner::new();
    let tokens = lex("A => B => C", &interner);
    let mut parser = Parser::new(&tokens, &interner);

    let Ok(TypeExpr::Function { param, ret, .. }) = parser.parse_type_expr() else {
        panic!("expected function type");
    };
    assert!(matches!(*param, TypeExpr::Named { .. }));
    assert!(matches!(*ret, TypeExpr::Function { .. }));
}

#[test]
fn invalid_pattern_reports_expected_type() {
    let err = parse_err("match x\ncase + then 1\nend");
    assert_eq!(err.code, ErrorCode::E1005);
    assert_eq!(err.message, "expected type, found `+`");
    assert_eq!(err.while_parsing, Some(ErrorContext::TypeExpression));
}

// Case bindings

#[test]
fn lowercase_identifier_is_a_binding() {
    let interner = StringInterner::new();
    let tokens = lex("value Int", &interner);
    let mut parser = Parser::new(&tokens, &interner);

    assert_eq!(parser.parse_case_binding(), Some(interner.intern("value")));
    assert_eq!(parser.position(), 1);
}

#[test]
fn rejected_binding_leaves_cursor_unchanged() {
    let interner = StringInterner::new();
    for source in ["Int then", "1 then", "_x then", "\"a\" then", "(Int) then"] {
        let tokens = lex(source, &interner);
        let mut parser = Parser::new(&tokens, &interner);

        assert_eq!(parser.parse_case_binding(), None, "source: {source}");
        assert_eq!(parser.position(), 0, "source: {source}");
    }
}

// Match expressions

#[test]
fn match_binds_subject_once_then_tests_hidden_local() {
    let interner = StringInterner::new();
    let expr = parse_one("match x\ncase 1 then 2\nend", &interner);
    let x = interner.intern("x");

    let ExprKind::Block(items) = expr.kind else {
        panic!("expected block");
    };
    assert_eq!(expr.span, Span::new(0, 25));
    assert_eq!(items.len(), 2);
    assert_eq!(
        items[0].kind,
        ExprKind::Let {
            binder: Binder::Hidden(LocalId::new(0)),
            value: Box::new(Expr::new(ExprKind::Ident(x), Span::new(6, 7))),
        }
    );

    let ExprKind::If {
        cond, else_branch, ..
    } = &items[1].kind
    else {
        panic!("expected conditional");
    };
    let ExprKind::Binary { op, left, .. } = &cond.kind else {
        panic!("expected equality test");
    };
    assert_eq!(*op, BinaryOp::Eq);
    assert_eq!(left.kind, ExprKind::Local(LocalId::new(0)));
    assert_eq!(else_branch.kind, ExprKind::Nothing);
}

#[test]
fn match_without_cases_is_legal() {
    let interner = StringInterner::new();
    let expr = parse_one("match 1\nend", &interner);
    let ExprKind::Block(items) = expr.kind else {
        panic!("expected block");
    };
    assert_eq!(items[1].kind, ExprKind::Nothing);
}

#[test]
fn default_else_matches_explicit_nothing() {
    let interner = StringInterner::new();
    let implicit = parse_one("match x\ncase 1 then 2\nend", &interner);
    let explicit = parse_one("match x\ncase 1 then 2\nelse nothing\nend", &interner);

    let chain_else = |expr: Expr| match expr.kind {
        ExprKind::Block(mut items) => match items.remove(1).kind {
            ExprKind::If { else_branch, .. } => else_branch.kind,
            other => other,
        },
        other => other,
    };
    assert_eq!(chain_else(implicit), chain_else(explicit));
}

#[test]
fn nested_matches_get_distinct_locals() {
    let interner = StringInterner::new();
    let source = "match x\ncase Int then match y\n  case 1 then 2\n  end\nend";
    let expr = parse_one(source, &interner);

    let mut hidden = Vec::new();
    collect_hidden(&expr, &mut hidden);
    assert_eq!(hidden, vec![LocalId::new(0), LocalId::new(1)]);
}

fn collect_hidden(expr: &Expr, out: &mut Vec<LocalId>) {
    match &expr.kind {
        ExprKind::Let { binder, value } => {
            if let Binder::Hidden(id) = binder {
                out.push(*id);
            }
            collect_hidden(value, out);
        }
        ExprKind::Block(items) => items.iter().for_each(|e| collect_hidden(e, out)),
        ExprKind::If {
            cond,
            then_branch,
            else_branch,
        } => {
            collect_hidden(cond, out);
            collect_hidden(then_branch, out);
            collect_hidden(else_branch, out);
        }
        _ => {}
    }
}

#[test]
fn multi_line_case_bodies() {
    let interner = StringInterner::new();
    let source = "match n\ncase 1 then\n  var a = 1\n  a + 1\ncase 2 then 3\nelse\n  4\nend";
    let expr = parse_one(source, &interner);

    let ExprKind::Block(items) = expr.kind else {
        panic!("expected block");
    };
    let ExprKind::If {
        then_branch,
        else_branch,
        ..
    } = &items[1].kind
    else {
        panic!("expected conditional");
    };
    assert!(matches!(&then_branch.kind, ExprKind::Block(body) if body.len() == 2));
    assert!(matches!(else_branch.kind, ExprKind::If { .. }));
}

#[test]
fn missing_end_fails_at_end_of_file() {
    let source = "match x\ncase 1 then 2\n";
    let err = parse_err(source);

    assert_eq!(err.code, ErrorCode::E1003);
    assert_eq!(err.message, "expected `end`, found end of file");
    assert_eq!(err.span, Span::point(22));
    assert_eq!(err.context.as_deref(), Some("expected `end` to close `match`"));
    assert_eq!(err.while_parsing, Some(ErrorContext::MatchExpression));
    assert_eq!(
        err.related,
        Some((Span::new(0, 5), "`match` opened here".to_string()))
    );
}

#[test]
fn unclosed_do_points_at_its_opener() {
    let err = parse_err("1\ndo 2");
    assert_eq!(err.code, ErrorCode::E1003);
    assert_eq!(
        err.related,
        Some((Span::new(2, 4), "`do` opened here".to_string()))
    );
}

#[test]
fn missing_newline_after_subject() {
    let err = parse_err("match x case 1 then 2 end");
    assert_eq!(err.code, ErrorCode::E1001);
    assert_eq!(err.message, "expected newline, found `case`");
    assert_eq!(err.span, Span::new(8, 12));
}

#[test]
fn missing_then() {
    let err = parse_err("match x\ncase 1 2\nend");
    assert_eq!(err.message, "expected `then`, found integer");
    assert_eq!(err.span, Span::new(15, 16));
}

#[test]
fn missing_subject() {
    let err = parse_err("match\ncase 1 then 2\nend");
    assert_eq!(err.code, ErrorCode::E1002);
    assert_eq!(err.message, "expected expression, found newline");
}

#[test]
fn lex_errors_surface_through_parser() {
    let err = parse_err("match \"open\ncase 1 then 2\nend");
    assert_eq!(err.code, ErrorCode::E0001);

    let err = parse_err("1 + @");
    assert_eq!(err.code, ErrorCode::E0002);
}

#[test]
fn parsing_is_deterministic() {
    let interner = StringInterner::new();
    let source = "match f(1)\ncase a Int | String then a\ncase true then 0\nelse -1\nend";
    assert_eq!(parse_source(source, &interner), parse_source(source, &interner));
}

// General expressions

#[test]
fn precedence_of_arithmetic() {
    let interner = StringInterner::new();
    let expr = parse_one("1 + 2 * 3", &interner);
    let ExprKind::Binary { op, right, .. } = expr.kind else {
        panic!("expected binary");
    };
    assert_eq!(op, BinaryOp::Add);
    assert!(matches!(
        right.kind,
        ExprKind::Binary {
            op: BinaryOp::Mul,
            ..
        }
    ));
}

#[test]
fn is_binds_looser_than_equality() {
    let interner = StringInterner::new();
    let expr = parse_one("not x is Int and y", &interner);
    let ExprKind::Binary { op, left, .. } = expr.kind else {
        panic!("expected binary");
    };
    assert_eq!(op, BinaryOp::And);
    let ExprKind::Unary { operand, .. } = left.kind else {
        panic!("expected unary");
    };
    assert!(matches!(operand.kind, ExprKind::Is { .. }));
}

#[test]
fn var_and_assignment() {
    let interner = StringInterner::new();
    let module = parse_source("var n = 1\nn = n + 1", &interner);
    let Ok(Expr {
        kind: ExprKind::Block(items),
        ..
    }) = module
    else {
        panic!("expected module block");
    };
    let n = interner.intern("n");
    assert!(matches!(items[0].kind, ExprKind::Let { binder: Binder::Named(b), .. } if b == n));
    assert!(matches!(items[1].kind, ExprKind::Assign { name, .. } if name == n));
}

#[test]
fn if_without_else_is_nothing() {
    let interner = StringInterner::new();
    let expr = parse_one("if c then 1 end", &interner);
    let ExprKind::If { else_branch, .. } = expr.kind else {
        panic!("expected if");
    };
    assert_eq!(else_branch.kind, ExprKind::Nothing);
}

#[test]
fn tuples_units_and_grouping() {
    let interner = StringInterner::new();
    assert!(matches!(parse_one("(1, 2, 3)", &interner).kind, ExprKind::Tuple(ref e) if e.len() == 3));
    assert_eq!(parse_one("()", &interner).kind, ExprKind::Nothing);
    assert_eq!(
        parse_one("(7)", &interner).kind,
        ExprKind::Literal(Literal::Int(7))
    );
}

#[test]
fn lambdas_and_calls() {
    let interner = StringInterner::new();
    let expr = parse_one("fn (a, b) a + b", &interner);
    assert!(matches!(expr.kind, ExprKind::Lambda { ref params, .. } if params.len() == 2));

    let expr = parse_one("f(1)(2, 3)", &interner);
    let ExprKind::Call { func, args } = expr.kind else {
        panic!("expected call");
    };
    assert_eq!(args.len(), 2);
    assert!(matches!(func.kind, ExprKind::Call { .. }));
}

#[test]
fn do_block_always_opens_scope() {
    let interner = StringInterner::new();
    let expr = parse_one("do 1 end", &interner);
    assert!(matches!(expr.kind, ExprKind::Block(ref items) if items.len() == 1));

    let expr = parse_one("do\nend", &interner);
    assert_eq!(expr.kind, ExprKind::Block(Vec::new()));
}

#[test]
fn empty_module_is_nothing() {
    let interner = StringInterner::new();
    let module = parse_source("\n// nothing here\n", &interner);
    assert!(matches!(module, Ok(Expr { kind: ExprKind::Nothing, .. })));
}

#[test]
fn expressions_must_be_separated_by_newlines() {
    let err = parse_err("1 2");
    assert_eq!(err.message, "expected newline, found integer");
    assert_eq!(err.while_parsing, Some(ErrorContext::Module));
}
