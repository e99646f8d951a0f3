use pretty_assertions::assert_eq;

use super::*;

const SPAN: Span = Span::new(0, 5);

fn binary(left: Value, op: BinaryOp, right: Value) -> EvalResult {
    evaluate_binary(&left, &right, op, SPAN)
}

#[test]
fn integer_arithmetic() {
    assert_eq!(binary(Value::Int(2), BinaryOp::Add, Value::Int(3)), Ok(Value::Int(5)));
    assert_eq!(binary(Value::Int(2), BinaryOp::Sub, Value::Int(3)), Ok(Value::Int(-1)));
    assert_eq!(binary(Value::Int(4), BinaryOp::Mul, Value::Int(3)), Ok(Value::Int(12)));
    assert_eq!(binary(Value::Int(7), BinaryOp::Div, Value::Int(2)), Ok(Value::Int(3)));
}

#[test]
fn division_by_zero_is_an_error() {
    assert_eq!(
        binary(Value::Int(1), BinaryOp::Div, Value::Int(0)),
        Err(EvalError::DivisionByZero { span: SPAN })
    );
}

#[test]
fn overflow_is_an_error() {
    assert_eq!(
        binary(Value::Int(i64::MAX), BinaryOp::Add, Value::Int(1)),
        Err(EvalError::IntegerOverflow { op: "+", span: SPAN })
    );
    assert_eq!(
        binary(Value::Int(i64::MIN), BinaryOp::Div, Value::Int(-1)),
        Err(EvalError::IntegerOverflow { op: "/", span: SPAN })
    );
    assert_eq!(
        evaluate_unary(UnaryOp::Neg, &Value::Int(i64::MIN), SPAN),
        Err(EvalError::IntegerOverflow { op: "-", span: SPAN })
    );
}

#[test]
fn equality_never_fails_across_kinds() {
    assert_eq!(binary(Value::Int(1), BinaryOp::Eq, Value::string("1")), Ok(Value::Bool(false)));
    assert_eq!(binary(Value::Nothing, BinaryOp::NotEq, Value::Bool(false)), Ok(Value::Bool(true)));
}

#[test]
fn strings_concatenate_and_compare() {
    assert_eq!(
        binary(Value::string("ab"), BinaryOp::Add, Value::string("cd")),
        Ok(Value::string("abcd"))
    );
    assert_eq!(
        binary(Value::string("ab"), BinaryOp::Lt, Value::string("b")),
        Ok(Value::Bool(true))
    );
}

#[test]
fn mixed_operands_are_rejected() {
    assert_eq!(
        binary(Value::Int(1), BinaryOp::Add, Value::Bool(true)),
        Err(EvalError::OperandMismatch {
            op: "+",
            left: "Int",
            right: "Bool",
            span: SPAN,
        })
    );
    assert_eq!(
        binary(Value::Bool(true), BinaryOp::Lt, Value::Bool(false)),
        Err(EvalError::OperandMismatch {
            op: "<",
            left: "Bool",
            right: "Bool",
            span: SPAN,
        })
    );
}

#[test]
fn unary_operators() {
    assert_eq!(evaluate_unary(UnaryOp::Not, &Value::Bool(true), SPAN), Ok(Value::Bool(false)));
    assert_eq!(evaluate_unary(UnaryOp::Neg, &Value::Int(4), SPAN), Ok(Value::Int(-4)));
    assert_eq!(
        evaluate_unary(UnaryOp::Not, &Value::Int(4), SPAN),
        Err(EvalError::InvalidOperand {
            op: "not",
            operand: "Int",
            span: SPAN,
        })
    );
}
