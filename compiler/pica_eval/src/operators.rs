//! Binary and unary operator implementations.
//!
//! Direct enum dispatch on the operand pair. `and`/`or` short-circuit in the
//! interpreter; here they only see two already evaluated booleans.

use std::cmp::Ordering;

use pica_ir::{BinaryOp, Span, UnaryOp};

use crate::errors::{invalid_operand, operand_mismatch};
use crate::{EvalError, EvalResult, Value};

/// Checked integer arithmetic; `None` means overflow.
#[inline]
fn checked_arith(result: Option<i64>, op: BinaryOp, span: Span) -> EvalResult {
    result.map(Value::Int).ok_or(EvalError::IntegerOverflow {
        op: op.as_symbol(),
        span,
    })
}

/// Evaluate a binary operation on two evaluated operands.
pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp, span: Span) -> EvalResult {
    match op {
        BinaryOp::Eq => return Ok(Value::Bool(left.equals(right))),
        BinaryOp::NotEq => return Ok(Value::Bool(!left.equals(right))),
        _ => {}
    }

    match (left, right) {
        (Value::Int(a), Value::Int(b)) => eval_int_binary(*a, *b, op, span),
        (Value::Bool(a), Value::Bool(b)) => match op {
            BinaryOp::And => Ok(Value::Bool(*a && *b)),
            BinaryOp::Or => Ok(Value::Bool(*a || *b)),
            _ => Err(operand_mismatch(op.as_symbol(), left, right, span)),
        },
        (Value::Str(a), Value::Str(b)) => match op {
            BinaryOp::Add => {
                let mut joined = String::with_capacity(a.len() + b.len());
                joined.push_str(a);
                joined.push_str(b);
                Ok(Value::string(&joined))
            }
            _ => compare((**a).cmp(&**b), op)
                .ok_or_else(|| operand_mismatch(op.as_symbol(), left, right, span)),
        },
        _ => Err(operand_mismatch(op.as_symbol(), left, right, span)),
    }
}

fn eval_int_binary(a: i64, b: i64, op: BinaryOp, span: Span) -> EvalResult {
    match op {
        BinaryOp::Add => checked_arith(a.checked_add(b), op, span),
        BinaryOp::Sub => checked_arith(a.checked_sub(b), op, span),
        BinaryOp::Mul => checked_arith(a.checked_mul(b), op, span),
        BinaryOp::Div => {
            if b == 0 {
                Err(EvalError::DivisionByZero { span })
            } else {
                checked_arith(a.checked_div(b), op, span)
            }
        }
        _ => compare(a.cmp(&b), op).ok_or_else(|| {
            operand_mismatch(op.as_symbol(), &Value::Int(a), &Value::Int(b), span)
        }),
    }
}

/// Apply a comparison operator to an ordering. `None` if `op` is not a
/// comparison.
fn compare(ordering: Ordering, op: BinaryOp) -> Option<Value> {
    let result = match op {
        BinaryOp::Lt => ordering.is_lt(),
        BinaryOp::Gt => ordering.is_gt(),
        BinaryOp::LtEq => ordering.is_le(),
        BinaryOp::GtEq => ordering.is_ge(),
        _ => return None,
    };
    Some(Value::Bool(result))
}

/// Evaluate a unary operation.
pub fn evaluate_unary(op: UnaryOp, operand: &Value, span: Span) -> EvalResult {
    match (op, operand) {
        (UnaryOp::Not, Value::Bool(b)) => Ok(Value::Bool(!b)),
        (UnaryOp::Neg, Value::Int(n)) => n.checked_neg().map(Value::Int).ok_or(
            EvalError::IntegerOverflow {
                op: op.as_symbol(),
                span,
            },
        ),
        _ => Err(invalid_operand(op.as_symbol(), operand, span)),
    }
}

#[cfg(test)]
mod tests;
