//! Runtime errors.

use pica_diagnostic::{Diagnostic, ErrorCode};
use pica_ir::{LocalId, Span};

use crate::Value;

/// Result of evaluating an expression.
pub type EvalResult = Result<Value, EvalError>;

/// An error raised while evaluating. Every variant carries the span of the
/// expression that failed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error("unknown identifier `{name}`")]
    UnknownIdentifier { name: String, span: Span },

    #[error("unknown type `{name}`")]
    UnknownType { name: String, span: Span },

    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
        span: Span,
    },

    #[error("cannot apply `{op}` to {left} and {right}")]
    OperandMismatch {
        op: &'static str,
        left: &'static str,
        right: &'static str,
        span: Span,
    },

    #[error("cannot apply `{op}` to {operand}")]
    InvalidOperand {
        op: &'static str,
        operand: &'static str,
        span: Span,
    },

    #[error("division by zero")]
    DivisionByZero { span: Span },

    #[error("integer overflow in `{op}`")]
    IntegerOverflow { op: &'static str, span: Span },

    #[error("expected {expected} argument(s), found {found}")]
    ArityMismatch {
        expected: usize,
        found: usize,
        span: Span,
    },

    #[error("value of type {type_name} is not a function")]
    NotCallable { type_name: &'static str, span: Span },

    #[error("cannot assign to immutable binding `{name}`")]
    ImmutableAssign { name: String, span: Span },

    #[error("call depth exceeded {limit}")]
    RecursionLimit { limit: usize, span: Span },

    #[error("hidden binding `{id}` read before it was bound")]
    UnboundLocal { id: LocalId, span: Span },
}

impl EvalError {
    pub fn span(&self) -> Span {
        match self {
            EvalError::UnknownIdentifier { span, .. }
            | EvalError::UnknownType { span, .. }
            | EvalError::TypeMismatch { span, .. }
            | EvalError::OperandMismatch { span, .. }
            | EvalError::InvalidOperand { span, .. }
            | EvalError::DivisionByZero { span }
            | EvalError::IntegerOverflow { span, .. }
            | EvalError::ArityMismatch { span, .. }
            | EvalError::NotCallable { span, .. }
            | EvalError::ImmutableAssign { span, .. }
            | EvalError::RecursionLimit { span, .. }
            | EvalError::UnboundLocal { span, .. } => *span,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            EvalError::UnknownIdentifier { .. } => ErrorCode::E4001,
            EvalError::UnknownType { .. } => ErrorCode::E4002,
            EvalError::TypeMismatch { .. }
            | EvalError::OperandMismatch { .. }
            | EvalError::InvalidOperand { .. } => ErrorCode::E4003,
            EvalError::DivisionByZero { .. } => ErrorCode::E4004,
            EvalError::ArityMismatch { .. } => ErrorCode::E4005,
            EvalError::NotCallable { .. } => ErrorCode::E4006,
            EvalError::IntegerOverflow { .. } => ErrorCode::E4007,
            EvalError::ImmutableAssign { .. } => ErrorCode::E4008,
            EvalError::RecursionLimit { .. } => ErrorCode::E4009,
            EvalError::UnboundLocal { .. } => ErrorCode::E9001,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code())
            .with_message(self.to_string())
            .with_label(self.span(), "here");

        match self {
            EvalError::UnknownType { .. } => diag.with_note(
                "built-in types are Int, Bool, String, Nothing, Tuple, Function and Any",
            ),
            EvalError::ImmutableAssign { name, .. } => {
                diag.with_suggestion(format!("bind a new variable with `var {name} = ...`"))
            }
            _ => diag,
        }
    }
}

// Constructors for the operator paths.

#[cold]
pub(crate) fn operand_mismatch(
    op: &'static str,
    left: &Value,
    right: &Value,
    span: Span,
) -> EvalError {
    EvalError::OperandMismatch {
        op,
        left: left.type_name(),
        right: right.type_name(),
        span,
    }
}

#[cold]
pub(crate) fn invalid_operand(op: &'static str, operand: &Value, span: Span) -> EvalError {
    EvalError::InvalidOperand {
        op,
        operand: operand.type_name(),
        span,
    }
}

#[cold]
pub(crate) fn expected_bool(found: &Value, span: Span) -> EvalError {
    EvalError::TypeMismatch {
        expected: "Bool",
        found: found.type_name(),
        span,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn codes_follow_variant() {
        let span = Span::new(3, 4);
        assert_eq!(EvalError::DivisionByZero { span }.code(), ErrorCode::E4004);
        assert_eq!(
            EvalError::UnknownType {
                name: "Integer".to_string(),
                span
            }
            .code(),
            ErrorCode::E4002
        );
        assert_eq!(
            EvalError::UnboundLocal {
                id: LocalId::new(0),
                span
            }
            .code(),
            ErrorCode::E9001
        );
    }

    #[test]
    fn diagnostic_carries_message_and_span() {
        let err = operand_mismatch("+", &Value::Int(1), &Value::Bool(true), Span::new(0, 8));
        assert_eq!(err.to_string(), "cannot apply `+` to Int and Bool");

        let diag = err.to_diagnostic();
        assert_eq!(diag.code, ErrorCode::E4003);
        assert_eq!(diag.message, "cannot apply `+` to Int and Bool");
        assert_eq!(diag.primary_span(), Some(Span::new(0, 8)));
    }

    #[test]
    fn unknown_type_lists_builtin_types() {
        let diag = EvalError::UnknownType {
            name: "Integer".to_string(),
            span: Span::new(0, 7),
        }
        .to_diagnostic();
        assert_eq!(diag.notes.len(), 1);
        assert!(diag.notes[0].contains("Int, Bool, String"));
    }
}
