//! Pica Eval: tree-walking evaluator for desugared Pica expressions.
//!
//! - [`Interpreter`] walks an [`Expr`](pica_ir::Expr) with a scope-stack
//!   [`Environment`].
//! - [`evaluate_binary`] / [`evaluate_unary`] implement the operators.
//! - [`matches_type`] implements `value is Type`, which is also what
//!   desugared type patterns test.
//! - [`Value::equals`] is the equality used by `==` and literal patterns.

mod environment;
mod errors;
mod interpreter;
mod operators;
mod print_handler;
mod value;

pub use environment::{AssignError, Environment, LocalScope, Mutability, Scope};
pub use errors::{EvalError, EvalResult};
pub use interpreter::{Interpreter, MAX_CALL_DEPTH};
pub use operators::{evaluate_binary, evaluate_unary};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, PrintHandler, SharedPrintHandler,
};
pub use type_test::matches_type;
pub use value::{Builtin, FunctionValue, Value};
