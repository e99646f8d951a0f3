//! Function call evaluation.

use pica_ir::{Expr, Span};
use smallvec::SmallVec;

use super::{Interpreter, MAX_CALL_DEPTH};
use crate::environment::Mutability;
use crate::value::{Builtin, FunctionValue};
use crate::{EvalError, EvalResult, Value};

/// Evaluated call arguments; most calls take only a few.
type Args = SmallVec<[Value; 4]>;

fn check_arg_count(expected: usize, found: usize, span: Span) -> Result<(), EvalError> {
    if expected == found {
        Ok(())
    } else {
        Err(EvalError::ArityMismatch {
            expected,
            found,
            span,
        })
    }
}

impl Interpreter<'_> {
    /// Evaluate `func(args)`: the callee first, then arguments left to right.
    pub(super) fn eval_call(&mut self, func: &Expr, args: &[Expr], span: Span) -> EvalResult {
        let callee = self.eval(func)?;
        let args = args
            .iter()
            .map(|arg| self.eval(arg))
            .collect::<Result<Args, _>>()?;

        match callee {
            Value::Function(function) => self.call_function(&function, args, span),
            Value::Builtin(builtin) => self.call_builtin(builtin, &args, span),
            other => Err(EvalError::NotCallable {
                type_name: other.type_name(),
                span: func.span,
            }),
        }
    }

    /// Run a closure body in a child of its captured scope.
    ///
    /// The caller's environment is swapped out for the duration of the call
    /// and restored afterwards, also when the body fails.
    #[tracing::instrument(level = "trace", skip_all, fields(arity = args.len()))]
    fn call_function(&mut self, function: &FunctionValue, args: Args, span: Span) -> EvalResult {
        check_arg_count(function.params.len(), args.len(), span)?;
        if self.call_depth >= MAX_CALL_DEPTH {
            return Err(EvalError::RecursionLimit {
                limit: MAX_CALL_DEPTH,
                span,
            });
        }

        let frame = self.env.call_frame(function.captured.clone());
        let caller = std::mem::replace(&mut self.env, frame);
        for (param, arg) in function.params.iter().zip(args) {
            self.env.define(*param, arg, Mutability::Mutable);
        }

        self.call_depth += 1;
        let result = self.eval(&function.body);
        self.call_depth -= 1;
        self.env = caller;
        result
    }

    fn call_builtin(&self, builtin: Builtin, args: &[Value], span: Span) -> EvalResult {
        check_arg_count(builtin.arity(), args.len(), span)?;
        match (builtin, args) {
            (Builtin::Print, [value]) => {
                self.print.println(&value.display_value());
                Ok(Value::Nothing)
            }
            (Builtin::Print, _) => Err(EvalError::ArityMismatch {
                expected: 1,
                found: args.len(),
                span,
            }),
        }
    }
}
