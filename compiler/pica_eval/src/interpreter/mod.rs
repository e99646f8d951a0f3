//! Tree-walking interpreter.

mod function_call;

use std::rc::Rc;

use pica_ir::{BinaryOp, Binder, Expr, ExprKind, Name, StringInterner};
use pica_stack::ensure_sufficient_stack;

use crate::environment::{AssignError, Environment, Mutability};
use crate::errors::expected_bool;
use crate::operators::{evaluate_binary, evaluate_unary};
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::type_test::matches_type;
use crate::value::{Builtin, FunctionValue};
use crate::{EvalError, EvalResult, Value};

/// Maximum nesting of user function calls.
pub const MAX_CALL_DEPTH: usize = 10_000;

/// Evaluates expression trees produced by the parser.
pub struct Interpreter<'a> {
    interner: &'a StringInterner,
    env: Environment,
    print: SharedPrintHandler,
    call_depth: usize,
}

impl<'a> Interpreter<'a> {
    /// Create an interpreter that prints to stdout.
    pub fn new(interner: &'a StringInterner) -> Self {
        Self::with_print_handler(interner, stdout_handler())
    }

    pub fn with_print_handler(interner: &'a StringInterner, print: SharedPrintHandler) -> Self {
        let mut env = Environment::new();
        let builtin = Builtin::Print;
        env.define_global(interner.intern(builtin.name()), Value::Builtin(builtin));
        Interpreter {
            interner,
            env,
            print,
            call_depth: 0,
        }
    }

    /// Evaluate a parsed module.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn eval_module(&mut self, module: &Expr) -> EvalResult {
        let result = self.eval(module);
        if let Err(err) = &result {
            tracing::debug!(code = %err.code(), "evaluation failed");
        }
        result
    }

    /// Evaluate one expression in the current scope.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(expr))
    }

    fn eval_inner(&mut self, expr: &Expr) -> EvalResult {
        match &expr.kind {
            ExprKind::Literal(literal) => Ok(Value::from_literal(*literal, self.interner)),
            ExprKind::Nothing => Ok(Value::Nothing),
            ExprKind::Ident(name) => {
                self.env
                    .lookup(*name)
                    .ok_or_else(|| EvalError::UnknownIdentifier {
                        name: self.interner.lookup(*name).to_owned(),
                        span: expr.span,
                    })
            }
            ExprKind::Local(id) => self.env.lookup_local(*id).ok_or(EvalError::UnboundLocal {
                id: *id,
                span: expr.span,
            }),
            ExprKind::Tuple(items) => {
                let values = items
                    .iter()
                    .map(|item| self.eval(item))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Value::tuple(values))
            }
            ExprKind::Binary { op, left, right } => self.eval_binary(*op, left, right, expr),
            ExprKind::Unary { op, operand } => {
                let value = self.eval(operand)?;
                evaluate_unary(*op, &value, expr.span)
            }
            ExprKind::Is { value, ty } => {
                let value = self.eval(value)?;
                matches_type(&value, ty, self.interner).map(Value::Bool)
            }
            ExprKind::Let { binder, value } => {
                let value = self.eval(value)?;
                match binder {
                    Binder::Named(name) => {
                        self.env.define(*name, value.clone(), Mutability::Mutable);
                    }
                    Binder::Hidden(id) => self.env.define_local(*id, value.clone()),
                }
                Ok(value)
            }
            ExprKind::Assign { name, value } => {
                let value = self.eval(value)?;
                self.env
                    .assign(*name, value.clone())
                    .map_err(|err| self.assign_error(err, *name, expr))?;
                Ok(value)
            }
            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                if self.eval_condition(cond)? {
                    self.eval(then_branch)
                } else {
                    self.eval(else_branch)
                }
            }
            ExprKind::Block(exprs) => self.eval_block(exprs),
            ExprKind::Lambda { params, body } => Ok(Value::Function(Rc::new(FunctionValue {
                params: params.clone(),
                body: (**body).clone(),
                captured: self.env.current_scope(),
            }))),
            ExprKind::Call { func, args } => self.eval_call(func, args, expr.span),
        }
    }

    /// `and`/`or` evaluate their right operand only when the left one does
    /// not decide the result.
    fn eval_binary(
        &mut self,
        op: BinaryOp,
        left: &Expr,
        right: &Expr,
        expr: &Expr,
    ) -> EvalResult {
        match op {
            BinaryOp::And | BinaryOp::Or => {
                let lhs = self.eval_condition(left)?;
                if lhs == (op == BinaryOp::Or) {
                    return Ok(Value::Bool(lhs));
                }
                self.eval_condition(right).map(Value::Bool)
            }
            _ => {
                let lhs = self.eval(left)?;
                let rhs = self.eval(right)?;
                evaluate_binary(&lhs, &rhs, op, expr.span)
            }
        }
    }

    /// Evaluate an expression that must produce a `Bool`.
    fn eval_condition(&mut self, cond: &Expr) -> Result<bool, EvalError> {
        match self.eval(cond)? {
            Value::Bool(b) => Ok(b),
            other => Err(expected_bool(&other, cond.span)),
        }
    }

    /// Evaluate a sequence in a fresh scope.
    fn eval_block(&mut self, exprs: &[Expr]) -> EvalResult {
        self.with_scope(|interp| {
            let mut last = Value::Nothing;
            for expr in exprs {
                last = interp.eval(expr)?;
            }
            Ok(last)
        })
    }

    /// Run `f` inside a new scope, popping it whether or not `f` fails.
    fn with_scope<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        self.env.push_scope();
        let result = f(self);
        self.env.pop_scope();
        result
    }

    #[cold]
    fn assign_error(&self, err: AssignError, name: Name, expr: &Expr) -> EvalError {
        let name = self.interner.lookup(name).to_owned();
        match err {
            AssignError::Immutable => EvalError::ImmutableAssign {
                name,
                span: expr.span,
            },
            AssignError::Undefined => EvalError::UnknownIdentifier {
                name,
                span: expr.span,
            },
        }
    }
}
