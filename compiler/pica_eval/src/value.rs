//! Runtime values.

use std::fmt;
use std::rc::Rc;

use pica_ir::{Expr, Literal, Name, StringInterner};

use crate::environment::{LocalScope, Scope};

/// A Pica runtime value.
///
/// Cloning is cheap: strings, tuples and functions are reference counted.
#[derive(Clone, Debug)]
pub enum Value {
    Int(i64),
    Bool(bool),
    Str(Rc<str>),
    /// The unit value.
    Nothing,
    /// Always two or more elements.
    Tuple(Rc<[Value]>),
    Function(Rc<FunctionValue>),
    Builtin(Builtin),
}

/// A closure created by `fn (params) body`.
pub struct FunctionValue {
    pub params: Vec<Name>,
    pub body: Expr,
    /// Scope the closure was created in; calls run in a child of it.
    pub(crate) captured: LocalScope<Scope>,
}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// Functions provided by the interpreter itself.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Builtin {
    /// `print(value)`: writes the value and a newline, returns `nothing`.
    Print,
}

impl Builtin {
    pub fn name(self) -> &'static str {
        match self {
            Builtin::Print => "print",
        }
    }

    pub fn arity(self) -> usize {
        match self {
            Builtin::Print => 1,
        }
    }
}

impl Value {
    pub fn string(s: &str) -> Self {
        Value::Str(Rc::from(s))
    }

    pub fn tuple(items: Vec<Value>) -> Self {
        Value::Tuple(Rc::from(items))
    }

    /// The value a literal evaluates to.
    pub fn from_literal(literal: Literal, interner: &StringInterner) -> Self {
        match literal {
            Literal::Bool(b) => Value::Bool(b),
            Literal::Int(n) => Value::Int(n),
            Literal::Str(name) => Value::string(interner.lookup(name)),
        }
    }

    /// Name of the built-in type this value belongs to.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "Int",
            Value::Bool(_) => "Bool",
            Value::Str(_) => "String",
            Value::Nothing => "Nothing",
            Value::Tuple(_) => "Tuple",
            Value::Function(_) | Value::Builtin(_) => "Function",
        }
    }

    /// Parameter count, for values that can be called.
    pub fn arity(&self) -> Option<usize> {
        match self {
            Value::Function(func) => Some(func.params.len()),
            Value::Builtin(builtin) => Some(builtin.arity()),
            _ => None,
        }
    }

    /// Canonical equality: same kind and same value.
    ///
    /// Values of different kinds are never equal; `1 == "1"` is `false`,
    /// not an error. Functions are equal only to themselves.
    pub fn equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Nothing, Value::Nothing) => true,
            (Value::Tuple(a), Value::Tuple(b)) => {
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x.equals(y))
            }
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            (Value::Builtin(a), Value::Builtin(b)) => a == b,
            _ => false,
        }
    }

    /// Text written by `print`: like `Display`, but a top-level string is
    /// written without quotes.
    pub fn display_value(&self) -> String {
        match self {
            Value::Str(s) => s.to_string(),
            other => other.to_string(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Str(s) => write!(f, "{s:?}"),
            Value::Nothing => write!(f, "nothing"),
            Value::Tuple(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, ")")
            }
            Value::Function(func) => write!(f, "<fn/{}>", func.params.len()),
            Value::Builtin(builtin) => write!(f, "<builtin {}>", builtin.name()),
        }
    }
}

#[cfg(test)]
mod tests;
