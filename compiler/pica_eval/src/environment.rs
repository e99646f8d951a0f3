//! Variable scopes for the interpreter.
//!
//! A stack of scopes, each linked to its parent. Closures hold on to the
//! scope they were created in, so a function body sees bindings added to
//! that scope after the closure was made. This is what lets
//! `var f = fn (n) ... f(n - 1) ...` recurse.
//!
//! Hidden bindings introduced by `match` desugaring live in a separate map
//! keyed by [`LocalId`]; they follow the same block scoping as named ones.

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use pica_ir::{LocalId, Name};
use rustc_hash::FxHashMap;

use crate::Value;

/// Whether a variable binding can be reassigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mutability {
    /// `var` bindings, parameters, case bindings.
    Mutable,
    /// Builtins.
    Immutable,
}

impl Mutability {
    #[inline]
    pub fn is_mutable(self) -> bool {
        matches!(self, Mutability::Mutable)
    }
}

/// Why an assignment failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssignError {
    /// Variable exists but is immutable.
    Immutable,
    /// Variable not found in any scope.
    Undefined,
}

/// Single-threaded shared scope handle.
#[derive(Debug)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn borrow(&self) -> Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.0.borrow_mut()
    }
}

impl<T> Clone for LocalScope<T> {
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

#[derive(Clone, Debug)]
struct Binding {
    value: Value,
    mutability: Mutability,
}

/// A single scope.
#[derive(Debug, Default)]
pub struct Scope {
    bindings: FxHashMap<Name, Binding>,
    locals: FxHashMap<LocalId, Value>,
    parent: Option<LocalScope<Scope>>,
}

impl Scope {
    pub fn new() -> Self {
        Scope::default()
    }

    pub fn with_parent(parent: LocalScope<Scope>) -> Self {
        Scope {
            parent: Some(parent),
            ..Scope::default()
        }
    }

    /// Define (or shadow) a variable in this scope.
    #[inline]
    pub fn define(&mut self, name: Name, value: Value, mutability: Mutability) {
        self.bindings.insert(name, Binding { value, mutability });
    }

    #[inline]
    pub fn define_local(&mut self, id: LocalId, value: Value) {
        self.locals.insert(id, value);
    }

    pub fn lookup(&self, name: Name) -> Option<Value> {
        if let Some(binding) = self.bindings.get(&name) {
            return Some(binding.value.clone());
        }
        self.parent.as_ref()?.borrow().lookup(name)
    }

    pub fn lookup_local(&self, id: LocalId) -> Option<Value> {
        if let Some(value) = self.locals.get(&id) {
            return Some(value.clone());
        }
        self.parent.as_ref()?.borrow().lookup_local(id)
    }

    /// Reassign the nearest binding of `name`.
    pub fn assign(&mut self, name: Name, value: Value) -> Result<(), AssignError> {
        if let Some(binding) = self.bindings.get_mut(&name) {
            if !binding.mutability.is_mutable() {
                return Err(AssignError::Immutable);
            }
            binding.value = value;
            return Ok(());
        }
        match &self.parent {
            Some(parent) => parent.borrow_mut().assign(name, value),
            None => Err(AssignError::Undefined),
        }
    }
}

/// Environment for the interpreter: a stack of scopes over a global scope.
pub struct Environment {
    /// Current scope at the top.
    scopes: Vec<LocalScope<Scope>>,
    global: LocalScope<Scope>,
}

impl Environment {
    pub fn new() -> Self {
        let global = LocalScope::new(Scope::new());
        Environment {
            scopes: vec![global.clone()],
            global,
        }
    }

    /// Environment for a function call: one fresh scope whose parent is
    /// `captured`, sharing this environment's globals.
    #[must_use]
    pub fn call_frame(&self, captured: LocalScope<Scope>) -> Self {
        Environment {
            scopes: vec![LocalScope::new(Scope::with_parent(captured))],
            global: self.global.clone(),
        }
    }

    #[inline]
    pub fn push_scope(&mut self) {
        let parent = self.current_scope();
        self.scopes.push(LocalScope::new(Scope::with_parent(parent)));
    }

    /// Pop the current scope. The bottom scope is never popped.
    #[inline]
    pub fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// Handle to the current scope, for closures to capture.
    #[inline]
    pub fn current_scope(&self) -> LocalScope<Scope> {
        self.scopes.last().unwrap_or(&self.global).clone()
    }

    #[inline]
    fn top(&self) -> &LocalScope<Scope> {
        self.scopes.last().unwrap_or(&self.global)
    }

    pub fn define(&mut self, name: Name, value: Value, mutability: Mutability) {
        self.top().borrow_mut().define(name, value, mutability);
    }

    pub fn define_local(&mut self, id: LocalId, value: Value) {
        self.top().borrow_mut().define_local(id, value);
    }

    /// Define an immutable global.
    pub fn define_global(&mut self, name: Name, value: Value) {
        self.global
            .borrow_mut()
            .define(name, value, Mutability::Immutable);
    }

    pub fn lookup(&self, name: Name) -> Option<Value> {
        self.top().borrow().lookup(name)
    }

    pub fn lookup_local(&self, id: LocalId) -> Option<Value> {
        self.top().borrow().lookup_local(id)
    }

    pub fn assign(&mut self, name: Name, value: Value) -> Result<(), AssignError> {
        self.top().borrow_mut().assign(name, value)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
