//! Pica IR - shared front-end types.
//!
//! This crate contains the data structures every other Pica crate agrees on:
//! - Spans for source locations
//! - Names for interned identifiers
//! - Tokens and `TokenList` for lexer output
//! - The expression tree (`Expr`, `ExprKind`) the parser builds and the
//!   evaluator walks
//! - Type expressions and the match pattern model
//!
//! # Design Notes
//!
//! - Identifiers and string literals are interned (`Name(u32)`).
//! - The expression tree is owned: every node exclusively owns its children,
//!   so desugaring consumes the parsed tree and produces a new one.
//! - Hidden bindings introduced by the parser use `LocalId`, which can never
//!   collide with a user-written identifier.

mod ast;
mod interner;
mod name;
mod pattern;
mod span;
mod token;
mod ty;

pub use ast::{BinaryOp, Binder, Expr, ExprKind, Literal, LocalId, UnaryOp};
pub use interner::StringInterner;
pub use name::Name;
pub use pattern::{MatchCase, Pattern};
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind, TokenList};
pub use ty::TypeExpr;
