//! Grammar productions, one module per construct family.

mod block;
mod expr;
mod matching;
mod ty;

pub use block::BlockOptions;
