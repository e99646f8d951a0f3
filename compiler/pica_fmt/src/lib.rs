//! Pica Fmt: renders expression trees back into Pica surface syntax.
//!
//! The printer sees trees after `match` desugaring, so its output shows the
//! `if` chains and hidden `$n` bindings the evaluator actually runs. Hidden
//! bindings have no surface spelling; output containing them is for reading,
//! not for parsing again.
//!
//! Layout rule: a conditional is printed on one line when it fits in
//! [`MAX_LINE_WIDTH`] and contains no block; otherwise it is broken over
//! several lines. Blocks are always broken.

mod emitter;
mod formatter;

pub use emitter::{Emitter, StringEmitter};
pub use formatter::{
    format_expr, format_module, format_pattern, format_type, Formatter, INDENT_WIDTH,
    MAX_LINE_WIDTH,
};
