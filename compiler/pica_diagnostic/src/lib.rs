//! Diagnostic system for Pica error reporting.
//!
//! Every phase reports failures as a [`Diagnostic`]:
//! - Error codes for searchability
//! - A message saying what went wrong
//! - A primary span saying where
//! - Optional notes and suggestions
//!
//! Emitters in [`emitter`] turn diagnostics into text.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
