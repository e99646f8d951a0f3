//! Parse error types.
//!
//! A single error kind covers the whole parser. Errors carry the span of the
//! offending token and, once they bubble out of a construct wrapped with
//! `Parser::in_error_context`, the innermost construct being parsed.

use std::fmt;

use pica_diagnostic::{Diagnostic, ErrorCode};
use pica_ir::{Span, Token, TokenKind};

/// What was being parsed when an error occurred.
///
/// Rendered as a "while parsing ..." note.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorContext {
    Module,
    Expression,
    IfExpression,
    DoBlock,
    MatchExpression,
    MatchCase,
    Pattern,
    TypeExpression,
    Closure,
    FunctionCall,
}

impl ErrorContext {
    /// Phrase suitable for "while parsing {description}".
    pub fn description(self) -> &'static str {
        match self {
            Self::Module => "a module",
            Self::Expression => "an expression",
            Self::IfExpression => "an if expression",
            Self::DoBlock => "a do block",
            Self::MatchExpression => "a match expression",
            Self::MatchCase => "a match case",
            Self::Pattern => "a case pattern",
            Self::TypeExpression => "a type expression",
            Self::Closure => "a function literal",
            Self::FunctionCall => "a function call",
        }
    }
}

/// Parse error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Human-readable message.
    pub message: String,
    /// Location of the error.
    pub span: Span,
    /// Label text for the primary span.
    pub context: Option<String>,
    /// Innermost construct being parsed.
    pub while_parsing: Option<ErrorContext>,
    /// Related location, such as the keyword opening an unclosed construct.
    pub related: Option<(Span, String)>,
}

impl ParseError {
    #[cold]
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        ParseError {
            code,
            message: message.into(),
            span,
            context: None,
            while_parsing: None,
            related: None,
        }
    }

    /// Error for a token the lexer could not make sense of.
    ///
    /// Returns `None` for well-formed tokens.
    #[cold]
    pub fn from_lex_error(token: &Token) -> Option<Self> {
        let (code, message, label) = match token.kind {
            TokenKind::Error => (ErrorCode::E0002, "invalid character in source", "not valid here"),
            TokenKind::UnterminatedString => (
                ErrorCode::E0001,
                "unterminated string literal",
                "string starts here",
            ),
            TokenKind::IntOverflow => (
                ErrorCode::E0003,
                "integer literal out of range",
                "does not fit in a 64-bit integer",
            ),
            _ => return None,
        };
        Some(ParseError::new(code, message, token.span).with_context(label))
    }

    /// Set the label text shown at the error span.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Point at a second location that explains the error.
    #[must_use]
    pub fn with_related(mut self, span: Span, message: impl Into<String>) -> Self {
        self.related = Some((span, message.into()));
        self
    }

    /// Record the construct being parsed, unless an inner one already is.
    #[must_use]
    pub fn in_context(mut self, context: ErrorContext) -> Self {
        self.while_parsing.get_or_insert(context);
        self
    }

    /// Convert to a diagnostic for reporting.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code)
            .with_message(&self.message)
            .with_label(self.span, self.context.as_deref().unwrap_or("here"));

        if let Some((span, message)) = &self.related {
            diag = diag.with_secondary_label(*span, message.as_str());
        }

        if let Some(context) = self.while_parsing {
            diag = diag.with_note(format!("while parsing {}", context.description()));
        }

        diag
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} at {}", self.code, self.message, self.span)
    }
}

impl std::error::Error for ParseError {}
