//! Token cursor for navigating the token stream.
//!
//! Provides low-level token access, lookahead, and consumption methods.

use pica_diagnostic::ErrorCode;
use pica_ir::{Name, Span, StringInterner, Token, TokenKind, TokenList};

use super::ParseError;

/// Cursor for navigating tokens.
///
/// Lookahead is bounded: the current token, the one after it, and the span
/// of the previous one.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    interner: &'a StringInterner,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        debug_assert!(
            tokens.last().is_some_and(|t| t.kind == TokenKind::Eof),
            "token list must end with Eof"
        );
        Cursor {
            tokens,
            interner,
            pos: 0,
        }
    }

    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    /// Current position in the token stream.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Get the current token.
    ///
    /// Invariant: the position never moves past the final `Eof`.
    #[inline]
    pub fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Span of the most recently consumed token.
    #[inline]
    pub fn previous_span(&self) -> Span {
        if self.pos > 0 {
            self.tokens[self.pos - 1].span
        } else {
            Span::DUMMY
        }
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    /// Check if the current token has the same kind as `kind`, ignoring
    /// payloads.
    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        self.current_kind().same_kind(kind)
    }

    /// Check the current token against several kinds.
    #[inline]
    pub fn check_any(&self, kinds: &[TokenKind]) -> bool {
        kinds.iter().any(|kind| self.check(kind))
    }

    /// Kind of the token after the current one (`Eof` at the end).
    pub fn peek_next_kind(&self) -> TokenKind {
        self.tokens
            .get(self.pos + 1)
            .map_or(TokenKind::Eof, |token| token.kind)
    }

    /// Consume the current token. Stays on `Eof` once reached.
    #[inline]
    pub fn advance(&mut self) -> Token {
        let token = *self.current();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it matches `kind`.
    #[inline]
    pub fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn skip_newlines(&mut self) {
        while self.check(&TokenKind::Newline) {
            self.advance();
        }
    }

    /// Consume a token of the given kind or fail at the current token.
    #[inline]
    pub fn expect(&mut self, kind: &TokenKind) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.make_expect_error(kind.display_name()))
        }
    }

    /// Consume an identifier.
    pub fn expect_ident(&mut self) -> Result<Name, ParseError> {
        if let TokenKind::Ident(name) = self.current_kind() {
            self.advance();
            Ok(name)
        } else {
            Err(self
                .make_expect_error("identifier")
                .with_code(ErrorCode::E1004))
        }
    }

    /// Build an "expected X, found Y" error at the current token.
    ///
    /// Malformed tokens report the lexer problem instead.
    #[cold]
    #[inline(never)]
    pub fn make_expect_error(&self, expected: &str) -> ParseError {
        if let Some(lex_error) = ParseError::from_lex_error(self.current()) {
            return lex_error;
        }
        ParseError::new(
            ErrorCode::E1001,
            format!(
                "expected {expected}, found {}",
                self.current_kind().display_name()
            ),
            self.current_span(),
        )
        .with_context(format!("expected {expected}"))
    }
}

impl ParseError {
    #[must_use]
    pub(crate) fn with_code(mut self, code: ErrorCode) -> Self {
        if self.code.is_parser_error() {
            self.code = code;
        }
        self
    }
}
