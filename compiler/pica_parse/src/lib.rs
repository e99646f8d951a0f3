//! Recursive descent parser for Pica.
//!
//! Produces an owned expression tree. `match` expressions never reach the
//! tree: they are desugared into `If` chains as soon as their last case is
//! parsed (see [`desugar_cases`]).

mod cursor;
mod desugar;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use desugar::desugar_cases;
pub use error::{ErrorContext, ParseError};
pub use grammar::BlockOptions;

use pica_ir::{Expr, ExprKind, LocalId, Name, Span, StringInterner, Token, TokenKind, TokenList};

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    /// Next hidden binding id; unique within one parse.
    next_local: u32,
}

impl<'a> Parser<'a> {
    /// Create a new parser.
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Parser {
            cursor: Cursor::new(tokens, interner),
            next_local: 0,
        }
    }

    /// Current position in the token stream.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    // Cursor delegation.

    #[inline]
    fn current_kind(&self) -> TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    fn current_span(&self) -> Span {
        self.cursor.current_span()
    }

    #[inline]
    fn previous_span(&self) -> Span {
        self.cursor.previous_span()
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    #[inline]
    fn check(&self, kind: &TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    fn check_any(&self, kinds: &[TokenKind]) -> bool {
        self.cursor.check_any(kinds)
    }

    #[inline]
    fn advance(&mut self) -> Token {
        self.cursor.advance()
    }

    #[inline]
    fn eat(&mut self, kind: &TokenKind) -> bool {
        self.cursor.eat(kind)
    }

    #[inline]
    fn skip_newlines(&mut self) {
        self.cursor.skip_newlines();
    }

    #[inline]
    fn expect(&mut self, kind: &TokenKind) -> Result<Token, ParseError> {
        self.cursor.expect(kind)
    }

    #[inline]
    fn expect_ident(&mut self) -> Result<Name, ParseError> {
        self.cursor.expect_ident()
    }

    #[inline]
    fn interner(&self) -> &'a StringInterner {
        self.cursor.interner()
    }

    /// Allocate a fresh hidden binding.
    fn fresh_local(&mut self) -> LocalId {
        let id = LocalId::new(self.next_local);
        self.next_local += 1;
        id
    }

    /// Run `f`, tagging any error it returns with `context`.
    fn in_error_context<T>(
        &mut self,
        context: ErrorContext,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        f(self).map_err(|err| err.in_context(context))
    }

    /// Parse a whole source file: newline-separated expressions until EOF.
    ///
    /// The module is a `Block`, or `nothing` when the file is empty.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn parse_module(mut self) -> Result<Expr, ParseError> {
        let start = self.current_span();
        let mut exprs = Vec::new();

        self.in_error_context(ErrorContext::Module, |p| {
            p.skip_newlines();
            while !p.is_at_end() {
                exprs.push(p.parse_expr()?);
                if !p.is_at_end() {
                    p.expect(&TokenKind::Newline)?;
                    p.skip_newlines();
                }
            }
            Ok(())
        })?;

        let span = start.merge(self.previous_span());
        if exprs.is_empty() {
            return Ok(Expr::nothing(span));
        }
        tracing::debug!(exprs = exprs.len(), "parsed module");
        Ok(Expr::new(ExprKind::Block(exprs), span))
    }
}

/// Parse a token list into an expression tree.
pub fn parse(tokens: &TokenList, interner: &StringInterner) -> Result<Expr, ParseError> {
    Parser::new(tokens, interner).parse_module()
}

#[cfg(test)]
mod tests;
