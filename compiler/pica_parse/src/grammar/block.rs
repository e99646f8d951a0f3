//! Block bodies.
//!
//! A block is either the rest of the current line (one expression) or, when
//! it starts with a newline, every expression up to one of the caller's
//! terminator tokens. The terminator is left for the caller to consume.

use bitflags::bitflags;
use pica_diagnostic::ErrorCode;
use pica_ir::{Expr, ExprKind, Span, Token, TokenKind};

use crate::{ParseError, Parser};

bitflags! {
    /// Options for [`Parser::parse_block`].
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct BlockOptions: u8 {
        /// After a single-line block, also consume the newline ending it.
        const CONSUME_LINE_AFTER_EXPRESSION = 1 << 0;
    }
}

impl Parser<'_> {
    /// Parse a block ending before any of `terminators`.
    pub fn parse_block(
        &mut self,
        terminators: &[TokenKind],
        options: BlockOptions,
    ) -> Result<Expr, ParseError> {
        if !self.check(&TokenKind::Newline) {
            let expr = self.parse_expr()?;
            if options.contains(BlockOptions::CONSUME_LINE_AFTER_EXPRESSION) {
                self.eat(&TokenKind::Newline);
            }
            return Ok(expr);
        }

        let start = self.advance().span;
        let mut exprs = Vec::new();
        loop {
            self.skip_newlines();
            if self.check_any(terminators) {
                break;
            }
            if self.is_at_end() {
                let expected = terminators
                    .first()
                    .map_or("expression", TokenKind::display_name);
                return Err(self.cursor.make_expect_error(expected));
            }
            exprs.push(self.parse_expr()?);
            if !self.check_any(terminators) {
                self.expect(&TokenKind::Newline)?;
            }
        }

        let span = start.merge(self.previous_span());
        if exprs.is_empty() {
            return Ok(Expr::nothing(span));
        }
        Ok(Expr::new(ExprKind::Block(exprs), span))
    }

    /// Consume the `end` closing the `opener` keyword found at `opened_at`.
    pub(crate) fn expect_end(
        &mut self,
        opener: &str,
        opened_at: Span,
    ) -> Result<Token, ParseError> {
        self.expect(&TokenKind::End).map_err(|err| {
            if err.code.is_parser_error() {
                err.with_code(ErrorCode::E1003)
                    .with_context(format!("expected `end` to close `{opener}`"))
                    .with_related(opened_at, format!("`{opener}` opened here"))
            } else {
                err
            }
        })
    }
}
