//! `match` expressions.
//!
//! ```text
//! match-expr    := "match" expr NEWLINE case* ("else" block)? "end"
//! case          := "case" binding? pattern "then" block
//! binding       := IDENT            // lowercase first character only
//! pattern       := BOOL | "-"? INT | STRING | type-expr
//! ```
//!
//! The subject is bound once to a hidden local and every case tests that
//! local, so the subject expression runs exactly once. The parsed cases are
//! handed straight to [`desugar_cases`]; no `match` node survives parsing.

use pica_ir::{Binder, Expr, ExprKind, Literal, MatchCase, Name, Pattern, TokenKind};

use crate::{desugar_cases, BlockOptions, ErrorContext, ParseError, Parser};

/// Tokens that end a case body.
const CASE_BODY_TERMINATORS: [TokenKind; 3] = [TokenKind::Case, TokenKind::Else, TokenKind::End];

impl Parser<'_> {
    /// Parse a `match` expression and desugar it.
    ///
    /// Produces `Block[Let(hidden, subject), if-chain]`. Any missing piece
    /// fails the whole expression; there is no partial result.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn parse_match_expr(&mut self) -> Result<Expr, ParseError> {
        self.in_error_context(ErrorContext::MatchExpression, |p| {
            let start = p.expect(&TokenKind::Match)?.span;
            let subject = p.parse_expr()?;
            let local = p.fresh_local();
            p.expect(&TokenKind::Newline)?;

            let mut cases = Vec::new();
            while p.check(&TokenKind::Case) {
                cases.push(p.parse_match_case()?);
            }

            let else_expr = if p.eat(&TokenKind::Else) {
                Some(p.parse_block(&[TokenKind::End], BlockOptions::CONSUME_LINE_AFTER_EXPRESSION)?)
            } else {
                None
            };

            let end = p.expect_end("match", start)?.span;
            let span = start.merge(end);
            tracing::debug!(cases = cases.len(), has_else = else_expr.is_some(), "parsed match");

            let subject_ref = Expr::local(local, subject.span);
            let bind_subject = Expr::new(
                ExprKind::Let {
                    binder: Binder::Hidden(local),
                    value: Box::new(subject),
                },
                subject_ref.span,
            );
            let chain = desugar_cases(&subject_ref, cases, else_expr, span);

            Ok(Expr::new(ExprKind::Block(vec![bind_subject, chain]), span))
        })
    }

    /// Parse one `case binding? pattern then body`.
    pub fn parse_match_case(&mut self) -> Result<MatchCase, ParseError> {
        self.in_error_context(ErrorContext::MatchCase, |p| {
            let start = p.expect(&TokenKind::Case)?.span;
            let binding = p.parse_case_binding();
            let pattern = p.parse_case_pattern()?;
            p.expect(&TokenKind::Then)?;
            let body = p.parse_block(
                &CASE_BODY_TERMINATORS,
                BlockOptions::CONSUME_LINE_AFTER_EXPRESSION,
            )?;
            let span = start.merge(body.span);
            Ok(MatchCase::new(binding, pattern, body, span))
        })
    }

    /// Consume a case binding: an identifier with a lowercase first
    /// character. Anything else leaves the cursor where it was.
    pub fn parse_case_binding(&mut self) -> Option<Name> {
        let TokenKind::Ident(name) = self.current_kind() else {
            return None;
        };
        let is_binding = self
            .interner()
            .lookup(name)
            .chars()
            .next()
            .is_some_and(char::is_lowercase);
        if !is_binding {
            return None;
        }
        self.advance();
        Some(name)
    }

    /// Parse a case pattern.
    ///
    /// Literal tokens are tried first, in the order boolean, integer
    /// (optionally negated), string; only then is a type expression parsed.
    /// A literal token never starts a type pattern, so `case 1 | 2` is an
    /// error at `|`.
    pub fn parse_case_pattern(&mut self) -> Result<Pattern, ParseError> {
        self.in_error_context(ErrorContext::Pattern, |p| {
            let span = p.current_span();
            let literal = match p.current_kind() {
                TokenKind::True => Some(Literal::Bool(true)),
                TokenKind::False => Some(Literal::Bool(false)),
                TokenKind::Int(n) => Some(Literal::Int(n)),
                TokenKind::String(s) => Some(Literal::Str(s)),
                _ => None,
            };
            if let Some(value) = literal {
                p.advance();
                return Ok(Pattern::Literal { value, span });
            }
            if let Some((value, span)) = p.parse_negative_int()? {
                return Ok(Pattern::Literal { value, span });
            }

            let ty = p.parse_type_expr()?;
            Ok(Pattern::Type { ty })
        })
    }
}
