//! Primary expressions: literals, names, parentheses, and the keyword-led
//! forms (`if`, `do`, `match`, `fn`).

use pica_diagnostic::ErrorCode;
use pica_ir::{Expr, ExprKind, Literal, TokenKind};

use crate::{BlockOptions, ErrorContext, ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let span = self.current_span();
        let literal = match self.current_kind() {
            TokenKind::Int(n) => Some(Literal::Int(n)),
            TokenKind::String(s) => Some(Literal::Str(s)),
            TokenKind::True => Some(Literal::Bool(true)),
            TokenKind::False => Some(Literal::Bool(false)),
            _ => None,
        };
        if let Some(value) = literal {
            self.advance();
            return Ok(Expr::literal(value, span));
        }

        match self.current_kind() {
            TokenKind::Nothing => {
                self.advance();
                Ok(Expr::nothing(span))
            }
            TokenKind::Ident(name) => {
                self.advance();
                Ok(Expr::new(ExprKind::Ident(name), span))
            }
            TokenKind::LParen => self.parse_parenthesized(),
            TokenKind::If => self.in_error_context(ErrorContext::IfExpression, Parser::parse_if_expr),
            TokenKind::Do => self.in_error_context(ErrorContext::DoBlock, Parser::parse_do_expr),
            TokenKind::Match => self.parse_match_expr(),
            TokenKind::Fn => self.in_error_context(ErrorContext::Closure, Parser::parse_lambda),
            _ => Err(self.expected_expression()),
        }
    }

    #[cold]
    fn expected_expression(&self) -> ParseError {
        self.cursor
            .make_expect_error("expression")
            .with_code(ErrorCode::E1002)
    }

    /// `()`, `(e)`, or `(a, b, ...)`.
    fn parse_parenthesized(&mut self) -> Result<Expr, ParseError> {
        let start = self.advance().span;
        if self.check(&TokenKind::RParen) {
            let end = self.advance().span;
            return Ok(Expr::nothing(start.merge(end)));
        }

        let first = self.parse_expr()?;
        if !self.check(&TokenKind::Comma) {
            self.expect(&TokenKind::RParen)?;
            return Ok(first);
        }

        let mut elements = vec![first];
        while self.eat(&TokenKind::Comma) {
            elements.push(self.parse_expr()?);
        }
        let end = self.expect(&TokenKind::RParen)?.span;
        Ok(Expr::new(ExprKind::Tuple(elements), start.merge(end)))
    }

    /// `if cond then block (else block)? end`
    fn parse_if_expr(&mut self) -> Result<Expr, ParseError> {
        let start = self.advance().span;
        let cond = self.parse_expr()?;
        self.expect(&TokenKind::Then)?;
        let then_branch = self.parse_block(
            &[TokenKind::Else, TokenKind::End],
            BlockOptions::CONSUME_LINE_AFTER_EXPRESSION,
        )?;
        let else_branch = if self.eat(&TokenKind::Else) {
            self.parse_block(&[TokenKind::End], BlockOptions::CONSUME_LINE_AFTER_EXPRESSION)?
        } else {
            Expr::nothing(self.current_span())
        };
        let end = self.expect_end("if", start)?.span;

        Ok(Expr::new(
            ExprKind::If {
                cond: Box::new(cond),
                then_branch: Box::new(then_branch),
                else_branch: Box::new(else_branch),
            },
            start.merge(end),
        ))
    }

    /// `do block end`; always a scope, even for one expression.
    fn parse_do_expr(&mut self) -> Result<Expr, ParseError> {
        let start = self.advance().span;
        let body = self.parse_block(&[TokenKind::End], BlockOptions::CONSUME_LINE_AFTER_EXPRESSION)?;
        let end = self.expect_end("do", start)?.span;
        let span = start.merge(end);

        let exprs = match body.kind {
            ExprKind::Block(exprs) => exprs,
            ExprKind::Nothing => Vec::new(),
            kind => vec![Expr::new(kind, body.span)],
        };
        Ok(Expr::new(ExprKind::Block(exprs), span))
    }

    /// `fn (params) body`
    fn parse_lambda(&mut self) -> Result<Expr, ParseError> {
        let start = self.advance().span;
        self.expect(&TokenKind::LParen)?;
        let params = self.parse_comma_list(Parser::expect_ident)?;
        self.expect(&TokenKind::RParen)?;
        let body = self.parse_expr()?;
        let span = start.merge(body.span);

        Ok(Expr::new(
            ExprKind::Lambda {
                params,
                body: Box::new(body),
            },
            span,
        ))
    }
}
