//! Expression parsing.
//!
//! Precedence, loosest first:
//!
//! ```text
//! var x = e | x = e      binding / assignment (right associative)
//! or
//! and
//! not e
//! e is Type
//! == !=
//! < > <= >=
//! + -
//! * /
//! -e
//! f(args)
//! primary
//! ```

mod operators;
mod primary;

use pica_ir::{BinaryOp, Binder, Expr, ExprKind, TokenKind, UnaryOp};
use pica_stack::ensure_sufficient_stack;

use crate::{ErrorContext, ParseError, Parser};

impl Parser<'_> {
    /// Parse one expression.
    pub fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_binding_expr())
    }

    /// `var name = expr`, `name = expr`, or anything looser than `or`.
    fn parse_binding_expr(&mut self) -> Result<Expr, ParseError> {
        if self.check(&TokenKind::Var) {
            let start = self.advance().span;
            let name = self.expect_ident()?;
            self.expect(&TokenKind::Eq)?;
            let value = self.parse_expr()?;
            let span = start.merge(value.span);
            return Ok(Expr::new(
                ExprKind::Let {
                    binder: Binder::Named(name),
                    value: Box::new(value),
                },
                span,
            ));
        }

        if let TokenKind::Ident(name) = self.current_kind() {
            if self.cursor.peek_next_kind() == TokenKind::Eq {
                let start = self.advance().span;
                self.advance();
                let value = self.parse_expr()?;
                let span = start.merge(value.span);
                return Ok(Expr::new(
                    ExprKind::Assign {
                        name,
                        value: Box::new(value),
                    },
                    span,
                ));
            }
        }

        self.parse_or()
    }

    fn parse_or(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_and()?;
        while self.eat(&TokenKind::Or) {
            let right = self.parse_and()?;
            left = make_binary(BinaryOp::Or, left, right);
        }
        Ok(left)
    }

    fn parse_and(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_not()?;
        while self.eat(&TokenKind::And) {
            let right = self.parse_not()?;
            left = make_binary(BinaryOp::And, left, right);
        }
        Ok(left)
    }

    fn parse_not(&mut self) -> Result<Expr, ParseError> {
        if self.check(&TokenKind::Not) {
            let start = self.advance().span;
            let operand = ensure_sufficient_stack(|| self.parse_not())?;
            return Ok(make_unary(UnaryOp::Not, operand, start));
        }
        self.parse_is()
    }

    /// `value is Type`; at most one test per operand.
    fn parse_is(&mut self) -> Result<Expr, ParseError> {
        let value = self.parse_equality()?;
        if !self.eat(&TokenKind::Is) {
            return Ok(value);
        }
        let ty = self.parse_type_expr()?;
        let span = value.span.merge(ty.span());
        Ok(Expr::new(
            ExprKind::Is {
                value: Box::new(value),
                ty,
            },
            span,
        ))
    }

    fn parse_equality(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_comparison()?;
        while let Some(op) = self.match_equality_op() {
            self.advance();
            let right = self.parse_comparison()?;
            left = make_binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_additive()?;
        while let Some(op) = self.match_comparison_op() {
            self.advance();
            let right = self.parse_additive()?;
            left = make_binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_multiplicative()?;
        while let Some(op) = self.match_additive_op() {
            self.advance();
            let right = self.parse_multiplicative()?;
            left = make_binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_unary()?;
        while let Some(op) = self.match_multiplicative_op() {
            self.advance();
            let right = self.parse_unary()?;
            left = make_binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        if let Some(op) = self.match_unary_op() {
            let start = self.advance().span;
            let operand = ensure_sufficient_stack(|| self.parse_unary())?;
            return Ok(make_unary(op, operand, start));
        }
        self.parse_call()
    }

    /// Calls bind tighter than any operator; `f(a)(b)` chains.
    fn parse_call(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_primary()?;
        while self.check(&TokenKind::LParen) {
            expr = self.in_error_context(ErrorContext::FunctionCall, |p| {
                p.advance();
                let args = p.parse_comma_list(Parser::parse_expr)?;
                let end = p.expect(&TokenKind::RParen)?.span;
                let span = expr.span.merge(end);
                Ok(Expr::new(
                    ExprKind::Call {
                        func: Box::new(expr),
                        args,
                    },
                    span,
                ))
            })?;
        }
        Ok(expr)
    }

    /// Comma-separated items up to (not including) `)`.
    pub(crate) fn parse_comma_list<T>(
        &mut self,
        mut item: impl FnMut(&mut Self) -> Result<T, ParseError>,
    ) -> Result<Vec<T>, ParseError> {
        let mut items = Vec::new();
        if self.check(&TokenKind::RParen) {
            return Ok(items);
        }
        loop {
            items.push(item(self)?);
            if !self.eat(&TokenKind::Comma) {
                return Ok(items);
            }
        }
    }
}

fn make_binary(op: BinaryOp, left: Expr, right: Expr) -> Expr {
    let span = left.span.merge(right.span);
    Expr::new(
        ExprKind::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        },
        span,
    )
}

fn make_unary(op: UnaryOp, operand: Expr, start: pica_ir::Span) -> Expr {
    let span = start.merge(operand.span);
    Expr::new(
        ExprKind::Unary {
            op,
            operand: Box::new(operand),
        },
        span,
    )
}
