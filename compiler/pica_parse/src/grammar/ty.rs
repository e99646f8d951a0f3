//! Type expression parsing.
//!
//! ```text
//! type-expr   := union ("=>" type-expr)?
//! union       := primary-ty ("|" primary-ty)*
//! primary-ty  := IDENT | "-"? INT | STRING | true | false
//!              | "(" ")" | "(" type-expr ")" | "(" type-expr ("," type-expr)+ ")"
//! ```

use pica_diagnostic::ErrorCode;
use pica_ir::{Literal, Span, TokenKind, TypeExpr};
use pica_stack::ensure_sufficient_stack;

use crate::{ErrorContext, ParseError, Parser};

impl Parser<'_> {
    /// Parse a type expression. `=>` is right associative.
    pub fn parse_type_expr(&mut self) -> Result<TypeExpr, ParseError> {
        ensure_sufficient_stack(|| {
            self.in_error_context(ErrorContext::TypeExpression, |p| {
                let param = p.parse_union_type()?;
                if !p.eat(&TokenKind::FatArrow) {
                    return Ok(param);
                }
                let ret = p.parse_type_expr()?;
                let span = param.span().merge(ret.span());
                Ok(TypeExpr::Function {
                    param: Box::new(param),
                    ret: Box::new(ret),
                    span,
                })
            })
        })
    }

    fn parse_union_type(&mut self) -> Result<TypeExpr, ParseError> {
        let first = self.parse_primary_type()?;
        if !self.check(&TokenKind::Pipe) {
            return Ok(first);
        }

        let mut members = vec![first];
        while self.eat(&TokenKind::Pipe) {
            members.push(self.parse_primary_type()?);
        }
        let span = members[0].span().merge(self.previous_span());
        Ok(TypeExpr::Union { members, span })
    }

    fn parse_primary_type(&mut self) -> Result<TypeExpr, ParseError> {
        if let Some((value, span)) = self.parse_negative_int()? {
            return Ok(TypeExpr::Literal { value, span });
        }

        let span = self.current_span();
        let literal = match self.current_kind() {
            TokenKind::Ident(name) => {
                self.advance();
                return Ok(TypeExpr::Named { name, span });
            }
            TokenKind::Int(n) => Literal::Int(n),
            TokenKind::String(s) => Literal::Str(s),
            TokenKind::True => Literal::Bool(true),
            TokenKind::False => Literal::Bool(false),
            TokenKind::LParen => return self.parse_parenthesized_type(),
            _ => {
                return Err(self
                    .cursor
                    .make_expect_error("type")
                    .with_code(ErrorCode::E1005))
            }
        };
        self.advance();
        Ok(TypeExpr::Literal {
            value: literal,
            span,
        })
    }

    /// `-` directly followed by an integer, read as one negative literal.
    ///
    /// Leaves the cursor where it was unless both tokens are present.
    pub(crate) fn parse_negative_int(&mut self) -> Result<Option<(Literal, Span)>, ParseError> {
        let TokenKind::Int(n) = self.cursor.peek_next_kind() else {
            return Ok(None);
        };
        if !self.check(&TokenKind::Minus) {
            return Ok(None);
        }

        let start = self.advance().span;
        let span = start.merge(self.advance().span);
        let value = n.checked_neg().ok_or_else(|| {
            ParseError::new(ErrorCode::E0003, "integer literal out of range", span)
                .with_context("does not fit in a 64-bit integer")
        })?;
        Ok(Some((Literal::Int(value), span)))
    }

    /// `()`, `(T)`, or `(A, B, ...)`. A parenthesized type keeps its
    /// parentheses in its span.
    fn parse_parenthesized_type(&mut self) -> Result<TypeExpr, ParseError> {
        let start = self.advance().span;
        if self.check(&TokenKind::RParen) {
            let end = self.advance().span;
            return Ok(TypeExpr::Unit {
                span: start.merge(end),
            });
        }

        let first = self.parse_type_expr()?;
        if !self.check(&TokenKind::Comma) {
            let end = self.expect(&TokenKind::RParen)?.span;
            return Ok(first.with_span(start.merge(end)));
        }

        let mut elements = vec![first];
        while self.eat(&TokenKind::Comma) {
            elements.push(self.parse_type_expr()?);
        }
        let end = self.expect(&TokenKind::RParen)?.span;
        Ok(TypeExpr::Tuple {
            elements,
            span: start.merge(end),
        })
    }
}
