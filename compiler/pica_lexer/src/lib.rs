//! Lexer for Pica using logos with string interning.
//!
//! Newlines are significant: they separate expressions in blocks and end the
//! subject line of a `match`. Blank lines and `//` comments collapse into a
//! single `Newline` token, and newlines before the first real token are
//! dropped. The token list always ends with exactly one `Eof`.

mod escape;
mod raw_token;

use logos::Logos;
use pica_ir::{Span, StringInterner, Token, TokenKind, TokenList};

use crate::escape::unescape_string;
use crate::raw_token::RawToken;

/// Lex source code into a `TokenList`.
///
/// Never fails: malformed input becomes `Error`, `UnterminatedString` or
/// `IntOverflow` tokens, which the parser reports. A source too large for
/// `u32` offsets ends in an `Error` token at the first unrepresentable
/// offset.
#[tracing::instrument(level = "trace", skip_all, fields(len = source.len()))]
pub fn lex(source: &str, interner: &StringInterner) -> TokenList {
    let mut result = TokenList::new();
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let Ok(span) = Span::try_from_range(logos.span()) else {
            // Offsets past `u32::MAX` have no span; report once and stop.
            result.push(Token::new(TokenKind::Error, Span::point(u32::MAX)));
            break;
        };
        let slice = logos.slice();

        match token_result {
            Ok(RawToken::LineComment) => {}
            Ok(RawToken::Newline) => {
                let redundant = result
                    .last()
                    .map_or(true, |last| last.kind == TokenKind::Newline);
                if !redundant {
                    result.push(Token::new(TokenKind::Newline, span));
                }
            }
            Ok(raw) => {
                let kind = convert_token(raw, slice, interner);
                result.push(Token::new(kind, span));
            }
            Err(()) => {
                // The only digit-initial failure is an out-of-range integer.
                let kind = if slice.starts_with(|c: char| c.is_ascii_digit()) {
                    TokenKind::IntOverflow
                } else {
                    TokenKind::Error
                };
                result.push(Token::new(kind, span));
            }
        }
    }

    let eof_span = Span::point(u32::try_from(source.len()).unwrap_or(u32::MAX));
    result.push(Token::new(TokenKind::Eof, eof_span));

    tracing::trace!(tokens = result.len(), "lexed");
    result
}

/// Convert a raw token to a `TokenKind`, interning strings.
fn convert_token(raw: RawToken, slice: &str, interner: &StringInterner) -> TokenKind {
    match raw {
        // Literals
        RawToken::Int(n) => TokenKind::Int(n),
        RawToken::String => {
            let content = &slice[1..slice.len() - 1];
            TokenKind::String(interner.intern(&unescape_string(content)))
        }
        RawToken::UnterminatedString => TokenKind::UnterminatedString,
        RawToken::Ident => TokenKind::Ident(interner.intern(slice)),

        // Keywords
        RawToken::And => TokenKind::And,
        RawToken::Case => TokenKind::Case,
        RawToken::Do => TokenKind::Do,
        RawToken::Else => TokenKind::Else,
        RawToken::End => TokenKind::End,
        RawToken::False => TokenKind::False,
        RawToken::Fn => TokenKind::Fn,
        RawToken::If => TokenKind::If,
        RawToken::Is => TokenKind::Is,
        RawToken::Match => TokenKind::Match,
        RawToken::Not => TokenKind::Not,
        RawToken::Nothing => TokenKind::Nothing,
        RawToken::Or => TokenKind::Or,
        RawToken::Then => TokenKind::Then,
        RawToken::True => TokenKind::True,
        RawToken::Var => TokenKind::Var,

        // Symbols
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::Comma => TokenKind::Comma,
        RawToken::FatArrow => TokenKind::FatArrow,
        RawToken::Eq => TokenKind::Eq,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::Gt => TokenKind::Gt,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Pipe => TokenKind::Pipe,

        // Trivia is filtered by `lex` before conversion.
        RawToken::LineComment | RawToken::Newline => TokenKind::Newline,
    }
}
