//! Tokens produced by the lexer and consumed by the parser.

use std::fmt;
use std::mem;

use crate::{Name, Span};

/// Token kinds.
///
/// Literal payloads are carried inline; identifiers and string contents are
/// interned.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // Literals
    Int(i64),
    String(Name),
    Ident(Name),

    // Keywords
    And,
    Case,
    Do,
    Else,
    End,
    False,
    Fn,
    If,
    Is,
    Match,
    Not,
    Nothing,
    Or,
    Then,
    True,
    Var,

    // Punctuation and operators
    LParen,
    RParen,
    Comma,
    Eq,
    EqEq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    Plus,
    Minus,
    Star,
    Slash,
    Pipe,
    FatArrow,

    /// One or more line terminators (comments and blank lines collapse).
    Newline,
    /// Invalid character sequence.
    Error,
    /// Unterminated string literal.
    UnterminatedString,
    /// Integer literal that does not fit in `i64`.
    IntOverflow,
    Eof,
}

impl TokenKind {
    /// Whether `self` and `other` are the same kind, ignoring payloads.
    #[inline]
    pub fn same_kind(&self, other: &TokenKind) -> bool {
        mem::discriminant(self) == mem::discriminant(other)
    }

    /// Human-readable name for "expected X, found Y" messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Int(_) => "integer",
            TokenKind::String(_) => "string",
            TokenKind::Ident(_) => "identifier",
            TokenKind::And => "`and`",
            TokenKind::Case => "`case`",
            TokenKind::Do => "`do`",
            TokenKind::Else => "`else`",
            TokenKind::End => "`end`",
            TokenKind::False => "`false`",
            TokenKind::Fn => "`fn`",
            TokenKind::If => "`if`",
            TokenKind::Is => "`is`",
            TokenKind::Match => "`match`",
            TokenKind::Not => "`not`",
            TokenKind::Nothing => "`nothing`",
            TokenKind::Or => "`or`",
            TokenKind::Then => "`then`",
            TokenKind::True => "`true`",
            TokenKind::Var => "`var`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::Comma => "`,`",
            TokenKind::Eq => "`=`",
            TokenKind::EqEq => "`==`",
            TokenKind::NotEq => "`!=`",
            TokenKind::Lt => "`<`",
            TokenKind::Gt => "`>`",
            TokenKind::LtEq => "`<=`",
            TokenKind::GtEq => "`>=`",
            TokenKind::Plus => "`+`",
            TokenKind::Minus => "`-`",
            TokenKind::Star => "`*`",
            TokenKind::Slash => "`/`",
            TokenKind::Pipe => "`|`",
            TokenKind::FatArrow => "`=>`",
            TokenKind::Newline => "newline",
            TokenKind::Error => "invalid token",
            TokenKind::UnterminatedString => "unterminated string",
            TokenKind::IntOverflow => "out-of-range integer",
            TokenKind::Eof => "end of file",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A token with its source span.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

/// Lexer output. Always terminated by exactly one `Eof` token.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Last token pushed, if any.
    pub fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }
}

impl std::ops::Index<usize> for TokenList {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
