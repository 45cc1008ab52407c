//! Token kinds and span-carrying tokens

use crate::utils::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of lexical kinds. Variable-text kinds (identifiers, numbers,
/// comments, invalid bytes) carry no payload; their text is the token span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// Any byte the scanner does not recognize
    Invalid,

    // === VARIABLE TEXT ===
    Identifier,
    Integer,
    Real,
    /// `//` up to, but excluding, the end of line
    Comment,

    // === PUNCTUATION ===
    Dot,          // .
    OpenParen,    // (
    CloseParen,   // )
    OpenBracket,  // [
    CloseBracket, // ]
    OpenBrace,    // {
    CloseBrace,   // }
    Comma,        // ,
    Semicolon,    // ;
    Colon,        // :
    Tilde,        // ~

    // === OPERATORS ===
    ForwardSlash,    // /
    Ampersand,       // &
    DoubleAmpersand, // &&
    Pipe,            // |
    DoublePipe,      // ||
    Minus,           // -
    Bang,            // !
    BangEquals,      // !=
    Star,            // *
    Percent,         // %
    Plus,            // +
    Equals,          // =
    DoubleEquals,    // ==
    Less,            // <
    Greater,         // >
    LessEquals,      // <=
    GreaterEquals,   // >=

    // === WHITESPACE ===
    Space,
    Newline,
    Tab,
}

impl TokenKind {
    /// Fixed spelling of the kind, `None` for variable-text kinds
    pub fn as_str(&self) -> Option<&'static str> {
        let text = match self {
            Self::Invalid | Self::Identifier | Self::Integer | Self::Real | Self::Comment => {
                return None
            }
            Self::Dot => ".",
            Self::OpenParen => "(",
            Self::CloseParen => ")",
            Self::OpenBracket => "[",
            Self::CloseBracket => "]",
            Self::OpenBrace => "{",
            Self::CloseBrace => "}",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::Tilde => "~",
            Self::ForwardSlash => "/",
            Self::Ampersand => "&",
            Self::DoubleAmpersand => "&&",
            Self::Pipe => "|",
            Self::DoublePipe => "||",
            Self::Minus => "-",
            Self::Bang => "!",
            Self::BangEquals => "!=",
            Self::Star => "*",
            Self::Percent => "%",
            Self::Plus => "+",
            Self::Equals => "=",
            Self::DoubleEquals => "==",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEquals => "<=",
            Self::GreaterEquals => ">=",
            Self::Space => " ",
            Self::Newline => "\n",
            Self::Tab => "\t",
        };
        Some(text)
    }

    pub fn is_whitespace(&self) -> bool {
        matches!(self, Self::Space | Self::Tab | Self::Newline)
    }

    /// Whitespace and comments
    pub fn is_trivia(&self) -> bool {
        self.is_whitespace() || matches!(self, Self::Comment)
    }

    /// Kinds the parser sees after filtering
    pub fn is_significant(&self) -> bool {
        !self.is_trivia()
    }

    pub fn token_class(&self) -> TokenClass {
        match self {
            Self::Identifier => TokenClass::Identifier,
            Self::Integer | Self::Real => TokenClass::Literal,

            Self::Dot
            | Self::OpenParen
            | Self::CloseParen
            | Self::OpenBracket
            | Self::CloseBracket
            | Self::OpenBrace
            | Self::CloseBrace
            | Self::Comma
            | Self::Semicolon
            | Self::Colon
            | Self::Tilde => TokenClass::Punctuation,

            Self::ForwardSlash
            | Self::Ampersand
            | Self::DoubleAmpersand
            | Self::Pipe
            | Self::DoublePipe
            | Self::Minus
            | Self::Bang
            | Self::BangEquals
            | Self::Star
            | Self::Percent
            | Self::Plus
            | Self::Equals
            | Self::DoubleEquals
            | Self::Less
            | Self::Greater
            | Self::LessEquals
            | Self::GreaterEquals => TokenClass::Operation,

            Self::Space | Self::Tab | Self::Newline => TokenClass::Whitespace,
            Self::Comment | Self::Invalid => TokenClass::Special,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_str() {
            Some(text) => write!(f, "'{}'", text.escape_debug()),
            None => write!(f, "{:?}", self),
        }
    }
}

/// Token classification used for metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    Identifier,
    Literal,
    Punctuation,
    Operation,
    Whitespace,
    /// Comments and invalid bytes
    Special,
}

/// A lexical unit: its kind and the byte range it covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Bytes of `source` covered by this token
    pub fn text<'src>(&self, source: &'src [u8]) -> &'src [u8] {
        self.span.slice(source)
    }

    pub fn is_significant(&self) -> bool {
        self.kind.is_significant()
    }
}

/// Keep-predicate for [`crate::tokens::FilteredTokens`] dropping whitespace and comments
pub fn is_significant(token: &Token) -> bool {
    token.is_significant()
}
