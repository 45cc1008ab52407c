//! Token model for the recognizer
//!
//! - [`Token`] and [`TokenKind`]: byte-span tokens over the caller's buffer
//! - [`TokenSequence`]: forward cursor shared by the scanner and filters
//! - [`FilteredTokens`]: lazy adapter hiding tokens rejected by a predicate
//!
//! The parser consumes [`SignificantTokens`], the scanner filtered down to
//! everything except whitespace and comments.

pub mod token;
pub mod token_stream;

pub use token::{is_significant, Token, TokenClass, TokenKind};
pub use token_stream::{
    significant_tokens, significant_tokens_at, FilteredTokens, SignificantTokens, TokenPredicate,
    TokenSequence,
};

pub use crate::utils::Span;
