//! Lazy token sequences and the significance filter
//!
//! Both the scanner and the filter are cursors: `current` is the token under
//! the cursor, `advance` moves past it and `position` is the byte offset the
//! cursor stands at. Cloning a sequence is a cheap snapshot of that cursor,
//! which is all the parser needs for backtracking.

use crate::lexical::TokenScanner;
use crate::tokens::token::{is_significant, Token};
use std::fmt;

/// Forward token cursor shared by the scanner and by filters over it
pub trait TokenSequence: Clone {
    /// Token under the cursor, `None` once exhausted
    fn current(&self) -> Option<Token>;

    /// Move past the current token. No-op when exhausted.
    fn advance(&mut self);

    /// Byte offset of the current token, or of the end of input once exhausted
    fn position(&self) -> usize;

    fn is_exhausted(&self) -> bool {
        self.current().is_none()
    }
}

/// Filter adapter: only tokens accepted by `keep` are visible.
///
/// The cursor always rests on the nearest underlying token (from construction
/// onward) accepted by `keep`. Two filters compare equal when their underlying
/// positions are equal.
#[derive(Clone)]
pub struct FilteredTokens<S, P> {
    inner: S,
    keep: P,
}

impl<S, P> FilteredTokens<S, P>
where
    S: TokenSequence,
    P: Fn(&Token) -> bool + Clone,
{
    pub fn new(inner: S, keep: P) -> Self {
        let mut filtered = Self { inner, keep };
        filtered.skip_rejected();
        filtered
    }

    fn skip_rejected(&mut self) {
        while let Some(token) = self.inner.current() {
            if (self.keep)(&token) {
                break;
            }
            self.inner.advance();
        }
    }
}

impl<S, P> TokenSequence for FilteredTokens<S, P>
where
    S: TokenSequence,
    P: Fn(&Token) -> bool + Clone,
{
    fn current(&self) -> Option<Token> {
        self.inner.current()
    }

    fn advance(&mut self) {
        if self.inner.current().is_some() {
            self.inner.advance();
            self.skip_rejected();
        }
    }

    fn position(&self) -> usize {
        self.inner.position()
    }
}

impl<S, P> Iterator for FilteredTokens<S, P>
where
    S: TokenSequence,
    P: Fn(&Token) -> bool + Clone,
{
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.current()?;
        self.advance();
        Some(token)
    }
}

impl<S: TokenSequence, P> PartialEq for FilteredTokens<S, P> {
    fn eq(&self, other: &Self) -> bool {
        self.inner.position() == other.inner.position()
    }
}

impl<S: TokenSequence, P> Eq for FilteredTokens<S, P> {}

impl<S: TokenSequence + fmt::Debug, P> fmt::Debug for FilteredTokens<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilteredTokens")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

/// Keep-predicate type used by the parser pipeline
pub type TokenPredicate = fn(&Token) -> bool;

/// The scanner filtered down to parser-visible tokens
pub type SignificantTokens<'src> = FilteredTokens<TokenScanner<'src>, TokenPredicate>;

/// Significant tokens of `source` from its start
pub fn significant_tokens(source: &[u8]) -> SignificantTokens<'_> {
    FilteredTokens::new(TokenScanner::new(source), is_significant as TokenPredicate)
}

/// Significant tokens of `source` from the first one at or after `offset`.
/// `offset` must be a token boundary.
pub fn significant_tokens_at(source: &[u8], offset: usize) -> SignificantTokens<'_> {
    FilteredTokens::new(
        TokenScanner::resume_at(source, offset),
        is_significant as TokenPredicate,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::TokenKind;
    use crate::utils::Span;

    fn kinds<I: Iterator<Item = Token>>(tokens: I) -> Vec<TokenKind> {
        tokens.map(|t| t.kind).collect()
    }

    #[test]
    fn test_significant_filter_skips_trivia() {
        let source = b"  int\tx; // trailing\n}";
        let tokens = significant_tokens(source);
        assert_eq!(
            kinds(tokens),
            vec![
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Semicolon,
                TokenKind::CloseBrace,
            ]
        );
    }

    #[test]
    fn test_filter_positions_on_first_kept_token() {
        let source = b"\n\n  x";
        let tokens = significant_tokens(source);
        assert_eq!(tokens.position(), 4);
        assert_eq!(
            tokens.current(),
            Some(Token::new(TokenKind::Identifier, Span::new(4, 5)))
        );
    }

    #[test]
    fn test_only_trivia_is_exhausted_immediately() {
        let tokens = significant_tokens(b" // nothing here\n\t");
        assert!(tokens.is_exhausted());
        assert_eq!(tokens.position(), 18);
    }

    #[test]
    fn test_custom_predicate() {
        let source = b"a + b * 3";
        let only_identifiers = FilteredTokens::new(TokenScanner::new(source), |t: &Token| {
            t.kind == TokenKind::Identifier
        });
        let texts: Vec<&[u8]> = only_identifiers.map(|t| t.text(source)).collect();
        assert_eq!(texts, vec![&b"a"[..], &b"b"[..]]);
    }

    #[test]
    fn test_equality_is_positional() {
        let source = b"f ( x )";
        let mut first = significant_tokens(source);
        let second = significant_tokens(source);
        assert_eq!(first, second);

        first.advance();
        assert_ne!(first, second);

        let resumed = significant_tokens_at(source, 1);
        assert_eq!(first, resumed);
    }

    #[test]
    fn test_advance_past_end_is_noop() {
        let mut tokens = significant_tokens(b"x");
        tokens.advance();
        assert!(tokens.is_exhausted());
        tokens.advance();
        assert_eq!(tokens.position(), 1);
    }
}
