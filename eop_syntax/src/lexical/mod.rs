//! Lexical analysis
//!
//! The parser consumes a lazy [`TokenScanner`]; [`tokenize`] collects a whole
//! buffer for callers that want the tokens themselves, enforcing the
//! compile-time token and identifier limits.

pub mod analyzer;
pub mod classify;

use crate::config::runtime::LexicalPreferences;
use crate::tokens::Token;

pub use analyzer::{LexerError, LexicalAnalyzer, LexicalMetrics, TokenScanner};

/// Tokenize `source` with default preferences
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexerError> {
    LexicalAnalyzer::new().tokenize(source.as_bytes())
}

/// Tokenize with custom runtime preferences (limits remain compile-time)
pub fn tokenize_with_preferences(
    source: &[u8],
    preferences: LexicalPreferences,
) -> Result<(Vec<Token>, LexicalMetrics), LexerError> {
    let mut analyzer = LexicalAnalyzer::with_preferences(preferences);
    let tokens = analyzer.tokenize(source)?;
    Ok((tokens, analyzer.metrics().clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::TokenKind;

    #[test]
    fn test_tokenize() {
        let tokens = tokenize("void main();").unwrap();
        assert_eq!(tokens.len(), 6);
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[5].kind, TokenKind::Semicolon);
    }

    #[test]
    fn test_tokenize_with_preferences() {
        let (tokens, metrics) =
            tokenize_with_preferences(b"a+b", LexicalPreferences::default()).unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(metrics.operator_tokens, 1);
    }
}
