//! Token scanner and whole-buffer lexical analyzer
//!
//! [`TokenScanner`] is the lazy cursor the parser runs on: it produces each
//! token on demand directly from the byte buffer and never fails. Every byte
//! of input lands in exactly one token, whitespace and comments included.
//!
//! [`LexicalAnalyzer`] drives a scanner over a whole buffer, enforcing the
//! compile-time lexical limits and collecting [`LexicalMetrics`].

use super::classify::{is_digit, is_identifier_continue, is_identifier_start};
use crate::config::compile_time::lexical::*;
use crate::config::runtime::LexicalPreferences;
use crate::logging::codes;
use crate::tokens::{Token, TokenClass, TokenKind, TokenSequence};
use crate::utils::Span;
use crate::{log_debug, log_error, log_success};
use std::fmt;

/// Lexical analysis errors raised by the compile-time limits
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexerError {
    #[error("Identifier too long: {length} bytes at offset {offset} (max {MAX_IDENTIFIER_LENGTH})")]
    IdentifierTooLong { length: usize, offset: usize },

    #[error("Too many tokens: {count} (max {MAX_TOKEN_COUNT})")]
    TooManyTokens { count: usize },
}

impl LexerError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            LexerError::IdentifierTooLong { .. } => codes::lexical::IDENTIFIER_TOO_LONG,
            LexerError::TooManyTokens { .. } => codes::lexical::TOO_MANY_TOKENS,
        }
    }
}

/// Lazy forward scanner over a byte buffer.
///
/// The exhausted scanner equals [`TokenScanner::end_of`] the same buffer.
/// Scanners compare by position only.
#[derive(Clone, Copy)]
pub struct TokenScanner<'src> {
    source: &'src [u8],
    current: Option<Token>,
}

impl<'src> TokenScanner<'src> {
    pub fn new(source: &'src [u8]) -> Self {
        Self::resume_at(source, 0)
    }

    /// Exhausted scanner over `source`
    pub fn end_of(source: &'src [u8]) -> Self {
        Self {
            source,
            current: None,
        }
    }

    /// Scanner whose first token starts at `offset`, which must be a token boundary
    pub fn resume_at(source: &'src [u8], offset: usize) -> Self {
        Self {
            source,
            current: scan_token(source, offset),
        }
    }

    pub fn source(&self) -> &'src [u8] {
        self.source
    }
}

impl TokenSequence for TokenScanner<'_> {
    fn current(&self) -> Option<Token> {
        self.current
    }

    fn advance(&mut self) {
        if let Some(token) = self.current {
            self.current = scan_token(self.source, token.span.end);
        }
    }

    fn position(&self) -> usize {
        match self.current {
            Some(token) => token.span.start,
            None => self.source.len(),
        }
    }
}

impl Iterator for TokenScanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.current?;
        self.advance();
        Some(token)
    }
}

impl PartialEq for TokenScanner<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.position() == other.position()
    }
}

impl Eq for TokenScanner<'_> {}

impl fmt::Debug for TokenScanner<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenScanner")
            .field("position", &self.position())
            .field("end", &self.source.len())
            .field("current", &self.current.map(|t| t.kind))
            .finish()
    }
}

/// Offset of the first byte at or after `from` failing `accept`
fn scan_while(source: &[u8], from: usize, accept: impl Fn(u8) -> bool) -> usize {
    source[from.min(source.len())..]
        .iter()
        .position(|&byte| !accept(byte))
        .map_or(source.len(), |length| from + length)
}

/// Scan the single token starting at `start`, `None` at end of input
fn scan_token(source: &[u8], start: usize) -> Option<Token> {
    let &byte = source.get(start)?;
    let next = source.get(start + 1).copied();

    // One- or two-byte operator chosen by a single byte of lookahead
    let pair = |second: u8, double: TokenKind, single: TokenKind| {
        if next == Some(second) {
            (double, start + 2)
        } else {
            (single, start + 1)
        }
    };

    let (kind, end) = match byte {
        b if is_identifier_start(b) => (
            TokenKind::Identifier,
            scan_while(source, start + 1, is_identifier_continue),
        ),
        b if is_digit(b) => {
            let digits_end = scan_while(source, start + 1, is_digit);
            if source.get(digits_end) == Some(&b'.') {
                (TokenKind::Real, scan_while(source, digits_end + 1, is_digit))
            } else {
                (TokenKind::Integer, digits_end)
            }
        }
        b'.' => match next {
            Some(b) if is_digit(b) => (TokenKind::Real, scan_while(source, start + 1, is_digit)),
            _ => (TokenKind::Dot, start + 1),
        },
        b'/' => match next {
            Some(b'/') => (
                TokenKind::Comment,
                scan_while(source, start + 2, |b| b != b'\n'),
            ),
            _ => (TokenKind::ForwardSlash, start + 1),
        },
        b'&' => pair(b'&', TokenKind::DoubleAmpersand, TokenKind::Ampersand),
        b'|' => pair(b'|', TokenKind::DoublePipe, TokenKind::Pipe),
        b'=' => pair(b'=', TokenKind::DoubleEquals, TokenKind::Equals),
        b'!' => pair(b'=', TokenKind::BangEquals, TokenKind::Bang),
        b'<' => pair(b'=', TokenKind::LessEquals, TokenKind::Less),
        b'>' => pair(b'=', TokenKind::GreaterEquals, TokenKind::Greater),
        other => {
            let kind = match other {
                b'(' => TokenKind::OpenParen,
                b')' => TokenKind::CloseParen,
                b'[' => TokenKind::OpenBracket,
                b']' => TokenKind::CloseBracket,
                b'{' => TokenKind::OpenBrace,
                b'}' => TokenKind::CloseBrace,
                b',' => TokenKind::Comma,
                b';' => TokenKind::Semicolon,
                b'-' => TokenKind::Minus,
                b'*' => TokenKind::Star,
                b'%' => TokenKind::Percent,
                b'+' => TokenKind::Plus,
                b':' => TokenKind::Colon,
                b'~' => TokenKind::Tilde,
                b' ' => TokenKind::Space,
                b'\n' => TokenKind::Newline,
                b'\t' => TokenKind::Tab,
                _ => TokenKind::Invalid,
            };
            (kind, start + 1)
        }
    };

    Some(Token::new(kind, Span::new(start, end)))
}

/// Token counts per class
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LexicalMetrics {
    pub total_tokens: usize,
    pub identifier_tokens: usize,
    pub literal_tokens: usize,
    pub punctuation_tokens: usize,
    pub operator_tokens: usize,
    pub comment_count: usize,
    pub invalid_bytes: usize,
    pub max_identifier_length: usize,

    // Only counted when trivia is included
    pub whitespace_tokens: usize,
}

impl LexicalMetrics {
    pub(crate) fn record_token(&mut self, token: &Token, preferences: &LexicalPreferences) {
        if !token.is_significant() && !preferences.include_trivia_in_counts {
            return;
        }

        self.total_tokens += 1;

        match token.kind.token_class() {
            TokenClass::Identifier => {
                self.identifier_tokens += 1;
                self.max_identifier_length = self.max_identifier_length.max(token.span.len());
            }
            TokenClass::Literal => self.literal_tokens += 1,
            TokenClass::Punctuation => self.punctuation_tokens += 1,
            TokenClass::Operation => self.operator_tokens += 1,
            TokenClass::Whitespace => self.whitespace_tokens += 1,
            TokenClass::Special => {
                if token.kind == TokenKind::Comment {
                    self.comment_count += 1;
                } else {
                    self.invalid_bytes += 1;
                }
            }
        }
    }
}

/// Whole-buffer tokenizer with limits and metrics
pub struct LexicalAnalyzer {
    metrics: LexicalMetrics,
    preferences: LexicalPreferences,
}

impl LexicalAnalyzer {
    pub fn new() -> Self {
        Self::with_preferences(LexicalPreferences::default())
    }

    pub fn with_preferences(preferences: LexicalPreferences) -> Self {
        Self {
            metrics: LexicalMetrics::default(),
            preferences,
        }
    }

    /// Collect every token of `source`, trivia included
    pub fn tokenize(&mut self, source: &[u8]) -> Result<Vec<Token>, LexerError> {
        self.metrics = LexicalMetrics::default();

        log_debug!("Starting lexical analysis",
            "bytes" => source.len(),
            "max_tokens_allowed" => MAX_TOKEN_COUNT
        );

        let mut tokens = Vec::new();

        for token in TokenScanner::new(source) {
            if tokens.len() >= MAX_TOKEN_COUNT {
                let error = LexerError::TooManyTokens {
                    count: tokens.len() + 1,
                };
                log_error!(error.error_code(), "Token limit exceeded",
                    span = token.span,
                    "limit" => MAX_TOKEN_COUNT
                );
                return Err(error);
            }

            if token.kind == TokenKind::Identifier && token.span.len() > MAX_IDENTIFIER_LENGTH {
                let error = LexerError::IdentifierTooLong {
                    length: token.span.len(),
                    offset: token.span.start,
                };
                log_error!(error.error_code(), &error.to_string(), span = token.span);
                return Err(error);
            }

            if token.kind == TokenKind::Invalid {
                log_debug!("Unrecognized byte",
                    "offset" => token.span.start,
                    "byte" => format!("{:#04x}", source[token.span.start])
                );
            }

            if self.preferences.collect_metrics {
                self.metrics.record_token(&token, &self.preferences);
            }

            tokens.push(token);
        }

        log_success!(codes::success::TOKENIZATION_COMPLETE, "Tokenization completed",
            "tokens" => tokens.len(),
            "counted" => self.metrics.total_tokens,
            "invalid_bytes" => self.metrics.invalid_bytes
        );

        Ok(tokens)
    }

    pub fn metrics(&self) -> &LexicalMetrics {
        &self.metrics
    }

    pub fn preferences(&self) -> &LexicalPreferences {
        &self.preferences
    }

    pub fn set_preferences(&mut self, preferences: LexicalPreferences) {
        self.preferences = preferences;
    }
}

impl Default for LexicalAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn single(source: &str) -> Token {
        let mut scanner = TokenScanner::new(source.as_bytes());
        let token = scanner.next().unwrap();
        assert_eq!(scanner, TokenScanner::end_of(source.as_bytes()));
        token
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        TokenScanner::new(source.as_bytes()).map(|t| t.kind).collect()
    }

    #[test]
    fn test_identifier() {
        let token = single("_an0");
        assert_eq!(token.kind, TokenKind::Identifier);
        assert_eq!(token.span, Span::new(0, 4));
    }

    #[test]
    fn test_numbers() {
        assert_eq!(single("23428").kind, TokenKind::Integer);
        assert_eq!(single("9874.34907").kind, TokenKind::Real);
        assert_eq!(single("3984753.").kind, TokenKind::Real);
        assert_eq!(single(".39753").kind, TokenKind::Real);
    }

    #[test]
    fn test_comment_stops_before_newline() {
        assert_eq!(single("// Hello").kind, TokenKind::Comment);
        assert_eq!(
            kinds("// x\ny"),
            vec![TokenKind::Comment, TokenKind::Newline, TokenKind::Identifier]
        );
    }

    #[test]
    fn test_unknown_bytes_are_invalid() {
        assert_eq!(single("?").kind, TokenKind::Invalid);
        assert_eq!(single("\r").kind, TokenKind::Invalid);

        // Multi-byte UTF-8 yields one invalid token per byte
        assert_eq!(kinds("é"), vec![TokenKind::Invalid, TokenKind::Invalid]);
    }

    #[test]
    fn test_one_and_two_byte_operators() {
        assert_eq!(
            kinds("&&&||===!=!<=<>=>/"),
            vec![
                TokenKind::DoubleAmpersand,
                TokenKind::Ampersand,
                TokenKind::DoublePipe,
                TokenKind::DoubleEquals,
                TokenKind::Equals,
                TokenKind::BangEquals,
                TokenKind::Bang,
                TokenKind::LessEquals,
                TokenKind::Less,
                TokenKind::GreaterEquals,
                TokenKind::Greater,
                TokenKind::ForwardSlash,
            ]
        );
    }

    #[test]
    fn test_dot_versus_real() {
        assert_eq!(
            kinds("a.b .5"),
            vec![
                TokenKind::Identifier,
                TokenKind::Dot,
                TokenKind::Identifier,
                TokenKind::Space,
                TokenKind::Real,
            ]
        );
    }

    #[test]
    fn test_spans_partition_input() {
        let source = "template <typename T>\n\tT max(T a, T b) { return a < b ? b : a; } // done";
        let mut rebuilt = Vec::new();
        let mut expected_start = 0;

        for token in TokenScanner::new(source.as_bytes()) {
            assert_eq!(token.span.start, expected_start);
            assert!(!token.span.is_empty());
            rebuilt.extend_from_slice(token.text(source.as_bytes()));
            expected_start = token.span.end;
        }

        assert_eq!(rebuilt, source.as_bytes());
    }

    #[test]
    fn test_empty_input_is_exhausted() {
        let scanner = TokenScanner::new(b"");
        assert!(scanner.is_exhausted());
        assert_eq!(scanner, TokenScanner::end_of(b""));
    }

    #[test]
    fn test_resume_at_boundary() {
        let source = b"int x;";
        let scanner = TokenScanner::resume_at(source, 4);
        assert_eq!(
            scanner.current(),
            Some(Token::new(TokenKind::Identifier, Span::new(4, 5)))
        );
        assert_eq!(scanner.position(), 4);
    }

    #[test]
    fn test_analyzer_metrics() {
        let mut analyzer = LexicalAnalyzer::new();
        let tokens = analyzer.tokenize(b"int x = 5; // c\n?").unwrap();

        assert_eq!(tokens.len(), 12);
        let metrics = analyzer.metrics();
        assert_eq!(metrics.identifier_tokens, 2);
        assert_eq!(metrics.literal_tokens, 1);
        assert_eq!(metrics.operator_tokens, 1);
        assert_eq!(metrics.punctuation_tokens, 1);
        assert_eq!(metrics.invalid_bytes, 1);
        assert_eq!(metrics.whitespace_tokens, 0);
        assert_eq!(metrics.comment_count, 0);
        assert_eq!(metrics.total_tokens, 6);
    }

    #[test]
    fn test_analyzer_counts_trivia_when_requested() {
        let mut analyzer = LexicalAnalyzer::with_preferences(LexicalPreferences {
            collect_metrics: true,
            include_trivia_in_counts: true,
        });
        analyzer.tokenize(b"a // c\n").unwrap();

        let metrics = analyzer.metrics();
        assert_eq!(metrics.total_tokens, 4);
        assert_eq!(metrics.whitespace_tokens, 2);
        assert_eq!(metrics.comment_count, 1);
    }

    #[test]
    fn test_metrics_disabled() {
        let mut analyzer = LexicalAnalyzer::with_preferences(LexicalPreferences {
            collect_metrics: false,
            include_trivia_in_counts: false,
        });
        let tokens = analyzer.tokenize(b"a b").unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(analyzer.metrics(), &LexicalMetrics::default());
    }

    #[test]
    fn test_identifier_length_limit() {
        let long_name = "x".repeat(MAX_IDENTIFIER_LENGTH + 1);
        let source = format!("int {};", long_name);
        let result = LexicalAnalyzer::new().tokenize(source.as_bytes());

        assert_matches!(
            result,
            Err(LexerError::IdentifierTooLong { offset: 4, length }) if length == MAX_IDENTIFIER_LENGTH + 1
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            LexerError::TooManyTokens { count: 1 }.error_code(),
            codes::lexical::TOO_MANY_TOKENS
        );
    }
}
