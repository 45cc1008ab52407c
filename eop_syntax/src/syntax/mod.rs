//! Syntax recognition - accept or reject a whole EOP source buffer
//!
//! [`parse`] and [`parse_bytes`] answer the yes/no question. [`recognize`]
//! gives the same answer but reports where recognition stopped, and logs the
//! outcome through the global logger.

mod error;
mod parser;

pub use error::{SyntaxError, SyntaxResult};
pub use parser::EopParser;

use crate::config::compile_time::syntax::MAX_PARSE_DEPTH;
use crate::config::runtime::SyntaxPreferences;
use crate::logging::codes;
use crate::tokens::TokenKind;
use crate::utils::{SourceMap, Span};
use crate::{log_debug, log_error, log_success};

/// Whether `source` is a syntactically valid program
pub fn parse(source: &str) -> bool {
    parse_bytes(source.as_bytes())
}

/// Byte-buffer form of [`parse`]. Non-ASCII bytes lex as invalid tokens.
pub fn parse_bytes(source: &[u8]) -> bool {
    EopParser::new(source, SyntaxPreferences::default()).parse_program()
}

/// Recognize `source` with default preferences
pub fn recognize(source: &str) -> SyntaxResult<()> {
    recognize_with_preferences(source.as_bytes(), SyntaxPreferences::default())
}

/// Recognize `source`, reporting the first unconsumed token on rejection
pub fn recognize_with_preferences(
    source: &[u8],
    preferences: SyntaxPreferences,
) -> SyntaxResult<()> {
    let log_rejections = preferences.log_rejections;
    let mut parser = EopParser::new(source, preferences);

    if parser.parse_program() {
        log_success!(
            codes::success::SYNTAX_VALIDATION_PASSED,
            "Input accepted",
            "bytes" => source.len(),
            "global_symbols" => parser.symbols().global_symbols().count()
        );
        return Ok(());
    }

    let offset = parser.position();
    let position = SourceMap::new(source).position_at(offset);

    // Depth overflow is logged by the parser when it happens
    if parser.depth_exceeded() {
        return Err(SyntaxError::MaxRecursionDepth {
            offset,
            position,
            max_depth: MAX_PARSE_DEPTH,
        });
    }

    let current = parser.current_token();
    let found = match current {
        Some(token) => format!("'{}'", String::from_utf8_lossy(token.text(source))),
        None => SyntaxError::END_OF_INPUT.to_string(),
    };
    let error = SyntaxError::Rejected {
        offset,
        position,
        found,
    };

    if log_rejections {
        let code = match current {
            Some(token) if token.kind == TokenKind::Invalid => codes::lexical::INVALID_CHARACTER,
            _ => error.error_code(),
        };
        let span = current.map_or_else(|| Span::empty_at(offset), |token| token.span);
        log_error!(code, "Input rejected",
            span = span,
            "position" => position,
            "error" => &error
        );
    } else {
        log_debug!("Input rejected", "offset" => offset);
    }

    Err(error)
}
