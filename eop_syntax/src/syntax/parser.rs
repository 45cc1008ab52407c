//! Recognizer state: cursor over significant tokens, symbol table and
//! the recursion guard
//!
//! The grammar builders only see this through the [`Parser`] trait.

use crate::config::compile_time::syntax::MAX_PARSE_DEPTH;
use crate::config::runtime::SyntaxPreferences;
use crate::grammar::builders::{self, Checkpoint, Parser};
use crate::logging::codes;
use crate::symbols::SymbolTable;
use crate::tokens::{
    significant_tokens, significant_tokens_at, SignificantTokens, Token, TokenSequence,
};
use crate::{log_debug, log_error};

/// Recursive-descent recognizer over one source buffer
pub struct EopParser<'src> {
    source: &'src [u8],
    tokens: SignificantTokens<'src>,
    symbols: SymbolTable,
    preferences: SyntaxPreferences,
    depth: usize,
    depth_exceeded: bool,
}

impl<'src> EopParser<'src> {
    pub fn new(source: &'src [u8], preferences: SyntaxPreferences) -> Self {
        log_debug!("Creating EOP parser", "bytes" => source.len());

        Self {
            source,
            tokens: significant_tokens(source),
            symbols: SymbolTable::new(),
            preferences,
            depth: 0,
            depth_exceeded: false,
        }
    }

    /// Recognize the whole buffer as a program.
    ///
    /// Starts over from the first token with a fresh symbol table, so calling
    /// this twice yields the same answer.
    pub fn parse_program(&mut self) -> bool {
        self.tokens = significant_tokens(self.source);
        self.depth = 0;
        self.depth_exceeded = false;

        let accepted = builders::parse_program(self);

        log_debug!("Program recognition finished",
            "accepted" => accepted,
            "position" => self.position(),
            "depth_exceeded" => self.depth_exceeded
        );
        accepted && !self.depth_exceeded
    }

    pub fn source(&self) -> &'src [u8] {
        self.source
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Byte offset of the cursor
    pub fn position(&self) -> usize {
        self.tokens.position()
    }

    pub fn current_token(&self) -> Option<Token> {
        self.tokens.current()
    }

    pub fn is_exhausted(&self) -> bool {
        self.tokens.is_exhausted()
    }

    /// Whether the depth guard fired during the last parse
    pub fn depth_exceeded(&self) -> bool {
        self.depth_exceeded
    }

    pub fn preferences(&self) -> &SyntaxPreferences {
        &self.preferences
    }
}

impl Parser for EopParser<'_> {
    fn current_token(&self) -> Option<Token> {
        self.tokens.current()
    }

    fn advance(&mut self) {
        self.tokens.advance();
    }

    fn token_text(&self, token: &Token) -> &[u8] {
        token.text(self.source)
    }

    fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            offset: self.tokens.position(),
        }
    }

    fn restore(&mut self, checkpoint: Checkpoint) {
        self.tokens = significant_tokens_at(self.source, checkpoint.offset);
    }

    fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    fn symbols_mut(&mut self) -> &mut SymbolTable {
        &mut self.symbols
    }

    fn enter(&mut self) -> bool {
        if self.depth_exceeded {
            return false;
        }
        if self.depth >= MAX_PARSE_DEPTH {
            self.depth_exceeded = true;
            log_error!(
                codes::syntax::MAX_RECURSION_DEPTH,
                "Maximum parse depth exceeded",
                "offset" => self.tokens.position(),
                "max_depth" => MAX_PARSE_DEPTH
            );
            return false;
        }
        self.depth += 1;
        true
    }

    fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn preferences(&self) -> &SyntaxPreferences {
        &self.preferences
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::SymbolKind;
    use crate::tokens::TokenKind;

    fn parser(source: &str) -> EopParser<'_> {
        EopParser::new(source.as_bytes(), SyntaxPreferences::default())
    }

    #[test]
    fn test_cursor_skips_trivia() {
        let mut p = parser("  // lead\n int /* not a comment */");
        assert_eq!(p.position(), 11);
        assert_eq!(p.token_text(&p.current_token().unwrap()), b"int");

        p.advance();
        assert_eq!(p.current_token().unwrap().kind, TokenKind::ForwardSlash);
    }

    #[test]
    fn test_checkpoint_restore() {
        let mut p = parser("a b c");
        p.advance();
        let saved = p.checkpoint();
        p.advance();
        p.advance();
        assert!(p.is_exhausted());

        p.restore(saved);
        assert_eq!(p.position(), 2);
        assert_eq!(p.checkpoint(), saved);
    }

    #[test]
    fn test_restore_at_end() {
        let mut p = parser("x  ");
        p.advance();
        let end = p.checkpoint();
        assert_eq!(end.offset, 3);

        p.restore(Checkpoint { offset: 0 });
        assert!(!p.is_exhausted());
        p.restore(end);
        assert!(p.is_exhausted());
    }

    #[test]
    fn test_depth_guard_latches() {
        let mut p = parser("");
        for _ in 0..MAX_PARSE_DEPTH {
            assert!(p.enter());
        }
        assert!(!p.enter());
        assert!(p.depth_exceeded());

        p.leave();
        assert!(!p.enter());
    }

    #[test]
    fn test_parse_program_resets_state() {
        let mut p = parser("struct pair; int main() { }");
        assert!(p.parse_program());
        assert_eq!(
            p.symbols().lookup("main").map(|symbol| symbol.kind),
            Some(SymbolKind::Procedure)
        );

        assert!(p.parse_program());
        assert_eq!(p.symbols().depth(), 1);
        assert!(p.is_exhausted());
    }

    #[test]
    fn test_parse_program_clears_depth_flag() {
        let mut p = parser("void f();");
        for _ in 0..=MAX_PARSE_DEPTH {
            p.enter();
        }
        assert!(p.depth_exceeded());

        assert!(p.parse_program());
        assert!(!p.depth_exceeded());
    }
}
