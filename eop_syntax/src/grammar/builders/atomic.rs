//! Parser interface and single-token productions
//!
//! Every builder is a free function over `&mut dyn Parser` returning whether
//! the production matched. A builder that returns `false` may leave the cursor
//! anywhere; callers that try alternatives wrap them in [`attempt`], which
//! restores the cursor on rejection.

use crate::config::runtime::SyntaxPreferences;
use crate::grammar::keywords::Keyword;
use crate::symbols::{SymbolKind, SymbolTable};
use crate::tokens::{Token, TokenKind};

/// Saved cursor position. Restoring rescans from `offset`, the byte start of
/// the token the cursor stood on (or end of input).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    pub offset: usize,
}

/// Cursor, symbol table and preferences that builders operate on
pub trait Parser {
    // === NAVIGATION ===
    fn current_token(&self) -> Option<Token>;
    fn advance(&mut self);

    /// Source bytes of `token`
    fn token_text(&self, token: &Token) -> &[u8];

    // === BACKTRACKING ===
    fn checkpoint(&self) -> Checkpoint;
    fn restore(&mut self, checkpoint: Checkpoint);

    // === NAME RESOLUTION ===
    fn symbols(&self) -> &SymbolTable;
    fn symbols_mut(&mut self) -> &mut SymbolTable;

    // === RECURSION GUARD ===
    /// Enter a recursive production. Returns `false` once the depth limit is hit.
    fn enter(&mut self) -> bool;
    fn leave(&mut self);

    fn preferences(&self) -> &SyntaxPreferences;
}

/// Run `production`, restoring the cursor if it rejects
pub fn attempt<F>(parser: &mut dyn Parser, production: F) -> bool
where
    F: FnOnce(&mut dyn Parser) -> bool,
{
    let start = parser.checkpoint();
    if production(&mut *parser) {
        true
    } else {
        parser.restore(start);
        false
    }
}

/// Run a recursive production under the depth guard
pub fn guarded(parser: &mut dyn Parser, production: fn(&mut dyn Parser) -> bool) -> bool {
    if !parser.enter() {
        return false;
    }
    let accepted = production(&mut *parser);
    parser.leave();
    accepted
}

pub fn at_end(parser: &dyn Parser) -> bool {
    parser.current_token().is_none()
}

pub fn peek_kind(parser: &dyn Parser, kind: TokenKind) -> bool {
    parser.current_token().is_some_and(|token| token.kind == kind)
}

/// Current token is an identifier spelled `text`
pub fn peek_text(parser: &dyn Parser, text: &[u8]) -> bool {
    match parser.current_token() {
        Some(token) if token.kind == TokenKind::Identifier => parser.token_text(&token) == text,
        _ => false,
    }
}

pub fn peek_keyword(parser: &dyn Parser, keyword: Keyword) -> bool {
    peek_text(parser, keyword.as_str().as_bytes())
}

pub fn match_kind(parser: &mut dyn Parser, kind: TokenKind) -> bool {
    if peek_kind(parser, kind) {
        parser.advance();
        true
    } else {
        false
    }
}

pub fn match_text(parser: &mut dyn Parser, text: &[u8]) -> bool {
    if peek_text(parser, text) {
        parser.advance();
        true
    } else {
        false
    }
}

pub fn match_keyword(parser: &mut dyn Parser, keyword: Keyword) -> bool {
    match_text(parser, keyword.as_str().as_bytes())
}

/// Consume the current token if its kind is one of `kinds`
pub fn match_any_kind(parser: &mut dyn Parser, kinds: &[TokenKind]) -> bool {
    match parser.current_token() {
        Some(token) if kinds.contains(&token.kind) => {
            parser.advance();
            true
        }
        _ => false,
    }
}

/// Name of the current identifier token, if any
pub fn current_identifier(parser: &dyn Parser) -> Option<String> {
    let token = parser.current_token()?;
    if token.kind != TokenKind::Identifier {
        return None;
    }
    // Identifier tokens only ever cover ASCII bytes
    std::str::from_utf8(parser.token_text(&token))
        .ok()
        .map(str::to_string)
}

/// Consume an identifier and declare it in the innermost scope
pub fn declare_identifier(parser: &mut dyn Parser, kind: SymbolKind) -> Option<String> {
    let name = current_identifier(parser)?;
    parser.symbols_mut().declare(&name, kind);
    parser.advance();
    Some(name)
}

/// Current identifier resolves to a type or procedure
pub fn peek_known_name(parser: &dyn Parser) -> bool {
    let Some(token) = parser.current_token() else {
        return false;
    };
    if token.kind != TokenKind::Identifier {
        return false;
    }

    std::str::from_utf8(parser.token_text(&token))
        .ok()
        .and_then(|name| parser.symbols().lookup(name))
        .is_some_and(|symbol| matches!(symbol.kind, SymbolKind::Type | SymbolKind::Procedure))
}

/// literal = "true" | "false" | integer | real
pub fn parse_literal(parser: &mut dyn Parser) -> bool {
    match_keyword(parser, Keyword::True)
        || match_keyword(parser, Keyword::False)
        || match_kind(parser, TokenKind::Integer)
        || match_kind(parser, TokenKind::Real)
}

/// basic_type = "bool" | "int" | "double"
pub fn parse_basic_type(parser: &mut dyn Parser) -> bool {
    match_keyword(parser, Keyword::Bool)
        || match_keyword(parser, Keyword::Int)
        || match_keyword(parser, Keyword::Double)
}

/// Overloadable operator after `operator` in a procedure name
pub fn parse_overloadable_operator(parser: &mut dyn Parser) -> bool {
    match_any_kind(
        parser,
        &[
            TokenKind::DoubleEquals,
            TokenKind::Less,
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Star,
            TokenKind::ForwardSlash,
            TokenKind::Percent,
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::EopParser;

    fn parser(source: &str) -> EopParser<'_> {
        EopParser::new(source.as_bytes(), SyntaxPreferences::default())
    }

    #[test]
    fn test_match_keyword_requires_whole_word() {
        let mut p = parser("structure struct");
        assert!(!match_keyword(&mut p, Keyword::Struct));
        assert!(match_kind(&mut p, TokenKind::Identifier));
        assert!(match_keyword(&mut p, Keyword::Struct));
        assert!(at_end(&p));
    }

    #[test]
    fn test_attempt_restores_on_reject() {
        let mut p = parser("a b c");
        let start = p.checkpoint();

        let accepted = attempt(&mut p, |p| {
            match_kind(p, TokenKind::Identifier) && match_kind(p, TokenKind::Semicolon)
        });
        assert!(!accepted);
        assert_eq!(p.checkpoint(), start);

        assert!(attempt(&mut p, |p| match_kind(p, TokenKind::Identifier)));
        assert_ne!(p.checkpoint(), start);
    }

    #[test]
    fn test_literals_and_basic_types() {
        let mut p = parser("true 1 2.5 false double");
        for _ in 0..4 {
            assert!(parse_literal(&mut p));
        }
        assert!(!parse_literal(&mut p));
        assert!(parse_basic_type(&mut p));
    }

    #[test]
    fn test_declare_and_peek_known_name() {
        let mut p = parser("pair pair");
        assert!(!peek_known_name(&p));
        assert_eq!(
            declare_identifier(&mut p, SymbolKind::Type).as_deref(),
            Some("pair")
        );
        assert!(peek_known_name(&p));
    }

    #[test]
    fn test_overloadable_operators() {
        let mut p = parser("== < + - * / % =");
        for _ in 0..7 {
            assert!(parse_overloadable_operator(&mut p));
        }
        assert!(!parse_overloadable_operator(&mut p));
    }
}
