//! Separated-list productions shared by expressions, statements and declarations

use crate::grammar::builders::atomic::{guarded, match_kind, peek_kind, Parser};
use crate::grammar::builders::blocks::parse_initializer;
use crate::grammar::builders::expressions::{parse_additive, parse_expression, parse_parameter};
use crate::tokens::TokenKind;

/// item {"," item}
pub fn parse_separated(parser: &mut dyn Parser, item: fn(&mut dyn Parser) -> bool) -> bool {
    loop {
        if !item(parser) {
            return false;
        }
        if !match_kind(parser, TokenKind::Comma) {
            return true;
        }
    }
}

/// `open [item {"," item}] close`, the list being empty when `close` follows `open`
pub fn parse_delimited(
    parser: &mut dyn Parser,
    open: TokenKind,
    item: fn(&mut dyn Parser) -> bool,
    close: TokenKind,
) -> bool {
    if !match_kind(parser, open) {
        return false;
    }
    if !peek_kind(parser, close) && !parse_separated(parser, item) {
        return false;
    }
    match_kind(parser, close)
}

/// additive_list = additive {"," additive}
pub fn parse_additive_list(parser: &mut dyn Parser) -> bool {
    parse_separated(parser, parse_additive)
}

/// template_arguments = additive_list ">"
///
/// The opening `<` is matched by the caller. Arguments nest back into
/// primaries, so the list runs under the depth guard.
pub fn parse_template_arguments(parser: &mut dyn Parser) -> bool {
    guarded(parser, parse_closed_additive_list)
}

fn parse_closed_additive_list(parser: &mut dyn Parser) -> bool {
    parse_additive_list(parser) && match_kind(parser, TokenKind::Greater)
}

/// expression_list = expression {"," expression}
pub fn parse_expression_list(parser: &mut dyn Parser) -> bool {
    parse_separated(parser, parse_expression)
}

/// parameter_list = parameter {"," parameter}
pub fn parse_parameter_list(parser: &mut dyn Parser) -> bool {
    parse_separated(parser, parse_parameter)
}

/// initializer_list = initializer {"," initializer}
pub fn parse_initializer_list(parser: &mut dyn Parser) -> bool {
    parse_separated(parser, parse_initializer)
}

/// "(" [parameter_list] ")"
pub fn parse_parameters(parser: &mut dyn Parser) -> bool {
    parse_delimited(
        parser,
        TokenKind::OpenParen,
        parse_parameter,
        TokenKind::CloseParen,
    )
}

/// "(" [expression_list] ")"
pub fn parse_arguments(parser: &mut dyn Parser) -> bool {
    parse_delimited(
        parser,
        TokenKind::OpenParen,
        parse_expression,
        TokenKind::CloseParen,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::compile_time::syntax::MAX_PARSE_DEPTH;
    use crate::config::runtime::SyntaxPreferences;
    use crate::grammar::builders::atomic::at_end;
    use crate::syntax::EopParser;

    fn parser(source: &str) -> EopParser<'_> {
        EopParser::new(source.as_bytes(), SyntaxPreferences::default())
    }

    #[test]
    fn test_expression_list() {
        let mut p = parser("a, b + 1, f(x)");
        assert!(parse_expression_list(&mut p));
        assert!(at_end(&p));
    }

    #[test]
    fn test_trailing_comma_rejected() {
        let mut p = parser("a, b,");
        assert!(!parse_expression_list(&mut p));
    }

    #[test]
    fn test_empty_and_filled_parameters() {
        let mut p = parser("() (const T& x, int) (");
        assert!(parse_parameters(&mut p));
        assert!(parse_parameters(&mut p));
        assert!(!parse_parameters(&mut p));
    }

    #[test]
    fn test_template_arguments() {
        let mut p = parser("int, T * 2> x");
        assert!(parse_template_arguments(&mut p));
        assert_eq!(p.token_text(&p.current_token().unwrap()), b"x");

        let mut p = parser("int, int");
        assert!(!parse_template_arguments(&mut p));
    }

    #[test]
    fn test_template_arguments_respect_depth_guard() {
        let mut p = parser("int>");
        for _ in 0..MAX_PARSE_DEPTH {
            assert!(p.enter());
        }
        assert!(!parse_template_arguments(&mut p));
        assert!(p.depth_exceeded());
    }

    #[test]
    fn test_arguments_require_close() {
        let mut p = parser("(a, b");
        assert!(!parse_arguments(&mut p));
    }
}
