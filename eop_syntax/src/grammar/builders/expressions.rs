//! Expression productions
//!
//! Precedence, lowest first: disjunction, conjunction, equality, relational,
//! additive, multiplicative, prefix, postfix, primary. Each binary level is a
//! left-to-right loop over the next level.

use crate::grammar::builders::atomic::{
    guarded, match_any_kind, match_keyword, match_kind, parse_basic_type, parse_literal,
    peek_kind, peek_known_name, Parser,
};
use crate::grammar::builders::helpers::{parse_arguments, parse_template_arguments};
use crate::grammar::keywords::Keyword;
use crate::tokens::TokenKind;

const DISJUNCTION_OPERATORS: &[TokenKind] = &[TokenKind::DoublePipe];
const CONJUNCTION_OPERATORS: &[TokenKind] = &[TokenKind::DoubleAmpersand];
const EQUALITY_OPERATORS: &[TokenKind] = &[TokenKind::DoubleEquals, TokenKind::BangEquals];
const RELATIONAL_OPERATORS: &[TokenKind] = &[
    TokenKind::Less,
    TokenKind::Greater,
    TokenKind::LessEquals,
    TokenKind::GreaterEquals,
];
const ADDITIVE_OPERATORS: &[TokenKind] = &[TokenKind::Plus, TokenKind::Minus];
const MULTIPLICATIVE_OPERATORS: &[TokenKind] = &[
    TokenKind::Star,
    TokenKind::ForwardSlash,
    TokenKind::Percent,
];

/// operand {operator operand}
fn parse_binary_level(
    parser: &mut dyn Parser,
    operand: fn(&mut dyn Parser) -> bool,
    operators: &[TokenKind],
) -> bool {
    if !operand(parser) {
        return false;
    }
    while match_any_kind(parser, operators) {
        if !operand(parser) {
            return false;
        }
    }
    true
}

/// expression = disjunction
pub fn parse_expression(parser: &mut dyn Parser) -> bool {
    guarded(parser, parse_disjunction)
}

pub fn parse_disjunction(parser: &mut dyn Parser) -> bool {
    parse_binary_level(parser, parse_conjunction, DISJUNCTION_OPERATORS)
}

pub fn parse_conjunction(parser: &mut dyn Parser) -> bool {
    parse_binary_level(parser, parse_equality, CONJUNCTION_OPERATORS)
}

pub fn parse_equality(parser: &mut dyn Parser) -> bool {
    parse_binary_level(parser, parse_relational, EQUALITY_OPERATORS)
}

pub fn parse_relational(parser: &mut dyn Parser) -> bool {
    parse_binary_level(parser, parse_additive, RELATIONAL_OPERATORS)
}

pub fn parse_additive(parser: &mut dyn Parser) -> bool {
    parse_binary_level(parser, parse_multiplicative, ADDITIVE_OPERATORS)
}

pub fn parse_multiplicative(parser: &mut dyn Parser) -> bool {
    parse_binary_level(parser, parse_prefix, MULTIPLICATIVE_OPERATORS)
}

/// prefix = ["-" | "!" | "const"] postfix
pub fn parse_prefix(parser: &mut dyn Parser) -> bool {
    if match_kind(parser, TokenKind::Minus)
        || match_kind(parser, TokenKind::Bang)
        || match_keyword(parser, Keyword::Const)
    {}
    parse_postfix(parser)
}

/// postfix = primary {"." identifier | "(" [expression_list] ")" | "[" expression "]" | "&"}
pub fn parse_postfix(parser: &mut dyn Parser) -> bool {
    if !parse_primary(parser) {
        return false;
    }

    loop {
        let accepted = if match_kind(parser, TokenKind::Dot) {
            match_kind(parser, TokenKind::Identifier)
        } else if peek_kind(parser, TokenKind::OpenParen) {
            parse_arguments(parser)
        } else if match_kind(parser, TokenKind::OpenBracket) {
            parse_expression(parser) && match_kind(parser, TokenKind::CloseBracket)
        } else if match_kind(parser, TokenKind::Ampersand) {
            true
        } else {
            return true;
        };

        if !accepted {
            return false;
        }
    }
}

/// primary = template_name | literal | "(" expression ")" | basic_type | "typename" | identifier
///
/// An identifier naming a known type or procedure commits to the template
/// name alternative: when `<` follows, the argument list must parse.
pub fn parse_primary(parser: &mut dyn Parser) -> bool {
    if peek_known_name(parser) {
        parser.advance();
        if match_kind(parser, TokenKind::Less) {
            return parse_template_arguments(parser);
        }
        return true;
    }

    if parse_literal(parser) {
        return true;
    }

    if match_kind(parser, TokenKind::OpenParen) {
        return parse_expression(parser) && match_kind(parser, TokenKind::CloseParen);
    }

    parse_basic_type(parser)
        || match_keyword(parser, Keyword::Typename)
        || match_kind(parser, TokenKind::Identifier)
}

/// parameter = expression [identifier]
pub fn parse_parameter(parser: &mut dyn Parser) -> bool {
    if !parse_expression(parser) {
        return false;
    }
    match_kind(parser, TokenKind::Identifier);
    true
}
