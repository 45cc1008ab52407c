//! Statement productions
//!
//! A statement is tried as each alternative in turn from the same starting
//! point; compound blocks open one symbol-table scope for their duration.

use crate::grammar::builders::atomic::{
    attempt, declare_identifier, guarded, match_keyword, match_kind, peek_keyword, peek_kind,
    Parser,
};
use crate::grammar::builders::expressions::parse_expression;
use crate::grammar::builders::helpers::parse_expression_list;
use crate::grammar::keywords::Keyword;
use crate::symbols::SymbolKind;
use crate::tokens::TokenKind;

/// statement = [identifier ":"] (simple | assignment | construction | control | typedef)
pub fn parse_statement(parser: &mut dyn Parser) -> bool {
    guarded(parser, parse_statement_alternatives)
}

fn parse_statement_alternatives(parser: &mut dyn Parser) -> bool {
    if attempt(parser, parse_label) {
        return parse_statement(parser);
    }

    attempt(parser, parse_simple)
        || attempt(parser, parse_assignment)
        || attempt(parser, parse_construction)
        || attempt(parser, parse_control)
        || parse_typedef(parser)
}

fn parse_label(parser: &mut dyn Parser) -> bool {
    match_kind(parser, TokenKind::Identifier) && match_kind(parser, TokenKind::Colon)
}

/// simple = expression ";"
pub fn parse_simple(parser: &mut dyn Parser) -> bool {
    parse_expression(parser) && match_kind(parser, TokenKind::Semicolon)
}

/// assignment = expression "=" expression ";"
pub fn parse_assignment(parser: &mut dyn Parser) -> bool {
    parse_expression(parser)
        && match_kind(parser, TokenKind::Equals)
        && parse_expression(parser)
        && match_kind(parser, TokenKind::Semicolon)
}

/// construction = expression identifier [initialization] ";"
pub fn parse_construction(parser: &mut dyn Parser) -> bool {
    if !parse_expression(parser) || !match_kind(parser, TokenKind::Identifier) {
        return false;
    }
    if !peek_kind(parser, TokenKind::Semicolon) && !parse_initialization(parser) {
        return false;
    }
    match_kind(parser, TokenKind::Semicolon)
}

/// initialization = "(" expression_list ")" | "=" expression
///
/// Earlier EOP recognizers rejected every initialization here, so only
/// `T x;` constructions were accepted. `legacy_initialization_reject` keeps
/// that behaviour: a well-formed initialization is still reported as a
/// rejection. By default it is accepted.
pub fn parse_initialization(parser: &mut dyn Parser) -> bool {
    let matched = if match_kind(parser, TokenKind::OpenParen) {
        parse_expression_list(parser) && match_kind(parser, TokenKind::CloseParen)
    } else if match_kind(parser, TokenKind::Equals) {
        parse_expression(parser)
    } else {
        false
    };

    matched && !parser.preferences().legacy_initialization_reject
}

/// control = return | conditional | switch | while | do | compound | break | goto
pub fn parse_control(parser: &mut dyn Parser) -> bool {
    if peek_keyword(parser, Keyword::Return) {
        parse_return(parser)
    } else if peek_keyword(parser, Keyword::If) {
        parse_conditional(parser)
    } else if peek_keyword(parser, Keyword::Switch) {
        parse_switch(parser)
    } else if peek_keyword(parser, Keyword::While) {
        parse_while(parser)
    } else if peek_keyword(parser, Keyword::Do) {
        parse_do(parser)
    } else if peek_kind(parser, TokenKind::OpenBrace) {
        parse_compound(parser)
    } else if peek_keyword(parser, Keyword::Break) {
        parse_break(parser)
    } else if peek_keyword(parser, Keyword::Goto) && parser.preferences().allow_goto {
        parse_goto(parser)
    } else {
        false
    }
}

/// return = "return" [expression] ";"
pub fn parse_return(parser: &mut dyn Parser) -> bool {
    if !match_keyword(parser, Keyword::Return) {
        return false;
    }
    if !peek_kind(parser, TokenKind::Semicolon) && !parse_expression(parser) {
        return false;
    }
    match_kind(parser, TokenKind::Semicolon)
}

/// "(" expression ")"
fn parse_condition(parser: &mut dyn Parser) -> bool {
    match_kind(parser, TokenKind::OpenParen)
        && parse_expression(parser)
        && match_kind(parser, TokenKind::CloseParen)
}

/// conditional = "if" "(" expression ")" statement ["else" statement]
pub fn parse_conditional(parser: &mut dyn Parser) -> bool {
    if !match_keyword(parser, Keyword::If) || !parse_condition(parser) || !parse_statement(parser)
    {
        return false;
    }
    if match_keyword(parser, Keyword::Else) {
        return parse_statement(parser);
    }
    true
}

/// switch = "switch" "(" expression ")" "{" {case} "}"
pub fn parse_switch(parser: &mut dyn Parser) -> bool {
    if !match_keyword(parser, Keyword::Switch)
        || !parse_condition(parser)
        || !match_kind(parser, TokenKind::OpenBrace)
    {
        return false;
    }

    while peek_keyword(parser, Keyword::Case) {
        if !parse_case(parser) {
            return false;
        }
    }

    match_kind(parser, TokenKind::CloseBrace)
}

/// case = "case" expression ":" {statement}
///
/// The statements run up to the next `case` or the closing brace.
pub fn parse_case(parser: &mut dyn Parser) -> bool {
    if !match_keyword(parser, Keyword::Case)
        || !parse_expression(parser)
        || !match_kind(parser, TokenKind::Colon)
    {
        return false;
    }

    while !peek_kind(parser, TokenKind::CloseBrace) && !peek_keyword(parser, Keyword::Case) {
        if !parse_statement(parser) {
            return false;
        }
    }
    true
}

/// while = "while" "(" expression ")" statement
pub fn parse_while(parser: &mut dyn Parser) -> bool {
    match_keyword(parser, Keyword::While) && parse_condition(parser) && parse_statement(parser)
}

/// do = "do" statement "while" "(" expression ")" ";"
pub fn parse_do(parser: &mut dyn Parser) -> bool {
    match_keyword(parser, Keyword::Do)
        && parse_statement(parser)
        && match_keyword(parser, Keyword::While)
        && parse_condition(parser)
        && match_kind(parser, TokenKind::Semicolon)
}

/// break = "break" ";"
pub fn parse_break(parser: &mut dyn Parser) -> bool {
    match_keyword(parser, Keyword::Break) && match_kind(parser, TokenKind::Semicolon)
}

/// goto = "goto" identifier ";"
pub fn parse_goto(parser: &mut dyn Parser) -> bool {
    match_keyword(parser, Keyword::Goto)
        && match_kind(parser, TokenKind::Identifier)
        && match_kind(parser, TokenKind::Semicolon)
}

/// compound = "{" {statement} "}"
///
/// Opens one scope after the brace and closes it whether or not the block parses.
pub fn parse_compound(parser: &mut dyn Parser) -> bool {
    if !match_kind(parser, TokenKind::OpenBrace) {
        return false;
    }

    parser.symbols_mut().push_scope();
    let accepted = parse_block_statements(parser);
    parser.symbols_mut().pop_scope();
    accepted
}

fn parse_block_statements(parser: &mut dyn Parser) -> bool {
    while !match_kind(parser, TokenKind::CloseBrace) {
        if !parse_statement(parser) {
            return false;
        }
    }
    true
}

/// body = compound
pub fn parse_body(parser: &mut dyn Parser) -> bool {
    parse_compound(parser)
}

/// typedef = "typedef" expression identifier ";"
pub fn parse_typedef(parser: &mut dyn Parser) -> bool {
    match_keyword(parser, Keyword::Typedef)
        && parse_expression(parser)
        && declare_identifier(parser, SymbolKind::Type).is_some()
        && match_kind(parser, TokenKind::Semicolon)
}
