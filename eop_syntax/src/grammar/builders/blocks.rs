//! Declaration productions and the program driver
//!
//! Declarations are chosen by their leading keyword. Structure members and
//! template bodies have overlapping prefixes and are tried in order under
//! [`attempt`], so each alternative starts from the same cursor.

use crate::grammar::builders::atomic::{
    at_end, attempt, declare_identifier, guarded, match_keyword, match_kind,
    match_text, parse_overloadable_operator, peek_keyword, peek_kind, peek_text, Parser,
};
use crate::grammar::builders::expressions::{parse_expression, parse_parameter};
use crate::grammar::builders::helpers::{
    parse_arguments, parse_delimited, parse_initializer_list, parse_parameter_list,
    parse_parameters, parse_template_arguments,
};
use crate::grammar::builders::statements::{parse_body, parse_typedef};
use crate::grammar::keywords::Keyword;
use crate::symbols::SymbolKind;
use crate::tokens::TokenKind;

/// program = {declaration}
///
/// Resets the symbol table, then consumes declarations until one fails or
/// input runs out. The program is accepted exactly when every token was
/// consumed.
pub fn parse_program(parser: &mut dyn Parser) -> bool {
    parser.symbols_mut().initialize();
    while !at_end(parser) && parse_declaration(parser) {}
    at_end(parser)
}

/// declaration = enumeration | structure | template | procedure
pub fn parse_declaration(parser: &mut dyn Parser) -> bool {
    guarded(parser, parse_declaration_alternatives)
}

fn parse_declaration_alternatives(parser: &mut dyn Parser) -> bool {
    if peek_keyword(parser, Keyword::Enum) {
        parse_enumeration(parser)
    } else if peek_keyword(parser, Keyword::Struct) {
        parse_structure(parser)
    } else if peek_keyword(parser, Keyword::Template) {
        parse_template(parser)
    } else {
        parse_procedure(parser)
    }
}

/// enumeration = "enum" identifier "{" [identifier {"," identifier}] "}" ";"
pub fn parse_enumeration(parser: &mut dyn Parser) -> bool {
    match_keyword(parser, Keyword::Enum)
        && match_kind(parser, TokenKind::Identifier)
        && parse_delimited(
            parser,
            TokenKind::OpenBrace,
            parse_enumerator,
            TokenKind::CloseBrace,
        )
        && match_kind(parser, TokenKind::Semicolon)
}

fn parse_enumerator(parser: &mut dyn Parser) -> bool {
    match_kind(parser, TokenKind::Identifier)
}

/// structure_name = identifier, declared as a type in the innermost scope
pub fn parse_structure_name(parser: &mut dyn Parser) -> Option<String> {
    declare_identifier(parser, SymbolKind::Type)
}

/// structure = "struct" structure_name [structure_body] ";"
pub fn parse_structure(parser: &mut dyn Parser) -> bool {
    if !match_keyword(parser, Keyword::Struct) {
        return false;
    }
    let Some(name) = parse_structure_name(parser) else {
        return false;
    };

    if match_kind(parser, TokenKind::Semicolon) {
        return true;
    }
    parse_structure_body(parser, &name) && match_kind(parser, TokenKind::Semicolon)
}

/// structure_body = "{" {member} "}"
pub fn parse_structure_body(parser: &mut dyn Parser, name: &str) -> bool {
    if !match_kind(parser, TokenKind::OpenBrace) {
        return false;
    }
    while !match_kind(parser, TokenKind::CloseBrace) {
        if !parse_member(parser, name) {
            return false;
        }
    }
    true
}

/// member = constructor | destructor | typedef | data_member | assign | apply | index
///
/// `name` is the enclosing structure's name, which introduces constructors
/// and follows `~` in destructors.
pub fn parse_member(parser: &mut dyn Parser, name: &str) -> bool {
    if peek_text(parser, name.as_bytes()) {
        return parse_constructor(parser, name);
    }
    if peek_kind(parser, TokenKind::Tilde) {
        return parse_destructor(parser, name);
    }
    if peek_keyword(parser, Keyword::Typedef) {
        return parse_typedef(parser);
    }

    attempt(parser, parse_data_member)
        || attempt(parser, parse_assign_operator)
        || attempt(parser, parse_apply_operator)
        || attempt(parser, parse_index_operator)
}

/// constructor = structure_name "(" [parameter_list] ")" [":" initializer_list] body
pub fn parse_constructor(parser: &mut dyn Parser, name: &str) -> bool {
    if !match_text(parser, name.as_bytes()) || !parse_parameters(parser) {
        return false;
    }
    if match_kind(parser, TokenKind::Colon) && !parse_initializer_list(parser) {
        return false;
    }
    parse_body(parser)
}

/// destructor = "~" structure_name "(" ")" body
pub fn parse_destructor(parser: &mut dyn Parser, name: &str) -> bool {
    match_kind(parser, TokenKind::Tilde)
        && match_text(parser, name.as_bytes())
        && match_kind(parser, TokenKind::OpenParen)
        && match_kind(parser, TokenKind::CloseParen)
        && parse_body(parser)
}

/// data_member = expression identifier ["[" expression "]"] ";"
pub fn parse_data_member(parser: &mut dyn Parser) -> bool {
    if !parse_expression(parser) || !match_kind(parser, TokenKind::Identifier) {
        return false;
    }
    if match_kind(parser, TokenKind::OpenBracket)
        && !(parse_expression(parser) && match_kind(parser, TokenKind::CloseBracket))
    {
        return false;
    }
    match_kind(parser, TokenKind::Semicolon)
}

/// assign = "void" "operator" "=" "(" parameter ")" body
pub fn parse_assign_operator(parser: &mut dyn Parser) -> bool {
    match_keyword(parser, Keyword::Void)
        && match_keyword(parser, Keyword::Operator)
        && match_kind(parser, TokenKind::Equals)
        && parse_single_parameter(parser)
        && parse_body(parser)
}

/// apply = expression "operator" "(" ")" "(" [parameter_list] ")" body
pub fn parse_apply_operator(parser: &mut dyn Parser) -> bool {
    parse_expression(parser)
        && match_keyword(parser, Keyword::Operator)
        && match_kind(parser, TokenKind::OpenParen)
        && match_kind(parser, TokenKind::CloseParen)
        && parse_parameters(parser)
        && parse_body(parser)
}

/// index = expression "operator" "[" "]" "(" parameter ")" body
pub fn parse_index_operator(parser: &mut dyn Parser) -> bool {
    parse_expression(parser)
        && match_keyword(parser, Keyword::Operator)
        && match_kind(parser, TokenKind::OpenBracket)
        && match_kind(parser, TokenKind::CloseBracket)
        && parse_single_parameter(parser)
        && parse_body(parser)
}

/// "(" parameter ")"
fn parse_single_parameter(parser: &mut dyn Parser) -> bool {
    match_kind(parser, TokenKind::OpenParen)
        && parse_parameter(parser)
        && match_kind(parser, TokenKind::CloseParen)
}

/// initializer = identifier "(" [expression_list] ")"
pub fn parse_initializer(parser: &mut dyn Parser) -> bool {
    match_kind(parser, TokenKind::Identifier) && parse_arguments(parser)
}

/// procedure_name = identifier | "operator" overloadable_operator
///
/// A plain identifier is declared as a procedure in the innermost scope.
pub fn parse_procedure_name(parser: &mut dyn Parser) -> bool {
    if match_keyword(parser, Keyword::Operator) {
        return parse_overloadable_operator(parser);
    }
    declare_identifier(parser, SymbolKind::Procedure).is_some()
}

/// procedure = ("void" | expression) procedure_name "(" [parameter_list] ")" (body | ";")
pub fn parse_procedure(parser: &mut dyn Parser) -> bool {
    if !match_keyword(parser, Keyword::Void) && !parse_expression(parser) {
        return false;
    }
    if !parse_procedure_name(parser) || !parse_parameters(parser) {
        return false;
    }
    match_kind(parser, TokenKind::Semicolon) || parse_body(parser)
}

/// template_decl = "template" "<" [parameter_list] ">" ["requires" "(" expression ")"]
pub fn parse_template_decl(parser: &mut dyn Parser) -> bool {
    if !match_keyword(parser, Keyword::Template) || !match_kind(parser, TokenKind::Less) {
        return false;
    }
    if !peek_kind(parser, TokenKind::Greater) && !parse_parameter_list(parser) {
        return false;
    }
    if !match_kind(parser, TokenKind::Greater) {
        return false;
    }

    if match_keyword(parser, Keyword::Requires) {
        return match_kind(parser, TokenKind::OpenParen)
            && parse_expression(parser)
            && match_kind(parser, TokenKind::CloseParen);
    }
    true
}

/// specialization = "struct" structure_name "<" additive_list ">" [structure_body] ";"
pub fn parse_specialization(parser: &mut dyn Parser) -> bool {
    if !match_keyword(parser, Keyword::Struct) {
        return false;
    }
    let Some(name) = parse_structure_name(parser) else {
        return false;
    };
    if !match_kind(parser, TokenKind::Less) || !parse_template_arguments(parser) {
        return false;
    }

    if !peek_kind(parser, TokenKind::Semicolon) && !parse_structure_body(parser, &name) {
        return false;
    }
    match_kind(parser, TokenKind::Semicolon)
}

/// template = template_decl (structure | specialization | procedure)
///
/// When `struct` follows the header, a plain structure is tried before a
/// specialization. Otherwise, or when both fail, the declaration is read as a
/// procedure from the end of the header.
pub fn parse_template(parser: &mut dyn Parser) -> bool {
    if !parse_template_decl(parser) {
        return false;
    }

    if peek_keyword(parser, Keyword::Struct)
        && (attempt(parser, parse_structure) || attempt(parser, parse_specialization))
    {
        return true;
    }
    parse_procedure(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::runtime::SyntaxPreferences;
    use crate::syntax::EopParser;

    fn program(source: &str) -> bool {
        let mut p = EopParser::new(source.as_bytes(), SyntaxPreferences::default());
        parse_program(&mut p)
    }

    fn member(source: &str, name: &str) -> bool {
        let mut p = EopParser::new(source.as_bytes(), SyntaxPreferences::default());
        parse_member(&mut p, name) && at_end(&p)
    }

    #[test]
    fn test_empty_program() {
        assert!(program(""));
        assert!(program("  // only a comment\n"));
    }

    #[test]
    fn test_procedures() {
        assert!(program("void main();"));
        assert!(program("int main() { }"));
        assert!(program("int add(int a, int b) { return a + b; }"));
        assert!(!program("int main() ) { }"));
        assert!(!program("int 5();"));
    }

    #[test]
    fn test_truncated_declaration_is_accepted() {
        // A failing declaration that has already consumed every token still
        // leaves the cursor at end of input
        assert!(program("int main() {"));
        assert!(program("int main()"));
        assert!(program("enum colour { red }"));
    }

    #[test]
    fn test_operator_procedure() {
        assert!(program("bool operator==(const T& x, const T& y);"));
        assert!(program("T operator%(T a, T b) { return a; }"));
        assert!(!program("T operator=(T a);"));
    }

    #[test]
    fn test_enumerations() {
        assert!(program("enum colour { red, green, blue };"));
        assert!(program("enum empty { };"));
        assert!(!program("enum colour { red, };"));
        assert!(!program("enum colour red;"));
    }

    #[test]
    fn test_structures() {
        assert!(program("struct name;"));
        assert!(program("struct pair { T0 m0; T1 m1; };"));
        assert!(program("struct buffer { int data[16]; };"));
        assert!(!program("struct;"));
    }

    #[test]
    fn test_structure_without_trailing_semicolon_is_accepted() {
        // The declaration fails at end of input, which still ends the program
        assert!(program("struct name { }"));
    }

    #[test]
    fn test_members() {
        assert!(member("singleton() { }", "singleton"));
        assert!(member("pair(T a, T b) : m0(a), m1(b) { }", "pair"));
        assert!(member("~singleton() { free(p); }", "singleton"));
        assert!(member("typedef int value_type;", "singleton"));
        assert!(member("T value;", "singleton"));
        assert!(member("void operator=(const singleton& x) { value = x.value; }", "singleton"));
        assert!(member("T operator()(int i) { return value; }", "singleton"));
        assert!(member("T& operator[](int i) { return value; }", "singleton"));
        assert!(!member("~other() { }", "singleton"));
        assert!(!member("singleton() : { }", "singleton"));
    }

    #[test]
    fn test_templates() {
        assert!(program("template <typename T> struct box { T value; };"));
        assert!(program("template <typename T> T identity(T x) { return x; }"));
        assert!(program(
            "template <typename T> requires(Regular(T)) bool equal(T a, T b) { return a == b; }"
        ));
        assert!(program("template <> void f();"));
        assert!(!program("template <typename T> requires T void f();"));
    }

    #[test]
    fn test_template_specialization() {
        assert!(program(
            "template <typename T> struct Value_type; \
             template <typename T> struct Value_type<pointer(T)>;"
        ));
        assert!(program(
            "template <typename T> struct wrapper<int> { T value; };"
        ));
    }

    #[test]
    fn test_procedure_declares_name() {
        let mut p = EopParser::new(b"int f();", SyntaxPreferences::default());
        assert!(parse_program(&mut p));
        assert_eq!(
            p.symbols().lookup("f").map(|symbol| symbol.kind),
            Some(SymbolKind::Procedure)
        );
    }

    #[test]
    fn test_structure_declares_type() {
        let mut p = EopParser::new(b"struct pair; pair<int, int> make();", SyntaxPreferences::default());
        assert!(parse_program(&mut p));
        assert_eq!(
            p.symbols().lookup("pair").map(|symbol| symbol.kind),
            Some(SymbolKind::Type)
        );
    }

    #[test]
    fn test_program_resets_symbols() {
        let mut p = EopParser::new(b"struct pair;", SyntaxPreferences::default());
        p.symbols_mut().declare("stale", SymbolKind::Type);
        assert!(parse_program(&mut p));
        assert!(p.symbols().lookup("stale").is_none());
        assert_eq!(p.symbols().depth(), 1);
    }
}
