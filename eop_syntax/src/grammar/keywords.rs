//! Keywords of the grammar
//!
//! Keywords are ordinary identifier tokens; a production matches one by
//! comparing the token text. Words outside a keyword's production still parse
//! as plain identifiers.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    // === DECLARATIONS ===
    Enum,
    Struct,
    Template,
    Typename,
    Typedef,
    Requires,
    Operator,

    // === TYPES AND LITERALS ===
    Void,
    Const,
    True,
    False,
    Bool,
    Int,
    Double,

    // === CONTROL ===
    Return,
    If,
    Else,
    Switch,
    Case,
    While,
    Do,
    Break,
    Goto,
}

impl Keyword {
    pub const fn as_str(self) -> &'static str {
        match self {
            Keyword::Enum => "enum",
            Keyword::Struct => "struct",
            Keyword::Template => "template",
            Keyword::Typename => "typename",
            Keyword::Typedef => "typedef",
            Keyword::Requires => "requires",
            Keyword::Operator => "operator",
            Keyword::Void => "void",
            Keyword::Const => "const",
            Keyword::True => "true",
            Keyword::False => "false",
            Keyword::Bool => "bool",
            Keyword::Int => "int",
            Keyword::Double => "double",
            Keyword::Return => "return",
            Keyword::If => "if",
            Keyword::Else => "else",
            Keyword::Switch => "switch",
            Keyword::Case => "case",
            Keyword::While => "while",
            Keyword::Do => "do",
            Keyword::Break => "break",
            Keyword::Goto => "goto",
        }
    }
}
