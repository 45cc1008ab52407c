//! Syntax recognizer for the EOP generic-programming language
//!
//! Source bytes are scanned lazily into tokens, whitespace and comments are
//! filtered out, and a backtracking recursive-descent parser decides whether
//! the remaining tokens form a program. Names declared by `struct`, `typedef`
//! and procedure declarations are tracked in a scoped symbol table, which is
//! what lets `T<a, b>` be read as a template name applied to arguments.

// Internal modules
pub mod config;
pub mod grammar;
pub mod lexical;
#[macro_use]
pub mod logging;
pub mod symbols;
pub mod syntax;
pub mod tokens;
pub mod utils;

// Re-export key types for library consumers
pub use config::{RuntimeConfig, SyntaxPreferences};
pub use syntax::{
    parse, parse_bytes, recognize, recognize_with_preferences, EopParser, SyntaxError,
    SyntaxResult,
};
