//! Name resolution for the recognizer
//!
//! The parser declares structure, typedef and procedure names as it reads
//! them and consults the table to decide whether an identifier starts a
//! type expression. Each compound block opens one scope.

pub mod table;

pub use table::{Scope, Symbol, SymbolKind, SymbolTable};
