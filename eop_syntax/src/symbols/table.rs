//! Scoped symbol table consulted by the parser

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// What a declared name denotes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SymbolKind {
    Type,
    Procedure,
}

impl SymbolKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SymbolKind::Type => "type",
            SymbolKind::Procedure => "procedure",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
}

impl Symbol {
    pub fn new(name: impl Into<String>, kind: SymbolKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Name to symbol map for one scope
pub type Scope = HashMap<String, Symbol>;

/// Stack of scopes, innermost last. Never empty: the bottom scope is global.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    scopes: Vec<Scope>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self {
            scopes: vec![Scope::new()],
        }
    }

    /// Reset to exactly one empty global scope
    pub fn initialize(&mut self) {
        self.scopes.clear();
        self.scopes.push(Scope::new());
    }

    pub fn push_scope(&mut self) {
        self.scopes.push(Scope::new());
    }

    /// Discard the innermost scope.
    ///
    /// # Panics
    ///
    /// Panics when only the global scope remains.
    pub fn pop_scope(&mut self) {
        assert!(self.scopes.len() > 1, "cannot pop the global scope");
        self.scopes.pop();
    }

    /// Declare `name` in the innermost scope, replacing any symbol of the same
    /// name already declared there
    pub fn declare(&mut self, name: &str, kind: SymbolKind) -> &Symbol {
        let scope = self
            .scopes
            .last_mut()
            .expect("symbol table always holds the global scope");
        scope.insert(name.to_string(), Symbol::new(name, kind));
        &scope[name]
    }

    /// Innermost declaration of `name`
    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name))
    }

    /// Number of scopes, 1 when only the global scope is open
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Symbols declared in the global scope
    pub fn global_symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.scopes[0].values()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
