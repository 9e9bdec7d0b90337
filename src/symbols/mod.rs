//! Symbol table - declared identifiers and scope tracking

mod types;

pub use types::*;

use crate::error::{PaspyError, Result};
use std::collections::HashMap;

/// What a declared identifier is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Variable,
    Constant,
    Parameter,
    Procedure,
    Function,
    RecordType,
    TypeAlias,
}

/// A declared identifier
#[derive(Debug, Clone)]
pub struct Symbol {
    /// Canonical spelling: how the identifier was written at its
    /// declaration. All uses emit this spelling, whatever their case.
    pub name: String,
    pub ty: Type,
    pub kind: SymbolKind,
    /// Line of the declaration, cited by duplicate-declaration errors
    pub line: usize,
}

/// One lexical region owning its symbols, keyed by lowercased name
#[derive(Debug)]
struct Scope {
    name: String,
    symbols: HashMap<String, Symbol>,
}

impl Scope {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            symbols: HashMap::new(),
        }
    }
}

/// Stack of scopes: global at the bottom, one per routine above it
///
/// Lookup walks outward from the innermost scope; the stack positions are
/// the only parent references, so no ownership cycles can form.
#[derive(Debug)]
pub struct SymbolTable {
    scopes: Vec<Scope>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    pub fn new() -> Self {
        Self {
            scopes: vec![Scope::new("global")],
        }
    }

    pub fn enter_scope(&mut self, name: &str) {
        self.scopes.push(Scope::new(name));
    }

    /// Pop the innermost routine scope; its symbols become unreachable.
    /// Popping the global scope means the translator lost count.
    pub fn exit_scope(&mut self) -> Result<()> {
        if self.scopes.len() <= 1 {
            return Err(PaspyError::Internal(
                "scope stack underflow".to_string(),
            ));
        }
        self.scopes.pop();
        Ok(())
    }

    pub fn current_scope_name(&self) -> &str {
        self.scopes.last().map(|s| s.name.as_str()).unwrap_or("global")
    }

    /// Insert into the innermost scope; duplicates in the same scope fail
    /// and cite both declaration lines
    pub fn declare(&mut self, name: &str, ty: Type, kind: SymbolKind, line: usize) -> Result<()> {
        let key = name.to_ascii_lowercase();
        let scope = self
            .scopes
            .last_mut()
            .ok_or_else(|| PaspyError::Internal("no active scope".to_string()))?;
        if let Some(existing) = scope.symbols.get(&key) {
            return Err(PaspyError::DuplicateDeclaration {
                name: name.to_string(),
                line,
                first_line: existing.line,
            });
        }
        scope.symbols.insert(
            key,
            Symbol {
                name: name.to_string(),
                ty,
                kind,
                line,
            },
        );
        Ok(())
    }

    /// Look up a name in the innermost scope, then each enclosing scope out
    /// to global; the innermost declaration shadows outer ones
    pub fn resolve(&self, name: &str, line: usize) -> Result<&Symbol> {
        let key = name.to_ascii_lowercase();
        for scope in self.scopes.iter().rev() {
            if let Some(symbol) = scope.symbols.get(&key) {
                return Ok(symbol);
            }
        }
        Err(PaspyError::UndeclaredIdentifier {
            name: name.to_string(),
            line,
        })
    }

    /// Like `resolve`, but an absence is not an error (used for the
    /// auto-declaration of `for` loop variables)
    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        let key = name.to_ascii_lowercase();
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.symbols.get(&key))
    }
}
