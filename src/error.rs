//! Error types for the paspy translator

use thiserror::Error;

/// Main error type for paspy
///
/// Every error is fatal to the current translation: the first one
/// encountered aborts the pass and is the only diagnostic reported.
#[derive(Debug, Error)]
pub enum PaspyError {
    #[error("Lexical error at line {line}: {message}")]
    Lexical { line: usize, message: String },

    #[error("Syntax error at line {line}: {message}")]
    Syntax { line: usize, message: String },

    #[error("Duplicate declaration of '{name}' at line {line} (first declared at line {first_line})")]
    DuplicateDeclaration {
        name: String,
        line: usize,
        first_line: usize,
    },

    #[error("Undeclared identifier '{name}' at line {line}")]
    UndeclaredIdentifier { name: String, line: usize },

    #[error("Unsupported construct at line {line}: {construct}")]
    UnsupportedConstruct { construct: String, line: usize },

    /// Emitter or scope-stack underflow. Never reachable through the
    /// public API if the translator is correct.
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PaspyError>;
