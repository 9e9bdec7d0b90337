//! Token definitions

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// A classified lexical unit
///
/// Carries the 1-based source line it started on; errors reported later in
/// the pass localize through this field.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, line: usize) -> Self {
        Self { kind, line }
    }

    /// Human-readable form for error messages
    pub fn describe(&self) -> String {
        match &self.kind {
            TokenKind::IntLiteral(n) => format!("integer literal '{n}'"),
            TokenKind::RealLiteral(f) => format!("real literal '{f}'"),
            TokenKind::StringLiteral(_) => "string literal".to_string(),
            TokenKind::Ident(name) => format!("identifier '{name}'"),
            TokenKind::Keyword(kw) => format!("keyword '{}'", kw.as_str()),
            TokenKind::Operator(op) => format!("'{}'", op.as_str()),
            TokenKind::Delimiter(d) => format!("'{}'", d.as_str()),
            TokenKind::Eof => "end of input".to_string(),
        }
    }
}

/// Token types for the Pascal lexer
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Literals
    IntLiteral(i64),
    RealLiteral(f64),
    StringLiteral(String),

    // Identifiers and keywords
    Ident(String),
    Keyword(Keyword),

    // Operators
    Operator(Operator),

    // Delimiters
    Delimiter(Delimiter),

    // End of input
    Eof,
}

/// Pascal keywords (classified case-insensitively)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Program,
    Const,
    Type,
    Var,
    Procedure,
    Function,
    Begin,
    End,
    If,
    Then,
    Else,
    While,
    Do,
    For,
    To,
    Downto,
    Repeat,
    Until,
    Array,
    Of,
    Record,
    Div,
    Mod,
    And,
    Or,
    Not,
    True,
    False,
    Integer,
    Real,
    Boolean,
    Char,
    String,
    // Recognized but out of translation scope
    Goto,
    Label,
    Case,
    With,
    Set,
    Nil,
    Unit,
    Uses,
}

impl Keyword {
    pub fn as_str(&self) -> &'static str {
        KEYWORDS
            .iter()
            .find(|&(_, kw)| kw == self)
            .map(|(s, _)| *s)
            .unwrap_or("?")
    }
}

/// Keyword classification table, keyed by lowercased spelling
pub static KEYWORDS: Lazy<HashMap<&'static str, Keyword>> = Lazy::new(|| {
    HashMap::from([
        ("program", Keyword::Program),
        ("const", Keyword::Const),
        ("type", Keyword::Type),
        ("var", Keyword::Var),
        ("procedure", Keyword::Procedure),
        ("function", Keyword::Function),
        ("begin", Keyword::Begin),
        ("end", Keyword::End),
        ("if", Keyword::If),
        ("then", Keyword::Then),
        ("else", Keyword::Else),
        ("while", Keyword::While),
        ("do", Keyword::Do),
        ("for", Keyword::For),
        ("to", Keyword::To),
        ("downto", Keyword::Downto),
        ("repeat", Keyword::Repeat),
        ("until", Keyword::Until),
        ("array", Keyword::Array),
        ("of", Keyword::Of),
        ("record", Keyword::Record),
        ("div", Keyword::Div),
        ("mod", Keyword::Mod),
        ("and", Keyword::And),
        ("or", Keyword::Or),
        ("not", Keyword::Not),
        ("true", Keyword::True),
        ("false", Keyword::False),
        ("integer", Keyword::Integer),
        ("real", Keyword::Real),
        ("boolean", Keyword::Boolean),
        ("char", Keyword::Char),
        ("string", Keyword::String),
        ("goto", Keyword::Goto),
        ("label", Keyword::Label),
        ("case", Keyword::Case),
        ("with", Keyword::With),
        ("set", Keyword::Set),
        ("nil", Keyword::Nil),
        ("unit", Keyword::Unit),
        ("uses", Keyword::Uses),
    ])
});

/// Operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,

    // Relational
    Eq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,

    // Assignment
    Assign,

    // Pointer dereference (recognized, rejected as unsupported)
    Caret,
}

impl Operator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Star => "*",
            Operator::Slash => "/",
            Operator::Eq => "=",
            Operator::NotEq => "<>",
            Operator::Lt => "<",
            Operator::Gt => ">",
            Operator::LtEq => "<=",
            Operator::GtEq => ">=",
            Operator::Assign => ":=",
            Operator::Caret => "^",
        }
    }
}

/// Delimiters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    LParen,
    RParen,
    LBracket,
    RBracket,
    Comma,
    Semicolon,
    Colon,
    Dot,
    DotDot,
}

impl Delimiter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Delimiter::LParen => "(",
            Delimiter::RParen => ")",
            Delimiter::LBracket => "[",
            Delimiter::RBracket => "]",
            Delimiter::Comma => ",",
            Delimiter::Semicolon => ";",
            Delimiter::Colon => ":",
            Delimiter::Dot => ".",
            Delimiter::DotDot => "..",
        }
    }
}
