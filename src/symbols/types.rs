//! Type definitions

/// Pascal types
///
/// Only the information needed to pick a correct translation is kept; no
/// runtime type enforcement happens in the emitted Python.
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    Integer, // int
    Real,    // float
    Boolean, // bool
    Char,    // single-character str
    String,  // str
    /// `array[low..high] of T`; bounds are kept so the default value can be
    /// sized, index expressions pass through untouched
    Array {
        low: i64,
        high: i64,
        elem: Box<Type>,
    },
    /// A user-declared record type, by name
    Record(String),
    /// Procedure or function signature; `ret` is None for procedures
    Routine {
        params: Vec<Type>,
        ret: Option<Box<Type>>,
    },
}

impl Type {
    /// Python default value emitted when a variable of this type is declared
    pub fn py_default(&self) -> String {
        match self {
            Type::Integer => "0".to_string(),
            Type::Real => "0.0".to_string(),
            Type::Boolean => "False".to_string(),
            Type::Char | Type::String => "''".to_string(),
            Type::Array { low: _, high, elem } => {
                // Sized so source index expressions land in range without
                // rewriting them (indices 0..=high are addressable).
                format!("[{}] * {}", elem.py_default(), high + 1)
            }
            Type::Record(name) => format!("{name}()"),
            Type::Routine { .. } => "None".to_string(),
        }
    }

    /// Source-level name, for error messages
    pub fn describe(&self) -> String {
        match self {
            Type::Integer => "integer".to_string(),
            Type::Real => "real".to_string(),
            Type::Boolean => "boolean".to_string(),
            Type::Char => "char".to_string(),
            Type::String => "string".to_string(),
            Type::Array { low, high, elem } => {
                format!("array[{low}..{high}] of {}", elem.describe())
            }
            Type::Record(name) => name.clone(),
            Type::Routine { ret: None, .. } => "procedure".to_string(),
            Type::Routine { ret: Some(_), .. } => "function".to_string(),
        }
    }
}
