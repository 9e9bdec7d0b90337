//! Diagnostics - error reporting records and output
//!
//! A failed translation carries exactly one diagnostic (the first error
//! aborts the pass); the collection type exists so the text and JSON
//! renderers share one shape.

use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticSpan {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub code: String,
    pub message: String,
    pub severity: DiagnosticSeverity,
    pub span: DiagnosticSpan,
    pub phase: String,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct Diagnostics {
    pub diagnostics: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn add(&mut self, diag: Diagnostic) {
        self.diagnostics.push(diag);
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self).unwrap_or_else(|_| "{}".to_string())
    }

    /// One line per diagnostic: `[CODE] file:line error text`
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for diag in &self.diagnostics {
            let file = diag.span.file.as_deref().unwrap_or("<input>");
            out.push_str(&format!(
                "[{}] {}:{} {}\n",
                diag.code, file, diag.span.line, diag.message
            ));
        }
        out
    }
}

pub fn span_for_line(file: Option<&Path>, line: usize) -> DiagnosticSpan {
    DiagnosticSpan {
        file: file.map(|p| p.display().to_string()),
        line,
        column: 1,
    }
}

/// Map a translation error onto its stable diagnostic code and phase
pub fn from_error(err: &crate::error::PaspyError, file: Option<&Path>) -> Diagnostics {
    use crate::error::PaspyError;

    let (code, line, phase) = match err {
        PaspyError::Lexical { line, .. } => ("PSP-LEX-ERROR", *line, "lex"),
        PaspyError::Syntax { line, .. } => ("PSP-SYNTAX-ERROR", *line, "parse"),
        PaspyError::DuplicateDeclaration { line, .. } => {
            ("PSP-DUPLICATE-DECL", *line, "semantic")
        }
        PaspyError::UndeclaredIdentifier { line, .. } => {
            ("PSP-UNDECLARED-IDENT", *line, "semantic")
        }
        PaspyError::UnsupportedConstruct { line, .. } => ("PSP-UNSUPPORTED", *line, "parse"),
        PaspyError::Internal(_) => ("PSP-INTERNAL", 1, "emit"),
        PaspyError::Io(_) => ("PSP-IO-ERROR", 1, "emit"),
    };

    let mut diags = Diagnostics::new();
    diags.add(Diagnostic {
        code: code.to_string(),
        message: format!("{err}"),
        severity: DiagnosticSeverity::Error,
        span: span_for_line(file, line),
        phase: phase.to_string(),
    });
    diags
}
