//! paspy - Pascal to Python translator
//!
//! # Overview
//! Single-pass syntax-directed translation: the parser pulls tokens from
//! the lexer and emits Python fragments as each Pascal construct completes,
//! with no intermediate tree. Scope tracking lives in the symbol table,
//! indentation tracking in the emitter.

pub mod diagnostics;
pub mod emitter;
pub mod error;
pub mod lexer;
pub mod symbols;
pub mod translator;
pub mod unsupported_features;

use error::Result;
use std::io::{Read, Write};
use std::path::Path;

/// Translate Pascal source text to Python source text
pub fn translate_source(source: &str) -> Result<String> {
    let mut out = Vec::new();
    let mut emitter = emitter::Emitter::new(&mut out);
    translator::translate(source, &mut emitter)?;
    String::from_utf8(out)
        .map_err(|e| error::PaspyError::Internal(format!("emitted invalid UTF-8: {e}")))
}

/// Translate from an input stream to an output stream
///
/// The input is read forward-only to end-of-input; the output receives
/// Python text as constructs complete. On failure the output is partial
/// and must be discarded by the caller.
pub fn translate(input: &mut dyn Read, output: &mut dyn Write) -> Result<()> {
    let mut source = String::new();
    input.read_to_string(&mut source)?;
    let mut emitter = emitter::Emitter::new(output);
    translator::translate(&source, &mut emitter)
}

/// Translate Pascal source, mapping any failure to a diagnostics record
pub fn translate_with_diagnostics(
    source: &str,
    file: Option<&Path>,
) -> std::result::Result<String, diagnostics::Diagnostics> {
    translate_source(source).map_err(|err| diagnostics::from_error(&err, file))
}

/// Translate a Pascal file to a Python file
pub fn translate_file(input: &Path, output: &Path) -> Result<()> {
    let source = std::fs::read_to_string(input)?;
    let python = translate_source(&source)?;
    std::fs::write(output, python)?;
    Ok(())
}
