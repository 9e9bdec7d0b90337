//! Emitter module - Python code output
//!
//! Pure formatting sink: owns the output stream and the indentation depth,
//! performs no translation logic. The translator is its only caller.

use crate::error::{PaspyError, Result};
use std::io::Write;

/// One indentation unit in the emitted Python
const INDENT_UNIT: &str = "    ";

/// Python code emitter
///
/// Every `emit` writes exactly one line: the current depth's worth of
/// indentation, the fragment, a newline. Depth never goes below zero and
/// must be back at zero when translation finishes.
pub struct Emitter<W: Write> {
    out: W,
    depth: usize,
}

impl<W: Write> Emitter<W> {
    pub fn new(out: W) -> Self {
        Self { out, depth: 0 }
    }

    /// Write one line of target text at the current indentation depth
    pub fn emit(&mut self, text: &str) -> Result<()> {
        for _ in 0..self.depth {
            self.out.write_all(INDENT_UNIT.as_bytes())?;
        }
        self.out.write_all(text.as_bytes())?;
        self.out.write_all(b"\n")?;
        Ok(())
    }

    pub fn push_indent(&mut self) {
        self.depth += 1;
    }

    pub fn pop_indent(&mut self) -> Result<()> {
        if self.depth == 0 {
            return Err(PaspyError::Internal(
                "indentation depth underflow".to_string(),
            ));
        }
        self.depth -= 1;
        Ok(())
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
