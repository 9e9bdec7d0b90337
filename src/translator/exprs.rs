//! Expression translation
//!
//! Precedence climbing over Pascal's published operator table:
//! `not` binds tightest, then `* / div mod and`, then `+ - or`, then the
//! relational operators, all left-associative. Compound operands are
//! parenthesized in the output so Python's own precedence table can never
//! reorder the source evaluation (Pascal puts `and`/`or` on the arithmetic
//! levels; Python does not).

use super::Translator;
use crate::error::{PaspyError, Result};
use crate::lexer::{Delimiter, Keyword, Operator, TokenKind};
use crate::symbols::SymbolKind;
use crate::unsupported_features::UnsupportedConstruct;
use std::io::Write;

const PREC_RELATIONAL: u8 = 1;
const PREC_ADDITIVE: u8 = 2;
const PREC_MULTIPLICATIVE: u8 = 3;

/// A translated subexpression; `compound` marks text that must be wrapped
/// in parentheses before becoming an operand
struct Frag {
    text: String,
    compound: bool,
}

impl Frag {
    fn simple(text: String) -> Self {
        Self {
            text,
            compound: false,
        }
    }

    fn compound(text: String) -> Self {
        Self {
            text,
            compound: true,
        }
    }

    fn operand(&self) -> String {
        if self.compound {
            format!("({})", self.text)
        } else {
            self.text.clone()
        }
    }
}

impl<W: Write> Translator<'_, W> {
    /// Translate one full expression; the result is unwrapped, callers
    /// embed it in a statement fragment
    pub(crate) fn parse_expression(&mut self) -> Result<String> {
        Ok(self.parse_binary(PREC_RELATIONAL)?.text)
    }

    fn parse_binary(&mut self, min_prec: u8) -> Result<Frag> {
        let mut left = self.parse_factor()?;
        loop {
            let (py_op, prec) = match &self.current.kind {
                TokenKind::Operator(Operator::Eq) => ("==", PREC_RELATIONAL),
                TokenKind::Operator(Operator::NotEq) => ("!=", PREC_RELATIONAL),
                TokenKind::Operator(Operator::Lt) => ("<", PREC_RELATIONAL),
                TokenKind::Operator(Operator::Gt) => (">", PREC_RELATIONAL),
                TokenKind::Operator(Operator::LtEq) => ("<=", PREC_RELATIONAL),
                TokenKind::Operator(Operator::GtEq) => (">=", PREC_RELATIONAL),
                TokenKind::Operator(Operator::Plus) => ("+", PREC_ADDITIVE),
                TokenKind::Operator(Operator::Minus) => ("-", PREC_ADDITIVE),
                TokenKind::Keyword(Keyword::Or) => ("or", PREC_ADDITIVE),
                TokenKind::Operator(Operator::Star) => ("*", PREC_MULTIPLICATIVE),
                TokenKind::Operator(Operator::Slash) => ("/", PREC_MULTIPLICATIVE),
                TokenKind::Keyword(Keyword::Div) => ("//", PREC_MULTIPLICATIVE),
                TokenKind::Keyword(Keyword::Mod) => ("%", PREC_MULTIPLICATIVE),
                TokenKind::Keyword(Keyword::And) => ("and", PREC_MULTIPLICATIVE),
                _ => break,
            };
            if prec < min_prec {
                break;
            }
            self.bump()?;
            // Left associativity: the right operand climbs one level up
            let right = self.parse_binary(prec + 1)?;
            left = Frag::compound(format!(
                "{} {py_op} {}",
                left.operand(),
                right.operand()
            ));
        }
        Ok(left)
    }

    fn parse_factor(&mut self) -> Result<Frag> {
        let line = self.line();
        match self.current.kind.clone() {
            TokenKind::IntLiteral(n) => {
                self.bump()?;
                Ok(Frag::simple(n.to_string()))
            }
            TokenKind::RealLiteral(f) => {
                self.bump()?;
                Ok(Frag::simple(format_real(f)))
            }
            TokenKind::StringLiteral(s) => {
                self.bump()?;
                Ok(Frag::simple(requote_string(&s)))
            }
            TokenKind::Keyword(Keyword::True) => {
                self.bump()?;
                Ok(Frag::simple("True".to_string()))
            }
            TokenKind::Keyword(Keyword::False) => {
                self.bump()?;
                Ok(Frag::simple("False".to_string()))
            }
            TokenKind::Keyword(Keyword::Not) => {
                self.bump()?;
                let operand = self.parse_factor()?;
                Ok(Frag::compound(format!("not {}", operand.operand())))
            }
            TokenKind::Operator(Operator::Minus) => {
                self.bump()?;
                let operand = self.parse_factor()?;
                // Python's unary minus binds tighter than any binary
                // operator here, so the result needs no wrapping
                Ok(Frag::simple(format!("-{}", operand.operand())))
            }
            TokenKind::Operator(Operator::Plus) => {
                self.bump()?;
                self.parse_factor()
            }
            TokenKind::Keyword(Keyword::Nil) => Err(PaspyError::UnsupportedConstruct {
                construct: UnsupportedConstruct::NilLiteral.display_name().to_string(),
                line,
            }),
            TokenKind::Delimiter(Delimiter::LParen) => {
                self.bump()?;
                let inner = self.parse_binary(PREC_RELATIONAL)?;
                self.expect_delim(Delimiter::RParen)?;
                // Already parenthesized, never needs another layer
                Ok(Frag::simple(format!("({})", inner.text)))
            }
            TokenKind::Ident(name) => {
                self.bump()?;
                self.parse_primary(&name, line)
            }
            _ => Err(self.syntax_error("an expression")),
        }
    }

    /// Identifier head: variable reference, function call, array index or
    /// record field chain
    fn parse_primary(&mut self, name: &str, line: usize) -> Result<Frag> {
        let symbol = self.symbols.resolve(name, line)?;
        let canonical = symbol.name.clone();
        let kind = symbol.kind;

        if kind == SymbolKind::Procedure {
            return Err(PaspyError::Syntax {
                line,
                message: format!("procedure '{canonical}' used in an expression"),
            });
        }

        // A function name in an expression is a call, parenthesized or not
        // (a parameterless Pascal function is called bare)
        if kind == SymbolKind::Function {
            let args = self.parse_call_args()?;
            return Ok(Frag::simple(format!("{canonical}({})", args.join(", "))));
        }

        let mut text = canonical;
        loop {
            if self.accept_delim(Delimiter::LBracket)? {
                let index = self.parse_expression()?;
                self.expect_delim(Delimiter::RBracket)?;
                text = format!("{text}[{index}]");
            } else if self.accept_delim(Delimiter::Dot)? {
                let (field, _) = self.expect_ident()?;
                text = format!("{text}.{field}");
            } else if self.at_operator(Operator::Caret) {
                let caret_line = self.line();
                return Err(PaspyError::UnsupportedConstruct {
                    construct: UnsupportedConstruct::PointerType
                        .display_name()
                        .to_string(),
                    line: caret_line,
                });
            } else {
                return Ok(Frag::simple(text));
            }
        }
    }
}

/// Requote a Pascal string literal body for Python single quotes
pub(crate) fn requote_string(body: &str) -> String {
    let mut out = String::with_capacity(body.len() + 2);
    out.push('\'');
    for c in body.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            other => out.push(other),
        }
    }
    out.push('\'');
    out
}

/// Render a real literal so Python reads it back as a float
pub(crate) fn format_real(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
