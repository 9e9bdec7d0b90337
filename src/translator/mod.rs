//! Translator module - syntax-directed translation
//!
//! Recursive-descent recognizer over the Pascal grammar with one token of
//! lookahead. Every completed reduction emits its Python fragment through
//! the emitter immediately; no parse tree is built. The only state carried
//! across reductions is the symbol table's scope stack and the emitter's
//! indentation depth.

mod exprs;
#[cfg(test)]
mod tests;

use crate::emitter::Emitter;
use crate::error::{PaspyError, Result};
use crate::lexer::{Delimiter, Keyword, Lexer, Operator, Token, TokenKind};
use crate::symbols::{SymbolKind, SymbolTable, Type};
use crate::unsupported_features::UnsupportedConstruct;
use std::io::Write;

/// Translate one Pascal source text into Python through `emitter`
///
/// On success the emitter's depth is back at zero. The first error aborts
/// the pass; whatever was already written is not valid output.
pub fn translate<W: Write>(source: &str, emitter: &mut Emitter<W>) -> Result<()> {
    let mut lexer = Lexer::new(source);
    let current = lexer.next_token()?;
    let mut translator = Translator {
        lexer,
        current,
        symbols: SymbolTable::new(),
        emitter,
        function_stack: Vec::new(),
    };
    translator.parse_program()?;
    if translator.emitter.depth() != 0 {
        return Err(PaspyError::Internal(
            "indentation depth not zero at end of translation".to_string(),
        ));
    }
    Ok(())
}

pub(crate) struct Translator<'a, W: Write> {
    lexer: Lexer,
    /// Single lookahead token; nothing else is buffered
    current: Token,
    symbols: SymbolTable,
    emitter: &'a mut Emitter<W>,
    /// Lowercased names of enclosing functions, innermost last. Assignment
    /// to the innermost name is Pascal's function-result assignment.
    function_stack: Vec<String>,
}

impl<W: Write> Translator<'_, W> {
    // ---- token plumbing -------------------------------------------------

    fn bump(&mut self) -> Result<Token> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    fn line(&self) -> usize {
        self.current.line
    }

    fn syntax_error(&self, expected: &str) -> PaspyError {
        PaspyError::Syntax {
            line: self.current.line,
            message: format!("expected {expected}, found {}", self.current.describe()),
        }
    }

    fn unsupported(&self, construct: UnsupportedConstruct, line: usize) -> PaspyError {
        PaspyError::UnsupportedConstruct {
            construct: construct.display_name().to_string(),
            line,
        }
    }

    fn at_keyword(&self, kw: Keyword) -> bool {
        self.current.kind == TokenKind::Keyword(kw)
    }

    fn at_delim(&self, d: Delimiter) -> bool {
        self.current.kind == TokenKind::Delimiter(d)
    }

    fn at_operator(&self, op: Operator) -> bool {
        self.current.kind == TokenKind::Operator(op)
    }

    fn accept_keyword(&mut self, kw: Keyword) -> Result<bool> {
        if self.at_keyword(kw) {
            self.bump()?;
            return Ok(true);
        }
        Ok(false)
    }

    fn accept_delim(&mut self, d: Delimiter) -> Result<bool> {
        if self.at_delim(d) {
            self.bump()?;
            return Ok(true);
        }
        Ok(false)
    }

    fn expect_keyword(&mut self, kw: Keyword) -> Result<()> {
        if !self.accept_keyword(kw)? {
            return Err(self.syntax_error(&format!("'{}'", kw.as_str())));
        }
        Ok(())
    }

    fn expect_delim(&mut self, d: Delimiter) -> Result<()> {
        if !self.accept_delim(d)? {
            return Err(self.syntax_error(&format!("'{}'", d.as_str())));
        }
        Ok(())
    }

    fn expect_operator(&mut self, op: Operator) -> Result<()> {
        if self.at_operator(op) {
            self.bump()?;
            return Ok(());
        }
        Err(self.syntax_error(&format!("'{}'", op.as_str())))
    }

    fn expect_ident(&mut self) -> Result<(String, usize)> {
        let line = self.current.line;
        match &self.current.kind {
            TokenKind::Ident(name) => {
                let name = name.clone();
                self.bump()?;
                Ok((name, line))
            }
            _ => Err(self.syntax_error("an identifier")),
        }
    }

    // ---- program structure ----------------------------------------------

    fn parse_program(&mut self) -> Result<()> {
        if self.at_keyword(Keyword::Unit) {
            let line = self.line();
            return Err(self.unsupported(UnsupportedConstruct::UnitHeader, line));
        }
        self.expect_keyword(Keyword::Program)?;
        self.expect_ident()?;

        // `program Name(input, output);` - the file list is recognized and
        // discarded, matching its lack of runtime meaning here
        if self.accept_delim(Delimiter::LParen)? {
            loop {
                self.expect_ident()?;
                if !self.accept_delim(Delimiter::Comma)? {
                    break;
                }
            }
            self.expect_delim(Delimiter::RParen)?;
        }
        self.expect_delim(Delimiter::Semicolon)?;

        self.parse_declarations()?;
        // Program body at depth 0; an empty body emits nothing, the top
        // level of a Python module needs no placeholder
        self.parse_compound()?;
        self.expect_delim(Delimiter::Dot)?;

        if self.current.kind != TokenKind::Eof {
            return Err(self.syntax_error("end of input after final '.'"));
        }
        Ok(())
    }

    /// const / type / var / procedure / function sections, in any order,
    /// each repeatable. Returns the number of lines emitted.
    fn parse_declarations(&mut self) -> Result<usize> {
        let mut emitted = 0;
        loop {
            if self.at_keyword(Keyword::Const) {
                emitted += self.parse_const_section()?;
            } else if self.at_keyword(Keyword::Type) {
                emitted += self.parse_type_section()?;
            } else if self.at_keyword(Keyword::Var) {
                emitted += self.parse_var_section()?;
            } else if self.at_keyword(Keyword::Procedure) || self.at_keyword(Keyword::Function) {
                emitted += self.parse_routine_decl()?;
            } else if self.at_keyword(Keyword::Label) {
                let line = self.line();
                return Err(self.unsupported(UnsupportedConstruct::Label, line));
            } else if self.at_keyword(Keyword::Uses) {
                let line = self.line();
                return Err(self.unsupported(UnsupportedConstruct::UsesClause, line));
            } else {
                return Ok(emitted);
            }
        }
    }

    fn parse_const_section(&mut self) -> Result<usize> {
        self.expect_keyword(Keyword::Const)?;
        let mut emitted = 0;
        while let TokenKind::Ident(_) = self.current.kind {
            let (name, line) = self.expect_ident()?;
            self.expect_operator(Operator::Eq)?;
            let (text, ty) = self.parse_const_literal()?;
            self.expect_delim(Delimiter::Semicolon)?;
            self.symbols.declare(&name, ty, SymbolKind::Constant, line)?;
            self.emitter.emit(&format!("{name} = {text}"))?;
            emitted += 1;
        }
        if emitted == 0 {
            return Err(self.syntax_error("a constant declaration"));
        }
        Ok(emitted)
    }

    /// A literal constant value, with optional sign on numbers
    fn parse_const_literal(&mut self) -> Result<(String, Type)> {
        let negate = if self.at_operator(Operator::Minus) {
            self.bump()?;
            true
        } else {
            if self.at_operator(Operator::Plus) {
                self.bump()?;
            }
            false
        };
        let sign = if negate { "-" } else { "" };
        let token = self.bump()?;
        match token.kind {
            TokenKind::IntLiteral(n) => Ok((format!("{sign}{n}"), Type::Integer)),
            TokenKind::RealLiteral(f) => {
                Ok((format!("{sign}{}", exprs::format_real(f)), Type::Real))
            }
            TokenKind::StringLiteral(s) if !negate => {
                let ty = if s.chars().count() == 1 {
                    Type::Char
                } else {
                    Type::String
                };
                Ok((exprs::requote_string(&s), ty))
            }
            TokenKind::Keyword(Keyword::True) if !negate => {
                Ok(("True".to_string(), Type::Boolean))
            }
            TokenKind::Keyword(Keyword::False) if !negate => {
                Ok(("False".to_string(), Type::Boolean))
            }
            _ => Err(PaspyError::Syntax {
                line: token.line,
                message: format!("expected a literal constant, found {}", token.describe()),
            }),
        }
    }

    fn parse_type_section(&mut self) -> Result<usize> {
        self.expect_keyword(Keyword::Type)?;
        let mut emitted = 0;
        let mut any = false;
        while let TokenKind::Ident(_) = self.current.kind {
            let (name, line) = self.expect_ident()?;
            self.expect_operator(Operator::Eq)?;
            if self.at_keyword(Keyword::Record) {
                emitted += self.parse_record_def(&name, line)?;
            } else {
                // Alias: `type TRow = array[1..3] of real;`
                let ty = self.parse_type_ref()?;
                self.symbols
                    .declare(&name, ty, SymbolKind::TypeAlias, line)?;
            }
            self.expect_delim(Delimiter::Semicolon)?;
            any = true;
        }
        if !any {
            return Err(self.syntax_error("a type declaration"));
        }
        Ok(emitted)
    }

    /// `Name = record f: T; ... end` emits a Python class whose
    /// `__init__` assigns each field its type default
    fn parse_record_def(&mut self, name: &str, line: usize) -> Result<usize> {
        self.expect_keyword(Keyword::Record)?;
        self.symbols
            .declare(name, Type::Record(name.to_string()), SymbolKind::RecordType, line)?;

        let mut fields: Vec<(String, Type)> = Vec::new();
        while let TokenKind::Ident(_) = self.current.kind {
            let mut names = vec![self.expect_ident()?.0];
            while self.accept_delim(Delimiter::Comma)? {
                names.push(self.expect_ident()?.0);
            }
            self.expect_delim(Delimiter::Colon)?;
            let ty = self.parse_type_ref()?;
            self.expect_delim(Delimiter::Semicolon)?;
            for field in names {
                fields.push((field, ty.clone()));
            }
        }
        if self.at_keyword(Keyword::Case) {
            let case_line = self.line();
            return Err(self.unsupported(UnsupportedConstruct::VariantRecord, case_line));
        }
        self.expect_keyword(Keyword::End)?;

        self.emitter.emit(&format!("class {name}:"))?;
        self.emitter.push_indent();
        self.emitter.emit("def __init__(self):")?;
        self.emitter.push_indent();
        let mut lines = 3;
        if fields.is_empty() {
            self.emitter.emit("pass")?;
            lines += 1;
        } else {
            for (field, ty) in &fields {
                self.emitter
                    .emit(&format!("self.{field} = {}", ty.py_default()))?;
                lines += 1;
            }
        }
        self.emitter.pop_indent()?;
        self.emitter.pop_indent()?;
        Ok(lines)
    }

    fn parse_var_section(&mut self) -> Result<usize> {
        self.expect_keyword(Keyword::Var)?;
        let mut emitted = 0;
        while let TokenKind::Ident(_) = self.current.kind {
            let mut names = vec![self.expect_ident()?];
            while self.accept_delim(Delimiter::Comma)? {
                names.push(self.expect_ident()?);
            }
            self.expect_delim(Delimiter::Colon)?;
            let ty = self.parse_type_ref()?;
            self.expect_delim(Delimiter::Semicolon)?;
            // Each name in a shared type clause declares independently
            for (name, line) in names {
                self.symbols
                    .declare(&name, ty.clone(), SymbolKind::Variable, line)?;
                self.emitter
                    .emit(&format!("{name} = {}", ty.py_default()))?;
                emitted += 1;
            }
        }
        if emitted == 0 {
            return Err(self.syntax_error("a variable declaration"));
        }
        Ok(emitted)
    }

    fn parse_type_ref(&mut self) -> Result<Type> {
        let line = self.line();
        match self.current.kind.clone() {
            TokenKind::Keyword(Keyword::Integer) => {
                self.bump()?;
                Ok(Type::Integer)
            }
            TokenKind::Keyword(Keyword::Real) => {
                self.bump()?;
                Ok(Type::Real)
            }
            TokenKind::Keyword(Keyword::Boolean) => {
                self.bump()?;
                Ok(Type::Boolean)
            }
            TokenKind::Keyword(Keyword::Char) => {
                self.bump()?;
                Ok(Type::Char)
            }
            TokenKind::Keyword(Keyword::String) => {
                self.bump()?;
                Ok(Type::String)
            }
            TokenKind::Keyword(Keyword::Array) => {
                self.bump()?;
                self.expect_delim(Delimiter::LBracket)?;
                let low = self.parse_bound()?;
                self.expect_delim(Delimiter::DotDot)?;
                let high = self.parse_bound()?;
                self.expect_delim(Delimiter::RBracket)?;
                self.expect_keyword(Keyword::Of)?;
                let elem = self.parse_type_ref()?;
                if low < 0 {
                    return Err(PaspyError::UnsupportedConstruct {
                        construct: "negative array low bounds".to_string(),
                        line,
                    });
                }
                if high < low {
                    return Err(PaspyError::Syntax {
                        line,
                        message: format!("array range {low}..{high} is empty"),
                    });
                }
                Ok(Type::Array {
                    low,
                    high,
                    elem: Box::new(elem),
                })
            }
            TokenKind::Keyword(Keyword::Set) => {
                Err(self.unsupported(UnsupportedConstruct::SetType, line))
            }
            TokenKind::Operator(Operator::Caret) => {
                Err(self.unsupported(UnsupportedConstruct::PointerType, line))
            }
            TokenKind::Ident(name) => {
                self.bump()?;
                let symbol = self.symbols.resolve(&name, line)?;
                match symbol.kind {
                    SymbolKind::RecordType => Ok(Type::Record(symbol.name.clone())),
                    SymbolKind::TypeAlias => Ok(symbol.ty.clone()),
                    _ => Err(PaspyError::Syntax {
                        line,
                        message: format!("'{name}' is not a type"),
                    }),
                }
            }
            _ => Err(self.syntax_error("a type")),
        }
    }

    fn parse_bound(&mut self) -> Result<i64> {
        let negate = self.at_operator(Operator::Minus);
        if negate {
            self.bump()?;
        }
        let token = self.bump()?;
        match token.kind {
            TokenKind::IntLiteral(n) => Ok(if negate { -n } else { n }),
            _ => Err(PaspyError::Syntax {
                line: token.line,
                message: format!("expected an integer bound, found {}", token.describe()),
            }),
        }
    }

    // ---- routines -------------------------------------------------------

    fn parse_routine_decl(&mut self) -> Result<usize> {
        let is_function = self.at_keyword(Keyword::Function);
        self.bump()?;
        let (name, line) = self.expect_ident()?;

        // Parameter list: groups share a type, `var` prefix is accepted and
        // translated by value
        let mut params: Vec<(String, usize, Type)> = Vec::new();
        if self.accept_delim(Delimiter::LParen)? {
            loop {
                self.accept_keyword(Keyword::Var)?;
                let mut names = vec![self.expect_ident()?];
                while self.accept_delim(Delimiter::Comma)? {
                    names.push(self.expect_ident()?);
                }
                self.expect_delim(Delimiter::Colon)?;
                let ty = self.parse_type_ref()?;
                for (pname, pline) in names {
                    params.push((pname, pline, ty.clone()));
                }
                if !self.accept_delim(Delimiter::Semicolon)? {
                    break;
                }
            }
            self.expect_delim(Delimiter::RParen)?;
        }

        let ret = if is_function {
            self.expect_delim(Delimiter::Colon)?;
            Some(self.parse_type_ref()?)
        } else {
            None
        };
        self.expect_delim(Delimiter::Semicolon)?;

        // Declared in the enclosing scope before the body is parsed, so the
        // routine can call itself
        let signature = Type::Routine {
            params: params.iter().map(|(_, _, ty)| ty.clone()).collect(),
            ret: ret.clone().map(Box::new),
        };
        let kind = if is_function {
            SymbolKind::Function
        } else {
            SymbolKind::Procedure
        };
        self.symbols.declare(&name, signature, kind, line)?;

        let param_names: Vec<&str> = params.iter().map(|(n, _, _)| n.as_str()).collect();
        self.emitter
            .emit(&format!("def {name}({}):", param_names.join(", ")))?;

        self.symbols.enter_scope(&name);
        for (pname, pline, ty) in &params {
            self.symbols
                .declare(pname, ty.clone(), SymbolKind::Parameter, *pline)?;
        }
        if is_function {
            self.function_stack.push(name.to_ascii_lowercase());
        }

        self.emitter.push_indent();
        let mut body_lines = 0;
        if let Some(ret_ty) = &ret {
            // Hidden result variable; `name := expr` assigns it and the
            // routine returns it, so recursive calls to `name` keep working
            self.emitter
                .emit(&format!("_result = {}", ret_ty.py_default()))?;
            body_lines += 1;
        }
        body_lines += self.parse_declarations()?;
        body_lines += self.parse_compound()?;
        if body_lines == 0 {
            self.emitter.emit("pass")?;
        }
        if ret.is_some() {
            self.emitter.emit("return _result")?;
        }
        self.emitter.pop_indent()?;

        if is_function {
            self.function_stack.pop();
        }
        self.symbols.exit_scope()?;
        self.expect_delim(Delimiter::Semicolon)?;
        Ok(body_lines + 1)
    }

    // ---- statements -----------------------------------------------------

    /// `begin ... end`. Emits nothing by itself and never changes depth;
    /// returns the number of lines its statements emitted.
    fn parse_compound(&mut self) -> Result<usize> {
        self.expect_keyword(Keyword::Begin)?;
        let mut emitted = 0;
        loop {
            // Empty statements between separators are legal
            if self.accept_delim(Delimiter::Semicolon)? {
                continue;
            }
            if self.at_keyword(Keyword::End) {
                break;
            }
            emitted += self.parse_statement()?;
            if !self.at_delim(Delimiter::Semicolon) {
                break;
            }
        }
        self.expect_keyword(Keyword::End)?;
        Ok(emitted)
    }

    /// One statement; returns the number of output lines it produced
    fn parse_statement(&mut self) -> Result<usize> {
        let line = self.line();
        match self.current.kind.clone() {
            TokenKind::Keyword(Keyword::Begin) => self.parse_compound(),
            TokenKind::Keyword(Keyword::If) => self.parse_if(),
            TokenKind::Keyword(Keyword::While) => self.parse_while(),
            TokenKind::Keyword(Keyword::For) => self.parse_for(),
            TokenKind::Keyword(Keyword::Repeat) => self.parse_repeat(),
            TokenKind::Keyword(kw) => match UnsupportedConstruct::from_keyword(kw) {
                Some(construct) => Err(self.unsupported(construct, line)),
                None => Err(self.syntax_error("a statement")),
            },
            TokenKind::Ident(_) => self.parse_simple_statement(),
            _ => Err(self.syntax_error("a statement")),
        }
    }

    /// The single statement forming a branch or loop body. The target
    /// language rejects an empty indented block, so an absent or empty
    /// statement becomes `pass`.
    fn parse_branch(&mut self) -> Result<()> {
        self.emitter.push_indent();
        let emitted = if self.branch_is_empty() {
            0
        } else {
            self.parse_statement()?
        };
        if emitted == 0 {
            self.emitter.emit("pass")?;
        }
        self.emitter.pop_indent()
    }

    fn branch_is_empty(&self) -> bool {
        matches!(
            self.current.kind,
            TokenKind::Delimiter(Delimiter::Semicolon)
                | TokenKind::Delimiter(Delimiter::Dot)
                | TokenKind::Keyword(Keyword::End)
                | TokenKind::Keyword(Keyword::Else)
                | TokenKind::Keyword(Keyword::Until)
                | TokenKind::Eof
        )
    }

    fn parse_if(&mut self) -> Result<usize> {
        self.expect_keyword(Keyword::If)?;
        let cond = self.parse_expression()?;
        self.expect_keyword(Keyword::Then)?;
        self.emitter.emit(&format!("if {cond}:"))?;
        self.parse_branch()?;
        // Dangling else binds here, to the nearest if: an inner if already
        // consumed its own else before this check runs
        if self.accept_keyword(Keyword::Else)? {
            self.emitter.emit("else:")?;
            self.parse_branch()?;
        }
        Ok(1)
    }

    fn parse_while(&mut self) -> Result<usize> {
        self.expect_keyword(Keyword::While)?;
        let cond = self.parse_expression()?;
        self.expect_keyword(Keyword::Do)?;
        self.emitter.emit(&format!("while {cond}:"))?;
        self.parse_branch()?;
        Ok(1)
    }

    fn parse_for(&mut self) -> Result<usize> {
        self.expect_keyword(Keyword::For)?;
        let (name, line) = self.expect_ident()?;
        // Loop variable becomes an integer symbol if nothing declared it
        if self.symbols.lookup(&name).is_none() {
            self.symbols
                .declare(&name, Type::Integer, SymbolKind::Variable, line)?;
        }
        let var = self.symbols.resolve(&name, line)?.name.clone();
        self.expect_operator(Operator::Assign)?;
        let low = self.parse_expression()?;
        let descending = if self.accept_keyword(Keyword::To)? {
            false
        } else if self.accept_keyword(Keyword::Downto)? {
            true
        } else {
            return Err(self.syntax_error("'to' or 'downto'"));
        };
        let high = self.parse_expression()?;
        self.expect_keyword(Keyword::Do)?;
        if descending {
            self.emitter
                .emit(&format!("for {var} in range({low}, {high} - 1, -1):"))?;
        } else {
            self.emitter
                .emit(&format!("for {var} in range({low}, {high} + 1):"))?;
        }
        self.parse_branch()?;
        Ok(1)
    }

    /// `repeat S* until cond` - post-test loop, body runs at least once
    fn parse_repeat(&mut self) -> Result<usize> {
        self.expect_keyword(Keyword::Repeat)?;
        self.emitter.emit("while True:")?;
        self.emitter.push_indent();
        loop {
            if self.accept_delim(Delimiter::Semicolon)? {
                continue;
            }
            if self.at_keyword(Keyword::Until) {
                break;
            }
            self.parse_statement()?;
            if !self.at_delim(Delimiter::Semicolon) {
                break;
            }
        }
        self.expect_keyword(Keyword::Until)?;
        let cond = self.parse_expression()?;
        self.emitter.emit(&format!("if {cond}:"))?;
        self.emitter.push_indent();
        self.emitter.emit("break")?;
        self.emitter.pop_indent()?;
        self.emitter.pop_indent()?;
        Ok(1)
    }

    /// Assignment or call statement, both starting with an identifier
    fn parse_simple_statement(&mut self) -> Result<usize> {
        let (name, line) = self.expect_ident()?;
        let lowered = name.to_ascii_lowercase();

        // Builtin I/O, unless a user declaration shadows the name
        if self.symbols.lookup(&name).is_none() {
            if matches!(lowered.as_str(), "writeln" | "write") {
                return self.translate_write(&lowered);
            }
            if matches!(lowered.as_str(), "readln" | "read") {
                return self.translate_read();
            }
        }

        let symbol = self.symbols.resolve(&name, line)?;
        let canonical = symbol.name.clone();
        let kind = symbol.kind;

        // Inside `function f`, `f := expr` assigns the hidden result
        if self.function_stack.last() == Some(&lowered) && self.at_operator(Operator::Assign) {
            self.bump()?;
            let value = self.parse_expression()?;
            self.emitter.emit(&format!("_result = {value}"))?;
            return Ok(1);
        }

        match kind {
            SymbolKind::Procedure | SymbolKind::Function => {
                let args = self.parse_call_args()?;
                self.emitter
                    .emit(&format!("{canonical}({})", args.join(", ")))?;
                Ok(1)
            }
            _ => {
                let lhs = self.parse_lhs_suffix(canonical)?;
                self.expect_operator(Operator::Assign)?;
                let value = self.parse_expression()?;
                self.emitter.emit(&format!("{lhs} = {value}"))?;
                Ok(1)
            }
        }
    }

    /// Index and field suffixes on an assignment target, translated
    /// structurally
    fn parse_lhs_suffix(&mut self, base: String) -> Result<String> {
        let mut lhs = base;
        loop {
            if self.accept_delim(Delimiter::LBracket)? {
                let index = self.parse_expression()?;
                self.expect_delim(Delimiter::RBracket)?;
                lhs = format!("{lhs}[{index}]");
            } else if self.at_delim(Delimiter::Dot) {
                self.bump()?;
                let (field, _) = self.expect_ident()?;
                lhs = format!("{lhs}.{field}");
            } else if self.at_operator(Operator::Caret) {
                let line = self.line();
                return Err(self.unsupported(UnsupportedConstruct::PointerType, line));
            } else {
                return Ok(lhs);
            }
        }
    }

    /// Optional parenthesized argument list of a call statement
    fn parse_call_args(&mut self) -> Result<Vec<String>> {
        let mut args = Vec::new();
        if self.accept_delim(Delimiter::LParen)? {
            if !self.at_delim(Delimiter::RParen) {
                loop {
                    args.push(self.parse_expression()?);
                    if !self.accept_delim(Delimiter::Comma)? {
                        break;
                    }
                }
            }
            self.expect_delim(Delimiter::RParen)?;
        }
        Ok(args)
    }

    // ---- builtin I/O ----------------------------------------------------

    /// `writeln`/`write` map onto `print`. Pascal juxtaposes its arguments
    /// with no separator, so multi-argument calls pass `sep=''`; `write`
    /// suppresses the trailing newline with `end=''`.
    fn translate_write(&mut self, builtin: &str) -> Result<usize> {
        let args = self.parse_call_args()?;
        let newline = builtin == "writeln";
        let mut parts = args.clone();
        if args.len() > 1 {
            parts.push("sep=''".to_string());
        }
        if !newline {
            parts.push("end=''".to_string());
        }
        self.emitter.emit(&format!("print({})", parts.join(", ")))?;
        Ok(1)
    }

    /// `readln`/`read` become `input()` wrapped by the declared type of
    /// each target variable; one output line per target
    fn translate_read(&mut self) -> Result<usize> {
        let mut emitted = 0;
        if self.accept_delim(Delimiter::LParen)? {
            loop {
                let (name, line) = self.expect_ident()?;
                let symbol = self.symbols.resolve(&name, line)?;
                let canonical = symbol.name.clone();
                let mut target_ty = symbol.ty.clone();
                let mut target = canonical;
                while self.accept_delim(Delimiter::LBracket)? {
                    let index = self.parse_expression()?;
                    self.expect_delim(Delimiter::RBracket)?;
                    target = format!("{target}[{index}]");
                    target_ty = match target_ty {
                        Type::Array { elem, .. } => *elem,
                        other => other,
                    };
                }
                let rhs = match target_ty {
                    Type::Integer => "int(input())",
                    Type::Real => "float(input())",
                    Type::Char | Type::String => "input()",
                    other => {
                        return Err(PaspyError::Syntax {
                            line,
                            message: format!("cannot read into a value of type {}", other.describe()),
                        })
                    }
                };
                self.emitter.emit(&format!("{target} = {rhs}"))?;
                emitted += 1;
                if !self.accept_delim(Delimiter::Comma)? {
                    break;
                }
            }
            self.expect_delim(Delimiter::RParen)?;
        } else {
            // Bare `readln;` consumes a line of input and discards it
            self.emitter.emit("input()")?;
            emitted += 1;
        }
        Ok(emitted)
    }
}
