//! Lexer module - Tokenization
//!
//! Hand-written pull lexer: `next_token()` classifies the next lexical unit
//! on demand, consuming whitespace and comments silently. Keywords are
//! matched case-insensitively; string literal bodies keep their case.

mod token;

pub use token::*;

use crate::error::{PaspyError, Result};

/// Pull lexer over a single source text
///
/// Only internal state is the read cursor and the current line counter;
/// tokens are never buffered beyond the caller's own lookahead.
pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
    line: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
        }
    }

    /// Return the next token, or a token of kind `Eof` at end of input
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_trivia()?;

        let line = self.line;
        let c = match self.peek() {
            Some(c) => c,
            None => return Ok(Token::new(TokenKind::Eof, line)),
        };

        if c.is_ascii_alphabetic() || c == '_' {
            return Ok(self.lex_word(line));
        }
        if c.is_ascii_digit() {
            return self.lex_number(line);
        }
        if c == '\'' {
            return self.lex_string(line);
        }
        self.lex_operator(line)
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek2(&self) -> Option<char> {
        self.chars.get(self.pos + 1).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek();
        if let Some(c) = c {
            self.pos += 1;
            if c == '\n' {
                self.line += 1;
            }
        }
        c
    }

    /// Consume whitespace and all three comment forms
    fn skip_trivia(&mut self) -> Result<()> {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() => {
                    self.bump();
                }
                Some('{') => {
                    let start = self.line;
                    self.bump();
                    loop {
                        match self.bump() {
                            Some('}') => break,
                            Some(_) => {}
                            None => {
                                return Err(PaspyError::Lexical {
                                    line: start,
                                    message: "unterminated comment".to_string(),
                                })
                            }
                        }
                    }
                }
                Some('(') if self.peek2() == Some('*') => {
                    let start = self.line;
                    self.bump();
                    self.bump();
                    loop {
                        match self.bump() {
                            Some('*') if self.peek() == Some(')') => {
                                self.bump();
                                break;
                            }
                            Some(_) => {}
                            None => {
                                return Err(PaspyError::Lexical {
                                    line: start,
                                    message: "unterminated comment".to_string(),
                                })
                            }
                        }
                    }
                }
                Some('/') if self.peek2() == Some('/') => {
                    while let Some(c) = self.peek() {
                        if c == '\n' {
                            break;
                        }
                        self.bump();
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn lex_word(&mut self, line: usize) -> Token {
        let mut text = String::new();
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '_' {
                text.push(c);
                self.bump();
            } else {
                break;
            }
        }
        let lowered = text.to_ascii_lowercase();
        match KEYWORDS.get(lowered.as_str()) {
            Some(kw) => Token::new(TokenKind::Keyword(*kw), line),
            None => Token::new(TokenKind::Ident(text), line),
        }
    }

    fn lex_number(&mut self, line: usize) -> Result<Token> {
        let mut text = String::new();
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                text.push(c);
                self.bump();
            } else {
                break;
            }
        }

        // `1..10` is an integer followed by a range delimiter, not a real
        let is_real = self.peek() == Some('.') && self.peek2() != Some('.');
        if !is_real {
            let value = text.parse::<i64>().map_err(|_| PaspyError::Lexical {
                line,
                message: format!("integer literal '{text}' out of range"),
            })?;
            return Ok(Token::new(TokenKind::IntLiteral(value), line));
        }

        text.push('.');
        self.bump();
        let mut frac_digits = 0;
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                text.push(c);
                self.bump();
                frac_digits += 1;
            } else {
                break;
            }
        }
        if frac_digits == 0 {
            return Err(PaspyError::Lexical {
                line,
                message: format!("malformed real literal '{text}'"),
            });
        }

        if matches!(self.peek(), Some('e') | Some('E')) {
            text.push('e');
            self.bump();
            if let Some(sign) = self.peek().filter(|c| matches!(c, '+' | '-')) {
                text.push(sign);
                self.bump();
            }
            let mut exp_digits = 0;
            while let Some(c) = self.peek() {
                if c.is_ascii_digit() {
                    text.push(c);
                    self.bump();
                    exp_digits += 1;
                } else {
                    break;
                }
            }
            if exp_digits == 0 {
                return Err(PaspyError::Lexical {
                    line,
                    message: format!("malformed real literal '{text}'"),
                });
            }
        }

        let value = text.parse::<f64>().map_err(|_| PaspyError::Lexical {
            line,
            message: format!("malformed real literal '{text}'"),
        })?;
        Ok(Token::new(TokenKind::RealLiteral(value), line))
    }

    /// Pascal string literal: single quotes, doubled quote escapes a quote
    fn lex_string(&mut self, line: usize) -> Result<Token> {
        self.bump();
        let mut body = String::new();
        loop {
            match self.peek() {
                Some('\'') => {
                    self.bump();
                    if self.peek() == Some('\'') {
                        body.push('\'');
                        self.bump();
                    } else {
                        return Ok(Token::new(TokenKind::StringLiteral(body), line));
                    }
                }
                Some('\n') | None => {
                    return Err(PaspyError::Lexical {
                        line,
                        message: "unterminated string literal".to_string(),
                    })
                }
                Some(c) => {
                    body.push(c);
                    self.bump();
                }
            }
        }
    }

    fn lex_operator(&mut self, line: usize) -> Result<Token> {
        let c = self.bump().unwrap_or('\0');
        let kind = match c {
            '+' => TokenKind::Operator(Operator::Plus),
            '-' => TokenKind::Operator(Operator::Minus),
            '*' => TokenKind::Operator(Operator::Star),
            '/' => TokenKind::Operator(Operator::Slash),
            '=' => TokenKind::Operator(Operator::Eq),
            '^' => TokenKind::Operator(Operator::Caret),
            '<' => match self.peek() {
                Some('=') => {
                    self.bump();
                    TokenKind::Operator(Operator::LtEq)
                }
                Some('>') => {
                    self.bump();
                    TokenKind::Operator(Operator::NotEq)
                }
                _ => TokenKind::Operator(Operator::Lt),
            },
            '>' => {
                if self.peek() == Some('=') {
                    self.bump();
                    TokenKind::Operator(Operator::GtEq)
                } else {
                    TokenKind::Operator(Operator::Gt)
                }
            }
            ':' => {
                if self.peek() == Some('=') {
                    self.bump();
                    TokenKind::Operator(Operator::Assign)
                } else {
                    TokenKind::Delimiter(Delimiter::Colon)
                }
            }
            '.' => {
                if self.peek() == Some('.') {
                    self.bump();
                    TokenKind::Delimiter(Delimiter::DotDot)
                } else {
                    TokenKind::Delimiter(Delimiter::Dot)
                }
            }
            '(' => TokenKind::Delimiter(Delimiter::LParen),
            ')' => TokenKind::Delimiter(Delimiter::RParen),
            '[' => TokenKind::Delimiter(Delimiter::LBracket),
            ']' => TokenKind::Delimiter(Delimiter::RBracket),
            ',' => TokenKind::Delimiter(Delimiter::Comma),
            ';' => TokenKind::Delimiter(Delimiter::Semicolon),
            other => {
                return Err(PaspyError::Lexical {
                    line,
                    message: format!("unexpected character '{other}'"),
                })
            }
        };
        Ok(Token::new(kind, line))
    }
}
