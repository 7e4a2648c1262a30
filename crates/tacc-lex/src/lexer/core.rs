//! Core lexer implementation.
//!
//! Contains the main `Lexer` struct and its dispatch loop: a
//! single-pass deterministic scanner with state selection on the
//! current character.

use tacc_util::{CompileError, Span};

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Lexer for the tacc source language.
pub struct Lexer<'a> {
    pub(crate) cursor: Cursor<'a>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    /// Returns the next token, or `Token { kind: Eof, .. }` at end of
    /// input. This is the scanner's one entry point: it skips whitespace,
    /// then dispatches on the current character to the appropriate
    /// submodule.
    pub fn next_token(&mut self) -> Result<Token, CompileError> {
        self.skip_whitespace();

        let start_span = self.span();

        if self.cursor.is_at_end() {
            return Ok(Token::new(TokenKind::Eof, "", start_span));
        }

        let c = self.cursor.current_char();
        match c {
            '"' => string::lex_string(self, start_span),
            ';' | ',' => {
                self.cursor.advance();
                let kind = TokenKind::Separator;
                Ok(Token::new(kind, c.to_string(), start_span))
            }
            '(' => {
                self.cursor.advance();
                Ok(Token::new(TokenKind::LPar, "(", start_span))
            }
            ')' => {
                self.cursor.advance();
                Ok(Token::new(TokenKind::RPar, ")", start_span))
            }
            c if c.is_ascii_digit() => number::lex_number(self, start_span),
            c if c.is_alphabetic() || c == '_' => identifier::lex_identifier(self, start_span),
            c if is_operator_start(c) => operator::lex_operator(self, start_span),
            c => {
                self.cursor.advance();
                Err(CompileError::UnrecognizedCharacter { ch: c, span: start_span })
            }
        }
    }

    fn skip_whitespace(&mut self) {
        while !self.cursor.is_at_end() && self.cursor.current_char().is_whitespace() {
            self.cursor.advance();
        }
    }

    pub(crate) fn span(&self) -> Span {
        Span::new(self.cursor.line(), self.cursor.column())
    }
}

fn is_operator_start(c: char) -> bool {
    super::SYMBOL_OPERATORS.iter().any(|op| op.starts_with(c))
}

use super::{identifier, number, operator, string};
