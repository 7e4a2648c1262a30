//! Recursive-descent parser for the tacc source language.
//!
//! Builds a [`Program`] from a token stream. The grammar has one small,
//! fixed precedence table with no comparison chaining, so a plain
//! recursive-descent parser (rather than a Pratt/binding-power one) maps
//! directly onto its productions. Every error is fatal: there is no
//! synchronization or recovery, matching the pipeline's "stop at first
//! error" policy.

pub mod ast;
mod expr;
mod pretty;
mod stmt;

#[cfg(test)]
mod proptests;

pub use ast::*;
pub use pretty::pretty_print;

use tacc_lex::{Token, TokenKind};
use tacc_util::{CompileError, Span, Stage, StageError};

/// Parses a complete token stream into a [`Program`].
pub fn parse(tokens: &[Token]) -> Result<Program, StageError> {
    let mut parser = Parser::new(tokens);
    parser.parse_program().map_err(|e| e.at(Stage::Parser))
}

pub(crate) struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&Token> {
        let tok = self.tokens.get(self.pos);
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    fn is_kind_text(&self, kind: TokenKind, text: &str) -> bool {
        matches!(self.peek(), Some(t) if t.kind == kind && t.text == text)
    }

    fn at_keyword(&self, kw: &str) -> bool {
        self.is_kind_text(TokenKind::Keyword, kw)
    }

    fn at_operator(&self, op: &str) -> bool {
        self.is_kind_text(TokenKind::Operator, op)
    }

    fn at_separator(&self, sep: &str) -> bool {
        self.is_kind_text(TokenKind::Separator, sep)
    }

    fn unexpected(found: &Token) -> CompileError {
        CompileError::UnexpectedToken {
            found: found.text.clone(),
            span: found.span,
        }
    }

    fn eof(expected: &str) -> CompileError {
        CompileError::UnexpectedEof {
            expected: expected.to_string(),
        }
    }

    fn expect_keyword(&mut self, kw: &str) -> Result<Span, CompileError> {
        match self.peek() {
            Some(t) if t.kind == TokenKind::Keyword && t.text == kw => {
                let span = t.span;
                self.advance();
                Ok(span)
            }
            Some(t) => Err(Self::unexpected(t)),
            None => Err(Self::eof(kw)),
        }
    }

    fn expect_operator(&mut self, op: &str) -> Result<Span, CompileError> {
        match self.peek() {
            Some(t) if t.kind == TokenKind::Operator && t.text == op => {
                let span = t.span;
                self.advance();
                Ok(span)
            }
            Some(t) => Err(Self::unexpected(t)),
            None => Err(Self::eof(op)),
        }
    }

    fn expect_separator(&mut self, sep: &str) -> Result<Span, CompileError> {
        match self.peek() {
            Some(t) if t.kind == TokenKind::Separator && t.text == sep => {
                let span = t.span;
                self.advance();
                Ok(span)
            }
            Some(t) => Err(Self::unexpected(t)),
            None => Err(Self::eof(sep)),
        }
    }

    fn expect_lpar(&mut self) -> Result<Span, CompileError> {
        match self.peek() {
            Some(t) if t.kind == TokenKind::LPar => {
                let span = t.span;
                self.advance();
                Ok(span)
            }
            Some(t) => Err(Self::unexpected(t)),
            None => Err(Self::eof("(")),
        }
    }

    fn expect_rpar(&mut self) -> Result<Span, CompileError> {
        match self.peek() {
            Some(t) if t.kind == TokenKind::RPar => {
                let span = t.span;
                self.advance();
                Ok(span)
            }
            Some(t) => Err(Self::unexpected(t)),
            None => Err(Self::eof(")")),
        }
    }

    fn expect_identifier(&mut self) -> Result<(String, Span), CompileError> {
        match self.peek() {
            Some(t) if t.kind == TokenKind::Identifier => {
                let name = t.text.clone();
                let span = t.span;
                self.advance();
                Ok((name, span))
            }
            Some(t) => Err(CompileError::InvalidIdentifier {
                found: t.text.clone(),
                span: t.span,
            }),
            None => Err(Self::eof("identifier")),
        }
    }

    fn parse_program(&mut self) -> Result<Program, CompileError> {
        self.expect_keyword("procedure")?;
        self.expect_keyword("main")?;
        self.expect_keyword("is")?;
        let declarations = self.parse_decl_seq()?;
        self.expect_keyword("begin")?;
        let statements = self.parse_stmt_seq()?;
        self.expect_keyword("end")?;

        if let Some(t) = self.peek() {
            return Err(CompileError::TrailingTokens {
                found: t.text.clone(),
                span: t.span,
            });
        }

        Ok(Program {
            declarations,
            statements,
        })
    }

    fn parse_decl_seq(&mut self) -> Result<Vec<Declaration>, CompileError> {
        let mut decls = Vec::new();
        while self.at_keyword("var") {
            decls.push(self.parse_decl()?);
        }
        Ok(decls)
    }

    fn parse_decl(&mut self) -> Result<Declaration, CompileError> {
        let start = self.expect_keyword("var")?;
        let (name, _) = self.expect_identifier()?;
        let initial_value = if self.at_operator("=") {
            self.advance();
            Some(self.parse_expr()?)
        } else {
            None
        };
        self.expect_separator(";")?;
        Ok(Declaration {
            name,
            initial_value,
            span: start,
        })
    }
}
