//! Symbol-operator lexing.
//!
//! Greedily matches the longest operator from [`super::SYMBOL_OPERATORS`]
//! so two-character operators (`==`, `!=`, `<=`, `>=`) take priority over
//! their single-character prefixes.

use tacc_util::{CompileError, Span};

use super::{Lexer, SYMBOL_OPERATORS};
use crate::token::{Token, TokenKind};

pub(super) fn lex_operator(lexer: &mut Lexer<'_>, start: Span) -> Result<Token, CompileError> {
    let remaining = lexer.cursor.remaining();
    for op in SYMBOL_OPERATORS {
        if remaining.starts_with(op) {
            for _ in 0..op.chars().count() {
                lexer.cursor.advance();
            }
            return Ok(Token::new(TokenKind::Operator, *op, start));
        }
    }

    let c = lexer.cursor.current_char();
    lexer.cursor.advance();
    Err(CompileError::UnrecognizedCharacter { ch: c, span: start })
}
