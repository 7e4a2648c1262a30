//! String literal lexing.
//!
//! No escape processing: the language has no escape sequences, and the
//! emitted token text includes the surrounding quotes verbatim.

use tacc_util::{CompileError, Span};

use super::Lexer;
use crate::token::{Token, TokenKind};

pub(super) fn lex_string(lexer: &mut Lexer<'_>, start: Span) -> Result<Token, CompileError> {
    let start_pos = lexer.cursor.position();
    lexer.cursor.advance(); // opening quote

    loop {
        if lexer.cursor.is_at_end() {
            return Err(CompileError::UnterminatedString(start));
        }
        let c = lexer.cursor.current_char();
        lexer.cursor.advance();
        if c == '"' {
            break;
        }
    }

    let text = lexer.cursor.slice_from(start_pos);
    Ok(Token::new(TokenKind::String, text, start))
}
