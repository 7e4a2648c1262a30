//! Number literal lexing.
//!
//! The grammar has no integer/float distinction at the token level —
//! there is a single `NUMBER` kind; the text is parsed into an integer
//! or a float later, during IR generation.

use tacc_util::{CompileError, Span};

use super::Lexer;
use crate::token::{Token, TokenKind};

/// Consumes digits with at most one internal `.`. A digit run directly
/// followed by an alphabetic character or underscore is a fatal
/// "identifier begins with a digit" error.
pub(super) fn lex_number(lexer: &mut Lexer<'_>, start: Span) -> Result<Token, CompileError> {
    let start_pos = lexer.cursor.position();
    let mut seen_dot = false;

    loop {
        let c = lexer.cursor.current_char();
        if c.is_ascii_digit() {
            lexer.cursor.advance();
        } else if c == '.' && !seen_dot && lexer.cursor.peek_char(1).is_ascii_digit() {
            seen_dot = true;
            lexer.cursor.advance();
        } else {
            break;
        }
    }

    let next = lexer.cursor.current_char();
    if next.is_alphabetic() || next == '_' {
        return Err(CompileError::IdentifierBeginsWithDigit(start));
    }

    let text = lexer.cursor.slice_from(start_pos);
    Ok(Token::new(TokenKind::Number, text, start))
}
