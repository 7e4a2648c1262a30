//! Identifier, keyword, and word-operator lexing.

use tacc_util::{CompileError, Span};

use super::{Lexer, KEYWORDS, WORD_OPERATORS};
use crate::token::{Token, TokenKind};

/// Consumes the maximal run of alphanumerics/underscores starting at the
/// cursor, then classifies the resulting word as `Keyword`, `Operator`
/// (for `and`/`or`/`not`), or `Identifier`.
pub(super) fn lex_identifier(lexer: &mut Lexer<'_>, start: Span) -> Result<Token, CompileError> {
    let start_pos = lexer.cursor.position();
    while !lexer.cursor.is_at_end() {
        let c = lexer.cursor.current_char();
        if c.is_alphanumeric() || c == '_' {
            lexer.cursor.advance();
        } else {
            break;
        }
    }
    let word = lexer.cursor.slice_from(start_pos);

    let kind = if KEYWORDS.contains(&word) {
        TokenKind::Keyword
    } else if WORD_OPERATORS.contains(&word) {
        TokenKind::Operator
    } else {
        TokenKind::Identifier
    };

    Ok(Token::new(kind, word, start))
}
