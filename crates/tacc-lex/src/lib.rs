//! tacc-lex — lexical analysis for the tacc source language.
//!
//! Turns source text into an ordered stream of [`Token`]s. The lexer is a
//! single-pass, deterministic scanner: it never backtracks
//! past a token boundary and every fatal condition is reported with a
//! [`tacc_util::Span`] pointing at the offending character.

pub mod cursor;
pub mod lexer;
pub mod token;

#[cfg(test)]
mod edge_cases;

pub use lexer::Lexer;
pub use token::{Token, TokenKind};

use tacc_util::{Stage, StageError};

/// Lexes an entire source string, returning every token up to but not
/// including the terminal `Eof` marker.
///
/// This is the entry point `tacc-par` and `tacc-drv` call; it exists so
/// callers don't need to know about [`Lexer`]'s iterator protocol or stop
/// condition.
pub fn lex(source: &str) -> Result<Vec<Token>, StageError> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token().map_err(|e| e.at(Stage::Lexer))?;
        if token.kind == TokenKind::Eof {
            break;
        }
        tokens.push(token);
    }
    Ok(tokens)
}
