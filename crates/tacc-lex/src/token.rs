//! Token types.
//!
//! A token is a record `{kind, text, line}`; we keep the full
//! [`tacc_util::Span`] (line *and* column) rather than just the
//! line, since the extra column costs nothing and sharpens diagnostics.

use tacc_util::Span;

/// The eight token categories, plus the lexer's own end-of-input marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword,
    Operator,
    Separator,
    LPar,
    RPar,
    Identifier,
    Number,
    String,
    Eof,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Operator => "operator",
            TokenKind::Separator => "separator",
            TokenKind::LPar => "(",
            TokenKind::RPar => ")",
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Eof => "end of input",
        };
        write!(f, "{name}")
    }
}

/// A single lexical unit. `text` is the exact source slice that produced
/// it — for `String` tokens this includes the surrounding quotes.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    pub fn line(&self) -> u32 {
        self.span.line
    }

    /// True for the three word-operators (`and`, `or`, `not`), which are
    /// lexed alongside identifiers/keywords but classified as operators.
    pub fn is_word_operator(&self) -> bool {
        self.kind == TokenKind::Operator && self.text.chars().next().is_some_and(|c| c.is_alphabetic())
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
