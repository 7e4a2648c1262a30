//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while iterating through source code characters. It handles UTF-8 encoding
//! correctly and tracks line/column information for error reporting.

/// A cursor for traversing source code character by character.
///
/// The cursor maintains the current byte position in the source string and
/// provides methods for advancing and peeking ahead. String literals in
/// this language are free-form UTF-8, so unlike the rest of the grammar
/// (which is ASCII-only) the cursor still has to decode multi-byte
/// characters correctly.
///
/// # Example
///
/// ```
/// use tacc_lex::cursor::Cursor;
///
/// let source = "var x = 42;";
/// let mut cursor = Cursor::new(source);
///
/// assert_eq!(cursor.current_char(), 'v');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'a');
/// ```
pub struct Cursor<'a> {
    source: &'a str,
    position: usize,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the current character, or `'\0'` at end of input.
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// Returns the character `offset` positions ahead of the cursor (0 =
    /// current), or `'\0'` past the end of input.
    pub fn peek_char(&self, offset: usize) -> char {
        let mut chars = self.source[self.position..].chars();
        for _ in 0..offset {
            chars.next();
        }
        chars.next().unwrap_or('\0')
    }

    /// Advances the cursor past the current character, updating line and
    /// column. Does nothing at end of input.
    pub fn advance(&mut self) {
        if let Some(c) = self.source[self.position..].chars().next() {
            self.position += c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source slice from `start` (a byte offset previously
    /// obtained from [`Cursor::position`]) up to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the unconsumed source text from the current position to
    /// the end.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }
}
