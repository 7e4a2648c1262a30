//! Source location tracking.
//!
//! This language has exactly one compilation unit (a single source file),
//! so unlike a multi-file compiler's `Span` (byte range + `FileId`), all
//! this crate needs to reproduce a diagnostic is a 1-based line and
//! column.

/// A single source location, 1-based in both fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    pub line: u32,
    pub column: u32,
}

impl Span {
    pub const DUMMY: Span = Span { line: 0, column: 0 };

    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
