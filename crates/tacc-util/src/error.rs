//! `CompileError` — the one error type shared by every pipeline stage.
//!
//! The taxonomy is flat (lexical, syntactic, semantic/runtime, I/O) and
//! the propagation policy is uniform: every error is fatal, carries the
//! stage name and, where available, a line number, and aborts the
//! pipeline. One enum covers all four kinds, matching that flat
//! taxonomy directly rather than a separate error type per crate.

use thiserror::Error;

use crate::Span;

/// A named pipeline stage, used both for error messages and for the
/// `--emit` style stop-after-stage controls in `tacc-drv`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Lexer,
    Parser,
    IrGenerator,
    Optimizer,
    Interpreter,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::Lexer => "Lexical Analysis",
            Stage::Parser => "Parsing",
            Stage::IrGenerator => "CodeGenerator",
            Stage::Optimizer => "Optimizer",
            Stage::Interpreter => "Execute",
        };
        write!(f, "{name}")
    }
}

/// Fatal error from any pipeline stage.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("unterminated string literal at {0}")]
    UnterminatedString(Span),

    #[error("identifier begins with a digit at {0}")]
    IdentifierBeginsWithDigit(Span),

    #[error("unrecognized character '{ch}' at {span}")]
    UnrecognizedCharacter { ch: char, span: Span },

    #[error("unexpected token '{found}' at {span}")]
    UnexpectedToken { found: String, span: Span },

    #[error("unexpected end of input, expected '{expected}'")]
    UnexpectedEof { expected: String },

    #[error("invalid identifier '{found}' after 'var' at {span}")]
    InvalidIdentifier { found: String, span: Span },

    #[error("unexpected token '{found}' after 'end' at {span}")]
    TrailingTokens { found: String, span: Span },

    #[error("undeclared variable '{0}' referenced")]
    UndeclaredVariable(String),

    #[error("undeclared temp '{0}' referenced")]
    UndeclaredTemp(String),

    #[error("unknown label '{0}' in jump")]
    UnknownLabel(String),

    #[error("SHIFT_LEFT requires integer operands, got {0}")]
    ShiftTypeMismatch(String),

    #[error("division by zero")]
    DivisionByZero,

    #[error("unsupported operation '{op}' on string operands")]
    InvalidStringOperation { op: String },

    #[error("malformed IR instruction: {0}")]
    MalformedIr(String),

    #[error("could not read source file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Pairs a [`CompileError`] with the stage it was raised from, for the
/// pipeline driver's `Error during compilation pipeline at stage <stage>:
/// <msg>` report.
#[derive(Debug, Error)]
#[error("Error during compilation pipeline at stage {stage}: {error}")]
pub struct StageError {
    pub stage: Stage,
    #[source]
    pub error: CompileError,
}

impl CompileError {
    pub fn at(self, stage: Stage) -> StageError {
        StageError { stage, error: self }
    }
}
