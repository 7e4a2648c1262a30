//! Pipeline orchestration: reads a source file and drives it through
//! lex → parse → generate → optimize → execute, in that fixed order.

use std::fs;
use std::path::{Path, PathBuf};

use tacc_util::{CompileError, Stage, StageError};

/// What pipeline artifact a [`Session`] should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitType {
    Tokens,
    Ast,
    Ir,
    OptimizedIr,
    Run,
}

/// Compilation configuration for one source file.
#[derive(Debug, Clone)]
pub struct Config {
    pub source_path: PathBuf,
    pub emit: EmitType,
    pub optimize: bool,
}

impl Config {
    pub fn new(source_path: impl Into<PathBuf>) -> Self {
        Self {
            source_path: source_path.into(),
            emit: EmitType::Run,
            optimize: true,
        }
    }
}

/// Owns one compilation end to end. Every stage runs on the calling
/// thread, with no suspension points, so `compile` is a single
/// synchronous call.
pub struct Session {
    config: Config,
    /// Captured `--emit` output, for callers (tests, a future `--emit`
    /// flag in `main.rs`) that want the artifact text rather than having
    /// it printed directly.
    pub output: String,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            output: String::new(),
        }
    }

    /// Runs the full pipeline. On success, `self.output` holds whatever
    /// `self.config.emit` asked for; `PRINT`/`INPUT` (only reachable via
    /// `EmitType::Run`) talk to the process's real stdio directly.
    pub fn compile(&mut self) -> Result<(), StageError> {
        let source = read_source(&self.config.source_path)?;

        let tokens = tacc_lex::lex(&source)?;
        if self.config.emit == EmitType::Tokens {
            self.output = tokens
                .iter()
                .map(|t| t.text.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            return Ok(());
        }

        let ast = tacc_par::parse(&tokens)?;
        if self.config.emit == EmitType::Ast {
            self.output = tacc_par::pretty_print(&ast);
            return Ok(());
        }

        let module = tacc_ir::generate(&ast)?;
        if self.config.emit == EmitType::Ir && !self.config.optimize {
            self.output = module.to_text();
            return Ok(());
        }

        let module = if self.config.optimize {
            tacc_ir::optimize(&module)
        } else {
            module
        };

        if self.config.emit == EmitType::Ir || self.config.emit == EmitType::OptimizedIr {
            self.output = module.to_text();
            return Ok(());
        }

        tacc_vm::run(&module)
    }
}

fn read_source(path: &Path) -> Result<String, StageError> {
    fs::read_to_string(path).map_err(|source| {
        CompileError::Io {
            path: path.display().to_string(),
            source,
        }
        .at(Stage::Lexer)
    })
}
