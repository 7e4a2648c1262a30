//! tacc-util — shared foundation types for the tacc compiler pipeline.
//!
//! Every other `tacc-*` crate depends on this one for source-location
//! tracking ([`Span`]) and the single fatal-error type every stage raises
//! ([`error::CompileError`], [`error::Stage`]).

pub mod error;
pub mod span;

pub use error::{CompileError, Stage, StageError};
pub use span::Span;
