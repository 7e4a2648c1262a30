//! Flat three-address intermediate representation, generator and
//! optimizer for the tacc source language.
//!
//! A basic-block control-flow graph would be the conventional MIR shape,
//! but this language's optimizer passes are instead defined directly over
//! a flat `Vec<Instr>` with textual labels, so that's the representation
//! kept here — a dominator-tree-style CFG would be machinery nothing in
//! this pipeline ever queries.

pub mod gen;
pub mod ir;
mod numeric;
pub mod opt;

#[cfg(test)]
mod edge_cases;
#[cfg(test)]
mod proptests;

pub use gen::generate;
pub use ir::{IrModule, Instr, Operand, RValue};
pub use opt::optimize;
