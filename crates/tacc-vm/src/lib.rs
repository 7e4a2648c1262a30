//! Register-based interpreter for optimized three-address IR.

mod interp;
mod value;

pub use interp::{run, run_with_io};
pub use value::Value;

#[cfg(test)]
mod edge_cases;
