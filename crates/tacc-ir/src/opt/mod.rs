//! Optimizer pass pipeline.
//!
//! Six passes, run once in a fixed order known to be sufficient:
//! constant folding and common-subexpression elimination first (folding
//! is also applied inline during generation, see [`crate::gen`], but
//! re-running it here catches foldable expressions CSE or constant
//! propagation exposes), then constant propagation, then dead-code
//! elimination (which depends on propagation having created the dead
//! temps/stores it removes), then strength reduction, then loop-invariant
//! code motion (run last so it moves the smallest possible set of
//! instructions).

mod const_prop;
mod cse;
mod dead_code;
mod fold;
mod licm;
mod reduce;

use crate::ir::IrModule;

/// Runs the full optimizer pipeline over `module`, returning a new,
/// optimized module. `module` itself is left untouched so callers can
/// still diff optimized output against the unoptimized IR (the
/// "semantic preservation of optimization" property needs both).
pub fn optimize(module: &IrModule) -> IrModule {
    let mut instrs = module.instrs.clone();

    fold::run(&mut instrs);
    cse::run(&mut instrs);
    const_prop::run(&mut instrs);
    dead_code::run(&mut instrs);
    reduce::run(&mut instrs);
    licm::run(&mut instrs);

    IrModule::new(instrs)
}
