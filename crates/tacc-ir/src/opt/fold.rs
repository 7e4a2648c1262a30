//! Constant folding: replaces a `BINOP`/`UNOP` whose operands are both
//! (or, for `UNOP`, whose one operand is) numeric literals with the
//! already-computed `CONST`. Delegates to [`crate::numeric`] for the
//! actual arithmetic, so this pass, the generator's inline folding, and
//! constant propagation all agree on the same typed integer/float rule.
//!
//! String constants are left alone — folding a `+` on two strings is a
//! runtime concatenation, not an arithmetic identity, and is the VM's
//! job.

use tacc_par::UnaryOperator;

use crate::ir::{Instr, Operand, RValue};
use crate::numeric;

pub(crate) fn run(instrs: &mut [Instr]) -> bool {
    let mut changed = false;
    for instr in instrs.iter_mut() {
        let Instr::Assign { value, .. } = instr else {
            continue;
        };
        let folded = match value {
            RValue::BinOp(op, Operand::Const(l), Operand::Const(r)) => {
                match (numeric::as_number(l), numeric::as_number(r)) {
                    (Some(lf), Some(rf)) => numeric::fold_binop(*op, lf, rf),
                    _ => None,
                }
            }
            RValue::UnOp(UnaryOperator::Not, Operand::Const(c)) => {
                numeric::as_number(c).map(|n| numeric::fold_unop(UnaryOperator::Not, n))
            }
            _ => None,
        };

        if let Some(c) = folded {
            *value = RValue::Use(Operand::Const(c));
            changed = true;
        }
    }
    changed
}
