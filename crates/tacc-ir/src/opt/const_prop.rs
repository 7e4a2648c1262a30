//! Constant propagation: a forward scan that tracks which variables and
//! temps currently hold a known constant value, rewriting reads of those
//! names to `CONST` and folding `BINOP`/`UNOP` instructions whose operands
//! are both known constants.
//!
//! Both maps are cleared at every `LABEL` — a label is a control-flow
//! merge point, and a fact true on one incoming path isn't necessarily
//! true on another. Clearing happens unconditionally, including
//! for `end_label_*` targets only reachable by a forward jump, which is
//! conservative (it can only drop a fact, never keep a stale one) rather
//! than unsound.

use indexmap::IndexMap;

use tacc_par::{Constant, UnaryOperator};

use crate::ir::{Instr, Operand, RValue};
use crate::numeric::{self, as_number, is_falsy};

/// The two maps a constant-propagation scan threads through the program:
/// known variable values and known temp values, kept separate since they
/// never alias each other.
#[derive(Default)]
struct KnownValues {
    vars: IndexMap<String, Constant>,
    temps: IndexMap<u32, Constant>,
}

impl KnownValues {
    fn clear(&mut self) {
        self.vars.clear();
        self.temps.clear();
    }

    fn resolve(&self, op: &Operand) -> Option<Constant> {
        match op {
            Operand::Const(c) => Some(c.clone()),
            Operand::Var(name) => self.vars.get(name).cloned(),
            Operand::Temp(id) => self.temps.get(id).cloned(),
        }
    }

    fn forget(&mut self, dest: &Operand) {
        match dest {
            Operand::Var(name) => {
                self.vars.shift_remove(name);
            }
            Operand::Temp(id) => {
                self.temps.shift_remove(id);
            }
            Operand::Const(_) => {}
        }
    }

    fn record(&mut self, dest: &Operand, value: &Constant) {
        match dest {
            Operand::Var(name) => {
                self.vars.insert(name.clone(), value.clone());
            }
            Operand::Temp(id) => {
                self.temps.insert(*id, value.clone());
            }
            Operand::Const(_) => {}
        }
    }
}

pub(crate) fn run(instrs: &mut Vec<Instr>) -> bool {
    let mut changed = false;
    let mut known = KnownValues::default();
    let mut new_instrs: Vec<Instr> = Vec::with_capacity(instrs.len());

    for instr in instrs.drain(..) {
        match instr {
            Instr::Label(name) => {
                known.clear();
                new_instrs.push(Instr::Label(name));
            }
            Instr::Assign { dest, mut value } => {
                for operand in value.operands_mut() {
                    if matches!(operand, Operand::Const(_)) {
                        continue;
                    }
                    if let Some(c) = known.resolve(operand) {
                        *operand = Operand::Const(c);
                        changed = true;
                    }
                }

                value = match value {
                    RValue::BinOp(op, Operand::Const(l), Operand::Const(r)) => {
                        match (as_number(&l), as_number(&r)) {
                            (Some(lf), Some(rf)) => match numeric::fold_binop(op, lf, rf) {
                                Some(folded) => {
                                    changed = true;
                                    RValue::Use(Operand::Const(folded))
                                }
                                None => RValue::BinOp(op, Operand::Const(l), Operand::Const(r)),
                            },
                            _ => RValue::BinOp(op, Operand::Const(l), Operand::Const(r)),
                        }
                    }
                    RValue::UnOp(UnaryOperator::Not, Operand::Const(c)) => match as_number(&c) {
                        Some(n) => {
                            changed = true;
                            RValue::Use(Operand::Const(numeric::fold_unop(UnaryOperator::Not, n)))
                        }
                        None => RValue::UnOp(UnaryOperator::Not, Operand::Const(c)),
                    },
                    other => other,
                };

                match &value {
                    RValue::Use(Operand::Const(c)) => known.record(&dest, c),
                    _ => known.forget(&dest),
                }

                new_instrs.push(Instr::Assign { dest, value });
            }
            // `PRINT` isn't part of the constant-propagation rewrite set
            // (only LOAD/BINOP/UNARY/JUMP_IF_FALSE are) — leaving its
            // operand alone keeps the temp it names "referenced", which is
            // exactly what lets dead-code elimination's "last write wins"
            // rule and "unused CONST temp" rule stay meaningful downstream.
            Instr::Print(operand) => new_instrs.push(Instr::Print(operand)),
            Instr::JumpIfFalse(operand, label) => {
                if let Some(c) = known.resolve(&operand) {
                    changed = true;
                    if is_falsy(&c) {
                        new_instrs.push(Instr::Jump(label));
                    }
                    // truthy: the branch is never taken, drop the check entirely.
                } else {
                    new_instrs.push(Instr::JumpIfFalse(operand, label));
                }
            }
            Instr::Jump(label) => new_instrs.push(Instr::Jump(label)),
        }
    }

    *instrs = new_instrs;
    changed
}
