//! Common subexpression elimination: within a label-bounded region, a
//! `BINOP`/`UNOP` that recomputes an operator/operand pair already
//! computed is rewritten to copy the earlier result instead.
//!
//! The available-expression cache is cleared at every `LABEL`, since a
//! label is a control-flow merge point and an expression available on
//! one incoming path isn't necessarily available on another —
//! `indexmap::IndexMap` keeps its clears and lookups in insertion order
//! so two runs over the same IR never disagree about which duplicate
//! wins. It is also purged, per variable, whenever that variable is
//! stored to: a cached `a + b` is no longer available once `a` has been
//! reassigned, even without an intervening label. Commutative operators
//! canonicalize their operand pair (sorted) before the cache key is
//! built, so `a + b` and `b + a` hit the same entry.

use indexmap::IndexMap;

use tacc_par::{BinaryOperator, UnaryOperator};

use crate::ir::{Instr, Operand, RValue};

fn is_commutative(op: BinaryOperator) -> bool {
    matches!(
        op,
        BinaryOperator::Add
            | BinaryOperator::Mul
            | BinaryOperator::Eq
            | BinaryOperator::NotEq
            | BinaryOperator::LtEq
            | BinaryOperator::GtEq
            | BinaryOperator::And
            | BinaryOperator::Or
    )
}

fn binop_key(op: BinaryOperator, left: &Operand, right: &Operand) -> (BinaryOperator, Operand, Operand) {
    if is_commutative(op) && right < left {
        (op, right.clone(), left.clone())
    } else {
        (op, left.clone(), right.clone())
    }
}

/// Drops every cache entry whose key mentions `var` — the variable a
/// `STORE` just wrote a new value into.
fn invalidate(
    binop_cache: &mut IndexMap<(BinaryOperator, Operand, Operand), Operand>,
    unop_cache: &mut IndexMap<(UnaryOperator, Operand), Operand>,
    var: &Operand,
) {
    binop_cache.retain(|(_, l, r), _| l != var && r != var);
    unop_cache.retain(|(_, a), _| a != var);
}

pub(crate) fn run(instrs: &mut [Instr]) -> bool {
    let mut changed = false;
    let mut binop_cache: IndexMap<(BinaryOperator, Operand, Operand), Operand> = IndexMap::new();
    let mut unop_cache: IndexMap<(UnaryOperator, Operand), Operand> = IndexMap::new();

    for instr in instrs.iter_mut() {
        match instr {
            Instr::Label(_) => {
                binop_cache.clear();
                unop_cache.clear();
            }
            Instr::Assign { dest, value } => {
                if matches!(dest, Operand::Var(_)) {
                    invalidate(&mut binop_cache, &mut unop_cache, dest);
                }

                match value {
                    RValue::BinOp(op, left, right) => {
                        let key = binop_key(*op, left, right);
                        if let Some(existing) = binop_cache.get(&key) {
                            *value = RValue::Use(existing.clone());
                            changed = true;
                        } else if key.1 != *dest && key.2 != *dest {
                            binop_cache.insert(key, dest.clone());
                        }
                    }
                    RValue::UnOp(op, operand) => {
                        let key = (*op, operand.clone());
                        if let Some(existing) = unop_cache.get(&key) {
                            *value = RValue::Use(existing.clone());
                            changed = true;
                        } else if key.1 != *dest {
                            unop_cache.insert(key, dest.clone());
                        }
                    }
                    _ => {}
                }
            }
            _ => {}
        }
    }
    changed
}
