//! Strength reduction: algebraic identities that replace a `BINOP` with
//! something cheaper — an identity use, a known-zero constant, or (for
//! multiplication by two) a single addition.

use tacc_par::{BinaryOperator, Constant};

use crate::ir::{Instr, Operand, RValue};

fn is_number(op: &Operand, n: f64) -> bool {
    matches!(op, Operand::Const(Constant::Number(s)) if s.parse::<f64>() == Ok(n))
}

fn zero() -> Operand {
    Operand::Const(Constant::Number("0".to_string()))
}

/// An integer literal that is a positive power of two, returned as its
/// `log2` (the resulting shift amount). Float
/// literals (anything containing `.`) are never a shift candidate.
fn power_of_two_exponent(op: &Operand) -> Option<u32> {
    let Operand::Const(Constant::Number(s)) = op else {
        return None;
    };
    if s.contains('.') {
        return None;
    }
    let n: i64 = s.parse().ok()?;
    if n > 0 && (n & (n - 1)) == 0 {
        Some(n.trailing_zeros())
    } else {
        None
    }
}

pub(crate) fn run(instrs: &mut [Instr]) -> bool {
    let mut changed = false;
    for instr in instrs.iter_mut() {
        let Instr::Assign { value, .. } = instr else {
            continue;
        };
        let RValue::BinOp(op, left, right) = value else {
            continue;
        };

        let reduced = match op {
            BinaryOperator::Mul if is_number(left, 0.0) || is_number(right, 0.0) => {
                Some(RValue::Use(zero()))
            }
            BinaryOperator::Mul if is_number(left, 1.0) => Some(RValue::Use(right.clone())),
            BinaryOperator::Mul if is_number(right, 1.0) => Some(RValue::Use(left.clone())),
            // `x * n` / `n * x` where n is a positive power of two becomes
            // `SHIFT_LEFT x, log2(n)`.
            BinaryOperator::Mul if power_of_two_exponent(right).is_some() => {
                let shift = power_of_two_exponent(right).unwrap();
                Some(RValue::Shift(left.clone(), shift))
            }
            BinaryOperator::Mul if power_of_two_exponent(left).is_some() => {
                let shift = power_of_two_exponent(left).unwrap();
                Some(RValue::Shift(right.clone(), shift))
            }
            BinaryOperator::Div if is_number(right, 1.0) => Some(RValue::Use(left.clone())),
            BinaryOperator::Add if is_number(left, 0.0) => Some(RValue::Use(right.clone())),
            BinaryOperator::Add if is_number(right, 0.0) => Some(RValue::Use(left.clone())),
            BinaryOperator::Sub if is_number(right, 0.0) => Some(RValue::Use(left.clone())),
            _ => None,
        };

        if let Some(reduced) = reduced {
            *value = reduced;
            changed = true;
        }
    }
    changed
}
