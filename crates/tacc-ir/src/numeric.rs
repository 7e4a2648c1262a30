//! Shared numeric-folding helpers, used both by the generator's inline
//! constant folding and by the optimizer's constant folding / constant
//! propagation passes, so every place that folds arithmetic agrees on
//! exactly one evaluation rule — the same integer/float split the VM
//! (`tacc_vm::value`) applies at runtime. Folding everything through
//! `f64` would diverge from that: arbitrary-precision integers lose
//! precision once converted, and integer division truncates while float
//! division doesn't, so optimized and unoptimized IR could print
//! different results for the same program.

use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};

use tacc_par::{BinaryOperator, Constant, UnaryOperator};

/// A parsed numeric literal, typed exactly like the VM's runtime value
/// domain restricted to its non-string cases.
pub(crate) enum Num {
    Int(BigInt),
    Float(f64),
}

impl Num {
    fn to_f64(&self) -> f64 {
        match self {
            Num::Int(i) => i.to_f64().unwrap_or(f64::NAN),
            Num::Float(f) => *f,
        }
    }

    fn is_zero(&self) -> bool {
        match self {
            Num::Int(i) => i.is_zero(),
            Num::Float(f) => *f == 0.0,
        }
    }
}

pub(crate) fn as_number(c: &Constant) -> Option<Num> {
    match c {
        Constant::Number(n) => Some(parse_number(n)),
        Constant::Text(_) => None,
    }
}

/// Parses a `NUMBER` token's text: integer first, float otherwise — the
/// same order the VM's `Value::parse_number` uses for literals and
/// `INPUT`.
fn parse_number(text: &str) -> Num {
    if let Ok(i) = text.parse::<BigInt>() {
        return Num::Int(i);
    }
    // A `NUMBER` token is always digits with at most one internal `.`,
    // so this always succeeds once the integer parse fails.
    Num::Float(text.parse().unwrap_or(0.0))
}

fn bool_num(b: bool) -> Constant {
    Constant::Number(if b { "1" } else { "0" }.to_string())
}

/// Folds a binary operator over two numeric literals the same way the
/// VM evaluates it at runtime: integer-op-integer stays an
/// arbitrary-precision integer with truncating division, and only
/// promotes to `f64` when at least one operand is already a float.
/// Returns `None` for division by zero, which is left for the VM to
/// report as a runtime error rather than silently folded away at
/// compile time.
pub(crate) fn fold_binop(op: BinaryOperator, left: Num, right: Num) -> Option<Constant> {
    match (left, right) {
        (Num::Int(l), Num::Int(r)) => fold_int_binop(op, &l, &r),
        (l, r) => fold_float_binop(op, l.to_f64(), r.to_f64()),
    }
}

fn fold_int_binop(op: BinaryOperator, l: &BigInt, r: &BigInt) -> Option<Constant> {
    let result = match op {
        BinaryOperator::Div if r.is_zero() => return None,
        BinaryOperator::Add => Constant::Number((l + r).to_string()),
        BinaryOperator::Sub => Constant::Number((l - r).to_string()),
        BinaryOperator::Mul => Constant::Number((l * r).to_string()),
        BinaryOperator::Div => Constant::Number((l / r).to_string()),
        BinaryOperator::Eq => bool_num(l == r),
        BinaryOperator::NotEq => bool_num(l != r),
        BinaryOperator::Lt => bool_num(l < r),
        BinaryOperator::LtEq => bool_num(l <= r),
        BinaryOperator::Gt => bool_num(l > r),
        BinaryOperator::GtEq => bool_num(l >= r),
        BinaryOperator::And => bool_num(!l.is_zero() && !r.is_zero()),
        BinaryOperator::Or => bool_num(!l.is_zero() || !r.is_zero()),
    };
    Some(result)
}

fn fold_float_binop(op: BinaryOperator, l: f64, r: f64) -> Option<Constant> {
    let result = match op {
        BinaryOperator::Div if r == 0.0 => return None,
        BinaryOperator::Add => Constant::Number((l + r).to_string()),
        BinaryOperator::Sub => Constant::Number((l - r).to_string()),
        BinaryOperator::Mul => Constant::Number((l * r).to_string()),
        BinaryOperator::Div => Constant::Number((l / r).to_string()),
        BinaryOperator::Eq => bool_num(l == r),
        BinaryOperator::NotEq => bool_num(l != r),
        BinaryOperator::Lt => bool_num(l < r),
        BinaryOperator::LtEq => bool_num(l <= r),
        BinaryOperator::Gt => bool_num(l > r),
        BinaryOperator::GtEq => bool_num(l >= r),
        BinaryOperator::And => bool_num(l != 0.0 && r != 0.0),
        BinaryOperator::Or => bool_num(l != 0.0 || r != 0.0),
    };
    Some(result)
}

pub(crate) fn fold_unop(op: UnaryOperator, operand: Num) -> Constant {
    match op {
        UnaryOperator::Not => bool_num(operand.is_zero()),
    }
}

/// "Falsy" per the glossary: a zero integer/float, or the empty string
/// (stored with its surrounding quotes).
pub(crate) fn is_falsy(c: &Constant) -> bool {
    match c {
        Constant::Number(n) => parse_number(n).is_zero(),
        Constant::Text(s) => s == "\"\"",
    }
}
