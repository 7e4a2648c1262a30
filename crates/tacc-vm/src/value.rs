//! Runtime value domain: signed arbitrary-precision integer, 64-bit
//! float, or UTF-8 string. Variables and temps share this one domain;
//! there is no static type.
//!
//! This is a distinct type from `tacc_par::Constant`/`tacc_ir::Operand`'s
//! `Constant`, which carries numbers and strings as un-evaluated source
//! text (a string constant still has its quotes). `Value::from_constant`
//! is the one place that text becomes a real number or an unquoted
//! string, mirroring the interpreter's operand-evaluation rule: try
//! integer, then float, then strip quotes and treat the rest as a
//! string.

use std::fmt;

use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};

use tacc_par::{BinaryOperator, Constant, UnaryOperator};
use tacc_util::CompileError;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(BigInt),
    Float(f64),
    Str(String),
}

impl Value {
    /// Evaluates a compile-time literal into a runtime value, trying
    /// integer, then float, then string (with surrounding quotes
    /// stripped).
    pub fn from_constant(c: &Constant) -> Value {
        match c {
            Constant::Number(text) => Value::parse_number(text),
            Constant::Text(quoted) => Value::Str(unquote(quoted)),
        }
    }

    /// Parses a raw numeric token (no surrounding quotes) the same way
    /// `INPUT` parses a line of stdin: integer first, then float.
    pub fn parse_number(text: &str) -> Value {
        if let Ok(i) = text.parse::<BigInt>() {
            return Value::Int(i);
        }
        if let Ok(f) = text.parse::<f64>() {
            return Value::Float(f);
        }
        // The lexer only ever produces digit-and-at-most-one-dot text
        // for a `NUMBER` token, so this is unreachable on well-formed IR.
        Value::Str(text.to_string())
    }

    /// Parses one line of `INPUT`: integer, else float, else the raw
    /// string.
    pub fn parse_input(line: &str) -> Value {
        if let Ok(i) = line.parse::<BigInt>() {
            return Value::Int(i);
        }
        if let Ok(f) = line.parse::<f64>() {
            return Value::Float(f);
        }
        Value::Str(line.to_string())
    }

    /// "Falsy" per the glossary: integer 0, floating 0.0, or the empty
    /// string.
    pub fn is_falsy(&self) -> bool {
        match self {
            Value::Int(i) => i.is_zero(),
            Value::Float(f) => *f == 0.0,
            Value::Str(s) => s.is_empty(),
        }
    }

    fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => i.to_f64(),
            Value::Float(f) => Some(*f),
            Value::Str(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => write!(f, "{s}"),
        }
    }
}

fn unquote(text: &str) -> String {
    text.strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(text)
        .to_string()
}

fn bool_value(b: bool) -> Value {
    Value::Int(BigInt::from(b as i64))
}

/// Applies a binary operator to two runtime values. Integer/float mixing
/// promotes the integer operand to float; strings only support `==`/`!=`
/// — `+` concatenation and every other operator on strings is rejected.
pub fn apply_binop(op: BinaryOperator, left: &Value, right: &Value) -> Result<Value, CompileError> {
    if let (Value::Str(l), Value::Str(r)) = (left, right) {
        return match op {
            BinaryOperator::Eq => Ok(bool_value(l == r)),
            BinaryOperator::NotEq => Ok(bool_value(l != r)),
            other => Err(CompileError::InvalidStringOperation {
                op: binop_name(other).to_string(),
            }),
        };
    }

    if matches!(left, Value::Str(_)) || matches!(right, Value::Str(_)) {
        return Err(CompileError::InvalidStringOperation {
            op: binop_name(op).to_string(),
        });
    }

    if let (Value::Int(l), Value::Int(r)) = (left, right) {
        if let Some(v) = apply_int_binop(op, l, r)? {
            return Ok(v);
        }
    }

    // At least one operand is a float: promote both to f64.
    let (lf, rf) = (
        left.as_f64().expect("non-string operand always converts to f64"),
        right.as_f64().expect("non-string operand always converts to f64"),
    );
    apply_float_binop(op, lf, rf)
}

fn apply_int_binop(op: BinaryOperator, l: &BigInt, r: &BigInt) -> Result<Option<Value>, CompileError> {
    let v = match op {
        BinaryOperator::Add => Value::Int(l + r),
        BinaryOperator::Sub => Value::Int(l - r),
        BinaryOperator::Mul => Value::Int(l * r),
        BinaryOperator::Div => {
            if r.is_zero() {
                return Err(CompileError::DivisionByZero);
            }
            Value::Int(l / r)
        }
        BinaryOperator::Eq => bool_value(l == r),
        BinaryOperator::NotEq => bool_value(l != r),
        BinaryOperator::Lt => bool_value(l < r),
        BinaryOperator::LtEq => bool_value(l <= r),
        BinaryOperator::Gt => bool_value(l > r),
        BinaryOperator::GtEq => bool_value(l >= r),
        BinaryOperator::And => bool_value(!l.is_zero() && !r.is_zero()),
        BinaryOperator::Or => bool_value(!l.is_zero() || !r.is_zero()),
    };
    Ok(Some(v))
}

fn apply_float_binop(op: BinaryOperator, l: f64, r: f64) -> Result<Value, CompileError> {
    let v = match op {
        BinaryOperator::Add => Value::Float(l + r),
        BinaryOperator::Sub => Value::Float(l - r),
        BinaryOperator::Mul => Value::Float(l * r),
        BinaryOperator::Div => {
            if r == 0.0 {
                return Err(CompileError::DivisionByZero);
            }
            Value::Float(l / r)
        }
        BinaryOperator::Eq => bool_value(l == r),
        BinaryOperator::NotEq => bool_value(l != r),
        BinaryOperator::Lt => bool_value(l < r),
        BinaryOperator::LtEq => bool_value(l <= r),
        BinaryOperator::Gt => bool_value(l > r),
        BinaryOperator::GtEq => bool_value(l >= r),
        BinaryOperator::And => bool_value(l != 0.0 && r != 0.0),
        BinaryOperator::Or => bool_value(l != 0.0 || r != 0.0),
    };
    Ok(v)
}

pub fn apply_unop(op: UnaryOperator, operand: &Value) -> Result<Value, CompileError> {
    match op {
        UnaryOperator::Not => Ok(bool_value(operand.is_falsy())),
    }
}

/// `SHIFT_LEFT a, n, t`: `n` is always a non-negative literal shift
/// count baked in by strength reduction; `a` must be an integer at
/// runtime or this is a fatal type mismatch.
pub fn apply_shift(operand: &Value, amount: u32) -> Result<Value, CompileError> {
    match operand {
        Value::Int(i) => Ok(Value::Int(i << amount)),
        other => Err(CompileError::ShiftTypeMismatch(other.to_string())),
    }
}

fn binop_name(op: BinaryOperator) -> &'static str {
    match op {
        BinaryOperator::Add => "+",
        BinaryOperator::Sub => "-",
        BinaryOperator::Mul => "*",
        BinaryOperator::Div => "/",
        BinaryOperator::Eq => "==",
        BinaryOperator::NotEq => "!=",
        BinaryOperator::Lt => "<",
        BinaryOperator::LtEq => "<=",
        BinaryOperator::Gt => ">",
        BinaryOperator::GtEq => ">=",
        BinaryOperator::And => "and",
        BinaryOperator::Or => "or",
    }
}
