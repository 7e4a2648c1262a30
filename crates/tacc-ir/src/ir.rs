//! IR instruction set: a flat, linear three-address code with textual
//! jump targets instead of a basic-block graph.

use std::fmt;

use tacc_par::{BinaryOperator, Constant, UnaryOperator};

/// An operand to an instruction: a variable, a generator-introduced
/// temporary, or an inline literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operand {
    Var(String),
    Temp(u32),
    Const(Constant),
}

impl Operand {
    /// The variable name this operand reads, if it is a [`Operand::Var`].
    pub fn var_name(&self) -> Option<&str> {
        match self {
            Operand::Var(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Var(name) => write!(f, "{name}"),
            Operand::Temp(id) => write!(f, "t{id}"),
            Operand::Const(Constant::Number(n)) => write!(f, "{n}"),
            Operand::Const(Constant::Text(s)) => write!(f, "{s}"),
        }
    }
}

/// The right-hand side of an [`Instr::Assign`].
#[derive(Debug, Clone, PartialEq)]
pub enum RValue {
    Use(Operand),
    BinOp(BinaryOperator, Operand, Operand),
    UnOp(UnaryOperator, Operand),
    /// `SHIFT_LEFT a, n, t` — introduced by strength reduction only, never
    /// by the generator directly.
    Shift(Operand, u32),
    Input,
}

fn binop_mnemonic(op: BinaryOperator) -> &'static str {
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

fn unop_mnemonic(op: UnaryOperator) -> &'static str {
    match op {
        UnaryOperator::Not => "not",
    }
}

impl RValue {
    /// Every operand this value reads (not including the instruction's
    /// own destination). Shared by the optimizer passes that need to
    /// know which names an instruction depends on.
    pub fn operands(&self) -> Vec<&Operand> {
        match self {
            RValue::Use(a) => vec![a],
            RValue::BinOp(_, a, b) => vec![a, b],
            RValue::UnOp(_, a) => vec![a],
            RValue::Shift(a, _) => vec![a],
            RValue::Input => vec![],
        }
    }

    pub fn operands_mut(&mut self) -> Vec<&mut Operand> {
        match self {
            RValue::Use(a) => vec![a],
            RValue::BinOp(_, a, b) => vec![a, b],
            RValue::UnOp(_, a) => vec![a],
            RValue::Shift(a, _) => vec![a],
            RValue::Input => vec![],
        }
    }
}

impl fmt::Display for RValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RValue::Use(Operand::Const(value)) => {
                write!(f, "CONST {}", Operand::Const(value.clone()))
            }
            RValue::Use(operand) => write!(f, "COPY {operand}"),
            RValue::BinOp(op, left, right) => {
                write!(f, "BINOP {} {left} {right}", binop_mnemonic(*op))
            }
            RValue::UnOp(op, operand) => write!(f, "UNOP {} {operand}", unop_mnemonic(*op)),
            RValue::Shift(operand, amount) => write!(f, "SHIFT_LEFT {operand}, {amount}"),
            RValue::Input => write!(f, "INPUT"),
        }
    }
}

/// One instruction in the linear instruction stream.
#[derive(Debug, Clone, PartialEq)]
pub enum Instr {
    Label(String),
    Assign { dest: Operand, value: RValue },
    Print(Operand),
    Jump(String),
    JumpIfFalse(Operand, String),
}

impl Instr {
    /// Every operand this instruction reads, including (for an `Assign`)
    /// the destination when it is itself a variable — a store into a
    /// variable "references" that name for the purposes of dead-code
    /// elimination and loop-invariant code motion.
    pub fn referenced_vars(&self) -> Vec<&str> {
        let mut names = Vec::new();
        match self {
            Instr::Assign { dest, value } => {
                if let Some(n) = dest.var_name() {
                    names.push(n);
                }
                for op in value.operands() {
                    if let Some(n) = op.var_name() {
                        names.push(n);
                    }
                }
            }
            Instr::Print(op) | Instr::JumpIfFalse(op, _) => {
                if let Some(n) = op.var_name() {
                    names.push(n);
                }
            }
            Instr::Label(_) | Instr::Jump(_) => {}
        }
        names
    }
}

impl fmt::Display for Instr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instr::Label(name) => write!(f, "LABEL {name}"),
            Instr::Assign { dest, value } => write!(f, "{dest} = {value}"),
            Instr::Print(operand) => write!(f, "PRINT {operand}"),
            Instr::Jump(label) => write!(f, "JUMP {label}"),
            Instr::JumpIfFalse(operand, label) => write!(f, "JUMP_IF_FALSE {operand} {label}"),
        }
    }
}

/// A whole program's generated (or optimized) instruction stream.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IrModule {
    pub instrs: Vec<Instr>,
}

impl IrModule {
    pub fn new(instrs: Vec<Instr>) -> Self {
        Self { instrs }
    }

    /// Renders every instruction on its own line, in order — the
    /// deterministic textual form `--emit ir` prints.
    pub fn to_text(&self) -> String {
        self.instrs
            .iter()
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for IrModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_text())
    }
}
