//! The interpreter: a small register-file virtual machine executing an
//! already-generated-and-optimized [`IrModule`].
//!
//! Dispatch is a single `match` over the closed [`Instr`]/[`RValue`]
//! enums — a dense table from opcode to handler, rather than dispatch by
//! name lookup.
//!
//! The VM's states are `Fetch`, `Dispatch`, `Halt`, `Error`. Rust's
//! `?`-propagating `Result` loop already *is* that state machine: `run`
//! is `Fetch` (the `while pc < len` check), `step` is `Dispatch`,
//! returning `Ok(())` falls through to the next `Fetch` (or `Halt` when
//! the loop condition fails), and `Err` is `Error` — unwinding
//! immediately rather than a handwritten four-variant enum that would
//! just re-describe control flow the borrow checker already tracks.

use std::io::{BufRead, Write};

use rustc_hash::FxHashMap;

use tacc_ir::{Instr, IrModule, Operand, RValue};
use tacc_util::{CompileError, Stage, StageError};

use crate::value::{self, Value};

/// Runs `module` to completion against real stdin/stdout.
pub fn run(module: &IrModule) -> Result<(), StageError> {
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout().lock();
    run_with_io(module, &mut input, &mut output)
}

/// Runs `module` against the given reader/writer, for tests that need to
/// supply canned `INPUT` lines and capture `PRINT` output without
/// touching the process's real stdio.
pub fn run_with_io(
    module: &IrModule,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Result<(), StageError> {
    Interpreter::new(&module.instrs, input, output)
        .run()
        .map_err(|e| e.at(Stage::Interpreter))
}

struct Interpreter<'a> {
    instrs: &'a [Instr],
    variables: FxHashMap<String, Value>,
    temps: FxHashMap<u32, Value>,
    labels: FxHashMap<String, usize>,
    pc: usize,
    input: &'a mut dyn BufRead,
    output: &'a mut dyn Write,
}

impl<'a> Interpreter<'a> {
    fn new(instrs: &'a [Instr], input: &'a mut dyn BufRead, output: &'a mut dyn Write) -> Self {
        // Startup: scan once and record every label's instruction index.
        let mut labels = FxHashMap::default();
        for (i, instr) in instrs.iter().enumerate() {
            if let Instr::Label(name) = instr {
                labels.insert(name.clone(), i);
            }
        }

        Self {
            instrs,
            variables: FxHashMap::default(),
            temps: FxHashMap::default(),
            labels,
            pc: 0,
            input,
            output,
        }
    }

    fn run(&mut self) -> Result<(), CompileError> {
        while self.pc < self.instrs.len() {
            self.step()?;
        }
        Ok(())
    }

    /// Fetches the instruction at `pc` and dispatches on it. Cloned out of
    /// the borrowed instruction stream so evaluating operands (which needs
    /// `&mut self` for `INPUT`) doesn't fight the borrow checker over a
    /// reference into `self.instrs`.
    fn step(&mut self) -> Result<(), CompileError> {
        let instr = self.instrs[self.pc].clone();
        match instr {
            Instr::Label(_) => {
                self.pc += 1;
            }
            Instr::Assign { dest, value } => {
                let v = self.eval(&value)?;
                self.store(&dest, v);
                self.pc += 1;
            }
            Instr::Print(operand) => {
                let v = self.resolve(&operand)?;
                writeln!(self.output, "{v}").map_err(|e| CompileError::Io {
                    path: "<stdout>".to_string(),
                    source: e,
                })?;
                self.pc += 1;
            }
            Instr::Jump(label) => {
                self.pc = self.resolve_label(&label)?;
            }
            Instr::JumpIfFalse(operand, label) => {
                let v = self.resolve(&operand)?;
                if v.is_falsy() {
                    self.pc = self.resolve_label(&label)?;
                } else {
                    self.pc += 1;
                }
            }
        }
        Ok(())
    }

    fn eval(&mut self, value: &RValue) -> Result<Value, CompileError> {
        match value {
            RValue::Use(operand) => self.resolve(operand),
            RValue::BinOp(op, left, right) => {
                let l = self.resolve(left)?;
                let r = self.resolve(right)?;
                value::apply_binop(*op, &l, &r)
            }
            RValue::UnOp(op, operand) => {
                let v = self.resolve(operand)?;
                value::apply_unop(*op, &v)
            }
            RValue::Shift(operand, amount) => {
                let v = self.resolve(operand)?;
                value::apply_shift(&v, *amount)
            }
            RValue::Input => {
                let mut line = String::new();
                self.input.read_line(&mut line).map_err(|e| CompileError::Io {
                    path: "<stdin>".to_string(),
                    source: e,
                })?;
                let line = line.trim_end_matches(['\n', '\r']);
                Ok(Value::parse_input(line))
            }
        }
    }

    fn resolve(&self, operand: &Operand) -> Result<Value, CompileError> {
        match operand {
            Operand::Const(c) => Ok(Value::from_constant(c)),
            Operand::Var(name) => self
                .variables
                .get(name.as_str())
                .cloned()
                .ok_or_else(|| CompileError::UndeclaredVariable(name.clone())),
            Operand::Temp(id) => self
                .temps
                .get(id)
                .cloned()
                .ok_or_else(|| CompileError::UndeclaredTemp(format!("t{id}"))),
        }
    }

    fn store(&mut self, dest: &Operand, value: Value) {
        match dest {
            Operand::Var(name) => {
                self.variables.insert(name.clone(), value);
            }
            Operand::Temp(id) => {
                self.temps.insert(*id, value);
            }
            Operand::Const(_) => unreachable!("the generator never assigns into a literal"),
        }
    }

    fn resolve_label(&self, label: &str) -> Result<usize, CompileError> {
        self.labels
            .get(label)
            .copied()
            .ok_or_else(|| CompileError::UnknownLabel(label.to_string()))
    }
}
