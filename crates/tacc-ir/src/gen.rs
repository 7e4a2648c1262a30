//! AST → IR generation.
//!
//! Walks a [`tacc_par::Program`] and emits a flat [`IrModule`]. Also
//! carries the only semantic check this pipeline performs: that every
//! variable read or assigned was declared first — there's no separate
//! semantic-analysis stage since the language has no types to check
//! beyond that.

use indexmap::IndexSet;

use tacc_par::{Constant, Declaration, Expression, Program, Statement};
use tacc_util::{CompileError, Stage, StageError};

use crate::ir::{IrModule, Instr, Operand, RValue};
use crate::numeric;

/// Generates IR for a whole program.
pub fn generate(program: &Program) -> Result<IrModule, StageError> {
    let mut gen = Generator::new();
    gen.gen_program(program).map_err(|e| e.at(Stage::IrGenerator))?;
    Ok(IrModule::new(gen.instrs))
}

struct Generator {
    instrs: Vec<Instr>,
    temp_counter: u32,
    label_counter: u32,
    declared: IndexSet<String>,
}

impl Generator {
    fn new() -> Self {
        Self {
            instrs: Vec::new(),
            temp_counter: 0,
            label_counter: 0,
            declared: IndexSet::new(),
        }
    }

    fn emit(&mut self, instr: Instr) {
        self.instrs.push(instr);
    }

    fn fresh_temp(&mut self) -> Operand {
        let id = self.temp_counter;
        self.temp_counter += 1;
        Operand::Temp(id)
    }

    fn fresh_label_id(&mut self) -> u32 {
        let id = self.label_counter;
        self.label_counter += 1;
        id
    }

    fn gen_program(&mut self, program: &Program) -> Result<(), CompileError> {
        for decl in &program.declarations {
            self.gen_decl(decl)?;
        }
        for stmt in &program.statements {
            self.gen_stmt(stmt)?;
        }
        Ok(())
    }

    fn gen_decl(&mut self, decl: &Declaration) -> Result<(), CompileError> {
        let value = match &decl.initial_value {
            Some(expr) => self.gen_expr(expr)?,
            None => Operand::Const(Constant::Number("0".to_string())),
        };
        self.declared.insert(decl.name.clone());
        self.emit(Instr::Assign {
            dest: Operand::Var(decl.name.clone()),
            value: RValue::Use(value),
        });
        Ok(())
    }

    fn gen_stmt(&mut self, stmt: &Statement) -> Result<(), CompileError> {
        match stmt {
            Statement::Declaration(decl) => self.gen_decl(decl),
            Statement::Assignment { target, value, .. } => {
                if !self.declared.contains(target) {
                    return Err(CompileError::UndeclaredVariable(target.clone()));
                }
                let value = self.gen_expr(value)?;
                self.emit(Instr::Assign {
                    dest: Operand::Var(target.clone()),
                    value: RValue::Use(value),
                });
                Ok(())
            }
            Statement::Print { value, .. } => {
                let value = self.gen_expr(value)?;
                self.emit(Instr::Print(value));
                Ok(())
            }
            Statement::If {
                condition,
                then_branch,
                else_branch,
                ..
            } => {
                let cond = self.gen_expr(condition)?;
                let id = self.fresh_label_id();
                let end_label = format!("end_label_{id}");

                if let Some(else_branch) = else_branch {
                    let else_label = format!("else_label_{id}");
                    self.emit(Instr::JumpIfFalse(cond, else_label.clone()));
                    for stmt in then_branch {
                        self.gen_stmt(stmt)?;
                    }
                    self.emit(Instr::Jump(end_label.clone()));
                    self.emit(Instr::Label(else_label));
                    for stmt in else_branch {
                        self.gen_stmt(stmt)?;
                    }
                    self.emit(Instr::Label(end_label));
                } else {
                    self.emit(Instr::JumpIfFalse(cond, end_label.clone()));
                    for stmt in then_branch {
                        self.gen_stmt(stmt)?;
                    }
                    self.emit(Instr::Label(end_label));
                }
                Ok(())
            }
            Statement::While { condition, body, .. } => {
                let id = self.fresh_label_id();
                let start_label = format!("start_label_{id}");
                let end_label = format!("end_label_{id}");

                self.emit(Instr::Label(start_label.clone()));
                let cond = self.gen_expr(condition)?;
                self.emit(Instr::JumpIfFalse(cond, end_label.clone()));
                for stmt in body {
                    self.gen_stmt(stmt)?;
                }
                self.emit(Instr::Jump(start_label));
                self.emit(Instr::Label(end_label));
                Ok(())
            }
        }
    }

    fn gen_expr(&mut self, expr: &Expression) -> Result<Operand, CompileError> {
        match expr {
            Expression::Constant { value, .. } => Ok(Operand::Const(value.clone())),
            Expression::Identifier { name, .. } => {
                if !self.declared.contains(name) {
                    return Err(CompileError::UndeclaredVariable(name.clone()));
                }
                Ok(Operand::Var(name.clone()))
            }
            Expression::Input { .. } => {
                let dest = self.fresh_temp();
                self.emit(Instr::Assign {
                    dest: dest.clone(),
                    value: RValue::Input,
                });
                Ok(dest)
            }
            Expression::UnaryOp { op, operand, .. } => {
                let operand = self.gen_expr(operand)?;
                let dest = self.fresh_temp();
                let value = match &operand {
                    Operand::Const(c) => match numeric::as_number(c) {
                        Some(n) => RValue::Use(Operand::Const(numeric::fold_unop(*op, n))),
                        None => RValue::UnOp(*op, operand),
                    },
                    _ => RValue::UnOp(*op, operand),
                };
                self.emit(Instr::Assign { dest: dest.clone(), value });
                Ok(dest)
            }
            Expression::BinaryOp { op, left, right, .. } => {
                let left = self.gen_expr(left)?;
                let right = self.gen_expr(right)?;
                let dest = self.fresh_temp();
                // If both operands are already constants at emission time, fold
                // them into a single `LOAD_CONST` instead of emitting a `BINOP`.
                let value = match (&left, &right) {
                    (Operand::Const(l), Operand::Const(r)) => {
                        match (numeric::as_number(l), numeric::as_number(r)) {
                            (Some(lf), Some(rf)) => match numeric::fold_binop(*op, lf, rf) {
                                Some(folded) => RValue::Use(Operand::Const(folded)),
                                None => RValue::BinOp(*op, left, right),
                            },
                            _ => RValue::BinOp(*op, left, right),
                        }
                    }
                    _ => RValue::BinOp(*op, left, right),
                };
                self.emit(Instr::Assign { dest: dest.clone(), value });
                Ok(dest)
            }
        }
    }
}
