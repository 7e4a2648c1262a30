//! Dead-code elimination, run after constant
//! propagation since that pass is what creates most of the dead stores
//! and dead temps this removes.
//!
//! Three independent cleanups, each a counting pass followed by a filter:
//! 1. A variable never read anywhere loses every `Assign` that targets it.
//! 2. A variable read fewer times than it is assigned keeps only its last
//!    `Assign` (earlier stores are unobservable).
//! 3. A `CONST`-valued temp never read by a later instruction is dropped.

use std::collections::HashMap;

use crate::ir::{Instr, Operand, RValue};

fn var_reads(instrs: &[Instr]) -> HashMap<&str, u32> {
    let mut reads = HashMap::new();
    for instr in instrs {
        let read_operands: Vec<&Operand> = match instr {
            Instr::Assign { value, .. } => value.operands(),
            Instr::Print(op) | Instr::JumpIfFalse(op, _) => vec![op],
            Instr::Label(_) | Instr::Jump(_) => vec![],
        };
        for op in read_operands {
            if let Some(name) = op.var_name() {
                *reads.entry(name).or_insert(0) += 1;
            }
        }
    }
    reads
}

fn var_assign_indices(instrs: &[Instr]) -> HashMap<&str, Vec<usize>> {
    let mut sites: HashMap<&str, Vec<usize>> = HashMap::new();
    for (i, instr) in instrs.iter().enumerate() {
        if let Instr::Assign {
            dest: Operand::Var(name),
            ..
        } = instr
        {
            sites.entry(name).or_default().push(i);
        }
    }
    sites
}

fn temp_reads(instrs: &[Instr]) -> HashMap<u32, u32> {
    let mut reads = HashMap::new();
    for instr in instrs {
        if let Instr::Assign { value, .. } = instr {
            for op in value.operands() {
                if let Operand::Temp(id) = op {
                    *reads.entry(*id).or_insert(0) += 1;
                }
            }
        }
        let extra = match instr {
            Instr::Print(op) | Instr::JumpIfFalse(op, _) => Some(op),
            _ => None,
        };
        if let Some(Operand::Temp(id)) = extra {
            *reads.entry(*id).or_insert(0) += 1;
        }
    }
    reads
}

pub(crate) fn run(instrs: &mut Vec<Instr>) -> bool {
    let mut changed = false;

    // 1 & 2: unused variables, and variables assigned more than they're read.
    let reads = var_reads(instrs);
    let sites = var_assign_indices(instrs);
    let mut drop_indices: std::collections::HashSet<usize> = std::collections::HashSet::new();

    for (name, indices) in &sites {
        let read_count = *reads.get(name).unwrap_or(&0);
        if read_count == 0 {
            drop_indices.extend(indices.iter().copied());
        } else if (read_count as usize) < indices.len() {
            // Keep only the last store; earlier ones are never observed.
            drop_indices.extend(indices[..indices.len() - 1].iter().copied());
        }
    }

    if !drop_indices.is_empty() {
        changed = true;
        let mut i = 0;
        instrs.retain(|_| {
            let keep = !drop_indices.contains(&i);
            i += 1;
            keep
        });
    }

    // 3: unused LOAD_CONST-equivalent temps.
    loop {
        let reads = temp_reads(instrs);
        let before = instrs.len();
        instrs.retain(|instr| {
            if let Instr::Assign {
                dest: Operand::Temp(id),
                value: RValue::Use(Operand::Const(_)),
            } = instr
            {
                reads.get(id).copied().unwrap_or(0) > 0
            } else {
                true
            }
        });
        if instrs.len() == before {
            break;
        }
        changed = true;
    }

    changed
}
