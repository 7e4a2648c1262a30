//! Loop-invariant code motion.
//!
//! A loop region is bounded structurally, not by a dataflow CFG: it's
//! everything between a `LABEL start_label_*` and the next
//! `LABEL end_label_*`. Any instruction in that span that references none
//! of the variables assigned inside it is invariant across iterations and
//! is hoisted to just before the `start_label`, in the same relative
//! order other hoisted instructions were found in. If a `start_label_*`
//! has no later `end_label_*`, the region is empty and nothing moves
//! (the specified tie-break for an unmatched start label).

use crate::ir::{Instr, Operand};

fn is_start_label(name: &str) -> bool {
    name.starts_with("start_label_")
}

fn is_end_label(name: &str) -> bool {
    name.starts_with("end_label_")
}

fn assigned_vars_in(instrs: &[Instr], range: std::ops::Range<usize>) -> std::collections::HashSet<String> {
    instrs[range]
        .iter()
        .filter_map(|instr| match instr {
            Instr::Assign {
                dest: Operand::Var(name),
                ..
            } => Some(name.clone()),
            _ => None,
        })
        .collect()
}

/// True when `instr` is a candidate for hoisting: it has operands (is
/// not a control-flow marker) and none of those operands name a variable
/// assigned somewhere in the loop.
fn is_invariant(instr: &Instr, loop_vars: &std::collections::HashSet<String>) -> bool {
    match instr {
        // Control flow never moves, regardless of what it references —
        // moving the loop's own exit check would break the loop.
        Instr::Label(_) | Instr::Jump(_) | Instr::JumpIfFalse(..) => false,
        Instr::Assign { .. } | Instr::Print(_) => {
            instr.referenced_vars().iter().all(|name| !loop_vars.contains(*name))
        }
    }
}

pub(crate) fn run(instrs: &mut Vec<Instr>) -> bool {
    let mut changed = false;

    let mut start_idx = 0;
    while start_idx < instrs.len() {
        let is_start = matches!(&instrs[start_idx], Instr::Label(name) if is_start_label(name));
        if !is_start {
            start_idx += 1;
            continue;
        }

        let end_idx = instrs[start_idx + 1..]
            .iter()
            .position(|instr| matches!(instr, Instr::Label(name) if is_end_label(name)))
            .map(|offset| start_idx + 1 + offset);

        let Some(end_idx) = end_idx else {
            start_idx += 1;
            continue;
        };

        let loop_vars = assigned_vars_in(instrs, start_idx + 1..end_idx);
        let region: Vec<(usize, Instr)> = instrs[start_idx + 1..end_idx]
            .iter()
            .cloned()
            .enumerate()
            .map(|(i, instr)| (start_idx + 1 + i, instr))
            .collect();

        let mut hoisted = Vec::new();
        let mut remove: std::collections::HashSet<usize> = std::collections::HashSet::new();
        for (idx, instr) in &region {
            if is_invariant(instr, &loop_vars) {
                hoisted.push(instr.clone());
                remove.insert(*idx);
            }
        }

        if !hoisted.is_empty() {
            changed = true;
            let mut rebuilt = Vec::with_capacity(instrs.len());
            rebuilt.extend_from_slice(&instrs[..start_idx]);
            rebuilt.extend(hoisted.clone());
            for (idx, instr) in instrs[start_idx..].iter().enumerate().map(|(i, v)| (start_idx + i, v)) {
                if !remove.contains(&idx) {
                    rebuilt.push(instr.clone());
                }
            }
            *instrs = rebuilt;
            // The hoisted instructions shifted everything; re-scan from
            // just after the relocated block rather than re-deriving
            // every offset by hand.
            start_idx += hoisted.len() + 1;
            continue;
        }

        start_idx = end_idx + 1;
    }

    changed
}
