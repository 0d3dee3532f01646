//! Recursive backtracking interpreter (spec §4.3).

use treematch_bytecode::{GroupId, Instruction, Program, Slot};
use treematch_core::Element;

use crate::capture::{resolve_path, Captures};
use crate::error::RuntimeError;
use crate::limits::Limits;
use crate::tracer::{NoopTracer, Tracer};

/// The outcome of a successful run: where the cursor ended up, and every
/// capture recorded along the winning thread.
#[derive(Clone, Debug)]
pub struct Outcome {
    pub end: usize,
    pub captures: Captures,
}

/// A backtracking interpreter for one [`Program`] execution.
///
/// Carries only resource counters; it is cheap to build one per search
/// position (see `treematch`'s search driver).
pub struct Vm {
    limits: Limits,
    steps_remaining: u32,
    recursion_depth: u32,
}

impl Vm {
    pub fn new() -> Self {
        Self::with_limits(Limits::default())
    }

    pub fn with_limits(limits: Limits) -> Self {
        Self {
            steps_remaining: limits.get_step_budget(),
            recursion_depth: 0,
            limits,
        }
    }

    /// Try to match `program` against `node` starting at `start_idx`.
    ///
    /// `node` is also the root captures resolve `path` against — i.e. the
    /// node the caller is attempting a match at, not the whole haystack.
    pub fn run(
        &mut self,
        program: &Program,
        node: &Element,
        start_idx: usize,
    ) -> Result<Option<Outcome>, RuntimeError> {
        self.run_with_tracer(program, node, start_idx, &mut NoopTracer)
    }

    pub fn run_with_tracer(
        &mut self,
        program: &Program,
        node: &Element,
        start_idx: usize,
        tracer: &mut impl Tracer,
    ) -> Result<Option<Outcome>, RuntimeError> {
        self.steps_remaining = self.limits.get_step_budget();
        self.recursion_depth = 0;
        let mut captures = Captures::new();
        let mut path = Vec::new();
        let end = self.exec(
            program,
            0,
            node,
            node,
            start_idx,
            &mut path,
            &mut captures,
            tracer,
        )?;
        Ok(end.map(|end| Outcome { end, captures }))
    }

    fn tick(&mut self) -> Result<(), RuntimeError> {
        if self.steps_remaining == 0 {
            return Err(RuntimeError::StepBudgetExhausted);
        }
        self.steps_remaining -= 1;
        Ok(())
    }

    /// `root` is the node captures are resolved against; `node` is the
    /// sequence the current `idx` cursor moves through (equal to `root` at
    /// the top level, a descendant after `DESCEND`).
    #[allow(clippy::too_many_arguments)]
    fn exec(
        &mut self,
        program: &Program,
        mut pc: usize,
        root: &Element,
        node: &Element,
        mut idx: usize,
        path: &mut Vec<usize>,
        captures: &mut Captures,
        tracer: &mut impl Tracer,
    ) -> Result<Option<usize>, RuntimeError> {
        self.recursion_depth += 1;
        if self.recursion_depth > self.limits.get_recursion_limit() {
            self.recursion_depth -= 1;
            return Err(RuntimeError::RecursionLimitExceeded);
        }
        let result = self.exec_loop(program, &mut pc, root, node, &mut idx, path, captures, tracer);
        self.recursion_depth -= 1;
        result
    }

    #[allow(clippy::too_many_arguments)]
    fn exec_loop(
        &mut self,
        program: &Program,
        pc: &mut usize,
        root: &Element,
        node: &Element,
        idx: &mut usize,
        path: &mut Vec<usize>,
        captures: &mut Captures,
        tracer: &mut impl Tracer,
    ) -> Result<Option<usize>, RuntimeError> {
        let children = node.as_seq().unwrap_or(&[]);
        loop {
            self.tick()?;
            let instruction = &program.instructions()[*pc];
            tracer.trace_instruction(*pc, instruction);
            match instruction {
                Instruction::Match(value) => {
                    if *idx < children.len() && children[*idx] == *value {
                        *idx += 1;
                        *pc += 1;
                    } else {
                        tracer.trace_fail(*pc);
                        return Ok(None);
                    }
                }
                Instruction::Any => {
                    if *idx < children.len() {
                        *idx += 1;
                        *pc += 1;
                    } else {
                        tracer.trace_fail(*pc);
                        return Ok(None);
                    }
                }
                Instruction::Pred(id) => {
                    if *idx < children.len() && program.predicates().eval(*id, &children[*idx]) {
                        *idx += 1;
                        *pc += 1;
                    } else {
                        tracer.trace_fail(*pc);
                        return Ok(None);
                    }
                }
                Instruction::Descend { sub_pc, .. } => {
                    if *idx >= children.len() || !children[*idx].is_seq() {
                        tracer.trace_fail(*pc);
                        return Ok(None);
                    }
                    let child = &children[*idx];
                    path.push(*idx);
                    let sub_result = self.exec(program, *sub_pc, root, child, 0, path, captures, tracer);
                    path.pop();
                    match sub_result? {
                        Some(end) if end == child.as_seq().unwrap().len() => {
                            *idx += 1;
                            *pc += 1;
                        }
                        _ => return Ok(None),
                    }
                }
                Instruction::End => {
                    return if *idx == children.len() {
                        Ok(Some(*idx))
                    } else {
                        tracer.trace_fail(*pc);
                        Ok(None)
                    };
                }
                Instruction::Split(a, b) => {
                    let snapshot = captures.clone();
                    tracer.trace_split(*pc, *a);
                    let first = self.exec(program, *a, root, node, *idx, path, captures, tracer)?;
                    if let Some(end) = first {
                        return Ok(Some(end));
                    }
                    *captures = snapshot;
                    tracer.trace_backtrack(*pc, *b);
                    return self.exec(program, *b, root, node, *idx, path, captures, tracer);
                }
                Instruction::Jump(target) => *pc = *target,
                Instruction::Save(gid, slot) => {
                    match slot {
                        Slot::Start => captures.save_start(*gid, path, *idx),
                        Slot::End => captures.save_end(*gid, *idx),
                    }
                    *pc += 1;
                }
                Instruction::Backref(gid) => {
                    if !self.match_backref(root, node, *gid, idx, captures) {
                        tracer.trace_fail(*pc);
                        return Ok(None);
                    }
                    *pc += 1;
                }
                Instruction::Halt => return Ok(Some(*idx)),
            }
        }
    }

    fn match_backref(
        &self,
        root: &Element,
        node: &Element,
        gid: GroupId,
        idx: &mut usize,
        captures: &Captures,
    ) -> bool {
        let Some(capture) = captures.get(gid) else {
            // Invariant violation (missing capture at BACKREF time) is
            // treated as match failure, not an error (spec §7).
            return false;
        };
        let captured_seq = resolve_path(root, &capture.path)
            .as_seq()
            .unwrap_or(&[]);
        let reference = &captured_seq[capture.start..capture.end];
        let children = node.as_seq().unwrap_or(&[]);
        let len = reference.len();
        if *idx + len > children.len() {
            return false;
        }
        if &children[*idx..*idx + len] != reference {
            return false;
        }
        *idx += len;
        true
    }
}

impl Default for Vm {
    fn default() -> Self {
        Self::new()
    }
}
