//! Two-pass forward-patch compilation from [`Expr`] to [`Instruction`].
//!
//! Each `SUBSEQ` opens a new, self-contained instruction buffer addressed
//! from zero; `DESCEND`'s operands are only known once that buffer's final
//! length is known, so sub-programs are compiled into a side buffer first
//! and spliced onto the end of their parent once complete, with every
//! address-bearing instruction inside shifted by the splice point. This is
//! the placeholder-patch scheme spec §4.2 describes, applied one nesting
//! level at a time rather than through a global label table.

use indexmap::IndexMap;

use treematch_bytecode::{GroupId, Instruction, Program, Slot};
use treematch_core::PredicateTable;

use crate::error::{CompileError, CompileResult};
use crate::expr::Expr;

/// A sub-program awaiting its final position: `buf[placeholder]` holds a
/// dummy `Descend` until `resolve_pending` fixes it up.
type Pending = (usize, Vec<Instruction>);

/// Compiler state: the group name table and predicate table being built up
/// as the expression tree is walked.
pub struct Compiler {
    group_names: IndexMap<String, GroupId>,
    predicates: PredicateTable,
}

impl Compiler {
    pub fn new() -> Self {
        Self {
            group_names: IndexMap::new(),
            predicates: PredicateTable::new(),
        }
    }

    /// Compile a top-level pattern (the implicit `GROUP` formed by
    /// `compile(...)`'s arguments) into a full [`Program`].
    ///
    /// Unlike `SUBSEQ`, the top level is not implicitly right-anchored; an
    /// explicit `END()` in `exprs` is required to anchor it.
    pub fn compile_program(mut self, exprs: &[Expr]) -> CompileResult<Program> {
        let mut buf = Vec::new();
        let mut pending = Vec::new();
        self.compile_group(&mut buf, &mut pending, exprs)?;
        buf.push(Instruction::Halt);
        resolve_pending(&mut buf, pending);
        Ok(Program::new(buf, self.group_names, self.predicates))
    }

    fn declare_group(&mut self, name: &str) -> CompileResult<GroupId> {
        if self.group_names.contains_key(name) {
            return Err(CompileError::DuplicateGroupName(name.to_string()));
        }
        let id = GroupId(self.group_names.len() as u32);
        self.group_names.insert(name.to_string(), id);
        Ok(id)
    }

    fn lookup_group(&self, name: &str) -> CompileResult<GroupId> {
        self.group_names
            .get(name)
            .copied()
            .ok_or_else(|| CompileError::UnknownGroup(name.to_string()))
    }

    fn compile_group(
        &mut self,
        buf: &mut Vec<Instruction>,
        pending: &mut Vec<Pending>,
        exprs: &[Expr],
    ) -> CompileResult<()> {
        for expr in exprs {
            self.compile_expr(buf, pending, expr)?;
        }
        Ok(())
    }

    fn compile_expr(
        &mut self,
        buf: &mut Vec<Instruction>,
        pending: &mut Vec<Pending>,
        expr: &Expr,
    ) -> CompileResult<()> {
        match expr {
            Expr::Literal(v) => buf.push(Instruction::Match(v.clone())),
            Expr::Anything => buf.push(Instruction::Any),
            Expr::End => buf.push(Instruction::End),
            Expr::Check(predicate) => {
                let id = self.predicates.register(predicate.clone());
                buf.push(Instruction::Pred(id));
            }
            Expr::Group(children) => self.compile_group(buf, pending, children)?,
            Expr::Named(name, children) => {
                let gid = self.declare_group(name)?;
                buf.push(Instruction::Save(gid, Slot::Start));
                self.compile_group(buf, pending, children)?;
                buf.push(Instruction::Save(gid, Slot::End));
            }
            Expr::Ref(name) => {
                let gid = self.lookup_group(name)?;
                buf.push(Instruction::Backref(gid));
            }
            Expr::Subseq(children) => {
                let mut sub_buf = Vec::new();
                let mut sub_pending = Vec::new();
                self.compile_group(&mut sub_buf, &mut sub_pending, children)?;
                sub_buf.push(Instruction::End);
                resolve_pending(&mut sub_buf, sub_pending);
                let idx = buf.len();
                buf.push(Instruction::Descend { sub_pc: 0, len: 0 });
                pending.push((idx, sub_buf));
            }
            Expr::Or(alternatives) => self.compile_or(buf, pending, alternatives)?,
            Expr::Maybe(children, greedy) => self.compile_maybe(buf, pending, children, *greedy)?,
            Expr::Many(children, greedy) => self.compile_many(buf, pending, children, *greedy)?,
            Expr::More(children, greedy) => {
                self.compile_group(buf, pending, children)?;
                self.compile_many(buf, pending, children, *greedy)?;
            }
            Expr::Whatever(greedy) => {
                self.compile_many(buf, pending, std::slice::from_ref(&Expr::Anything), *greedy)?
            }
        }
        Ok(())
    }

    fn compile_or(
        &mut self,
        buf: &mut Vec<Instruction>,
        pending: &mut Vec<Pending>,
        alternatives: &[Expr],
    ) -> CompileResult<()> {
        let mut jumps_to_end = Vec::new();
        for (i, alt) in alternatives.iter().enumerate() {
            if i + 1 == alternatives.len() {
                self.compile_expr(buf, pending, alt)?;
                continue;
            }
            let split_idx = buf.len();
            buf.push(Instruction::Split(0, 0));
            let a = buf.len();
            self.compile_expr(buf, pending, alt)?;
            let jump_idx = buf.len();
            buf.push(Instruction::Jump(0));
            jumps_to_end.push(jump_idx);
            let b = buf.len();
            buf[split_idx] = Instruction::Split(a, b);
        }
        let end = buf.len();
        for idx in jumps_to_end {
            buf[idx] = Instruction::Jump(end);
        }
        Ok(())
    }

    fn compile_maybe(
        &mut self,
        buf: &mut Vec<Instruction>,
        pending: &mut Vec<Pending>,
        children: &[Expr],
        greedy: bool,
    ) -> CompileResult<()> {
        let split_idx = buf.len();
        buf.push(Instruction::Split(0, 0));
        let body_start = buf.len();
        self.compile_group(buf, pending, children)?;
        let skip = buf.len();
        buf[split_idx] = split_with_order(body_start, skip, greedy);
        Ok(())
    }

    fn compile_many(
        &mut self,
        buf: &mut Vec<Instruction>,
        pending: &mut Vec<Pending>,
        children: &[Expr],
        greedy: bool,
    ) -> CompileResult<()> {
        let start = buf.len();
        let split_idx = buf.len();
        buf.push(Instruction::Split(0, 0));
        let body_start = buf.len();
        self.compile_group(buf, pending, children)?;
        buf.push(Instruction::Jump(start));
        let exit = buf.len();
        buf[split_idx] = split_with_order(body_start, exit, greedy);
        Ok(())
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}

/// Greedy prefers continuing (`body`) over exiting; non-greedy swaps the
/// `SPLIT` operand order so the VM tries exiting first.
fn split_with_order(body: usize, exit: usize, greedy: bool) -> Instruction {
    if greedy {
        Instruction::Split(body, exit)
    } else {
        Instruction::Split(exit, body)
    }
}

/// Splice each pending sub-program onto the end of `buf`, shifting its
/// internal addresses by the splice point, then patch the placeholder
/// `Descend` that referenced it.
fn resolve_pending(buf: &mut Vec<Instruction>, pending: Vec<Pending>) {
    for (idx, mut chunk) in pending {
        let base = buf.len();
        offset_instructions(&mut chunk, base);
        let len = chunk.len();
        buf.extend(chunk);
        buf[idx] = Instruction::Descend { sub_pc: base, len };
    }
}

fn offset_instructions(chunk: &mut [Instruction], base: usize) {
    for instruction in chunk.iter_mut() {
        match instruction {
            Instruction::Split(a, b) => {
                *a += base;
                *b += base;
            }
            Instruction::Jump(t) => *t += base,
            Instruction::Descend { sub_pc, .. } => *sub_pc += base,
            _ => {}
        }
    }
}
