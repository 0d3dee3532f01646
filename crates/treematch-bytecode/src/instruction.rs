//! Instruction set executed by the treematch VM.

use std::fmt;

use treematch_core::{Element, PredicateId};

/// Stable integer id assigned to a `NAMED` group at compile time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(pub u32);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "g{}", self.0)
    }
}

/// Which half of a capture a `SAVE` instruction writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    Start,
    End,
}

/// A single bytecode instruction.
///
/// `Split`/`Jump` operands are absolute indices into the owning [`Program`]'s
/// instruction array; `Descend`'s is an absolute index into the same array
/// (sub-programs are inlined, not stored separately — see
/// `treematch-compiler`'s `SUBSEQ` emission).
#[derive(Clone, Debug, PartialEq)]
pub enum Instruction {
    /// Consume one element equal to `v`, by structural equality — `v` may
    /// itself be a nested sequence, not only a scalar.
    Match(Element),
    /// Consume one element, unconditionally.
    Any,
    /// Consume one element iff the predicate at this id returns true.
    Pred(PredicateId),
    /// Current element must be a sequence; run the sub-program starting at
    /// `sub_pc` (covering `len` instructions) against it.
    Descend { sub_pc: usize, len: usize },
    /// Succeed iff the cursor is at the end of the current sequence.
    End,
    /// Try `a` first; on failure, restore captures and try `b`.
    Split(usize, usize),
    /// Unconditional jump.
    Jump(usize),
    /// Record the current cursor into the named half of a capture slot.
    Save(GroupId, Slot),
    /// Consume the exact element sequence previously captured by `gid`.
    Backref(GroupId),
    /// Whole program succeeds.
    Halt,
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Match(v) => write!(f, "match {v}"),
            Instruction::Any => write!(f, "any"),
            Instruction::Pred(id) => write!(f, "pred {id}"),
            Instruction::Descend { sub_pc, len } => write!(f, "descend {sub_pc},{len}"),
            Instruction::End => write!(f, "end"),
            Instruction::Split(a, b) => write!(f, "split {a},{b}"),
            Instruction::Jump(t) => write!(f, "jump {t}"),
            Instruction::Save(g, Slot::Start) => write!(f, "save {g},0"),
            Instruction::Save(g, Slot::End) => write!(f, "save {g},1"),
            Instruction::Backref(g) => write!(f, "backref {g}"),
            Instruction::Halt => write!(f, "halt"),
        }
    }
}
