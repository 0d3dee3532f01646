//! The compiled program: a flat instruction stream plus the side tables the
//! compiler produced alongside it.

use indexmap::IndexMap;
use treematch_core::PredicateTable;

use crate::instruction::{GroupId, Instruction};

/// A compiled pattern: instructions plus the name table and predicate table
/// the compiler built while emitting them.
///
/// `Program` is immutable once returned from the compiler (spec data model
/// "Lifecycle").
pub struct Program {
    instructions: Vec<Instruction>,
    group_names: IndexMap<String, GroupId>,
    predicates: PredicateTable,
}

impl Program {
    pub fn new(
        instructions: Vec<Instruction>,
        group_names: IndexMap<String, GroupId>,
        predicates: PredicateTable,
    ) -> Self {
        Self {
            instructions,
            group_names,
            predicates,
        }
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Number of `NAMED` groups this program declares.
    pub fn group_count(&self) -> usize {
        self.group_names.len()
    }

    /// Look up the group id a `NAMED` name was assigned during compilation.
    pub fn group_id(&self, name: &str) -> Option<GroupId> {
        self.group_names.get(name).copied()
    }

    /// Iterate group names in declaration order.
    pub fn group_names(&self) -> impl Iterator<Item = (&str, GroupId)> {
        self.group_names.iter().map(|(name, id)| (name.as_str(), *id))
    }

    pub fn predicates(&self) -> &PredicateTable {
        &self.predicates
    }
}

impl std::fmt::Debug for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Program")
            .field("instructions", &self.instructions.len())
            .field("groups", &self.group_names.len())
            .finish()
    }
}
