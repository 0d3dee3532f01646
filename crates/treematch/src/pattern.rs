//! `Pattern`: a compiled program plus the facade-level bookkeeping
//! (resource limits, group-id-to-name reverse lookup) the search driver
//! needs.

use indexmap::IndexMap;
use treematch_bytecode::{GroupId, Program};
use treematch_compiler::{compile_program, CompileResult, Expr};
use treematch_vm::Limits;

/// A compiled treematch pattern, ready to run against any tree with
/// [`crate::search`].
pub struct Pattern {
    program: Program,
    group_by_id: IndexMap<GroupId, String>,
    limits: Limits,
}

impl Pattern {
    pub(crate) fn program(&self) -> &Program {
        &self.program
    }

    pub(crate) fn limits(&self) -> Limits {
        self.limits
    }

    pub(crate) fn group_name(&self, gid: GroupId) -> Option<&str> {
        self.group_by_id.get(&gid).map(String::as_str)
    }

    /// Override the default step budget and recursion limit this pattern
    /// runs with.
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Render the compiled instruction stream, for debugging.
    pub fn dump(&self) -> String {
        treematch_bytecode::dump(&self.program)
    }
}

/// Compile a top-level pattern: the combinator tree's implicit `GROUP`
/// (spec §4, `compile(...)`).
pub fn compile(exprs: Vec<Expr>) -> CompileResult<Pattern> {
    let program = compile_program(exprs)?;
    let group_by_id = program
        .group_names()
        .map(|(name, id)| (id, name.to_string()))
        .collect();
    Ok(Pattern {
        program,
        group_by_id,
        limits: Limits::default(),
    })
}
