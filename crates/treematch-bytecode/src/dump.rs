//! Text disassembly of a [`Program`], for debugging and snapshot tests.

use std::fmt::Write as _;

use crate::program::Program;

/// Render `program` as one line per instruction, prefixed with its index,
/// followed by the group name table.
pub fn dump(program: &Program) -> String {
    let mut out = String::new();
    let width = program.instructions().len().to_string().len().max(1);
    for (pc, instruction) in program.instructions().iter().enumerate() {
        let _ = writeln!(out, "{pc:>width$}: {instruction}");
    }
    if program.group_count() > 0 {
        let _ = writeln!(out, "groups:");
        for (name, id) in program.group_names() {
            let _ = writeln!(out, "  {name} -> {id}");
        }
    }
    out
}
