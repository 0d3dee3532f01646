//! Program and instruction format executed by the treematch VM.

mod dump;
mod instruction;
mod program;

#[cfg(test)]
mod dump_tests;
#[cfg(test)]
mod program_tests;

pub use dump::dump;
pub use instruction::{GroupId, Instruction, Slot};
pub use program::Program;
