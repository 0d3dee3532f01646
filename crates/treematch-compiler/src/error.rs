//! Build errors: everything that can go wrong turning an [`Expr`](crate::Expr)
//! tree into a [`Program`](treematch_bytecode::Program).
//!
//! Match failure at runtime is never represented here — per spec §7 it is a
//! normal `None` return from the VM, not an error.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompileError {
    #[error("group name {0:?} is declared more than once")]
    DuplicateGroupName(String),
    #[error("REF({0:?}) refers to a group not declared earlier in the pattern")]
    UnknownGroup(String),
}

pub type CompileResult<T> = Result<T, CompileError>;
