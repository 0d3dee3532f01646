//! Execution tracing, grounded on the teacher's generic `Tracer` trait
//! rather than a `log`/`tracing` dependency — `NoopTracer`'s empty bodies
//! are inlined away, so a caller who doesn't ask for tracing pays nothing.

use treematch_bytecode::Instruction;

/// Callback hooks into VM execution. All methods default to doing nothing.
pub trait Tracer {
    fn trace_instruction(&mut self, _pc: usize, _instruction: &Instruction) {}
    fn trace_split(&mut self, _pc: usize, _chosen_pc: usize) {}
    fn trace_backtrack(&mut self, _from_pc: usize, _to_pc: usize) {}
    fn trace_fail(&mut self, _pc: usize) {}
}

/// The default tracer: does nothing, and compiles away to nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopTracer;

impl Tracer for NoopTracer {}
