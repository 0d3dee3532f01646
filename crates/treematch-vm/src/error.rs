//! Runtime errors: resource exhaustion only.
//!
//! Match failure itself is never an error — it is the VM returning `Ok(None)`
//! (spec §4.3 "Failure model", §7 "Match failure: not an error").

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("execution exceeded its step budget")]
    StepBudgetExhausted,
    #[error("execution exceeded its recursion limit")]
    RecursionLimitExceeded,
}
