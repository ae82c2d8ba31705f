//! Errors surfaced by `Machine::process`.

use crate::core::StateEvent;
use crate::target::Fault;
use thiserror::Error;

/// Errors that can occur while processing a cycle.
///
/// None of these are retried or rolled back: a fault leaves the current
/// state exactly where the cycle had moved it when the fault occurred.
#[derive(Debug, Error)]
pub enum MachineError {
    #[error("Guard '{name}' for transition '{from}' -> '{to}' does not resolve on the target")]
    UnresolvedGuard {
        from: String,
        to: String,
        name: String,
    },

    #[error("Guard for transition '{from}' -> '{to}' failed: {source}")]
    GuardFailed {
        from: String,
        to: String,
        #[source]
        source: Fault,
    },

    #[error("{event} handler for state '{state}' failed: {source}")]
    HandlerFailed {
        state: String,
        event: StateEvent,
        #[source]
        source: Fault,
    },
}
