//! Per-state events raised by the machine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Event raised against a state during a cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateEvent {
    /// The state was just entered
    OnEntry,

    /// Raised once at the end of every cycle for the current state
    InState,

    /// The state is about to be left
    OnExit,
}

impl StateEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OnEntry => "on_entry",
            Self::InState => "in_state",
            Self::OnExit => "on_exit",
        }
    }
}

impl fmt::Display for StateEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
