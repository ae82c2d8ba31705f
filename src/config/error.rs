//! Configuration errors.

use thiserror::Error;

/// A named guard that does not resolve on the target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnresolvedGuard {
    pub from: String,
    pub to: String,
    pub name: String,
}

impl std::fmt::Display for UnresolvedGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' ({} -> {})", self.name, self.from, self.to)
    }
}

/// Errors that can occur when building or extending a machine.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Initial state not specified. Set `initial` before building the machine")]
    MissingInitialState,

    #[error("{} guard(s) do not resolve on the target: {}", .0.len(), join(.0))]
    UnresolvedGuards(Vec<UnresolvedGuard>),

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}

fn join(guards: &[UnresolvedGuard]) -> String {
    guards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
