//! Build errors for machine and transition builders.

use crate::config::ConfigError;
use thiserror::Error;

/// Errors that can occur when building machines and transitions.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Transition source state not specified. Call .from(state)")]
    MissingFromState,

    #[error("Transition target state not specified. Call .to(state)")]
    MissingToState,

    #[error("Transition guard not specified. Call .when(predicate), .named(name) or .always()")]
    MissingGuard,

    #[error(transparent)]
    Config(#[from] ConfigError),
}
