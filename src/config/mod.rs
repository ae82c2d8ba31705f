//! Machine configuration.
//!
//! A [`MachineConfig`] is the only data a machine is configured from: the
//! initial state, optional explicit handler bindings per state, and an
//! ordered list of `(from, to, guard)` transitions. The same record is used
//! to construct a machine and to extend it later.
//!
//! # Example
//!
//! ```rust
//! use tickfsm::config::MachineConfig;
//! use tickfsm::core::{Guard, HandlerSet};
//!
//! let config: MachineConfig<&str, ()> = MachineConfig::new()
//!     .initial("Idle")
//!     .state("Idle", HandlerSet::disabled())
//!     .transition("Idle", "Running", "has_target")
//!     .transition("Running", "Idle", Guard::never());
//!
//! assert_eq!(config.initial, Some("Idle"));
//! assert_eq!(config.transitions.len(), 2);
//! ```

pub mod error;
pub mod settings;

pub use error::{ConfigError, UnresolvedGuard};
pub use settings::{
    HandlerPrefixes, MachineSettings, UnresolvedGuardPolicy, DEFAULT_HISTORY_LIMIT,
};

use crate::core::{Guard, HandlerSet};
use std::fmt;

/// A directed edge and the guard that gates it.
pub struct TransitionSpec<S, T> {
    pub from: S,
    pub to: S,
    pub guard: Guard<T>,
}

impl<S: fmt::Debug, T> fmt::Debug for TransitionSpec<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionSpec")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("guard", &self.guard)
            .finish()
    }
}

/// Configuration record applied at construction or by `extend`.
pub struct MachineConfig<S, T> {
    /// Initial state; `None` keeps the current one when extending
    pub initial: Option<S>,

    /// Explicit handler bindings, overriding the name-derived defaults
    pub states: Vec<(S, HandlerSet<T>)>,

    /// Transitions in evaluation order
    pub transitions: Vec<TransitionSpec<S, T>>,
}

impl<S, T> MachineConfig<S, T> {
    pub fn new() -> Self {
        Self {
            initial: None,
            states: Vec::new(),
            transitions: Vec::new(),
        }
    }

    /// Set the initial state.
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Bind handlers for a state explicitly.
    pub fn state(mut self, state: S, handlers: HandlerSet<T>) -> Self {
        self.states.push((state, handlers));
        self
    }

    /// Add a transition. The guard may be a [`Guard`] or a member name.
    pub fn transition(mut self, from: S, to: S, guard: impl Into<Guard<T>>) -> Self {
        self.transitions.push(TransitionSpec {
            from,
            to,
            guard: guard.into(),
        });
        self
    }

    /// Add several `(from, to, guard)` transitions at once.
    pub fn transitions<G>(mut self, transitions: impl IntoIterator<Item = (S, S, G)>) -> Self
    where
        G: Into<Guard<T>>,
    {
        self.transitions
            .extend(transitions.into_iter().map(|(from, to, guard)| TransitionSpec {
                from,
                to,
                guard: guard.into(),
            }));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.initial.is_none() && self.states.is_empty() && self.transitions.is_empty()
    }
}

impl<S, T> Default for MachineConfig<S, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: fmt::Debug, T> fmt::Debug for MachineConfig<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MachineConfig")
            .field("initial", &self.initial)
            .field("states", &self.states)
            .field("transitions", &self.transitions)
            .finish()
    }
}
