//! Builder for constructing state transitions.

use crate::builder::error::BuildError;
use crate::config::TransitionSpec;
use crate::core::{Guard, StateId};
use crate::target::{Fault, Target};

/// Builder for constructing transitions with a fluent API.
pub struct TransitionBuilder<S, T> {
    from: Option<S>,
    to: Option<S>,
    guard: Option<Guard<T>>,
}

impl<S: StateId, T: Target> TransitionBuilder<S, T> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            from: None,
            to: None,
            guard: None,
        }
    }

    /// Set the source state (required).
    pub fn from(mut self, state: S) -> Self {
        self.from = Some(state);
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: S) -> Self {
        self.to = Some(state);
        self
    }

    /// Set the guard (required, or use one of the shorthands below).
    pub fn guard(mut self, guard: Guard<T>) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Guard with an infallible predicate over the target.
    pub fn when<F>(self, predicate: F) -> Self
    where
        F: Fn(&mut T) -> bool + Send + Sync + 'static,
    {
        self.guard(Guard::new(predicate))
    }

    /// Guard with a predicate that may fail.
    pub fn try_when<F>(self, predicate: F) -> Self
    where
        F: Fn(&mut T) -> Result<bool, Fault> + Send + Sync + 'static,
    {
        self.guard(Guard::try_new(predicate))
    }

    /// Guard resolved by name against the target.
    pub fn named(self, name: impl Into<String>) -> Self {
        self.guard(Guard::named(name))
    }

    /// Fire whenever the source state is current.
    pub fn always(self) -> Self {
        self.guard(Guard::always())
    }

    /// Build the transition.
    pub fn build(self) -> Result<TransitionSpec<S, T>, BuildError> {
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let to = self.to.ok_or(BuildError::MissingToState)?;
        let guard = self.guard.ok_or(BuildError::MissingGuard)?;

        Ok(TransitionSpec { from, to, guard })
    }
}

impl<S: StateId, T: Target> Default for TransitionBuilder<S, T> {
    fn default() -> Self {
        Self::new()
    }
}
