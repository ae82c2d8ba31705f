//! Builder for constructing machines.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::config::{MachineConfig, MachineSettings, TransitionSpec};
use crate::core::{Guard, HandlerSet, StateId};
use crate::machine::Machine;
use crate::target::Target;

/// Builder for constructing machines with a fluent API.
pub struct MachineBuilder<S, T> {
    target: T,
    config: MachineConfig<S, T>,
    settings: MachineSettings,
}

impl<S: StateId, T: Target> MachineBuilder<S, T> {
    /// Create a builder for a machine bound to `target`.
    pub fn new(target: T) -> Self {
        Self {
            target,
            config: MachineConfig::new(),
            settings: MachineSettings::default(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.config = self.config.initial(state);
        self
    }

    /// Bind handlers for a state explicitly.
    pub fn state(mut self, state: S, handlers: HandlerSet<T>) -> Self {
        self.config = self.config.state(state, handlers);
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(mut self, builder: TransitionBuilder<S, T>) -> Result<Self, BuildError> {
        let transition = builder.build()?;
        self.config.transitions.push(transition);
        Ok(self)
    }

    /// Add a transition guarded by a [`Guard`] or a member name.
    pub fn add_transition(mut self, from: S, to: S, guard: impl Into<Guard<T>>) -> Self {
        self.config = self.config.transition(from, to, guard);
        self
    }

    /// Add pre-built transitions.
    pub fn transitions(mut self, transitions: Vec<TransitionSpec<S, T>>) -> Self {
        self.config.transitions.extend(transitions);
        self
    }

    pub fn settings(mut self, settings: MachineSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Build the machine.
    pub fn build(self) -> Result<Machine<S, T>, BuildError> {
        Ok(Machine::with_settings(
            self.target,
            self.config,
            self.settings,
        )?)
    }
}
