//! The cycle-driven state machine engine.
//!
//! A [`Machine`] owns its topology and current state, and dispatches every
//! state event and guard to a hot-swappable target. The host loop drives it
//! by calling [`Machine::process`] once per tick.

mod error;
mod topology;
mod validate;

pub use error::MachineError;
pub use topology::Topology;
pub use validate::{check_guards, validate_guards};

use crate::config::{ConfigError, MachineConfig, MachineSettings, UnresolvedGuardPolicy};
use crate::core::{MachineState, StateEvent, StateHistory, StateId, TransitionRecord};
use crate::target::Target;
use chrono::Utc;
use tracing::{debug, trace, warn};

/// Cycle-based finite state machine bound to a target.
///
/// Each call to [`process`](Machine::process) is one cycle:
///
/// - The first cycle after construction or [`reset`](Machine::reset)
///   enters the initial state, raising `on_entry` and then `in_state`
///   with a zero time delta. No guard is evaluated.
/// - Every later cycle evaluates the outgoing transitions of the current
///   state in insertion order. The first guard that returns true fires:
///   `on_exit` is raised on the old state, the current state changes, and
///   `on_entry` is raised on the new one. At most one transition fires.
/// - Every cycle ends with exactly one `in_state` on the (possibly new)
///   current state.
///
/// # Example
///
/// ```rust
/// use tickfsm::{Guard, Handler, HandlerSet, Machine, MachineConfig, Target};
///
/// #[derive(Default)]
/// struct Log(Vec<String>);
///
/// impl Target for Log {}
///
/// let config = MachineConfig::new()
///     .initial("Idle")
///     .state(
///         "Running",
///         HandlerSet::disabled()
///             .on_entry(Handler::new(|log: &mut Log, dt| log.0.push(format!("enter {dt}")))),
///     )
///     .transition("Idle", "Running", Guard::always());
///
/// let mut machine = Machine::new(Log::default(), config)?;
/// assert!(machine.state().is_uninitialized());
///
/// machine.process(1.0)?;
/// assert!(machine.state().is(&"Idle"));
///
/// machine.process(1.0)?;
/// assert!(machine.state().is(&"Running"));
/// assert_eq!(machine.target().0, vec!["enter 1".to_string()]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Machine<S: StateId, T: Target> {
    target: T,
    current: MachineState<S>,
    initial: S,
    topology: Topology<S, T>,
    settings: MachineSettings,
    history: StateHistory<S>,
    cycle: u64,
}

impl<S: StateId, T: Target> Machine<S, T> {
    /// Create a machine with default settings.
    pub fn new(target: T, config: MachineConfig<S, T>) -> Result<Self, ConfigError> {
        Self::with_settings(target, config, MachineSettings::default())
    }

    /// Create a machine. The configuration must name an initial state.
    pub fn with_settings(
        target: T,
        config: MachineConfig<S, T>,
        settings: MachineSettings,
    ) -> Result<Self, ConfigError> {
        let initial = config
            .initial
            .clone()
            .ok_or(ConfigError::MissingInitialState)?;

        let mut topology = Topology::new();
        topology.apply(config, &settings.prefixes);
        if settings.validate_guards {
            validate_guards(&topology, &target)
                .inspect_err(|e| warn!("Rejected configuration: {e}"))?;
        }

        debug!(
            "State machine configured: initial={}, states={}, transitions={}",
            initial.name(),
            topology.state_count(),
            topology.transition_count()
        );

        Ok(Self {
            target,
            current: MachineState::Uninitialized,
            initial,
            history: StateHistory::with_limit(settings.history_limit),
            topology,
            settings,
            cycle: 0,
        })
    }

    /// Merge more configuration into this machine.
    ///
    /// Updates the initial state if one is given and adds transitions;
    /// redefining an existing `from -> to` pair replaces its guard. Nothing
    /// is ever removed. When guard validation is enabled and fails, the
    /// machine is left unchanged.
    pub fn extend(&mut self, config: MachineConfig<S, T>) -> Result<(), ConfigError> {
        let initial = config.initial.clone();

        let mut topology = self.topology.clone();
        topology.apply(config, &self.settings.prefixes);
        if self.settings.validate_guards {
            validate_guards(&topology, &self.target)
                .inspect_err(|e| warn!("Rejected configuration extension: {e}"))?;
        }

        self.topology = topology;
        if let Some(initial) = initial {
            self.initial = initial;
        }

        debug!(
            "State machine extended: initial={}, states={}, transitions={}",
            self.initial.name(),
            self.topology.state_count(),
            self.topology.transition_count()
        );
        Ok(())
    }

    /// Re-arm the initial-state sequence. Raises no events.
    pub fn reset(&mut self) {
        trace!("State machine reset from {}", self.current);
        self.current = MachineState::Uninitialized;
    }

    /// Run one cycle with time delta `dt`.
    ///
    /// A fault from a guard or handler is returned immediately. The current
    /// state stays wherever the cycle had moved it: a fault in `on_exit`
    /// leaves the old state, a fault in `on_entry` leaves the new one, and
    /// the cycle's `in_state` is not raised in either case.
    pub fn process(&mut self, dt: f64) -> Result<(), MachineError> {
        self.cycle += 1;
        trace!(cycle = self.cycle, dt, state = %self.current, "Processing cycle");

        let Some(current) = self.current.as_named().cloned() else {
            return self.enter_initial();
        };

        let active = match self.select_transition(&current)? {
            Some(next) => {
                self.raise(&current, StateEvent::OnExit, dt)?;
                debug!(
                    "Transition fired: {} -> {} (cycle {})",
                    current.name(),
                    next.name(),
                    self.cycle
                );
                self.current = MachineState::Named(next.clone());
                self.history.record(TransitionRecord {
                    from: current,
                    to: next.clone(),
                    cycle: self.cycle,
                    dt,
                    timestamp: Utc::now(),
                });
                self.raise(&next, StateEvent::OnEntry, dt)?;
                next
            }
            None => current,
        };

        self.raise(&active, StateEvent::InState, dt)
    }

    fn enter_initial(&mut self) -> Result<(), MachineError> {
        let initial = self.initial.clone();
        debug!("Entering initial state {}", initial.name());

        self.current = MachineState::Named(initial.clone());
        self.raise(&initial, StateEvent::OnEntry, 0.0)?;
        self.raise(&initial, StateEvent::InState, 0.0)
    }

    /// Evaluate outgoing guards of `from` in order and return the target
    /// state of the first one that fires.
    fn select_transition(&mut self, from: &S) -> Result<Option<S>, MachineError> {
        for (to, guard) in self.topology.outgoing(from) {
            let fired = match guard.check(&mut self.target) {
                Some(Ok(fired)) => fired,
                Some(Err(source)) => {
                    return Err(MachineError::GuardFailed {
                        from: from.name().to_string(),
                        to: to.name().to_string(),
                        source,
                    })
                }
                None => {
                    let name = guard.name().unwrap_or_default();
                    match self.settings.unresolved_guard {
                        UnresolvedGuardPolicy::Fault => {
                            return Err(MachineError::UnresolvedGuard {
                                from: from.name().to_string(),
                                to: to.name().to_string(),
                                name: name.to_string(),
                            })
                        }
                        UnresolvedGuardPolicy::NeverFires => {
                            warn!(
                                "Guard '{}' for {} -> {} does not resolve; treating as false",
                                name,
                                from.name(),
                                to.name()
                            );
                            false
                        }
                    }
                }
            };

            if fired {
                return Ok(Some(to.clone()));
            }
        }
        Ok(None)
    }

    fn raise(&mut self, state: &S, event: StateEvent, dt: f64) -> Result<(), MachineError> {
        let Some(handlers) = self.topology.handlers(state) else {
            return Ok(());
        };

        match handlers.get(event).invoke(&mut self.target, dt) {
            Some(result) => result.map_err(|source| MachineError::HandlerFailed {
                state: state.name().to_string(),
                event,
                source,
            }),
            None => {
                trace!(state = state.name(), %event, "No handler; event skipped");
                Ok(())
            }
        }
    }

    /// Current state; `Uninitialized` before the first cycle and after a reset.
    pub fn state(&self) -> &MachineState<S> {
        &self.current
    }

    pub fn initial(&self) -> &S {
        &self.initial
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    /// Swap in a new target and return the previous one. Named bindings
    /// resolve against the new target from the next invocation on.
    pub fn set_target(&mut self, target: T) -> T {
        std::mem::replace(&mut self.target, target)
    }

    pub fn into_target(self) -> T {
        self.target
    }

    pub fn topology(&self) -> &Topology<S, T> {
        &self.topology
    }

    pub fn settings(&self) -> &MachineSettings {
        &self.settings
    }

    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }

    /// Number of cycles processed since construction.
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Check every named guard against the current target.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_guards(&self.topology, &self.target)
    }
}

impl<S: StateId, T: Target> std::fmt::Debug for Machine<S, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Machine")
            .field("current", &self.current)
            .field("initial", &self.initial)
            .field("topology", &self.topology)
            .field("cycle", &self.cycle)
            .finish_non_exhaustive()
    }
}
