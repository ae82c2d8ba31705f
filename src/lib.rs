//! Tickfsm: a cycle-driven finite state machine for tick-based simulations
//!
//! A machine is configured with a set of states and guarded transitions and
//! then driven by the host loop, one [`Machine::process`] call per tick.
//! What the states actually do lives on an external *target*: entry,
//! in-state and exit handlers, and the guards that gate transitions, bound
//! either directly as closures or by name and resolved on every invocation.
//!
//! # Core Concepts
//!
//! - **Cycle**: one `process(dt)` call. At most one transition fires per
//!   cycle, and every cycle ends with an `in_state` event.
//! - **Target**: the behavior object, hot-swappable between cycles
//! - **Guards / Handlers**: direct closures or late-bound member names
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use tickfsm::target::{Dispatch, GuardFn, HandlerFn};
//! use tickfsm::{state_enum, Machine, MachineConfig, Target};
//!
//! state_enum! {
//!     enum Watch {
//!         Idle,
//!         Alert,
//!     }
//! }
//!
//! struct Sentry {
//!     noise: f64,
//!     alert_time: f64,
//!     dispatch: Arc<Dispatch<Sentry>>,
//! }
//!
//! impl Target for Sentry {
//!     fn handler(&self, name: &str) -> Option<HandlerFn<Self>> {
//!         self.dispatch.handler(name)
//!     }
//!
//!     fn guard(&self, name: &str) -> Option<GuardFn<Self>> {
//!         self.dispatch.guard(name)
//!     }
//! }
//!
//! let dispatch = Dispatch::new()
//!     .check("check_heard_something", |s: &mut Sentry| s.noise > 0.5)
//!     .on("in_state_Alert", |s: &mut Sentry, dt| s.alert_time += dt);
//!
//! let sentry = Sentry { noise: 0.0, alert_time: 0.0, dispatch: Arc::new(dispatch) };
//! let config = MachineConfig::new()
//!     .initial(Watch::Idle)
//!     .transition(Watch::Idle, Watch::Alert, "heard_something");
//!
//! let mut machine = Machine::new(sentry, config)?;
//! machine.process(0.1)?;
//! machine.target_mut().noise = 0.9;
//! machine.process(0.1)?;
//! machine.process(0.1)?;
//!
//! assert!(machine.state().is(&Watch::Alert));
//! assert!((machine.target().alert_time - 0.2).abs() < 1e-9);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod machine;
pub mod target;

// Re-export commonly used types
pub use crate::config::{ConfigError, MachineConfig, MachineSettings, UnresolvedGuardPolicy};
pub use crate::core::{Guard, Handler, HandlerSet, MachineState, StateEvent, StateId};
pub use crate::machine::{Machine, MachineError};
pub use crate::target::Target;
