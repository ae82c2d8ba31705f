//! The behavior object a machine dispatches to.
//!
//! A machine owns only its topology. Everything a state actually does lives
//! on the target: entry, in-state and exit handlers, and the guard
//! predicates that gate transitions. Bindings given by name are looked up
//! through [`Target`] on every invocation, so swapping the target between
//! cycles immediately changes what runs.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use tickfsm::target::{Dispatch, GuardFn, HandlerFn, Target};
//!
//! struct Lamp {
//!     lit: bool,
//!     dispatch: Arc<Dispatch<Lamp>>,
//! }
//!
//! impl Target for Lamp {
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
//!     .on("on_entry_On", |lamp: &mut Lamp, _dt| lamp.lit = true)
//!     .check("check_dark", |lamp: &mut Lamp| !lamp.lit);
//!
//! let lamp = Lamp { lit: false, dispatch: Arc::new(dispatch) };
//! assert!(lamp.handler("on_entry_On").is_some());
//! assert!(lamp.handler("on_exit_On").is_none());
//! ```

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Error raised by a target handler or guard.
pub type Fault = Box<dyn Error + Send + Sync + 'static>;

/// Handler callable: receives the target and the cycle's time delta.
pub type HandlerFn<T> = Arc<dyn Fn(&mut T, f64) -> Result<(), Fault> + Send + Sync>;

/// Guard callable: receives the target, returns whether the transition fires.
pub type GuardFn<T> = Arc<dyn Fn(&mut T) -> Result<bool, Fault> + Send + Sync>;

/// Capability to resolve handlers and guards by name.
///
/// Both lookups default to "not found", so a target that is only used with
/// direct bindings can implement this trait with an empty body.
pub trait Target: Sized {
    /// Resolve a handler by member name.
    fn handler(&self, _name: &str) -> Option<HandlerFn<Self>> {
        None
    }

    /// Resolve a guard by member name.
    fn guard(&self, _name: &str) -> Option<GuardFn<Self>> {
        None
    }
}

impl Target for () {}

/// Name to closure table for implementing [`Target`] without reflection.
///
/// Targets typically hold an `Arc<Dispatch<Self>>` and delegate both
/// lookups to it.
pub struct Dispatch<T> {
    handlers: HashMap<String, HandlerFn<T>>,
    guards: HashMap<String, GuardFn<T>>,
}

impl<T> Dispatch<T> {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
            guards: HashMap::new(),
        }
    }

    /// Register an infallible handler under `name`.
    pub fn on<F>(self, name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&mut T, f64) + Send + Sync + 'static,
    {
        self.try_on(name, move |target: &mut T, dt| {
            handler(target, dt);
            Ok(())
        })
    }

    /// Register a handler that may fail.
    pub fn try_on<F>(mut self, name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&mut T, f64) -> Result<(), Fault> + Send + Sync + 'static,
    {
        self.handlers.insert(name.into(), Arc::new(handler));
        self
    }

    /// Register an infallible guard under `name`.
    pub fn check<F>(self, name: impl Into<String>, guard: F) -> Self
    where
        F: Fn(&mut T) -> bool + Send + Sync + 'static,
    {
        self.try_check(name, move |target: &mut T| Ok(guard(target)))
    }

    /// Register a guard that may fail.
    pub fn try_check<F>(mut self, name: impl Into<String>, guard: F) -> Self
    where
        F: Fn(&mut T) -> Result<bool, Fault> + Send + Sync + 'static,
    {
        self.guards.insert(name.into(), Arc::new(guard));
        self
    }

    pub fn handler(&self, name: &str) -> Option<HandlerFn<T>> {
        self.handlers.get(name).cloned()
    }

    pub fn guard(&self, name: &str) -> Option<GuardFn<T>> {
        self.guards.get(name).cloned()
    }
}

impl<T> Default for Dispatch<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Dispatch<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut handlers: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        let mut guards: Vec<&str> = self.guards.keys().map(String::as_str).collect();
        handlers.sort_unstable();
        guards.sort_unstable();
        f.debug_struct("Dispatch")
            .field("handlers", &handlers)
            .field("guards", &guards)
            .finish()
    }
}
