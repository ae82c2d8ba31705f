//! Core value types of the machine.
//!
//! This module contains the building blocks the engine is assembled from:
//! - State identifiers via the `StateId` trait, and the `MachineState` sum type
//! - Handler and guard bindings (direct callables or late-bound names)
//! - Bounded history of fired transitions

mod event;
mod guard;
mod handler;
mod history;
mod state;

pub use event::StateEvent;
pub use guard::Guard;
pub use handler::{Handler, HandlerSet};
pub use history::{StateHistory, TransitionRecord};
pub use state::{MachineState, StateId};
