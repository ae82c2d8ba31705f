//! Builder API for ergonomic machine construction.
//!
//! This module provides fluent builders and macros for creating machines
//! with minimal boilerplate.

pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;

pub use error::BuildError;
pub use machine::MachineBuilder;
pub use transition::TransitionBuilder;

use crate::config::TransitionSpec;
use crate::core::{Guard, StateId};
use crate::target::Target;

/// Create a transition that fires whenever `from` is current.
///
/// # Example
///
/// ```
/// use tickfsm::builder::simple_transition;
///
/// let transition = simple_transition::<_, ()>("Start", "End");
/// assert_eq!(transition.from, "Start");
/// ```
pub fn simple_transition<S, T>(from: S, to: S) -> TransitionSpec<S, T>
where
    S: StateId,
    T: Target,
{
    TransitionSpec {
        from,
        to,
        guard: Guard::always(),
    }
}

/// Create a transition with a guard predicate over the target.
///
/// # Example
///
/// ```
/// use tickfsm::builder::guarded_transition;
/// use tickfsm::target::Target;
///
/// struct Timer {
///     elapsed: f64,
/// }
///
/// impl Target for Timer {}
///
/// let transition = guarded_transition("Wait", "Go", |t: &mut Timer| t.elapsed > 3.0);
/// assert!(transition.guard.check(&mut Timer { elapsed: 4.0 }).unwrap().unwrap());
/// ```
pub fn guarded_transition<S, T, F>(from: S, to: S, guard: F) -> TransitionSpec<S, T>
where
    S: StateId,
    T: Target,
    F: Fn(&mut T) -> bool + Send + Sync + 'static,
{
    TransitionSpec {
        from,
        to,
        guard: Guard::new(guard),
    }
}
