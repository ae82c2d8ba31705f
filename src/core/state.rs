//! State identifiers and the machine's current-state value.
//!
//! States are opaque, comparable and hashable values. The machine tracks its
//! position with [`MachineState`], which adds a distinct `Uninitialized`
//! variant for "not yet entered the initial state" instead of reserving a
//! value inside the identifier space.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};
use std::hash::Hash;

/// Trait for state identifiers.
///
/// # Required Traits
///
/// - `Clone`: identifiers are copied into the topology and history
/// - `Eq + Hash`: identifiers key the topology maps
/// - `Debug`: identifiers are debuggable for diagnostics
///
/// # Example
///
/// ```rust
/// use tickfsm::core::StateId;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// impl StateId for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
/// }
///
/// assert_eq!(Door::Open.name(), "Open");
/// ```
pub trait StateId: Clone + Eq + Hash + Debug + Send + Sync + 'static {
    /// Name used to derive default handler names (`on_entry_<name>`, ...)
    /// and in diagnostics.
    fn name(&self) -> &str;
}

impl StateId for String {
    fn name(&self) -> &str {
        self
    }
}

impl StateId for &'static str {
    fn name(&self) -> &str {
        self
    }
}

/// Current position of a machine.
///
/// `Uninitialized` is the value before the first cycle and right after a
/// reset. It has no handlers and never appears in the topology.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MachineState<S> {
    /// The machine has not entered its initial state yet
    Uninitialized,

    /// The machine is in the given state
    Named(S),
}

impl<S> Default for MachineState<S> {
    fn default() -> Self {
        Self::Uninitialized
    }
}

impl<S: StateId> MachineState<S> {
    pub fn is_uninitialized(&self) -> bool {
        matches!(self, Self::Uninitialized)
    }

    /// The named state, if the machine has entered one.
    pub fn as_named(&self) -> Option<&S> {
        match self {
            Self::Uninitialized => None,
            Self::Named(state) => Some(state),
        }
    }

    /// Check whether the machine is currently in `state`.
    pub fn is(&self, state: &S) -> bool {
        self.as_named() == Some(state)
    }

    pub fn name(&self) -> Option<&str> {
        self.as_named().map(StateId::name)
    }
}

impl<S: StateId> Display for MachineState<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uninitialized => f.write_str("<uninitialized>"),
            Self::Named(state) => f.write_str(state.name()),
        }
    }
}

impl<S: StateId> From<S> for MachineState<S> {
    fn from(state: S) -> Self {
        Self::Named(state)
    }
}
