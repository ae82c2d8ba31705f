//! Guard predicates for controlling state transitions.
//!
//! A guard is a zero-argument predicate from the machine's point of view:
//! it is evaluated against the current target and decides whether its
//! transition fires this cycle.

use crate::target::{Fault, GuardFn, Target};
use std::fmt;
use std::sync::Arc;

/// Predicate gating a transition.
///
/// # Example
///
/// ```rust
/// use tickfsm::core::Guard;
/// use tickfsm::target::Target;
///
/// struct Sensor {
///     level: u32,
/// }
///
/// impl Target for Sensor {}
///
/// let high = Guard::new(|s: &mut Sensor| s.level > 10);
///
/// assert_eq!(high.check(&mut Sensor { level: 12 }).unwrap().unwrap(), true);
/// assert_eq!(high.check(&mut Sensor { level: 3 }).unwrap().unwrap(), false);
/// ```
pub enum Guard<T> {
    /// A callable bound directly at configuration time
    Direct(GuardFn<T>),

    /// A member name resolved against the target on every evaluation
    Named(String),
}

impl<T: Target> Guard<T> {
    /// Create a guard from an infallible predicate.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&mut T) -> bool + Send + Sync + 'static,
    {
        Self::try_new(move |target: &mut T| Ok(predicate(target)))
    }

    /// Create a guard from a predicate that may fail.
    pub fn try_new<F>(predicate: F) -> Self
    where
        F: Fn(&mut T) -> Result<bool, Fault> + Send + Sync + 'static,
    {
        Self::Direct(Arc::new(predicate))
    }

    /// Guard that fires on every evaluation.
    pub fn always() -> Self {
        Self::new(|_| true)
    }

    /// Guard that never fires.
    pub fn never() -> Self {
        Self::new(|_| false)
    }

    /// Evaluate the guard against `target`.
    ///
    /// Returns `None` when a named guard does not resolve on the target.
    pub fn check(&self, target: &mut T) -> Option<Result<bool, Fault>> {
        match self {
            Self::Direct(predicate) => Some(predicate(target)),
            Self::Named(name) => target.guard(name).map(|predicate| predicate(target)),
        }
    }
}

impl<T> Guard<T> {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Member name for a named guard.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Direct(_) => None,
            Self::Named(name) => Some(name),
        }
    }

    /// Prepend `prefix` to a named guard's member name.
    pub(crate) fn qualified(self, prefix: &str) -> Self {
        match self {
            Self::Named(name) if !prefix.is_empty() => Self::Named(format!("{prefix}{name}")),
            other => other,
        }
    }
}

impl<T> Clone for Guard<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Direct(predicate) => Self::Direct(Arc::clone(predicate)),
            Self::Named(name) => Self::Named(name.clone()),
        }
    }
}

impl<T> fmt::Debug for Guard<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Direct(_) => f.write_str("Direct(<fn>)"),
            Self::Named(name) => f.debug_tuple("Named").field(name).finish(),
        }
    }
}

impl<T> From<&str> for Guard<T> {
    fn from(name: &str) -> Self {
        Self::Named(name.to_string())
    }
}

impl<T> From<String> for Guard<T> {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::Dispatch;

    struct Gate {
        open: bool,
        evaluations: usize,
        dispatch: Arc<Dispatch<Gate>>,
    }

    impl Target for Gate {
        fn guard(&self, name: &str) -> Option<GuardFn<Self>> {
            self.dispatch.guard(name)
        }
    }

    fn gate(open: bool) -> Gate {
        let dispatch = Dispatch::new().check("check_open", |g: &mut Gate| {
            g.evaluations += 1;
            g.open
        });
        Gate {
            open,
            evaluations: 0,
            dispatch: Arc::new(dispatch),
        }
    }

    #[test]
    fn direct_guard_reads_target() {
        let guard = Guard::new(|g: &mut Gate| g.open);

        assert!(guard.check(&mut gate(true)).unwrap().unwrap());
        assert!(!guard.check(&mut gate(false)).unwrap().unwrap());
    }

    #[test]
    fn named_guard_resolves_every_time() {
        let guard: Guard<Gate> = Guard::named("check_open");
        let mut target = gate(false);

        assert!(!guard.check(&mut target).unwrap().unwrap());
        target.open = true;
        assert!(guard.check(&mut target).unwrap().unwrap());
        assert_eq!(target.evaluations, 2);
    }

    #[test]
    fn unresolved_named_guard_returns_none() {
        let guard: Guard<Gate> = "check_missing".into();

        assert!(guard.check(&mut gate(true)).is_none());
    }

    #[test]
    fn constant_guards() {
        let mut target = gate(false);

        assert!(Guard::always().check(&mut target).unwrap().unwrap());
        assert!(!Guard::never().check(&mut target).unwrap().unwrap());
    }

    #[test]
    fn failing_guard_surfaces_fault() {
        let guard = Guard::try_new(|_: &mut Gate| Err("jammed".into()));

        let err = guard.check(&mut gate(true)).unwrap().unwrap_err();
        assert_eq!(err.to_string(), "jammed");
    }

    #[test]
    fn qualified_prefixes_named_guards_only() {
        let named: Guard<Gate> = Guard::named("open").qualified("check_");
        assert_eq!(named.name(), Some("check_open"));

        let unprefixed: Guard<Gate> = Guard::named("open").qualified("");
        assert_eq!(unprefixed.name(), Some("open"));

        let direct = Guard::new(|g: &mut Gate| g.open).qualified("check_");
        assert_eq!(direct.name(), None);
    }
}
