//! Up-front resolution checks for named guards.
//!
//! Validation accumulates every unresolved guard instead of stopping at the
//! first one, so a misconfigured machine reports all of its problems in a
//! single pass.

use super::topology::Topology;
use crate::config::{ConfigError, UnresolvedGuard};
use crate::core::{Guard, StateId};
use crate::target::Target;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Check that every named guard in `topology` resolves on `target`.
pub fn check_guards<S: StateId, T: Target>(
    topology: &Topology<S, T>,
    target: &T,
) -> Validation<(), NonEmptyVec<UnresolvedGuard>> {
    let checks: Vec<Validation<(), NonEmptyVec<UnresolvedGuard>>> = topology
        .transitions()
        .filter_map(|(from, to, guard)| match guard {
            Guard::Named(name) if target.guard(name).is_none() => {
                Some(Validation::fail(UnresolvedGuard {
                    from: from.name().to_string(),
                    to: to.name().to_string(),
                    name: name.clone(),
                }))
            }
            _ => None,
        })
        .collect();

    Validation::all_vec(checks).map(|_| ())
}

/// [`check_guards`] as a `Result`, sorted for stable reporting.
pub fn validate_guards<S: StateId, T: Target>(
    topology: &Topology<S, T>,
    target: &T,
) -> Result<(), ConfigError> {
    match check_guards(topology, target) {
        Validation::Success(()) => Ok(()),
        Validation::Failure(errors) => {
            let mut unresolved: Vec<UnresolvedGuard> = errors.iter().cloned().collect();
            unresolved.sort_by(|a, b| (&a.from, &a.to).cmp(&(&b.from, &b.to)));
            Err(ConfigError::UnresolvedGuards(unresolved))
        }
    }
}
