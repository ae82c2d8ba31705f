//! States, their handler bindings, and the transitions between them.

use crate::config::{HandlerPrefixes, MachineConfig};
use crate::core::{Guard, HandlerSet, StateId};
use std::collections::HashMap;
use std::fmt;

/// Topology owned by a machine.
///
/// Every state that appears as a transition endpoint has a handler set.
/// Outgoing transitions of a state are kept in insertion order, which is
/// the order guards are evaluated in; redefining an existing `from -> to`
/// pair replaces its guard without moving it.
pub struct Topology<S, T> {
    handlers: HashMap<S, HandlerSet<T>>,
    transitions: HashMap<S, Vec<(S, Guard<T>)>>,
}

impl<S: StateId, T> Topology<S, T> {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
            transitions: HashMap::new(),
        }
    }

    /// Merge a configuration into this topology.
    ///
    /// The initial state and every transition endpoint get name-derived
    /// handlers if they have none yet; explicit state bindings overwrite.
    pub(crate) fn apply(&mut self, config: MachineConfig<S, T>, prefixes: &HandlerPrefixes) {
        let MachineConfig {
            initial,
            states,
            transitions,
        } = config;

        if let Some(initial) = initial {
            self.register_state(initial, prefixes);
        }
        for (state, handlers) in states {
            self.handlers.insert(state, handlers);
        }
        for transition in transitions {
            self.register_state(transition.from.clone(), prefixes);
            self.register_state(transition.to.clone(), prefixes);
            let guard = transition.guard.qualified(&prefixes.guard);
            self.add_transition(transition.from, transition.to, guard);
        }
    }

    fn register_state(&mut self, state: S, prefixes: &HandlerPrefixes) {
        if !self.handlers.contains_key(&state) {
            let handlers = HandlerSet::named_for(state.name(), prefixes);
            self.handlers.insert(state, handlers);
        }
    }

    fn add_transition(&mut self, from: S, to: S, guard: Guard<T>) {
        let outgoing = self.transitions.entry(from).or_default();
        match outgoing.iter_mut().find(|(existing, _)| *existing == to) {
            Some((_, slot)) => *slot = guard,
            None => outgoing.push((to, guard)),
        }
    }

    pub fn handlers(&self, state: &S) -> Option<&HandlerSet<T>> {
        self.handlers.get(state)
    }

    pub fn contains_state(&self, state: &S) -> bool {
        self.handlers.contains_key(state)
    }

    pub fn states(&self) -> impl Iterator<Item = &S> {
        self.handlers.keys()
    }

    pub fn state_count(&self) -> usize {
        self.handlers.len()
    }

    /// Outgoing transitions of `state`, in evaluation order.
    pub fn outgoing(&self, state: &S) -> impl Iterator<Item = (&S, &Guard<T>)> {
        self.transitions
            .get(state)
            .into_iter()
            .flat_map(|edges| edges.iter().map(|(to, guard)| (to, guard)))
    }

    /// All transitions as `(from, to, guard)`. Order across from-states is
    /// unspecified; order within one from-state is evaluation order.
    pub fn transitions(&self) -> impl Iterator<Item = (&S, &S, &Guard<T>)> {
        self.transitions
            .iter()
            .flat_map(|(from, edges)| edges.iter().map(move |(to, guard)| (from, to, guard)))
    }

    pub fn guard(&self, from: &S, to: &S) -> Option<&Guard<T>> {
        self.outgoing(from)
            .find(|(target, _)| *target == to)
            .map(|(_, guard)| guard)
    }

    pub fn transition_count(&self) -> usize {
        self.transitions.values().map(Vec::len).sum()
    }
}

impl<S: StateId, T> Default for Topology<S, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: StateId, T> Clone for Topology<S, T> {
    fn clone(&self) -> Self {
        Self {
            handlers: self.handlers.clone(),
            transitions: self.transitions.clone(),
        }
    }
}

impl<S: StateId, T> fmt::Debug for Topology<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Topology")
            .field("handlers", &self.handlers)
            .field("transitions", &self.transitions)
            .finish()
    }
}
