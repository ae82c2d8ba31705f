//! State transition history tracking.
//!
//! Keeps a bounded log of the transitions a machine has fired. Entries of
//! the initial state are not transitions and are not recorded.

use super::state::StateId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single fired transition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord<S> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// Cycle number on which the transition fired (1-based)
    pub cycle: u64,
    /// Time delta passed to the cycle
    pub dt: f64,
    /// Wall-clock time the transition was committed
    pub timestamp: DateTime<Utc>,
}

/// Ordered, bounded history of fired transitions.
///
/// Once `limit` records are held, the oldest is dropped for every new one.
/// A limit of zero disables recording.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use tickfsm::core::{StateHistory, TransitionRecord};
///
/// let mut history = StateHistory::with_limit(2);
/// for (cycle, (from, to)) in [("A", "B"), ("B", "C"), ("C", "A")].into_iter().enumerate() {
///     history.record(TransitionRecord {
///         from,
///         to,
///         cycle: cycle as u64 + 2,
///         dt: 0.1,
///         timestamp: Utc::now(),
///     });
/// }
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.get_path(), vec![&"B", &"C", &"A"]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StateHistory<S> {
    limit: usize,
    transitions: VecDeque<TransitionRecord<S>>,
}

impl<S: StateId> StateHistory<S> {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit,
            transitions: VecDeque::with_capacity(limit.min(64)),
        }
    }

    /// Append a record, evicting the oldest one when full.
    pub fn record(&mut self, transition: TransitionRecord<S>) {
        if self.limit == 0 {
            return;
        }
        while self.transitions.len() >= self.limit {
            self.transitions.pop_front();
        }
        self.transitions.push_back(transition);
    }

    /// Get the path of states traversed by the retained records.
    ///
    /// Returns the `from` state of the oldest record followed by the `to`
    /// state of each record.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        path.extend(self.transitions.iter().map(|t| &t.to));
        path
    }

    /// Wall-clock time between the oldest and newest retained records.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.front()?, self.transitions.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn last(&self) -> Option<&TransitionRecord<S>> {
        self.transitions.back()
    }

    pub fn transitions(&self) -> impl Iterator<Item = &TransitionRecord<S>> {
        self.transitions.iter()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn clear(&mut self) {
        self.transitions.clear();
    }
}
