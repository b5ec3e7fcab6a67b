//! State transition history tracking.
//!
//! Provides an immutable log of state changes applied to identified records.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of a single state change on one record.
///
/// # Example
///
/// ```rust
/// use velodesk::core::StateTransition;
/// use velodesk::ReservationStatus;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     subject: "r1".to_string(),
///     from: ReservationStatus::Pending,
///     to: ReservationStatus::Confirmed,
///     timestamp: Utc::now(),
/// };
/// assert!(!transition.is_noop());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// Identifier of the record whose state changed
    pub subject: String,
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// When the transition was applied
    pub timestamp: DateTime<Utc>,
}

impl<S: State> StateTransition<S> {
    /// True when the state was replaced by itself.
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }
}

/// Ordered history of state transitions across many records.
///
/// History is immutable - `record` returns a new history with the
/// transition appended.
///
/// # Example
///
/// ```rust
/// use velodesk::core::{StateHistory, StateTransition};
/// use velodesk::ReservationStatus;
/// use chrono::Utc;
///
/// let history = StateHistory::new().record(StateTransition {
///     subject: "r1".to_string(),
///     from: ReservationStatus::Pending,
///     to: ReservationStatus::Annulled,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(
///     history.path("r1"),
///     vec![ReservationStatus::Pending, ReservationStatus::Annulled]
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Transitions applied to one record, oldest first.
    pub fn for_subject<'a>(
        &'a self,
        subject: &'a str,
    ) -> impl Iterator<Item = &'a StateTransition<S>> + 'a {
        self.transitions.iter().filter(move |t| t.subject == subject)
    }

    /// States one record has gone through.
    ///
    /// Starts with the `from` state of its first transition, followed by the
    /// `to` state of each transition. Empty if the record never changed.
    pub fn path(&self, subject: &str) -> Vec<S> {
        let mut path = Vec::new();
        for (i, transition) in self.for_subject(subject).enumerate() {
            if i == 0 {
                path.push(transition.from);
            }
            path.push(transition.to);
        }
        path
    }

    /// Get all transitions, in the order they were recorded.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
