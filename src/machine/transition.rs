//! Status transitions on reservations.

use crate::core::StateTransition;
use crate::model::{Reservation, ReservationStatus};
use chrono::{DateTime, Utc};

/// Replace the status of a reservation.
///
/// Every (current, target) pair is accepted, including same-state pairs,
/// and every other field is carried over unchanged. Which transitions a
/// user is offered is decided separately by [`is_transition_offered`].
///
/// [`is_transition_offered`]: crate::machine::is_transition_offered
///
/// # Example
///
/// ```rust
/// use velodesk::{transition, ReservationStatus, SeedData};
///
/// let seed = SeedData::embedded();
/// let original = &seed.reservations[0];
/// let annulled = transition(original, ReservationStatus::Annulled);
///
/// assert_eq!(annulled.status, ReservationStatus::Annulled);
/// assert_eq!(annulled.id, original.id);
/// ```
pub fn transition(reservation: &Reservation, target: ReservationStatus) -> Reservation {
    Reservation {
        status: target,
        ..reservation.clone()
    }
}

/// Apply a transition and describe it for the history log.
pub fn transition_logged(
    reservation: &Reservation,
    target: ReservationStatus,
    at: DateTime<Utc>,
) -> (Reservation, StateTransition<ReservationStatus>) {
    let record = StateTransition {
        subject: reservation.id.to_string(),
        from: reservation.status,
        to: target,
        timestamp: at,
    };
    (transition(reservation, target), record)
}
