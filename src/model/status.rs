//! Reservation lifecycle statuses.

use crate::core::State;

crate::label_enum! {
    /// Lifecycle status of a reservation.
    ///
    /// No status is terminal: any status may be replaced by any other.
    pub enum ReservationStatus {
        Pending,
        Confirmed,
        Annulled,
    }
    kind: "status"
}

impl State for ReservationStatus {
    fn name(&self) -> &str {
        ReservationStatus::name(self)
    }
}
