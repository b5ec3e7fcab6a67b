//! Which status actions a reservation row offers.
//!
//! The data layer accepts any transition. This policy only hides actions
//! that would leave a reservation where it already is.

use crate::core::Guard;
use crate::model::ReservationStatus;

crate::label_enum! {
    /// A status change a user can trigger from a reservation row.
    pub enum StatusAction {
        Confirm,
        Annul,
    }
    kind: "action"
}

impl StatusAction {
    /// Status the reservation moves to when the action is taken.
    pub fn target(&self) -> ReservationStatus {
        match self {
            Self::Confirm => ReservationStatus::Confirmed,
            Self::Annul => ReservationStatus::Annulled,
        }
    }

    /// The action whose target is `status`, if any.
    pub fn for_target(status: ReservationStatus) -> Option<Self> {
        Self::ALL.iter().copied().find(|a| a.target() == status)
    }

    /// Guard over the current status deciding whether this action is shown.
    pub fn guard(&self) -> Guard<ReservationStatus> {
        let target = self.target();
        Guard::new(move |current: &ReservationStatus| *current != target)
    }
}

/// Whether moving from `current` to `target` is offered to the user.
///
/// `Pending` is never offered; `Confirmed` and `Annulled` are offered from
/// every other status.
pub fn is_transition_offered(current: ReservationStatus, target: ReservationStatus) -> bool {
    StatusAction::for_target(target).is_some_and(|action| action.guard().check(&current))
}

/// Actions offered for a reservation in `current`, in display order.
pub fn offered_actions(current: ReservationStatus) -> Vec<StatusAction> {
    StatusAction::ALL
        .iter()
        .copied()
        .filter(|action| action.guard().check(&current))
        .collect()
}
