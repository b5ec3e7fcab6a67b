//! Store lookup and update errors.

use crate::checkpoint::SnapshotError;
use crate::fleet::DraftErrors;
use crate::model::{BicycleId, ReservationId};
use thiserror::Error;

/// Errors returned by [`RentalStore`](super::RentalStore) operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("No bicycle with id '{0}'")]
    BicycleNotFound(BicycleId),

    #[error("No reservation with id '{0}'")]
    ReservationNotFound(ReservationId),

    #[error(transparent)]
    InvalidDraft(#[from] DraftErrors),

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}
