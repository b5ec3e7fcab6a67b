//! The single-writer home of fleet and reservation data.
//!
//! `RentalStore` owns both collections. Reads hand out borrows; every write
//! takes `&mut self` and swaps in a value produced by the pure functions in
//! `filter` and `machine`.

mod error;

pub use error::StoreError;

use crate::checkpoint::StoreSnapshot;
use crate::core::StateHistory;
use crate::filter::{filter, FilterSpec};
use crate::fleet::BicycleDraft;
use crate::machine::transition_logged;
use crate::model::{Bicycle, BicycleId, Reservation, ReservationId, ReservationStatus};
use crate::seed::SeedData;
use chrono::Utc;
use tracing::{debug, info, warn};

/// In-memory store of bicycles and reservations.
#[derive(Clone, Debug, Default)]
pub struct RentalStore {
    bicycles: Vec<Bicycle>,
    reservations: Vec<Reservation>,
    history: StateHistory<ReservationStatus>,
}

impl RentalStore {
    pub fn new(bicycles: Vec<Bicycle>, reservations: Vec<Reservation>) -> Self {
        Self {
            bicycles,
            reservations,
            history: StateHistory::new(),
        }
    }

    /// A store holding the embedded demo data.
    pub fn seeded() -> Self {
        Self::from_seed(SeedData::embedded())
    }

    pub fn from_seed(seed: SeedData) -> Self {
        Self::new(seed.bicycles, seed.reservations)
    }

    pub fn bicycles(&self) -> &[Bicycle] {
        &self.bicycles
    }

    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    pub fn history(&self) -> &StateHistory<ReservationStatus> {
        &self.history
    }

    pub fn bicycle(&self, id: &BicycleId) -> Option<&Bicycle> {
        self.bicycles.iter().find(|b| &b.id == id)
    }

    pub fn reservation(&self, id: &ReservationId) -> Option<&Reservation> {
        self.reservations.iter().find(|r| &r.id == id)
    }

    /// Reservations matching `spec`, in stored order.
    pub fn filtered(&self, spec: &FilterSpec) -> Vec<Reservation> {
        let result = filter(&self.reservations, spec);
        debug!(
            total = self.reservations.len(),
            matched = result.len(),
            "applied reservation filter"
        );
        result
    }

    /// Move a reservation to `target` and log the change.
    ///
    /// Same-state moves are applied and logged like any other.
    pub fn set_status(
        &mut self,
        id: &ReservationId,
        target: ReservationStatus,
    ) -> Result<&Reservation, StoreError> {
        let Some(index) = self.reservations.iter().position(|r| &r.id == id) else {
            warn!(reservation = %id, "status change for unknown reservation");
            return Err(StoreError::ReservationNotFound(id.clone()));
        };

        let (updated, record) = transition_logged(&self.reservations[index], target, Utc::now());
        info!(
            reservation = %id,
            from = record.from.name(),
            to = record.to.name(),
            "reservation status changed"
        );
        self.history = self.history.record(record);
        self.reservations[index] = updated;
        Ok(&self.reservations[index])
    }

    /// Validate a draft and append it to the fleet under a fresh id.
    pub fn add_bicycle(&mut self, draft: &BicycleDraft) -> Result<BicycleId, StoreError> {
        let valid = draft.validate()?;
        let id = BicycleId::generate();
        info!(bicycle = %id, name = %valid.name, category = %valid.category, "bicycle added");
        self.bicycles.push(valid.into_bicycle(id.clone()));
        Ok(id)
    }

    /// Replace the name, price and category of an existing bicycle.
    pub fn update_bicycle(
        &mut self,
        id: &BicycleId,
        draft: &BicycleDraft,
    ) -> Result<&Bicycle, StoreError> {
        let Some(index) = self.bicycles.iter().position(|b| &b.id == id) else {
            warn!(bicycle = %id, "update for unknown bicycle");
            return Err(StoreError::BicycleNotFound(id.clone()));
        };

        let valid = draft.validate()?;
        debug!(bicycle = %id, "bicycle updated");
        self.bicycles[index] = valid.into_bicycle(id.clone());
        Ok(&self.bicycles[index])
    }

    /// Remove a bicycle from the fleet. Reservations are not affected.
    pub fn remove_bicycle(&mut self, id: &BicycleId) -> Result<Bicycle, StoreError> {
        let Some(index) = self.bicycles.iter().position(|b| &b.id == id) else {
            warn!(bicycle = %id, "removal of unknown bicycle");
            return Err(StoreError::BicycleNotFound(id.clone()));
        };

        let removed = self.bicycles.remove(index);
        info!(bicycle = %id, name = %removed.name, "bicycle removed");
        Ok(removed)
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot::new(
            self.bicycles.clone(),
            self.reservations.clone(),
            self.history.clone(),
        )
    }

    /// Replace the store's contents with a validated snapshot.
    pub fn restore(snapshot: StoreSnapshot) -> Result<Self, StoreError> {
        snapshot.validate()?;
        debug!(snapshot = %snapshot.id, "restoring store from snapshot");
        Ok(Self {
            bicycles: snapshot.bicycles,
            reservations: snapshot.reservations,
            history: snapshot.history,
        })
    }
}
