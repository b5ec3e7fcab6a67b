//! In-memory snapshots of a rental store.
//!
//! A snapshot captures the fleet, the reservations and the status history
//! at one instant. It encodes to JSON or to a compact binary form; where the
//! bytes go is up to the caller.

use crate::core::StateHistory;
use crate::model::{Bicycle, Reservation, ReservationStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::hash::Hash;

pub mod error;

pub use error::{RecordKind, SnapshotError, SnapshotFormat};

/// Version identifier for the snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable copy of a store's contents.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: String,

    /// When the snapshot was taken
    pub taken_at: DateTime<Utc>,

    pub bicycles: Vec<Bicycle>,

    pub reservations: Vec<Reservation>,

    /// Status changes applied before the snapshot was taken
    pub history: StateHistory<ReservationStatus>,
}

fn first_duplicate<'a, T, I>(ids: I) -> Option<&'a T>
where
    T: Eq + Hash + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut seen = HashSet::new();
    ids.into_iter().find(|id| !seen.insert(*id))
}

impl StoreSnapshot {
    pub fn new(
        bicycles: Vec<Bicycle>,
        reservations: Vec<Reservation>,
        history: StateHistory<ReservationStatus>,
    ) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            id: uuid::Uuid::new_v4().to_string(),
            taken_at: Utc::now(),
            bicycles,
            reservations,
            history,
        }
    }

    /// Check the format version and identifier uniqueness.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        if let Some(id) = first_duplicate(self.bicycles.iter().map(|b| &b.id)) {
            return Err(SnapshotError::DuplicateId {
                kind: RecordKind::Bicycle,
                id: id.to_string(),
            });
        }
        if let Some(id) = first_duplicate(self.reservations.iter().map(|r| &r.id)) {
            return Err(SnapshotError::DuplicateId {
                kind: RecordKind::Reservation,
                id: id.to_string(),
            });
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(|e| SnapshotError::encode(SnapshotFormat::Json, e))
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json)
            .map_err(|e| SnapshotError::decode(SnapshotFormat::Json, e))?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::encode(SnapshotFormat::Binary, e))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Self = bincode::deserialize(bytes)
            .map_err(|e| SnapshotError::decode(SnapshotFormat::Binary, e))?;
        snapshot.validate()?;
        Ok(snapshot)
    }
}
