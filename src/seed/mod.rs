//! Start-up data for the in-memory store.

use crate::model::{Bicycle, Reservation};
use serde::{Deserialize, Serialize};

const EMBEDDED: &str = include_str!("data.json");

/// Bicycles and reservations a store starts from.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedData {
    pub bicycles: Vec<Bicycle>,
    pub reservations: Vec<Reservation>,
}

impl SeedData {
    /// Parse seed data from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The demo fleet and bookings compiled into the crate.
    pub fn embedded() -> Self {
        Self::from_json(EMBEDDED).expect("embedded seed data should always parse")
    }
}
