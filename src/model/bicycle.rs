//! Fleet records.

use super::category::BicycleCategory;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque, stable identifier of a bicycle.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BicycleId(String);

impl BicycleId {
    /// Wrap an existing identifier, e.g. one coming from seed data.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh identifier, unique for the life of the process.
    pub fn generate() -> Self {
        Self(format!("b{}", Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BicycleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A bicycle in the rental fleet.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Bicycle {
    pub id: BicycleId,
    pub name: String,
    /// Hourly rate, never negative
    pub price: f64,
    pub category: BicycleCategory,
}

impl Bicycle {
    /// Rate as shown in the fleet table, e.g. `"120 MAD/h"`.
    pub fn price_label(&self, currency: &str) -> String {
        format!("{} {}/h", self.price, currency)
    }
}
