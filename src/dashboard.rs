//! Summary figures for the dashboard and fleet pages.

use crate::model::{Bicycle, BicycleCategory, Reservation, ReservationStatus};
use serde::{Deserialize, Serialize};

/// Headline counts shown on the dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_reservations: usize,
    pub pending: usize,
    pub confirmed: usize,
    pub annulled: usize,
    pub fleet_size: usize,
}

impl DashboardSummary {
    pub fn compute(bicycles: &[Bicycle], reservations: &[Reservation]) -> Self {
        let count = |status: ReservationStatus| {
            reservations.iter().filter(|r| r.status == status).count()
        };

        Self {
            total_reservations: reservations.len(),
            pending: count(ReservationStatus::Pending),
            confirmed: count(ReservationStatus::Confirmed),
            annulled: count(ReservationStatus::Annulled),
            fleet_size: bicycles.len(),
        }
    }
}

/// The first `limit` reservations in stored order.
pub fn recent_reservations(reservations: &[Reservation], limit: usize) -> &[Reservation] {
    &reservations[..limit.min(reservations.len())]
}

/// Fleet size broken down by category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetStats {
    pub total: usize,
    pub vtt: usize,
    pub city: usize,
    pub electric: usize,
}

impl FleetStats {
    pub fn compute(bicycles: &[Bicycle]) -> Self {
        bicycles.iter().fold(Self::default(), |mut stats, bike| {
            stats.total += 1;
            match bike.category {
                BicycleCategory::VTT => stats.vtt += 1,
                BicycleCategory::City => stats.city += 1,
                BicycleCategory::Electric => stats.electric += 1,
            }
            stats
        })
    }

    pub fn count(&self, category: BicycleCategory) -> usize {
        match category {
            BicycleCategory::VTT => self.vtt,
            BicycleCategory::City => self.city,
            BicycleCategory::Electric => self.electric,
        }
    }
}
