//! Reservation filtering.
//!
//! A `FilterSpec` compiles to one guard per active constraint; a reservation
//! is kept when every guard accepts it.

use super::spec::FilterSpec;
use crate::core::Guard;
use crate::model::{Reservation, DATE_FORMAT};

/// Name matches ignore case; phone matches are literal.
fn search_guard(text: &str) -> Guard<Reservation> {
    let needle = text.to_lowercase();
    let literal = text.to_string();
    Guard::any(vec![
        Guard::new(move |r: &Reservation| r.customer_name.to_lowercase().contains(&needle)),
        Guard::new(move |r: &Reservation| r.phone_number.contains(&literal)),
    ])
}

impl FilterSpec {
    /// Compile this spec into a single guard.
    ///
    /// Inactive fields contribute nothing, so the identity spec yields a guard
    /// that accepts everything.
    pub fn to_guard(&self) -> Guard<Reservation> {
        let mut guards = Vec::new();

        if !self.search_text.is_empty() {
            guards.push(search_guard(&self.search_text));
        }

        let status = self.status;
        if !status.is_any() {
            guards.push(Guard::new(move |r: &Reservation| status.accepts(&r.status)));
        }

        let category = self.category;
        if !category.is_any() {
            guards.push(Guard::new(move |r: &Reservation| {
                category.accepts(&r.bicycle_category)
            }));
        }

        if let Some(date) = self.date {
            let wanted = date.format(DATE_FORMAT).to_string();
            guards.push(Guard::new(move |r: &Reservation| {
                r.reservation_date.to_iso() == wanted
            }));
        }

        Guard::all(guards)
    }

    /// Check a single reservation against every active constraint.
    pub fn matches(&self, reservation: &Reservation) -> bool {
        self.to_guard().check(reservation)
    }
}

/// Select the reservations matching `spec`, in their original order.
///
/// The input is left untouched; matching records are cloned into the result.
///
/// # Example
///
/// ```rust
/// use velodesk::{filter, FilterSpec, ReservationStatus, SeedData};
///
/// let seed = SeedData::embedded();
/// let confirmed = filter(
///     &seed.reservations,
///     &FilterSpec::new().status(ReservationStatus::Confirmed),
/// );
///
/// assert!(confirmed
///     .iter()
///     .all(|r| r.status == ReservationStatus::Confirmed));
/// ```
pub fn filter(reservations: &[Reservation], spec: &FilterSpec) -> Vec<Reservation> {
    let guard = spec.to_guard();
    let matched: Vec<Reservation> = reservations
        .iter()
        .filter(|r| guard.check(r))
        .cloned()
        .collect();

    tracing::trace!(
        input = reservations.len(),
        matched = matched.len(),
        active = spec.is_active(),
        "filtered reservations"
    );

    matched
}
