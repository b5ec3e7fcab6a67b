//! Velodesk: the reservation core of a bicycle rental back office
//!
//! Velodesk keeps the logic pure and leaves presentation to the caller.
//! Filtering and status transitions are plain functions that take borrowed
//! data and return new values; a single owned [`RentalStore`] applies their
//! results.
//!
//! # Core Concepts
//!
//! - **Filter**: [`filter`] selects reservations matching a [`FilterSpec`]
//!   (search text, status, category, date), preserving order
//! - **Transition**: [`transition`] replaces a reservation's status; every
//!   pair of statuses is accepted
//! - **Policy**: [`is_transition_offered`] hides actions that would not
//!   change anything
//! - **Store**: [`RentalStore`] owns the fleet and reservations and logs
//!   every status change
//!
//! # Example
//!
//! ```rust
//! use velodesk::{FilterSpec, RentalStore, ReservationId, ReservationStatus};
//!
//! let mut store = RentalStore::seeded();
//!
//! let pending = store.filtered(&FilterSpec::new().status(ReservationStatus::Pending));
//! let first = pending[0].id.clone();
//!
//! store.set_status(&first, ReservationStatus::Confirmed)?;
//!
//! assert_eq!(
//!     store.reservation(&first).map(|r| r.status),
//!     Some(ReservationStatus::Confirmed)
//! );
//! # Ok::<(), velodesk::StoreError>(())
//! ```

pub mod checkpoint;
pub mod config;
pub mod core;
pub mod dashboard;
pub mod filter;
pub mod fleet;
pub mod machine;
pub mod model;
pub mod seed;
pub mod store;

// Re-export commonly used types
pub use checkpoint::{RecordKind, SnapshotError, SnapshotFormat, StoreSnapshot};
pub use config::DashboardConfig;
pub use dashboard::{recent_reservations, DashboardSummary, FleetStats};
pub use filter::{filter, FilterSpec, Selector};
pub use fleet::{BicycleDraft, DraftError, DraftErrors};
pub use machine::{is_transition_offered, offered_actions, transition, StatusAction};
pub use model::{
    Bicycle, BicycleCategory, BicycleId, ParseDateError, ParseLabelError, Reservation,
    ReservationDate, ReservationId, ReservationStatus,
};
pub use seed::SeedData;
pub use store::{RentalStore, StoreError};
