//! Reservation search and filters.
//!
//! `filter` is a pure, order-preserving selection over a reservation slice.
//! Constraints are combined with AND; inactive constraints match everything.

mod engine;
mod spec;

pub use engine::filter;
pub use spec::{FilterSpec, Selector, ANY_LABEL};
