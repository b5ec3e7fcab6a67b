//! Reservation status machine.
//!
//! `transition` is permissive: all nine (current, target) pairs succeed.
//! The `policy` half decides which of them a user interface should offer.

mod policy;
mod transition;

pub use policy::{is_transition_offered, offered_actions, StatusAction};
pub use transition::{transition, transition_logged};
