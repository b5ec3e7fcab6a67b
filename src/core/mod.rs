//! Core primitives shared by the filter engine and the status machine.
//!
//! - Lifecycle states via the `State` trait
//! - Guard predicates, composable with `all`/`any`
//! - Immutable history of state changes
//!
//! Everything here is pure; mutation lives in the store.

mod guard;
mod history;
mod state;

pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::State;
