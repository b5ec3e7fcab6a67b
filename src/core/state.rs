//! Core State trait for lifecycle statuses.
//!
//! A state is a closed, copyable value describing where a record sits in its
//! lifecycle. Inspecting a state is always pure.

use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for lifecycle states.
///
/// # Required Traits
///
/// - `Copy` + `Eq` + `Hash`: states are small tags, compared and counted freely
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states travel inside snapshots
///
/// # Example
///
/// ```rust
/// use velodesk::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Ticket {
///     Open,
///     Closed,
/// }
///
/// impl State for Ticket {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Closed)
///     }
/// }
///
/// assert!(Ticket::Closed.is_final());
/// ```
pub trait State:
    Copy + Eq + Hash + Debug + Serialize + DeserializeOwned + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Final states accept no further transitions. Default implementation
    /// returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}
