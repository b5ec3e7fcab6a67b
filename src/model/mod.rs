//! Fleet and reservation records.
//!
//! Categories and statuses are closed enumerations; free text only becomes
//! one of them through `FromStr`, which rejects unknown labels.

mod bicycle;
mod category;
mod error;
pub mod macros;
mod reservation;
mod status;

pub use bicycle::{Bicycle, BicycleId};
pub use category::BicycleCategory;
pub use error::{ParseDateError, ParseLabelError};
pub use reservation::{Reservation, ReservationDate, ReservationId, DATE_FORMAT};
pub use status::ReservationStatus;
