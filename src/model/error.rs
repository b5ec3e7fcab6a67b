//! Label and date parsing errors.

use thiserror::Error;

/// Free text that names none of an enumeration's variants.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown {kind} '{value}'")]
pub struct ParseLabelError {
    /// Which enumeration was being parsed, e.g. "status"
    pub kind: &'static str,
    /// The rejected input
    pub value: String,
}

/// Text that is not a canonical `YYYY-MM-DD` reservation date.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseDateError {
    #[error("Invalid reservation date: {0}")]
    Invalid(#[from] chrono::ParseError),

    #[error("Reservation date '{value}' is not in YYYY-MM-DD form")]
    NotCanonical { value: String },
}
