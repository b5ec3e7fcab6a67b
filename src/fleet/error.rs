//! Bicycle draft validation errors.

use stillwater::NonEmptyVec;
use thiserror::Error;

/// A single problem with a bicycle draft.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DraftError {
    #[error("Name must not be blank")]
    BlankName,

    #[error("Price must not be blank")]
    BlankPrice,

    #[error("Price '{value}' is not a number")]
    InvalidPrice { value: String },

    #[error("Price {price} must not be negative")]
    NegativePrice { price: f64 },
}

/// Every problem found in one draft, in field order. Never empty.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Invalid bicycle: {}", render(.0))]
pub struct DraftErrors(Vec<DraftError>);

fn render(errors: &[DraftError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl DraftErrors {
    pub fn errors(&self) -> &[DraftError] {
        &self.0
    }

    pub fn contains(&self, error: &DraftError) -> bool {
        self.0.contains(error)
    }
}

impl From<DraftError> for DraftErrors {
    fn from(error: DraftError) -> Self {
        Self(vec![error])
    }
}

impl From<NonEmptyVec<DraftError>> for DraftErrors {
    fn from(errors: NonEmptyVec<DraftError>) -> Self {
        Self(errors.iter().cloned().collect())
    }
}
