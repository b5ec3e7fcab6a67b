//! Filter specifications.

use crate::model::{BicycleCategory, ParseLabelError, ReservationStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Option value the filter selects use for "no constraint".
pub const ANY_LABEL: &str = "all";

/// Constraint on one enumerated field: either anything, or one exact value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selector<T> {
    Any,
    Exactly(T),
}

impl<T> Default for Selector<T> {
    fn default() -> Self {
        Self::Any
    }
}

impl<T: PartialEq> Selector<T> {
    pub fn accepts(&self, value: &T) -> bool {
        match self {
            Self::Any => true,
            Self::Exactly(wanted) => wanted == value,
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }
}

impl<T: fmt::Display> fmt::Display for Selector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str(ANY_LABEL),
            Self::Exactly(value) => value.fmt(f),
        }
    }
}

impl<T> FromStr for Selector<T>
where
    T: FromStr<Err = ParseLabelError>,
{
    type Err = ParseLabelError;

    /// `"all"` selects anything; otherwise the text must name a variant.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value == ANY_LABEL {
            Ok(Self::Any)
        } else {
            value.parse().map(Self::Exactly)
        }
    }
}

impl<T> From<T> for Selector<T> {
    fn from(value: T) -> Self {
        Self::Exactly(value)
    }
}

/// Composite reservation filter. Every field defaults to "no constraint".
///
/// # Example
///
/// ```rust
/// use velodesk::{FilterSpec, ReservationStatus};
///
/// let spec = FilterSpec::new()
///     .search("sa")
///     .status(ReservationStatus::Pending);
///
/// assert!(spec.is_active());
/// assert!(!spec.clear().is_active());
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSpec {
    /// Name (case-insensitive) or phone (literal) substring
    pub search_text: String,
    pub status: Selector<ReservationStatus>,
    pub category: Selector<BicycleCategory>,
    /// Exact calendar day
    pub date: Option<NaiveDate>,
}

impl FilterSpec {
    /// The identity filter.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn status(mut self, status: impl Into<Selector<ReservationStatus>>) -> Self {
        self.status = status.into();
        self
    }

    pub fn category(mut self, category: impl Into<Selector<BicycleCategory>>) -> Self {
        self.category = category.into();
        self
    }

    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// True when at least one field narrows the result.
    pub fn is_active(&self) -> bool {
        !self.search_text.is_empty()
            || !self.status.is_any()
            || !self.category.is_any()
            || self.date.is_some()
    }

    /// Drop every constraint.
    pub fn clear(&self) -> Self {
        Self::default()
    }
}
