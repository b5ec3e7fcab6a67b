//! Reservation records.

use super::category::BicycleCategory;
use super::error::ParseDateError;
use super::status::ReservationStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Canonical textual form of a reservation date.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Opaque identifier of a reservation.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationId(String);

impl ReservationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Calendar day of a reservation.
///
/// Always encoded as `YYYY-MM-DD`. Parsing rejects any other shape, so two
/// dates are equal exactly when their encodings are equal.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct ReservationDate(NaiveDate);

impl ReservationDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The canonical `YYYY-MM-DD` encoding.
    pub fn to_iso(&self) -> String {
        self.0.format(DATE_FORMAT).to_string()
    }
}

impl From<NaiveDate> for ReservationDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for ReservationDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for ReservationDate {
    type Err = ParseDateError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let date = Self(NaiveDate::parse_from_str(value, DATE_FORMAT)?);
        // chrono accepts unpadded fields, padding and signed years
        if date.to_iso() != value {
            return Err(ParseDateError::NotCanonical {
                value: value.to_string(),
            });
        }
        Ok(date)
    }
}

impl Serialize for ReservationDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ReservationDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A booking tying a customer to a bicycle category for some hours on one day.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Reservation {
    pub id: ReservationId,
    pub customer_name: String,
    pub phone_number: String,
    /// Rental length in hours
    pub duration: f64,
    pub reservation_date: ReservationDate,
    /// Copied from the bicycle at booking time; not a live reference
    pub bicycle_category: BicycleCategory,
    pub status: ReservationStatus,
}

impl Reservation {
    /// Duration as shown in tables, e.g. `"2h"`.
    pub fn duration_label(&self) -> String {
        format!("{}h", self.duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_round_trips_through_iso_form() {
        let date: ReservationDate = "2024-05-01".parse().unwrap();

        assert_eq!(date.to_iso(), "2024-05-01");
        assert_eq!(date.date(), NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
    }

    #[test]
    fn date_rejects_other_formats() {
        assert!("01/05/2024".parse::<ReservationDate>().is_err());
        assert!("2024-13-01".parse::<ReservationDate>().is_err());
    }

    #[test]
    fn date_rejects_non_canonical_text() {
        for raw in ["2024-5-1", " 2024-05-01", "+2024-05-01", "2024-05-01 "] {
            assert!(
                raw.parse::<ReservationDate>().is_err(),
                "{raw:?} should be rejected"
            );
        }
        assert!(matches!(
            "2024-5-1".parse::<ReservationDate>(),
            Err(ParseDateError::NotCanonical { .. })
        ));
    }

    #[test]
    fn from_str_and_deserialize_agree() {
        for raw in ["2024-05-01", "2024-5-1", "+2024-05-01", "01/05/2024"] {
            let parsed = raw.parse::<ReservationDate>().ok();
            let decoded: Option<ReservationDate> =
                serde_json::from_value(serde_json::Value::String(raw.to_string())).ok();
            assert_eq!(parsed, decoded, "{raw:?}");
        }
    }

    #[test]
    fn deserialize_rejects_unpadded_dates() {
        let result: Result<ReservationDate, _> = serde_json::from_str("\"2024-5-1\"");
        assert!(result.is_err());

        let date: ReservationDate = serde_json::from_str("\"2024-05-01\"").unwrap();
        assert_eq!(serde_json::to_string(&date).unwrap(), "\"2024-05-01\"");
    }

    #[test]
    fn duration_label_appends_hours() {
        let reservation = Reservation {
            id: ReservationId::new("r1"),
            customer_name: "Sara".to_string(),
            phone_number: "0600".to_string(),
            duration: 2.0,
            reservation_date: "2024-05-01".parse().unwrap(),
            bicycle_category: BicycleCategory::City,
            status: ReservationStatus::Pending,
        };

        assert_eq!(reservation.duration_label(), "2h");
    }
}
