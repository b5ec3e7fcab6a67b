//! Bicycle editor input and its validation.

use super::error::{DraftError, DraftErrors};
use crate::model::{Bicycle, BicycleCategory, BicycleId};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Raw editor input for creating or editing a bicycle.
///
/// The price is kept as typed so that a bad value can be reported instead
/// of silently coerced.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BicycleDraft {
    pub name: String,
    pub price: String,
    pub category: BicycleCategory,
}

/// Fields of a draft that passed validation.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidDraft {
    pub name: String,
    pub price: f64,
    pub category: BicycleCategory,
}

impl ValidDraft {
    pub fn into_bicycle(self, id: BicycleId) -> Bicycle {
        Bicycle {
            id,
            name: self.name,
            price: self.price,
            category: self.category,
        }
    }
}

fn check_name(name: &str) -> Validation<(), NonEmptyVec<DraftError>> {
    if name.trim().is_empty() {
        Validation::fail(DraftError::BlankName)
    } else {
        Validation::success(())
    }
}

fn parse_price(raw: &str) -> Result<f64, DraftError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DraftError::BlankPrice);
    }
    let price: f64 = trimmed.parse().map_err(|_| DraftError::InvalidPrice {
        value: raw.to_string(),
    })?;
    if !price.is_finite() {
        return Err(DraftError::InvalidPrice {
            value: raw.to_string(),
        });
    }
    if price < 0.0 {
        return Err(DraftError::NegativePrice { price });
    }
    // "-0" parses to negative zero, which would print as "-0"
    Ok(price + 0.0)
}

impl BicycleDraft {
    pub fn new(name: impl Into<String>, price: impl Into<String>, category: BicycleCategory) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            category,
        }
    }

    /// Pre-fill the editor with an existing bicycle.
    pub fn from_bicycle(bicycle: &Bicycle) -> Self {
        Self {
            name: bicycle.name.clone(),
            price: bicycle.price.to_string(),
            category: bicycle.category,
        }
    }

    /// Validate every field, reporting all problems at once.
    pub fn validate(&self) -> Result<ValidDraft, DraftErrors> {
        let price = parse_price(&self.price);
        let price_check = match &price {
            Ok(_) => Validation::success(()),
            Err(e) => Validation::fail(e.clone()),
        };

        match Validation::all_vec(vec![check_name(&self.name), price_check]) {
            Validation::Failure(errors) => Err(errors.into()),
            Validation::Success(_) => Ok(ValidDraft {
                name: self.name.clone(),
                price: price?,
                category: self.category,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_draft_passes() {
        let draft = BicycleDraft::new("Rockrider ST 520", "120", BicycleCategory::VTT);
        let valid = draft.validate().unwrap();

        assert_eq!(valid.name, "Rockrider ST 520");
        assert_eq!(valid.price, 120.0);
        assert_eq!(valid.category, BicycleCategory::VTT);
    }

    #[test]
    fn decimal_price_with_padding_is_accepted() {
        let draft = BicycleDraft::new("Elops", " 12.5 ", BicycleCategory::City);
        assert_eq!(draft.validate().unwrap().price, 12.5);
    }

    #[test]
    fn blank_fields_are_all_reported() {
        let draft = BicycleDraft::new("   ", "", BicycleCategory::City);
        let errors = draft.validate().unwrap_err();

        assert_eq!(errors.errors().len(), 2);
        assert!(errors.contains(&DraftError::BlankName));
        assert!(errors.contains(&DraftError::BlankPrice));
    }

    #[test]
    fn garbage_price_is_rejected() {
        let draft = BicycleDraft::new("Btwin", "cheap", BicycleCategory::City);
        let errors = draft.validate().unwrap_err();

        assert_eq!(
            errors.errors(),
            &[DraftError::InvalidPrice {
                value: "cheap".to_string()
            }]
        );
    }

    #[test]
    fn non_finite_price_is_rejected() {
        let draft = BicycleDraft::new("Btwin", "inf", BicycleCategory::City);
        assert!(draft.validate().is_err());
    }

    #[test]
    fn negative_price_is_rejected() {
        let draft = BicycleDraft::new("Btwin", "-5", BicycleCategory::City);
        let errors = draft.validate().unwrap_err();

        assert!(errors.contains(&DraftError::NegativePrice { price: -5.0 }));
    }

    #[test]
    fn negative_zero_price_is_stored_as_zero() {
        let valid = BicycleDraft::new("Btwin", "-0", BicycleCategory::City)
            .validate()
            .unwrap();

        assert_eq!(valid.price, 0.0);
        assert!(valid.price.is_sign_positive());
        assert_eq!(
            valid.into_bicycle(BicycleId::new("b9")).price_label("MAD"),
            "0 MAD/h"
        );
    }

    #[test]
    fn from_bicycle_round_trips() {
        let bike = Bicycle {
            id: BicycleId::new("b1"),
            name: "Voltaire".to_string(),
            price: 200.0,
            category: BicycleCategory::Electric,
        };

        let valid = BicycleDraft::from_bicycle(&bike).validate().unwrap();
        assert_eq!(valid.into_bicycle(BicycleId::new("b1")), bike);
    }

    #[test]
    fn default_draft_uses_city() {
        assert_eq!(BicycleDraft::default().category, BicycleCategory::City);
    }

    #[test]
    fn errors_render_in_field_order() {
        let errors = BicycleDraft::new("", "", BicycleCategory::City)
            .validate()
            .unwrap_err();

        assert_eq!(
            errors.to_string(),
            "Invalid bicycle: Name must not be blank; Price must not be blank"
        );
    }
}
