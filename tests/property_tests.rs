//! Property-based tests for filtering and status transitions.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated reservations and filters.

use chrono::NaiveDate;
use proptest::prelude::*;
use velodesk::{
    filter, is_transition_offered, offered_actions, transition, BicycleCategory, FilterSpec,
    Reservation, ReservationId, ReservationStatus, Selector,
};

prop_compose! {
    fn arbitrary_status()(variant in 0..3u8) -> ReservationStatus {
        match variant {
            0 => ReservationStatus::Pending,
            1 => ReservationStatus::Confirmed,
            _ => ReservationStatus::Annulled,
        }
    }
}

prop_compose! {
    fn arbitrary_category()(variant in 0..3u8) -> BicycleCategory {
        match variant {
            0 => BicycleCategory::VTT,
            1 => BicycleCategory::City,
            _ => BicycleCategory::Electric,
        }
    }
}

prop_compose! {
    fn arbitrary_date()(month in 1..=12u32, day in 1..=28u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, month, day).unwrap()
    }
}

prop_compose! {
    fn arbitrary_reservation()(
        id in 0..1000u32,
        name in "[A-Za-z]{1,8}",
        phone in "[0-9A-Za-z]{0,6}",
        duration in 1..8u32,
        date in arbitrary_date(),
        category in arbitrary_category(),
        status in arbitrary_status(),
    ) -> Reservation {
        Reservation {
            id: ReservationId::new(format!("r{id}")),
            customer_name: name,
            phone_number: phone,
            duration: f64::from(duration),
            reservation_date: date.into(),
            bicycle_category: category,
            status,
        }
    }
}

prop_compose! {
    fn arbitrary_spec()(
        search in "[A-Za-z0-9]{0,2}",
        status in prop::option::of(arbitrary_status()),
        category in prop::option::of(arbitrary_category()),
        date in prop::option::of(arbitrary_date()),
    ) -> FilterSpec {
        FilterSpec {
            search_text: search,
            status: status.map_or(Selector::Any, Selector::Exactly),
            category: category.map_or(Selector::Any, Selector::Exactly),
            date,
        }
    }
}

/// Reference matcher written directly from the filter rules.
fn expected_match(spec: &FilterSpec, r: &Reservation) -> bool {
    let text = &spec.search_text;
    let search_ok = r.customer_name.to_lowercase().contains(&text.to_lowercase())
        || r.phone_number.contains(text.as_str());
    let status_ok = match spec.status {
        Selector::Any => true,
        Selector::Exactly(status) => r.status == status,
    };
    let category_ok = match spec.category {
        Selector::Any => true,
        Selector::Exactly(category) => r.bicycle_category == category,
    };
    let date_ok = spec
        .date
        .map_or(true, |d| r.reservation_date.to_iso() == d.format("%Y-%m-%d").to_string());

    search_ok && status_ok && category_ok && date_ok
}

/// True when `sub` appears in `all` in the same relative order.
fn is_subsequence(sub: &[Reservation], all: &[Reservation]) -> bool {
    let mut rest = all.iter();
    sub.iter().all(|wanted| rest.any(|r| r == wanted))
}

proptest! {
    #[test]
    fn filter_returns_ordered_subsequence(
        reservations in prop::collection::vec(arbitrary_reservation(), 0..20),
        spec in arbitrary_spec(),
    ) {
        let result = filter(&reservations, &spec);
        prop_assert!(is_subsequence(&result, &reservations));
    }

    #[test]
    fn identity_filter_returns_input(
        reservations in prop::collection::vec(arbitrary_reservation(), 0..20),
    ) {
        prop_assert_eq!(filter(&reservations, &FilterSpec::new()), reservations);
    }

    #[test]
    fn every_result_matches_and_every_match_is_kept(
        reservations in prop::collection::vec(arbitrary_reservation(), 0..20),
        spec in arbitrary_spec(),
    ) {
        let result = filter(&reservations, &spec);
        let expected: Vec<Reservation> = reservations
            .iter()
            .filter(|r| expected_match(&spec, r))
            .cloned()
            .collect();

        prop_assert_eq!(&result, &expected);
        for r in &result {
            prop_assert!(spec.status.accepts(&r.status));
            prop_assert!(spec.category.accepts(&r.bicycle_category));
            if let Some(date) = spec.date {
                prop_assert_eq!(r.reservation_date.date(), date);
            }
        }
    }

    #[test]
    fn name_search_ignores_case(reservation in arbitrary_reservation()) {
        let upper = reservation.customer_name.to_uppercase();
        let lower = reservation.customer_name.to_lowercase();
        let records = vec![reservation];

        prop_assert_eq!(filter(&records, &FilterSpec::new().search(upper)).len(), 1);
        prop_assert_eq!(filter(&records, &FilterSpec::new().search(lower)).len(), 1);
    }

    #[test]
    fn search_matches_name_or_phone_substring(
        reservation in arbitrary_reservation(),
        start in 0..6usize,
        len in 1..4usize,
        from_phone in any::<bool>(),
    ) {
        let source = if from_phone {
            reservation.phone_number.clone()
        } else {
            reservation.customer_name.clone()
        };
        let start = start.min(source.len());
        let end = (start + len).min(source.len());
        let needle = source[start..end].to_string();
        let records = vec![reservation];

        let spec = FilterSpec::new().search(needle.clone());
        prop_assert_eq!(filter(&records, &spec).len(), 1, "needle {:?}", needle);
    }

    #[test]
    fn filter_is_deterministic(
        reservations in prop::collection::vec(arbitrary_reservation(), 0..20),
        spec in arbitrary_spec(),
    ) {
        prop_assert_eq!(filter(&reservations, &spec), filter(&reservations, &spec));
    }

    #[test]
    fn transition_only_changes_status(
        reservation in arbitrary_reservation(),
        target in arbitrary_status(),
    ) {
        let updated = transition(&reservation, target);

        prop_assert_eq!(updated.status, target);
        prop_assert_eq!(
            Reservation { status: reservation.status, ..updated },
            reservation
        );
    }

    #[test]
    fn transition_is_idempotent(
        reservation in arbitrary_reservation(),
        target in arbitrary_status(),
    ) {
        let once = transition(&reservation, target);
        let twice = transition(&once, target);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn offered_transitions_always_change_status(
        current in arbitrary_status(),
        target in arbitrary_status(),
    ) {
        if is_transition_offered(current, target) {
            prop_assert_ne!(current, target);
        }
        prop_assert!(offered_actions(current).iter().all(|a| a.target() != current));
    }
}
