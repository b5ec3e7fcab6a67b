//! Reservation Desk
//!
//! This example walks through a working session on the seeded store.
//!
//! Key concepts:
//! - Building filters from the values a filter bar would hold
//! - Showing only the status actions that change something
//! - Applying a status change through the store and reading the history
//! - Editing the fleet with validated drafts
//!
//! Run with: cargo run --example reservation_desk

use velodesk::{
    offered_actions, recent_reservations, BicycleCategory, BicycleDraft, DashboardConfig,
    DashboardSummary, FilterSpec, FleetStats, RentalStore, ReservationStatus, StoreError,
};

fn print_summary(store: &RentalStore, config: &DashboardConfig) {
    let summary = DashboardSummary::compute(store.bicycles(), store.reservations());
    println!(
        "Reservations: {} | Pending: {} | Confirmed: {} | Fleet: {}",
        summary.total_reservations, summary.pending, summary.confirmed, summary.fleet_size
    );

    println!("Recent:");
    for r in recent_reservations(store.reservations(), config.recent_limit) {
        println!(
            "  {:<22} {:<9} {:>3} {}",
            r.customer_name,
            r.bicycle_category,
            r.duration_label(),
            r.status
        );
    }
}

fn main() -> Result<(), StoreError> {
    println!("=== Reservation Desk ===\n");

    let config = DashboardConfig::default();
    let mut store = RentalStore::seeded();
    print_summary(&store, &config);

    // Filter bar: status "Pending", category "all", search "a"
    let spec = FilterSpec {
        search_text: "a".to_string(),
        status: "Pending".parse().expect("valid status option"),
        category: "all".parse().expect("valid category option"),
        date: None,
    };
    println!("\nPending reservations matching 'a':");
    for r in store.filtered(&spec) {
        let actions: Vec<_> = offered_actions(r.status)
            .iter()
            .map(|a| a.name())
            .collect();
        println!("  {} ({}) actions: {}", r.customer_name, r.phone_number, actions.join(", "));
    }

    let first = store.filtered(&spec)[0].id.clone();
    store.set_status(&first, ReservationStatus::Confirmed)?;
    println!("\nConfirmed {first}; path: {:?}", store.history().path(first.as_str()));

    println!("\nClear all -> {} reservations", store.filtered(&spec.clear()).len());

    let id = store.add_bicycle(&BicycleDraft::new("Tilt 500", "90", BicycleCategory::City))?;
    let bike = store.bicycle(&id).expect("bicycle was just added");
    println!("\nAdded {} at {}", bike.name, bike.price_label(&config.currency));

    match store.add_bicycle(&BicycleDraft::new("", "free", BicycleCategory::VTT)) {
        Ok(_) => println!("Unexpectedly accepted a blank draft"),
        Err(e) => println!("Rejected draft: {e}"),
    }

    let stats = FleetStats::compute(store.bicycles());
    println!(
        "Fleet: {} total, {} VTT, {} City, {} Electric\n",
        stats.total, stats.vtt, stats.city, stats.electric
    );

    print_summary(&store, &config);
    Ok(())
}
