//! Bicycle categories.

crate::label_enum! {
    /// Category of a bicycle, also copied onto every reservation.
    pub enum BicycleCategory {
        VTT,
        City,
        Electric,
    }
    kind: "category"
}

impl Default for BicycleCategory {
    /// The editor pre-selects `City` for new bicycles.
    fn default() -> Self {
        Self::City
    }
}
