//! Dashboard presentation settings.

use serde::{Deserialize, Serialize};

/// Default number of reservations shown on the dashboard.
pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// Default currency label for hourly rates.
pub const DEFAULT_CURRENCY: &str = "MAD";

/// Settings read by the dashboard and the fleet table.
///
/// # Example
///
/// ```rust
/// use velodesk::DashboardConfig;
///
/// let config = DashboardConfig::builder().recent_limit(10).build();
/// assert_eq!(config.recent_limit, 10);
/// assert_eq!(config.currency, "MAD");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// How many reservations the dashboard lists
    pub recent_limit: usize,
    /// Currency printed after hourly rates
    pub currency: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            recent_limit: DEFAULT_RECENT_LIMIT,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl DashboardConfig {
    pub fn builder() -> DashboardConfigBuilder {
        DashboardConfigBuilder::new()
    }
}

/// Builder for [`DashboardConfig`].
pub struct DashboardConfigBuilder {
    recent_limit: Option<usize>,
    currency: Option<String>,
}

impl DashboardConfigBuilder {
    pub fn new() -> Self {
        Self {
            recent_limit: None,
            currency: None,
        }
    }

    /// Set how many reservations the dashboard lists
    pub fn recent_limit(mut self, n: usize) -> Self {
        self.recent_limit = Some(n);
        self
    }

    /// Set the currency label
    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    pub fn build(self) -> DashboardConfig {
        let defaults = DashboardConfig::default();
        DashboardConfig {
            recent_limit: self.recent_limit.unwrap_or(defaults.recent_limit),
            currency: self.currency.unwrap_or(defaults.currency),
        }
    }
}

impl Default for DashboardConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_dashboard() {
        let config = DashboardConfig::default();

        assert_eq!(config.recent_limit, 5);
        assert_eq!(config.currency, "MAD");
    }

    #[test]
    fn builder_overrides_fields() {
        let config = DashboardConfig::builder()
            .recent_limit(3)
            .currency("EUR")
            .build();

        assert_eq!(config.recent_limit, 3);
        assert_eq!(config.currency, "EUR");
    }

    #[test]
    fn empty_builder_yields_defaults() {
        assert_eq!(DashboardConfigBuilder::new().build(), DashboardConfig::default());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: DashboardConfig = serde_json::from_str(r#"{"currency":"USD"}"#).unwrap();

        assert_eq!(config.recent_limit, DEFAULT_RECENT_LIMIT);
        assert_eq!(config.currency, "USD");
    }
}
