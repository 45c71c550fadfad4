//! Pricing configuration.

use serde::{Deserialize, Serialize};

/// Configuration for scenario valuation.
///
/// All fields have sensible defaults, so `PricingConfig::default()` is the
/// normal entry point; deserialize partial JSON to override selectively.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Risk-free rate as an annualized decimal (0.05 = 5%).
    #[serde(default = "default_risk_free_rate")]
    pub risk_free_rate: f64,

    /// Floor applied to effective volatility before valuation.
    #[serde(default = "default_min_volatility")]
    pub min_volatility: f64,

    /// Floor applied to effective days to expiry in a scenario, so curves
    /// near expiry converge to intrinsic instead of dividing by zero.
    #[serde(default = "default_min_days_to_expiry")]
    pub min_days_to_expiry: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            risk_free_rate: default_risk_free_rate(),
            min_volatility: default_min_volatility(),
            min_days_to_expiry: default_min_days_to_expiry(),
        }
    }
}

const fn default_risk_free_rate() -> f64 {
    0.05
}

const fn default_min_volatility() -> f64 {
    crate::valuation::MIN_VOLATILITY
}

const fn default_min_days_to_expiry() -> f64 {
    0.1
}
