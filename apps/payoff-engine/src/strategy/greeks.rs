//! Net Greeks aggregation across strategy legs.
//!
//! Greeks are opaque inputs here: nothing is derived from the pricing
//! model. Each leg carries externally supplied per-unit delta and theta,
//! and aggregation signs them by action and sums.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::StrategyError;
use super::leg::OptionLeg;

/// Signed sums of per-leg Greeks for a whole strategy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetGreeks {
    /// Sum of leg deltas, signed by action.
    pub net_delta: Decimal,
    /// Sum of leg thetas, signed by action.
    pub net_theta: Decimal,
}

impl NetGreeks {
    /// Zero Greeks.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            net_delta: Decimal::ZERO,
            net_theta: Decimal::ZERO,
        }
    }
}

/// Sum per-leg delta and theta, signed by action.
///
/// Bought legs contribute their Greeks as-is; sold legs contribute them
/// negated. A sold put with delta -0.30 therefore adds +0.30 to net delta.
///
/// # Errors
///
/// Returns [`StrategyError::EmptyLegs`] if `legs` is empty.
pub fn aggregate_greeks(legs: &[OptionLeg]) -> Result<NetGreeks, StrategyError> {
    if legs.is_empty() {
        return Err(StrategyError::EmptyLegs);
    }

    Ok(legs.iter().fold(NetGreeks::zero(), |acc, leg| {
        let sign = leg.action.sign();
        NetGreeks {
            net_delta: acc.net_delta + sign * leg.delta,
            net_theta: acc.net_theta + sign * leg.theta,
        }
    }))
}
