//! Price grid construction.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::PayoffError;

/// Price grid configuration for payoff curve generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    /// Fraction of spot spanned on each side of the grid. Must lie in
    /// `(0, 1]`; the default 0.08 covers spot +/- 8%.
    #[serde(default = "default_range_fraction")]
    pub range_fraction: Decimal,

    /// Number of steps; the grid has `steps + 1` points.
    #[serde(default = "default_steps")]
    pub steps: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            range_fraction: default_range_fraction(),
            steps: default_steps(),
        }
    }
}

const fn default_range_fraction() -> Decimal {
    // 0.08
    Decimal::from_parts(8, 0, 0, false, 2)
}

const fn default_steps() -> u32 {
    80
}

/// Validate a grid configuration.
///
/// # Errors
///
/// Returns [`PayoffError::InvalidGrid`] for zero steps or a range fraction
/// outside `(0, 1]`.
pub(crate) fn validate_grid(config: &GridConfig) -> Result<(), PayoffError> {
    if config.steps == 0 {
        return Err(PayoffError::InvalidGrid {
            message: "Grid must have at least one step".to_string(),
        });
    }

    if config.range_fraction <= Decimal::ZERO || config.range_fraction > Decimal::ONE {
        return Err(PayoffError::InvalidGrid {
            message: format!(
                "Range fraction must lie in (0, 1], got: {}",
                config.range_fraction
            ),
        });
    }

    Ok(())
}

/// Build the strictly increasing price grid around `spot`.
///
/// Prices are generated index-based (`min + i * step`) so there is no
/// accumulation drift, and the final point is pinned to `max_price`
/// exactly even when the step division rounds. The grid contains exactly
/// `steps + 1` points with both bounds included. Bounds that overflow the
/// `Decimal` range are reported as [`PayoffError::NumericDegeneracy`],
/// never a panic.
pub(crate) fn price_grid(spot: Decimal, config: &GridConfig) -> Result<Vec<Decimal>, PayoffError> {
    let min_price = spot
        .checked_mul(Decimal::ONE - config.range_fraction)
        .ok_or_else(|| PayoffError::NumericDegeneracy {
            message: format!("Price grid lower bound overflowed for spot {spot}"),
        })?;
    let max_price = spot
        .checked_mul(Decimal::ONE + config.range_fraction)
        .ok_or_else(|| PayoffError::NumericDegeneracy {
            message: format!("Price grid upper bound overflowed for spot {spot}"),
        })?;
    let step = (max_price - min_price) / Decimal::from(config.steps);

    let mut prices = Vec::with_capacity(config.steps as usize + 1);
    for i in 0..=config.steps {
        let price = if i == config.steps {
            max_price
        } else {
            min_price + Decimal::from(i) * step
        };
        if let Some(last) = prices.last() {
            // Guards both a collapsed step and precision loss at extreme
            // scale mixes.
            if price <= *last {
                return Err(PayoffError::NumericDegeneracy {
                    message: format!("Price grid failed to advance at index {i} (step {step})"),
                });
            }
        }
        prices.push(price);
    }

    Ok(prices)
}
