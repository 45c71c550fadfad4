//! Payoff curve types and breakeven extraction.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::PayoffError;

/// Decimal places kept on emitted PnL values and breakevens (cents).
/// Grid prices keep full precision; rounding happens once, at emission.
pub(crate) const PNL_DECIMALS: u32 = 2;

/// A single point on the payoff curve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoffPoint {
    /// Underlying price for this grid point, at full grid precision.
    pub price: Decimal,
    /// PnL if the strategy is held to expiry and the underlying settles
    /// here, rounded to cents.
    pub expiry_pnl: Decimal,
    /// PnL under the requested scenario (shifted volatility, elapsed
    /// time), rounded to cents.
    pub scenario_pnl: Decimal,
}

/// Payoff curve plus summary statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoffResult {
    /// Curve points in strictly increasing price order.
    pub points: Vec<PayoffPoint>,
    /// Highest expiry PnL across the grid.
    pub max_profit: Decimal,
    /// Lowest expiry PnL across the grid.
    pub max_loss: Decimal,
    /// Prices where the expiry curve crosses zero, found by linear
    /// interpolation between adjacent grid points. Exact when the
    /// crossing segment contains no strike kink; otherwise accurate to
    /// within one grid step.
    pub breakevens: Vec<Decimal>,
    /// Signed entry credit of the strategy.
    pub net_premium: Decimal,
}

/// Locate zero crossings of the expiry curve.
///
/// Emits the first point of each exactly-zero run (so a flat plateau at
/// zero reports one breakeven, not every grid price) plus an interpolated
/// price for every strict sign change between adjacent points. Results
/// are rounded to cents and strictly increasing. A sign change whose PnL
/// span overflows the `Decimal` range is reported as
/// [`PayoffError::NumericDegeneracy`], never a panic.
pub(crate) fn breakevens(points: &[PayoffPoint]) -> Result<Vec<Decimal>, PayoffError> {
    let mut crossings = Vec::new();

    for (i, point) in points.iter().enumerate() {
        if point.expiry_pnl == Decimal::ZERO
            && (i == 0 || points[i - 1].expiry_pnl != Decimal::ZERO)
        {
            crossings.push(point.price.round_dp(PNL_DECIMALS));
        }

        if let Some(next) = points.get(i + 1) {
            let a = point.expiry_pnl;
            let b = next.expiry_pnl;
            let crosses = (a < Decimal::ZERO && b > Decimal::ZERO)
                || (a > Decimal::ZERO && b < Decimal::ZERO);
            if crosses {
                // a and b have opposite signs, so the span can exceed the
                // range even when both operands fit.
                let span = b
                    .checked_sub(a)
                    .ok_or_else(|| PayoffError::NumericDegeneracy {
                        message: format!(
                            "Breakeven interpolation overflowed near price {}",
                            point.price
                        ),
                    })?;
                let fraction = -a / span;
                let price = point.price + (next.price - point.price) * fraction;
                crossings.push(price.round_dp(PNL_DECIMALS));
            }
        }
    }

    crossings.dedup();
    Ok(crossings)
}
