//! Payoff curve generation engine.
//!
//! Walks a price grid around spot and evaluates two curves per point:
//! - Expiry PnL from exact intrinsic-value arithmetic in [`Decimal`]
//! - Scenario PnL from Black-Scholes repricing under shifted volatility
//!   and elapsed time, computed in `f64` and converted back once per point

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::{debug, warn};

use super::curve::{PNL_DECIMALS, PayoffPoint, PayoffResult, breakevens};
use super::error::PayoffError;
use super::grid::{GridConfig, price_grid, validate_grid};
use crate::config::PricingConfig;
use crate::strategy::{
    LegAction, OptionLeg, OptionType, Scenario, Strategy, validate_scenario, validate_strategy,
};
use crate::valuation::theoretical_price;

/// Days per year used to convert days to expiry into year fractions.
const DAYS_PER_YEAR: f64 = 365.0;

// ============================================================================
// Engine
// ============================================================================

/// Payoff curve generation engine.
///
/// Stateless apart from its pricing configuration: generation takes `&self`,
/// touches no globals or clocks, and returns identical results for identical
/// inputs, so one engine can be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct PayoffEngine {
    config: PricingConfig,
}

impl PayoffEngine {
    /// Create an engine with a custom pricing configuration.
    #[must_use]
    pub const fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    /// Get the pricing configuration.
    #[must_use]
    pub const fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Generate the payoff curve with the default scenario and grid.
    ///
    /// # Errors
    ///
    /// Same contract as [`PayoffEngine::generate_with`].
    pub fn generate(&self, strategy: &Strategy) -> Result<PayoffResult, PayoffError> {
        self.generate_with(strategy, &Scenario::default(), &GridConfig::default())
    }

    /// Generate expiry and scenario payoff curves across a price grid.
    ///
    /// # Errors
    ///
    /// Returns [`PayoffError::InvalidStrategy`] for structural violations
    /// (no legs, non-positive spot or strike, negative elapsed days),
    /// [`PayoffError::InvalidGrid`] for a bad grid configuration, and
    /// [`PayoffError::NumericDegeneracy`] if arithmetic degenerates or
    /// overflows the [`Decimal`] range anywhere along the curve.
    pub fn generate_with(
        &self,
        strategy: &Strategy,
        scenario: &Scenario,
        grid_config: &GridConfig,
    ) -> Result<PayoffResult, PayoffError> {
        validate_strategy(strategy)?;
        validate_scenario(scenario)?;
        validate_grid(grid_config)?;

        debug!(
            underlying = %strategy.underlying,
            legs = strategy.legs.len(),
            steps = grid_config.steps,
            iv_shift = %scenario.iv_shift_points,
            days_elapsed = %scenario.days_elapsed,
            "Generating payoff curve"
        );

        let prices = price_grid(strategy.spot, grid_config)?;
        let scenario_legs: Vec<ScenarioLeg> = strategy
            .legs
            .iter()
            .map(|leg| self.scenario_leg(leg, scenario))
            .collect::<Result<_, _>>()?;

        let mut points = Vec::with_capacity(prices.len());
        for price in prices {
            let expiry_pnl = expiry_pnl_total(&strategy.legs, price)?;
            let scenario_pnl = self.scenario_pnl(&scenario_legs, price)?;

            points.push(PayoffPoint {
                price,
                expiry_pnl: expiry_pnl.round_dp(PNL_DECIMALS),
                scenario_pnl: scenario_pnl.round_dp(PNL_DECIMALS),
            });
        }

        let max_profit = points
            .iter()
            .map(|p| p.expiry_pnl)
            .max()
            .unwrap_or(Decimal::ZERO);
        let max_loss = points
            .iter()
            .map(|p| p.expiry_pnl)
            .min()
            .unwrap_or(Decimal::ZERO);

        let breakevens = breakevens(&points)?;
        let net_premium = net_premium_total(&strategy.legs)?;

        Ok(PayoffResult {
            breakevens,
            net_premium,
            points,
            max_profit,
            max_loss,
        })
    }

    /// Fix the per-leg valuation parameters that do not vary across the
    /// grid: effective time to expiry and shifted, floored volatility.
    fn scenario_leg(
        &self,
        leg: &OptionLeg,
        scenario: &Scenario,
    ) -> Result<ScenarioLeg, PayoffError> {
        let days_remaining =
            f64::from(leg.days_to_expiry) - scenario.days_elapsed.to_f64().unwrap_or(0.0);
        let effective_days = if days_remaining < self.config.min_days_to_expiry {
            warn!(
                days_remaining,
                floor = self.config.min_days_to_expiry,
                "Scenario days to expiry below floor, clamping"
            );
            self.config.min_days_to_expiry
        } else {
            days_remaining
        };

        // Implied vol is quoted in percentage points; valuation wants a
        // decimal.
        let shifted_vol = leg
            .implied_vol
            .checked_add(scenario.iv_shift_points)
            .ok_or_else(|| PayoffError::NumericDegeneracy {
                message: format!(
                    "Shifted volatility is not representable: {} + {}",
                    leg.implied_vol, scenario.iv_shift_points
                ),
            })?
            .to_f64()
            .unwrap_or(0.0)
            / 100.0;
        let volatility = if shifted_vol < self.config.min_volatility {
            warn!(
                shifted_vol,
                floor = self.config.min_volatility,
                "Scenario volatility below floor, clamping"
            );
            self.config.min_volatility
        } else {
            shifted_vol
        };

        Ok(ScenarioLeg {
            option_type: leg.option_type,
            sign: match leg.action {
                LegAction::Buy => 1.0,
                LegAction::Sell => -1.0,
            },
            strike: leg.strike.to_f64().unwrap_or(0.0),
            premium: leg.premium.to_f64().unwrap_or(0.0),
            years_to_expiry: effective_days / DAYS_PER_YEAR,
            volatility,
        })
    }

    /// Scenario PnL of the whole strategy at one grid price.
    fn scenario_pnl(&self, legs: &[ScenarioLeg], price: Decimal) -> Result<Decimal, PayoffError> {
        let price_f64 = price.to_f64().unwrap_or(0.0);

        let mut pnl = 0.0_f64;
        for leg in legs {
            let value = if price_f64 > 0.0 {
                theoretical_price(
                    leg.option_type,
                    price_f64,
                    leg.strike,
                    leg.years_to_expiry,
                    self.config.risk_free_rate,
                    leg.volatility,
                )?
            } else {
                // S -> 0 boundary of the valuation formula: calls are
                // worthless, puts converge to the discounted strike.
                match leg.option_type {
                    OptionType::Call => 0.0,
                    OptionType::Put => {
                        leg.strike * (-self.config.risk_free_rate * leg.years_to_expiry).exp()
                    }
                }
            };
            pnl += leg.sign * (value - leg.premium);
        }

        if !pnl.is_finite() {
            return Err(PayoffError::NumericDegeneracy {
                message: format!("Scenario PnL is not finite at price {price}"),
            });
        }

        Decimal::from_f64_retain(pnl).ok_or_else(|| PayoffError::NumericDegeneracy {
            message: format!("Scenario PnL {pnl} is not representable at price {price}"),
        })
    }
}

/// Per-leg valuation parameters fixed across all grid prices.
#[derive(Debug, Clone, Copy)]
struct ScenarioLeg {
    option_type: OptionType,
    sign: f64,
    strike: f64,
    premium: f64,
    years_to_expiry: f64,
    volatility: f64,
}

/// Expiry PnL of the whole strategy at one grid price.
///
/// Per-leg terms are exact for validated legs, but their running total can
/// overflow the [`Decimal`] range.
fn expiry_pnl_total(legs: &[OptionLeg], price: Decimal) -> Result<Decimal, PayoffError> {
    legs.iter().try_fold(Decimal::ZERO, |total, leg| {
        total
            .checked_add(leg.expiry_pnl(price))
            .ok_or_else(|| PayoffError::NumericDegeneracy {
                message: format!("Expiry PnL overflowed at price {price}"),
            })
    })
}

/// Signed entry credit of the legs. Must agree with
/// [`Strategy::net_premium`] whenever that total is representable.
fn net_premium_total(legs: &[OptionLeg]) -> Result<Decimal, PayoffError> {
    legs.iter().try_fold(Decimal::ZERO, |total, leg| {
        total
            .checked_add(-leg.action.sign() * leg.premium)
            .ok_or_else(|| PayoffError::NumericDegeneracy {
                message: "Net premium overflowed the Decimal range".to_owned(),
            })
    })
}

// ============================================================================
// Tests
// ============================================================================
