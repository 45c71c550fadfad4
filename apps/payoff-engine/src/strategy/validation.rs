//! Strategy invariant validation.
//!
//! Structural problems (empty strategies, non-positive strikes) are
//! rejected here with the offending leg index in the message. Numeric
//! floors (volatility, time) are handled later in the pricing path, which
//! clamps instead of erroring.

use rust_decimal::Decimal;

use super::error::StrategyError;
use super::leg::OptionLeg;
use super::types::{Scenario, Strategy};

/// Validate a whole strategy: spot, leg count, and every leg.
///
/// # Errors
///
/// Returns a [`StrategyError`] describing the first violated invariant.
pub fn validate_strategy(strategy: &Strategy) -> Result<(), StrategyError> {
    if strategy.legs.is_empty() {
        return Err(StrategyError::EmptyLegs);
    }

    if strategy.spot <= Decimal::ZERO {
        return Err(StrategyError::InvalidStrategy {
            message: format!("Spot price must be positive, got: {}", strategy.spot),
        });
    }

    for (index, leg) in strategy.legs.iter().enumerate() {
        validate_leg(index, leg)?;
    }

    Ok(())
}

/// Validate a single leg's structural invariants.
///
/// # Errors
///
/// Returns [`StrategyError::InvalidLeg`] naming the leg index and field.
pub fn validate_leg(index: usize, leg: &OptionLeg) -> Result<(), StrategyError> {
    if leg.strike <= Decimal::ZERO {
        return Err(StrategyError::InvalidLeg {
            message: format!("Leg {index}: strike must be positive, got: {}", leg.strike),
        });
    }

    if leg.premium < Decimal::ZERO {
        return Err(StrategyError::InvalidLeg {
            message: format!(
                "Leg {index}: premium cannot be negative, got: {}",
                leg.premium
            ),
        });
    }

    if leg.implied_vol <= Decimal::ZERO {
        return Err(StrategyError::InvalidLeg {
            message: format!(
                "Leg {index}: implied volatility must be positive, got: {}",
                leg.implied_vol
            ),
        });
    }

    if leg.days_to_expiry == 0 {
        return Err(StrategyError::InvalidLeg {
            message: format!("Leg {index}: days to expiry must be at least 1"),
        });
    }

    Ok(())
}

/// Validate a scenario.
///
/// # Errors
///
/// Returns [`StrategyError::InvalidScenario`] if `days_elapsed` is negative.
pub fn validate_scenario(scenario: &Scenario) -> Result<(), StrategyError> {
    if scenario.days_elapsed < Decimal::ZERO {
        return Err(StrategyError::InvalidScenario {
            message: format!(
                "Days elapsed cannot be negative, got: {}",
                scenario.days_elapsed
            ),
        });
    }

    Ok(())
}
