//! Strategy and scenario definitions.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::StrategyError;
use super::greeks::{NetGreeks, aggregate_greeks};
use super::leg::OptionLeg;

/// A multi-leg option strategy quoted against a single underlying.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Strategy {
    /// Underlying name (display only, carries no pricing semantics).
    pub underlying: String,
    /// Current spot price of the underlying.
    pub spot: Decimal,
    /// Strategy legs in quote order. At least one is required to price.
    pub legs: Vec<OptionLeg>,
}

impl Strategy {
    /// Create a strategy from its legs.
    #[must_use]
    pub fn new(underlying: &str, spot: Decimal, legs: Vec<OptionLeg>) -> Self {
        Self {
            underlying: underlying.to_string(),
            spot,
            legs,
        }
    }

    /// Signed entry credit: premium collected on sold legs minus premium
    /// paid on bought legs. Positive for net-credit strategies.
    #[must_use]
    pub fn net_premium(&self) -> Decimal {
        self.legs
            .iter()
            .map(|leg| -leg.action.sign() * leg.premium)
            .sum()
    }

    /// Net delta/theta across legs, signed by action.
    ///
    /// # Errors
    ///
    /// Returns [`StrategyError::EmptyLegs`] if the strategy has no legs.
    pub fn net_greeks(&self) -> Result<NetGreeks, StrategyError> {
        aggregate_greeks(&self.legs)
    }
}

/// A what-if repricing of the strategy before expiry.
///
/// The default scenario (no shift, no elapsed time) reprices the strategy
/// as quoted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scenario {
    /// Shift applied to every leg's implied volatility, in percentage
    /// points (2 means +2 vol points).
    #[serde(default)]
    pub iv_shift_points: Decimal,
    /// Days already elapsed since the legs were quoted. Must be >= 0.
    #[serde(default)]
    pub days_elapsed: Decimal,
}

impl Scenario {
    /// Create a scenario from a volatility shift and elapsed days.
    #[must_use]
    pub const fn new(iv_shift_points: Decimal, days_elapsed: Decimal) -> Self {
        Self {
            iv_shift_points,
            days_elapsed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::{LegAction, OptionType};
    use rust_decimal_macros::dec;

    fn iron_condor() -> Strategy {
        Strategy::new(
            "NIFTY",
            dec!(22150),
            vec![
                OptionLeg::new(
                    OptionType::Put,
                    LegAction::Sell,
                    dec!(22000),
                    dec!(85),
                    dec!(18),
                ),
                OptionLeg::new(
                    OptionType::Put,
                    LegAction::Buy,
                    dec!(21900),
                    dec!(45),
                    dec!(19),
                ),
                OptionLeg::new(
                    OptionType::Call,
                    LegAction::Sell,
                    dec!(22300),
                    dec!(75),
                    dec!(16),
                ),
                OptionLeg::new(
                    OptionType::Call,
                    LegAction::Buy,
                    dec!(22400),
                    dec!(35),
                    dec!(16.5),
                ),
            ],
        )
    }

    #[test]
    fn test_net_premium_iron_condor() {
        // Collected 85 + 75, paid 45 + 35.
        assert_eq!(iron_condor().net_premium(), dec!(80));
    }

    #[test]
    fn test_net_premium_debit_strategy() {
        let strategy = Strategy::new(
            "NIFTY",
            dec!(22150),
            vec![OptionLeg::new(
                OptionType::Call,
                LegAction::Buy,
                dec!(22200),
                dec!(120),
                dec!(17),
            )],
        );
        assert_eq!(strategy.net_premium(), dec!(-120));
    }

    #[test]
    fn test_net_greeks_delegates_to_aggregation() {
        let strategy = Strategy::new(
            "NIFTY",
            dec!(22150),
            vec![
                OptionLeg::new(
                    OptionType::Call,
                    LegAction::Buy,
                    dec!(22200),
                    dec!(120),
                    dec!(17),
                )
                .with_greeks(dec!(0.45), dec!(-8.2)),
            ],
        );

        let greeks = strategy.net_greeks().expect("should aggregate");
        assert_eq!(greeks.net_delta, dec!(0.45));
        assert_eq!(greeks.net_theta, dec!(-8.2));
    }

    #[test]
    fn test_scenario_default_is_identity() {
        let scenario = Scenario::default();
        assert_eq!(scenario.iv_shift_points, Decimal::ZERO);
        assert_eq!(scenario.days_elapsed, Decimal::ZERO);
    }

    #[test]
    fn test_strategy_round_trips_through_json() {
        let strategy = iron_condor();
        let json = serde_json::to_string(&strategy).expect("should serialize");
        let back: Strategy = serde_json::from_str(&json).expect("should deserialize");

        assert_eq!(back.underlying, "NIFTY");
        assert_eq!(back.spot, dec!(22150));
        assert_eq!(back.legs.len(), 4);
        assert_eq!(back.net_premium(), dec!(80));
    }
}
