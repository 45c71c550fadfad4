//! Option leg types and per-leg payoff arithmetic.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Option type (call or put).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OptionType {
    /// Call option.
    Call,
    /// Put option.
    Put,
}

impl std::fmt::Display for OptionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Call => write!(f, "Call"),
            Self::Put => write!(f, "Put"),
        }
    }
}

/// Trade action for a leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LegAction {
    /// Long the option (premium paid).
    Buy,
    /// Short the option (premium collected).
    Sell,
}

impl LegAction {
    /// Payoff sign: `+1` for [`LegAction::Buy`], `-1` for [`LegAction::Sell`].
    #[must_use]
    pub const fn sign(self) -> Decimal {
        match self {
            Self::Buy => Decimal::ONE,
            Self::Sell => Decimal::NEGATIVE_ONE,
        }
    }
}

impl std::fmt::Display for LegAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "Buy"),
            Self::Sell => write!(f, "Sell"),
        }
    }
}

/// A single leg of a multi-leg option strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionLeg {
    /// Option type (call or put).
    pub option_type: OptionType,
    /// Whether the leg was bought or sold.
    pub action: LegAction,
    /// Strike price.
    pub strike: Decimal,
    /// Entry premium per unit of underlying.
    pub premium: Decimal,
    /// Implied volatility in percentage points (18.5 means 18.5%).
    pub implied_vol: Decimal,
    /// Days to expiry assumed for scenario valuation.
    #[serde(default = "default_days_to_expiry")]
    pub days_to_expiry: u32,
    /// Externally supplied delta for this leg.
    #[serde(default)]
    pub delta: Decimal,
    /// Externally supplied theta for this leg.
    #[serde(default)]
    pub theta: Decimal,
}

const fn default_days_to_expiry() -> u32 {
    30
}

impl OptionLeg {
    /// Create a leg with default expiry (30 days) and zero Greeks.
    #[must_use]
    pub const fn new(
        option_type: OptionType,
        action: LegAction,
        strike: Decimal,
        premium: Decimal,
        implied_vol: Decimal,
    ) -> Self {
        Self {
            option_type,
            action,
            strike,
            premium,
            implied_vol,
            days_to_expiry: default_days_to_expiry(),
            delta: Decimal::ZERO,
            theta: Decimal::ZERO,
        }
    }

    /// Attach externally computed Greeks to this leg.
    #[must_use]
    pub const fn with_greeks(mut self, delta: Decimal, theta: Decimal) -> Self {
        self.delta = delta;
        self.theta = theta;
        self
    }

    /// Override the assumed days to expiry.
    #[must_use]
    pub const fn with_days_to_expiry(mut self, days: u32) -> Self {
        self.days_to_expiry = days;
        self
    }

    /// In-the-money value of the leg at the given underlying price.
    #[must_use]
    pub fn intrinsic_value(&self, price: Decimal) -> Decimal {
        match self.option_type {
            OptionType::Call => (price - self.strike).max(Decimal::ZERO),
            OptionType::Put => (self.strike - price).max(Decimal::ZERO),
        }
    }

    /// PnL at expiry for this leg if the underlying settles at `price`.
    ///
    /// Bought legs gain intrinsic value and lose the premium paid; sold
    /// legs keep the premium collected and pay out intrinsic value.
    #[must_use]
    pub fn expiry_pnl(&self, price: Decimal) -> Decimal {
        self.action.sign() * (self.intrinsic_value(price) - self.premium)
    }
}
