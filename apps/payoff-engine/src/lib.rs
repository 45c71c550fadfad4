// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Payoff Engine - Option Strategy Pricing Kernel
//!
//! Deterministic pricing and payoff analysis for multi-leg option
//! strategies:
//! - Expiry payoff curves from exact intrinsic-value arithmetic
//! - Pre-expiry scenario curves from closed-form Black-Scholes valuation
//!   under shifted volatility and elapsed time
//! - Net premium, max profit/loss, breakevens, and signed Greeks sums
//!
//! # Architecture
//!
//! ```text
//! math       Normal distribution primitives (CDF approximation)
//! valuation  Black-Scholes pricing of a single European option
//! strategy   Domain model: legs, strategies, scenarios, validation
//! config     Pricing configuration (rate and numeric floors)
//! payoff     Grid construction and curve generation engine
//! ```
//!
//! Monetary quantities stay in [`rust_decimal::Decimal`] end to end; only
//! the valuation core runs in `f64`, and results are rounded to cents at
//! the boundary on the way back.
//!
//! # Determinism
//!
//! Generation is a pure function of its inputs. No clocks, no randomness,
//! no global state: the same strategy, scenario, and grid always produce
//! the same curve.
//!
//! # Example
//!
//! ```ignore
//! use payoff_engine::{LegAction, OptionLeg, OptionType, PayoffEngine, Strategy};
//! use rust_decimal_macros::dec;
//!
//! let strategy = Strategy::new(
//!     "NIFTY",
//!     dec!(22150),
//!     vec![OptionLeg::new(
//!         OptionType::Put,
//!         LegAction::Sell,
//!         dec!(22000),
//!         dec!(85),
//!         dec!(18),
//!     )],
//! );
//!
//! let result = PayoffEngine::default().generate(&strategy)?;
//! println!("max profit: {}", result.max_profit);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Pricing configuration (risk-free rate and numeric floors).
pub mod config;
/// Normal distribution primitives.
pub mod math;
/// Payoff curve generation.
pub mod payoff;
/// Strategy domain model and Greeks aggregation.
pub mod strategy;
/// Closed-form option valuation.
pub mod valuation;

// Re-export the public API at the crate root.
pub use config::PricingConfig;
pub use math::{norm_cdf, norm_pdf};
pub use payoff::{GridConfig, PayoffEngine, PayoffError, PayoffPoint, PayoffResult};
pub use strategy::{
    LegAction, NetGreeks, OptionLeg, OptionType, Scenario, Strategy, StrategyError,
    aggregate_greeks,
};
pub use valuation::{MIN_VOLATILITY, ValuationError, theoretical_price};
