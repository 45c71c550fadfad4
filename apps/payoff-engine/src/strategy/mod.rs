//! Multi-Leg Option Strategy Model
//!
//! Domain types for strategies built from option legs:
//! - Legs with type, action, strike, premium, and implied volatility
//! - Strategy-level net premium and signed Greeks aggregation
//! - Scenario inputs for what-if repricing (vol shift, elapsed days)
//! - Structural invariant validation with typed errors

mod error;
mod greeks;
mod leg;
mod types;
mod validation;

pub use error::StrategyError;
pub use greeks::{NetGreeks, aggregate_greeks};
pub use leg::{LegAction, OptionLeg, OptionType};
pub use types::{Scenario, Strategy};
pub use validation::{validate_leg, validate_scenario, validate_strategy};
