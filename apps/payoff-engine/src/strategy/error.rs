//! Strategy error types.

use thiserror::Error;

/// Errors from strategy and scenario validation.
#[derive(Debug, Error)]
pub enum StrategyError {
    /// Strategy has no legs.
    #[error("Strategy must contain at least one leg")]
    EmptyLegs,

    /// A leg violates a structural invariant.
    #[error("Invalid leg: {message}")]
    InvalidLeg {
        /// Error message.
        message: String,
    },

    /// A strategy-level field violates an invariant.
    #[error("Invalid strategy: {message}")]
    InvalidStrategy {
        /// Error message.
        message: String,
    },

    /// A scenario field violates an invariant.
    #[error("Invalid scenario: {message}")]
    InvalidScenario {
        /// Error message.
        message: String,
    },
}
