//! Payoff generation error types.

use thiserror::Error;

use crate::strategy::StrategyError;
use crate::valuation::ValuationError;

/// Errors from payoff curve generation.
#[derive(Debug, Error)]
pub enum PayoffError {
    /// Strategy or scenario failed invariant validation.
    #[error("Strategy validation failed: {0}")]
    InvalidStrategy(#[from] StrategyError),

    /// Grid configuration failed invariant validation.
    #[error("Invalid grid: {message}")]
    InvalidGrid {
        /// Error message.
        message: String,
    },

    /// Arithmetic degenerated: the grid failed to advance or a PnL sum
    /// produced a non-finite value.
    #[error("Numeric degeneracy: {message}")]
    NumericDegeneracy {
        /// Error message.
        message: String,
    },

    /// Scenario valuation failed.
    #[error("Valuation failed: {0}")]
    Valuation(#[from] ValuationError),
}
