//! Closed-Form Option Valuation
//!
//! Theoretical pricing of a single European option with the Black-Scholes
//! model:
//! - Call: `S*N(d1) - K*exp(-r*T)*N(d2)`
//! - Put:  `K*exp(-r*T)*N(-d2) - S*N(-d1)`
//! - At or past expiry (`t <= 0`) the price collapses to intrinsic value

// Black-Scholes uses standard mathematical notation (s, k, t, r, sigma)
#![allow(clippy::many_single_char_names)]
#![allow(clippy::suboptimal_flops)]

use thiserror::Error;
use tracing::warn;

use crate::math::norm_cdf;
use crate::strategy::OptionType;

// ============================================================================
// Constants & Errors
// ============================================================================

/// Floor applied to volatility before it enters the `sigma * sqrt(t)`
/// denominator. Stress scenarios that crush volatility to zero or below
/// still price at this floor instead of erroring.
pub const MIN_VOLATILITY: f64 = 1e-4;

/// Errors from option valuation.
#[derive(Debug, Error)]
pub enum ValuationError {
    /// Invalid input parameters.
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Error message.
        message: String,
    },
}

// ============================================================================
// Black-Scholes
// ============================================================================

/// Black-Scholes d1 parameter.
fn d1(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> f64 {
    ((s / k).ln() + (r + 0.5 * sigma * sigma) * t) / (sigma * t.sqrt())
}

/// Exercise value of the option at the given spot.
fn intrinsic_value(option_type: OptionType, s: f64, k: f64) -> f64 {
    match option_type {
        OptionType::Call => (s - k).max(0.0),
        OptionType::Put => (k - s).max(0.0),
    }
}

/// Theoretical price of a European option.
///
/// # Arguments
///
/// * `option_type` - Call or put
/// * `s` - Spot price of the underlying
/// * `k` - Strike price
/// * `t` - Time to expiration in years; `t <= 0` returns intrinsic value
/// * `r` - Risk-free rate (annualized decimal)
/// * `sigma` - Volatility (annualized decimal), floored at [`MIN_VOLATILITY`]
///
/// # Errors
///
/// Returns [`ValuationError::InvalidInput`] if any input is non-finite or
/// if `s` or `k` is not positive.
pub fn theoretical_price(
    option_type: OptionType,
    s: f64,
    k: f64,
    t: f64,
    r: f64,
    sigma: f64,
) -> Result<f64, ValuationError> {
    validate_inputs(s, k, t, r, sigma)?;

    if t <= 0.0 {
        return Ok(intrinsic_value(option_type, s, k));
    }

    let sigma = if sigma < MIN_VOLATILITY {
        warn!(
            sigma,
            floor = MIN_VOLATILITY,
            "Volatility below floor, clamping"
        );
        MIN_VOLATILITY
    } else {
        sigma
    };

    let d1_val = d1(s, k, t, r, sigma);
    let d2_val = d1_val - sigma * t.sqrt();
    let discount = (-r * t).exp();

    let price = match option_type {
        OptionType::Call => s * norm_cdf(d1_val) - k * discount * norm_cdf(d2_val),
        OptionType::Put => k * discount * norm_cdf(-d2_val) - s * norm_cdf(-d1_val),
    };

    if !price.is_finite() {
        return Err(ValuationError::InvalidInput {
            message: format!("Price is not finite for s={s}, k={k}, t={t}, r={r}, sigma={sigma}"),
        });
    }

    // The approximation error in the CDF can leave a deep OTM price a hair
    // below zero.
    Ok(price.max(0.0))
}

/// Validate valuation parameters.
fn validate_inputs(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> Result<(), ValuationError> {
    if !s.is_finite() || s <= 0.0 {
        return Err(ValuationError::InvalidInput {
            message: format!("Spot price must be positive and finite, got: {s}"),
        });
    }
    if !k.is_finite() || k <= 0.0 {
        return Err(ValuationError::InvalidInput {
            message: format!("Strike price must be positive and finite, got: {k}"),
        });
    }
    if !t.is_finite() {
        return Err(ValuationError::InvalidInput {
            message: format!("Time to expiration must be finite, got: {t}"),
        });
    }
    if !r.is_finite() {
        return Err(ValuationError::InvalidInput {
            message: format!("Risk-free rate must be finite, got: {r}"),
        });
    }
    if !sigma.is_finite() {
        return Err(ValuationError::InvalidInput {
            message: format!("Volatility must be finite, got: {sigma}"),
        });
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
