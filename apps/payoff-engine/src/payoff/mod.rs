//! Payoff Curve Generation
//!
//! Builds expiry and scenario payoff curves across a price grid and derives
//! summary statistics:
//! - Max profit / max loss over the expiry curve
//! - Breakevens by linear interpolation between grid points
//! - Net premium of the strategy

mod curve;
mod error;
mod generator;
mod grid;

pub use curve::{PayoffPoint, PayoffResult};
pub use error::PayoffError;
pub use generator::PayoffEngine;
pub use grid::GridConfig;
