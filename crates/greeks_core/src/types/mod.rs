//! Core types for the Greeks Calculator.
//!
//! This module provides:
//! - `PricingInputs`: The five validated Black-Scholes market parameters
//! - `PricingError`: Errors raised when inputs violate the model's domain
//! - `InputField`: Identifies which parameter was rejected

pub mod error;
pub mod inputs;

pub use error::{InputField, PricingError, PricingResult};
pub use inputs::{
    PricingInputs, REFERENCE_EXPIRY, REFERENCE_RATE, REFERENCE_SPOT, REFERENCE_STRIKE,
    REFERENCE_VOLATILITY,
};
