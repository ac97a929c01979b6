//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from constructing pricing inputs
//! - `InputField`: The market parameter an error refers to

use std::fmt;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Market parameter of a Black-Scholes evaluation.
///
/// Used to tag [`PricingError::InvalidInput`] with the offending field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum InputField {
    /// Current price of the underlying (S0)
    Spot,
    /// Contract strike price (K)
    Strike,
    /// Time to expiry in years (T)
    Expiry,
    /// Continuously-compounded risk-free rate (r)
    Rate,
    /// Annualised volatility of log-returns (σ)
    Volatility,
}

impl InputField {
    /// All fields in constructor argument order.
    pub const ALL: [InputField; 5] = [
        InputField::Spot,
        InputField::Strike,
        InputField::Expiry,
        InputField::Rate,
        InputField::Volatility,
    ];

    /// Returns the lowercase field name.
    pub fn name(&self) -> &'static str {
        match self {
            InputField::Spot => "spot",
            InputField::Strike => "strike",
            InputField::Expiry => "expiry",
            InputField::Rate => "rate",
            InputField::Volatility => "volatility",
        }
    }

    /// Returns the constraint the field must satisfy.
    pub fn requirement(&self) -> &'static str {
        match self {
            InputField::Rate => "must be finite",
            _ => "must be positive and finite",
        }
    }

    /// Returns true if the field must be strictly positive.
    #[inline]
    pub fn requires_positive(&self) -> bool {
        !matches!(self, InputField::Rate)
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Pricing errors.
///
/// The Black-Scholes formulas take `ln(S0/K)` and divide by `σ·√T`, so a
/// non-positive spot, strike, expiry or volatility has no meaningful result.
/// Such inputs are rejected with `InvalidInput` when
/// [`PricingInputs`](crate::types::PricingInputs) is constructed, instead of
/// surfacing later as NaN or infinity.
///
/// # Examples
/// ```
/// use greeks_core::types::{InputField, PricingError};
///
/// let err = PricingError::InvalidInput { field: InputField::Expiry, value: 0.0 };
/// assert_eq!(
///     format!("{}", err),
///     "Invalid input: expiry = 0 (must be positive and finite)"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PricingError {
    /// A market parameter is outside the domain of the model.
    #[error("Invalid input: {field} = {value} ({})", .field.requirement())]
    InvalidInput {
        /// The rejected field
        field: InputField,
        /// The rejected value
        value: f64,
    },
}

impl PricingError {
    /// Creates an `InvalidInput` error.
    pub fn invalid_input(field: InputField, value: f64) -> Self {
        Self::InvalidInput { field, value }
    }

    /// Returns the field the error refers to.
    pub fn field(&self) -> InputField {
        match self {
            PricingError::InvalidInput { field, .. } => *field,
        }
    }
}

/// Result alias for operations that can fail with [`PricingError`].
pub type PricingResult<T> = Result<T, PricingError>;
