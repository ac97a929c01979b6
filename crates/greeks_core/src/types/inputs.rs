//! Black-Scholes market parameters.
//!
//! [`PricingInputs`] bundles spot, strike, time to expiry, risk-free rate and
//! volatility. Construction validates every field, so any value of this type
//! is inside the domain of the closed-form formulas.

use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::{InputField, PricingError, PricingResult};
use crate::math::from_f64;

/// Reference spot price (S0).
pub const REFERENCE_SPOT: f64 = 0.80;
/// Reference strike price (K).
pub const REFERENCE_STRIKE: f64 = 0.81;
/// Reference time to expiry in years (T).
pub const REFERENCE_EXPIRY: f64 = 0.5833;
/// Reference risk-free rate (r).
pub const REFERENCE_RATE: f64 = 0.03;
/// Reference volatility (σ).
pub const REFERENCE_VOLATILITY: f64 = 0.15;

/// Validated Black-Scholes market parameters.
///
/// # Invariants
/// - `spot > 0`, `strike > 0`, `expiry > 0`, `volatility > 0`
/// - every field is finite (the rate may be zero or negative)
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use greeks_core::types::{InputField, PricingError, PricingInputs};
///
/// let inputs = PricingInputs::new(0.80_f64, 0.81, 0.5833, 0.03, 0.15).unwrap();
/// assert_eq!(inputs.strike(), 0.81);
///
/// let err = PricingInputs::new(0.80_f64, 0.81, 0.5833, 0.03, 0.0).unwrap_err();
/// assert_eq!(err.field(), InputField::Volatility);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawPricingInputs<T>",
        bound(
            serialize = "T: Serialize",
            deserialize = "T: Float + Deserialize<'de>"
        )
    )
)]
pub struct PricingInputs<T: Float> {
    spot: T,
    strike: T,
    expiry: T,
    rate: T,
    volatility: T,
}

impl<T: Float> PricingInputs<T> {
    /// Creates validated pricing inputs.
    ///
    /// # Arguments
    /// * `spot` - Current price of the underlying (S0)
    /// * `strike` - Strike price (K)
    /// * `expiry` - Time to expiry in years (T)
    /// * `rate` - Continuously-compounded risk-free rate (r)
    /// * `volatility` - Annualised volatility (σ)
    ///
    /// # Errors
    /// `PricingError::InvalidInput` for the first field (in argument order)
    /// that is non-finite, or non-positive where positivity is required.
    pub fn new(spot: T, strike: T, expiry: T, rate: T, volatility: T) -> PricingResult<Self> {
        validate(InputField::Spot, spot)?;
        validate(InputField::Strike, strike)?;
        validate(InputField::Expiry, expiry)?;
        validate(InputField::Rate, rate)?;
        validate(InputField::Volatility, volatility)?;

        Ok(Self {
            spot,
            strike,
            expiry,
            rate,
            volatility,
        })
    }

    /// Returns the reference inputs: S0 = 0.80, K = 0.81, T = 0.5833,
    /// r = 0.03, σ = 0.15.
    pub fn reference() -> Self {
        Self {
            spot: from_f64(REFERENCE_SPOT),
            strike: from_f64(REFERENCE_STRIKE),
            expiry: from_f64(REFERENCE_EXPIRY),
            rate: from_f64(REFERENCE_RATE),
            volatility: from_f64(REFERENCE_VOLATILITY),
        }
    }

    /// Returns the spot price (S0).
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the strike price (K).
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Returns the time to expiry in years (T).
    #[inline]
    pub fn expiry(&self) -> T {
        self.expiry
    }

    /// Returns the risk-free rate (r).
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the volatility (σ).
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Returns the value of the given field.
    pub fn get(&self, field: InputField) -> T {
        match field {
            InputField::Spot => self.spot,
            InputField::Strike => self.strike,
            InputField::Expiry => self.expiry,
            InputField::Rate => self.rate,
            InputField::Volatility => self.volatility,
        }
    }
}

fn validate<T: Float>(field: InputField, value: T) -> PricingResult<()> {
    let in_domain = if field.requires_positive() {
        value.is_finite() && value > T::zero()
    } else {
        value.is_finite()
    };

    if in_domain {
        Ok(())
    } else {
        Err(PricingError::invalid_input(
            field,
            value.to_f64().unwrap_or(f64::NAN),
        ))
    }
}

/// Unvalidated wire form of [`PricingInputs`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawPricingInputs<T> {
    spot: T,
    strike: T,
    expiry: T,
    rate: T,
    volatility: T,
}

#[cfg(feature = "serde")]
impl<T: Float> TryFrom<RawPricingInputs<T>> for PricingInputs<T> {
    type Error = PricingError;

    fn try_from(raw: RawPricingInputs<T>) -> Result<Self, Self::Error> {
        PricingInputs::new(raw.spot, raw.strike, raw.expiry, raw.rate, raw.volatility)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expect_invalid(result: PricingResult<PricingInputs<f64>>, field: InputField) {
        match result {
            Err(PricingError::InvalidInput { field: got, .. }) => assert_eq!(got, field),
            Ok(inputs) => panic!("Expected InvalidInput for {}, got {:?}", field, inputs),
        }
    }

    #[test]
    fn test_new_valid_parameters() {
        let inputs = PricingInputs::new(100.0_f64, 105.0, 0.5, 0.05, 0.2).unwrap();
        assert_eq!(inputs.spot(), 100.0);
        assert_eq!(inputs.strike(), 105.0);
        assert_eq!(inputs.expiry(), 0.5);
        assert_eq!(inputs.rate(), 0.05);
        assert_eq!(inputs.volatility(), 0.2);
    }

    #[test]
    fn test_negative_and_zero_rate_allowed() {
        assert!(PricingInputs::new(100.0_f64, 100.0, 1.0, -0.02, 0.2).is_ok());
        assert!(PricingInputs::new(100.0_f64, 100.0, 1.0, 0.0, 0.2).is_ok());
    }

    #[test]
    fn test_non_positive_fields_rejected() {
        expect_invalid(PricingInputs::new(0.0, 100.0, 1.0, 0.05, 0.2), InputField::Spot);
        expect_invalid(PricingInputs::new(-1.0, 100.0, 1.0, 0.05, 0.2), InputField::Spot);
        expect_invalid(PricingInputs::new(100.0, 0.0, 1.0, 0.05, 0.2), InputField::Strike);
        expect_invalid(PricingInputs::new(100.0, 100.0, 0.0, 0.05, 0.2), InputField::Expiry);
        expect_invalid(PricingInputs::new(100.0, 100.0, -0.5, 0.05, 0.2), InputField::Expiry);
        expect_invalid(PricingInputs::new(100.0, 100.0, 1.0, 0.05, 0.0), InputField::Volatility);
        expect_invalid(PricingInputs::new(100.0, 100.0, 1.0, 0.05, -0.2), InputField::Volatility);
    }

    #[test]
    fn test_non_finite_fields_rejected() {
        expect_invalid(PricingInputs::new(f64::NAN, 100.0, 1.0, 0.05, 0.2), InputField::Spot);
        expect_invalid(
            PricingInputs::new(100.0, f64::INFINITY, 1.0, 0.05, 0.2),
            InputField::Strike,
        );
        expect_invalid(PricingInputs::new(100.0, 100.0, 1.0, f64::NAN, 0.2), InputField::Rate);
        expect_invalid(
            PricingInputs::new(100.0, 100.0, 1.0, f64::NEG_INFINITY, 0.2),
            InputField::Rate,
        );
    }

    #[test]
    fn test_first_invalid_field_reported() {
        let err = PricingInputs::new(-1.0_f64, -1.0, 0.0, 0.05, 0.0).unwrap_err();
        assert_eq!(err, PricingError::invalid_input(InputField::Spot, -1.0));
    }

    #[test]
    fn test_rejected_value_recorded() {
        let err = PricingInputs::new(100.0_f64, 100.0, 1.0, 0.05, -0.3).unwrap_err();
        match err {
            PricingError::InvalidInput { value, .. } => assert_eq!(value, -0.3),
        }
    }

    #[test]
    fn test_tiny_volatility_accepted() {
        assert!(PricingInputs::new(100.0_f64, 100.0, 1.0, 0.05, 1e-12).is_ok());
    }

    #[test]
    fn test_reference_inputs() {
        let inputs = PricingInputs::<f64>::reference();
        assert_eq!(inputs.spot(), 0.80);
        assert_eq!(inputs.strike(), 0.81);
        assert_eq!(inputs.expiry(), 0.5833);
        assert_eq!(inputs.rate(), 0.03);
        assert_eq!(inputs.volatility(), 0.15);
        assert_eq!(
            PricingInputs::new(0.80, 0.81, 0.5833, 0.03, 0.15).unwrap(),
            inputs
        );
    }

    #[test]
    fn test_get_by_field() {
        let inputs = PricingInputs::<f64>::reference();
        assert_eq!(inputs.get(InputField::Spot), inputs.spot());
        assert_eq!(inputs.get(InputField::Strike), inputs.strike());
        assert_eq!(inputs.get(InputField::Expiry), inputs.expiry());
        assert_eq!(inputs.get(InputField::Rate), inputs.rate());
        assert_eq!(inputs.get(InputField::Volatility), inputs.volatility());
    }

    #[test]
    fn test_f32_compatibility() {
        let inputs = PricingInputs::<f32>::reference();
        assert_eq!(inputs.spot(), 0.80_f32);
        assert!(PricingInputs::new(1.0_f32, 1.0, 0.0, 0.0, 0.1).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_validates() {
        let ok: PricingInputs<f64> = serde_json::from_str(
            r#"{"spot":0.8,"strike":0.81,"expiry":0.5833,"rate":0.03,"volatility":0.15}"#,
        )
        .unwrap();
        assert_eq!(ok, PricingInputs::reference());

        let err = serde_json::from_str::<PricingInputs<f64>>(
            r#"{"spot":0.8,"strike":0.81,"expiry":0.0,"rate":0.03,"volatility":0.15}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("expiry"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize_field_names() {
        let json = serde_json::to_value(PricingInputs::<f64>::reference()).unwrap();
        assert_eq!(json["spot"], 0.8);
        assert_eq!(json["volatility"], 0.15);
    }
}
