//! Mathematical building blocks.
//!
//! - `distributions`: Standard normal CDF and PDF, generic over `T: Float`
//! - [`from_f64`]: Conversion of `f64` literals into a generic float type

pub mod distributions;

pub use distributions::{norm_cdf, norm_pdf};

use num_traits::Float;

/// Converts an `f64` constant into `T`.
///
/// Every `Float` implementation in practical use (`f32`, `f64`) can represent
/// a cast `f64`; any type that cannot yields NaN rather than panicking.
///
/// # Examples
/// ```
/// use greeks_core::math::from_f64;
///
/// let half: f32 = from_f64(0.5);
/// assert_eq!(half, 0.5_f32);
/// ```
#[inline]
pub fn from_f64<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}
