//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: Cumulative distribution function N(x)
//! - `norm_pdf`: Probability density function n(x)
//!
//! Both are generic over `T: Float` so the same formulas serve `f64` and `f32`.

use num_traits::Float;

use super::from_f64;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// sqrt(2 * pi), as used by the Hart tail expansion.
const SQRT_2PI: f64 = 2.506_628_274_631;

/// Beyond this |x| the CDF is 0 or 1 to double precision.
const TAIL_CUTOFF: f64 = 37.0;

/// Switch point between the rational and the continued-fraction branch (10/√2).
const RATIONAL_LIMIT: f64 = 7.071_067_811_865_47;

/// Numerator coefficients of Hart's rational approximation, highest degree first.
const HART_NUMERATOR: [f64; 7] = [
    3.526_249_659_989_11e-2,
    0.700_383_064_443_688,
    6.373_962_203_531_65,
    33.912_866_078_383,
    112.079_291_497_871,
    221.213_596_169_931,
    220.206_867_912_376,
];

/// Denominator coefficients of Hart's rational approximation, highest degree first.
const HART_DENOMINATOR: [f64; 8] = [
    8.838_834_764_831_84e-2,
    1.755_667_163_182_64,
    16.064_177_579_207,
    86.780_732_202_946_1,
    296.564_248_779_674,
    637.333_633_378_831,
    793.826_512_519_948,
    440.413_735_824_752,
];

/// Evaluates a polynomial with Horner's method, coefficients highest degree first.
#[inline]
fn horner<T: Float>(coefficients: &[f64], x: T) -> T {
    coefficients
        .iter()
        .fold(T::zero(), |acc, &c| acc * x + from_f64(c))
}

/// Lower tail probability N(-|x|).
///
/// Hart (1968) algorithm 5666 as presented by West (2005): a rational
/// function times `exp(-x²/2)` for |x| < 7.07, a continued fraction beyond.
#[inline]
fn lower_tail<T: Float>(abs_x: T) -> T {
    if abs_x > from_f64(TAIL_CUTOFF) {
        return T::zero();
    }

    let exponential = (-abs_x * abs_x / from_f64(2.0)).exp();

    if abs_x < from_f64(RATIONAL_LIMIT) {
        exponential * horner(&HART_NUMERATOR, abs_x) / horner(&HART_DENOMINATOR, abs_x)
    } else {
        let mut fraction = abs_x + from_f64(0.65);
        for k in [4.0, 3.0, 2.0, 1.0] {
            fraction = abs_x + from_f64::<T>(k) / fraction;
        }
        exponential / fraction / from_f64(SQRT_2PI)
    }
}

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1).
///
/// # Accuracy
/// Absolute error below 1e-13 for `f64`. Returns exactly 0 for x < -37 and
/// exactly 1 for x > 37. NaN propagates.
///
/// # Examples
/// ```
/// use greeks_core::math::distributions::norm_cdf;
///
/// assert_eq!(norm_cdf(0.0_f64), 0.5);
/// assert!((norm_cdf(1.0_f64) - 0.841_344_746_068_542_9).abs() < 1e-12);
/// assert_eq!(norm_cdf(40.0_f64), 1.0);
/// assert_eq!(norm_cdf(f64::NEG_INFINITY), 0.0);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let tail = lower_tail(x.abs());
    if x > T::zero() {
        T::one() - tail
    } else {
        tail
    }
}

/// Standard normal probability density function.
///
/// φ(x) = (1 / sqrt(2π)) * exp(-x² / 2)
///
/// # Examples
/// ```
/// use greeks_core::math::distributions::norm_pdf;
///
/// // φ(1) = exp(-0.5) / sqrt(2π) ≈ 0.2420
/// assert!((norm_pdf(1.0_f64) - 0.241_970_724_519_143_4).abs() < 1e-15);
/// assert_eq!(norm_pdf(f64::INFINITY), 0.0);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    let half: T = from_f64(0.5);
    from_f64::<T>(FRAC_1_SQRT_2PI) * (-half * x * x).exp()
}
