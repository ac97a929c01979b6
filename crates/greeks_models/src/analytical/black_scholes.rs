//! Black-Scholes Greeks for European options.
//!
//! This module evaluates the closed-form sensitivities of a European call and
//! put on a non-dividend-paying underlying.
//!
//! ## Mathematical Formulas
//!
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//! - n(d₁) = e^(-d₁²/2) / √(2π)
//!
//! | Greek | Call                              | Put                                |
//! |-------|-----------------------------------|------------------------------------|
//! | Delta | N(d₁)                             | N(d₁) - 1                          |
//! | Gamma | n(d₁) / (S·σ·√T)                  | same as call                       |
//! | Vega  | S·n(d₁)·√T                        | same as call                       |
//! | Theta | -S·n(d₁)·σ/2·√T - r·K·e^(-rT)·N(d₂) | -S·n(d₁)·σ/2·√T + r·K·e^(-rT)·N(-d₂) |
//! | Rho   | K·T·e^(-rT)·N(d₂)                 | -K·T·e^(-rT)·N(-d₂)                |
//!
//! Theta is per year and its first term is multiplied by √T, not divided by
//! 2√T as in the textbook derivative. Values are reproduced exactly as the
//! formulas above state.

use num_traits::Float;

use greeks_core::math::{from_f64, norm_cdf, norm_pdf};
use greeks_core::types::PricingInputs;

use super::result::{GreeksResult, Intermediates, OptionSide};

/// Black-Scholes Greeks calculator.
///
/// A stateless view over validated [`PricingInputs`]. Every method is a pure
/// function of the inputs; d₁, d₂ and n(d₁) are recomputed on each call.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use greeks_core::types::PricingInputs;
/// use greeks_models::analytical::BlackScholesGreeks;
///
/// let inputs = PricingInputs::new(100.0_f64, 100.0, 1.0, 0.05, 0.2).unwrap();
/// let bs = BlackScholesGreeks::new(inputs);
///
/// assert!(bs.call_delta() > 0.5);
/// assert_eq!(bs.put_delta(), bs.call_delta() - 1.0);
/// assert!(bs.gamma() > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholesGreeks<T: Float> {
    inputs: PricingInputs<T>,
}

impl<T: Float> BlackScholesGreeks<T> {
    /// Creates a calculator over the given inputs.
    pub fn new(inputs: PricingInputs<T>) -> Self {
        Self { inputs }
    }

    /// Returns the pricing inputs.
    #[inline]
    pub fn inputs(&self) -> &PricingInputs<T> {
        &self.inputs
    }

    /// σ√T
    #[inline]
    fn vol_sqrt_t(&self) -> T {
        self.inputs.volatility() * self.inputs.expiry().sqrt()
    }

    /// e^(-rT)
    #[inline]
    fn discount(&self) -> T {
        (-self.inputs.rate() * self.inputs.expiry()).exp()
    }

    /// Computes d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T).
    ///
    /// At the money the log term vanishes and d₁ = (r + σ²/2)T / (σ√T).
    #[inline]
    pub fn d1(&self) -> T {
        let half: T = from_f64(0.5);
        let sigma = self.inputs.volatility();

        let log_moneyness = (self.inputs.spot() / self.inputs.strike()).ln();
        let drift = (self.inputs.rate() + half * (sigma * sigma)) * self.inputs.expiry();

        (log_moneyness + drift) / self.vol_sqrt_t()
    }

    /// Computes d₂ = d₁ - σ√T.
    #[inline]
    pub fn d2(&self) -> T {
        d2_from(self.d1(), self.vol_sqrt_t())
    }

    /// Computes n(d₁), the standard normal density at d₁.
    #[inline]
    pub fn nd1(&self) -> T {
        norm_pdf(self.d1())
    }

    /// Computes d₁, d₂ and n(d₁) in a single pass.
    pub fn intermediates(&self) -> Intermediates<T> {
        let d1 = self.d1();
        Intermediates {
            d1,
            d2: d2_from(d1, self.vol_sqrt_t()),
            nd1: norm_pdf(d1),
        }
    }

    /// Call Delta: N(d₁).
    #[inline]
    pub fn call_delta(&self) -> T {
        norm_cdf(self.d1())
    }

    /// Put Delta: N(d₁) - 1.
    #[inline]
    pub fn put_delta(&self) -> T {
        self.call_delta() - T::one()
    }

    /// Delta for the given side.
    pub fn delta(&self, side: OptionSide) -> T {
        match side {
            OptionSide::Call => self.call_delta(),
            OptionSide::Put => self.put_delta(),
        }
    }

    /// Gamma: n(d₁) / (S·σ·√T). Identical for calls and puts.
    #[inline]
    pub fn gamma(&self) -> T {
        self.gamma_from(self.nd1())
    }

    /// Vega: S·n(d₁)·√T. Identical for calls and puts.
    #[inline]
    pub fn vega(&self) -> T {
        self.vega_from(self.nd1())
    }

    /// Call Theta: -S·n(d₁)·σ/2·√T - r·K·e^(-rT)·N(d₂).
    #[inline]
    pub fn call_theta(&self) -> T {
        self.theta(OptionSide::Call)
    }

    /// Put Theta: -S·n(d₁)·σ/2·√T + r·K·e^(-rT)·N(-d₂).
    #[inline]
    pub fn put_theta(&self) -> T {
        self.theta(OptionSide::Put)
    }

    /// Theta for the given side.
    pub fn theta(&self, side: OptionSide) -> T {
        self.theta_from(&self.intermediates(), side)
    }

    /// Call Rho: K·T·e^(-rT)·N(d₂).
    #[inline]
    pub fn call_rho(&self) -> T {
        self.rho(OptionSide::Call)
    }

    /// Put Rho: -K·T·e^(-rT)·N(-d₂).
    #[inline]
    pub fn put_rho(&self) -> T {
        self.rho(OptionSide::Put)
    }

    /// Rho for the given side.
    pub fn rho(&self, side: OptionSide) -> T {
        self.rho_from(self.d2(), side)
    }

    /// Evaluates all ten Greeks.
    ///
    /// d₁, d₂ and n(d₁) are computed once and shared; every value is
    /// bit-identical to the corresponding single-Greek method.
    pub fn evaluate(&self) -> GreeksResult<T> {
        let intermediates = self.intermediates();
        let call_delta = norm_cdf(intermediates.d1);
        let gamma = self.gamma_from(intermediates.nd1);
        let vega = self.vega_from(intermediates.nd1);

        GreeksResult {
            call_delta,
            put_delta: call_delta - T::one(),
            call_gamma: gamma,
            put_gamma: gamma,
            call_vega: vega,
            put_vega: vega,
            call_theta: self.theta_from(&intermediates, OptionSide::Call),
            put_theta: self.theta_from(&intermediates, OptionSide::Put),
            call_rho: self.rho_from(intermediates.d2, OptionSide::Call),
            put_rho: self.rho_from(intermediates.d2, OptionSide::Put),
        }
    }

    fn gamma_from(&self, nd1: T) -> T {
        nd1 / (self.inputs.spot() * self.inputs.volatility() * self.inputs.expiry().sqrt())
    }

    fn vega_from(&self, nd1: T) -> T {
        self.inputs.spot() * nd1 * self.inputs.expiry().sqrt()
    }

    fn theta_from(&self, intermediates: &Intermediates<T>, side: OptionSide) -> T {
        let two: T = from_f64(2.0);
        let spot = self.inputs.spot();
        let rate = self.inputs.rate();
        let strike = self.inputs.strike();

        // Common term: -S·n(d₁)·σ/2·√T
        let decay =
            -spot * intermediates.nd1 * self.inputs.volatility() / two * self.inputs.expiry().sqrt();

        match side {
            OptionSide::Call => decay - rate * strike * self.discount() * norm_cdf(intermediates.d2),
            OptionSide::Put => decay + rate * strike * self.discount() * norm_cdf(-intermediates.d2),
        }
    }

    fn rho_from(&self, d2: T, side: OptionSide) -> T {
        let strike = self.inputs.strike();
        let expiry = self.inputs.expiry();

        match side {
            OptionSide::Call => strike * expiry * self.discount() * norm_cdf(d2),
            OptionSide::Put => -strike * expiry * self.discount() * norm_cdf(-d2),
        }
    }
}

#[inline]
fn d2_from<T: Float>(d1: T, vol_sqrt_t: T) -> T {
    d1 - vol_sqrt_t
}

/// Evaluates all ten Greeks for the given inputs.
///
/// Shorthand for `BlackScholesGreeks::new(*inputs).evaluate()`.
///
/// # Examples
/// ```
/// use greeks_core::types::PricingInputs;
/// use greeks_models::analytical::evaluate;
///
/// let result = evaluate(&PricingInputs::<f64>::reference());
/// assert!(result.call_rho > 0.0);
/// assert!(result.put_rho < 0.0);
/// ```
pub fn evaluate<T: Float>(inputs: &PricingInputs<T>) -> GreeksResult<T> {
    BlackScholesGreeks::new(*inputs).evaluate()
}
