//! Greeks calculation result types.
//!
//! Provides [`GreeksResult<T>`], the ten call/put sensitivities of a single
//! evaluation, addressable by [`Greek`] and [`OptionSide`].

use std::fmt;

use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Option side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionSide {
    /// European call
    Call,
    /// European put
    Put,
}

impl OptionSide {
    /// Both sides in column order.
    pub const ALL: [OptionSide; 2] = [OptionSide::Call, OptionSide::Put];

    /// Returns the column label ("Call" or "Put").
    pub fn label(&self) -> &'static str {
        match self {
            OptionSide::Call => "Call",
            OptionSide::Put => "Put",
        }
    }
}

impl fmt::Display for OptionSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A first- or second-order sensitivity of the option value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Greek {
    /// ∂V/∂S: sensitivity to the spot price
    Delta,
    /// ∂V/∂t: time decay
    Theta,
    /// ∂²V/∂S²: sensitivity of Delta to the spot price
    Gamma,
    /// ∂V/∂σ: sensitivity to volatility
    Vega,
    /// ∂V/∂r: sensitivity to the risk-free rate
    Rho,
}

impl Greek {
    /// Row order used when presenting a result.
    pub const DISPLAY_ORDER: [Greek; 5] = [
        Greek::Delta,
        Greek::Theta,
        Greek::Gamma,
        Greek::Vega,
        Greek::Rho,
    ];

    /// Returns the row label.
    pub fn label(&self) -> &'static str {
        match self {
            Greek::Delta => "Delta",
            Greek::Theta => "Theta",
            Greek::Gamma => "Gamma",
            Greek::Vega => "Vega",
            Greek::Rho => "Rho",
        }
    }

    /// Returns true if call and put share the same value under Black-Scholes.
    #[inline]
    pub fn is_side_independent(&self) -> bool {
        matches!(self, Greek::Gamma | Greek::Vega)
    }
}

impl fmt::Display for Greek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The ten Greeks of one evaluation: five sensitivities for each side.
///
/// Gamma and Vega are identical for calls and puts; both copies are kept so
/// the result can be read uniformly by `(Greek, OptionSide)`.
///
/// # Examples
///
/// ```rust
/// use greeks_core::types::PricingInputs;
/// use greeks_models::analytical::{evaluate, Greek, OptionSide};
///
/// let result = evaluate(&PricingInputs::<f64>::reference());
/// assert_eq!(result.get(Greek::Delta, OptionSide::Put), result.put_delta);
/// assert_eq!(result.call_vega, result.put_vega);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GreeksResult<T: Float> {
    /// Call Delta: N(d₁)
    pub call_delta: T,
    /// Put Delta: N(d₁) - 1
    pub put_delta: T,
    /// Call Gamma
    pub call_gamma: T,
    /// Put Gamma (equal to call Gamma)
    pub put_gamma: T,
    /// Call Vega
    pub call_vega: T,
    /// Put Vega (equal to call Vega)
    pub put_vega: T,
    /// Call Theta (per year)
    pub call_theta: T,
    /// Put Theta (per year)
    pub put_theta: T,
    /// Call Rho
    pub call_rho: T,
    /// Put Rho
    pub put_rho: T,
}

impl<T: Float> GreeksResult<T> {
    /// Returns the value of `greek` for `side`.
    pub fn get(&self, greek: Greek, side: OptionSide) -> T {
        match (greek, side) {
            (Greek::Delta, OptionSide::Call) => self.call_delta,
            (Greek::Delta, OptionSide::Put) => self.put_delta,
            (Greek::Gamma, OptionSide::Call) => self.call_gamma,
            (Greek::Gamma, OptionSide::Put) => self.put_gamma,
            (Greek::Vega, OptionSide::Call) => self.call_vega,
            (Greek::Vega, OptionSide::Put) => self.put_vega,
            (Greek::Theta, OptionSide::Call) => self.call_theta,
            (Greek::Theta, OptionSide::Put) => self.put_theta,
            (Greek::Rho, OptionSide::Call) => self.call_rho,
            (Greek::Rho, OptionSide::Put) => self.put_rho,
        }
    }

    /// Returns `(greek, call, put)` triples in display order.
    pub fn rows(&self) -> impl Iterator<Item = (Greek, T, T)> + '_ {
        Greek::DISPLAY_ORDER.into_iter().map(move |greek| {
            (
                greek,
                self.get(greek, OptionSide::Call),
                self.get(greek, OptionSide::Put),
            )
        })
    }

    /// Returns true if every value is finite.
    pub fn is_finite(&self) -> bool {
        self.rows().all(|(_, call, put)| call.is_finite() && put.is_finite())
    }
}

/// Standardised intermediate variables of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Intermediates<T: Float> {
    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    pub d1: T,
    /// d₂ = d₁ - σ√T
    pub d2: T,
    /// n(d₁): standard normal density at d₁
    pub nd1: T,
}
