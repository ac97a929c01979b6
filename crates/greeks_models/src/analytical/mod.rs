//! Analytical Greeks for European options.
//!
//! This module provides the closed-form Black-Scholes sensitivities:
//! - `BlackScholesGreeks`: stateless calculator over validated `PricingInputs`
//! - `GreeksResult`: the ten call/put values of one evaluation
//! - `Intermediates`: d1, d2 and n(d1) of one evaluation

pub mod black_scholes;
pub mod result;

pub use black_scholes::{evaluate, BlackScholesGreeks};
pub use result::{Greek, GreeksResult, Intermediates, OptionSide};
