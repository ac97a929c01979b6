//! # Greeks Models (L2: Business Logic)
//!
//! Black-Scholes sensitivities for European calls and puts on a
//! non-dividend-paying underlying.
//!
//! This crate provides:
//! - The Greeks Calculator: d1, d2, n(d1) and Delta, Gamma, Vega, Theta, Rho
//!   for both sides (`analytical`)
//! - The result record keyed by Greek and option side (`analytical::result`)
//! - Two-column table rendering of a result (`presentation`)
//!
//! ## Design Principles
//!
//! - **Pure functions**: Every evaluation is deterministic and side-effect free
//! - **Validate once**: Inputs are checked when `PricingInputs` is built, so
//!   evaluation itself cannot fail
//! - **Generic over `T: Float`**: `f64` for production, `f32` supported
//!
//! ## Example
//!
//! ```rust
//! use greeks_core::types::PricingInputs;
//! use greeks_models::analytical::{evaluate, Greek, OptionSide};
//! use greeks_models::presentation::GreeksTable;
//!
//! let inputs = PricingInputs::new(0.80_f64, 0.81, 0.5833, 0.03, 0.15).unwrap();
//! let greeks = evaluate(&inputs);
//!
//! assert_eq!(greeks.put_delta, greeks.call_delta - 1.0);
//! assert_eq!(greeks.get(Greek::Gamma, OptionSide::Call), greeks.call_gamma);
//!
//! let table = GreeksTable::new(&greeks).to_string();
//! assert!(table.starts_with("         Call        Put"));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod presentation;
