//! # greeks_core: Foundation for the Greeks Calculator
//!
//! ## Layer 1 (Foundation) Role
//!
//! greeks_core is the bottom layer of the workspace, providing:
//! - Validated market parameters: `PricingInputs` (`types::inputs`)
//! - Error types: `PricingError`, `InputField` (`types::error`)
//! - Standard normal distribution: `norm_cdf`, `norm_pdf` (`math::distributions`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other greeks_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use greeks_core::math::distributions::{norm_cdf, norm_pdf};
//! use greeks_core::types::PricingInputs;
//!
//! let inputs = PricingInputs::new(100.0_f64, 100.0, 1.0, 0.05, 0.2).unwrap();
//! assert_eq!(inputs.spot(), 100.0);
//!
//! // Invalid inputs are rejected at construction
//! assert!(PricingInputs::new(100.0_f64, 100.0, 0.0, 0.05, 0.2).is_err());
//!
//! assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-15);
//! assert!((norm_pdf(0.0_f64) - 0.398_942_280_401_432_7).abs() < 1e-15);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `PricingInputs` and `InputField`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
