//! # Greeks CLI (L3: Service)
//!
//! Command-line front end for the Black-Scholes Greeks calculator.
//!
//! # Commands
//!
//! - `greeks evaluate` - Evaluate the Greeks for configured or given inputs
//! - `greeks reference` - Evaluate the Greeks for the reference inputs
//! - `greeks check` - Validate configuration and print the effective settings
//!
//! Configuration is layered: defaults, then a TOML file, then `GREEKS_*`
//! environment variables, then command-line arguments (see [`config`]).

pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use error::{CliError, Result};

/// Crate version reported by `greeks --version` and `greeks check`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
