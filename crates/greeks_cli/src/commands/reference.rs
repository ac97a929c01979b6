//! Reference command implementation
//!
//! Evaluates the Greeks for the fixed reference inputs
//! (S0 = 0.80, K = 0.81, T = 0.5833, r = 0.03, sigma = 0.15), ignoring any
//! configured input overrides.

use std::io::Write;

use greeks_core::types::PricingInputs;
use tracing::info;

use crate::config::CliConfig;
use crate::Result;

/// Run the reference command
pub fn run(config: &CliConfig, intermediates: bool, out: &mut impl Write) -> Result<()> {
    info!("Evaluating reference scenario");
    super::evaluate::write_report(config, PricingInputs::reference(), intermediates, out)
}
