//! Check command implementation
//!
//! Validates the effective configuration and prints it.

use std::io::Write;

use greeks_core::types::{InputField, PricingInputs};
use tracing::{info, warn};

use crate::config::CliConfig;
use crate::Result;

/// Run the check command
///
/// Fails with the pricing error if the configured inputs are invalid.
pub fn run(config: &CliConfig, out: &mut impl Write) -> Result<()> {
    info!("Checking configuration...");

    writeln!(out, "greeks {}", crate::VERSION)?;
    writeln!(out, "log_level   {}", config.log_level)?;
    writeln!(out, "format      {}", config.format)?;
    writeln!(out, "precision   {}", config.precision)?;

    let resolved = config.pricing_inputs();
    let reference = PricingInputs::<f64>::reference();
    for field in InputField::ALL {
        let source = if config.inputs.value(field).is_some() {
            "configured"
        } else {
            "reference"
        };
        let value = match &resolved {
            Ok(inputs) => inputs.get(field),
            Err(_) => config.inputs.value(field).unwrap_or(reference.get(field)),
        };
        writeln!(out, "{:<12}{} ({})", field.name(), value, source)?;
    }

    match resolved {
        Ok(_) => {
            writeln!(out, "status      ok")?;
            info!("Configuration is valid");
            Ok(())
        }
        Err(e) => {
            writeln!(out, "status      invalid")?;
            warn!(field = %e.field(), "Configured inputs are invalid");
            Err(e.into())
        }
    }
}
