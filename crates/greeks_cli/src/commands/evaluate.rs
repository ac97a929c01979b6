//! Evaluate command implementation
//!
//! Evaluates the Greeks for the configured pricing inputs.

use std::io::Write;

use greeks_core::types::PricingInputs;
use greeks_models::analytical::BlackScholesGreeks;
use tracing::{debug, info};

use crate::config::CliConfig;
use crate::output::Report;
use crate::Result;

/// Run the evaluate command
pub fn run(config: &CliConfig, intermediates: bool, out: &mut impl Write) -> Result<()> {
    let inputs = config.pricing_inputs()?;
    write_report(config, inputs, intermediates, out)
}

/// Evaluates `inputs` and writes the report in the configured format.
pub(crate) fn write_report(
    config: &CliConfig,
    inputs: PricingInputs<f64>,
    intermediates: bool,
    out: &mut impl Write,
) -> Result<()> {
    info!(
        spot = inputs.spot(),
        strike = inputs.strike(),
        expiry = inputs.expiry(),
        rate = inputs.rate(),
        volatility = inputs.volatility(),
        "Evaluating Greeks"
    );

    let calculator = BlackScholesGreeks::new(inputs);
    let report = Report {
        inputs,
        greeks: calculator.evaluate(),
        intermediates: intermediates.then(|| calculator.intermediates()),
    };

    if let Some(im) = &report.intermediates {
        debug!(d1 = im.d1, d2 = im.d2, nd1 = im.nd1, "Intermediates");
    }

    let rendered = report.render(config.format, config.precision)?;
    writeln!(out, "{}", rendered)?;

    info!(format = %config.format, "Evaluation complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{InputsSection, OutputFormat};
    use crate::CliError;
    use greeks_core::types::InputField;

    #[test]
    fn test_evaluate_uses_configured_inputs() {
        let config = CliConfig {
            format: OutputFormat::Csv,
            precision: 2,
            inputs: InputsSection {
                spot: Some(100.0),
                strike: Some(100.0),
                expiry: Some(1.0),
                rate: Some(0.0),
                volatility: Some(0.2),
            },
            ..CliConfig::default()
        };

        let mut out = Vec::new();
        run(&config, false, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        // d1 = 0.1 at the money with zero rate
        assert!(text.starts_with("greek,call,put\ndelta,0.54,-0.46\n"));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_evaluate_rejects_invalid_inputs() {
        let config = CliConfig {
            inputs: InputsSection {
                volatility: Some(0.0),
                ..InputsSection::default()
            },
            ..CliConfig::default()
        };

        let mut out = Vec::new();
        let err = run(&config, false, &mut out).unwrap_err();
        match err {
            CliError::Pricing(e) => assert_eq!(e.field(), InputField::Volatility),
            other => panic!("Expected pricing error, got {:?}", other),
        }
        assert!(out.is_empty());
    }
}
