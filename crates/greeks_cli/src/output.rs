//! Rendering of evaluation reports as table, JSON or CSV.

use greeks_core::types::PricingInputs;
use greeks_models::analytical::{GreeksResult, Intermediates};
use greeks_models::presentation::{GreeksTable, LABEL_WIDTH};
use serde::Serialize;
use tracing::warn;

use crate::config::OutputFormat;
use crate::Result;

/// One evaluation as printed by the CLI.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Report {
    pub inputs: PricingInputs<f64>,
    pub greeks: GreeksResult<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intermediates: Option<Intermediates<f64>>,
}

impl Report {
    /// Renders the report in `format`.
    ///
    /// `precision` applies to table and CSV output; JSON carries full values.
    pub fn render(&self, format: OutputFormat, precision: usize) -> Result<String> {
        match format {
            OutputFormat::Table => Ok(self.render_table(precision)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Csv => self.render_csv(precision),
        }
    }

    fn render_table(&self, precision: usize) -> String {
        let mut out = GreeksTable::new(&self.greeks)
            .with_precision(precision)
            .to_string();

        if let Some(im) = &self.intermediates {
            out.push('\n');
            for (label, value) in [("d1", im.d1), ("d2", im.d2), ("n(d1)", im.nd1)] {
                out.push_str(&format!(
                    "\n{:<width$}{:.*}",
                    label,
                    precision,
                    value,
                    width = LABEL_WIDTH
                ));
            }
        }

        out
    }

    fn render_csv(&self, precision: usize) -> Result<String> {
        if self.intermediates.is_some() {
            warn!("Intermediates are not included in CSV output");
        }

        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        writer.write_record(["greek", "call", "put"])?;
        for (greek, call, put) in self.greeks.rows() {
            writer.write_record([
                greek.label().to_lowercase(),
                format!("{:.*}", precision, call),
                format!("{:.*}", precision, put),
            ])?;
        }

        let bytes = writer.into_inner().map_err(|e| e.into_error())?;
        Ok(String::from_utf8_lossy(&bytes).trim_end().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use greeks_models::analytical::BlackScholesGreeks;

    fn reference_report(with_intermediates: bool) -> Report {
        let bs = BlackScholesGreeks::new(PricingInputs::reference());
        Report {
            inputs: *bs.inputs(),
            greeks: bs.evaluate(),
            intermediates: with_intermediates.then(|| bs.intermediates()),
        }
    }

    #[test]
    fn test_table_output() {
        let out = reference_report(false)
            .render(OutputFormat::Table, 4)
            .unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "         Call        Put");
        assert_eq!(lines[1], "Delta    0.5405      -0.4595");
        assert_eq!(lines[3], "Gamma    4.3305      4.3305");
    }

    #[test]
    fn test_table_with_intermediates() {
        let out = reference_report(true)
            .render(OutputFormat::Table, 4)
            .unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[6], "");
        assert_eq!(lines[7], "d1       0.1016");
        assert_eq!(lines[8], "d2       -0.0130");
        assert_eq!(lines[9], "n(d1)    0.3969");
    }

    #[test]
    fn test_csv_output() {
        let out = reference_report(false).render(OutputFormat::Csv, 3).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            [
                "greek,call,put",
                "delta,0.540,-0.460",
                "theta,-0.030,-0.006",
                "gamma,4.331,4.331",
                "vega,0.242,0.242",
                "rho,0.230,-0.235",
            ]
        );
    }

    #[test]
    fn test_json_output() {
        let out = reference_report(true).render(OutputFormat::Json, 2).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(json["inputs"]["spot"], 0.8);
        assert_eq!(json["inputs"]["volatility"], 0.15);
        assert!((json["greeks"]["call_delta"].as_f64().unwrap() - 0.5404601224677034).abs() < 1e-9);
        assert!(json["intermediates"]["d1"].is_f64());
    }

    #[test]
    fn test_json_omits_missing_intermediates() {
        let out = reference_report(false).render(OutputFormat::Json, 6).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(json.get("intermediates").is_none());
        assert_eq!(json["greeks"].as_object().unwrap().len(), 10);
    }
}
