//! Tabular presentation of Greeks.
//!
//! [`GreeksTable`] lays out a [`GreeksResult`] as five rows (Delta, Theta,
//! Gamma, Vega, Rho) by two columns (Call, Put):
//!
//! ```text
//!          Call        Put
//! Delta    0.540460    -0.459540
//! Theta    -0.030003   -0.006124
//! Gamma    4.330536    4.330536
//! Vega     0.242496    0.242496
//! Rho      0.229737    -0.234540
//! ```
//!
//! No computation happens here beyond formatting.

use std::fmt;

use num_traits::Float;

use crate::analytical::result::{Greek, GreeksResult, OptionSide};

/// Width of the row-label column.
pub const LABEL_WIDTH: usize = 9;

/// Minimum width of the Call column.
pub const CALL_WIDTH: usize = 12;

/// Decimal places used unless overridden.
pub const DEFAULT_PRECISION: usize = 6;

/// Two-column table view over a [`GreeksResult`].
///
/// # Examples
/// ```
/// use greeks_core::types::PricingInputs;
/// use greeks_models::analytical::evaluate;
/// use greeks_models::presentation::GreeksTable;
///
/// let result = evaluate(&PricingInputs::<f64>::reference());
/// let table = GreeksTable::new(&result).with_precision(3).to_string();
///
/// let lines: Vec<&str> = table.lines().collect();
/// assert_eq!(lines[0], "         Call        Put");
/// assert_eq!(lines[1], "Delta    0.540       -0.460");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GreeksTable<'a, T: Float> {
    result: &'a GreeksResult<T>,
    precision: usize,
}

impl<'a, T: Float> GreeksTable<'a, T> {
    /// Creates a table with [`DEFAULT_PRECISION`] decimal places.
    pub fn new(result: &'a GreeksResult<T>) -> Self {
        Self {
            result,
            precision: DEFAULT_PRECISION,
        }
    }

    /// Sets the number of decimal places.
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Returns the number of decimal places.
    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Returns `(greek, call, put)` triples in display order.
    pub fn rows(&self) -> impl Iterator<Item = (Greek, T, T)> + 'a {
        self.result.rows()
    }
}

impl<T: Float + fmt::Display> GreeksTable<'_, T> {
    fn write_row(&self, f: &mut fmt::Formatter<'_>, label: &str, call: &str, put: &str) -> fmt::Result {
        // Wide values still keep one space before the Put column
        let call_width = CALL_WIDTH.max(call.chars().count() + 1);
        write!(f, "{:<label_width$}{:<call_width$}{}", label, call, put, label_width = LABEL_WIDTH)
    }
}

impl<T: Float + fmt::Display> fmt::Display for GreeksTable<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_row(f, "", OptionSide::Call.label(), OptionSide::Put.label())?;

        for (greek, call, put) in self.rows() {
            let call = format!("{:.*}", self.precision, call);
            let put = format!("{:.*}", self.precision, put);
            writeln!(f)?;
            self.write_row(f, greek.label(), &call, &put)?;
        }

        Ok(())
    }
}
