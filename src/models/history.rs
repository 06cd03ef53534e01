use std::fmt;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Number of decimal places used for results in the history display line
pub const DEFAULT_RESULT_PRECISION: usize = 6;

/// One successful conversion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRecord {
    pub timestamp: DateTime<Local>,
    pub category: String,
    pub value: f64,
    pub from_unit: String,
    pub result: f64,
    pub to_unit: String,
}

impl ConversionRecord {
    /// Render as `HH:MM:SS - {value} {from} -> {result} {to}` with `precision`
    /// decimal places on the result. The input value always keeps a decimal
    /// point (`1.0`, `2.5`).
    pub fn format_with_precision(&self, precision: usize) -> String {
        format!(
            "{} - {:?} {} -> {:.prec$} {}",
            self.timestamp.format("%H:%M:%S"),
            self.value,
            self.from_unit,
            self.result,
            self.to_unit,
            prec = precision
        )
    }

    /// Result sentence shown after a conversion: `{value} {from} = {result} {to}`
    pub fn result_text(&self, precision: usize) -> String {
        format!(
            "{:?} {} = {:.prec$} {}",
            self.value,
            self.from_unit,
            self.result,
            self.to_unit,
            prec = precision
        )
    }
}

impl fmt::Display for ConversionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_precision(DEFAULT_RESULT_PRECISION))
    }
}
