use thiserror::Error;

/// Failure of a single conversion. Conversions are pure, so an error never
/// leaves partial state behind.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error("Unknown category: {category}")]
    UnknownCategory { category: String },

    #[error("Unknown unit '{unit}' in category {category}")]
    UnknownUnit { category: String, unit: String },

    #[error("No temperature formula from {from} to {to}")]
    UnsupportedTemperaturePair { from: String, to: String },

    #[error("Value must be a finite number >= 0, got {value}")]
    NegativeOrInvalidInput { value: f64 },

    #[error("Invalid number: '{input}'")]
    InvalidNumber { input: String },

    #[error("Converting {value} {from} to {to} ({category}) has no finite result")]
    NonFiniteResult { category: String, from: String, to: String, value: f64 },
}
