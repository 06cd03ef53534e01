//! Conversion engine
//!
//! [`convert`] routes a request by category:
//!
//! - **Temperature**: affine formulas between Celsius, Fahrenheit and Kelvin
//! - **Fuel Economy**: normalise through Liters per 100 Kilometers, then out
//!   through the destination unit (Miles per Gallon units are reciprocal)
//! - **Everything else**: ratio of linear scale factors
//!
//! All conversions are pure. Input domain checks ([`validate_input`]) happen
//! at the boundary, before a value reaches the converter.

pub mod error;
pub mod fuel;
pub mod linear;
pub mod temperature;

pub use error::ConversionError;
pub use fuel::convert_fuel_economy;
pub use linear::convert_linear;
pub use temperature::convert_temperature;

use crate::models::CategoryKind;
use crate::table::find_category;

/// Convert `value` from `from_unit` to `to_unit` within `category`
pub fn convert(
    value: f64,
    from_unit: &str,
    to_unit: &str,
    category: &str,
) -> Result<f64, ConversionError> {
    let cat = find_category(category)?;

    let result = match cat.kind {
        CategoryKind::Temperature => {
            cat.require_unit(from_unit)?;
            cat.require_unit(to_unit)?;
            convert_temperature(value, from_unit, to_unit)
        }
        CategoryKind::FuelEconomy => convert_fuel_economy(cat, value, from_unit, to_unit)?,
        CategoryKind::Linear => convert_linear(cat, value, from_unit, to_unit)?,
    };

    if !result.is_finite() {
        return Err(ConversionError::NonFiniteResult {
            category: cat.name.to_string(),
            from: from_unit.to_string(),
            to: to_unit.to_string(),
            value,
        });
    }

    tracing::debug!(category = cat.name, from_unit, to_unit, value, result, "converted");
    Ok(result)
}

/// Reject values outside the accepted input domain (finite and >= 0)
pub fn validate_input(value: f64) -> Result<f64, ConversionError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ConversionError::NegativeOrInvalidInput { value })
    }
}

/// Parse user text into a validated input value
pub fn parse_value(input: &str) -> Result<f64, ConversionError> {
    let trimmed = input.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| ConversionError::InvalidNumber { input: trimmed.to_string() })?;
    validate_input(value)
}
