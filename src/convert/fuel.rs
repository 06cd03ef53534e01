use super::ConversionError;
use crate::models::Category;

/// Convert between fuel economy units.
///
/// The value is first normalised into the base unit (Liters per 100
/// Kilometers) through the source unit, then mapped out through the
/// destination unit, so reciprocal units convert correctly in both directions.
pub fn convert_fuel_economy(
    category: &Category,
    value: f64,
    from_unit: &str,
    to_unit: &str,
) -> Result<f64, ConversionError> {
    let from = category.factor(from_unit)?;
    let to = category.factor(to_unit)?;

    if from_unit == to_unit {
        return Ok(value);
    }

    let base = from.to_base(value);
    Ok(to.from_base(base))
}
