use super::ConversionError;
use crate::models::{Category, Factor};

/// Ratio conversion: `value * (factor_from / factor_to)`.
///
/// Units without a plain factor are converted through the base unit instead.
pub fn convert_linear(
    category: &Category,
    value: f64,
    from_unit: &str,
    to_unit: &str,
) -> Result<f64, ConversionError> {
    let from = category.factor(from_unit)?;
    let to = category.factor(to_unit)?;

    match (from, to) {
        (Factor::Linear(factor_from), Factor::Linear(factor_to)) => {
            Ok(value * (factor_from / factor_to))
        }
        _ => Ok(to.from_base(from.to_base(value))),
    }
}
