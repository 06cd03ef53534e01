use super::ConversionError;

const KELVIN_OFFSET: f64 = 273.15;

fn celsius_to_fahrenheit(v: f64) -> f64 {
    v * 9.0 / 5.0 + 32.0
}

fn fahrenheit_to_celsius(v: f64) -> f64 {
    (v - 32.0) * 5.0 / 9.0
}

fn celsius_to_kelvin(v: f64) -> f64 {
    v + KELVIN_OFFSET
}

fn kelvin_to_celsius(v: f64) -> f64 {
    v - KELVIN_OFFSET
}

fn fahrenheit_to_kelvin(v: f64) -> f64 {
    (v - 32.0) * 5.0 / 9.0 + KELVIN_OFFSET
}

fn kelvin_to_fahrenheit(v: f64) -> f64 {
    (v - KELVIN_OFFSET) * 9.0 / 5.0 + 32.0
}

/// Formula for an ordered pair of distinct temperature scales
pub fn formula(from_unit: &str, to_unit: &str) -> Result<fn(f64) -> f64, ConversionError> {
    let f: fn(f64) -> f64 = match (from_unit, to_unit) {
        ("Celsius", "Fahrenheit") => celsius_to_fahrenheit,
        ("Fahrenheit", "Celsius") => fahrenheit_to_celsius,
        ("Celsius", "Kelvin") => celsius_to_kelvin,
        ("Kelvin", "Celsius") => kelvin_to_celsius,
        ("Fahrenheit", "Kelvin") => fahrenheit_to_kelvin,
        ("Kelvin", "Fahrenheit") => kelvin_to_fahrenheit,
        _ => {
            return Err(ConversionError::UnsupportedTemperaturePair {
                from: from_unit.to_string(),
                to: to_unit.to_string(),
            });
        }
    };
    Ok(f)
}

/// Convert between Celsius, Fahrenheit and Kelvin.
///
/// Identical units and pairs without a formula return `value` unchanged.
pub fn convert_temperature(value: f64, from_unit: &str, to_unit: &str) -> f64 {
    match formula(from_unit, to_unit) {
        Ok(f) => f(value),
        Err(e) => {
            tracing::trace!("{}; passing value through", e);
            value
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_celsius_to_fahrenheit() {
        assert_eq!(convert_temperature(0.0, "Celsius", "Fahrenheit"), 32.0);
        assert_eq!(convert_temperature(100.0, "Celsius", "Fahrenheit"), 212.0);
    }

    #[test]
    fn test_celsius_to_kelvin() {
        assert_eq!(convert_temperature(0.0, "Celsius", "Kelvin"), 273.15);
    }

    #[test]
    fn test_fahrenheit_to_celsius() {
        assert_eq!(convert_temperature(32.0, "Fahrenheit", "Celsius"), 0.0);
        assert!((convert_temperature(212.0, "Fahrenheit", "Celsius") - 100.0).abs() < EPSILON);
    }

    #[test]
    fn test_kelvin_pairs() {
        assert!((convert_temperature(273.15, "Kelvin", "Celsius")).abs() < EPSILON);
        assert!((convert_temperature(273.15, "Kelvin", "Fahrenheit") - 32.0).abs() < EPSILON);
        assert!((convert_temperature(32.0, "Fahrenheit", "Kelvin") - 273.15).abs() < EPSILON);
    }

    #[test]
    fn test_every_pair_round_trips() {
        let units = ["Celsius", "Fahrenheit", "Kelvin"];
        for from in units {
            for to in units {
                let there = convert_temperature(41.0, from, to);
                let back = convert_temperature(there, to, from);
                assert!((back - 41.0).abs() < EPSILON, "{} -> {}", from, to);
            }
        }
    }

    #[test]
    fn test_identity_passes_through() {
        assert_eq!(convert_temperature(12.5, "Kelvin", "Kelvin"), 12.5);
    }

    #[test]
    fn test_unknown_pair_passes_through() {
        assert_eq!(convert_temperature(12.5, "Rankine", "Celsius"), 12.5);
    }

    #[test]
    fn test_formula_reports_unsupported_pair() {
        let err = formula("Celsius", "Celsius").unwrap_err();
        assert_eq!(
            err,
            ConversionError::UnsupportedTemperaturePair {
                from: "Celsius".to_string(),
                to: "Celsius".to_string()
            }
        );
    }
}
