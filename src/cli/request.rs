//! Parsing of batch session lines: `<Category>: <value> <From> -> <To>`

use anyhow::{Result, bail};

const USAGE: &str = "expected '<Category>: <value> <From unit> -> <To unit>'";

/// One conversion request read from a session line
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub category: String,
    pub value: String,
    pub from_unit: String,
    pub to_unit: String,
}

/// Parse a request line. Returns `Ok(None)` for blank lines and `#` comments.
pub fn parse_request(line: &str) -> Result<Option<ConversionRequest>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let Some((category, rest)) = line.split_once(':') else {
        bail!("missing ':' after category; {}", USAGE);
    };
    let Some((source, to_unit)) = rest.split_once("->") else {
        bail!("missing '->' between units; {}", USAGE);
    };
    let source = source.trim();
    let Some((value, from_unit)) = source.split_once(char::is_whitespace) else {
        bail!("missing source unit; {}", USAGE);
    };

    let request = ConversionRequest {
        category: category.trim().to_string(),
        value: value.trim().to_string(),
        from_unit: from_unit.trim().to_string(),
        to_unit: to_unit.trim().to_string(),
    };

    if request.category.is_empty() || request.from_unit.is_empty() || request.to_unit.is_empty() {
        bail!("{}", USAGE);
    }

    Ok(Some(request))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_request() {
        let request = parse_request("Length: 1 Kilometers -> Meters").unwrap().unwrap();
        assert_eq!(
            request,
            ConversionRequest {
                category: "Length".to_string(),
                value: "1".to_string(),
                from_unit: "Kilometers".to_string(),
                to_unit: "Meters".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_multi_word_names() {
        let request = parse_request(
            "  Fuel Economy:  30  Miles per Gallon (US)  ->  Liters per 100 Kilometers ",
        )
        .unwrap()
        .unwrap();
        assert_eq!(request.category, "Fuel Economy");
        assert_eq!(request.value, "30");
        assert_eq!(request.from_unit, "Miles per Gallon (US)");
        assert_eq!(request.to_unit, "Liters per 100 Kilometers");
    }

    #[test]
    fn test_blank_and_comment_lines_skipped() {
        assert!(parse_request("").unwrap().is_none());
        assert!(parse_request("   ").unwrap().is_none());
        assert!(parse_request("# warm-up").unwrap().is_none());
    }

    #[test]
    fn test_missing_separators() {
        let err = parse_request("Length 1 Meters -> Feet").unwrap_err();
        assert!(err.to_string().contains("missing ':'"));

        let err = parse_request("Length: 1 Meters Feet").unwrap_err();
        assert!(err.to_string().contains("missing '->'"));

        let err = parse_request("Length: 1 -> Feet").unwrap_err();
        assert!(err.to_string().contains("missing source unit"));
    }

    #[test]
    fn test_empty_destination() {
        assert!(parse_request("Length: 1 Meters ->").is_err());
    }

    #[test]
    fn test_value_is_not_validated_here() {
        let request = parse_request("Mass: heavy Grams -> Pounds").unwrap().unwrap();
        assert_eq!(request.value, "heavy");
    }
}
