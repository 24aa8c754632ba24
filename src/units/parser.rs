use crate::units::detector::{looks_like_css_value, CSS_VALUE_PATTERN};
use crate::units::error::UnitError;
use crate::units::kind::UnitKind;
use crate::units::types::CssValue;

/// Parse a CSS length string (e.g. "16px", "1.5rem", "50%")
pub fn parse_css_value(input: &str) -> Result<CssValue, UnitError> {
    let not_a_length =
        || UnitError::ParseError(format!("'{}' is not a CSS length with a supported unit", input));
    if !looks_like_css_value(input) {
        return Err(not_a_length());
    }

    let captures = CSS_VALUE_PATTERN
        .captures(input.trim())
        .ok_or_else(not_a_length)?;

    let number = &captures["number"];
    let value = number
        .parse::<f64>()
        .map_err(|e| UnitError::ParseError(format!("Invalid number '{}': {}", number, e)))?;
    let unit = captures["unit"].parse::<UnitKind>()?;

    Ok(CssValue::new(value, unit))
}

/// Parse a CSS length, accepting a bare number in `default_unit`
pub fn parse_css_value_or(input: &str, default_unit: UnitKind) -> Result<CssValue, UnitError> {
    match input.trim().parse::<f64>() {
        Ok(value) => Ok(CssValue::new(value, default_unit)),
        Err(_) => parse_css_value(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_values() {
        assert_eq!(
            parse_css_value("16px").unwrap(),
            CssValue::new(16.0, UnitKind::Px)
        );
        assert_eq!(
            parse_css_value("1.5rem").unwrap(),
            CssValue::new(1.5, UnitKind::Rem)
        );
        assert_eq!(
            parse_css_value("50%").unwrap(),
            CssValue::new(50.0, UnitKind::Percent)
        );
        assert_eq!(
            parse_css_value("-2.5e1 vw").unwrap(),
            CssValue::new(-25.0, UnitKind::Vw)
        );
    }

    #[test]
    fn test_parse_distinguishes_em_and_rem() {
        assert_eq!(parse_css_value("2em").unwrap().unit, UnitKind::Em);
        assert_eq!(parse_css_value("2rem").unwrap().unit, UnitKind::Rem);
        assert_eq!(parse_css_value("2vmin").unwrap().unit, UnitKind::Vmin);
        assert_eq!(parse_css_value("10 percent").unwrap().unit, UnitKind::Percent);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(
            parse_css_value("16"),
            Err(UnitError::ParseError(_))
        ));
        assert!(parse_css_value("16ch").is_err());
        assert!(parse_css_value("abc").is_err());
        assert!(matches!(parse_css_value("   "), Err(UnitError::ParseError(_))));
        assert!(matches!(
            parse_css_value("16 px wide"),
            Err(UnitError::ParseError(msg)) if msg.contains("16 px wide")
        ));
    }

    #[test]
    fn test_parse_with_default_unit() {
        assert_eq!(
            parse_css_value_or("24", UnitKind::Px).unwrap(),
            CssValue::new(24.0, UnitKind::Px)
        );
        assert_eq!(
            parse_css_value_or("3rem", UnitKind::Px).unwrap(),
            CssValue::new(3.0, UnitKind::Rem)
        );
        assert!(parse_css_value_or("3furlongs", UnitKind::Px).is_err());
    }
}
