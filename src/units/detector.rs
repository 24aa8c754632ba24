use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex pattern to detect CSS length strings
    /// Matches: optional sign + number (optional decimal, optional scientific notation)
    /// + optional whitespace + a supported unit suffix
    /// Examples: "16px", "1.5rem", "-2em", "50 %", "1e2vw"
    pub(crate) static ref CSS_VALUE_PATTERN: Regex = Regex::new(
        r"(?i)^(?P<number>[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:e[+-]?\d+)?)\s*(?P<unit>px|rem|em|vh|vw|vmin|vmax|cm|mm|in|pt|pc|percent|%)$"
    ).unwrap();
}

/// Check if a string looks like a CSS length with a supported unit
pub fn looks_like_css_value(s: &str) -> bool {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return false;
    }

    CSS_VALUE_PATTERN.is_match(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_value_detection() {
        assert!(looks_like_css_value("16px"));
        assert!(looks_like_css_value("1.5rem"));
        assert!(looks_like_css_value("-2em"));
        assert!(looks_like_css_value("50%"));
        assert!(looks_like_css_value("50 %"));
        assert!(looks_like_css_value(".5vmin"));
        assert!(looks_like_css_value("1e2vw"));
        assert!(looks_like_css_value("  12PT  "));

        assert!(!looks_like_css_value("16"));
        assert!(!looks_like_css_value("px"));
        assert!(!looks_like_css_value("16ch"));
        assert!(!looks_like_css_value("16 px wide"));
        assert!(!looks_like_css_value(""));
    }
}
