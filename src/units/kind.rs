use crate::units::error::UnitError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported CSS length unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum UnitKind {
    #[serde(rename = "px")]
    Px,
    #[serde(rename = "rem")]
    Rem,
    #[serde(rename = "em")]
    Em,
    #[serde(rename = "vh")]
    Vh,
    #[serde(rename = "vw")]
    Vw,
    #[serde(rename = "%", alias = "percent")]
    Percent,
    #[serde(rename = "vmin")]
    Vmin,
    #[serde(rename = "vmax")]
    Vmax,
    #[serde(rename = "cm")]
    Cm,
    #[serde(rename = "mm")]
    Mm,
    #[serde(rename = "in")]
    In,
    #[serde(rename = "pt")]
    Pt,
    #[serde(rename = "pc")]
    Pc,
}

impl UnitKind {
    /// All units in declaration order
    pub const ALL: [UnitKind; 13] = [
        UnitKind::Px,
        UnitKind::Rem,
        UnitKind::Em,
        UnitKind::Vh,
        UnitKind::Vw,
        UnitKind::Percent,
        UnitKind::Vmin,
        UnitKind::Vmax,
        UnitKind::Cm,
        UnitKind::Mm,
        UnitKind::In,
        UnitKind::Pt,
        UnitKind::Pc,
    ];

    /// Text appended to a number in CSS (e.g. "px", "%")
    pub fn suffix(self) -> &'static str {
        match self {
            UnitKind::Px => "px",
            UnitKind::Rem => "rem",
            UnitKind::Em => "em",
            UnitKind::Vh => "vh",
            UnitKind::Vw => "vw",
            UnitKind::Percent => "%",
            UnitKind::Vmin => "vmin",
            UnitKind::Vmax => "vmax",
            UnitKind::Cm => "cm",
            UnitKind::Mm => "mm",
            UnitKind::In => "in",
            UnitKind::Pt => "pt",
            UnitKind::Pc => "pc",
        }
    }

    /// Units whose real CSS meaning depends on the parent element
    pub fn is_parent_relative(self) -> bool {
        matches!(self, UnitKind::Em | UnitKind::Percent)
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

impl FromStr for UnitKind {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        if lowered == "percent" {
            return Ok(UnitKind::Percent);
        }
        UnitKind::ALL
            .iter()
            .copied()
            .find(|unit| unit.suffix() == lowered)
            .ok_or_else(|| UnitError::InvalidUnit(format!("'{}' is not a supported CSS unit", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_suffix() {
        for unit in UnitKind::ALL {
            assert_eq!(unit.suffix().parse::<UnitKind>().unwrap(), unit);
        }
    }

    #[test]
    fn test_parse_aliases_and_case() {
        assert_eq!("percent".parse::<UnitKind>().unwrap(), UnitKind::Percent);
        assert_eq!("REM".parse::<UnitKind>().unwrap(), UnitKind::Rem);
        assert_eq!(" px ".parse::<UnitKind>().unwrap(), UnitKind::Px);
    }

    #[test]
    fn test_parse_unknown_unit_fails() {
        let err = "ch".parse::<UnitKind>().unwrap_err();
        assert!(matches!(err, UnitError::InvalidUnit(msg) if msg.contains("ch")));
        assert!("".parse::<UnitKind>().is_err());
    }

    #[test]
    fn test_serde_uses_css_suffix() {
        assert_eq!(serde_json::to_string(&UnitKind::Percent).unwrap(), "\"%\"");
        assert_eq!(serde_json::to_string(&UnitKind::Vmin).unwrap(), "\"vmin\"");
        let unit: UnitKind = serde_json::from_str("\"percent\"").unwrap();
        assert_eq!(unit, UnitKind::Percent);
    }
}
