use crate::units::formatter::format;
use crate::units::kind::UnitKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A number paired with the CSS unit it is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct CssValue {
    pub value: f64,
    pub unit: UnitKind,
}

impl CssValue {
    pub fn new(value: f64, unit: UnitKind) -> Self {
        Self { value, unit }
    }
}

impl fmt::Display for CssValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format(self.value, self.unit))
    }
}
