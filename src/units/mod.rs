// CSS length units: the closed unit set, its metadata catalogue,
// and text handling (detection, parsing, display formatting)

pub mod catalogue;
pub mod detector;
pub mod error;
pub mod formatter;
pub mod kind;
pub mod parser;
pub mod types;

pub use catalogue::{describe, descriptors, list_units, UnitDescriptor};
pub use detector::looks_like_css_value;
pub use error::UnitError;
pub use formatter::{format, precision};
pub use kind::UnitKind;
pub use parser::{parse_css_value, parse_css_value_or};
pub use types::CssValue;
