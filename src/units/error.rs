use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnitError {
    #[error("Invalid unit: {0}")]
    InvalidUnit(String),
    #[error("Invalid context: {0}")]
    InvalidContext(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Config error: {0}")]
    ConfigError(String),
}

impl From<toml::de::Error> for UnitError {
    fn from(e: toml::de::Error) -> Self {
        UnitError::ConfigError(e.to_string())
    }
}
