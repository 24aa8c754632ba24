use crate::convert::context::{
    ConversionContext, DEFAULT_VIEWPORT_HEIGHT_PX, DEFAULT_VIEWPORT_WIDTH_PX,
};
use crate::convert::matrix::DEFAULT_MATRIX_UNITS;
use crate::suggest::usage::UsageContext;
use crate::units::error::UnitError;
use crate::units::kind::UnitKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    // Viewport assumed for viewport-relative units
    #[serde(default)]
    pub viewport: ViewportConfig,

    #[serde(default)]
    pub suggest: SuggestConfig,

    #[serde(default)]
    pub matrix: MatrixConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct ViewportConfig {
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SuggestConfig {
    // Usage context when none is given on the command line
    #[serde(default)]
    pub context: UsageContext,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MatrixConfig {
    #[serde(default = "default_matrix_units")]
    pub units: Vec<UnitKind>,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            units: default_matrix_units(),
        }
    }
}

fn default_width() -> f64 {
    DEFAULT_VIEWPORT_WIDTH_PX
}

fn default_height() -> f64 {
    DEFAULT_VIEWPORT_HEIGHT_PX
}

fn default_matrix_units() -> Vec<UnitKind> {
    DEFAULT_MATRIX_UNITS.to_vec()
}

impl Config {
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, UnitError> {
        let path = path.as_ref();
        log::debug!("Loading config from {}", path.display());
        let content = std::fs::read_to_string(path)
            .map_err(|e| UnitError::ConfigError(format!("{}: {}", path.display(), e)))?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, UnitError> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Viewport snapshot from this config, overridden per dimension when given
    pub fn context(
        &self,
        width_override: Option<f64>,
        height_override: Option<f64>,
    ) -> Result<ConversionContext, UnitError> {
        ConversionContext::checked(
            width_override.unwrap_or(self.viewport.width),
            height_override.unwrap_or(self.viewport.height),
        )
    }
}
