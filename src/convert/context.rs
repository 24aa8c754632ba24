use crate::units::error::UnitError;
use serde::{Deserialize, Serialize};

/// Viewport width used when nothing else is configured
pub const DEFAULT_VIEWPORT_WIDTH_PX: f64 = 1280.0;
/// Viewport height used when nothing else is configured
pub const DEFAULT_VIEWPORT_HEIGHT_PX: f64 = 800.0;

/// Snapshot of the display state needed by viewport-relative units.
///
/// Callers build a fresh context for each call if they track live resizes.
/// Zero or negative dimensions are not rejected by [`ConversionContext::new`];
/// conversions through them yield NaN or infinite values.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionContext {
    pub viewport_width_px: f64,
    pub viewport_height_px: f64,
}

impl ConversionContext {
    pub const fn new(viewport_width_px: f64, viewport_height_px: f64) -> Self {
        Self {
            viewport_width_px,
            viewport_height_px,
        }
    }

    /// Build a context, rejecting non-finite or non-positive dimensions
    pub fn checked(viewport_width_px: f64, viewport_height_px: f64) -> Result<Self, UnitError> {
        for (label, dimension) in [
            ("width", viewport_width_px),
            ("height", viewport_height_px),
        ] {
            if !dimension.is_finite() || dimension <= 0.0 {
                return Err(UnitError::InvalidContext(format!(
                    "viewport {} must be a positive finite number of pixels, got {}",
                    label, dimension
                )));
            }
        }

        Ok(Self::new(viewport_width_px, viewport_height_px))
    }

    pub fn viewport_min_px(&self) -> f64 {
        self.viewport_width_px.min(self.viewport_height_px)
    }

    pub fn viewport_max_px(&self) -> f64 {
        self.viewport_width_px.max(self.viewport_height_px)
    }
}

impl Default for ConversionContext {
    fn default() -> Self {
        Self::new(DEFAULT_VIEWPORT_WIDTH_PX, DEFAULT_VIEWPORT_HEIGHT_PX)
    }
}
