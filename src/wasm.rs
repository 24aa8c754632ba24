// WebAssembly bindings for the browser front end.
// The page passes the live window size on every call; nothing is cached here.
use crate::convert;
use crate::suggest;
use crate::units::{self, UnitKind};
use wasm_bindgen::prelude::*;

fn parse_unit(unit: &str) -> Result<UnitKind, JsValue> {
    unit.parse::<UnitKind>()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize result: {}", e)))
}

#[wasm_bindgen]
pub struct CssUnitWasm {}

impl Default for CssUnitWasm {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl CssUnitWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {}
    }

    /// Unit suffixes in declaration order
    #[wasm_bindgen]
    pub fn list_units(&self) -> js_sys::Array {
        units::list_units()
            .iter()
            .map(|unit| JsValue::from_str(unit.suffix()))
            .collect()
    }

    /// Returns JSON string of the unit's descriptor
    #[wasm_bindgen]
    pub fn describe(&self, unit: &str) -> Result<String, JsValue> {
        let unit = parse_unit(unit)?;
        to_json(units::describe(unit))
    }

    /// Returns JSON string array of every descriptor
    #[wasm_bindgen]
    pub fn descriptors(&self) -> Result<String, JsValue> {
        to_json(&units::descriptors())
    }

    #[wasm_bindgen]
    pub fn convert(
        &self,
        value: f64,
        from: &str,
        to: &str,
        viewport_width: f64,
        viewport_height: f64,
    ) -> Result<f64, JsValue> {
        let ctx = convert::ConversionContext::new(viewport_width, viewport_height);
        Ok(convert::convert(value, parse_unit(from)?, parse_unit(to)?, &ctx))
    }

    #[wasm_bindgen]
    pub fn format(&self, value: f64, unit: &str) -> Result<String, JsValue> {
        Ok(units::format(value, parse_unit(unit)?))
    }

    /// Parse a CSS length such as "1.5rem"
    /// Returns JSON string: {"value": 1.5, "unit": "rem"}
    #[wasm_bindgen]
    pub fn parse(&self, input: &str) -> Result<String, JsValue> {
        let parsed =
            units::parse_css_value(input).map_err(|e| JsValue::from_str(&e.to_string()))?;
        to_json(&parsed)
    }

    /// Returns the suffix of the suggested unit
    #[wasm_bindgen]
    pub fn suggest(&self, context: &str, value: f64, from: &str) -> Result<String, JsValue> {
        let context = suggest::UsageContext::from(context);
        let unit = suggest::suggest(&context, value, parse_unit(from)?);
        Ok(unit.suffix().to_string())
    }

    /// Returns JSON string of the full recommendation for the panel
    #[wasm_bindgen]
    pub fn recommend(
        &self,
        context: &str,
        value: f64,
        current: &str,
        viewport_width: f64,
        viewport_height: f64,
    ) -> Result<String, JsValue> {
        let ctx = convert::ConversionContext::new(viewport_width, viewport_height);
        let context = suggest::UsageContext::from(context);
        let recommendation = suggest::recommend(&context, value, parse_unit(current)?, &ctx);
        to_json(&recommendation)
    }

    /// units_json: JSON string array of unit suffixes, or null for the default set
    /// Returns JSON string of the matrix rows
    #[wasm_bindgen]
    pub fn conversion_matrix(
        &self,
        units_json: Option<String>,
        value: f64,
        viewport_width: f64,
        viewport_height: f64,
    ) -> Result<String, JsValue> {
        let units: Vec<UnitKind> = match units_json {
            Some(json) => serde_json::from_str(&json)
                .map_err(|e| JsValue::from_str(&format!("Failed to parse units JSON: {}", e)))?,
            None => convert::DEFAULT_MATRIX_UNITS.to_vec(),
        };
        let ctx = convert::ConversionContext::new(viewport_width, viewport_height);
        to_json(&convert::conversion_matrix(&units, value, &ctx))
    }

    /// Returns JSON string with both reference tables:
    /// {"common": [...], "physical": [...]}
    #[wasm_bindgen]
    pub fn references(&self) -> Result<String, JsValue> {
        to_json(&serde_json::json!({
            "common": convert::common_references(),
            "physical": convert::physical_equivalents(),
        }))
    }
}
