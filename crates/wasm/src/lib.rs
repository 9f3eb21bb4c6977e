#![deny(unsafe_code)]
//! WASM bindings for tintscale.
//!
//! The web front end calls these to render swatches. Results cross the
//! boundary as JSON strings so step order survives into JavaScript.

use tintscale_core::{ExportFormat, Rgb, ScaleError, ScaleStrategy, StrategyKind};
use wasm_bindgen::prelude::*;

fn to_js(e: ScaleError) -> JsError {
    JsError::new(&e.to_string())
}

fn token_scale_json(base_hex: &str, steps: usize) -> Result<String, ScaleError> {
    let scale = tintscale_core::generate_scale(base_hex, steps)?;
    Ok(serde_json::to_string(&scale)?)
}

fn shades_json(base_hex: &str, strategy: &str) -> Result<String, ScaleError> {
    let base = Rgb::from_hex(base_hex)?;
    let shades = StrategyKind::from_name(strategy)?.annotated_shades(base);
    Ok(serde_json::to_string(&shades)?)
}

fn export_json(name: &str, base_hex: &str, format: &str) -> Result<String, ScaleError> {
    let format = ExportFormat::from_name(format)?;
    let scale = tintscale_core::generate_scale(base_hex, tintscale_core::DEFAULT_STEPS)?;
    tintscale_core::export(name, &scale, format)
}

/// Design-token scale as a JSON object `{"50": "#rrggbb", ...}`.
#[wasm_bindgen(js_name = generateScale)]
pub fn generate_scale(base_hex: &str, steps: usize) -> Result<String, JsError> {
    token_scale_json(base_hex, steps).map_err(to_js)
}

/// Shades with HSL and contrast as a JSON array.
#[wasm_bindgen(js_name = annotatedShades)]
pub fn annotated_shades(base_hex: &str, strategy: &str) -> Result<String, JsError> {
    shades_json(base_hex, strategy).map_err(to_js)
}

/// WCAG contrast ratio between two colors.
#[wasm_bindgen(js_name = contrastRatio)]
pub fn contrast_ratio(first: &str, second: &str) -> Result<f64, JsError> {
    tintscale_core::contrast_ratio(first, second).map_err(to_js)
}

/// Full 11-step scale rendered in an export format (json, css, tailwind, text).
#[wasm_bindgen(js_name = exportScale)]
pub fn export_scale(name: &str, base_hex: &str, format: &str) -> Result<String, JsError> {
    export_json(name, base_hex, format).map_err(to_js)
}
