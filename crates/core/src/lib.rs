#![deny(unsafe_code)]
//! Core of tintscale: derives a graduated design-token color scale from a
//! single base color.
//!
//! Provides the `Rgb`/`Hsl` codec, WCAG luminance and contrast, the
//! calibration tables, the two scale strategies (`TokenScaleStrategy`,
//! `AnnotatedShadeStrategy`), the `Shade` record, `ColorScale`, and token
//! export. Everything here is pure and synchronous.

pub mod calibration;
pub mod color;
pub mod contrast;
pub mod error;
pub mod export;
pub mod scale;
pub mod shade;
pub mod strategy;

pub use calibration::TokenCalibration;
pub use color::{hex_to_rgb, hsl_to_hex, rgb_to_hsl, Hsl, Rgb};
pub use contrast::{contrast_ratio, WcagRating};
pub use error::ScaleError;
pub use export::{export, ExportFormat};
pub use scale::{generate_annotated_shades, generate_scale, ColorScale, DEFAULT_STEPS};
pub use shade::Shade;
pub use strategy::{AnnotatedShadeStrategy, ScaleStrategy, StrategyKind, TokenScaleStrategy};
