//! WCAG relative luminance and contrast ratio.
//!
//! Luminance uses the WCAG 2.x channel decoding (linear segment below
//! 0.03928) and the Rec. 709 channel weights. Contrast ratios are always
//! reported as `lighter / darker`, so they lie in [1, 21].

use crate::color::{hex_to_rgb, Rgb};
use crate::error::ScaleError;
use serde::Serialize;

/// Minimum ratio for normal text at level AA.
pub const AA_NORMAL: f64 = 4.5;
/// Minimum ratio for large text at level AA.
pub const AA_LARGE: f64 = 3.0;
/// Minimum ratio for normal text at level AAA.
pub const AAA_NORMAL: f64 = 7.0;
/// Minimum ratio for large text at level AAA.
pub const AAA_LARGE: f64 = 4.5;

/// Decodes one gamma-encoded 8-bit channel to linear light.
fn channel_to_linear(v: u8) -> f64 {
    let v = v as f64 / 255.0;
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of three channel bytes, in [0, 1].
pub fn luminance(r: u8, g: u8, b: u8) -> f64 {
    0.2126 * channel_to_linear(r) + 0.7152 * channel_to_linear(g) + 0.0722 * channel_to_linear(b)
}

/// Relative luminance of an [`Rgb`] color.
pub fn relative_luminance(c: Rgb) -> f64 {
    luminance(c.r, c.g, c.b)
}

/// Contrast ratio between two colors. Symmetric, always >= 1.
pub fn contrast_ratio_rgb(a: Rgb, b: Rgb) -> f64 {
    let l1 = relative_luminance(a) + 0.05;
    let l2 = relative_luminance(b) + 0.05;
    if l1 > l2 {
        l1 / l2
    } else {
        l2 / l1
    }
}

/// Contrast ratio between two `"#rrggbb"` strings.
pub fn contrast_ratio(hex1: &str, hex2: &str) -> Result<f64, ScaleError> {
    let (r1, g1, b1) = hex_to_rgb(hex1)?;
    let (r2, g2, b2) = hex_to_rgb(hex2)?;
    Ok(contrast_ratio_rgb(Rgb::new(r1, g1, b1), Rgb::new(r2, g2, b2)))
}

/// Pass/fail for every WCAG text-contrast threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WcagRating {
    pub aa: bool,
    pub aa_large: bool,
    pub aaa: bool,
    pub aaa_large: bool,
}

impl WcagRating {
    pub fn from_ratio(ratio: f64) -> Self {
        Self {
            aa: ratio >= AA_NORMAL,
            aa_large: ratio >= AA_LARGE,
            aaa: ratio >= AAA_NORMAL,
            aaa_large: ratio >= AAA_LARGE,
        }
    }
}
