//! Color types and conversion functions for tintscale.
//!
//! Provides the two color models the scale generator works in (`Rgb` and
//! `Hsl`) plus pure conversion functions between them and `#rrggbb` hex
//! strings. All conversions are free functions with no side effects.
//!
//! HSL components follow the CSS convention: hue in degrees [0, 360),
//! saturation and lightness in percent [0, 100].

use crate::error::ScaleError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// 8-bit sRGB color. No alpha channel.
///
/// Serializes as a hex string `"#rrggbb"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// HSL color with hue in degrees and saturation/lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a hex color string of the exact form `"#rrggbb"` (digits are
    /// case insensitive).
    ///
    /// Returns `ScaleError::InvalidHexFormat` for a missing `#`, a length other
    /// than six digits, or any non-hex digit.
    pub fn from_hex(hex: &str) -> Result<Rgb, ScaleError> {
        let (r, g, b) = hex_to_rgb(hex)?;
        Ok(Rgb { r, g, b })
    }

    /// Formats the color as a lowercase, zero-padded `"#rrggbb"` string.
    pub fn to_hex(self) -> String {
        rgb_to_hex(self.r, self.g, self.b)
    }

    /// Converts to HSL, rounded to two decimal places.
    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ScaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgb::from_hex(s)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

impl Hsl {
    pub const fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    pub fn to_rgb(self) -> Rgb {
        hsl_to_rgb(self.hue, self.saturation, self.lightness)
    }

    pub fn to_hex(self) -> String {
        self.to_rgb().to_hex()
    }
}

/// Parses `"#rrggbb"` into its three channel bytes.
///
/// The six digits are read as one 24-bit integer and each channel is
/// extracted by shift and mask.
pub fn hex_to_rgb(hex: &str) -> Result<(u8, u8, u8), ScaleError> {
    let digits = hex.strip_prefix('#').ok_or_else(|| {
        ScaleError::InvalidHexFormat(format!("{hex:?} does not start with '#'"))
    })?;
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ScaleError::InvalidHexFormat(format!(
            "{hex:?} is not '#' followed by 6 hex digits"
        )));
    }
    let value = u32::from_str_radix(digits, 16)
        .map_err(|e| ScaleError::InvalidHexFormat(format!("{hex:?}: {e}")))?;
    Ok((
        ((value >> 16) & 0xff) as u8,
        ((value >> 8) & 0xff) as u8,
        (value & 0xff) as u8,
    ))
}

/// Formats three channel bytes as a lowercase `"#rrggbb"` string.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Converts RGB bytes to HSL.
///
/// Achromatic input (all channels equal) yields hue 0 and saturation 0.
/// Every component is rounded to two decimal places; a hue that rounds up to
/// 360 wraps to 0.
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let r = r as f64 / 255.0;
    let g = g as f64 / 255.0;
    let b = b as f64 / 255.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let (h, s) = if max == min {
        (0.0, 0.0)
    } else {
        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        (h / 6.0, s)
    };

    Hsl {
        hue: normalize_hue(round2(h * 360.0)),
        saturation: round2(s * 100.0),
        lightness: round2(l * 100.0),
    }
}

/// Converts HSL to RGB using the chroma / intermediate / match method.
///
/// Hue is normalized into [0, 360) first, so negative or wrapped hues pick the
/// correct sector. Saturation and lightness are clamped to [0, 100] and each
/// channel to [0, 255].
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let h = normalize_hue(h);
    let s = s.clamp(0.0, 100.0) / 100.0;
    let l = l.clamp(0.0, 100.0) / 100.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match (h / 60.0) as u8 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Rgb {
        r: to_byte(r + m),
        g: to_byte(g + m),
        b: to_byte(b + m),
    }
}

/// Converts HSL straight to a `"#rrggbb"` string.
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    hsl_to_rgb(h, s, l).to_hex()
}

/// Wraps any hue into [0, 360). Non-finite hues map to 0.
pub fn normalize_hue(h: f64) -> f64 {
    if !h.is_finite() {
        return 0.0;
    }
    let h = h.rem_euclid(360.0);
    // rem_euclid can land exactly on 360.0 for tiny negative inputs
    if h >= 360.0 {
        0.0
    } else {
        h
    }
}

/// Rounds to two decimal places.
pub(crate) fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn to_byte(unit: f64) -> u8 {
    (unit * 255.0).round().clamp(0.0, 255.0) as u8
}
