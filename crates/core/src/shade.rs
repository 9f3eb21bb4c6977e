//! A single entry of a generated scale.

use crate::color::{Hsl, Rgb};
use crate::contrast::{contrast_ratio, contrast_ratio_rgb};
use serde::{Deserialize, Serialize};

/// One shade: its step label, hex color, the HSL it was generated from and,
/// once annotated, its contrast against white (`cw`) and black (`cb`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shade {
    pub name: String,
    pub hexcode: String,
    pub hsl: Hsl,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cw: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cb: Option<f64>,
}

impl Shade {
    /// Creates a shade whose hex code is derived from `hsl`.
    pub fn from_hsl(name: impl Into<String>, hsl: Hsl) -> Self {
        Self {
            name: name.into(),
            hexcode: hsl.to_hex(),
            hsl,
            cw: None,
            cb: None,
        }
    }

    /// Attaches contrast ratios against white and black.
    ///
    /// Leaves both fields `None` if `hexcode` is not a valid hex color.
    pub fn with_contrast(mut self) -> Self {
        self.cw = contrast_ratio(&self.hexcode, "#ffffff").ok();
        self.cb = contrast_ratio(&self.hexcode, "#000000").ok();
        self
    }

    /// Whichever of white or black text reads better on this shade.
    /// Ties go to black.
    pub fn preferred_text(&self) -> Option<Rgb> {
        let bg = Rgb::from_hex(&self.hexcode).ok()?;
        let on_white = contrast_ratio_rgb(bg, Rgb::WHITE);
        let on_black = contrast_ratio_rgb(bg, Rgb::BLACK);
        Some(if on_white > on_black {
            Rgb::WHITE
        } else {
            Rgb::BLACK
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hsl_derives_hexcode() {
        let shade = Shade::from_hsl("500", Hsl::new(345.84, 83.0, 62.16));
        assert_eq!(shade.name, "500");
        assert_eq!(shade.hexcode, "#ef4e74");
        assert!(shade.cw.is_none() && shade.cb.is_none());
    }

    #[test]
    fn with_contrast_attaches_both_ratios() {
        let shade = Shade::from_hsl("950", Hsl::new(0.0, 0.0, 0.0)).with_contrast();
        assert_eq!(shade.hexcode, "#000000");
        assert!((shade.cw.unwrap() - 21.0).abs() < 1e-9);
        assert!((shade.cb.unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn with_contrast_on_malformed_hexcode_leaves_none() {
        let shade = Shade {
            name: "x".into(),
            hexcode: "oops".into(),
            hsl: Hsl::new(0.0, 0.0, 0.0),
            cw: None,
            cb: None,
        }
        .with_contrast();
        assert!(shade.cw.is_none() && shade.cb.is_none());
        assert!(shade.preferred_text().is_none());
    }

    #[test]
    fn preferred_text_picks_readable_color() {
        let light = Shade::from_hsl("50", Hsl::new(0.0, 0.0, 97.0));
        assert_eq!(light.preferred_text(), Some(Rgb::BLACK));
        let dark = Shade::from_hsl("950", Hsl::new(0.0, 0.0, 10.0));
        assert_eq!(dark.preferred_text(), Some(Rgb::WHITE));
    }

    #[test]
    fn serialization_omits_missing_contrast() {
        let shade = Shade::from_hsl("100", Hsl::new(0.0, 100.0, 50.0));
        let value = serde_json::to_value(&shade).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "100",
                "hexcode": "#ff0000",
                "hsl": {"hue": 0.0, "saturation": 100.0, "lightness": 50.0},
            })
        );
    }

    #[test]
    fn serialization_includes_contrast_once_attached() {
        let shade = Shade::from_hsl("100", Hsl::new(0.0, 0.0, 100.0)).with_contrast();
        let value = serde_json::to_value(&shade).unwrap();
        assert!(value.get("cw").is_some());
        assert!(value.get("cb").is_some());
    }
}
