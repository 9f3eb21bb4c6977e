//! The flat design-token scale and the hex-string entry points.
//!
//! [`generate_scale`] is the primary contract: one `"#rrggbb"` base color in,
//! an ordered step label -> hex mapping out. [`generate_annotated_shades`]
//! is the accessibility-oriented companion returning full shade records.

use crate::calibration::TOKEN_STEPS;
use crate::color::Rgb;
use crate::error::ScaleError;
use crate::shade::Shade;
use crate::strategy::{AnnotatedShadeStrategy, ScaleStrategy, TokenScaleStrategy};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Default number of stops in a generated token scale.
pub const DEFAULT_STEPS: usize = TOKEN_STEPS;

/// Ordered mapping from step label to hex color, lightest first.
///
/// Serializes as a JSON object whose keys keep scale order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorScale {
    entries: Vec<(String, String)>,
}

impl ColorScale {
    pub fn from_shades(shades: &[Shade]) -> Self {
        Self {
            entries: shades
                .iter()
                .map(|s| (s.name.clone(), s.hexcode.clone()))
                .collect(),
        }
    }

    /// Hex color stored under `label`, if any.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, hex)| hex.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(l, _)| l.as_str())
    }

    /// `(label, hex)` pairs in scale order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(l, h)| (l.as_str(), h.as_str()))
    }
}

impl Serialize for ColorScale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, hex) in &self.entries {
            map.serialize_entry(label, hex)?;
        }
        map.end()
    }
}

/// Generates a design-token scale for `base_hex` with the built-in
/// calibration.
///
/// `number_of_steps` may be anything from 0 to [`DEFAULT_STEPS`]; the scale
/// then holds that many leading stops. Larger values fail with
/// `ScaleError::OutOfRangeStepCount`.
pub fn generate_scale(base_hex: &str, number_of_steps: usize) -> Result<ColorScale, ScaleError> {
    let base = Rgb::from_hex(base_hex)?;
    let strategy = TokenScaleStrategy::new().with_steps(number_of_steps)?;
    Ok(strategy.scale(base))
}

/// Generates the ten annotated shades for `base_hex`, each carrying HSL and
/// contrast against white and black.
pub fn generate_annotated_shades(base_hex: &str) -> Result<Vec<Shade>, ScaleError> {
    let base = Rgb::from_hex(base_hex)?;
    Ok(AnnotatedShadeStrategy::new().shades(base))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calibration::SCALE_STOPS;
    use crate::color::hex_to_rgb;

    const LABELS: [&str; 11] = [
        "50", "100", "200", "300", "400", "500", "600", "700", "800", "900", "950",
    ];

    #[test]
    fn generate_scale_brand_color() {
        let scale = generate_scale("#ef4e74", DEFAULT_STEPS).unwrap();
        let pairs: Vec<(&str, &str)> = scale.iter().collect();
        assert_eq!(
            pairs,
            [
                ("50", "#fff1f3"),
                ("100", "#fee7eb"),
                ("200", "#fcd0d8"),
                ("300", "#faa9b9"),
                ("400", "#f77491"),
                ("500", "#ef4e74"),
                ("600", "#db2453"),
                ("700", "#ba1844"),
                ("800", "#9c173d"),
                ("900", "#831738"),
                ("950", "#4b071d"),
            ]
        );
    }

    #[test]
    fn generate_scale_slate_has_fixed_labels_and_falling_lightness() {
        let scale = generate_scale("#636462", DEFAULT_STEPS).unwrap();
        assert_eq!(scale.len(), 11);
        assert_eq!(scale.labels().collect::<Vec<_>>(), LABELS);
        assert_eq!(scale.get("50"), Some("#efffe5"));
        assert_eq!(scale.get("700"), Some("#63af17"));
        assert_eq!(scale.get("950"), Some("#264006"));

        let lightness: Vec<f64> = scale
            .iter()
            .map(|(_, hex)| Rgb::from_hex(hex).unwrap().to_hsl().lightness)
            .collect();
        for pair in lightness.windows(2) {
            assert!(pair[1] <= pair[0], "lightness rose: {pair:?}");
        }
    }

    #[test]
    fn generate_scale_achromatic_base_does_not_fail() {
        let scale = generate_scale("#808080", DEFAULT_STEPS).unwrap();
        assert_eq!(scale.len(), 11);
        assert_eq!(scale.get("600"), Some("#db2525"));
        for (_, hex) in scale.iter() {
            assert!(hex_to_rgb(hex).is_ok());
        }
    }

    #[test]
    fn generate_scale_white_and_black() {
        let white = generate_scale("#ffffff", DEFAULT_STEPS).unwrap();
        assert_eq!(white.get("50"), Some("#ffffff"));
        assert_eq!(white.get("950"), Some("#590816"));
        let black = generate_scale("#000000", DEFAULT_STEPS).unwrap();
        assert_eq!(black.get("950"), Some("#000000"));
    }

    #[test]
    fn generate_scale_with_fewer_steps() {
        let scale = generate_scale("#ef4e74", 5).unwrap();
        assert_eq!(scale.labels().collect::<Vec<_>>(), &LABELS[..5]);
        assert_eq!(scale.get("400"), Some("#f77491"));
        assert_eq!(scale.get("500"), None);

        assert!(generate_scale("#ef4e74", 0).unwrap().is_empty());
    }

    #[test]
    fn generate_scale_rejects_too_many_steps() {
        assert!(matches!(
            generate_scale("#ef4e74", 12),
            Err(ScaleError::OutOfRangeStepCount {
                requested: 12,
                max: 11
            })
        ));
    }

    #[test]
    fn generate_scale_rejects_bad_hex() {
        for bad in ["ef4e74", "#ef4e7", "#ef4e7g", ""] {
            assert!(
                matches!(generate_scale(bad, 11), Err(ScaleError::InvalidHexFormat(_))),
                "expected InvalidHexFormat for {bad:?}"
            );
        }
    }

    #[test]
    fn generate_scale_accepts_uppercase_and_emits_lowercase() {
        let upper = generate_scale("#EF4E74", 11).unwrap();
        let lower = generate_scale("#ef4e74", 11).unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn color_scale_serializes_in_step_order() {
        let scale = generate_scale("#ef4e74", 3).unwrap();
        let json = serde_json::to_string(&scale).unwrap();
        assert_eq!(
            json,
            r##"{"50":"#fff1f3","100":"#fee7eb","200":"#fcd0d8"}"##
        );
    }

    #[test]
    fn empty_scale_serializes_as_empty_object() {
        let json = serde_json::to_string(&ColorScale::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn generate_annotated_shades_returns_ten_records() {
        let shades = generate_annotated_shades("#ef4e74").unwrap();
        assert_eq!(shades.len(), 10);
        assert_eq!(shades[0].name, "50");
        assert_eq!(shades[0].hexcode, "#fad1db");
        assert!(shades.iter().all(|s| s.cw.is_some() && s.cb.is_some()));
        assert!(generate_annotated_shades("nope").is_err());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn scale_always_has_eleven_ordered_labels(r: u8, g: u8, b: u8) {
                let hex = Rgb::new(r, g, b).to_hex();
                let scale = generate_scale(&hex, DEFAULT_STEPS).unwrap();
                let labels: Vec<String> = scale.labels().map(String::from).collect();
                let expected: Vec<String> = SCALE_STOPS.iter().map(u16::to_string).collect();
                prop_assert_eq!(labels, expected);
            }

            #[test]
            fn scale_is_deterministic(
                r in any::<u8>(),
                g in any::<u8>(),
                b in any::<u8>(),
                steps in 0_usize..=11,
            ) {
                let hex = Rgb::new(r, g, b).to_hex();
                let first = generate_scale(&hex, steps).unwrap();
                let second = generate_scale(&hex, steps).unwrap();
                prop_assert_eq!(
                    serde_json::to_string(&first).unwrap(),
                    serde_json::to_string(&second).unwrap()
                );
                prop_assert_eq!(first.len(), steps);
            }

            #[test]
            fn scale_hexes_are_valid(r: u8, g: u8, b: u8) {
                let hex = Rgb::new(r, g, b).to_hex();
                for (_, shade) in generate_scale(&hex, DEFAULT_STEPS).unwrap().iter() {
                    prop_assert_eq!(shade.len(), 7);
                    prop_assert!(hex_to_rgb(shade).is_ok());
                    prop_assert_eq!(shade, shade.to_lowercase());
                }
            }

            #[test]
            fn steps_above_table_always_fail(steps in 12_usize..1000) {
                prop_assert!(generate_scale("#ef4e74", steps).is_err());
            }
        }
    }
}
