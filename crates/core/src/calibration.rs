//! Calibration tables that give generated scales their shape.
//!
//! The token tables are hand-tuned lightness and saturation percentages, one
//! per design-token stop. The annotated tables drive the ten-step
//! accessibility-oriented generator, whose saturation entries are
//! percentages of the base color's own saturation.
//!
//! The built-in tables are process-wide constants. A custom
//! [`TokenCalibration`] can be deserialized from JSON and is validated before
//! use.

use crate::error::ScaleError;
use serde::{Deserialize, Serialize};

/// Number of stops in a design-token scale.
pub const TOKEN_STEPS: usize = 11;

/// Number of shades produced by the annotated generator.
pub const ANNOTATED_STEPS: usize = 10;

/// Design-token step labels, lightest to darkest.
pub const SCALE_STOPS: [u16; TOKEN_STEPS] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950];

/// Token-scale lightness template, percent.
pub const TOKEN_LIGHTNESS: [f64; TOKEN_STEPS] =
    [97.0, 95.0, 90.0, 82.0, 71.0, 62.0, 50.0, 41.0, 35.0, 30.0, 16.0];

/// Token-scale absolute saturation, percent.
pub const TOKEN_SATURATION: [f64; TOKEN_STEPS] =
    [100.0, 93.0, 88.0, 89.0, 89.0, 83.0, 72.0, 77.0, 74.0, 70.0, 83.0];

/// Annotated-scale absolute lightness, percent.
pub const ANNOTATED_LIGHTNESS: [f64; ANNOTATED_STEPS] =
    [90.0, 82.0, 74.0, 66.0, 58.0, 50.0, 42.0, 34.0, 26.0, 18.0];

/// Annotated-scale saturation as a percentage of the base saturation.
pub const ANNOTATED_SATURATION: [f64; ANNOTATED_STEPS] =
    [95.0, 92.0, 89.0, 86.0, 83.0, 80.0, 78.0, 76.0, 74.0, 72.0];

/// Lightness and saturation templates for the token strategy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TokenCalibration {
    pub lightness: [f64; TOKEN_STEPS],
    pub saturation: [f64; TOKEN_STEPS],
}

impl Default for TokenCalibration {
    fn default() -> Self {
        Self {
            lightness: TOKEN_LIGHTNESS,
            saturation: TOKEN_SATURATION,
        }
    }
}

impl TokenCalibration {
    /// Parses a calibration from JSON of the form
    /// `{"lightness": [11 numbers], "saturation": [11 numbers]}` and validates it.
    pub fn from_json(json: &str) -> Result<Self, ScaleError> {
        let calibration: TokenCalibration = serde_json::from_str(json)
            .map_err(|e| ScaleError::InvalidCalibration(e.to_string()))?;
        calibration.validate()?;
        Ok(calibration)
    }

    /// Checks that every entry is a finite percentage in [0, 100].
    pub fn validate(&self) -> Result<(), ScaleError> {
        check_table("lightness", &self.lightness)?;
        check_table("saturation", &self.saturation)
    }
}

fn check_table(name: &str, table: &[f64]) -> Result<(), ScaleError> {
    match table
        .iter()
        .enumerate()
        .find(|(_, v)| !v.is_finite() || !(0.0..=100.0).contains(*v))
    {
        Some((i, v)) => Err(ScaleError::InvalidCalibration(format!(
            "{name}[{i}] = {v} is outside [0, 100]"
        ))),
        None => Ok(()),
    }
}

/// Index of the table entry closest to `target`.
///
/// Linear scan; on a tie the lowest index wins. Returns 0 for an empty table.
pub fn closest_index(table: &[f64], target: f64) -> usize {
    let mut best = 0;
    let mut best_diff = f64::INFINITY;
    for (i, &v) in table.iter().enumerate() {
        let diff = (v - target).abs();
        if diff < best_diff {
            best = i;
            best_diff = diff;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_non_increasing(table: &[f64]) -> bool {
        table.windows(2).all(|w| w[1] <= w[0])
    }

    #[test]
    fn builtin_tables_are_valid_and_monotonic() {
        TokenCalibration::default().validate().unwrap();
        assert!(is_non_increasing(&TOKEN_LIGHTNESS));
        assert!(is_non_increasing(&ANNOTATED_LIGHTNESS));
        assert!(SCALE_STOPS.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn closest_index_exact_match() {
        assert_eq!(closest_index(&TOKEN_LIGHTNESS, 62.0), 5);
        assert_eq!(closest_index(&TOKEN_LIGHTNESS, 97.0), 0);
        assert_eq!(closest_index(&TOKEN_LIGHTNESS, 16.0), 10);
    }

    #[test]
    fn closest_index_nearest_neighbour() {
        assert_eq!(closest_index(&TOKEN_LIGHTNESS, 38.82), 7);
        assert_eq!(closest_index(&TOKEN_LIGHTNESS, 62.16), 5);
        assert_eq!(closest_index(&TOKEN_LIGHTNESS, 100.0), 0);
        assert_eq!(closest_index(&TOKEN_LIGHTNESS, 0.0), 10);
    }

    #[test]
    fn closest_index_tie_prefers_lowest_index() {
        // 66.5 is 4.5 away from both 71 (index 4) and 62 (index 5)
        assert_eq!(closest_index(&TOKEN_LIGHTNESS, 66.5), 4);
        assert_eq!(closest_index(&[10.0, 20.0, 10.0], 10.0), 0);
    }

    #[test]
    fn closest_index_empty_table_is_zero() {
        assert_eq!(closest_index(&[], 50.0), 0);
    }

    #[test]
    fn from_json_accepts_valid_table() {
        let json = r#"{
            "lightness": [96, 92, 86, 75, 63, 50, 38, 27, 19, 12, 8],
            "saturation": [25, 30, 35, 40, 45, 50, 55, 60, 65, 70, 75]
        }"#;
        let calibration = TokenCalibration::from_json(json).unwrap();
        assert_eq!(calibration.lightness[3], 75.0);
        assert_eq!(calibration.saturation[10], 75.0);
    }

    #[test]
    fn from_json_rejects_wrong_length() {
        let json = r#"{"lightness": [90, 80], "saturation": [1, 2]}"#;
        assert!(matches!(
            TokenCalibration::from_json(json),
            Err(ScaleError::InvalidCalibration(_))
        ));
    }

    #[test]
    fn from_json_rejects_out_of_range_value() {
        let json = r#"{
            "lightness": [97, 95, 90, 82, 71, 62, 50, 41, 35, 30, 16],
            "saturation": [100, 93, 88, 89, 189, 83, 72, 77, 74, 70, 83]
        }"#;
        let err = TokenCalibration::from_json(json).unwrap_err();
        assert!(err.to_string().contains("saturation[4]"), "got: {err}");
    }

    #[test]
    fn from_json_rejects_unknown_fields() {
        let json = r#"{
            "lightness": [97, 95, 90, 82, 71, 62, 50, 41, 35, 30, 16],
            "saturation": [100, 93, 88, 89, 89, 83, 72, 77, 74, 70, 83],
            "hue": 3
        }"#;
        assert!(TokenCalibration::from_json(json).is_err());
    }

    #[test]
    fn validate_rejects_nan() {
        let mut calibration = TokenCalibration::default();
        calibration.lightness[0] = f64::NAN;
        assert!(calibration.validate().is_err());
    }

    #[test]
    fn calibration_json_round_trip() {
        let json = serde_json::to_string(&TokenCalibration::default()).unwrap();
        assert_eq!(
            TokenCalibration::from_json(&json).unwrap(),
            TokenCalibration::default()
        );
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn closest_index_is_a_minimum(target in -20.0_f64..120.0) {
                let i = closest_index(&TOKEN_LIGHTNESS, target);
                let best = (TOKEN_LIGHTNESS[i] - target).abs();
                for (j, v) in TOKEN_LIGHTNESS.iter().enumerate() {
                    let d = (v - target).abs();
                    prop_assert!(d >= best, "index {j} is closer than {i}");
                    if j < i {
                        prop_assert!(d > best, "index {j} ties {i} but comes first");
                    }
                }
            }
        }
    }
}
