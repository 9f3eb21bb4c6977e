//! Scale-generation strategies.
//!
//! Two strategies turn one base color into an ordered run of shades:
//!
//! - [`TokenScaleStrategy`] produces the 11-stop design-token scale
//!   (`50`..`950`). It anchors the calibrated lightness curve on the base
//!   color, uses the calibrated saturation values as-is, and drifts the hue
//!   by one degree per step.
//! - [`AnnotatedShadeStrategy`] produces ten shades at fixed lightness with
//!   the base saturation scaled per step, and attaches WCAG contrast against
//!   white and black to every shade.
//!
//! [`StrategyKind`] selects between them by name for string-driven callers
//! (CLI, WASM).

use crate::calibration::{
    closest_index, TokenCalibration, ANNOTATED_LIGHTNESS, ANNOTATED_SATURATION, ANNOTATED_STEPS,
    SCALE_STOPS, TOKEN_STEPS,
};
use crate::color::{hsl_to_hex, normalize_hue, round2, Hsl, Rgb};
use crate::error::ScaleError;
use crate::scale::ColorScale;
use crate::shade::Shade;
use tracing::{debug, trace};

/// All recognized strategy names.
const STRATEGY_NAMES: &[&str] = &["token", "annotated"];

/// Common interface of the scale generators.
///
/// This trait is **object-safe**: `Box<dyn ScaleStrategy>` works for runtime
/// selection.
pub trait ScaleStrategy {
    /// Short name used for lookup and reporting.
    fn name(&self) -> &'static str;

    /// Number of shades this strategy produces.
    fn steps(&self) -> usize;

    /// Step labels, lightest first.
    fn labels(&self) -> Vec<String>;

    /// Generates the shades for `base`, lightest first.
    fn shades(&self, base: Rgb) -> Vec<Shade>;

    /// Generates the flat label -> hex mapping for `base`.
    fn scale(&self, base: Rgb) -> ColorScale {
        ColorScale::from_shades(&self.shades(base))
    }

    /// Generates shades with contrast against white and black attached.
    fn annotated_shades(&self, base: Rgb) -> Vec<Shade> {
        self.shades(base)
            .into_iter()
            .map(Shade::with_contrast)
            .collect()
    }
}

/// The calibrated design-token generator.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenScaleStrategy {
    steps: usize,
    calibration: TokenCalibration,
}

impl Default for TokenScaleStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenScaleStrategy {
    /// All 11 stops with the built-in calibration.
    pub fn new() -> Self {
        Self {
            steps: TOKEN_STEPS,
            calibration: TokenCalibration::default(),
        }
    }

    /// Limits output to the first `steps` stops.
    ///
    /// Returns `ScaleError::OutOfRangeStepCount` above 11.
    pub fn with_steps(mut self, steps: usize) -> Result<Self, ScaleError> {
        if steps > TOKEN_STEPS {
            return Err(ScaleError::OutOfRangeStepCount {
                requested: steps,
                max: TOKEN_STEPS,
            });
        }
        self.steps = steps;
        Ok(self)
    }

    /// Replaces the calibration tables after validating them.
    pub fn with_calibration(mut self, calibration: TokenCalibration) -> Result<Self, ScaleError> {
        calibration.validate()?;
        self.calibration = calibration;
        Ok(self)
    }

    pub fn calibration(&self) -> &TokenCalibration {
        &self.calibration
    }
}

impl ScaleStrategy for TokenScaleStrategy {
    fn name(&self) -> &'static str {
        "token"
    }

    fn steps(&self) -> usize {
        self.steps
    }

    fn labels(&self) -> Vec<String> {
        SCALE_STOPS[..self.steps]
            .iter()
            .map(u16::to_string)
            .collect()
    }

    fn shades(&self, base: Rgb) -> Vec<Shade> {
        let base_hsl = base.to_hsl();
        let lightness = &self.calibration.lightness;

        let anchor = closest_index(lightness, base_hsl.lightness);
        let shift = base_hsl.lightness - lightness[anchor];
        // Darker anchors start further round the wheel; each step then drifts back one degree.
        let start_hue = base_hsl.hue + anchor as f64;
        debug!(
            base = %base,
            anchor,
            shift,
            start_hue,
            steps = self.steps,
            "anchored token scale"
        );

        SCALE_STOPS
            .iter()
            .zip(lightness)
            .zip(&self.calibration.saturation)
            .take(self.steps)
            .enumerate()
            .map(|(i, ((&stop, &l), &s))| {
                let hsl = Hsl::new(
                    normalize_hue(start_hue - i as f64),
                    s,
                    round2(l + shift).clamp(0.0, 100.0),
                );
                let shade = Shade::from_hsl(stop.to_string(), hsl);
                trace!(stop, hex = %shade.hexcode, ?hsl, "token shade");
                shade
            })
            .collect()
    }
}

/// The ten-step generator that scales the base saturation and annotates each
/// shade with contrast ratios.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedShadeStrategy {
    steps: usize,
}

impl Default for AnnotatedShadeStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl AnnotatedShadeStrategy {
    pub fn new() -> Self {
        Self {
            steps: ANNOTATED_STEPS,
        }
    }

    /// Limits output to the first `steps` shades.
    ///
    /// Returns `ScaleError::OutOfRangeStepCount` above 10.
    pub fn with_steps(mut self, steps: usize) -> Result<Self, ScaleError> {
        if steps > ANNOTATED_STEPS {
            return Err(ScaleError::OutOfRangeStepCount {
                requested: steps,
                max: ANNOTATED_STEPS,
            });
        }
        self.steps = steps;
        Ok(self)
    }
}

/// `"50"`, `"150"`, ... `"950"`.
fn annotated_label(index: usize) -> String {
    (50 + index * 100).to_string()
}

impl ScaleStrategy for AnnotatedShadeStrategy {
    fn name(&self) -> &'static str {
        "annotated"
    }

    fn steps(&self) -> usize {
        self.steps
    }

    fn labels(&self) -> Vec<String> {
        (0..self.steps).map(annotated_label).collect()
    }

    fn shades(&self, base: Rgb) -> Vec<Shade> {
        let base_hsl = base.to_hsl();
        debug!(base = %base, ?base_hsl, steps = self.steps, "annotated scale");

        ANNOTATED_LIGHTNESS
            .iter()
            .zip(&ANNOTATED_SATURATION)
            .take(self.steps)
            .enumerate()
            .map(|(i, (&lightness, &pct))| {
                let saturation = base_hsl.saturation * pct / 100.0;
                Shade {
                    name: annotated_label(i),
                    hexcode: hsl_to_hex(base_hsl.hue, saturation, lightness),
                    hsl: Hsl::new(base_hsl.hue, saturation.round(), lightness),
                    cw: None,
                    cb: None,
                }
                .with_contrast()
            })
            .collect()
    }
}

/// A strategy chosen by name.
#[derive(Debug, Clone, PartialEq)]
pub enum StrategyKind {
    Token(TokenScaleStrategy),
    Annotated(AnnotatedShadeStrategy),
}

impl StrategyKind {
    /// Constructs a strategy with its default settings.
    ///
    /// Returns `ScaleError::UnknownStrategy` if the name is not recognized.
    pub fn from_name(name: &str) -> Result<Self, ScaleError> {
        match name {
            "token" => Ok(StrategyKind::Token(TokenScaleStrategy::new())),
            "annotated" => Ok(StrategyKind::Annotated(AnnotatedShadeStrategy::new())),
            _ => Err(ScaleError::UnknownStrategy(name.to_string())),
        }
    }

    pub fn list_names() -> &'static [&'static str] {
        STRATEGY_NAMES
    }

    /// Limits the number of generated shades.
    pub fn with_steps(self, steps: usize) -> Result<Self, ScaleError> {
        Ok(match self {
            StrategyKind::Token(s) => StrategyKind::Token(s.with_steps(steps)?),
            StrategyKind::Annotated(s) => StrategyKind::Annotated(s.with_steps(steps)?),
        })
    }

    fn inner(&self) -> &dyn ScaleStrategy {
        match self {
            StrategyKind::Token(s) => s as &dyn ScaleStrategy,
            StrategyKind::Annotated(s) => s as &dyn ScaleStrategy,
        }
    }
}

impl ScaleStrategy for StrategyKind {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn steps(&self) -> usize {
        self.inner().steps()
    }

    fn labels(&self) -> Vec<String> {
        self.inner().labels()
    }

    fn shades(&self, base: Rgb) -> Vec<Shade> {
        self.inner().shades(base)
    }
}
