//! Error types for tintscale.

use thiserror::Error;

/// Errors produced by color parsing and scale generation.
#[derive(Debug, Error)]
pub enum ScaleError {
    /// The input was not `#` followed by exactly six hexadecimal digits.
    #[error("invalid hex color: {0}")]
    InvalidHexFormat(String),

    /// More steps were requested than the calibration table holds.
    #[error("step count {requested} out of range: at most {max} steps are calibrated")]
    OutOfRangeStepCount { requested: usize, max: usize },

    /// A calibration table held a non-finite or out-of-range percentage.
    #[error("invalid calibration: {0}")]
    InvalidCalibration(String),

    /// A strategy name was not recognized.
    #[error("unknown strategy: {0}")]
    UnknownStrategy(String),

    /// An export format name was not recognized.
    #[error("unknown export format: {0}")]
    UnknownFormat(String),

    /// JSON output could not be produced.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
