//! Parameter types configuring the detector stages.
//!
//! Defaults reproduce the classic recipe: 5×5 Gaussian, Canny 50/150,
//! Hough vote threshold 50 with a minimum segment length of a quarter of
//! the image width and a 20 px merge gap, and a horizon filter accepting
//! up to 10° of tilt inside the central half of the image.
use crate::edges::CannyOptions;
use crate::horizon::FilterOptions;
use crate::hough::HoughOptions;
use crate::preprocess::BlurOptions;
use serde::{Deserialize, Serialize};

/// Detector-wide parameters; every tunable constant of the pipeline lives
/// here rather than being hard-coded in a stage.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HorizonParams {
    /// Gaussian smoothing applied once before edge extraction.
    pub blur: BlurOptions,
    /// Hysteresis thresholds for the Canny-style edge extractor.
    pub canny: CannyOptions,
    /// Probabilistic Hough voting and acceptance parameters.
    pub hough: HoughOptions,
    /// Horizon plausibility constraints.
    pub filter: FilterOptions,
}
