//! Detection pipeline orchestration.
//!
//! [`HorizonDetector`] wires the stages together: preprocessing, edge
//! extraction, Hough voting, candidate filtering, selection and projection.
//! The detector is stateless across calls; every invocation works on its
//! own rasters, so a batch of images can be processed with one worker per
//! image and no synchronization (see [`detect_horizon_batch`]).
//!
//! - [`params`] – configuration types grouping every tunable constant.
//! - `pipeline` – the [`HorizonDetector`] implementation.

pub mod params;
mod pipeline;

pub use params::HorizonParams;
pub use pipeline::HorizonDetector;

use crate::image::RgbU8;
use crate::types::{DetectError, HorizonDetection};

/// Run the pipeline with default parameters.
pub fn detect_horizon(rgb: RgbU8) -> Result<HorizonDetection, DetectError> {
    HorizonDetector::new(HorizonParams::default()).detect(rgb)
}

/// Process a batch of images, one rayon worker per image.
///
/// Results come back in input order. Stage-internal work stays
/// single-threaded; per-image cost is dominated by two bounded array
/// passes, so whole-image granularity is the right split.
#[cfg(feature = "parallel")]
pub fn detect_horizon_batch(
    images: &[RgbU8<'_>],
    params: &HorizonParams,
) -> Vec<Result<HorizonDetection, DetectError>> {
    use rayon::prelude::*;

    let detector = HorizonDetector::new(params.clone());
    images.par_iter().map(|img| detector.detect(*img)).collect()
}
