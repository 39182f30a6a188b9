#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod detector;
pub mod image;
pub mod types;

// Stage-level modules – public for tooling and tuning, but the detector is
// the intended entry point.
pub mod angle;
pub mod config;
pub mod edges;
pub mod horizon;
pub mod hough;
pub mod preprocess;

// --- High-level re-exports -------------------------------------------------

pub use crate::detector::{detect_horizon, HorizonDetector, HorizonParams};
pub use crate::types::{DetectError, DetectionReport, HorizonDetection, HorizonLine, LineSegment};

#[cfg(feature = "parallel")]
pub use crate::detector::detect_horizon_batch;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
pub mod prelude {
    pub use crate::image::RgbU8;
    pub use crate::{HorizonDetection, HorizonDetector, HorizonLine, HorizonParams};
}
