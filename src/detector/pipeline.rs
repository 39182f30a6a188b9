//! The end-to-end horizon detection pipeline.
//!
//! Typical usage:
//! ```no_run
//! use horizon_detector::{HorizonDetector, HorizonParams};
//! use horizon_detector::image::RgbU8;
//!
//! # fn example(rgb: RgbU8) {
//! let detector = HorizonDetector::new(HorizonParams::default());
//! match detector.detect(rgb) {
//!     Ok(detection) => println!("{detection:?}"),
//!     Err(err) => eprintln!("{err}"),
//! }
//! # }
//! ```
use super::params::HorizonParams;
use crate::edges::detect_edges;
use crate::horizon::{filter_candidates, project_to_bounds, select_longest};
use crate::hough::detect_segments;
use crate::image::RgbU8;
use crate::preprocess::{gaussian_blur, rgb_to_luma};
use crate::types::{DetectError, DetectionReport, HorizonDetection, TimingBreakdown};
use log::debug;
use std::time::Instant;

/// Stateless orchestrator for the six-stage pipeline.
pub struct HorizonDetector {
    params: HorizonParams,
}

impl HorizonDetector {
    pub fn new(params: HorizonParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &HorizonParams {
        &self.params
    }

    /// Run the detector, returning only the detection outcome.
    pub fn detect(&self, rgb: RgbU8) -> Result<HorizonDetection, DetectError> {
        self.detect_with_diagnostics(rgb).map(|r| r.detection)
    }

    /// Run the detector and collect per-stage counters and timings.
    pub fn detect_with_diagnostics(&self, rgb: RgbU8) -> Result<DetectionReport, DetectError> {
        let (width, height) = (rgb.w, rgb.h);
        if width == 0 || height == 0 {
            return Err(DetectError::InvalidInput { width, height });
        }
        debug!("HorizonDetector::detect start w={width} h={height}");
        let total_start = Instant::now();
        let mut timing = TimingBreakdown::default();

        let luma_start = Instant::now();
        let luma = rgb_to_luma(rgb);
        timing.luma_ms = luma_start.elapsed().as_secs_f64() * 1000.0;

        // Exactly one smoothing pass per call.
        let blur_start = Instant::now();
        let smoothed = gaussian_blur(&luma, &self.params.blur);
        timing.blur_ms = blur_start.elapsed().as_secs_f64() * 1000.0;

        let edges_start = Instant::now();
        let edges = detect_edges(&smoothed, &self.params.canny);
        timing.edges_ms = edges_start.elapsed().as_secs_f64() * 1000.0;
        let edge_pixels = edges.count();
        debug!("edge extraction: {edge_pixels} pixels");

        let hough_start = Instant::now();
        let segments = detect_segments(&edges, &self.params.hough);
        timing.hough_ms = hough_start.elapsed().as_secs_f64() * 1000.0;
        debug!("hough voting: {} segments", segments.len());

        let filter_start = Instant::now();
        let candidates = filter_candidates(&segments, height, &self.params.filter);
        timing.filter_ms = filter_start.elapsed().as_secs_f64() * 1000.0;
        debug!("candidate filter: {} kept", candidates.len());

        let detection = if segments.is_empty() {
            HorizonDetection::NoEdgesOrLines
        } else {
            match select_longest(&candidates) {
                Some(best) => {
                    let line = project_to_bounds(&best, width, height);
                    debug!(
                        "horizon: ({}, {}) -> ({}, {})",
                        line.x_left, line.y_left, line.x_right, line.y_right
                    );
                    HorizonDetection::Found(line)
                }
                None => HorizonDetection::NoPlausibleCandidate,
            }
        };

        timing.total_ms = total_start.elapsed().as_secs_f64() * 1000.0;
        Ok(DetectionReport {
            detection,
            width,
            height,
            edge_pixels,
            segments: segments.len(),
            candidates: candidates.len(),
            timing,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ImageF32;

    fn horizon_rgb(width: usize, height: usize, split_y: usize) -> Vec<u8> {
        let mut data = vec![0u8; width * height * 3];
        for y in 0..height {
            // A transition row keeps the blurred gradient peak unique.
            let v = if y < split_y {
                210
            } else if y == split_y {
                150
            } else {
                40
            };
            for x in 0..width {
                let i = (y * width + x) * 3;
                data[i..i + 3].copy_from_slice(&[v, v, v]);
            }
        }
        data
    }

    #[test]
    fn zero_area_input_is_invalid() {
        let detector = HorizonDetector::new(HorizonParams::default());
        let empty = RgbU8 {
            w: 0,
            h: 0,
            stride: 0,
            data: &[],
        };
        assert!(matches!(
            detector.detect(empty),
            Err(DetectError::InvalidInput { .. })
        ));
    }

    #[test]
    fn pipeline_composes_each_stage_exactly_once() {
        // Running the stages by hand must reproduce the detector output,
        // which pins down the stage sequence (including a single blur).
        let (w, h) = (320usize, 160usize);
        let data = horizon_rgb(w, h, 80);
        let rgb = RgbU8 {
            w,
            h,
            stride: w * 3,
            data: &data,
        };
        let params = HorizonParams::default();

        let smoothed: ImageF32 = gaussian_blur(&rgb_to_luma(rgb), &params.blur);
        let edges = detect_edges(&smoothed, &params.canny);
        let segments = detect_segments(&edges, &params.hough);
        let candidates = filter_candidates(&segments, h, &params.filter);
        let expected = match select_longest(&candidates) {
            Some(best) => HorizonDetection::Found(project_to_bounds(&best, w, h)),
            None if segments.is_empty() => HorizonDetection::NoEdgesOrLines,
            None => HorizonDetection::NoPlausibleCandidate,
        };

        let detector = HorizonDetector::new(params);
        let report = detector.detect_with_diagnostics(rgb).expect("valid input");
        assert_eq!(report.detection, expected);
        assert_eq!(report.edge_pixels, edges.count());
        assert_eq!(report.segments, segments.len());
        assert_eq!(report.candidates, candidates.len());
    }
}
