//! Probabilistic Hough transform over a binary edge map.
//!
//! Lines are parameterized by `(rho, theta)` with `rho = x·cosθ + y·sinθ`,
//! discretized at 1 px / 1° by default. Edge pixels are processed in a
//! seeded pseudo-random permutation; each pixel votes across all θ bins,
//! and once its peak bin reaches the vote threshold the peak line is walked
//! through the edge map in both directions, tolerating bounded gaps, to
//! extract a contiguous segment. Walked pixels are consumed so they never
//! vote again.
//!
//! The explicit seed makes extraction order, and therefore downstream
//! tie-breaks, fully reproducible.

mod accumulator;
mod extract;

use crate::edges::EdgeMap;
use crate::types::LineSegment;
use serde::{Deserialize, Serialize};

/// Voting and segment acceptance parameters.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct HoughOptions {
    /// Distance resolution of the accumulator in pixels.
    pub rho_res_px: f32,
    /// Angle resolution of the accumulator in degrees.
    pub theta_res_deg: f32,
    /// Accumulator peak required before a segment walk starts.
    pub vote_threshold: i32,
    /// Minimum accepted segment extent as a fraction of the image width.
    pub min_length_frac: f32,
    /// Maximum run of missing pixels bridged while walking a line.
    pub max_gap_px: i32,
    /// Seed for the edge-pixel processing permutation.
    pub seed: u64,
}

impl Default for HoughOptions {
    fn default() -> Self {
        Self {
            rho_res_px: 1.0,
            theta_res_deg: 1.0,
            vote_threshold: 50,
            min_length_frac: 0.25,
            max_gap_px: 20,
            seed: 0,
        }
    }
}

/// Extract line segments from the edge map.
///
/// Returns an empty vector when no segment satisfies the length constraint;
/// that is the defined "no lines" signal, not an error.
pub fn detect_segments(edges: &EdgeMap, opts: &HoughOptions) -> Vec<LineSegment> {
    extract::extract_segments(edges, opts)
}
