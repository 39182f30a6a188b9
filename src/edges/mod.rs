//! Canny-style edge extraction.
//!
//! Three passes over the smoothed intensity raster:
//!
//! - Sobel gradients giving per-pixel `gx`, `gy` and magnitude ([`grad`]).
//! - Non-maximum suppression along the quantized gradient direction,
//!   thinning ridges to one pixel ([`nms`]).
//! - Two-threshold hysteresis: pixels above the high threshold are definite
//!   edges; pixels above the low threshold survive only when 8-connected to
//!   a definite edge ([`hysteresis`]).
//!
//! The output is a binary [`EdgeMap`]; an all-zero map is a valid result
//! for featureless inputs, not an error.

pub mod grad;
pub mod hysteresis;
pub mod nms;

pub use grad::{sobel_gradients, Grad};

use crate::image::ImageF32;
use serde::{Deserialize, Serialize};

/// Hysteresis thresholds on the 8-bit gradient magnitude scale.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CannyOptions {
    pub low_threshold: f32,
    pub high_threshold: f32,
}

impl Default for CannyOptions {
    fn default() -> Self {
        Self {
            low_threshold: 50.0,
            high_threshold: 150.0,
        }
    }
}

/// Binary edge mask, values in {0, 1}, row-major with `stride == w`.
#[derive(Clone, Debug)]
pub struct EdgeMap {
    pub w: usize,
    pub h: usize,
    pub data: Vec<u8>,
}

impl EdgeMap {
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0u8; w * h],
        }
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.data[self.idx(x, y)] != 0
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize) {
        let i = self.idx(x, y);
        self.data[i] = 1;
    }

    /// Number of set pixels.
    pub fn count(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }
}

/// Run the full edge extraction on a smoothed intensity raster.
pub fn detect_edges(l: &ImageF32, opts: &CannyOptions) -> EdgeMap {
    let grad = sobel_gradients(l);
    let thin = nms::suppress_non_maxima(&grad, opts.low_threshold);
    hysteresis::link_edges(&thin, opts.low_threshold, opts.high_threshold)
}
