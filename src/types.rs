use serde::{Deserialize, Serialize};

/// Line segment in pixel coordinates as produced by the Hough voter.
///
/// Coordinates always lie within the bounds of the edge map the segment was
/// extracted from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl LineSegment {
    /// Euclidean endpoint distance.
    pub fn length(&self) -> f32 {
        let dx = (self.x2 - self.x1) as f32;
        let dy = (self.y2 - self.y1) as f32;
        dx.hypot(dy)
    }

    /// Vertical midpoint `(y1 + y2) / 2`.
    pub fn midpoint_y(&self) -> f32 {
        (self.y1 + self.y2) as f32 * 0.5
    }
}

/// The selected segment extrapolated to the image borders.
///
/// For the usual non-vertical case the endpoints sit at `x = 0` and
/// `x = W - 1`; a vertical segment degenerates to the column `x1` with
/// endpoints at `y = 0` and `y = H - 1`. The y values are intentionally not
/// clamped to the raster, so a steep near-threshold line may exit the
/// visible image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HorizonLine {
    pub x_left: i32,
    pub y_left: i32,
    pub x_right: i32,
    pub y_right: i32,
}

/// Outcome of a single detection call.
///
/// The two empty outcomes are expected results, not errors: they tell the
/// caller which stage failed to find structure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum HorizonDetection {
    /// A horizon was found and extrapolated across the image width.
    Found(HorizonLine),
    /// Edge extraction or Hough voting produced no segments at all.
    NoEdgesOrLines,
    /// Segments were found but none passed the geometric filter.
    NoPlausibleCandidate,
}

impl HorizonDetection {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn horizon(&self) -> Option<&HorizonLine> {
        match self {
            Self::Found(line) => Some(line),
            _ => None,
        }
    }
}

/// Fatal detection errors. Empty outcomes are not errors; see
/// [`HorizonDetection`].
#[derive(Debug, thiserror::Error)]
pub enum DetectError {
    /// The input raster is missing pixels entirely.
    #[error("input raster has zero area ({width}x{height})")]
    InvalidInput { width: usize, height: usize },
}

/// Wall-clock milliseconds spent in each pipeline stage.
#[derive(Clone, Copy, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub luma_ms: f64,
    pub blur_ms: f64,
    pub edges_ms: f64,
    pub hough_ms: f64,
    pub filter_ms: f64,
    pub total_ms: f64,
}

/// Detection result plus per-stage diagnostics.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    pub detection: HorizonDetection,
    pub width: usize,
    pub height: usize,
    /// Number of set pixels in the binary edge map.
    pub edge_pixels: usize,
    /// Segments returned by the Hough voter.
    pub segments: usize,
    /// Segments surviving the geometric filter.
    pub candidates: usize,
    pub timing: TimingBreakdown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_accessors_agree() {
        let line = HorizonLine {
            x_left: 0,
            y_left: 10,
            x_right: 99,
            y_right: 12,
        };
        let found = HorizonDetection::Found(line);
        assert!(found.is_found());
        assert_eq!(found.horizon(), Some(&line));

        for empty in [
            HorizonDetection::NoEdgesOrLines,
            HorizonDetection::NoPlausibleCandidate,
        ] {
            assert!(!empty.is_found());
            assert_eq!(empty.horizon(), None);
        }
    }
}
