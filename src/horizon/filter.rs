//! Geometric plausibility filter for horizon candidates.
use crate::angle::fold_to_horizontal_deg;
use crate::types::LineSegment;
use serde::{Deserialize, Serialize};

/// Orientation and vertical-band constraints.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterOptions {
    /// Maximum angle from horizontal in degrees.
    pub max_angle_deg: f32,
    /// Lower bound of the accepted vertical band, as a fraction of height.
    pub band_low_frac: f32,
    /// Upper bound of the accepted vertical band, as a fraction of height.
    pub band_high_frac: f32,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            max_angle_deg: 10.0,
            band_low_frac: 0.25,
            band_high_frac: 0.75,
        }
    }
}

/// Keep segments that are nearly horizontal and vertically centered.
///
/// Both constraints must hold. Input order is preserved so downstream
/// tie-breaks stay stable.
pub fn filter_candidates(
    segments: &[LineSegment],
    height: usize,
    opts: &FilterOptions,
) -> Vec<LineSegment> {
    segments
        .iter()
        .filter(|seg| is_plausible(seg, height, opts))
        .copied()
        .collect()
}

fn is_plausible(seg: &LineSegment, height: usize, opts: &FilterOptions) -> bool {
    let angle = fold_to_horizontal_deg((seg.x2 - seg.x1) as f32, (seg.y2 - seg.y1) as f32);
    if angle > opts.max_angle_deg {
        return false;
    }
    let mid_y = seg.midpoint_y();
    let h = height as f32;
    mid_y >= opts.band_low_frac * h && mid_y <= opts.band_high_frac * h
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(x1: i32, y1: i32, x2: i32, y2: i32) -> LineSegment {
        LineSegment { x1, y1, x2, y2 }
    }

    #[test]
    fn shallow_centered_segment_passes() {
        let kept = filter_candidates(&[seg(0, 100, 399, 105)], 200, &FilterOptions::default());
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn forty_five_degree_segment_is_rejected() {
        let kept = filter_candidates(&[seg(0, 0, 100, 100)], 200, &FilterOptions::default());
        assert!(kept.is_empty());
    }

    #[test]
    fn vertical_segment_is_rejected() {
        let kept = filter_candidates(&[seg(50, 60, 50, 140)], 200, &FilterOptions::default());
        assert!(kept.is_empty());
    }

    #[test]
    fn top_band_segment_is_rejected_centered_twin_passes() {
        let opts = FilterOptions::default();
        let top = seg(0, 10, 399, 10); // 0.05 * H for H = 200
        let mid = seg(0, 100, 399, 100);
        assert!(filter_candidates(&[top], 200, &opts).is_empty());
        assert_eq!(filter_candidates(&[mid], 200, &opts).len(), 1);
    }

    #[test]
    fn band_bounds_are_inclusive() {
        let opts = FilterOptions::default();
        assert_eq!(
            filter_candidates(&[seg(0, 50, 399, 50)], 200, &opts).len(),
            1,
            "0.25 * H is inside the band"
        );
        assert_eq!(
            filter_candidates(&[seg(0, 150, 399, 150)], 200, &opts).len(),
            1,
            "0.75 * H is inside the band"
        );
        assert!(filter_candidates(&[seg(0, 151, 399, 151)], 200, &opts).is_empty());
    }

    #[test]
    fn order_is_preserved() {
        let a = seg(0, 100, 100, 100);
        let b = seg(0, 120, 100, 120);
        let kept = filter_candidates(&[a, b], 200, &FilterOptions::default());
        assert_eq!(kept, vec![a, b]);
    }
}
