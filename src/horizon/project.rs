//! Extrapolation of the selected segment to the image borders.
use crate::types::{HorizonLine, LineSegment};
use nalgebra::Vector3;

/// Normalized line through the segment in the form `ax + by + c = 0`
/// with `sqrt(a^2 + b^2) = 1`.
pub fn line_form(seg: &LineSegment) -> Vector3<f32> {
    let a = (seg.y2 - seg.y1) as f32;
    let b = (seg.x1 - seg.x2) as f32;
    let c = (seg.x2 * seg.y1 - seg.x1 * seg.y2) as f32;
    let norm = (a * a + b * b).sqrt();
    Vector3::new(a / norm, b / norm, c / norm)
}

/// Extrapolate the segment's line to span the full image width.
///
/// A vertical segment degenerates to the column `x1` spanning the full
/// height. The computed y values are deliberately not clamped to `[0, H)`;
/// steep near-threshold lines may exit the visible image and callers are
/// expected to cope.
pub fn project_to_bounds(seg: &LineSegment, width: usize, height: usize) -> HorizonLine {
    if seg.x1 == seg.x2 {
        return HorizonLine {
            x_left: seg.x1,
            y_left: 0,
            x_right: seg.x1,
            y_right: height as i32 - 1,
        };
    }
    let line = line_form(seg);
    let x_right = width as i32 - 1;
    // y(x) = -(a*x + c) / b
    let y_at = |x: f32| -(line.x * x + line.z) / line.y;
    HorizonLine {
        x_left: 0,
        y_left: y_at(0.0).round() as i32,
        x_right,
        y_right: y_at(x_right as f32).round() as i32,
    }
}
