//! Angle utilities shared by the candidate filter and tests.

/// Unsigned angle from horizontal in degrees, folded into [0, 90].
///
/// Computed as `|atan2(dy, dx)|` with angles above 90° reflected via
/// `180 - angle`. A vertical displacement (`dx == 0`) maps to exactly 90°.
#[inline]
pub fn fold_to_horizontal_deg(dx: f32, dy: f32) -> f32 {
    if dx == 0.0 {
        return 90.0;
    }
    let deg = dy.atan2(dx).abs().to_degrees();
    if deg > 90.0 {
        180.0 - deg
    } else {
        deg
    }
}
