//! Synthetic RGB rasters for end-to-end tests.
//!
//! All generators paint a bright "sky" region over a dark "ground" region
//! with a single 150-valued transition row on the boundary. The transition
//! row keeps the blurred gradient profile asymmetric, so non-maximum
//! suppression has a unique magnitude peak to keep; a perfectly symmetric
//! hard step would tie its two center rows and thin to nothing.

const SKY: u8 = 210;
const BOUNDARY: u8 = 150;
const GROUND: u8 = 40;

fn fill_px(data: &mut [u8], width: usize, x: usize, y: usize, v: u8) {
    let i = (y * width + x) * 3;
    data[i] = v;
    data[i + 1] = v;
    data[i + 2] = v;
}

/// Sky over ground with a boundary running from `(0, y_left)` to
/// `(width - 1, y_right)`.
pub fn sky_ground_rgb(width: usize, height: usize, y_left: usize, y_right: usize) -> Vec<u8> {
    assert!(width > 1 && height > 0, "image dimensions must be positive");
    let mut data = vec![0u8; width * height * 3];
    let dy = y_right as f32 - y_left as f32;
    for x in 0..width {
        let t = x as f32 / (width - 1) as f32;
        let yb = (y_left as f32 + t * dy).round() as usize;
        for y in 0..height {
            let v = match y.cmp(&yb) {
                std::cmp::Ordering::Less => SKY,
                std::cmp::Ordering::Equal => BOUNDARY,
                std::cmp::Ordering::Greater => GROUND,
            };
            fill_px(&mut data, width, x, y, v);
        }
    }
    data
}

/// Sky / ground / sky: two full-width horizontal boundaries of equal
/// strength and equal length, for tie-break tests.
pub fn double_boundary_rgb(width: usize, height: usize, y_a: usize, y_b: usize) -> Vec<u8> {
    assert!(y_a < y_b && y_b < height);
    let mut data = vec![0u8; width * height * 3];
    for x in 0..width {
        for y in 0..height {
            let v = if y == y_a || y == y_b {
                BOUNDARY
            } else if y < y_a || y > y_b {
                SKY
            } else {
                GROUND
            };
            fill_px(&mut data, width, x, y, v);
        }
    }
    data
}

/// Uniform raster with the given gray value.
pub fn flat_rgb(width: usize, height: usize, value: u8) -> Vec<u8> {
    vec![value; width * height * 3]
}
