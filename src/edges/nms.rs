//! Non-maximum suppression on gradient magnitude with direction alignment.
//!
//! For each pixel the gradient direction is quantized into 4 bins (0°, 45°,
//! 90°, 135°) and the magnitude is kept only when it is strictly greater
//! than both neighbors along that direction. The outermost 1-pixel frame is
//! ignored to avoid bounds checks in the neighbor lookup.
use super::grad::Grad;
use crate::image::ImageF32;

const TAN_22_5_DEG: f32 = 0.41421356237;

/// Thin gradient ridges to one pixel, zeroing everything else.
///
/// `mag_floor` skips pixels that could never pass the hysteresis low
/// threshold, keeping the output magnitudes intact for thresholding.
pub fn suppress_non_maxima(grad: &Grad, mag_floor: f32) -> ImageF32 {
    let w = grad.gx.w;
    let h = grad.gx.h;
    let mut thin = ImageF32::new(w, h);
    if w < 3 || h < 3 {
        return thin;
    }

    for y in 1..h - 1 {
        let mag_prev = grad.mag.row(y - 1);
        let mag_row = grad.mag.row(y);
        let mag_next = grad.mag.row(y + 1);
        let gx_row = grad.gx.row(y);
        let gy_row = grad.gy.row(y);

        for x in 1..w - 1 {
            let mag = mag_row[x];
            if mag < mag_floor {
                continue;
            }

            let gx = gx_row[x];
            let gy = gy_row[x];
            let abs_gx = gx.abs();
            let abs_gy = gy.abs();
            let same_sign = (gx >= 0.0 && gy >= 0.0) || (gx <= 0.0 && gy <= 0.0);

            // Diagonal gradients with matching signs point SE/NW, so the
            // across-edge neighbors are (x-1, y-1) and (x+1, y+1);
            // mismatched signs point NE/SW and use the other diagonal.
            let (neighbor1, neighbor2) = if abs_gx >= abs_gy {
                if abs_gy <= abs_gx * TAN_22_5_DEG {
                    (mag_row[x - 1], mag_row[x + 1])
                } else if same_sign {
                    (mag_prev[x - 1], mag_next[x + 1])
                } else {
                    (mag_prev[x + 1], mag_next[x - 1])
                }
            } else if abs_gx <= abs_gy * TAN_22_5_DEG {
                (mag_prev[x], mag_next[x])
            } else if same_sign {
                (mag_prev[x - 1], mag_next[x + 1])
            } else {
                (mag_prev[x + 1], mag_next[x - 1])
            };

            if mag <= neighbor1 || mag <= neighbor2 {
                continue;
            }

            thin.set(x, y, mag);
        }
    }

    thin
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edges::sobel_gradients;

    #[test]
    fn ridge_survives_and_shoulders_do_not() {
        // A smooth horizontal step: gradient magnitude peaks on one row.
        let mut img = ImageF32::new(16, 16);
        for y in 0..16 {
            let v = match y {
                0..=6 => 0.0,
                7 => 60.0,
                8 => 200.0,
                _ => 255.0,
            };
            for x in 0..16 {
                img.set(x, y, v);
            }
        }
        let grad = sobel_gradients(&img);
        let thin = suppress_non_maxima(&grad, 1.0);
        for x in 2..14 {
            let kept: Vec<usize> = (1..15).filter(|&y| thin.get(x, y) > 0.0).collect();
            assert_eq!(kept.len(), 1, "column {x} kept rows {kept:?}");
        }
    }

    #[test]
    fn small_images_produce_empty_output() {
        let grad = sobel_gradients(&ImageF32::new(2, 2));
        let thin = suppress_non_maxima(&grad, 0.0);
        assert!(thin.data.iter().all(|&v| v == 0.0));
    }
}
