//! Overlay rendering for detection results.
//!
//! The detection core returns geometry only; drawing it back onto an image
//! is a collaborator concern, kept here so the demo binary stays thin.
use super::RgbBufferU8;
use crate::types::HorizonLine;

/// Draw a horizon line into `img` with the given color and vertical
/// thickness in pixels.
///
/// The line is rasterized column by column since it spans the full width by
/// construction; the vertical degenerate case strokes a single column.
/// Out-of-bounds rows are skipped, matching the unclamped projector output.
pub fn draw_horizon(img: &mut RgbBufferU8, line: &HorizonLine, color: [u8; 3], thickness: u32) {
    let w = img.width();
    let h = img.height();
    if w == 0 || h == 0 {
        return;
    }
    let half = (thickness.max(1) / 2) as i32;

    if line.x_left == line.x_right {
        let x = line.x_left;
        if x < 0 || x >= w as i32 {
            return;
        }
        for y in 0..h {
            for dx in -half..=half {
                let xi = x + dx;
                if xi >= 0 && (xi as usize) < w {
                    img.set(xi as usize, y, color);
                }
            }
        }
        return;
    }

    let span = (line.x_right - line.x_left) as f32;
    let dy = (line.y_right - line.y_left) as f32;
    for x in 0..w {
        let t = (x as i32 - line.x_left) as f32 / span;
        let y = (line.y_left as f32 + t * dy).round() as i32;
        for off in -half..=half {
            let yi = y + off;
            if yi >= 0 && (yi as usize) < h {
                img.set(x, yi as usize, color);
            }
        }
    }
}
