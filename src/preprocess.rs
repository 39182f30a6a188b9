//! Preprocessing: luminance conversion and Gaussian smoothing.
//!
//! Converts an interleaved RGB raster to a single-channel intensity raster
//! on the 0..255 scale (BT.601 luma weights), then applies one separable
//! Gaussian blur pass to suppress high-frequency noise that would otherwise
//! produce spurious edges. Borders are handled by clamping (replicate).
use crate::image::{ImageF32, RgbU8};
use serde::{Deserialize, Serialize};

/// Gaussian smoothing parameters.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct BlurOptions {
    /// Odd kernel width in pixels.
    pub kernel_size: usize,
    /// Standard deviation; values <= 0 derive sigma from the kernel size
    /// as `0.3 * ((k - 1) / 2 - 1) + 0.8`.
    pub sigma: f32,
}

impl Default for BlurOptions {
    fn default() -> Self {
        Self {
            kernel_size: 5,
            sigma: 0.0,
        }
    }
}

/// Convert interleaved RGB to luma, output values in [0, 255].
pub fn rgb_to_luma(rgb: RgbU8) -> ImageF32 {
    let mut out = ImageF32::new(rgb.w, rgb.h);
    for y in 0..rgb.h {
        let src = rgb.row(y);
        let dst = out.row_mut(y);
        for (x, px) in src.chunks_exact(3).enumerate() {
            dst[x] = 0.299 * px[0] as f32 + 0.587 * px[1] as f32 + 0.114 * px[2] as f32;
        }
    }
    out
}

/// Apply one separable Gaussian blur pass.
pub fn gaussian_blur(src: &ImageF32, opts: &BlurOptions) -> ImageF32 {
    let kernel = gaussian_kernel(opts.kernel_size, opts.sigma);
    let half = kernel.len() / 2;
    let w = src.w;
    let h = src.h;
    let mut tmp = ImageF32::new(w, h);
    let mut out = ImageF32::new(w, h);
    if w == 0 || h == 0 {
        return out;
    }

    // horizontal
    for y in 0..h {
        let row = src.row(y);
        let dst = tmp.row_mut(y);
        for x in 0..w {
            let mut acc = 0.0;
            for (k, &coeff) in kernel.iter().enumerate() {
                let xi = (x + k).saturating_sub(half).min(w - 1);
                acc += row[xi] * coeff;
            }
            dst[x] = acc;
        }
    }
    // vertical
    for y in 0..h {
        for x in 0..w {
            let mut acc = 0.0;
            for (k, &coeff) in kernel.iter().enumerate() {
                let yi = (y + k).saturating_sub(half).min(h - 1);
                acc += tmp.get(x, yi) * coeff;
            }
            out.set(x, y, acc);
        }
    }
    out
}

fn gaussian_kernel(kernel_size: usize, sigma: f32) -> Vec<f32> {
    let ksize = if kernel_size % 2 == 0 {
        kernel_size + 1
    } else {
        kernel_size.max(1)
    };
    let sigma = if sigma > 0.0 {
        sigma
    } else {
        0.3 * ((ksize - 1) as f32 * 0.5 - 1.0) + 0.8
    };
    let half = (ksize / 2) as isize;
    let inv_two_sigma_sq = 1.0 / (2.0 * sigma * sigma);
    let mut kernel: Vec<f32> = (-half..=half)
        .map(|i| (-(i * i) as f32 * inv_two_sigma_sq).exp())
        .collect();
    let sum: f32 = kernel.iter().sum();
    for v in &mut kernel {
        *v /= sum;
    }
    kernel
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kernel_is_normalized_and_symmetric() {
        let k = gaussian_kernel(5, 0.0);
        assert_eq!(k.len(), 5);
        let sum: f32 = k.iter().sum();
        assert!((sum - 1.0).abs() < 1e-5, "kernel sum {sum}");
        assert!((k[0] - k[4]).abs() < 1e-6);
        assert!((k[1] - k[3]).abs() < 1e-6);
        assert!(k[2] > k[1] && k[1] > k[0]);
    }

    #[test]
    fn even_kernel_size_is_promoted_to_odd() {
        assert_eq!(gaussian_kernel(4, 0.0).len(), 5);
    }

    #[test]
    fn flat_image_is_unchanged() {
        let mut img = ImageF32::new(16, 12);
        img.data.fill(120.0);
        let blurred = gaussian_blur(&img, &BlurOptions::default());
        for &v in &blurred.data {
            assert!((v - 120.0).abs() < 1e-3, "flat image changed: {v}");
        }
    }

    #[test]
    fn blur_softens_a_step() {
        let mut img = ImageF32::new(32, 8);
        for y in 0..8 {
            for x in 16..32 {
                img.set(x, y, 255.0);
            }
        }
        let blurred = gaussian_blur(&img, &BlurOptions::default());
        let at_step = blurred.get(16, 4);
        assert!(
            at_step > 0.0 && at_step < 255.0,
            "step should be smoothed, got {at_step}"
        );
        // Far from the step the image is untouched.
        assert!((blurred.get(2, 4) - 0.0).abs() < 1e-2);
        assert!((blurred.get(29, 4) - 255.0).abs() < 1e-2);
    }

    #[test]
    fn luma_uses_bt601_weights() {
        let data = vec![255u8, 0, 0, 0, 255, 0, 0, 0, 255];
        let rgb = RgbU8 {
            w: 3,
            h: 1,
            stride: 9,
            data: &data,
        };
        let luma = rgb_to_luma(rgb);
        assert!((luma.get(0, 0) - 0.299 * 255.0).abs() < 1e-3);
        assert!((luma.get(1, 0) - 0.587 * 255.0).abs() < 1e-3);
        assert!((luma.get(2, 0) - 0.114 * 255.0).abs() < 1e-3);
    }
}
