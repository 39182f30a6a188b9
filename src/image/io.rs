//! I/O helpers for RGB rasters and JSON reports.
//!
//! - `load_rgb_image`: decode a PNG/JPEG/BMP/TIFF file into an owned RGB
//!   buffer.
//! - `RgbBufferU8::save_png`: write an owned buffer back to disk.
//! - `write_json_file`: pretty-print a serializable value to disk.
//!
//! Decoding failures are surfaced here and never reach the detection core,
//! which only consumes in-memory rasters.
use super::RgbU8;
use image::{ImageBuffer, Rgb, RgbImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Owned interleaved RGB buffer with borrowed view conversion.
#[derive(Clone, Debug)]
pub struct RgbBufferU8 {
    width: usize,
    height: usize,
    stride: usize,
    data: Vec<u8>,
}

impl RgbBufferU8 {
    /// Construct an owned buffer from raw interleaved RGB bytes
    /// (`3 * width * height` of them).
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        let stride = width * 3;
        Self {
            width,
            height,
            stride,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Borrow as a read-only [`RgbU8`] view.
    pub fn as_view(&self) -> RgbU8<'_> {
        RgbU8 {
            w: self.width,
            h: self.height,
            stride: self.stride,
            data: &self.data,
        }
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, px: [u8; 3]) {
        let i = y * self.stride + x * 3;
        self.data[i..i + 3].copy_from_slice(&px);
    }

    /// Save the buffer as a PNG.
    pub fn save_png(&self, path: &Path) -> Result<(), String> {
        ensure_parent_dir(path)?;
        let img: ImageBuffer<Rgb<u8>, Vec<u8>> =
            RgbImage::from_raw(self.width as u32, self.height as u32, self.data.clone())
                .ok_or_else(|| "Failed to create image buffer".to_string())?;
        img.save(path)
            .map_err(|e| format!("Failed to save {}: {e}", path.display()))
    }
}

/// Load an image from disk and convert to interleaved 8-bit RGB.
pub fn load_rgb_image(path: &Path) -> Result<RgbBufferU8, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgb8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img.into_raw();
    Ok(RgbBufferU8::new(width, height, data))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
