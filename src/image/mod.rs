//! Raster types used across the pipeline.
//!
//! The core works on two representations:
//!
//! - [`RgbU8`], a borrowed interleaved-RGB view over caller-owned bytes.
//!   Decoding file formats into this shape is the collaborator's job
//!   (see [`io`]).
//! - [`ImageF32`], an owned single-channel float raster used by the
//!   smoothing and gradient stages. Intensity values live on the 0..255
//!   scale so the Canny thresholds keep their 8-bit meaning.
//!
//! Each stage produces a fresh raster rather than mutating its input.

pub mod f32;
pub mod io;
pub mod render;
pub mod rgb;

pub use self::f32::ImageF32;
pub use self::io::RgbBufferU8;
pub use self::rgb::RgbU8;
