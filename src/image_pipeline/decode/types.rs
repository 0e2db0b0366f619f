//! Decoded image types

use crate::image_pipeline::common::error::{PipelineError, Result};

/// Number of bytes per RGBA pixel.
pub const RGBA_CHANNELS: usize = 4;

/// Row-major, 8-bit-per-channel RGBA image.
///
/// Every source encoding is normalised into this layout before it reaches
/// the luminance converter. Alpha is carried but never consulted downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaImage {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// Interleaved pixel data [R, G, B, A, R, G, B, A, ...]
    pub data: Vec<u8>,
}

impl RgbaImage {
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        if data.len() != width * height * RGBA_CHANNELS {
            return Err(PipelineError::InvalidDimensions(width, height));
        }
        Ok(Self { width, height, data })
    }

    /// Builds an image by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: usize, height: usize, f: impl Fn(usize, usize) -> [u8; 4]) -> Self {
        let mut data = Vec::with_capacity(width * height * RGBA_CHANNELS);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y));
            }
        }
        Self { width, height, data }
    }

    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let i = (y * self.width + x) * RGBA_CHANNELS;
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact((self.width * RGBA_CHANNELS).max(1))
    }

    pub fn pixels(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(RGBA_CHANNELS)
    }
}
