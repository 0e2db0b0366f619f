//! PNG reader implementation using the png library.
//!
//! Every legal PNG colour type and bit depth is mapped onto [`RgbaImage`]:
//! 16-bit samples are stripped to 8 bits, palettes and sub-byte grayscale are
//! expanded, `tRNS` chunks become an alpha channel, grayscale is replicated
//! into R, G and B, and sources without alpha get a fully opaque channel.

use std::io::Cursor;

use png::{BitDepth, ColorType, Transformations};
use tracing::debug;

use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::decode::reader::ImageReader;
use crate::image_pipeline::decode::types::{RGBA_CHANNELS, RgbaImage};

/// Alpha assigned to every pixel of a source that has no alpha channel.
const OPAQUE: u8 = 0xFF;

pub struct PngReader;

impl ImageReader for PngReader {
    fn read_image(&self, data: &[u8]) -> Result<RgbaImage> {
        debug!("Decoding PNG image, {} bytes", data.len());

        let mut decoder = png::Decoder::new(Cursor::new(data));
        decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
        let mut reader = decoder
            .read_info()
            .map_err(|e| PipelineError::DecodeError(e.to_string()))?;

        let mut buf = vec![0u8; reader.output_buffer_size()];
        let frame = reader
            .next_frame(&mut buf)
            .map_err(|e| PipelineError::DecodeError(e.to_string()))?;

        let width = frame.width as usize;
        let height = frame.height as usize;
        if width == 0 || height == 0 {
            return Err(PipelineError::InvalidDimensions(width, height));
        }
        if frame.bit_depth != BitDepth::Eight {
            return Err(PipelineError::UnsupportedFormat(format!(
                "{:?} bit depth after expansion",
                frame.bit_depth
            )));
        }

        debug!(
            "Decoded image: {}x{} {:?}, {} bytes per line",
            width, height, frame.color_type, frame.line_size
        );

        let mut rgba = Vec::with_capacity(width * height * RGBA_CHANNELS);
        for row in buf[..frame.buffer_size()].chunks_exact(frame.line_size) {
            expand_row(frame.color_type, &row[..width * frame.color_type.samples()], &mut rgba)?;
        }

        RgbaImage::from_raw(width, height, rgba)
    }
}

/// Appends one 8-bit decoded row to `out` as RGBA.
fn expand_row(color_type: ColorType, row: &[u8], out: &mut Vec<u8>) -> Result<()> {
    match color_type {
        ColorType::Rgba => out.extend_from_slice(row),
        ColorType::Rgb => {
            for px in row.chunks_exact(3) {
                out.extend_from_slice(&[px[0], px[1], px[2], OPAQUE]);
            }
        }
        ColorType::GrayscaleAlpha => {
            for px in row.chunks_exact(2) {
                out.extend_from_slice(&[px[0], px[0], px[0], px[1]]);
            }
        }
        ColorType::Grayscale => {
            for &g in row {
                out.extend_from_slice(&[g, g, g, OPAQUE]);
            }
        }
        // EXPAND turns palettes into RGB(A); anything left indexed is a decoder bug
        ColorType::Indexed => {
            return Err(PipelineError::UnsupportedFormat(
                "indexed colour survived palette expansion".to_string(),
            ));
        }
    }
    Ok(())
}
