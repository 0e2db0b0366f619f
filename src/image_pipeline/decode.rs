//! PNG decoding module
//!
//! Turns encoded image bytes into a normalised 8-bit RGBA image.

mod reader;
mod png_reader;
pub mod types;

pub use reader::ImageReader;
pub use png_reader::PngReader;
pub use types::RgbaImage;
