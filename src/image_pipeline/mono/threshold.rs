use crate::image_pipeline::mono::types::{BinaryMatrix, GrayImage};

/// Highest grayscale value still rendered black. 128..=255 is light.
pub const DARK_THRESHOLD: u8 = 127;

#[inline]
pub fn is_dark(gray: u8) -> bool {
    gray <= DARK_THRESHOLD
}

pub fn threshold(gray: &GrayImage) -> BinaryMatrix {
    BinaryMatrix {
        width: gray.width,
        height: gray.height,
        data: gray.data.iter().map(|&g| is_dark(g)).collect(),
    }
}
