//! Perceptual grayscale conversion.
//!
//! Channels are decoded from sRGB to linear light, weighted with the
//! ITU-R BT.709 luminosity coefficients and re-encoded to sRGB gamma.

use tracing::debug;

use crate::image_pipeline::decode::RgbaImage;
use crate::image_pipeline::mono::types::GrayImage;

const BT709_RED: f64 = 0.2126;
const BT709_GREEN: f64 = 0.7152;
const BT709_BLUE: f64 = 0.0722;

/// Removes the sRGB transfer curve from a normalised channel value.
#[inline]
pub fn srgb_to_linear(x: f64) -> f64 {
    if x < 0.04045 {
        x / 12.92
    } else {
        ((x + 0.055) / 1.055).powf(2.4)
    }
}

/// Applies the sRGB transfer curve to a linear-light value.
#[inline]
pub fn linear_to_srgb(y: f64) -> f64 {
    if y <= 0.0031308 {
        12.92 * y
    } else {
        1.055 * y.powf(1.0 / 2.4) - 0.055
    }
}

/// Grayscale value of one pixel. Alpha is not consulted.
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    let r_linear = srgb_to_linear(f64::from(r) / 255.0);
    let g_linear = srgb_to_linear(f64::from(g) / 255.0);
    let b_linear = srgb_to_linear(f64::from(b) / 255.0);
    let gray_linear = BT709_RED * r_linear + BT709_GREEN * g_linear + BT709_BLUE * b_linear;

    // f64::round rounds half away from zero
    (linear_to_srgb(gray_linear) * 255.0).round().clamp(0.0, 255.0) as u8
}

pub fn to_grayscale(image: &RgbaImage) -> GrayImage {
    debug!("Converting {}x{} image to grayscale", image.width, image.height);
    let data = image.pixels().map(|p| luminance(p[0], p[1], p[2])).collect();
    GrayImage {
        width: image.width,
        height: image.height,
        data,
    }
}
