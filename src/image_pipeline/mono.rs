//! Monochrome reduction module
//!
//! Gamma-correct grayscale conversion followed by a fixed midpoint threshold.

pub mod luminance;
pub mod threshold;
pub mod types;

pub use luminance::{linear_to_srgb, luminance, srgb_to_linear, to_grayscale};
pub use threshold::{DARK_THRESHOLD, is_dark, threshold};
pub use types::{BinaryMatrix, GrayImage};
