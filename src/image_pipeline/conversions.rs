//! Pipeline conversions module
//!
//! Orchestrates decode, grayscale, threshold, pack and panel hand-off.

mod png_to_panel;

#[cfg(test)]
mod tests;

pub use png_to_panel::RefreshPipeline;
