//! Renders PNG images onto a monochrome e-paper panel on request.
//!
//! Refresh commands arrive as JSON over a Unix-domain socket; each one is
//! decoded, reduced to 1-bit with gamma-correct luminance and packed into the
//! panel's native frame layout.

pub mod command;
pub mod config;
pub mod daemon;
pub mod image_pipeline;
pub mod logger;
