//! Packed 1-bit frame module
//!
//! Serialises a binary matrix into the panel's native scanline layout.

mod packer;
mod pbm;
pub mod types;

pub use packer::pack;
pub use types::{PackedBitmap, PanelGeometry};
