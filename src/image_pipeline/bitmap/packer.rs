use tracing::trace;

use crate::image_pipeline::bitmap::types::{PackedBitmap, PanelGeometry};
use crate::image_pipeline::mono::BinaryMatrix;

/// Packs `matrix` into a frame of the panel's size.
///
/// The frame always covers the whole panel. Pixels outside the source are
/// white; source pixels past the panel's right or bottom edge are dropped.
pub fn pack(matrix: &BinaryMatrix, geometry: PanelGeometry) -> PackedBitmap {
    let mut frame = PackedBitmap::blank(geometry);
    let bytes_per_row = geometry.bytes_per_row();
    let out = frame.as_bytes_mut();

    for y in 0..geometry.height() {
        for x in 0..bytes_per_row {
            let mut current_byte = 0u8;
            for xb in 0..8 {
                if matrix.is_dark(x * 8 + xb, y) {
                    current_byte |= 1 << (7 - xb);
                }
            }
            let offset = y * bytes_per_row + x;
            out[offset] = current_byte;
            if current_byte != 0 {
                trace!("frame[{}] = {:02x}", offset, current_byte);
            }
        }
    }

    frame
}
