//! Panel frame types

use crate::image_pipeline::common::error::{PipelineError, Result};

/// Fixed resolution of the target panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelGeometry {
    width: usize,
    height: usize,
}

impl PanelGeometry {
    /// Waveshare 7.5" panel in portrait orientation.
    pub const EPD_7IN5: PanelGeometry = PanelGeometry {
        width: 384,
        height: 640,
    };

    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 || width % 8 != 0 {
            return Err(PipelineError::InvalidPanelGeometry(width, height));
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn bytes_per_row(&self) -> usize {
        self.width / 8
    }

    /// Length in bytes of one full frame.
    pub fn frame_len(&self) -> usize {
        self.bytes_per_row() * self.height
    }
}

impl Default for PanelGeometry {
    fn default() -> Self {
        Self::EPD_7IN5
    }
}

/// One full panel frame: 8 horizontally adjacent pixels per byte, bit 7 is
/// the leftmost pixel and a set bit is black.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedBitmap {
    geometry: PanelGeometry,
    data: Vec<u8>,
}

impl PackedBitmap {
    /// An all-white frame.
    pub fn blank(geometry: PanelGeometry) -> Self {
        Self {
            geometry,
            data: vec![0u8; geometry.frame_len()],
        }
    }

    pub fn geometry(&self) -> PanelGeometry {
        self.geometry
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn row(&self, y: usize) -> &[u8] {
        let stride = self.geometry.bytes_per_row();
        &self.data[y * stride..(y + 1) * stride]
    }

    pub(crate) fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn dark_pixels(&self) -> usize {
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_panel_frame_size() {
        let geometry = PanelGeometry::default();
        assert_eq!(geometry.bytes_per_row(), 48);
        assert_eq!(geometry.frame_len(), 48 * 640);
        assert_eq!(PackedBitmap::blank(geometry).as_bytes().len(), 30720);
    }

    #[test]
    fn width_must_be_byte_aligned() {
        assert!(PanelGeometry::new(8, 1).is_ok());
        assert!(matches!(
            PanelGeometry::new(12, 4),
            Err(PipelineError::InvalidPanelGeometry(12, 4))
        ));
        assert!(PanelGeometry::new(0, 4).is_err());
        assert!(PanelGeometry::new(8, 0).is_err());
    }
}
