use tracing::info;

use crate::image_pipeline::bitmap::PackedBitmap;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::panel::sink::PanelSink;

/// Sink without hardware behind it; reports each frame in the log.
#[derive(Debug, Default)]
pub struct LogSink {
    frames: usize,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames_shown(&self) -> usize {
        self.frames
    }
}

impl PanelSink for LogSink {
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    fn display_frame(&mut self, frame: &PackedBitmap) -> Result<()> {
        self.frames += 1;
        let geometry = frame.geometry();
        info!(
            width = geometry.width(),
            height = geometry.height(),
            dark_pixels = frame.dark_pixels(),
            "Frame {} ready",
            self.frames
        );
        Ok(())
    }
}
