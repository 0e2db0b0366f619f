use crate::image_pipeline::bitmap::PackedBitmap;
use crate::image_pipeline::common::error::Result;

pub trait PanelSink {
    /// Powers up and resets the panel. Called before every frame; an error
    /// abandons the refresh and the frame is never sent.
    fn init(&mut self) -> Result<()>;

    /// Transfers a full frame. Returns once the buffer has been consumed.
    fn display_frame(&mut self, frame: &PackedBitmap) -> Result<()>;
}

impl<S: PanelSink + ?Sized> PanelSink for Box<S> {
    fn init(&mut self) -> Result<()> {
        (**self).init()
    }

    fn display_frame(&mut self, frame: &PackedBitmap) -> Result<()> {
        (**self).display_frame(frame)
    }
}
