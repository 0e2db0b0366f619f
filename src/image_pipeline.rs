//! Image processing pipeline module
//!
//! This module turns an encoded image into a packed 1-bit panel frame, with
//! separate modules for PNG decoding, monochrome reduction, bit packing,
//! panel output and orchestration.

pub mod decode;
pub mod mono;
pub mod bitmap;
pub mod panel;
pub mod conversions;
pub mod common;

pub use common::{
    PipelineError,
    PipelineTimings,
    Result,
};

pub use decode::{
    ImageReader,
    PngReader,
    RgbaImage,
};

pub use mono::{
    BinaryMatrix,
    GrayImage,
};

pub use bitmap::{
    PackedBitmap,
    PanelGeometry,
};

pub use panel::{
    FramebufferSink,
    LogSink,
    PanelSink,
    PbmSink,
};

pub use conversions::{
    RefreshPipeline,
};
