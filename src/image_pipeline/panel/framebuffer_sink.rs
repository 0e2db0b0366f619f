//! Raw frame output to a file or device node.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::image_pipeline::bitmap::PackedBitmap;
use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::panel::sink::PanelSink;

/// Writes each packed frame verbatim to `path`, replacing the previous one.
pub struct FramebufferSink {
    path: PathBuf,
    file: Option<File>,
}

impl FramebufferSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PanelSink for FramebufferSink {
    fn init(&mut self) -> Result<()> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)
            .map_err(|e| PipelineError::PanelInitError(format!("{}: {}", self.path.display(), e)))?;
        self.file = Some(file);
        Ok(())
    }

    fn display_frame(&mut self, frame: &PackedBitmap) -> Result<()> {
        // the handle is released after each frame; init reopens it
        let mut file = self.file.take().ok_or_else(|| {
            PipelineError::PanelWriteError(format!("{}: not initialised", self.path.display()))
        })?;

        file.write_all(frame.as_bytes())
            .and_then(|_| file.flush())
            .map_err(|e| PipelineError::PanelWriteError(format!("{}: {}", self.path.display(), e)))?;

        debug!("Wrote {} bytes to {}", frame.as_bytes().len(), self.path.display());
        Ok(())
    }
}
