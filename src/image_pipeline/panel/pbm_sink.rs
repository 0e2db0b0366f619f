use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use tracing::info;

use crate::image_pipeline::bitmap::PackedBitmap;
use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::panel::sink::PanelSink;

/// Saves every frame as a PBM preview so output can be checked without a panel.
pub struct PbmSink {
    path: PathBuf,
}

impl PbmSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PanelSink for PbmSink {
    fn init(&mut self) -> Result<()> {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() && !dir.is_dir() => Err(
                PipelineError::PanelInitError(format!("{}: no such directory", dir.display())),
            ),
            _ => Ok(()),
        }
    }

    fn display_frame(&mut self, frame: &PackedBitmap) -> Result<()> {
        let write = || -> Result<()> {
            let mut out = BufWriter::new(File::create(&self.path)?);
            frame.write_pbm(&mut out)?;
            out.flush()?;
            Ok(())
        };
        write().map_err(|e| PipelineError::PanelWriteError(format!("{}: {}", self.path.display(), e)))?;

        info!("Preview written to {}", self.path.display());
        Ok(())
    }
}
