//! Binary PBM (P4) encoding of a packed frame.
//!
//! P4 stores rows MSB-first with 1 meaning black and each row padded to a
//! whole byte, which is exactly the panel layout, so the frame is written as is.

use std::io::Write;

use crate::image_pipeline::bitmap::types::PackedBitmap;
use crate::image_pipeline::common::error::Result;

impl PackedBitmap {
    pub fn write_pbm(&self, output: &mut dyn Write) -> Result<()> {
        let geometry = self.geometry();
        write!(output, "P4\n{} {}\n", geometry.width(), geometry.height())?;
        output.write_all(self.as_bytes())?;
        Ok(())
    }
}
