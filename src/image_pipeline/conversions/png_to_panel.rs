use std::path::Path;

use tracing::{debug, info, instrument};

use crate::image_pipeline::{
    bitmap::{PackedBitmap, PanelGeometry, pack},
    common::{PipelineError, PipelineTimings, Result},
    decode::{ImageReader, PngReader},
    mono::{threshold, to_grayscale},
    panel::PanelSink,
};

/// Renders image files onto a panel.
///
/// Every refresh builds its own image, grayscale, binary and frame buffers;
/// nothing is carried over from one refresh to the next.
pub struct RefreshPipeline<R: ImageReader, S: PanelSink> {
    reader: R,
    sink: S,
    geometry: PanelGeometry,
}

impl<S: PanelSink> RefreshPipeline<PngReader, S> {
    pub fn new(sink: S, geometry: PanelGeometry) -> Self {
        Self {
            reader: PngReader,
            sink,
            geometry,
        }
    }
}

impl<R: ImageReader, S: PanelSink> RefreshPipeline<R, S> {
    pub fn with_custom(reader: R, sink: S, geometry: PanelGeometry) -> Self {
        Self {
            reader,
            sink,
            geometry,
        }
    }

    /// Converts encoded image bytes into a panel frame without touching the panel.
    pub fn render(&self, input_data: &[u8]) -> Result<PackedBitmap> {
        self.render_timed(input_data, &mut PipelineTimings::new())
    }

    fn render_timed(&self, input_data: &[u8], timings: &mut PipelineTimings) -> Result<PackedBitmap> {
        let image = timings.measure("decode_png", || {
            let _span = tracing::info_span!("decode_png", input_size = input_data.len()).entered();
            self.reader.read_image(input_data)
        })?;

        if image.width == 0 || image.height == 0 {
            return Err(PipelineError::InvalidDimensions(image.width, image.height));
        }
        if image.width > self.geometry.width() || image.height > self.geometry.height() {
            debug!(
                "Image {}x{} exceeds panel {}x{}, cropping",
                image.width,
                image.height,
                self.geometry.width(),
                self.geometry.height()
            );
        }

        let gray = timings.measure("to_grayscale", || {
            let _span = tracing::info_span!("to_grayscale").entered();
            to_grayscale(&image)
        });
        drop(image);

        let binary = timings.measure("threshold", || {
            let _span = tracing::info_span!("threshold").entered();
            threshold(&gray)
        });
        drop(gray);

        let frame = timings.measure("pack_bitmap", || {
            let _span = tracing::info_span!("pack_bitmap").entered();
            pack(&binary, self.geometry)
        });
        Ok(frame)
    }

    /// Reads the image at `path` and renders it into a panel frame.
    pub fn render_file<P: AsRef<Path>>(&self, path: P) -> Result<PackedBitmap> {
        let input_data = read_input(path.as_ref())?;
        self.render(&input_data)
    }

    /// Full refresh: decode, convert, pack, then initialise the panel and
    /// hand it the frame. A failed panel init means the frame is never sent.
    pub fn render_and_display<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.render_and_display_with_timings(path).map(|_| ())
    }

    #[instrument(skip(self, path), fields(image = %path.as_ref().display()))]
    pub fn render_and_display_with_timings<P: AsRef<Path>>(
        &mut self,
        path: P,
    ) -> Result<PipelineTimings> {
        let path = path.as_ref();
        info!("Displaying image file at \"{}\"", path.display());

        let mut timings = PipelineTimings::new();
        let input_data = timings.measure("read_input", || read_input(path))?;
        let frame = self.render_timed(&input_data, &mut timings)?;

        let sink = &mut self.sink;
        timings.measure("panel_init", || {
            let _span = tracing::info_span!("panel_init").entered();
            sink.init()
        })?;
        timings.measure("display_frame", || {
            let _span = tracing::info_span!("display_frame").entered();
            sink.display_frame(&frame)
        })?;

        timings.log_summary();
        info!(
            dark_pixels = frame.dark_pixels(),
            "Refresh complete in {:.2} ms",
            timings.total_duration().as_secs_f64() * 1000.0
        );
        Ok(timings)
    }

    pub fn geometry(&self) -> PanelGeometry {
        self.geometry
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    let _span = tracing::info_span!("read_input_file").entered();
    std::fs::read(path)
        .map_err(|e| PipelineError::InputReadError(format!("{}: {}", path.display(), e)))
}
