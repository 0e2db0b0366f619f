use std::sync::{Arc, Mutex};

use crate::image_pipeline::bitmap::{PackedBitmap, PanelGeometry};
use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::conversions::RefreshPipeline;
use crate::image_pipeline::decode::{ImageReader, RgbaImage};
use crate::image_pipeline::panel::PanelSink;

const BLACK: [u8; 4] = [0, 0, 0, 255];
const WHITE: [u8; 4] = [255, 255, 255, 255];

struct MockReader {
    should_fail: bool,
    mock_data: Option<RgbaImage>,
}

impl ImageReader for MockReader {
    fn read_image(&self, _data: &[u8]) -> Result<RgbaImage> {
        if self.should_fail {
            return Err(PipelineError::DecodeError("Mock decode error".to_string()));
        }
        Ok(self
            .mock_data
            .clone()
            .unwrap_or_else(|| RgbaImage::from_fn(8, 1, |_, _| BLACK)))
    }
}

#[derive(Default)]
struct MockSink {
    fail_init: bool,
    init_calls: Arc<Mutex<usize>>,
    frames: Arc<Mutex<Vec<PackedBitmap>>>,
}

impl PanelSink for MockSink {
    fn init(&mut self) -> Result<()> {
        *self.init_calls.lock().unwrap() += 1;
        if self.fail_init {
            return Err(PipelineError::PanelInitError("Mock init error".to_string()));
        }
        Ok(())
    }

    fn display_frame(&mut self, frame: &PackedBitmap) -> Result<()> {
        self.frames.lock().unwrap().push(frame.clone());
        Ok(())
    }
}

fn input_file() -> tempfile::NamedTempFile {
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), b"fake png data").unwrap();
    file
}

fn geometry(width: usize, height: usize) -> PanelGeometry {
    PanelGeometry::new(width, height).unwrap()
}

#[test]
fn test_successful_refresh() {
    let frames = Arc::new(Mutex::new(Vec::new()));
    let reader = MockReader { should_fail: false, mock_data: None };
    let sink = MockSink { frames: frames.clone(), ..Default::default() };

    let mut pipeline = RefreshPipeline::with_custom(reader, sink, geometry(8, 1));
    let input = input_file();
    let result = pipeline.render_and_display(input.path());

    assert!(result.is_ok());
    let frames = frames.lock().unwrap();
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].as_bytes(), &[0xFF]);
}

#[test]
fn test_alternating_columns() {
    let image = RgbaImage::from_fn(8, 1, |x, _| if x % 2 == 0 { BLACK } else { WHITE });
    let reader = MockReader { should_fail: false, mock_data: Some(image) };
    let pipeline = RefreshPipeline::with_custom(reader, MockSink::default(), geometry(8, 1));

    let frame = pipeline.render(b"fake png data").unwrap();
    assert_eq!(frame.as_bytes(), &[0xAA]);
}

#[test]
fn test_reader_failure() {
    let frames = Arc::new(Mutex::new(Vec::new()));
    let init_calls = Arc::new(Mutex::new(0));
    let reader = MockReader { should_fail: true, mock_data: None };
    let sink = MockSink {
        frames: frames.clone(),
        init_calls: init_calls.clone(),
        ..Default::default()
    };

    let mut pipeline = RefreshPipeline::with_custom(reader, sink, geometry(8, 1));
    let input = input_file();
    let result = pipeline.render_and_display(input.path());

    assert!(matches!(result.unwrap_err(), PipelineError::DecodeError(_)));
    assert_eq!(*init_calls.lock().unwrap(), 0);
    assert!(frames.lock().unwrap().is_empty());
}

#[test]
fn test_missing_file() {
    let reader = MockReader { should_fail: false, mock_data: None };
    let mut pipeline = RefreshPipeline::with_custom(reader, MockSink::default(), geometry(8, 1));

    let dir = tempfile::tempdir().unwrap();
    let result = pipeline.render_and_display(dir.path().join("absent.png"));

    let err = result.unwrap_err();
    assert!(matches!(err, PipelineError::InputReadError(_)));
    assert!(err.is_decode_error());
}

#[test]
fn test_panel_init_failure_skips_frame() {
    let frames = Arc::new(Mutex::new(Vec::new()));
    let init_calls = Arc::new(Mutex::new(0));
    let reader = MockReader { should_fail: false, mock_data: None };
    let sink = MockSink {
        fail_init: true,
        frames: frames.clone(),
        init_calls: init_calls.clone(),
    };

    let mut pipeline = RefreshPipeline::with_custom(reader, sink, geometry(8, 1));
    let input = input_file();
    let result = pipeline.render_and_display(input.path());

    let err = result.unwrap_err();
    assert!(matches!(err, PipelineError::PanelInitError(_)));
    assert!(err.is_panel_error());
    assert_eq!(*init_calls.lock().unwrap(), 1);
    assert!(frames.lock().unwrap().is_empty());
}

#[test]
fn test_failure_does_not_poison_next_refresh() {
    let frames = Arc::new(Mutex::new(Vec::new()));
    let sink = MockSink { frames: frames.clone(), ..Default::default() };
    let mut pipeline = RefreshPipeline::new(sink, geometry(8, 1));

    let dir = tempfile::tempdir().unwrap();
    let broken = dir.path().join("broken.png");
    std::fs::write(&broken, b"not a png").unwrap();
    assert!(pipeline.render_and_display(&broken).unwrap_err().is_decode_error());

    let good = dir.path().join("good.png");
    write_gray_png(&good, 8, 1, &[0, 255, 0, 255, 0, 255, 0, 255]);
    pipeline.render_and_display(&good).unwrap();

    let frames = frames.lock().unwrap();
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].as_bytes(), &[0xAA]);
}

#[test]
fn test_zero_sized_image_rejected() {
    let reader = MockReader {
        should_fail: false,
        mock_data: Some(RgbaImage::from_fn(0, 3, |_, _| BLACK)),
    };
    let pipeline = RefreshPipeline::with_custom(reader, MockSink::default(), geometry(8, 1));
    assert!(matches!(
        pipeline.render(b"fake"),
        Err(PipelineError::InvalidDimensions(0, 3))
    ));
}

#[test]
fn test_timings_cover_every_stage() {
    let reader = MockReader { should_fail: false, mock_data: None };
    let mut pipeline = RefreshPipeline::with_custom(reader, MockSink::default(), geometry(8, 1));
    let input = input_file();

    let timings = pipeline.render_and_display_with_timings(input.path()).unwrap();
    for stage in [
        "read_input",
        "decode_png",
        "to_grayscale",
        "threshold",
        "pack_bitmap",
        "panel_init",
        "display_frame",
    ] {
        assert!(timings.get_step(stage).is_some(), "missing stage {stage}");
    }
}

#[test]
fn test_png_smaller_than_panel_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("small.png");
    // 3x2 black image on a 16x4 panel
    write_gray_png(&path, 3, 2, &[0; 6]);

    let pipeline = RefreshPipeline::new(MockSink::default(), geometry(16, 4));
    let frame = pipeline.render_file(&path).unwrap();

    assert_eq!(
        frame.as_bytes(),
        &[0xE0, 0x00, 0xE0, 0x00, 0x00, 0x00, 0x00, 0x00]
    );
}

fn write_gray_png(path: &std::path::Path, width: u32, height: u32, data: &[u8]) {
    let file = std::fs::File::create(path).unwrap();
    let mut encoder = png::Encoder::new(std::io::BufWriter::new(file), width, height);
    encoder.set_color(png::ColorType::Grayscale);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header().unwrap();
    writer.write_image_data(data).unwrap();
}
