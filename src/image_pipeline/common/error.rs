use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to decode PNG image: {0}")]
    DecodeError(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Invalid panel geometry: width={0}, height={1} (width must be a non-zero multiple of 8)")]
    InvalidPanelGeometry(usize, usize),

    #[error("e-Paper init failed: {0}")]
    PanelInitError(String),

    #[error("Failed to send frame to panel: {0}")]
    PanelWriteError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl PipelineError {
    /// True for every failure that happens while turning the input file into
    /// an RGBA image, before the panel is touched.
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            PipelineError::InputReadError(_)
                | PipelineError::DecodeError(_)
                | PipelineError::UnsupportedFormat(_)
                | PipelineError::InvalidDimensions(_, _)
        )
    }

    pub fn is_panel_error(&self) -> bool {
        matches!(
            self,
            PipelineError::PanelInitError(_) | PipelineError::PanelWriteError(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
