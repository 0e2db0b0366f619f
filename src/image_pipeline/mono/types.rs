//! Intermediate matrices between the decoded image and the packed frame

/// Single-channel luminance image, same dimensions as its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayImage {
    pub width: usize,
    pub height: usize,
    /// Row-major luminance values in [0, 255]
    pub data: Vec<u8>,
}

/// Row-major matrix of "dark" flags; `true` renders black.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryMatrix {
    pub width: usize,
    pub height: usize,
    pub data: Vec<bool>,
}

impl BinaryMatrix {
    pub fn from_fn(width: usize, height: usize, f: impl Fn(usize, usize) -> bool) -> Self {
        let data = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| f(x, y))
            .collect();
        Self { width, height, data }
    }

    /// Dark flag at `(x, y)`; positions outside the matrix read as light.
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.data[y * self.width + x]
    }

    pub fn dark_count(&self) -> usize {
        self.data.iter().filter(|&&d| d).count()
    }
}
