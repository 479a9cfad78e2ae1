//! Types for debayering operations

/// RGB image data after debayering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbImageData {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// RGB pixel data interleaved [R, G, B, R, G, B, ...]
    pub data: Vec<u16>,
    /// Bits per channel sample in `data`
    pub bits_per_sample: u32,
}

impl RgbImageData {
    /// RGB triple at `(x, y)`.
    pub fn pixel(&self, x: usize, y: usize) -> [u16; 3] {
        let i = 3 * (y * self.width + x);
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }
}
