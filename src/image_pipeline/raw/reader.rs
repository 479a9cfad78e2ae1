use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raw::types::RawImageData;

/// Source of single-channel Bayer frames.
pub trait RawImageReader {
    /// Decode one frame from the bytes a capture source produced.
    fn read_raw(&self, data: &[u8]) -> Result<RawImageData>;
}
