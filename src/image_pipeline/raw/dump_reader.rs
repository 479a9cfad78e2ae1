//! Reader for headerless raw sensor dumps.
//!
//! Capture devices hand out Bayer frames as a bare run of samples with no
//! header, so the frame geometry and sample width have to be supplied by the
//! caller. 8-bit dumps carry one byte per site; 10-bit dumps carry each site in
//! a little-endian `u16` (the V4L2 `SBGGR10` layout).

use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::raw::reader::RawImageReader;
use crate::image_pipeline::raw::types::{RawImageData, SampleDepth};

/// Decodes raw dumps of a fixed geometry.
#[derive(Debug, Clone, Copy)]
pub struct RawDumpReader {
    pub width: usize,
    pub height: usize,
    pub depth: SampleDepth,
}

impl RawDumpReader {
    pub fn new(width: usize, height: usize, depth: SampleDepth) -> Self {
        Self { width, height, depth }
    }
}

impl RawImageReader for RawDumpReader {
    /// Split `data` into samples.
    ///
    /// A dump shorter than `width * height` samples is passed through as is;
    /// the demosaic stage reports it. A 10-bit dump with an odd byte count is
    /// a [`ConversionError::DecodeError`].
    fn read_raw(&self, data: &[u8]) -> Result<RawImageData> {
        debug!("Decoding {} raw dump, {} bytes", self.depth, data.len());

        let samples: Vec<u16> = match self.depth {
            SampleDepth::Eight => data.iter().map(|&b| b as u16).collect(),
            SampleDepth::Ten => {
                if data.len() % 2 != 0 {
                    return Err(ConversionError::DecodeError(format!(
                        "10-bit dump has odd length {}",
                        data.len()
                    )));
                }
                data.chunks_exact(2)
                    .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
                    .collect()
            }
        };

        debug!("Decoded {} samples for {}x{}", samples.len(), self.width, self.height);

        Ok(RawImageData {
            width: self.width,
            height: self.height,
            data: samples,
            bits_per_sample: self.depth.bits(),
        })
    }
}
