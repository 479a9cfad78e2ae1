//! RAW image data types

use std::fmt;
use std::str::FromStr;

use crate::image_pipeline::common::error::ConversionError;

/// Represents one raw sensor frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawImageData {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// Raw pixel data (single channel Bayer pattern)
    pub data: Vec<u16>,
    /// Bits per sample the sensor delivered (8 or 10)
    pub bits_per_sample: u32,
}

/// Sample width of a raw sensor dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SampleDepth {
    /// One byte per sample.
    #[default]
    Eight,
    /// 10 significant bits stored in a little-endian `u16`.
    Ten,
}

impl SampleDepth {
    pub fn bits(self) -> u32 {
        match self {
            SampleDepth::Eight => 8,
            SampleDepth::Ten => 10,
        }
    }

    /// Bytes each sample occupies in a dump.
    pub fn bytes_per_sample(self) -> usize {
        match self {
            SampleDepth::Eight => 1,
            SampleDepth::Ten => 2,
        }
    }

    pub fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            8 => Some(SampleDepth::Eight),
            10 => Some(SampleDepth::Ten),
            _ => None,
        }
    }
}

impl fmt::Display for SampleDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}

impl FromStr for SampleDepth {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().trim_end_matches("-bit").trim_end_matches("bit");
        digits
            .parse::<u32>()
            .ok()
            .and_then(SampleDepth::from_bits)
            .ok_or_else(|| ConversionError::UnsupportedFormat(format!("unsupported sample depth '{}'", s)))
    }
}
