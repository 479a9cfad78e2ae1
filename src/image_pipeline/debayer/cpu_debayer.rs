use tracing::{debug, warn};

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::common::frame_len;
use crate::image_pipeline::debayer::{accumulate, interpolate, RgbImageData, TileOrder, INTERPOLATED_ORDER};
use crate::image_pipeline::raw::{RawImageData, SampleDepth};

/// Runs the demosaic strategy matching a frame's sample depth.
pub struct CpuDebayer {
    order: TileOrder,
}

impl CpuDebayer {
    pub fn new(order: TileOrder) -> Self {
        Self { order }
    }

    pub fn order(&self) -> TileOrder {
        self.order
    }

    pub fn process(&self, raw_image: &RawImageData) -> Result<RgbImageData> {
        let width = raw_image.width;
        let height = raw_image.height;
        let npix = frame_len(width, height)?;

        let depth = SampleDepth::from_bits(raw_image.bits_per_sample).ok_or_else(|| {
            ConversionError::UnsupportedFormat(format!(
                "{} bits per sample",
                raw_image.bits_per_sample
            ))
        })?;
        debug!("Debayering {}x{} {} frame as {}", width, height, depth, self.order);

        let data = match depth {
            SampleDepth::Eight => {
                let samples = raw_image
                    .data
                    .iter()
                    .map(|&v| u8::try_from(v))
                    .collect::<std::result::Result<Vec<u8>, _>>()
                    .map_err(|_| ConversionError::DecodeError("8-bit frame holds a sample above 255".to_string()))?;

                // Single frame, so the running sums never leave the byte range.
                let mut sums = vec![0u32; 3 * npix];
                accumulate(&mut sums, &samples, width, height, self.order)?;
                sums.into_iter().map(|v| v as u16).collect()
            }
            SampleDepth::Ten => {
                if self.order != INTERPOLATED_ORDER && self.order != TileOrder::Bayer {
                    warn!("10-bit frames must be {}, got {}", INTERPOLATED_ORDER, self.order);
                    return Err(ConversionError::UnsupportedFormat(format!(
                        "10-bit demosaic supports {} only, got {}",
                        INTERPOLATED_ORDER, self.order
                    )));
                }
                let mut rgb = vec![0u16; 3 * npix];
                interpolate(&raw_image.data, width, height, &mut rgb)?;
                rgb
            }
        };

        Ok(RgbImageData {
            width,
            height,
            data,
            bits_per_sample: 8,
        })
    }
}
