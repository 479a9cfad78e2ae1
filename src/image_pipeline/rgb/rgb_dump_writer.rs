use std::io::Write;
use tracing::debug;
use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::debayer::types::RgbImageData;
use crate::image_pipeline::rgb::types::ConversionConfig;
use crate::image_pipeline::rgb::writer::RgbWriter;

/// Writes frames as a bare interleaved RGB24 dump, one byte per channel.
pub struct RgbDumpWriter;

impl RgbWriter for RgbDumpWriter {
    fn write_rgb(&self, image: &RgbImageData, output: &mut dyn Write, _config: &ConversionConfig) -> Result<()> {
        debug!("Writing RGB dump: {}x{}", image.width, image.height);

        let bytes = image
            .data
            .iter()
            .map(|&v| u8::try_from(v))
            .collect::<std::result::Result<Vec<u8>, _>>()
            .map_err(|_| {
                ConversionError::OutputWriteError(format!(
                    "{}-bit samples do not fit an RGB24 dump",
                    image.bits_per_sample
                ))
            })?;

        output.write_all(&bytes)?;

        debug!("RGB dump complete, {} bytes", bytes.len());
        Ok(())
    }
}
