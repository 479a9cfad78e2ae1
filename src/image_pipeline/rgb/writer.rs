use std::io::Write;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::debayer::types::RgbImageData;
use crate::image_pipeline::rgb::types::ConversionConfig;

/// Sink for demosaiced frames.
pub trait RgbWriter {
    fn write_rgb(&self, image: &RgbImageData, output: &mut dyn Write, config: &ConversionConfig) -> Result<()>;
}
