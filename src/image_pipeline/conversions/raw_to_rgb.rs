use tracing::{info, instrument, warn};
use std::io::Write;
use std::path::Path;

use crate::image_pipeline::{
    common::error::{ConversionError, Result},
    debayer::{CpuDebayer, RgbImageData},
    raw::{RawDumpReader, RawImageData, RawImageReader},
    rgb::{ConversionConfig, RgbDumpWriter, RgbWriter},
    timing::{PipelineTimings, Timer},
};

pub struct RawToRgbPipeline<R: RawImageReader, W: RgbWriter> {
    reader: R,
    writer: W,
    config: ConversionConfig,
}

impl RawToRgbPipeline<RawDumpReader, RgbDumpWriter> {
    /// Pipeline over headerless dumps of a `width` x `height` sensor.
    pub fn new(width: usize, height: usize, config: ConversionConfig) -> Self {
        Self {
            reader: RawDumpReader::new(width, height, config.sample_depth),
            writer: RgbDumpWriter,
            config,
        }
    }
}

impl<R: RawImageReader, W: RgbWriter> RawToRgbPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: ConversionConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(ConversionError::InvalidDimensions(width, height));
        }

        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                warn!(
                    "Image dimensions {}x{} exceed maximum {}",
                    width, height, max
                );
                return Err(ConversionError::InvalidDimensions(width, height));
            }
        }

        Ok(())
    }

    /// Demosaic one decoded frame according to the configured depth and tile order.
    #[instrument(skip(self, raw_image), fields(width = raw_image.width, height = raw_image.height))]
    pub fn demosaic(&self, raw_image: &RawImageData) -> Result<RgbImageData> {
        if raw_image.bits_per_sample != self.config.sample_depth.bits() {
            return Err(ConversionError::UnsupportedFormat(format!(
                "frame has {} bits per sample, pipeline expects {}",
                raw_image.bits_per_sample, self.config.sample_depth
            )));
        }
        CpuDebayer::new(self.config.tile_order).process(raw_image)
    }

    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert(&self, input_data: &[u8], output: &mut dyn Write) -> Result<()> {
        self.convert_with_timings(input_data, output).map(|_| ())
    }

    pub fn convert_with_timings(
        &self,
        input_data: &[u8],
        output: &mut dyn Write,
    ) -> Result<PipelineTimings> {
        let mut timings = PipelineTimings::new();
        info!("Starting raw to RGB conversion");

        let timer = Timer::start("decode_raw");
        let raw_image = {
            let _span = tracing::info_span!("decode_raw").entered();
            self.reader.read_raw(input_data)?
        };
        timings.record(timer);

        let timer = Timer::start("validate_dimensions");
        {
            let _span = tracing::info_span!("validate_dimensions",
                width = raw_image.width,
                height = raw_image.height
            ).entered();
            self.validate_dimensions(raw_image.width, raw_image.height)?;
        }
        timings.record(timer);

        let timer = Timer::start("demosaic");
        let rgb_image = self.demosaic(&raw_image)?;
        timings.record(timer);

        let timer = Timer::start("write_rgb");
        {
            let _span = tracing::info_span!("write_rgb").entered();
            self.writer.write_rgb(&rgb_image, output, &self.config)?;
        }
        timings.record(timer);

        info!(
            width = rgb_image.width,
            height = rgb_image.height,
            order = %self.config.tile_order,
            "Conversion complete in {:.3}ms",
            timings.total_duration().as_secs_f64() * 1000.0
        );
        Ok(timings)
    }

    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<PipelineTimings> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                ConversionError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        let mut output_file = {
            let _span = tracing::info_span!("create_output_file").entered();
            std::fs::File::create(output_path).map_err(|e| {
                ConversionError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?
        };

        self.convert_with_timings(&input_data, &mut output_file)
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ConversionConfig) {
        self.config = config;
    }
}
