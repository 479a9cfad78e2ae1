//! Raw to RGB conversion configuration types

use crate::image_pipeline::debayer::TileOrder;
use crate::image_pipeline::raw::SampleDepth;

/// Configuration for raw to RGB conversion
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Bayer tile order of the incoming frames
    pub tile_order: TileOrder,
    /// Sample width of the incoming frames; selects the demosaic strategy
    pub sample_depth: SampleDepth,
    /// Whether to validate image dimensions before conversion
    pub validate_dimensions: bool,
    /// Largest accepted width or height when validating
    pub max_dimension: Option<usize>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            tile_order: TileOrder::Bggr,
            sample_depth: SampleDepth::Eight,
            validate_dimensions: true,
            max_dimension: Some(50000),
        }
    }
}

impl ConversionConfig {
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder::default()
    }
}

/// Builder for ConversionConfig
#[derive(Default)]
pub struct ConversionConfigBuilder {
    tile_order: Option<TileOrder>,
    sample_depth: Option<SampleDepth>,
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<usize>>,
}

impl ConversionConfigBuilder {
    pub fn tile_order(mut self, order: TileOrder) -> Self {
        self.tile_order = Some(order);
        self
    }

    pub fn sample_depth(mut self, depth: SampleDepth) -> Self {
        self.sample_depth = Some(depth);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max: Option<usize>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn build(self) -> ConversionConfig {
        let default = ConversionConfig::default();
        ConversionConfig {
            tile_order: self.tile_order.unwrap_or(default.tile_order),
            sample_depth: self.sample_depth.unwrap_or(default.sample_depth),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
        }
    }
}
