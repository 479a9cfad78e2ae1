//! Image processing pipeline module
//!
//! Raw Bayer frames come in through a reader, are demosaiced on the CPU, and
//! leave as interleaved RGB through a writer. The demosaic functions in
//! [`debayer`] work on caller-owned buffers and can be used without the rest.

pub mod raw;
pub mod rgb;
pub mod debayer;
pub mod conversions;
pub mod common;
pub mod timing;

pub use common::{
    ConversionError,
    Result,
};

pub use raw::{
    RawImageData,
    RawImageReader,
    RawDumpReader,
    SampleDepth,
};

pub use rgb::{
    ConversionConfig,
    ConversionConfigBuilder,
    RgbWriter,
    RgbDumpWriter,
};

pub use debayer::{
    accumulate,
    interpolate,
    CpuDebayer,
    RgbImageData,
    TileOrder,
};

pub use conversions::{
    RawToRgbPipeline,
};

pub use timing::{PipelineTimings, StepTiming, Timer};
