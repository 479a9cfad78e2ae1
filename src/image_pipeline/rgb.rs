//! RGB output module
//!
//! This module holds the conversion settings and the sinks demosaiced frames
//! are handed to.

mod writer;
mod rgb_dump_writer;
pub mod types;

pub use writer::RgbWriter;
pub use rgb_dump_writer::RgbDumpWriter;
pub use types::{ConversionConfig, ConversionConfigBuilder};
