//! RAW image reading module
//!
//! This module turns headerless sensor dumps into single-channel raw frames.

mod reader;
mod dump_reader;
pub mod types;

pub use reader::RawImageReader;
pub use dump_reader::RawDumpReader;
pub use types::{RawImageData, SampleDepth};
