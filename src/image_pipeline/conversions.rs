//! Pipeline conversions module
//!
//! This module contains orchestration logic for turning raw sensor dumps into RGB frames.

mod raw_to_rgb;


pub use raw_to_rgb::RawToRgbPipeline;
