//! Bayer demosaicing for webcam capture.
//!
//! Converts single-channel color filter array frames into interleaved RGB,
//! either by accumulating an 8-bit neighbor-averaged reconstruction into a
//! running-sum buffer or by nearest-site interpolation of 10-bit BGGR frames.

pub mod image_pipeline;
pub mod logger;
