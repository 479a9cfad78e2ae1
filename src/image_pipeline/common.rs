//! Common utilities module
//!
//! This module contains shared utilities used across the image pipeline.

pub mod error;

pub use error::{ConversionError, Result};

/// Number of sensor sites in a `width` x `height` frame.
pub fn frame_len(width: usize, height: usize) -> Result<usize> {
    width
        .checked_mul(height)
        .filter(|n| n.checked_mul(3).is_some())
        .ok_or(ConversionError::InvalidDimensions(width, height))
}
