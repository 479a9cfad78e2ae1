//! Nearest-site demosaic for 10-bit BGGR frames.
//!
//! Every channel of every pixel is either read straight from a sensor site of
//! that color or copied from a nearby one, then rescaled to 8 bits. Sites too
//! close to the frame edge to have a donor contribute zero.

use tracing::trace;

use super::scale::rescale_10bit;
use super::tile::{Site, TileOrder};
use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::common::frame_len;

/// The only layout this strategy understands.
pub const INTERPOLATED_ORDER: TileOrder = TileOrder::Bggr;

#[inline]
fn near_border(width: usize, height: usize, x: usize, y: usize) -> bool {
    x < 2 || x + 1 >= width || y < 2 || y + 1 >= height
}

#[inline]
fn sample(raw: &[u16], width: usize, x: usize, y: usize) -> u8 {
    rescale_10bit(raw[y * width + x])
}

/// Red channel at `(x, y)`. Donor is the red site up and to the left.
pub fn red_at(raw: &[u16], width: usize, height: usize, x: usize, y: usize) -> u8 {
    if INTERPOLATED_ORDER.site_at(x, y) == Site::Red {
        return sample(raw, width, x, y);
    }
    if near_border(width, height, x, y) {
        return 0;
    }
    sample(raw, width, (x - 2) | 1, (y - 2) | 1)
}

/// Green channel at `(x, y)`. Donor is the left neighbor on the same row.
pub fn green_at(raw: &[u16], width: usize, height: usize, x: usize, y: usize) -> u8 {
    if INTERPOLATED_ORDER.site_at(x, y) == Site::Green {
        return sample(raw, width, x, y);
    }
    if near_border(width, height, x, y) {
        return 0;
    }
    sample(raw, width, x - 1, y)
}

/// Blue channel at `(x, y)`. Donor is the blue site of the enclosing tile.
pub fn blue_at(raw: &[u16], width: usize, height: usize, x: usize, y: usize) -> u8 {
    if INTERPOLATED_ORDER.site_at(x, y) == Site::Blue {
        return sample(raw, width, x, y);
    }
    if near_border(width, height, x, y) {
        return 0;
    }
    sample(raw, width, x & !1, y & !1)
}

// TODO: producing `height - 1` rows looks like an off-by-one; emit the last
// row once downstream consumers no longer expect the trimmed frame.

/// Demosaic a 10-bit BGGR frame into interleaved 8-bit-range RGB.
///
/// Only rows `0..height - 1` are produced; the last row of `output` is left
/// as the caller supplied it.
pub fn interpolate(raw: &[u16], width: usize, height: usize, output: &mut [u16]) -> Result<()> {
    let npix = frame_len(width, height)?;
    if raw.len() < npix {
        return Err(ConversionError::InsufficientInput { expected: npix, got: raw.len() });
    }
    if output.len() < 3 * npix {
        return Err(ConversionError::OutputTooSmall { expected: 3 * npix, got: output.len() });
    }

    trace!(width, height, "interpolating 10-bit bayer frame");

    let rows = height.saturating_sub(1);
    for (i, px) in output[..3 * rows * width].chunks_exact_mut(3).enumerate() {
        let (x, y) = (i % width, i / width);
        px[0] = red_at(raw, width, height, x, y) as u16;
        px[1] = green_at(raw, width, height, x, y) as u16;
        px[2] = blue_at(raw, width, height, x, y) as u16;
    }

    Ok(())
}
