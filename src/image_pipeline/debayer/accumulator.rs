//! Neighbor-averaging demosaic for 8-bit Bayer frames.
//!
//! Each raw site contributes one RGB triple that is *added* to a running-sum
//! buffer, so a caller can push several frames through the same buffer and
//! divide by the frame count afterwards.

use tracing::trace;

use super::neighborhood::Neighborhood;
use super::tile::TileOrder;
use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::common::frame_len;

/// Reconstruct one RGB triple from the site at `(x, y)`.
#[inline]
fn reconstruct(
    raw: &[u8],
    width: usize,
    height: usize,
    x: usize,
    y: usize,
    order: TileOrder,
) -> [u8; 3] {
    let here = raw[y * width + x];
    let nb = Neighborhood::gather(raw, width, height, x, y);
    let hn = nb.horizontal();
    let vn = nb.vertical();
    let di = nb.diagonal();

    let odd_sum = (x + y) & 1 == 1;
    let green_site = odd_sum == order.green_on_odd_sum();
    let odd_row = y & 1 == 1;

    let (r, g, b) = if green_site {
        if odd_row { (hn, here, vn) } else { (vn, here, hn) }
    } else {
        let g = ((hn as u16 + vn as u16) / 2) as u8;
        if odd_row { (here, g, di) } else { (di, g, here) }
    };

    if order.swaps_red_blue() { [b, g, r] } else { [r, g, b] }
}

/// Demosaic an 8-bit Bayer frame and add the result into `output`.
///
/// `output` is interleaved RGB, three entries per pixel. Existing contents are
/// kept and summed with. Fails with [`ConversionError::InsufficientInput`]
/// when `raw` holds fewer than `width * height` samples, and with
/// [`ConversionError::OutputTooSmall`] when `output` cannot take every pixel;
/// neither failure touches `output`.
pub fn accumulate(
    output: &mut [u32],
    raw: &[u8],
    width: usize,
    height: usize,
    order: TileOrder,
) -> Result<()> {
    let npix = frame_len(width, height)?;
    if raw.len() < npix {
        return Err(ConversionError::InsufficientInput { expected: npix, got: raw.len() });
    }
    if output.len() < 3 * npix {
        return Err(ConversionError::OutputTooSmall { expected: 3 * npix, got: output.len() });
    }

    trace!(width, height, %order, "accumulating 8-bit bayer frame");

    // Row-major, matching the raw layout.
    for (i, px) in output[..3 * npix].chunks_exact_mut(3).enumerate() {
        let (x, y) = (i % width, i / width);
        let rgb = reconstruct(raw, width, height, x, y, order);
        for (acc, v) in px.iter_mut().zip(rgb) {
            *acc += v as u32;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORDERS: [TileOrder; 4] = [
        TileOrder::Bggr,
        TileOrder::Gbrg,
        TileOrder::Grbg,
        TileOrder::Rggb,
    ];

    fn gradient(width: usize, height: usize) -> Vec<u8> {
        (0..width * height).map(|i| ((i * 37 + 11) % 251) as u8).collect()
    }

    fn run(raw: &[u8], width: usize, height: usize, order: TileOrder) -> Vec<u32> {
        let mut out = vec![0u32; 3 * width * height];
        accumulate(&mut out, raw, width, height, order).unwrap();
        out
    }

    #[test]
    fn test_zero_frame_yields_zero_sums() {
        let raw = vec![0u8; 16];
        let mut out = vec![0u32; 48];
        let result = accumulate(&mut out, &raw, 4, 4, TileOrder::Bggr);
        assert!(result.is_ok());
        assert_eq!(out.len(), 48);
        assert!(out.iter().all(|&v| v == 0));
    }

    #[test]
    fn test_insufficient_input_leaves_output_untouched() {
        let raw = [1u8, 2, 3];
        let mut out = vec![7u32; 12];
        let result = accumulate(&mut out, &raw, 2, 2, TileOrder::Bggr);
        assert!(matches!(
            result,
            Err(ConversionError::InsufficientInput { expected: 4, got: 3 })
        ));
        assert!(out.iter().all(|&v| v == 7));
    }

    #[test]
    fn test_short_output_is_rejected() {
        let raw = [0u8; 4];
        let mut out = vec![0u32; 11];
        let result = accumulate(&mut out, &raw, 2, 2, TileOrder::Bggr);
        assert!(matches!(result, Err(ConversionError::OutputTooSmall { expected: 12, got: 11 })));
    }

    #[test]
    fn test_longer_raw_buffer_is_accepted() {
        let raw = vec![5u8; 20];
        let out = run(&raw, 4, 4, TileOrder::Bggr);
        assert!(out.iter().all(|&v| v == 5));
    }

    #[test]
    fn test_accumulation_adds_into_existing_sums() {
        let raw = gradient(6, 4);
        let single = run(&raw, 6, 4, TileOrder::Gbrg);

        let mut twice = vec![0u32; 3 * 6 * 4];
        accumulate(&mut twice, &raw, 6, 4, TileOrder::Gbrg).unwrap();
        accumulate(&mut twice, &raw, 6, 4, TileOrder::Gbrg).unwrap();

        let doubled: Vec<u32> = single.iter().map(|v| v * 2).collect();
        assert_eq!(twice, doubled);
    }

    #[test]
    fn test_bayer_tag_matches_bggr() {
        let raw = gradient(5, 5);
        assert_eq!(run(&raw, 5, 5, TileOrder::Bayer), run(&raw, 5, 5, TileOrder::Bggr));
    }

    #[test]
    fn test_red_blue_swap_orders() {
        let raw = gradient(6, 6);
        let swap = |v: Vec<u32>| -> Vec<u32> {
            v.chunks_exact(3).flat_map(|p| [p[2], p[1], p[0]]).collect()
        };
        assert_eq!(run(&raw, 6, 6, TileOrder::Rggb), swap(run(&raw, 6, 6, TileOrder::Bggr)));
        assert_eq!(run(&raw, 6, 6, TileOrder::Grbg), swap(run(&raw, 6, 6, TileOrder::Gbrg)));
    }

    #[test]
    fn test_bggr_sites_pass_through_raw_sample() {
        // 4x4 BGGR, interior red at (1, 1), blue at (2, 2), greens at (2, 1) and (1, 2).
        let raw = gradient(4, 4);
        let out = run(&raw, 4, 4, TileOrder::Bggr);
        let at = |x: usize, y: usize| &out[3 * (y * 4 + x)..3 * (y * 4 + x) + 3];

        assert_eq!(at(1, 1)[0], raw[5] as u32);
        assert_eq!(at(2, 2)[2], raw[10] as u32);
        assert_eq!(at(2, 1)[1], raw[6] as u32);
        assert_eq!(at(1, 2)[1], raw[9] as u32);
    }

    #[test]
    fn test_bggr_interior_values() {
        // 3x3 frame, center (1, 1) is a red site under BGGR.
        // 10 20 30
        // 40 50 60
        // 70 80 90
        let raw = [10u8, 20, 30, 40, 50, 60, 70, 80, 90];
        let out = run(&raw, 3, 3, TileOrder::Bggr);
        let center = &out[12..15];
        // r = raw, g = ((40+60)/2 + (20+80)/2) / 2, b = (10+30+70+90) / 4
        assert_eq!(center, &[50, 50, 50]);

        // (1, 0) is green on an even row: red from vertical, blue from horizontal.
        // Vertical reflects to (1, 1) twice: 50. Horizontal: (10 + 30) / 2 = 20.
        assert_eq!(&out[3..6], &[50, 20, 20]);

        // (0, 0) is blue: g = ((20+20)/2 + (40+40)/2) / 2 = 30, r = diagonal = 50.
        assert_eq!(&out[0..3], &[50, 30, 10]);
    }

    #[test]
    fn test_border_probes_for_every_order() {
        let (w, h) = (7, 5);
        let raw = gradient(w, h);
        let probes = [
            (0, 0),
            (w - 1, 0),
            (0, h - 1),
            (w - 1, h - 1),
            (w / 2, 0),
            (w / 2, h - 1),
            (0, h / 2),
            (w - 1, h / 2),
        ];
        for order in ORDERS {
            let out = run(&raw, w, h, order);
            assert_eq!(out.len(), 3 * w * h);
            for &(x, y) in &probes {
                let px = &out[3 * (y * w + x)..3 * (y * w + x) + 3];
                // The site's own sample always lands in exactly its channel.
                let own = raw[y * w + x] as u32;
                assert!(px.contains(&own), "{} at ({}, {}): {:?} lacks {}", order, x, y, px, own);
                assert!(px.iter().all(|&v| v <= 255));
            }
        }
    }

    #[test]
    fn test_degenerate_frames() {
        let out = run(&[3u8, 9, 3], 3, 1, TileOrder::Bggr);
        assert_eq!(out.len(), 9);
        let out = run(&[42u8], 1, 1, TileOrder::Rggb);
        assert_eq!(out, vec![42, 42, 42]);
        let mut empty: Vec<u32> = Vec::new();
        assert!(accumulate(&mut empty, &[], 0, 0, TileOrder::Bggr).is_ok());
    }
}
