//! Debayering module for converting Bayer pattern raw frames to RGB
//!
//! Two strategies live here: [`accumulate`] sums a neighbor-averaged 8-bit
//! reconstruction into a running buffer, and [`interpolate`] rebuilds 10-bit
//! BGGR frames by copying the nearest same-color site.

mod accumulator;
mod interpolator;
mod neighborhood;
mod scale;
pub mod cpu_debayer;
pub mod tile;
pub mod types;

pub use accumulator::accumulate;
pub use interpolator::{blue_at, green_at, interpolate, red_at, INTERPOLATED_ORDER};
pub use neighborhood::Neighborhood;
pub use scale::{clip, rescale_10bit, TEN_BIT_MAX};
pub use cpu_debayer::CpuDebayer;
pub use tile::{Site, TileOrder};
pub use types::RgbImageData;
