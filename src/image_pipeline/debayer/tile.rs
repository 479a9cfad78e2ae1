//! Bayer tile orders and the per-site color classifier shared by both
//! demosaicing strategies.

use std::fmt;
use std::str::FromStr;

use crate::image_pipeline::common::error::ConversionError;

/// Color sensed by a single sensor site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Site {
    Red,
    Green,
    Blue,
}

/// Which 2x2 repeating filter tile the raw frame follows.
///
/// ```text
/// Bggr      Gbrg      Grbg      Rggb
/// B G B G   G B G B   G R G R   R G R G
/// G R G R   R G R G   B G B G   G B G B
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileOrder {
    #[default]
    Bggr,
    Gbrg,
    Grbg,
    Rggb,
    /// Generic "Bayer" tag, laid out like [`TileOrder::Bggr`].
    Bayer,
}

use Site::*;

// Indexed by (y & 1) * 2 + (x & 1).
const BGGR: [Site; 4] = [Blue, Green, Green, Red];
const GBRG: [Site; 4] = [Green, Blue, Red, Green];
const GRBG: [Site; 4] = [Green, Red, Blue, Green];
const RGGB: [Site; 4] = [Red, Green, Green, Blue];

impl TileOrder {
    pub const ALL: [TileOrder; 5] = [
        TileOrder::Bggr,
        TileOrder::Gbrg,
        TileOrder::Grbg,
        TileOrder::Rggb,
        TileOrder::Bayer,
    ];

    fn table(self) -> &'static [Site; 4] {
        match self {
            TileOrder::Bggr | TileOrder::Bayer => &BGGR,
            TileOrder::Gbrg => &GBRG,
            TileOrder::Grbg => &GRBG,
            TileOrder::Rggb => &RGGB,
        }
    }

    /// Color of the sensor site at `(x, y)`.
    #[inline]
    pub fn site_at(self, x: usize, y: usize) -> Site {
        self.table()[(y & 1) * 2 + (x & 1)]
    }

    /// Whether green sites fall where `x + y` is odd.
    pub fn green_on_odd_sum(self) -> bool {
        self.site_at(0, 0) != Green
    }

    /// Whether the red and blue sites sit in the opposite horizontal order to
    /// [`TileOrder::Bggr`] on the same rows.
    pub fn swaps_red_blue(self) -> bool {
        matches!(self, TileOrder::Grbg | TileOrder::Rggb)
    }
}

impl fmt::Display for TileOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bggr => f.write_str("BGGR"),
            Self::Gbrg => f.write_str("GBRG"),
            Self::Grbg => f.write_str("GRBG"),
            Self::Rggb => f.write_str("RGGB"),
            Self::Bayer => f.write_str("BAYER"),
        }
    }
}

impl FromStr for TileOrder {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bggr" | "sbggr8" => Ok(TileOrder::Bggr),
            "gbrg" | "sgbrg8" => Ok(TileOrder::Gbrg),
            "grbg" | "sgrbg8" => Ok(TileOrder::Grbg),
            "rggb" | "srggb8" => Ok(TileOrder::Rggb),
            "bayer" => Ok(TileOrder::Bayer),
            _ => Err(ConversionError::UnsupportedFormat(format!(
                "unknown bayer tile order '{}'",
                s
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bggr_layout() {
        let t = TileOrder::Bggr;
        assert_eq!(t.site_at(0, 0), Blue);
        assert_eq!(t.site_at(1, 0), Green);
        assert_eq!(t.site_at(0, 1), Green);
        assert_eq!(t.site_at(1, 1), Red);
        assert_eq!(t.site_at(4, 2), Blue);
        assert_eq!(t.site_at(5, 7), Red);
    }

    #[test]
    fn test_bayer_alias_matches_bggr() {
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(TileOrder::Bayer.site_at(x, y), TileOrder::Bggr.site_at(x, y));
            }
        }
    }

    #[test]
    fn test_green_parity() {
        assert!(TileOrder::Bggr.green_on_odd_sum());
        assert!(TileOrder::Rggb.green_on_odd_sum());
        assert!(TileOrder::Bayer.green_on_odd_sum());
        assert!(!TileOrder::Gbrg.green_on_odd_sum());
        assert!(!TileOrder::Grbg.green_on_odd_sum());
    }

    #[test]
    fn test_every_tile_has_one_red_one_blue() {
        for order in TileOrder::ALL {
            let sites: Vec<Site> = (0..4).map(|i| order.site_at(i & 1, i >> 1)).collect();
            assert_eq!(sites.iter().filter(|&&s| s == Red).count(), 1, "{}", order);
            assert_eq!(sites.iter().filter(|&&s| s == Blue).count(), 1, "{}", order);
            assert_eq!(sites.iter().filter(|&&s| s == Green).count(), 2, "{}", order);
        }
    }

    #[test]
    fn test_tile_order_from_string() {
        assert_eq!("bggr".parse::<TileOrder>().unwrap(), TileOrder::Bggr);
        assert_eq!("GBRG".parse::<TileOrder>().unwrap(), TileOrder::Gbrg);
        assert_eq!("GrBg".parse::<TileOrder>().unwrap(), TileOrder::Grbg);
        assert_eq!("SRGGB8".parse::<TileOrder>().unwrap(), TileOrder::Rggb);
        assert_eq!("bayer".parse::<TileOrder>().unwrap(), TileOrder::Bayer);
        assert!("xtrans".parse::<TileOrder>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for order in TileOrder::ALL {
            assert_eq!(order.to_string().parse::<TileOrder>().unwrap(), order);
        }
    }
}
