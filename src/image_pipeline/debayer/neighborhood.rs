//! 3x3 neighborhood sampling with border reflection.

/// Offset `coord` by `delta` (-1 or +1) inside `0..len`, mirroring through
/// `coord` when the step would leave the frame. A frame one sample wide has no
/// mirror, so the lookup collapses onto `coord` itself.
#[inline]
fn reflect(coord: usize, delta: isize, len: usize) -> usize {
    match coord.checked_add_signed(delta) {
        Some(c) if c < len => c,
        _ => match coord.checked_add_signed(-delta) {
            Some(c) if c < len => c,
            _ => coord,
        },
    }
}

/// The eight samples around one raw site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighborhood {
    pub nw: u8,
    pub n: u8,
    pub ne: u8,
    pub w: u8,
    pub e: u8,
    pub sw: u8,
    pub s: u8,
    pub se: u8,
}

impl Neighborhood {
    /// Gather the neighbors of `(x, y)`. Rows above the top edge are read from
    /// the row below and vice versa; columns are mirrored the same way, each
    /// axis independently.
    ///
    /// `raw` must hold at least `width * height` samples.
    pub fn gather(raw: &[u8], width: usize, height: usize, x: usize, y: usize) -> Self {
        let up = reflect(y, -1, height) * width;
        let down = reflect(y, 1, height) * width;
        let row = y * width;
        let left = reflect(x, -1, width);
        let right = reflect(x, 1, width);

        Self {
            nw: raw[up + left],
            n: raw[up + x],
            ne: raw[up + right],
            w: raw[row + left],
            e: raw[row + right],
            sw: raw[down + left],
            s: raw[down + x],
            se: raw[down + right],
        }
    }

    /// Mean of the west/east pair.
    #[inline]
    pub fn horizontal(&self) -> u8 {
        ((self.w as u16 + self.e as u16) / 2) as u8
    }

    /// Mean of the north/south pair.
    #[inline]
    pub fn vertical(&self) -> u8 {
        ((self.n as u16 + self.s as u16) / 2) as u8
    }

    /// Mean of the four diagonal neighbors.
    #[inline]
    pub fn diagonal(&self) -> u8 {
        ((self.nw as u16 + self.ne as u16 + self.sw as u16 + self.se as u16) / 4) as u8
    }
}
