/// Largest value a 10-bit sensor sample can take.
pub const TEN_BIT_MAX: u16 = (1 << 10) - 1;

/// Truncate to a byte, saturating at 255.
#[inline]
pub fn clip(v: f64) -> u8 {
    if v > 255.0 { 255 } else { v as u8 }
}

/// Map a 10-bit sample onto `0..=255`.
#[inline]
pub fn rescale_10bit(value: u16) -> u8 {
    clip(255.0 * value as f64 / TEN_BIT_MAX as f64)
}
