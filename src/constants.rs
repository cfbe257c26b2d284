//! Sizing and scale constants for the color model.

/// Largest wheel diameter that will be rasterized.
///
/// `floor(sqrt(i32::MAX)) / 4 - 4`, which keeps `diameter * diameter`
/// (and the byte offsets derived from it) well inside a signed 32-bit range.
pub const MAX_DIAMETER: u32 = 11_581;

/// Top of the byte channel scale.
pub const CHANNEL_MAX: f64 = 255.0;

/// Brightness used for every pixel of the wheel raster.
pub const WHEEL_BRIGHTNESS: f64 = 1.0;

/// Bytes per RGBA8 pixel
pub const BYTES_PER_PIXEL: usize = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_diameter_matches_overflow_bound() {
        let root = (i32::MAX as f64).sqrt().floor() as u32;
        assert_eq!(MAX_DIAMETER, root / 4 - 4);
        let pixels = MAX_DIAMETER as i64 * MAX_DIAMETER as i64;
        assert!(pixels * BYTES_PER_PIXEL as i64 <= i32::MAX as i64);
    }
}
