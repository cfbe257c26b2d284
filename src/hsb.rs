//! HSB view of a [`Color`].

use crate::color::Color;
use crate::math;

/// Hue-saturation-brightness color.
///
/// - `hue`: degrees, 0–360
/// - `saturation`: 0.0 (gray) to 1.0 (fully saturated)
/// - `brightness`: 0.0 (black) to 1.0
///
/// Always derived from a [`Color`]; the selection model never stores one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HsbColor {
    pub hue: f64,
    pub saturation: f64,
    pub brightness: f64,
    pub alpha: f64,
}

impl HsbColor {
    pub fn new(hue: f64, saturation: f64, brightness: f64, alpha: f64) -> Self {
        Self {
            hue,
            saturation,
            brightness,
            alpha,
        }
    }

    /// Convert back to RGBA. Alpha passes through unchanged.
    pub fn to_color(&self) -> Color {
        let (r, g, b) = math::hsb_to_rgb(self.hue, self.saturation, self.brightness);
        Color::from_rgba(r, g, b, self.alpha)
    }
}

impl From<Color> for HsbColor {
    fn from(c: Color) -> Self {
        let (hue, saturation, brightness) = math::rgb_to_hsb(c.r(), c.g(), c.b());
        Self {
            hue,
            saturation,
            brightness,
            alpha: c.a(),
        }
    }
}

impl From<HsbColor> for Color {
    fn from(hsb: HsbColor) -> Self {
        hsb.to_color()
    }
}
