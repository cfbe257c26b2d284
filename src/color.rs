//! Color type — the canonical RGBA representation for the selection model.
//!
//! Stores RGBA as f64 values in 0.0–1.0 range. Equality is exact per
//! channel: two colors that would render identically but differ in the last
//! bit are different colors.

use std::fmt;
use std::str::FromStr;

use crate::constants::CHANNEL_MAX;
use crate::error::{ColorError, Result};
use crate::hsb::HsbColor;

/// One of the four color channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
}

impl Channel {
    /// All channels in notification order.
    pub const ALL: [Channel; 4] = [Channel::Red, Channel::Green, Channel::Blue, Channel::Alpha];

    pub fn name(self) -> &'static str {
        match self {
            Channel::Red => "Red",
            Channel::Green => "Green",
            Channel::Blue => "Blue",
            Channel::Alpha => "Alpha",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// RGBA color with components in the 0.0–1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
}

impl Color {
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    /// Red component (0.0–1.0).
    pub fn r(&self) -> f64 {
        self.r
    }
    /// Green component (0.0–1.0).
    pub fn g(&self) -> f64 {
        self.g
    }
    /// Blue component (0.0–1.0).
    pub fn b(&self) -> f64 {
        self.b
    }
    /// Alpha component (0.0–1.0).
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Normalized value of a single channel.
    pub fn channel(&self, channel: Channel) -> f64 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
            Channel::Alpha => self.a,
        }
    }

    /// Byte projection of a single channel: `round(value * 255)`.
    pub fn channel_byte(&self, channel: Channel) -> u8 {
        to_byte(self.channel(channel))
    }

    /// Copy of this color with one channel replaced; the other three are
    /// carried over bit for bit.
    ///
    /// `value` is clamped into 0.0–1.0 and NaN becomes 0.0.
    pub fn with_channel(&self, channel: Channel, value: f64) -> Self {
        let value = clamp_unit(value);
        let mut next = *self;
        match channel {
            Channel::Red => next.r = value,
            Channel::Green => next.g = value,
            Channel::Blue => next.b = value,
            Channel::Alpha => next.a = value,
        }
        next
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

fn to_byte(value: f64) -> u8 {
    (value * CHANNEL_MAX).round().clamp(0.0, CHANNEL_MAX) as u8
}

pub(crate) fn from_byte(value: u8) -> f64 {
    value as f64 / CHANNEL_MAX
}

impl Color {
    /// Create from 0–255 RGB values with full opacity.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 255)
    }

    /// Create from 0–255 RGBA values.
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: from_byte(r),
            g: from_byte(g),
            b: from_byte(b),
            a: from_byte(a),
        }
    }

    /// Create from a packed `0xRRGGBBAA` value.
    pub fn from_u32(rgba: u32) -> Self {
        let [r, g, b, a] = rgba.to_be_bytes();
        Self::from_rgba8(r, g, b, a)
    }

    /// Convert to 0–255 RGBA tuple.
    pub fn to_rgba8(&self) -> (u8, u8, u8, u8) {
        (to_byte(self.r), to_byte(self.g), to_byte(self.b), to_byte(self.a))
    }

    /// Create from f64 RGBA, clamping each component into 0.0–1.0.
    ///
    /// NaN components become 0.0.
    pub fn from_rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: clamp_unit(r),
            g: clamp_unit(g),
            b: clamp_unit(b),
            a: clamp_unit(a),
        }
    }

    /// Create from f64 RGBA, rejecting any component outside 0.0–1.0.
    pub fn try_from_rgba(r: f64, g: f64, b: f64, a: f64) -> Result<Self> {
        for (component, value) in Channel::ALL.into_iter().zip([r, g, b, a]) {
            if !(0.0..=1.0).contains(&value) {
                return Err(ColorError::ComponentOutOfRange { component, value });
            }
        }
        Ok(Self { r, g, b, a })
    }

    /// Parse a hex string (with or without `#`, 3, 6, or 8 chars).
    ///
    /// 8-char hex is interpreted as RRGGBBAA. 3 and 6-char hex default to full opacity.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let stripped = hex.trim().trim_start_matches('#');
        if !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let byte = |range: std::ops::Range<usize>| u8::from_str_radix(&stripped[range], 16).ok();
        match stripped.len() {
            3 => {
                let r = byte(0..1)?;
                let g = byte(1..2)?;
                let b = byte(2..3)?;
                Some(Self::from_rgb8(r * 17, g * 17, b * 17))
            }
            6 => Some(Self::from_rgb8(byte(0..2)?, byte(2..4)?, byte(4..6)?)),
            8 => Some(Self::from_rgba8(
                byte(0..2)?,
                byte(2..4)?,
                byte(4..6)?,
                byte(6..8)?,
            )),
            _ => None,
        }
    }

    /// Format as uppercase hex (no `#` prefix).
    ///
    /// Returns 6 chars (RRGGBB) when fully opaque, 8 chars (RRGGBBAA) otherwise.
    pub fn to_hex(&self) -> String {
        let (r, g, b, a) = self.to_rgba8();
        if a == 255 {
            format!("{:02X}{:02X}{:02X}", r, g, b)
        } else {
            format!("{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
        }
    }

    /// Create from HSB (hue in degrees, the rest 0.0–1.0).
    pub fn from_hsb(h: f64, s: f64, b: f64, a: f64) -> Self {
        HsbColor::new(h, s, b, a).to_color()
    }

    /// Convert to HSB. Recomputed on every call.
    pub fn to_hsb(&self) -> HsbColor {
        HsbColor::from(*self)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s).ok_or_else(|| ColorError::InvalidHex(s.to_string()))
    }
}

/// Hashable exact-bits key for indexing colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct ColorKey([u64; 4]);

impl From<Color> for ColorKey {
    fn from(c: Color) -> Self {
        // +0.0 and -0.0 compare equal, so they must share a key
        let bits = |v: f64| if v == 0.0 { 0 } else { v.to_bits() };
        ColorKey([bits(c.r), bits(c.g), bits(c.b), bits(c.a)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn byte_projection_rounds() {
        let c = Color::from_rgba(0.5, 0.2, 1.0, 0.0);
        assert_eq!(c.to_rgba8(), (128, 51, 255, 0));
        assert_eq!(c.channel_byte(Channel::Green), 51);
    }

    #[test]
    fn bytes_survive_the_float_trip() {
        for v in 0..=255u8 {
            assert_eq!(Color::from_rgb8(v, 0, 0).channel_byte(Channel::Red), v);
        }
    }

    #[test]
    fn equality_is_exact() {
        let a = Color::from_rgba(0.5, 0.5, 0.5, 1.0);
        let b = Color::from_rgba(0.5 + 1e-12, 0.5, 0.5, 1.0);
        assert_ne!(a, b);
        assert_eq!(a.to_rgba8(), b.to_rgba8());
    }

    #[test]
    fn with_channel_leaves_other_channels_untouched() {
        let c = Color::from_rgba(0.1, 0.2, 0.3, 0.4);
        let d = c.with_channel(Channel::Blue, 0.9);
        assert_eq!(d.r().to_bits(), c.r().to_bits());
        assert_eq!(d.g().to_bits(), c.g().to_bits());
        assert_eq!(d.a().to_bits(), c.a().to_bits());
        assert_eq!(d.b(), 0.9);
    }

    #[test]
    fn with_channel_clamps_and_zeroes_nan() {
        let c = Color::BLACK;
        assert_eq!(c.with_channel(Channel::Red, 5.0).r(), 1.0);
        assert_eq!(c.with_channel(Channel::Green, -0.25).g(), 0.0);
        let nan = c.with_channel(Channel::Blue, f64::NAN);
        assert_eq!(nan.b(), 0.0);
        assert_eq!(nan, c.with_channel(Channel::Blue, f64::NAN));
    }

    #[test]
    fn from_rgba_clamps() {
        let c = Color::from_rgba(-0.5, 1.5, f64::NAN, 0.25);
        assert_eq!(c, Color::from_rgba(0.0, 1.0, 0.0, 0.25));
    }

    #[test]
    fn try_from_rgba_rejects_out_of_range() {
        assert_eq!(
            Color::try_from_rgba(0.0, 1.2, 0.0, 1.0),
            Err(ColorError::ComponentOutOfRange {
                component: Channel::Green,
                value: 1.2
            })
        );
        assert!(Color::try_from_rgba(0.0, 0.0, f64::NAN, 1.0).is_err());
        assert!(Color::try_from_rgba(0.0, 0.5, 1.0, 1.0).is_ok());
    }

    #[test]
    fn hex_parsing() {
        assert_eq!(Color::from_hex("#F00"), Some(Color::from_rgb8(255, 0, 0)));
        assert_eq!(Color::from_hex("3B82F6"), Some(Color::from_rgb8(0x3B, 0x82, 0xF6)));
        assert_eq!(
            Color::from_hex("11223380"),
            Some(Color::from_rgba8(0x11, 0x22, 0x33, 0x80))
        );
        assert_eq!(Color::from_hex("12345"), None);
        assert_eq!(Color::from_hex("GGGGGG"), None);
        assert_eq!(
            "nope".parse::<Color>(),
            Err(ColorError::InvalidHex("nope".to_string()))
        );
    }

    #[test]
    fn hex_formatting() {
        assert_eq!(Color::from_rgb8(255, 128, 0).to_hex(), "FF8000");
        assert_eq!(Color::from_rgba8(0, 0, 0, 0).to_hex(), "00000000");
    }

    #[test]
    fn packed_u32() {
        assert_eq!(Color::from_u32(0xFF0000FF), Color::from_rgb8(255, 0, 0));
    }

    #[test]
    fn signed_zero_shares_key() {
        let a = Color::from_rgba(0.0, 0.0, 0.0, 1.0);
        let b = Color::BLACK.with_channel(Channel::Red, -0.0);
        assert_eq!(a, b);
        assert_eq!(ColorKey::from(a), ColorKey::from(b));
    }
}
