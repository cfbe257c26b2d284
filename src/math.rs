//! Color math — direct HSB conversions without external dependencies.
//! RGB components are normalized f64 in 0.0–1.0; hue is in degrees.

/// HSB → RGB. Hue in degrees (wrapped into 0–360), saturation and
/// brightness 0.0–1.0.
pub(crate) fn hsb_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    let chroma = v * s;
    let sector = h.rem_euclid(360.0) / 60.0;
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let m = v - chroma;

    let (r, g, b) = if sector < 1.0 {
        (chroma, x, 0.0)
    } else if sector < 2.0 {
        (x, chroma, 0.0)
    } else if sector < 3.0 {
        (0.0, chroma, x)
    } else if sector < 4.0 {
        (0.0, x, chroma)
    } else if sector < 5.0 {
        (x, 0.0, chroma)
    } else {
        (chroma, 0.0, x)
    };

    (r + m, g + m, b + m)
}

/// RGB → HSB. Returns hue in degrees 0–360 and saturation, brightness in 0.0–1.0.
///
/// Achromatic input has no defined hue and reports 0.
pub(crate) fn rgb_to_hsb(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let chroma = max - min;

    let s = if chroma == 0.0 { 0.0 } else { chroma / max };

    let sector = if chroma == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / chroma).rem_euclid(6.0)
    } else if max == g {
        (b - r) / chroma + 2.0
    } else {
        (r - g) / chroma + 4.0
    };

    let mut h = sector * 60.0;
    if h < 0.0 {
        h += 360.0;
    }
    if h.is_nan() {
        h = 0.0;
    }

    (h, s, max)
}
