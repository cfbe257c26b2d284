//! Circular HSB color wheel raster.
//!
//! Angle maps to hue and distance from the center maps to saturation, at
//! full brightness. The wheel is rasterized to an RGBA8 buffer; pixels
//! outside the disk are left fully transparent, which is what makes a pick
//! there come back empty.

use std::f64::consts::TAU;

use crate::color::Color;
use crate::constants::{BYTES_PER_PIXEL, MAX_DIAMETER, WHEEL_BRIGHTNESS};
use crate::math;

/// Canvas bounds a raster was generated for, anchored at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WheelRect {
    pub width: u32,
    pub height: u32,
}

impl WheelRect {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= 0.0 && y >= 0.0 && x < self.width as f64 && y < self.height as f64
    }
}

/// Side length of the wheel for a `width` x `height` canvas.
///
/// Silently clamped to [`MAX_DIAMETER`].
pub fn wheel_diameter(width: u32, height: u32) -> u32 {
    width.min(height).min(MAX_DIAMETER)
}

/// A rasterized wheel: `diameter` x `diameter` RGBA8 pixels, row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct WheelRaster {
    diameter: u32,
    rect: WheelRect,
    pixels: Vec<u8>,
}

impl std::fmt::Debug for WheelRaster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WheelRaster")
            .field("diameter", &self.diameter)
            .field("rect", &self.rect)
            .finish_non_exhaustive()
    }
}

/// Rasterize the wheel for a `width` x `height` canvas.
///
/// The disk has diameter [`wheel_diameter`]`(width, height)` and sits in the
/// top-left corner. The returned rect covers the whole requested canvas.
pub fn rasterize_wheel(width: u32, height: u32) -> WheelRaster {
    let diameter = wheel_diameter(width, height);
    if diameter < width.min(height) {
        log::debug!(
            "Wheel: {}x{} exceeds the raster cap, clamped to {}",
            width,
            height,
            diameter
        );
    }

    let side = diameter as usize;
    let radius = diameter / 2;
    let mut pixels = vec![0u8; side * side * BYTES_PER_PIXEL];

    if radius > 0 {
        let center = radius as f64;
        for py in 0..side {
            let dy = py as f64 - center;
            let row_offset = py * side * BYTES_PER_PIXEL;

            for px in 0..side {
                let dx = px as f64 - center;
                let saturation = (dx * dx + dy * dy).sqrt() / center;
                if saturation >= 1.0 {
                    continue; // outside the disk
                }

                let mut theta = dx.atan2(dy);
                if theta < 0.0 {
                    theta += TAU;
                }
                let hue = theta / TAU * 360.0;

                let (r, g, b) = math::hsb_to_rgb(hue, saturation, WHEEL_BRIGHTNESS);
                let offset = row_offset + px * BYTES_PER_PIXEL;
                pixels[offset] = (r * 255.0 + 0.5) as u8;
                pixels[offset + 1] = (g * 255.0 + 0.5) as u8;
                pixels[offset + 2] = (b * 255.0 + 0.5) as u8;
                pixels[offset + 3] = 255;
            }
        }
    }

    WheelRaster {
        diameter,
        rect: WheelRect::new(width, height),
        pixels,
    }
}

impl WheelRaster {
    pub fn diameter(&self) -> u32 {
        self.diameter
    }

    pub fn radius(&self) -> u32 {
        self.diameter / 2
    }

    /// Bounds of the canvas this raster was generated for, used for hit-testing.
    pub fn rect(&self) -> WheelRect {
        self.rect
    }

    /// Raw RGBA8 bytes, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// RGBA8 value at `(x, y)`, or `None` outside the raster square.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.diameter || y >= self.diameter {
            return None;
        }
        let offset = (y as usize * self.diameter as usize + x as usize) * BYTES_PER_PIXEL;
        let p = &self.pixels[offset..offset + BYTES_PER_PIXEL];
        Some([p[0], p[1], p[2], p[3]])
    }

    /// Color under a canvas point.
    ///
    /// `None` when the point is outside the canvas rect or outside the drawn
    /// disk.
    pub fn pick(&self, x: f64, y: f64) -> Option<Color> {
        if !self.rect.contains(x, y) {
            return None;
        }
        let [r, g, b, a] = self.pixel(x as u32, y as u32)?;
        if a == 0 {
            return None;
        }
        Some(Color::from_rgba8(r, g, b, a))
    }

    /// Hand the raster to a Floem rendering surface.
    #[cfg(feature = "floem")]
    pub fn to_image(&self) -> floem::peniko::Image {
        use floem::peniko::{self, Blob};
        use std::sync::Arc;

        let blob = Blob::new(Arc::new(self.pixels.clone()));
        peniko::Image::new(blob, peniko::Format::Rgba8, self.diameter, self.diameter)
    }
}

/// Size-keyed wheel raster owned by a single canvas.
///
/// [`ensure`](Self::ensure) regenerates the whole raster whenever the
/// requested size differs from the last one. The new raster is fully built
/// before the old one is dropped.
#[derive(Debug, Default)]
pub struct ColorWheel {
    raster: Option<WheelRaster>,
}

impl ColorWheel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raster for a `width` x `height` canvas.
    pub fn ensure(&mut self, width: u32, height: u32) -> &WheelRaster {
        let requested = WheelRect::new(width, height);
        let stale = self.raster.as_ref().map_or(true, |r| r.rect != requested);
        if stale {
            let raster = rasterize_wheel(width, height);
            log::debug!(
                "Wheel: regenerated for {}x{} (diameter {})",
                width,
                height,
                raster.diameter
            );
            self.raster = Some(raster);
        }
        self.raster.get_or_insert_with(|| rasterize_wheel(width, height))
    }

    /// Last generated raster, if any.
    pub fn raster(&self) -> Option<&WheelRaster> {
        self.raster.as_ref()
    }

    /// Pick against the last generated raster.
    pub fn pick(&self, x: f64, y: f64) -> Option<Color> {
        self.raster.as_ref()?.pick(x, y)
    }
}
