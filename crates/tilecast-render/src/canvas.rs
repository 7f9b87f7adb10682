//! Drawing surface.
//!
//! The renderer and minimap only talk to the [`Canvas`] trait. [`Framebuffer`]
//! is the in-memory implementation used by the viewer and the tests.

use std::path::Path;

use glam::DVec2;
use image::{Rgba, RgbaImage};
use tilecast_core::Rgb;

use crate::error::RenderError;
use crate::screenshot::save_screenshot;

/// Pixel drawing primitives. Coordinates are in pixels, origin top-left.
pub trait Canvas {
    /// Width and height in pixels.
    fn size(&self) -> (u32, u32);

    /// Fill the axis-aligned rectangle starting at `origin`.
    fn fill_rect(&mut self, origin: DVec2, size: DVec2, color: Rgb);

    /// Draw a one pixel wide line including both end points.
    fn line(&mut self, from: DVec2, to: DVec2, color: Rgb);

    /// Fill a circle.
    fn circle(&mut self, center: DVec2, radius: f64, color: Rgb);

    /// Fill the whole surface.
    fn clear(&mut self, color: Rgb) {
        let (w, h) = self.size();
        self.fill_rect(DVec2::ZERO, DVec2::new(f64::from(w), f64::from(h)), color);
    }
}

/// RGBA framebuffer backed by an [`RgbaImage`].
#[derive(Debug, Clone)]
pub struct Framebuffer {
    image: RgbaImage,
}

impl Framebuffer {
    /// Create a black framebuffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, Rgba(Rgb::BLACK.to_rgba())),
        }
    }

    /// Colour at a pixel, or `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        self.image
            .get_pixel_checked(x, y)
            .map(|p| Rgb::new(p.0[0], p.0[1], p.0[2]))
    }

    pub const fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Write the framebuffer to an image file (format from the extension).
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), RenderError> {
        save_screenshot(
            self.image.as_raw().clone(),
            self.image.width(),
            self.image.height(),
            path,
        )
    }

    #[inline]
    fn put(&mut self, x: i64, y: i64, color: Rgb) {
        if x < 0 || y < 0 || x >= i64::from(self.image.width()) || y >= i64::from(self.image.height())
        {
            return;
        }
        self.image
            .put_pixel(x as u32, y as u32, Rgba(color.to_rgba()));
    }
}

impl Canvas for Framebuffer {
    fn size(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    fn fill_rect(&mut self, origin: DVec2, size: DVec2, color: Rgb) {
        let (w, h) = self.size();
        let min = origin.round().max(DVec2::ZERO);
        let max = (origin + size)
            .round()
            .min(DVec2::new(f64::from(w), f64::from(h)));

        for y in min.y as u32..max.y.max(min.y) as u32 {
            for x in min.x as u32..max.x.max(min.x) as u32 {
                self.image.put_pixel(x, y, Rgba(color.to_rgba()));
            }
        }
    }

    fn line(&mut self, from: DVec2, to: DVec2, color: Rgb) {
        // Bresenham over the rounded end points.
        let (mut x0, mut y0) = (from.x.round() as i64, from.y.round() as i64);
        let (x1, y1) = (to.x.round() as i64, to.y.round() as i64);

        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.put(x0, y0, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    fn circle(&mut self, center: DVec2, radius: f64, color: Rgb) {
        let r = radius.max(0.0);
        let (cx, cy) = (center.x.round() as i64, center.y.round() as i64);
        let reach = r.ceil() as i64;
        let (w, h) = (i64::from(self.image.width()), i64::from(self.image.height()));

        // Only offsets that land on the canvas.
        for dy in (-reach).max(cy.saturating_neg())..=reach.min((h - 1).saturating_sub(cy)) {
            for dx in (-reach).max(cx.saturating_neg())..=reach.min((w - 1).saturating_sub(cx)) {
                if (dx as f64).hypot(dy as f64) <= r {
                    self.put(cx + dx, cy + dy, color);
                }
            }
        }
    }
}
