//! Page Indicator Testing Utilities
//!
//! Headless `Gray4` canvas for render tests: draw with embedded-graphics,
//! then assert on pixels, count colors, scan rows for dots, and dump PNG
//! screenshots or ASCII frames.
//!
//! # Quick start
//!
//! ```
//! use paging_testing::TestCanvas;
//! use embedded_graphics::{pixelcolor::Gray4, prelude::*, primitives::{PrimitiveStyle, Rectangle}};
//!
//! let mut canvas = TestCanvas::new(64, 16);
//!
//! Rectangle::new(Point::new(10, 4), Size::new(8, 8))
//!     .into_styled(PrimitiveStyle::with_fill(Gray4::BLACK))
//!     .draw(&mut canvas)
//!     .unwrap();
//!
//! canvas.assert_pixel(12, 6, Gray4::BLACK).unwrap();
//! assert_eq!(canvas.row_spans(6).len(), 1);
//! ```

#![warn(clippy::all)]
#![warn(clippy::dbg_macro)]
#![allow(clippy::module_name_repetitions)]
// Test-support crate: index math is bounded by the canvas size.
#![allow(clippy::arithmetic_side_effects, clippy::indexing_slicing)]

use std::path::Path;

use embedded_graphics::{pixelcolor::Gray4, prelude::*, primitives::Rectangle};

// ─────────────────────────────────────────────────────────────────────────────
// Span
// ─────────────────────────────────────────────────────────────────────────────

/// A horizontal run of same-colored, non-background pixels on one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// First x coordinate of the run.
    pub start: u32,
    /// Number of pixels in the run.
    pub len: u32,
    /// Color of the run.
    pub color: Gray4,
}

impl Span {
    /// Center x of the run (rounded down).
    pub fn center(&self) -> u32 {
        self.start + self.len / 2
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// TestCanvas
// ─────────────────────────────────────────────────────────────────────────────

/// In-memory `Gray4` framebuffer implementing [`DrawTarget`].
///
/// Starts filled with the background color (white unless created with
/// [`TestCanvas::with_background`]). Out-of-bounds pixels are dropped, the
/// way a real panel driver ignores them.
#[derive(Debug, Clone, PartialEq)]
pub struct TestCanvas {
    width: u32,
    height: u32,
    background: Gray4,
    pixels: Vec<Gray4>,
}

impl TestCanvas {
    /// Create a white canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_background(width, height, Gray4::WHITE)
    }

    /// Create a canvas filled with `background`.
    pub fn with_background(width: u32, height: u32, background: Gray4) -> Self {
        Self {
            width,
            height,
            background,
            pixels: vec![background; (width as usize) * (height as usize)],
        }
    }

    /// Reset every pixel to the background color.
    pub fn reset(&mut self) {
        self.pixels.fill(self.background);
    }

    /// Background color the canvas was created with.
    pub fn background(&self) -> Gray4 {
        self.background
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height).then(|| (y as usize) * (self.width as usize) + x as usize)
    }

    // ── Framebuffer access ───────────────────────────────────────────────────

    /// Return the color at `(x, y)`, or `None` if out of bounds.
    pub fn pixel_at(&self, x: u32, y: u32) -> Option<Gray4> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    // ── Pixel assertions ─────────────────────────────────────────────────────

    /// Assert that pixel `(x, y)` has the expected luma.
    ///
    /// Returns `Err` with a descriptive message on mismatch.
    pub fn assert_pixel(&self, x: u32, y: u32, expected: Gray4) -> Result<(), String> {
        let actual = self
            .pixel_at(x, y)
            .ok_or_else(|| format!("Pixel ({x}, {y}) is out of bounds"))?;
        if actual.luma() != expected.luma() {
            Err(format!(
                "assert_pixel({x}, {y}): expected luma {}, got luma {}",
                expected.luma(),
                actual.luma()
            ))
        } else {
            Ok(())
        }
    }

    /// Assert that every pixel inside `rect` has the given color.
    pub fn assert_region_uniform(&self, rect: Rectangle, color: Gray4) -> Result<(), String> {
        let total = rect.size.width as usize * rect.size.height as usize;
        let matching = self.pixel_count_of_color(rect, color);
        if matching == total {
            Ok(())
        } else {
            Err(format!(
                "assert_region_uniform: {} of {total} pixels in {rect:?} differ from luma {}",
                total - matching,
                color.luma()
            ))
        }
    }

    /// Assert that `rect` contains **at least one** pixel with the given color.
    pub fn assert_region_contains(&self, rect: Rectangle, color: Gray4) -> Result<(), String> {
        if self.pixel_count_of_color(rect, color) > 0 {
            Ok(())
        } else {
            Err(format!(
                "assert_region_contains: no pixel with luma {} found in {rect:?}",
                color.luma()
            ))
        }
    }

    /// Count how many pixels in `rect` match `color`'s luma.
    pub fn pixel_count_of_color(&self, rect: Rectangle, color: Gray4) -> usize {
        rect.points()
            .filter_map(|p| {
                let x = u32::try_from(p.x).ok()?;
                let y = u32::try_from(p.y).ok()?;
                self.pixel_at(x, y)
            })
            .filter(|c| c.luma() == color.luma())
            .count()
    }

    /// Runs of non-background pixels on row `y`, left to right.
    ///
    /// Drawing a strip of dots and scanning its center row yields one span per
    /// visible dot.
    pub fn row_spans(&self, y: u32) -> Vec<Span> {
        let mut spans: Vec<Span> = Vec::new();
        for x in 0..self.width {
            let Some(color) = self.pixel_at(x, y) else {
                break;
            };
            if color == self.background {
                continue;
            }
            match spans.last_mut() {
                Some(last) if last.color == color && last.start + last.len == x => last.len += 1,
                _ => spans.push(Span {
                    start: x,
                    len: 1,
                    color,
                }),
            }
        }
        spans
    }

    // ── Output ───────────────────────────────────────────────────────────────

    /// Render the canvas as text, one character per pixel.
    ///
    /// Background is `.`, black is `#`, lighter grays step through `@%*+-`.
    pub fn to_ascii(&self) -> String {
        const RAMP: [char; 6] = ['#', '@', '%', '*', '+', '-'];
        let mut out = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                let color = self.pixel_at(x, y).unwrap_or(self.background);
                let ch = if color == self.background {
                    '.'
                } else {
                    let bucket = (usize::from(color.luma()) * RAMP.len()) / 16;
                    RAMP[bucket.min(RAMP.len() - 1)]
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }

    /// Save the canvas as an 8-bit grayscale PNG.
    pub fn screenshot(&self, path: impl AsRef<Path>) -> image::ImageResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let image = image::GrayImage::from_fn(self.width, self.height, |x, y| {
            let luma = self.pixel_at(x, y).unwrap_or(self.background).luma();
            // 4-bit to 8-bit: 0xF * 17 = 0xFF
            image::Luma([luma * 17])
        });
        image.save(path)?;
        Ok(())
    }
}

impl OriginDimensions for TestCanvas {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for TestCanvas {
    type Color = Gray4;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let (Ok(x), Ok(y)) = (u32::try_from(point.x), u32::try_from(point.y)) else {
                continue;
            };
            if let Some(i) = self.index(x, y) {
                self.pixels[i] = color;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use embedded_graphics::primitives::{Circle, PrimitiveStyle};

    #[test]
    fn test_new_canvas_is_white() {
        let canvas = TestCanvas::new(8, 4);
        canvas
            .assert_region_uniform(Rectangle::new(Point::zero(), Size::new(8, 4)), Gray4::WHITE)
            .unwrap();
        assert_eq!(canvas.pixel_at(8, 0), None);
    }

    #[test]
    fn test_out_of_bounds_draws_are_dropped() {
        let mut canvas = TestCanvas::new(8, 8);
        Circle::with_center(Point::new(0, 0), 6)
            .into_styled(PrimitiveStyle::with_fill(Gray4::BLACK))
            .draw(&mut canvas)
            .unwrap();
        canvas.assert_pixel(0, 0, Gray4::BLACK).unwrap();
        canvas.assert_pixel(7, 7, Gray4::WHITE).unwrap();
    }

    #[test]
    fn test_row_spans_split_on_color_and_gap() {
        let mut canvas = TestCanvas::new(20, 1);
        let pixels = [
            Pixel(Point::new(1, 0), Gray4::BLACK),
            Pixel(Point::new(2, 0), Gray4::BLACK),
            Pixel(Point::new(3, 0), Gray4::new(0x8)),
            Pixel(Point::new(10, 0), Gray4::BLACK),
        ];
        canvas.draw_iter(pixels).unwrap();
        let spans = canvas.row_spans(0);
        assert_eq!(
            spans,
            vec![
                Span { start: 1, len: 2, color: Gray4::BLACK },
                Span { start: 3, len: 1, color: Gray4::new(0x8) },
                Span { start: 10, len: 1, color: Gray4::BLACK },
            ]
        );
        assert_eq!(spans[0].center(), 2);
    }

    #[test]
    fn test_pixel_count_and_contains() {
        let mut canvas = TestCanvas::new(10, 10);
        Rectangle::new(Point::new(2, 2), Size::new(3, 3))
            .into_styled(PrimitiveStyle::with_fill(Gray4::BLACK))
            .draw(&mut canvas)
            .unwrap();
        let all = Rectangle::new(Point::zero(), Size::new(10, 10));
        assert_eq!(canvas.pixel_count_of_color(all, Gray4::BLACK), 9);
        assert!(canvas.assert_region_contains(all, Gray4::BLACK).is_ok());
        assert!(canvas.assert_region_uniform(all, Gray4::WHITE).is_err());
        canvas.reset();
        assert_eq!(canvas.pixel_count_of_color(all, Gray4::BLACK), 0);
    }

    #[test]
    fn test_ascii_marks_background_and_ink() {
        let mut canvas = TestCanvas::new(3, 1);
        canvas
            .draw_iter([Pixel(Point::new(1, 0), Gray4::BLACK)])
            .unwrap();
        assert_eq!(canvas.to_ascii(), ".#.\n");
    }

    #[test]
    fn test_screenshot_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("shot.png");
        let canvas = TestCanvas::new(4, 4);
        canvas.screenshot(&path).unwrap();
        assert!(path.exists());
    }
}
