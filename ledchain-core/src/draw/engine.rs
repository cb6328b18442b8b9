//! Pixel, line, glyph and bitmap primitives

use core::ops::RangeInclusive;

use crate::buffer::{Bitmap, PixelBuffer};
use crate::traits::{GlyphError, GlyphSource, GLYPH_WIDTH};

use super::DrawMode;

/// Drawing state for a session
///
/// Holds only the current draw mode; the buffer is passed to every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DrawEngine {
    mode: DrawMode,
}

impl DrawEngine {
    /// Create an engine in `Set` mode
    pub const fn new() -> Self {
        Self {
            mode: DrawMode::Set,
        }
    }

    /// Get the current draw mode
    pub const fn mode(&self) -> DrawMode {
        self.mode
    }

    /// Change the draw mode for all following primitives
    pub fn set_mode(&mut self, mode: DrawMode) {
        self.mode = mode;
    }

    /// Combine one source pixel into the buffer, clipping silently
    fn plot(&self, buffer: &mut PixelBuffer, x: i32, y: i32, source: bool) {
        if buffer.contains(x, y) {
            let value = self.mode.apply(source, buffer.get(x, y));
            buffer.set(x, y, value);
        }
    }

    /// Apply the draw mode to every pixel
    pub fn fill(&self, buffer: &mut PixelBuffer) {
        match self.mode {
            DrawMode::Set => buffer.fill(true),
            DrawMode::Clear => buffer.fill(false),
            DrawMode::Invert => buffer.invert(),
        }
    }

    /// Draw a single pixel; `(0, 0)` is the top-left corner
    pub fn draw_pixel(&self, buffer: &mut PixelBuffer, x: i32, y: i32) {
        self.plot(buffer, x, y, true);
    }

    /// Draw a horizontal line starting at its left end
    ///
    /// A negative start is moved to column 0 and `None` runs to the right
    /// edge.
    pub fn draw_horizontal_line(
        &self,
        buffer: &mut PixelBuffer,
        x: i32,
        y: i32,
        length: Option<usize>,
    ) {
        let start = x.max(0) as usize;
        let end = span_end(start, length, buffer.columns());
        for column in start..end {
            self.plot(buffer, column as i32, y, true);
        }
    }

    /// Draw a vertical line starting at its upper end
    ///
    /// A negative start is moved to row 0 and `None` runs to the bottom
    /// edge.
    pub fn draw_vertical_line(
        &self,
        buffer: &mut PixelBuffer,
        x: i32,
        y: i32,
        length: Option<usize>,
    ) {
        let start = y.max(0) as usize;
        let end = span_end(start, length, buffer.rows());
        for row in start..end {
            self.plot(buffer, x, row as i32, true);
        }
    }

    /// Draw a straight line between two points, both included
    ///
    /// Steps one pixel at a time along the longer axis and rounds the other
    /// coordinate to the nearest pixel. Points off the buffer are skipped;
    /// only the part of the longer axis that crosses the buffer is walked.
    pub fn draw_line(&self, buffer: &mut PixelBuffer, x1: i32, y1: i32, x2: i32, y2: i32) {
        let dx = i64::from(x2) - i64::from(x1);
        let dy = i64::from(y2) - i64::from(y1);

        if dx == 0 && dy == 0 {
            self.draw_pixel(buffer, x1, y1);
        } else if dx.abs() > dy.abs() {
            for offset in visible_offsets(x1, dx, buffer.columns()) {
                let rise = round_ratio(i128::from(dy) * i128::from(offset), i128::from(dx));
                let y = i64::from(y1) + rise;
                self.plot_wide(buffer, i64::from(x1) + offset, y);
            }
        } else {
            for offset in visible_offsets(y1, dy, buffer.rows()) {
                let run = round_ratio(i128::from(dx) * i128::from(offset), i128::from(dy));
                let x = i64::from(x1) + run;
                self.plot_wide(buffer, x, i64::from(y1) + offset);
            }
        }
    }

    fn plot_wide(&self, buffer: &mut PixelBuffer, x: i64, y: i64) {
        if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
            self.plot(buffer, x, y, true);
        }
    }

    /// Overlay an 8×8 glyph with its top-left corner at `(x, y)`
    ///
    /// Both set and unset glyph pixels go through the draw mode, so in
    /// `Set` mode the whole cell is overwritten. Cells past the edge of the
    /// coordinate space are skipped like any other off-buffer pixel.
    /// Returns the advance width.
    pub fn draw_char(
        &self,
        buffer: &mut PixelBuffer,
        x: i32,
        y: i32,
        glyph: &[u8; GLYPH_WIDTH],
    ) -> i32 {
        for (dx, column) in glyph.iter().enumerate() {
            for dy in 0..GLYPH_WIDTH {
                let source = column & (0x80 >> dy) != 0;
                if let (Some(px), Some(py)) = (shift(x, dx), shift(y, dy)) {
                    self.plot(buffer, px, py, source);
                }
            }
        }
        GLYPH_WIDTH as i32
    }

    /// Draw a string left to right starting at `(x, y)`
    ///
    /// Every character is looked up before anything is drawn, so an
    /// unmapped character leaves the buffer untouched. Returns the total
    /// advance.
    pub fn draw_string<G: GlyphSource + ?Sized>(
        &self,
        buffer: &mut PixelBuffer,
        font: &G,
        x: i32,
        y: i32,
        text: &str,
    ) -> Result<i32, GlyphError> {
        for ch in text.chars() {
            font.require(ch)?;
        }

        let mut cursor = x;
        let mut advance = 0i32;
        for ch in text.chars() {
            let glyph = font.require(ch)?;
            let width = self.draw_char(buffer, cursor, y, &glyph);
            cursor = cursor.saturating_add(width);
            advance = advance.saturating_add(width);
        }
        Ok(advance)
    }

    /// Overlay a bitmap with its top-left corner at `(x, y)`
    ///
    /// Short columns of a ragged bitmap are drawn as off pixels.
    pub fn draw_bitmap(&self, buffer: &mut PixelBuffer, bitmap: &Bitmap, x: i32, y: i32) {
        let height = bitmap.height();
        for bx in 0..bitmap.width() {
            for by in 0..height {
                if let (Some(px), Some(py)) = (shift(x, bx), shift(y, by)) {
                    self.plot(buffer, px, py, bitmap.get(bx, by));
                }
            }
        }
    }
}

/// End of a line span clamped to the buffer
fn span_end(start: usize, length: Option<usize>, limit: usize) -> usize {
    match length {
        Some(length) => start.saturating_add(length).min(limit),
        None => limit,
    }
}

/// `origin + offset`, or `None` past the end of `i32`
fn shift(origin: i32, offset: usize) -> Option<i32> {
    i32::try_from(offset).ok().and_then(|offset| origin.checked_add(offset))
}

/// Offsets from `start` toward `start + delta` that land in `0..limit`
///
/// The range may be empty, and runs low to high whatever the sign of
/// `delta`.
fn visible_offsets(start: i32, delta: i64, limit: usize) -> RangeInclusive<i64> {
    let start = i64::from(start);
    let last = i64::try_from(limit).unwrap_or(i64::MAX) - 1;
    let low = delta.min(0).max(-start);
    let high = delta.max(0).min(last - start);
    low..=high
}

/// `numerator / denominator` rounded to nearest, halves rounding up
fn round_ratio(numerator: i128, denominator: i128) -> i64 {
    let (numerator, denominator) = if denominator < 0 {
        (-numerator, -denominator)
    } else {
        (numerator, denominator)
    };
    let quotient = (2 * numerator + denominator).div_euclid(2 * denominator);
    i64::try_from(quotient).unwrap_or(if quotient < 0 { i64::MIN } else { i64::MAX })
}
