//! Test doubles shared by the unit tests

use alloc::vec::Vec;
use core::convert::Infallible;

use embedded_hal::delay::DelayNs;

use crate::animate::RandomSource;
use crate::buffer::{Bitmap, PixelBuffer};
use crate::traits::{GlyphSource, Render, GLYPH_WIDTH};

pub fn buffer(blocks_per_row: usize, blocks_per_column: usize) -> PixelBuffer {
    PixelBuffer::with_blocks(blocks_per_row, blocks_per_column).unwrap()
}

/// Coordinates of every lit pixel, column by column
pub fn lit(buffer: &PixelBuffer) -> Vec<(i32, i32)> {
    let mut on = Vec::new();
    for x in 0..buffer.columns() as i32 {
        for y in 0..buffer.rows() as i32 {
            if buffer.get(x, y) {
                on.push((x, y));
            }
        }
    }
    on
}

/// Font with three glyphs: `|`, `.` and `'`
pub struct TestFont;

impl TestFont {
    /// Full left column
    pub const BAR: [u8; GLYPH_WIDTH] = [0xFF, 0, 0, 0, 0, 0, 0, 0];
    /// Bottom pixel of the left column
    pub const DOT: [u8; GLYPH_WIDTH] = [0x01, 0, 0, 0, 0, 0, 0, 0];
    /// Bottom-right pixel
    pub const CORNER: [u8; GLYPH_WIDTH] = [0, 0, 0, 0, 0, 0, 0, 0x01];
}

impl GlyphSource for TestFont {
    fn glyph(&self, ch: char) -> Option<[u8; GLYPH_WIDTH]> {
        match ch {
            '|' => Some(Self::BAR),
            '.' => Some(Self::DOT),
            '\'' => Some(Self::CORNER),
            _ => None,
        }
    }
}

/// Renderer that keeps a snapshot of every frame
#[derive(Default)]
pub struct RecordingRenderer {
    pub frames: Vec<Bitmap>,
}

impl Render for RecordingRenderer {
    type Error = Infallible;

    fn render(&mut self, buffer: &PixelBuffer) -> Result<(), Self::Error> {
        self.frames.push(buffer.to_bitmap());
        Ok(())
    }
}

/// Renderer that fails on the given call
pub struct FailingRenderer {
    pub fail_at: usize,
    pub calls: usize,
}

impl Render for FailingRenderer {
    type Error = &'static str;

    fn render(&mut self, _buffer: &PixelBuffer) -> Result<(), Self::Error> {
        self.calls += 1;
        if self.calls == self.fail_at {
            Err("bus fault")
        } else {
            Ok(())
        }
    }
}

/// Delay that only records what was asked of it
#[derive(Default)]
pub struct NoDelay {
    pub calls: usize,
    pub total_ns: u64,
}

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.calls += 1;
        self.total_ns += u64::from(ns);
    }
}

/// Random source replaying a fixed sequence
pub struct Sequence {
    values: Vec<u32>,
    next: usize,
}

impl Sequence {
    pub fn new(values: &[u32]) -> Self {
        Self {
            values: values.to_vec(),
            next: 0,
        }
    }
}

impl RandomSource for Sequence {
    fn next_u32(&mut self) -> u32 {
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}
