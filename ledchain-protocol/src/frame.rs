//! Frame encoding for the LED driver chain.
//!
//! A frame is one `(register, value)` byte pair per chip:
//! - REGISTER (1 byte): register address, see [`crate::reg`]
//! - VALUE (1 byte): data for that register
//!
//! Pairs are ordered from the far end of the chain to the near end.

use heapless::Vec;

use crate::layout::{ChainLayout, PixelSource, CHIP_SIZE, MAX_CHIPS};
use crate::reg;

/// Maximum complete frame size (one register/value pair per chip)
pub const MAX_FRAME_SIZE: usize = 2 * MAX_CHIPS;

/// One complete transmission for the chain
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame {
    bytes: Vec<u8, MAX_FRAME_SIZE>,
}

impl Frame {
    /// Create an empty frame
    pub const fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    fn push_pair(&mut self, register: u8, value: u8) {
        // Layouts never exceed MAX_CHIPS, so a frame cannot overflow
        let _ = self.bytes.push(register);
        let _ = self.bytes.push(value);
    }

    /// Raw bytes in transmission order
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of bytes in the frame
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Iterate over `(register, value)` pairs in transmission order
    pub fn pairs(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.bytes.chunks_exact(2).map(|pair| (pair[0], pair[1]))
    }
}

impl AsRef<[u8]> for Frame {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// Builds frames for a fixed chain layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChainEncoder {
    layout: ChainLayout,
}

impl ChainEncoder {
    /// Create an encoder for the given layout
    pub const fn new(layout: ChainLayout) -> Self {
        Self { layout }
    }

    /// Get the layout
    pub const fn layout(&self) -> &ChainLayout {
        &self.layout
    }

    /// Address a single chip, padding every other chip with no-ops
    ///
    /// Returns `None` if `chip` is not part of the chain. Such writes are
    /// dropped rather than treated as errors.
    pub fn write_register(&self, chip: usize, register: u8, value: u8) -> Option<Frame> {
        let chips = self.layout.chips();
        if chip >= chips {
            return None;
        }

        let mut frame = Frame::new();
        for _ in 0..(chips - chip - 1) {
            frame.push_pair(reg::NOOP, 0);
        }
        frame.push_pair(register, value);
        for _ in 0..chip {
            frame.push_pair(reg::NOOP, 0);
        }
        Some(frame)
    }

    /// Write the same register and value to every chip
    pub fn write_all(&self, register: u8, value: u8) -> Frame {
        let mut frame = Frame::new();
        for _ in 0..self.layout.chips() {
            frame.push_pair(register, value);
        }
        frame
    }

    /// Encode one local column (0-7) of every chip into a single frame
    ///
    /// Each chip receives its digit register for that column, with the
    /// top pixel of the block in the most significant bit.
    pub fn encode_column<P: PixelSource + ?Sized>(&self, pixels: &P, column: u8) -> Frame {
        let local = usize::from(column) % CHIP_SIZE;
        let mut frame = Frame::new();

        for chip in (0..self.layout.chips()).rev() {
            let value = match self.layout.chip_origin(chip) {
                Some((x0, y0)) => pack_column(pixels, x0 + local, y0),
                None => 0,
            };
            frame.push_pair(reg::digit(local as u8), value);
        }
        frame
    }

    /// Encode the whole grid as eight column frames
    pub fn encode_buffer<P: PixelSource + ?Sized>(&self, pixels: &P) -> [Frame; CHIP_SIZE] {
        core::array::from_fn(|column| self.encode_column(pixels, column as u8))
    }
}

/// Pack eight vertically adjacent pixels, top pixel first
fn pack_column<P: PixelSource + ?Sized>(pixels: &P, x: usize, y0: usize) -> u8 {
    (0..CHIP_SIZE).fold(0u8, |byte, row| {
        if pixels.pixel(x, y0 + row) {
            byte | (0x80 >> row)
        } else {
            byte
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Pixel grid backed by a closure
    struct FnPixels<F: Fn(usize, usize) -> bool>(F);

    impl<F: Fn(usize, usize) -> bool> PixelSource for FnPixels<F> {
        fn pixel(&self, x: usize, y: usize) -> bool {
            (self.0)(x, y)
        }
    }

    fn encoder(row: usize, column: usize) -> ChainEncoder {
        ChainEncoder::new(ChainLayout::new(row, column).unwrap())
    }

    #[test]
    fn test_write_register_pads_with_noops() {
        let frame = encoder(3, 1).write_register(1, reg::INTENSITY, 4).unwrap();
        assert_eq!(
            frame.as_bytes(),
            &[reg::NOOP, 0, reg::INTENSITY, 4, reg::NOOP, 0]
        );
    }

    #[test]
    fn test_write_register_first_chip_is_last_pair() {
        let frame = encoder(3, 1).write_register(0, reg::SHUTDOWN, 1).unwrap();
        assert_eq!(frame.as_bytes(), &[0, 0, 0, 0, reg::SHUTDOWN, 1]);
    }

    #[test]
    fn test_write_register_out_of_chain_is_dropped() {
        assert_eq!(encoder(3, 1).write_register(3, reg::INTENSITY, 4), None);
    }

    #[test]
    fn test_write_all_repeats_pair() {
        let frame = encoder(2, 2).write_all(reg::SCAN_LIMIT, 7);
        assert_eq!(frame.len(), 8);
        assert!(frame.pairs().all(|pair| pair == (reg::SCAN_LIMIT, 7)));
    }

    #[test]
    fn test_encode_blank_buffer() {
        let frames = encoder(3, 1).encode_buffer(&FnPixels(|_, _| false));
        assert_eq!(frames.len(), 8);
        for (column, frame) in frames.iter().enumerate() {
            assert_eq!(frame.len(), 6);
            for (register, value) in frame.pairs() {
                assert_eq!(register, column as u8 + 1);
                assert_eq!(value, 0);
            }
        }
    }

    #[test]
    fn test_encode_top_pixel_is_msb() {
        let frames = encoder(1, 1).encode_buffer(&FnPixels(|x, y| x == 2 && y == 0));
        assert_eq!(frames[2].as_bytes(), &[reg::DIGIT2, 0x80]);
        assert_eq!(frames[1].as_bytes(), &[reg::DIGIT1, 0x00]);
    }

    #[test]
    fn test_encode_far_chip_goes_first() {
        // Light only the rightmost block of a 3x1 row
        let frames = encoder(3, 1).encode_buffer(&FnPixels(|x, _| x >= 16));
        assert_eq!(frames[0].as_bytes(), &[1, 0xFF, 1, 0x00, 1, 0x00]);
    }

    #[test]
    fn test_encode_stacked_blocks() {
        // 1x2 grid: chip 1 is the lower block
        let frames = encoder(1, 2).encode_buffer(&FnPixels(|_, y| y == 15));
        assert_eq!(frames[5].as_bytes(), &[6, 0x01, 6, 0x00]);
    }

    proptest! {
        #[test]
        fn prop_write_register_places_pair(chips in 1usize..=16, chip in 0usize..16) {
            let encoder = encoder(chips, 1);
            match encoder.write_register(chip, reg::INTENSITY, 9) {
                Some(frame) => {
                    prop_assert!(chip < chips);
                    prop_assert_eq!(frame.len(), 2 * chips);
                    let pairs: heapless::Vec<(u8, u8), MAX_CHIPS> = frame.pairs().collect();
                    for (position, pair) in pairs.iter().enumerate() {
                        if position == chips - chip - 1 {
                            prop_assert_eq!(*pair, (reg::INTENSITY, 9));
                        } else {
                            prop_assert_eq!(*pair, (reg::NOOP, 0));
                        }
                    }
                }
                None => prop_assert!(chip >= chips),
            }
        }
    }
}
